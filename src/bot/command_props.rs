use std::fmt::Debug;

pub trait CommandProps: Debug {
    fn cmd(&self) -> &str;
    fn args(&self) -> &str;
    fn help(&self) -> &str;

    fn is_visible(&self) -> bool {
        !self.help().is_empty()
    }
}
