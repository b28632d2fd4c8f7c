mod bot;
mod command;
mod command_props;
mod commands_list;
mod directory;
mod parse_error;
mod user_param;

pub use bot::Bot;
pub use command::*;
pub use command_props::CommandProps;
pub use commands_list::*;
pub use directory::{Directory, StaticDirectory};
pub use parse_error::CommandParseError;
pub use user_param::UserParam;
