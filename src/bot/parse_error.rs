#[derive(Debug, PartialEq)]
pub enum CommandParseError {
    NotRecognizedAsCommand,
    ArgumentExpected(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CommandParseError::NotRecognizedAsCommand => write!(f, "not a command"),
            CommandParseError::ArgumentExpected(arg) => write!(f, "{} is expected", arg),
        }
    }
}

impl std::error::Error for CommandParseError {}
