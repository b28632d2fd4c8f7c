use std::str::FromStr;

use regex::Regex;
use strum::{EnumCount, EnumIter, EnumProperty};

use crate::availability::{parse_reason, Reason};

use super::command_props::CommandProps;
use super::parse_error::CommandParseError;
use super::user_param::UserParam;

lazy_static::lazy_static! {
    static ref HI_PATTERN: Regex = pattern(r"(?i)^\s*(?:hi|hello)\s*[!.]?\s*$");
    static ref HELP_PATTERN: Regex = pattern(r"(?i)^\s*help\s*[?]?\s*$");
    static ref WHERE_IS_PATTERN: Regex =
        pattern(r"(?i)^\s*where\s+(?:is|are)(?:\s+(?P<user>.*?))?\s*[?]?\s*$");
    static ref STATUS_PATTERN: Regex = pattern(r"(?i)^\s*i['’]?m\s+on(?:\s+(?P<rest>.*?))?\s*$");
    static ref KNOWN_STATUS_PATTERN: Regex = pattern(&format!(
        r"(?i)^\s*i['’]?m\s+(?P<rest>(?:{})\b.*?)\s*$",
        reason_alternation()
    ));
    static ref REASON_PREFIX_PATTERN: Regex = pattern(&format!(
        r"(?i)^(?P<status>{})\b\s*(?P<when>.*)$",
        reason_alternation()
    ));
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("command pattern must compile")
}

fn reason_alternation() -> String {
    Reason::phrases()
        .into_iter()
        .map(|phrase| regex::escape(phrase).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// The status and time words of an `I'm on ...` message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusRequest {
    pub reason: Reason,
    pub when: String,
}

impl FromStr for StatusRequest {
    type Err = CommandParseError;

    /// A known reason phrase may span several words; anything else takes the
    /// first word as the status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.trim();
        if rest.is_empty() {
            return Err(CommandParseError::ArgumentExpected(format!("status")));
        }

        if let Some(caps) = REASON_PREFIX_PATTERN.captures(rest) {
            let status = caps["status"].split_whitespace().collect::<Vec<_>>();
            return Ok(StatusRequest {
                reason: parse_reason(&status.join(" ")),
                when: caps["when"].trim().to_string(),
            });
        }

        let (status, when) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        Ok(StatusRequest {
            reason: parse_reason(status),
            when: when.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, EnumProperty, EnumIter, EnumCount)]
pub enum Command {
    #[strum(props(Cmd = "hi", Help = "Greeting someone"))]
    Hi,

    #[strum(props(Cmd = "help", Help = "List what I can do"))]
    Help,

    #[strum(props(
        Cmd = "where is",
        Args = "<user|everybody>",
        Help = "Finds if an user is available"
    ))]
    WhereIs(UserParam),

    #[strum(props(
        Cmd = "I'm on",
        Args = "<status> <when>",
        Help = "Creates a status for you, e.g. I'm on vacation from today until next week"
    ))]
    Status(StatusRequest),
}

impl Command {
    /// Whether both are the same command, whatever their arguments.
    pub fn is_same_kind(&self, other: &Command) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if HI_PATTERN.is_match(s) {
            return Ok(Command::Hi);
        }

        if HELP_PATTERN.is_match(s) {
            return Ok(Command::Help);
        }

        if let Some(caps) = WHERE_IS_PATTERN.captures(s) {
            let user = caps.name("user").map_or("", |m| m.as_str());
            return Ok(Command::WhereIs(user.parse()?));
        }

        if let Some(caps) = STATUS_PATTERN
            .captures(s)
            .or_else(|| KNOWN_STATUS_PATTERN.captures(s))
        {
            let rest = caps.name("rest").map_or("", |m| m.as_str());
            return Ok(Command::Status(rest.parse()?));
        }

        Err(Self::Err::NotRecognizedAsCommand)
    }
}

impl CommandProps for Command {
    fn cmd(&self) -> &str {
        self.get_str("Cmd").unwrap_or_default()
    }

    fn args(&self) -> &str {
        self.get_str("Args").unwrap_or_default()
    }

    fn help(&self) -> &str {
        self.get_str("Help").unwrap_or_default()
    }
}
