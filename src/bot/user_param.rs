use std::str::FromStr;

use regex::Regex;

use crate::availability::UserId;

use super::parse_error::CommandParseError;

lazy_static::lazy_static! {
    // Chat platforms render mentions as <@U024BE7LH> or <@U024BE7LH|alice>.
    static ref MENTION_PATTERN: Regex = Regex::new(r"^<@([A-Za-z0-9]+)(?:\|[^>]*)?>$")
        .expect("mention pattern must compile");
}

/// Who a `where is` question asks about.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserParam {
    #[default]
    Everybody,
    Member {
        id: UserId,
        /// The parameter as typed, used to answer back.
        text: String,
    },
}

impl UserParam {
    pub fn is_everybody(&self) -> bool {
        matches!(self, UserParam::Everybody)
    }
}

impl FromStr for UserParam {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let param = s.trim();
        if param.is_empty() {
            return Err(CommandParseError::ArgumentExpected(format!("user")));
        }

        if param.eq_ignore_ascii_case("everybody") || param.eq_ignore_ascii_case("everyone") {
            return Ok(UserParam::Everybody);
        }

        let id = match MENTION_PATTERN.captures(param) {
            Some(caps) => caps[1].to_string(),
            None => param.trim_start_matches('@').to_string(),
        };

        Ok(UserParam::Member {
            id: id.into(),
            text: param.to_string(),
        })
    }
}
