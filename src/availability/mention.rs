use std::str::FromStr;

use chrono::{DateTime, Local};
use regex::{Captures, Regex};

use crate::utils::datetime;

use super::compat::Compatibility;

const TOKEN: &'static str = r"today|yesterday|tomorrow|next\s+week|next\s+month";

lazy_static::lazy_static! {
    /// Phrase shapes in priority order. A full range also matches the
    /// from-only and to-only shapes, so it has to come first.
    static ref PHRASE_SHAPES: Vec<PhraseShape> = vec![
        PhraseShape::new(
            "full range",
            &format!(r"(?i)\b(?:from|since)\s+(?P<from>{TOKEN})\s+(?:until|till|to)\s+(?P<to>{TOKEN})\b"),
            full_range,
        ),
        PhraseShape::new(
            "from only",
            &format!(r"(?i)\b(?:from|since)\s+(?P<from>{TOKEN})\b"),
            from_only,
        ),
        PhraseShape::new(
            "to only",
            &format!(r"(?i)\b(?:until|till|to)\s+(?P<to>{TOKEN})\b"),
            to_only,
        ),
        PhraseShape::new(
            "bare token",
            &format!(r"(?i)\b(?P<at>{TOKEN})\b"),
            bare_token,
        ),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionParseError {
    PatternMismatch,
}

impl std::fmt::Display for MentionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MentionParseError::PatternMismatch => write!(f, "couldn't match a pattern"),
        }
    }
}

impl std::error::Error for MentionParseError {}

/// A time range picked out of a chat message. Either bound may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimableMention {
    from: Option<DateTime<Local>>,
    to: Option<DateTime<Local>>,
}

impl TimableMention {
    pub fn new(from: Option<DateTime<Local>>, to: Option<DateTime<Local>>) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> Option<DateTime<Local>> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<Local>> {
        self.to
    }

    pub fn has_from(&self) -> bool {
        self.from.is_some()
    }

    pub fn has_to(&self) -> bool {
        self.to.is_some()
    }

    /// The end of the range is still unknown, so the speaker should be
    /// asked when they are back.
    pub fn has_only_from(&self) -> bool {
        self.has_from() && !self.has_to()
    }
}

impl FromStr for TimableMention {
    type Err = MentionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MentionParser::default().parse(s)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MentionParser {
    compat: Compatibility,
}

impl MentionParser {
    pub fn new(compat: Compatibility) -> Self {
        Self { compat }
    }

    pub fn parse(&self, text: &str) -> Result<TimableMention, MentionParseError> {
        self.parse_at(text, datetime::today())
    }

    /// Resolves relative words against `now` instead of the wall clock.
    pub fn parse_at(
        &self,
        text: &str,
        now: DateTime<Local>,
    ) -> Result<TimableMention, MentionParseError> {
        let resolution = Resolution {
            now,
            compat: self.compat,
        };

        for shape in PHRASE_SHAPES.iter() {
            if let Some(caps) = shape.pattern.captures(text) {
                log::debug!("'{}' matched the {} phrase shape", text, shape.name);
                return Ok((shape.build)(&caps, &resolution));
            }
        }

        log::debug!("'{}' matched no phrase shape", text);
        Err(MentionParseError::PatternMismatch)
    }
}

/// Maps a single time word to an instant. `next month` is recognised by the
/// phrase shapes but deliberately left at `now`, as is anything unknown.
pub fn resolve_token(token: &str, now: DateTime<Local>) -> DateTime<Local> {
    let token = token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match token.as_str() {
        "today" => now,
        "tomorrow" => datetime::tomorrow_at(now),
        "yesterday" => datetime::yesterday_at(now),
        "next week" => datetime::add_weeks(now, 1),
        _ => now,
    }
}

struct Resolution {
    now: DateTime<Local>,
    compat: Compatibility,
}

impl Resolution {
    fn resolve(&self, caps: &Captures, group: &str) -> Option<DateTime<Local>> {
        caps.name(group)
            .map(|token| resolve_token(token.as_str(), self.now))
    }
}

struct PhraseShape {
    name: &'static str,
    pattern: Regex,
    build: fn(&Captures, &Resolution) -> TimableMention,
}

impl PhraseShape {
    fn new(
        name: &'static str,
        pattern: &str,
        build: fn(&Captures, &Resolution) -> TimableMention,
    ) -> Self {
        let pattern = Regex::new(pattern).expect("phrase shape pattern must compile");
        Self {
            name,
            pattern,
            build,
        }
    }
}

fn full_range(caps: &Captures, res: &Resolution) -> TimableMention {
    let to_group = match res.compat.shared_range_token {
        true => "from",
        false => "to",
    };
    TimableMention::new(res.resolve(caps, "from"), res.resolve(caps, to_group))
}

fn from_only(caps: &Captures, res: &Resolution) -> TimableMention {
    TimableMention::new(res.resolve(caps, "from"), None)
}

fn to_only(caps: &Captures, res: &Resolution) -> TimableMention {
    TimableMention::new(Some(res.now), res.resolve(caps, "to"))
}

fn bare_token(caps: &Captures, res: &Resolution) -> TimableMention {
    TimableMention::new(res.resolve(caps, "at"), None)
}
