use chrono::{DateTime, Local};

use super::mention::TimableMention;
use super::reason::Reason;

/// One declared absence. Never changes once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    description: String,
    from: DateTime<Local>,
    to: Option<DateTime<Local>>,
    reason: Reason,
    until_further_notice: bool,
}

impl Status {
    pub fn new(
        description: &str,
        from: DateTime<Local>,
        to: Option<DateTime<Local>>,
        reason: Reason,
    ) -> Self {
        Self {
            description: description.to_string(),
            from,
            to,
            reason,
            until_further_notice: false,
        }
    }

    /// Makes a missing end cover every date after `from`. Has no effect when
    /// the end is known.
    pub fn until_further_notice(mut self) -> Self {
        self.until_further_notice = true;
        self
    }

    /// A mention without a start is taken to start at `now`.
    pub fn from_mention(mention: &TimableMention, reason: Reason, now: DateTime<Local>) -> Self {
        Self::new("", mention.from().unwrap_or(now), mention.to(), reason)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn from(&self) -> DateTime<Local> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<Local>> {
        self.to
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn is_open_ended(&self) -> bool {
        self.to.is_none()
    }

    /// Whether `date` lies strictly inside the absence. Dates equal to either
    /// bound are not covered. A missing end covers nothing, unless the status
    /// holds until further notice.
    pub fn is_valid(&self, date: DateTime<Local>) -> bool {
        match self.to {
            Some(to) => self.from < date && date < to,
            None => self.until_further_notice && self.from < date,
        }
    }
}
