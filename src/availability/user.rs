use std::fmt::Display;

use chrono::{DateTime, Local};

use crate::utils::datetime;

use super::status::Status;

/// Identifier the chat platform gives a member, e.g. `U024BE7LH`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl std::ops::Deref for UserId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member together with every absence they declared, oldest first.
///
/// The latest status is kept apart from the earlier ones, so a user always
/// has at least one.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    latest: Status,
    previous: Vec<Status>,
}

impl User {
    pub fn new(id: UserId, username: &str, status: Status) -> Self {
        Self {
            id,
            username: username.to_string(),
            latest: status,
            previous: Vec::new(),
        }
    }

    /// Appends without checking order or overlap with earlier statuses.
    pub fn add_status(&mut self, status: Status) {
        let previous = std::mem::replace(&mut self.latest, status);
        self.previous.push(previous);
    }

    /// The most recently declared status.
    pub fn status(&self) -> &Status {
        &self.latest
    }

    pub fn statuses(&self) -> impl Iterator<Item = &Status> {
        self.previous.iter().chain(std::iter::once(&self.latest))
    }

    pub fn status_count(&self) -> usize {
        self.previous.len() + 1
    }

    /// Only the most recently declared status counts: an older absence that
    /// covers `date` is ignored once a newer one has been declared.
    pub fn is_available(&self, date: DateTime<Local>) -> bool {
        !self.latest.is_valid(date)
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.status();
        write!(
            f,
            "{} is out from {}",
            self.mention(),
            datetime::format_date(&status.from())
        )?;

        match status.to() {
            Some(to) => write!(
                f,
                " until {} ({})",
                datetime::format_weekday(&to),
                datetime::format_date(&to)
            ),
            None => write!(f, " until further notice"),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::availability::Reason;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
    }

    fn status(from: u32, to: u32) -> Status {
        Status::new("", day(from), Some(day(to)), Reason::Vacation)
    }

    #[test]
    fn start_with_one_status() {
        let user = User::new("U1".into(), "alice", status(1, 5));
        assert_eq!(user.status_count(), 1);
        assert_eq!(user.status(), &status(1, 5));
    }

    #[test]
    fn keep_declaration_order() {
        let mut user = User::new("U1".into(), "alice", status(10, 12));
        user.add_status(status(1, 3));
        user.add_status(status(20, 25));

        let froms: Vec<_> = user.statuses().map(|s| s.from()).collect();
        assert_eq!(froms, vec![day(10), day(1), day(20)]);
        assert_eq!(user.status(), &status(20, 25));
        assert_eq!(user.status_count(), 3);
    }

    #[test]
    fn be_unavailable_when_latest_status_covers_date() {
        let user = User::new("U1".into(), "alice", status(10, 20));
        assert!(!user.is_available(day(15)));
        assert!(user.is_available(day(25)));
    }

    #[test]
    fn let_latest_status_win_over_older_ones() {
        let mut user = User::new("U1".into(), "alice", status(10, 20));
        user.add_status(status(1, 5));
        assert!(user.is_available(day(15)));
    }

    #[test]
    fn be_available_on_status_bounds() {
        let user = User::new("U1".into(), "alice", status(10, 20));
        assert!(user.is_available(day(10)));
        assert!(user.is_available(day(20)));
    }

    #[test]
    fn display_status_line() {
        let user = User::new("U024BE7LH".into(), "alice", status(6, 10));
        assert_eq!(
            user.to_string(),
            "<@U024BE7LH> is out from 06/05/2024 until Friday (10/05/2024)"
        );
    }

    #[test]
    fn display_open_ended_status_line() {
        let user = User::new(
            "U1".into(),
            "alice",
            Status::new("", day(6), None, Reason::Sick),
        );
        assert_eq!(
            user.to_string(),
            "<@U1> is out from 06/05/2024 until further notice"
        );
    }

    #[test]
    fn compare_id_with_str() {
        let id = UserId::from("U1");
        assert!(id == *"U1");
        assert_eq!(&*id, "U1");
    }
}
