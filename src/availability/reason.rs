use strum::{Display, EnumIter, EnumMessage, EnumString, IntoEnumIterator, IntoStaticStr};

/// Why someone is away.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumMessage,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Reason {
    #[default]
    #[strum(to_string = "out of office", serialize = "out_of_office")]
    OutOfOffice,

    #[strum(to_string = "remote", serialize = "working remote")]
    Remote,

    #[strum(to_string = "sick")]
    Sick,

    #[strum(to_string = "vacation", serialize = "vacations")]
    Vacation,

    #[strum(to_string = "work trip", serialize = "work_trip")]
    WorkTrip,
}

impl Reason {
    /// Phrase the reason is written as, e.g. `"work trip"`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Every phrase that parses to some reason, longest first.
    pub fn phrases() -> Vec<&'static str> {
        let mut phrases: Vec<&'static str> = Reason::iter()
            .flat_map(|reason| reason.get_serializations().iter().copied())
            .collect();
        phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
        phrases
    }
}

/// Anything that is not one of the known phrases counts as out of office.
pub fn parse_reason(text: &str) -> Reason {
    text.trim().parse().unwrap_or_default()
}
