/// Switches for behaviour that differs from the first release of the bot.
///
/// All are off by default. The first two bring back the first release's
/// behaviour; the last one departs from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compatibility {
    /// Resolve both bounds of `from X until Y` from the `from` clause's
    /// token, ignoring `Y`.
    pub shared_range_token: bool,

    /// Make `where is` report the user's latest status whatever the date
    /// asked about.
    pub where_is_ignores_date: bool,

    /// Treat an absence declared without an end as lasting until further
    /// notice instead of covering no date at all.
    pub open_end_until_further_notice: bool,
}

impl Compatibility {
    pub fn legacy() -> Self {
        Self {
            shared_range_token: true,
            where_is_ignores_date: true,
            open_end_until_further_notice: false,
        }
    }
}
