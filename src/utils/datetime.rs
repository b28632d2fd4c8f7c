//! Calendar helpers used to resolve time mentions.
//!
//! Everything works on whatever zone the given instant carries. `today`,
//! `tomorrow` and `yesterday` read the host's local clock, so results shift
//! with the host zone; there is no zone conversion anywhere.
//!
//! Day shifts move the wall-clock date and keep the time of day, so a day is
//! not always 24 hours long across a DST change. Shifts that leave chrono's
//! range are logged and leave the instant where it was.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, TimeZone};

const DAYS_PER_WEEK: i64 = 7;
const MONTHS_PER_YEAR: i32 = 12;

pub const DATE_FORMAT: &'static str = "%d/%m/%Y";
pub const WEEKDAY_FORMAT: &'static str = "%A";

/// The current instant. Not truncated to midnight.
pub fn today() -> DateTime<Local> {
    Local::now()
}

pub fn tomorrow() -> DateTime<Local> {
    tomorrow_at(today())
}

pub fn yesterday() -> DateTime<Local> {
    yesterday_at(today())
}

pub fn tomorrow_at<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Tz> {
    add_days(now, 1)
}

pub fn yesterday_at<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Tz> {
    sub_days(now, 1)
}

/// Negative values travel into the past.
pub fn add_days<Tz: TimeZone>(t: DateTime<Tz>, days: i64) -> DateTime<Tz> {
    match shift_days(&t, days) {
        Some(shifted) => shifted,
        None => {
            log::warn!("day shift of {} from {} is out of range", days, t.naive_local());
            t
        }
    }
}

pub fn sub_days<Tz: TimeZone>(t: DateTime<Tz>, days: i64) -> DateTime<Tz> {
    match days.checked_neg() {
        Some(days) => add_days(t, days),
        None => {
            log::warn!("day shift of -{} from {} is out of range", days, t.naive_local());
            t
        }
    }
}

pub fn add_weeks<Tz: TimeZone>(t: DateTime<Tz>, weeks: i64) -> DateTime<Tz> {
    match weeks.checked_mul(DAYS_PER_WEEK) {
        Some(days) => add_days(t, days),
        None => {
            log::warn!("week shift of {} from {} is out of range", weeks, t.naive_local());
            t
        }
    }
}

/// Adds calendar months, overflowing into the next month when the day does
/// not exist in the target one (Jan 31 + 1 month lands on Mar 2 or Mar 3).
pub fn add_months<Tz: TimeZone>(t: DateTime<Tz>, months: i32) -> DateTime<Tz> {
    let date = t.date_naive();
    match shift_months(date, months) {
        Some(target) => add_days(t, (target - date).num_days()),
        None => {
            log::warn!("month shift of {} from {} is out of range", months, date);
            t
        }
    }
}

pub fn add_years<Tz: TimeZone>(t: DateTime<Tz>, years: i32) -> DateTime<Tz> {
    match years.checked_mul(MONTHS_PER_YEAR) {
        Some(months) => add_months(t, months),
        None => {
            log::warn!("year shift of {} from {} is out of range", years, t.naive_local());
            t
        }
    }
}

/// Like [`add_months`] but clamps to the last day of the target month
/// instead of overflowing.
pub fn add_months_no_overflow<Tz: TimeZone>(t: DateTime<Tz>, months: i32) -> DateTime<Tz> {
    let day = t.day();
    let added = add_months(t, months);
    if added.day() != day {
        return previous_month_last_day(added);
    }
    added
}

pub fn previous_month_last_day<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Tz> {
    let day = t.day() as i64;
    sub_days(t, day)
}

pub fn days_in_month<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    let first = t.date_naive().with_day(1);
    let next = first.and_then(|first| shift_months(first, 1));
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 31,
    }
}

pub fn format_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format(DATE_FORMAT).to_string()
}

pub fn format_weekday<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format(WEEKDAY_FORMAT).to_string()
}

// Moves the local date and keeps the local time. When that time is skipped
// by a DST change the shift falls back to whole 24-hour days.
fn shift_days<Tz: TimeZone>(t: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let delta = TimeDelta::try_days(days)?;
    let local = t.naive_local().checked_add_signed(delta)?;
    t.timezone()
        .from_local_datetime(&local)
        .earliest()
        .or_else(|| t.clone().checked_add_signed(delta))
}

// Keeps the day offset from the first of the month, so a missing day rolls
// over into the following month.
fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let total = date
        .year()
        .checked_mul(MONTHS_PER_YEAR)?
        .checked_add(date.month0() as i32)?
        .checked_add(months)?;
    let year = total.div_euclid(MONTHS_PER_YEAR);
    let month = total.rem_euclid(MONTHS_PER_YEAR) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::days(date.day0() as i64))
}
