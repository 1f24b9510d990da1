//! First and last instants of the month, year, or week containing a
//! timestamp.
//!
//! "First of" functions land on midnight of the first day of the period.
//! "End of" functions land one tick (100 ns) before the first instant of the
//! following period, i.e. `23:59:59.9999999` of the period's last day —
//! never midnight of the next period. Callers that want second-level
//! precision truncate separately.
//!
//! Week boundaries take the week-start day as an explicit parameter. There
//! is no default and no ambient locale lookup here; a caller that wants a
//! culture-derived default resolves it once and passes it down.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

use crate::error::{CalendarError, Result};
use crate::timestamp::{Timestamp, NANOS_PER_TICK};

/// How many days `weekday` is past the week-start day, `0..=6`.
fn days_from_week_start(weekday: Weekday, week_start: Weekday) -> u64 {
    u64::from((weekday.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7)
}

/// Step back one tick from a period boundary.
fn one_tick_before(dt: NaiveDateTime) -> Result<NaiveDateTime> {
    dt.checked_sub_signed(TimeDelta::nanoseconds(NANOS_PER_TICK))
        .ok_or_else(|| {
            CalendarError::OutOfRange(
                "cannot step one tick before the minimum representable instant".to_string(),
            )
        })
}

/// Midnight of day 1 of the month containing `t`.
///
/// # Examples
///
/// ```
/// use calmath::{first_of_month, Kind, Timestamp};
///
/// let t = Timestamp::new(2016, 5, 13, 8, 30, 0, 0, Kind::Unspecified).unwrap();
/// let first = first_of_month(t).unwrap();
/// assert_eq!(first.to_string(), "2016-05-01T00:00:00.0000000");
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result cannot be
/// represented. For any valid input this does not happen (day 1 of an
/// inhabited month always exists); the `Result` keeps the boundary
/// functions' surface uniform.
pub fn first_of_month(t: Timestamp) -> Result<Timestamp> {
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1).ok_or_else(|| {
        CalendarError::OutOfRange(format!(
            "{:04}-{:02}-01 is not representable",
            t.year(),
            t.month()
        ))
    })?;
    Ok(Timestamp::from_parts(first.and_time(NaiveTime::MIN), t.kind()))
}

/// The last representable instant of the month containing `t`: the first
/// instant of the following month minus one tick.
///
/// February reflects the Gregorian leap-year rules (divisible by 4, not by
/// 100 unless by 400).
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] when `t` falls in the final month
/// of the representable year range, where the following month has no first
/// instant to step back from.
pub fn end_of_month(t: Timestamp) -> Result<Timestamp> {
    let (y, m) = if t.month() == 12 {
        (t.year() + 1, 1)
    } else {
        (t.year(), t.month() + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| {
        CalendarError::OutOfRange(format!("{y:04}-{m:02} exceeds the representable year range"))
    })?;
    let end = one_tick_before(first_next.and_time(NaiveTime::MIN))?;
    Ok(Timestamp::from_parts(end, t.kind()))
}

/// Midnight of January 1 of the year containing `t`.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result cannot be
/// represented; does not happen for any valid input (see
/// [`first_of_month`]).
pub fn first_of_year(t: Timestamp) -> Result<Timestamp> {
    let first = NaiveDate::from_ymd_opt(t.year(), 1, 1).ok_or_else(|| {
        CalendarError::OutOfRange(format!("{:04}-01-01 is not representable", t.year()))
    })?;
    Ok(Timestamp::from_parts(first.and_time(NaiveTime::MIN), t.kind()))
}

/// The last representable instant of the year containing `t`: the first
/// instant of the following year minus one tick.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] when `t` falls in the final
/// representable year.
pub fn end_of_year(t: Timestamp) -> Result<Timestamp> {
    let y = t.year() + 1;
    let first_next = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| {
        CalendarError::OutOfRange(format!("{y:04} exceeds the representable year range"))
    })?;
    let end = one_tick_before(first_next.and_time(NaiveTime::MIN))?;
    Ok(Timestamp::from_parts(end, t.kind()))
}

/// Midnight of the most recent date, inclusive of `t`'s own date, whose
/// weekday equals `week_start`.
///
/// When `t` already falls on `week_start` the shift is zero days and the
/// result is `t`'s own midnight.
///
/// # Examples
///
/// ```
/// use calmath::{first_of_week, Kind, Timestamp, Weekday};
///
/// // 2020-02-23 was a Sunday.
/// let t = Timestamp::from_ymd(2020, 2, 23, Kind::Unspecified).unwrap();
/// let monday = first_of_week(t, Weekday::Mon).unwrap();
/// assert_eq!(monday.to_string(), "2020-02-17T00:00:00.0000000");
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] when the week containing `t`
/// starts before the minimum representable date.
pub fn first_of_week(t: Timestamp, week_start: Weekday) -> Result<Timestamp> {
    let days_back = days_from_week_start(t.weekday(), week_start);
    let start = t.date().checked_sub_days(Days::new(days_back)).ok_or_else(|| {
        CalendarError::OutOfRange(format!(
            "week start {days_back} day(s) before {:04}-{:02}-{:02} precedes the minimum date",
            t.year(),
            t.month(),
            t.day()
        ))
    })?;
    Ok(Timestamp::from_parts(start.and_time(NaiveTime::MIN), t.kind()))
}

/// The last representable instant of the 7-day window starting at
/// [`first_of_week`]: that boundary plus 7 days minus one tick.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] when the window's start or end
/// falls outside the representable date range.
pub fn end_of_week(t: Timestamp, week_start: Weekday) -> Result<Timestamp> {
    let start = first_of_week(t, week_start)?;
    let next = start.date().checked_add_days(Days::new(7)).ok_or_else(|| {
        CalendarError::OutOfRange(format!(
            "week containing {:04}-{:02}-{:02} ends past the maximum date",
            t.year(),
            t.month(),
            t.day()
        ))
    })?;
    let end = one_tick_before(next.and_time(NaiveTime::MIN))?;
    Ok(Timestamp::from_parts(end, t.kind()))
}
