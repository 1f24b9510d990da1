//! Immutable timestamp value with tick-level sub-second precision.
//!
//! A [`Timestamp`] is a proleptic-Gregorian calendar date, a time of day, a
//! sub-second fraction counted in 100-nanosecond *ticks*, and an opaque
//! [`Kind`] tag. Values are created, never mutated; every operation in this
//! crate returns a new value and carries the kind tag through untouched.
//!
//! chrono stores nanoseconds internally, which is finer than a tick.
//! Construction only accepts whole ticks, so one tick is the minimum
//! representable increment of the type and "end of period minus one tick"
//! lands on `.9999999` exactly.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{CalendarError, Result};

/// Number of 100 ns ticks in one second.
pub const TICKS_PER_SECOND: u32 = 10_000_000;

/// Nanoseconds per tick.
pub(crate) const NANOS_PER_TICK: i64 = 100;

/// Opaque marker carried through every operation and interpreted by none.
///
/// The tag records what the caller believes the value refers to (UTC wall
/// clock, local wall clock, or neither); this crate never converts between
/// them — conversion is the caller's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// No claim about the reference frame.
    #[default]
    Unspecified,
    /// Coordinated Universal Time.
    Utc,
    /// The caller's local wall clock.
    Local,
}

/// An immutable calendar date and time of day with tick precision.
///
/// Equality covers every field including the kind tag: two timestamps naming
/// the same instant with different tags are *not* equal. Ordering is
/// chronological, with the kind tag breaking ties between equal instants.
///
/// # Examples
///
/// ```
/// use calmath::{Kind, Timestamp};
///
/// let t = Timestamp::new(2016, 5, 13, 8, 30, 15, 2_530_015, Kind::Utc).unwrap();
/// assert_eq!(t.day(), 13);
/// assert_eq!(t.ticks(), 2_530_015);
/// assert_eq!(t.to_string(), "2016-05-13T08:30:15.2530015Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    datetime: NaiveDateTime,
    kind: Kind,
}

impl Timestamp {
    /// Build a timestamp from calendar components.
    ///
    /// `ticks` is the sub-second fraction in 100 ns units, `0..10_000_000`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the components do not name a
    /// real calendar date or time (February 30, month 13, `ticks` of a full
    /// second or more), or fall outside the representable year range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        ticks: u32,
        kind: Kind,
    ) -> Result<Self> {
        if ticks >= TICKS_PER_SECOND {
            return Err(CalendarError::OutOfRange(format!(
                "sub-second ticks must be below {TICKS_PER_SECOND}, got {ticks}"
            )));
        }
        let datetime = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_nano_opt(hour, minute, second, ticks * NANOS_PER_TICK as u32))
            .ok_or_else(|| {
                CalendarError::OutOfRange(format!(
                    "no such calendar date or time: \
                     {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;
        Ok(Self { datetime, kind })
    }

    /// Build a timestamp at midnight of the given date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the components do not name a
    /// real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32, kind: Kind) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0, 0, kind)
    }

    /// Wrap an already-validated datetime. Callers must pass a tick-aligned
    /// value (nanoseconds a multiple of 100).
    pub(crate) fn from_parts(datetime: NaiveDateTime, kind: Kind) -> Self {
        debug_assert_eq!(i64::from(datetime.nanosecond()) % NANOS_PER_TICK, 0);
        Self { datetime, kind }
    }

    pub(crate) fn datetime(self) -> NaiveDateTime {
        self.datetime
    }

    pub(crate) fn date(self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// Month of the year, 1–12.
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    /// Day of the month, 1–31.
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    /// Sub-second fraction in 100 ns ticks, `0..10_000_000`.
    pub fn ticks(&self) -> u32 {
        self.datetime.nanosecond() / NANOS_PER_TICK as u32
    }

    /// Day of the week of the calendar date.
    pub fn weekday(&self) -> Weekday {
        self.datetime.weekday()
    }

    /// The kind tag, exactly as supplied at construction.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// Canonical form: `YYYY-MM-DDTHH:MM:SS.fffffff`, seven fractional digits,
/// with a trailing `Z` for the UTC kind. `Local` and `Unspecified` render
/// without a suffix — printing an offset would mean interpreting the tag.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:07}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.ticks(),
        )?;
        if self.kind == Kind::Utc {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_components() {
        let t = Timestamp::new(2016, 5, 13, 12, 47, 59, 2_530_015, Kind::Utc).unwrap();
        assert_eq!(t.year(), 2016);
        assert_eq!(t.month(), 5);
        assert_eq!(t.day(), 13);
        assert_eq!(t.hour(), 12);
        assert_eq!(t.minute(), 47);
        assert_eq!(t.second(), 59);
        assert_eq!(t.ticks(), 2_530_015);
        assert_eq!(t.kind(), Kind::Utc);
    }

    #[test]
    fn test_new_rejects_nonexistent_date() {
        let result = Timestamp::from_ymd(2019, 2, 30, Kind::Unspecified);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("no such calendar date"), "got: {err}");
    }

    #[test]
    fn test_new_rejects_month_13() {
        assert!(Timestamp::from_ymd(2019, 13, 1, Kind::Unspecified).is_err());
    }

    #[test]
    fn test_new_rejects_overflowing_ticks() {
        let result = Timestamp::new(2019, 1, 1, 0, 0, 0, TICKS_PER_SECOND, Kind::Unspecified);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("ticks"), "got: {err}");
    }

    #[test]
    fn test_leap_day_is_valid_in_leap_year_only() {
        assert!(Timestamp::from_ymd(2020, 2, 29, Kind::Unspecified).is_ok());
        assert!(Timestamp::from_ymd(2017, 2, 29, Kind::Unspecified).is_err());
        // Century rule: 1900 is not a leap year, 2000 is.
        assert!(Timestamp::from_ymd(1900, 2, 29, Kind::Unspecified).is_err());
        assert!(Timestamp::from_ymd(2000, 2, 29, Kind::Unspecified).is_ok());
    }

    #[test]
    fn test_equality_includes_kind() {
        let utc = Timestamp::from_ymd(2020, 2, 23, Kind::Utc).unwrap();
        let local = Timestamp::from_ymd(2020, 2, 23, Kind::Local).unwrap();
        let utc_again = Timestamp::from_ymd(2020, 2, 23, Kind::Utc).unwrap();
        assert_ne!(utc, local);
        assert_eq!(utc, utc_again);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = Timestamp::new(2020, 2, 23, 0, 0, 0, 9_999_999, Kind::Utc).unwrap();
        let later = Timestamp::new(2020, 2, 23, 0, 0, 1, 0, Kind::Utc).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_weekday() {
        // 2020-02-23 was a Sunday.
        let t = Timestamp::from_ymd(2020, 2, 23, Kind::Unspecified).unwrap();
        assert_eq!(t.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_display_utc_suffix() {
        let t = Timestamp::new(2016, 2, 29, 23, 59, 59, 9_999_999, Kind::Utc).unwrap();
        assert_eq!(t.to_string(), "2016-02-29T23:59:59.9999999Z");
    }

    #[test]
    fn test_display_unspecified_has_no_suffix() {
        let t = Timestamp::from_ymd(2016, 5, 1, Kind::Unspecified).unwrap();
        assert_eq!(t.to_string(), "2016-05-01T00:00:00.0000000");
    }

    #[test]
    fn test_display_pads_fraction_to_seven_digits() {
        let t = Timestamp::new(2018, 4, 23, 12, 47, 59, 15, Kind::Unspecified).unwrap();
        assert_eq!(t.to_string(), "2018-04-23T12:47:59.0000015");
    }
}
