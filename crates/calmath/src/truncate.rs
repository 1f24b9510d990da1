//! Downward truncation of the second and sub-second fields.
//!
//! Truncation only ever moves a value earlier, never rounds to nearest, and
//! cannot leave the representable range: the range minimum is itself a whole
//! midnight, so the floor of any valid value is valid. Both functions are
//! therefore infallible.

use chrono::{TimeDelta, Timelike};

use crate::timestamp::Timestamp;

/// Zero the sub-second fraction, leaving every other field and the kind tag
/// unchanged.
///
/// # Examples
///
/// ```
/// use calmath::{truncate_to_second, Kind, Timestamp};
///
/// let t = Timestamp::new(2018, 4, 23, 12, 47, 59, 2_530_015, Kind::Utc).unwrap();
/// let truncated = truncate_to_second(t);
/// assert_eq!(truncated.to_string(), "2018-04-23T12:47:59.0000000Z");
/// ```
pub fn truncate_to_second(t: Timestamp) -> Timestamp {
    let dt = t.datetime();
    let subsec = i64::from(dt.nanosecond());
    Timestamp::from_parts(dt - TimeDelta::nanoseconds(subsec), t.kind())
}

/// Zero the second and the sub-second fraction, leaving every other field and
/// the kind tag unchanged.
pub fn truncate_to_minute(t: Timestamp) -> Timestamp {
    let dt = t.datetime();
    let past_minute = i64::from(dt.second()) * 1_000_000_000 + i64::from(dt.nanosecond());
    Timestamp::from_parts(dt - TimeDelta::nanoseconds(past_minute), t.kind())
}
