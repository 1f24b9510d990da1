//! # calmath
//!
//! Pure, stateless calendar arithmetic over an immutable tick-precision
//! timestamp: truncation to second or minute precision, and the first or
//! last instant of the month, year, or week containing a value, with the
//! week-start day as an explicit parameter.
//!
//! Every function is deterministic and reads nothing but its arguments — no
//! system clock, no locale, no thread or process state. The kind tag on a
//! [`Timestamp`] is carried through unmodified and never interpreted; these
//! functions perform no time-zone conversion. "End of period" means the last
//! representable instant of the period, one tick (100 ns) before the next
//! period begins, so `end_of_month` of a February date in a leap year is
//! `…-02-29T23:59:59.9999999`.
//!
//! ## Modules
//!
//! - [`timestamp`] — the [`Timestamp`] value type and its [`Kind`] tag
//! - [`truncate`] — second/minute truncation
//! - [`period`] — month, year, and week boundaries
//! - [`error`] — error types
//!
//! ## Week-start policy
//!
//! [`first_of_week`] and [`end_of_week`] require the caller to say which day
//! begins a week. There is deliberately no overload that consults the
//! current locale: a wrapper that wants a culture-derived default resolves
//! it once at its own edge and passes it down, keeping this core fully
//! deterministic.

pub mod error;
pub mod period;
pub mod timestamp;
pub mod truncate;

pub use chrono::Weekday;
pub use error::{CalendarError, Result};
pub use period::{
    end_of_month, end_of_week, end_of_year, first_of_month, first_of_week, first_of_year,
};
pub use timestamp::{Kind, Timestamp, TICKS_PER_SECOND};
pub use truncate::{truncate_to_minute, truncate_to_second};
