//! CLI argument definitions for calmath.
//!
//! One subcommand per library operation. The week commands take the
//! week-start day as a flag; when it is omitted, `main` resolves a default
//! from the `CALMATH_WEEK_START` environment variable and finally falls back
//! to Monday. The library itself never sees that resolution — it always
//! receives an explicit weekday.
//!
//! # Commands
//!
//! | Command | Result |
//! |---------|--------|
//! | `truncate-second` | sub-second fraction zeroed |
//! | `truncate-minute` | second and fraction zeroed |
//! | `first-of-month` | day 1 of the month, midnight |
//! | `end-of-month` | last instant of the month |
//! | `first-of-year` | January 1, midnight |
//! | `end-of-year` | last instant of the year |
//! | `first-of-week` | week-start day, midnight |
//! | `end-of-week` | last instant of the 7-day window |
//!
//! # Examples
//!
//! ```bash
//! calmath end-of-month 2016-02-13
//! calmath first-of-week 2020-02-23 --week-start monday
//! CALMATH_WEEK_START=sunday calmath end-of-week 2020-02-23 --json
//! ```

use calmath::Weekday;
use clap::{Parser, Subcommand};

/// Calendar boundary arithmetic for timestamps.
///
/// Timestamps are `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` with an optional
/// fractional part of up to seven digits. A trailing `Z` marks the value as
/// UTC; the marker is carried through to the output, never interpreted.
#[derive(Debug, Parser)]
#[command(name = "calmath", version, about = "Calendar boundary arithmetic for timestamps")]
pub struct Cli {
    /// Print the result as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Zero the sub-second fraction
    TruncateSecond {
        /// The timestamp to truncate
        timestamp: String,
    },
    /// Zero the second and the sub-second fraction
    TruncateMinute {
        /// The timestamp to truncate
        timestamp: String,
    },
    /// Midnight of day 1 of the timestamp's month
    FirstOfMonth {
        /// The timestamp whose month to use
        timestamp: String,
    },
    /// Last instant of the timestamp's month (23:59:59.9999999)
    EndOfMonth {
        /// The timestamp whose month to use
        timestamp: String,
    },
    /// Midnight of January 1 of the timestamp's year
    FirstOfYear {
        /// The timestamp whose year to use
        timestamp: String,
    },
    /// Last instant of the timestamp's year
    EndOfYear {
        /// The timestamp whose year to use
        timestamp: String,
    },
    /// Midnight of the most recent week-start day
    FirstOfWeek {
        /// The timestamp whose week to use
        timestamp: String,
        /// Day that begins the week (e.g. monday); defaults to
        /// CALMATH_WEEK_START, then Monday
        #[arg(long, value_parser = parse_weekday)]
        week_start: Option<Weekday>,
    },
    /// Last instant of the 7-day window starting at the week-start day
    EndOfWeek {
        /// The timestamp whose week to use
        timestamp: String,
        /// Day that begins the week (e.g. monday); defaults to
        /// CALMATH_WEEK_START, then Monday
        #[arg(long, value_parser = parse_weekday)]
        week_start: Option<Weekday>,
    },
}

/// Parse a weekday name ("monday", "mon", case-insensitive) for clap.
pub fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse().map_err(|_| format!("not a weekday name: '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday_accepts_names_and_abbreviations() {
        assert_eq!(parse_weekday("monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("Sat").unwrap(), Weekday::Sat);
        assert_eq!(parse_weekday("SUNDAY").unwrap(), Weekday::Sun);
    }

    #[test]
    fn test_parse_weekday_rejects_garbage() {
        assert!(parse_weekday("humpday").is_err());
    }

    #[test]
    fn test_cli_parses_week_command() {
        let cli = Cli::try_parse_from([
            "calmath",
            "first-of-week",
            "2020-02-23",
            "--week-start",
            "monday",
        ])
        .unwrap();
        match cli.command {
            Command::FirstOfWeek {
                timestamp,
                week_start,
            } => {
                assert_eq!(timestamp, "2020-02-23");
                assert_eq!(week_start, Some(Weekday::Mon));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
