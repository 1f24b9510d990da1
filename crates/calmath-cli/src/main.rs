//! calmath — calendar boundary arithmetic from the command line.
//!
//! Thin adapter over the `calmath` library: parses timestamp strings,
//! resolves the default week-start day (flag, then `CALMATH_WEEK_START`,
//! then Monday), calls the explicit two-argument library functions, and
//! prints the result as text or JSON.

mod cli;

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use calmath::{
    end_of_month, end_of_week, end_of_year, first_of_month, first_of_week, first_of_year,
    truncate_to_minute, truncate_to_second, Kind, Timestamp, Weekday,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use clap::Parser;

use crate::cli::{Cli, Command};

/// Environment variable consulted when `--week-start` is omitted.
const WEEK_START_ENV: &str = "CALMATH_WEEK_START";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let result = evaluate(&cli.command)?;
    if cli.json {
        let value = serde_json::json!({
            "result": result,
            "kind": result.kind(),
        });
        println!("{value}");
    } else {
        println!("{result}");
    }
    Ok(())
}

fn evaluate(command: &Command) -> Result<Timestamp> {
    match command {
        Command::TruncateSecond { timestamp } => {
            Ok(truncate_to_second(parse_timestamp(timestamp)?))
        }
        Command::TruncateMinute { timestamp } => {
            Ok(truncate_to_minute(parse_timestamp(timestamp)?))
        }
        Command::FirstOfMonth { timestamp } => Ok(first_of_month(parse_timestamp(timestamp)?)?),
        Command::EndOfMonth { timestamp } => Ok(end_of_month(parse_timestamp(timestamp)?)?),
        Command::FirstOfYear { timestamp } => Ok(first_of_year(parse_timestamp(timestamp)?)?),
        Command::EndOfYear { timestamp } => Ok(end_of_year(parse_timestamp(timestamp)?)?),
        Command::FirstOfWeek {
            timestamp,
            week_start,
        } => Ok(first_of_week(
            parse_timestamp(timestamp)?,
            resolve_week_start(*week_start)?,
        )?),
        Command::EndOfWeek {
            timestamp,
            week_start,
        } => Ok(end_of_week(
            parse_timestamp(timestamp)?,
            resolve_week_start(*week_start)?,
        )?),
    }
}

/// The caller-side default: explicit flag, then the environment, then
/// Monday. The library itself has no default.
fn resolve_week_start(flag: Option<Weekday>) -> Result<Weekday> {
    if let Some(day) = flag {
        return Ok(day);
    }
    match std::env::var(WEEK_START_ENV) {
        Ok(value) => value
            .parse()
            .map_err(|_| anyhow!("{WEEK_START_ENV} is not a weekday name: '{value}'")),
        Err(_) => Ok(Weekday::Mon),
    }
}

/// Parse `YYYY-MM-DD` or `YYYY-MM-DD[T ]HH:MM:SS[.fffffff]`, with an
/// optional trailing `Z` marking the UTC kind. Fractional digits finer than
/// a tick (100 ns) are truncated.
fn parse_timestamp(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();
    let (body, kind) = match trimmed.strip_suffix(['Z', 'z']) {
        Some(body) => (body, Kind::Utc),
        None => (trimmed, Kind::Unspecified),
    };

    if let Ok(date) = NaiveDate::parse_from_str(body, "%Y-%m-%d") {
        return Ok(Timestamp::from_ymd(
            date.year(),
            date.month(),
            date.day(),
            kind,
        )?);
    }

    let dt = NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(body, "%Y-%m-%d %H:%M:%S%.f"))
        .with_context(|| format!("cannot parse timestamp '{input}'"))?;
    Ok(Timestamp::new(
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.nanosecond() / 100,
        kind,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only_is_midnight_unspecified() {
        let t = parse_timestamp("2016-05-13").unwrap();
        assert_eq!(t.to_string(), "2016-05-13T00:00:00.0000000");
        assert_eq!(t.kind(), Kind::Unspecified);
    }

    #[test]
    fn test_parse_trailing_z_sets_utc_kind() {
        let t = parse_timestamp("2020-02-29T10:30:00Z").unwrap();
        assert_eq!(t.kind(), Kind::Utc);
        assert_eq!(t.hour(), 10);
    }

    #[test]
    fn test_parse_seven_digit_fraction() {
        let t = parse_timestamp("2018-04-23T12:47:59.2530015").unwrap();
        assert_eq!(t.ticks(), 2_530_015);
    }

    #[test]
    fn test_parse_space_separator() {
        let t = parse_timestamp("2016-12-31 23:59:59.9999999").unwrap();
        assert_eq!(t.ticks(), 9_999_999);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("not-a-date").unwrap_err();
        assert!(err.to_string().contains("cannot parse timestamp"));
    }

    #[test]
    fn test_resolve_week_start_prefers_flag() {
        assert_eq!(
            resolve_week_start(Some(Weekday::Sat)).unwrap(),
            Weekday::Sat
        );
    }
}
