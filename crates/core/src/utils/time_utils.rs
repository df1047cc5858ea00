use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{CalculatorError, Result, ValidationError};

/// Default timezone for record dates.
/// Records are stored as UTC instants; budget windows are calendar days in this zone.
pub const DEFAULT_REPORTING_TZ: Tz = chrono_tz::UTC;

/// Converts a UTC instant to the calendar day it falls on in the given timezone.
///
/// This is the single source of truth for turning a record timestamp into the
/// day used by every budget window.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Parses an IANA timezone name such as `America/Toronto`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| ValidationError::UnknownTimezone(name.to_string()).into())
}

/// Returns the month before `(year, month)`, wrapping January to December of the prior year.
pub fn previous_month(year: i32, month: u32) -> Result<(i32, u32)> {
    if month <= 1 {
        let prior = year
            .checked_sub(1)
            .ok_or(CalculatorError::InvalidMonth { year, month })?;
        Ok((prior, 12))
    } else {
        Ok((year, month - 1))
    }
}

/// Returns the month after `(year, month)`, wrapping December to January of the next year.
pub fn next_month(year: i32, month: u32) -> Result<(i32, u32)> {
    if month >= 12 {
        let following = year
            .checked_add(1)
            .ok_or(CalculatorError::InvalidMonth { year, month })?;
        Ok((following, 1))
    } else {
        Ok((year, month + 1))
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalculatorError::InvalidMonth { year, month }.into())
}

/// Number of calendar days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_day_of_month(year, month)?;
    let (next_year, next) = next_month(year, month)?;
    let following = first_day_of_month(next_year, next)?;
    Ok(following.signed_duration_since(first).num_days() as u32)
}

/// The last day of the month, used as an exclusive lower bound for the month after it.
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let days = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, days)
        .ok_or_else(|| CalculatorError::InvalidMonth { year, month }.into())
}

pub fn day_before(date: NaiveDate) -> Result<NaiveDate> {
    date.pred_opt().ok_or_else(|| {
        CalculatorError::InvalidMonth {
            year: date.year(),
            month: date.month(),
        }
        .into()
    })
}

/// Position of `date` within its week, Monday = 1 through Sunday = 7.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Number of months of `year` that have started as of `today`.
pub fn months_elapsed_in_year(year: i32, today: NaiveDate) -> u32 {
    match year.cmp(&today.year()) {
        std::cmp::Ordering::Less => 12,
        std::cmp::Ordering::Equal => today.month(),
        std::cmp::Ordering::Greater => 0,
    }
}
