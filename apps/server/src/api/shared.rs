use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use spendwise_core::utils::time_utils::local_date_from_utc;

use crate::error::{ApiError, ApiResult};

const MIN_REPORTING_YEAR: i32 = 1;
const MAX_REPORTING_YEAR: i32 = 9999;

/// Current calendar day in the reporting timezone.
pub fn today_in(tz: Tz) -> NaiveDate {
    local_date_from_utc(Utc::now(), tz)
}

/// Rejects month numbers outside 1..=12 before they reach the calendar helpers.
pub fn check_month(month: u32) -> ApiResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(ApiError::BadRequest(format!(
            "Month must be between 1 and 12, got {}",
            month
        )))
    }
}

/// Rejects years outside the supported calendar range.
pub fn check_year(year: i32) -> ApiResult<i32> {
    if (MIN_REPORTING_YEAR..=MAX_REPORTING_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ApiError::BadRequest(format!(
            "Year must be between {} and {}, got {}",
            MIN_REPORTING_YEAR, MAX_REPORTING_YEAR, year
        )))
    }
}

/// Rejects reference days whose year is outside the supported range.
pub fn check_day(day: NaiveDate) -> ApiResult<NaiveDate> {
    check_year(day.year())?;
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_month_bounds() {
        assert!(check_month(0).is_err());
        assert_eq!(check_month(1).unwrap(), 1);
        assert_eq!(check_month(12).unwrap(), 12);
        assert!(check_month(13).is_err());
    }

    #[test]
    fn test_check_year_bounds() {
        assert!(check_year(0).is_err());
        assert!(check_year(i32::MIN).is_err());
        assert!(check_year(10000).is_err());
        assert_eq!(check_year(2020).unwrap(), 2020);
        assert!(check_day(NaiveDate::from_ymd_opt(12000, 1, 1).unwrap()).is_err());
    }
}
