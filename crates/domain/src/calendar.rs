// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure calendar utilities.
//!
//! Everything in this module is a stateless function over `time::Date`.
//! Dates cross module boundaries (and the wire, and the database) as
//! ISO-8601 `YYYY-MM-DD` strings; `parse_date` and `format_date` are the
//! single conversion points.

use crate::error::DomainError;
use time::{Date, Month, Weekday};

/// Returns the month for a 1-based month number.
///
/// # Errors
///
/// Returns an error if `month` is outside 1..=12.
pub fn month_number(month: u8) -> Result<Month, DomainError> {
    Month::try_from(month).map_err(|_| DomainError::InvalidMonthNumber { month })
}

/// Returns the number of calendar days in the given month (28–31).
///
/// # Errors
///
/// Returns an error if `month` is outside 1..=12.
pub fn month_length(year: i32, month: u8) -> Result<u8, DomainError> {
    Ok(month_number(month)?.length(year))
}

/// Enumerates every date in the given month, first through last day.
///
/// # Errors
///
/// Returns an error if `month` is outside 1..=12.
pub fn month_dates(year: i32, month: u8) -> Result<Vec<Date>, DomainError> {
    let month_value: Month = month_number(month)?;
    let length: u8 = month_value.length(year);

    let mut dates: Vec<Date> = Vec::with_capacity(usize::from(length));
    for day in 1..=length {
        let date: Date = Date::from_calendar_date(year, month_value, day).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("enumerating {year}-{month:02}"),
            }
        })?;
        dates.push(date);
    }
    Ok(dates)
}

/// Returns the first date of the given month.
///
/// # Errors
///
/// Returns an error if `month` is outside 1..=12 or the year is out of range.
pub fn month_first_day(year: i32, month: u8) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month_number(month)?, 1).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("computing the first day of {year}-{month:02}"),
        }
    })
}

/// Returns the last date of the given month.
///
/// # Errors
///
/// Returns an error if `month` is outside 1..=12 or the year is out of range.
pub fn month_last_day(year: i32, month: u8) -> Result<Date, DomainError> {
    let month_value: Month = month_number(month)?;
    Date::from_calendar_date(year, month_value, month_value.length(year)).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("computing the last day of {year}-{month:02}"),
        }
    })
}

/// Returns the three-letter weekday abbreviation for a date.
#[must_use]
pub const fn weekday_abbrev(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Classifies a date as a nominal weekend day.
#[must_use]
pub const fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Parses an ISO-8601 `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(
        date_string,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as an ISO-8601 `YYYY-MM-DD` string.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
