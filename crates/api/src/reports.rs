// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quota reporting: remaining-balance figures combining status-store
//! aggregates with the pure accrual calculator.
//!
//! Policy, applied uniformly (see DESIGN.md): remote-day remaining figures
//! are `limit - used` and may go negative; the team calendar's month-end
//! figure uses the total-year remote count; vacation remaining is floored
//! at zero against the full-year usage.

use officecal_domain::accrued_vacation_days;
use officecal_persistence::{Persistence, UserData};
use time::Date;

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{RemoteCounterResponse, VacationCounterResponse};

/// Parses a user's stored start date, if any.
///
/// A stored date that fails to parse is an internal error: the API layer
/// validated it on the way in.
fn parse_start_date(user: &UserData) -> Result<Option<Date>, ApiError> {
    user.start_date
        .as_deref()
        .map(officecal_domain::parse_date)
        .transpose()
        .map_err(|e| ApiError::Internal {
            message: format!(
                "Stored start date for user {} is invalid: {e}",
                user.user_id
            ),
        })
}

/// Builds the remote-day counter for one user and year.
///
/// # Errors
///
/// Returns an error if the underlying count fails.
pub fn remote_counter(
    persistence: &mut Persistence,
    user: &UserData,
    year: i32,
) -> Result<RemoteCounterResponse, ApiError> {
    let used: i64 = persistence
        .count_remote_days(user.user_id, year)
        .map_err(|e| translate_persistence_error(e, "Remote counter"))?;
    let limit: i64 = i64::from(user.annual_remote_limit);

    Ok(RemoteCounterResponse {
        year,
        used,
        limit,
        remaining: limit - used,
    })
}

/// Builds the vacation counter for one user and year.
///
/// `allowed` is the full-year accrual (through December) plus the manual
/// additional and carryover grants. The optional `month` narrows only the
/// reported `used` figure; `remaining` is always computed against the
/// full-year usage and floored at zero.
///
/// # Errors
///
/// Returns an error if the underlying counts fail or the stored start
/// date is invalid.
pub fn vacation_counter(
    persistence: &mut Persistence,
    user: &UserData,
    year: i32,
    month: Option<u8>,
) -> Result<VacationCounterResponse, ApiError> {
    let start_date: Option<Date> = parse_start_date(user)?;
    let accrued: i64 = i64::from(accrued_vacation_days(start_date, year, 12));
    let allowed: i64 = accrued
        + i64::from(user.additional_vacation_days)
        + i64::from(user.carryover_vacation_days);

    let used: i64 = persistence
        .count_vacation_days(user.user_id, year, month)
        .map_err(|e| translate_persistence_error(e, "Vacation counter"))?;

    let used_full_year: i64 = if month.is_some() {
        persistence
            .count_vacation_days(user.user_id, year, None)
            .map_err(|e| translate_persistence_error(e, "Vacation counter"))?
    } else {
        used
    };

    Ok(VacationCounterResponse {
        year,
        allowed,
        used,
        remaining: (allowed - used_full_year).max(0),
    })
}

/// Computes the team-calendar remote figures for one user: remaining at
/// the month's start (cutoff the day before the month's first date) and
/// remaining against the whole year's usage.
///
/// # Errors
///
/// Returns an error if a count fails or the cutoff date underflows.
pub fn team_remote_figures(
    persistence: &mut Persistence,
    user: &UserData,
    year: i32,
    month_first_day: Date,
) -> Result<(i64, i64), ApiError> {
    let cutoff: Date = month_first_day
        .previous_day()
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Month start has no previous day"),
        })?;

    let used_before: i64 = persistence
        .count_remote_days_until(user.user_id, year, &officecal_domain::format_date(cutoff))
        .map_err(|e| translate_persistence_error(e, "Team calendar"))?;
    let used_total: i64 = persistence
        .count_remote_days(user.user_id, year)
        .map_err(|e| translate_persistence_error(e, "Team calendar"))?;

    let limit: i64 = i64::from(user.annual_remote_limit);
    Ok((limit - used_before, limit - used_total))
}
