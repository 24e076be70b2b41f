// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation accrual calculation.
//!
//! This module provides the pure, deterministic accrual rule: a fixed
//! annual allotment earned linearly per month of employment, truncated
//! (never rounded up) at the final step. The result is re-derivable to
//! bit-exact integers from the rule below; no floating point is involved.

use time::Date;

/// The fixed annual vacation allotment, in days.
pub const ANNUAL_VACATION_DAYS: u16 = 20;

/// Months in a calendar year.
const MONTHS_PER_YEAR: u16 = 12;

/// Calculates vacation days accrued by the end of `target_month` in
/// `target_year` for an employee with the given start date.
///
/// Rules:
/// - `target_month` is clamped to 12.
/// - No start date, or a start year before the target year, accrues the
///   full pro-rated amount: `floor(months * 20 / 12)`.
/// - A start year after the target year accrues nothing.
/// - A start within the target year accrues from the start month onward,
///   with the start month credited as a full month:
///   `floor((target_month - start_month + 1) * 20 / 12)`.
///
/// # Arguments
///
/// * `start_date` - The employment start date, if known
/// * `target_year` - The year to accrue through
/// * `target_month` - The 1-based month to accrue through (inclusive)
#[must_use]
pub fn accrued_vacation_days(
    start_date: Option<Date>,
    target_year: i32,
    target_month: u8,
) -> u16 {
    let months_elapsed: u16 = u16::from(target_month.min(12));

    match start_date {
        None => prorated(months_elapsed),
        Some(start) if start.year() < target_year => prorated(months_elapsed),
        Some(start) if start.year() > target_year => 0,
        Some(start) => {
            let start_month: u16 = u16::from(u8::from(start.month()));
            if months_elapsed < start_month {
                0
            } else {
                prorated(months_elapsed - start_month + 1)
            }
        }
    }
}

/// Pro-rates the annual allotment over the given number of months,
/// truncating at the final step (floor, not round-half-up).
const fn prorated(months: u16) -> u16 {
    months * ANNUAL_VACATION_DAYS / MONTHS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_full_year_without_start_date() {
        assert_eq!(accrued_vacation_days(None, 2024, 12), 20);
    }

    #[test]
    fn test_full_year_starting_january_first() {
        assert_eq!(
            accrued_vacation_days(Some(date!(2024 - 01 - 01)), 2024, 12),
            20
        );
    }

    #[test]
    fn test_mid_year_start_accrues_half() {
        // July through December is six months: floor(6 * 20 / 12) == 10.
        assert_eq!(
            accrued_vacation_days(Some(date!(2024 - 07 - 01)), 2024, 12),
            10
        );
    }

    #[test]
    fn test_target_month_before_start_month() {
        assert_eq!(
            accrued_vacation_days(Some(date!(2024 - 07 - 01)), 2024, 3),
            0
        );
    }

    #[test]
    fn test_start_in_future_year() {
        assert_eq!(
            accrued_vacation_days(Some(date!(2025 - 01 - 01)), 2024, 12),
            0
        );
    }

    #[test]
    fn test_start_in_prior_year_is_fully_prorated() {
        assert_eq!(
            accrued_vacation_days(Some(date!(2020 - 09 - 15)), 2024, 6),
            10
        );
    }

    #[test]
    fn test_truncation_not_rounding() {
        // One month accrues floor(20/12) == 1, never 2.
        assert_eq!(accrued_vacation_days(None, 2024, 1), 1);
        // Five months accrue floor(100/12) == 8, not 8.33 rounded to 8 vs 9.
        assert_eq!(accrued_vacation_days(None, 2024, 5), 8);
        // Seven months accrue floor(140/12) == 11.
        assert_eq!(accrued_vacation_days(None, 2024, 7), 11);
    }

    #[test]
    fn test_target_month_clamped_to_twelve() {
        assert_eq!(accrued_vacation_days(None, 2024, 14), 20);
    }

    #[test]
    fn test_start_month_counts_as_full_month() {
        // Starting mid-December still credits December itself.
        assert_eq!(
            accrued_vacation_days(Some(date!(2024 - 12 - 31)), 2024, 12),
            1
        );
    }
}
