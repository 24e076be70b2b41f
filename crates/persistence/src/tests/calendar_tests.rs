// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::test_persistence;
use crate::Persistence;
use crate::data_models::{DayData, MonthWithDays};

#[test]
fn test_get_or_create_month_populates_all_days() {
    let mut persistence: Persistence = test_persistence();

    let month: MonthWithDays = persistence.get_or_create_month(2024, 1).unwrap();

    assert_eq!(month.month.year, 2024);
    assert_eq!(month.month.month, 1);
    assert!(!month.month.is_locked);
    assert_eq!(month.days.len(), 31);
    assert_eq!(month.days[0].date, "2024-01-01");
    assert_eq!(month.days[30].date, "2024-01-31");
}

#[test]
fn test_get_or_create_month_leap_february() {
    let mut persistence: Persistence = test_persistence();

    let leap: MonthWithDays = persistence.get_or_create_month(2024, 2).unwrap();
    let regular: MonthWithDays = persistence.get_or_create_month(2023, 2).unwrap();

    assert_eq!(leap.days.len(), 29);
    assert_eq!(regular.days.len(), 28);
}

#[test]
fn test_get_or_create_month_is_idempotent() {
    let mut persistence: Persistence = test_persistence();

    let first: MonthWithDays = persistence.get_or_create_month(2024, 6).unwrap();
    let second: MonthWithDays = persistence.get_or_create_month(2024, 6).unwrap();

    assert_eq!(first.month.month_id, second.month.month_id);
    let first_ids: Vec<i64> = first.days.iter().map(|d| d.day_id).collect();
    let second_ids: Vec<i64> = second.days.iter().map(|d| d.day_id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn test_provisioned_days_derive_weekday_and_weekend() {
    let mut persistence: Persistence = test_persistence();

    // April 2024: the 1st is a Monday, the 6th/7th are the first weekend.
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();

    let first: &DayData = &month.days[0];
    assert_eq!(first.weekday_name, "Mon");
    assert!(!first.is_weekend);
    assert!(!first.is_holiday);
    assert!(!first.is_workday_override);

    let saturday: &DayData = &month.days[5];
    assert_eq!(saturday.date, "2024-04-06");
    assert_eq!(saturday.weekday_name, "Sat");
    assert!(saturday.is_weekend);
}

#[test]
fn test_get_or_create_month_rejects_invalid_month() {
    let mut persistence: Persistence = test_persistence();

    assert!(persistence.get_or_create_month(2024, 0).is_err());
    assert!(persistence.get_or_create_month(2024, 13).is_err());
}

#[test]
fn test_lock_flag_round_trips() {
    let mut persistence: Persistence = test_persistence();

    let month: MonthWithDays = persistence.get_or_create_month(2024, 3).unwrap();
    persistence
        .set_month_locked(month.month.month_id, true)
        .unwrap();

    let reloaded: MonthWithDays = persistence.get_or_create_month(2024, 3).unwrap();
    assert!(reloaded.month.is_locked);

    persistence
        .set_month_locked(month.month.month_id, false)
        .unwrap();
    let unlocked: MonthWithDays = persistence.get_month(month.month.month_id).unwrap();
    assert!(!unlocked.month.is_locked);
}

#[test]
fn test_day_flags_are_settable() {
    let mut persistence: Persistence = test_persistence();

    let month: MonthWithDays = persistence.get_or_create_month(2024, 5).unwrap();
    let day_id: i64 = month.days[0].day_id;

    let flagged: DayData = persistence.set_day_holiday(day_id, true).unwrap();
    assert!(flagged.is_holiday);
    assert!(!flagged.is_workday_override);

    let overridden: DayData = persistence.set_day_workday_override(day_id, true).unwrap();
    assert!(overridden.is_holiday);
    assert!(overridden.is_workday_override);

    let cleared: DayData = persistence.set_day_holiday(day_id, false).unwrap();
    assert!(!cleared.is_holiday);
    assert!(cleared.is_workday_override);
}

#[test]
fn test_find_day_by_date() {
    let mut persistence: Persistence = test_persistence();

    let month: MonthWithDays = persistence.get_or_create_month(2024, 7).unwrap();

    let day: DayData = persistence
        .find_day(month.month.month_id, "2024-07-15")
        .unwrap()
        .unwrap();
    assert_eq!(day.date, "2024-07-15");

    // A date outside the month is absent, not an error.
    assert!(persistence
        .find_day(month.month.month_id, "2024-08-15")
        .unwrap()
        .is_none());
}
