// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_actor, test_persistence};
use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::handlers::{
    get_month, get_user_calendar, set_day_holiday, set_day_workday_override, set_month_locked,
    update_user_calendar,
};
use crate::request_response::{
    DayStatusItem, MonthInfo, UserCalendarResponse, UserCalendarUpdateRequest,
};
use officecal_domain::{DayStatus, Role};
use officecal_persistence::Persistence;

fn items(entries: &[(&str, DayStatus)]) -> UserCalendarUpdateRequest {
    UserCalendarUpdateRequest {
        items: entries
            .iter()
            .map(|(date, status)| DayStatusItem {
                date: (*date).to_string(),
                status: *status,
                note: None,
            })
            .collect(),
    }
}

#[test]
fn test_get_month_provisions_full_day_set() {
    let mut persistence: Persistence = test_persistence();

    let month: MonthInfo = get_month(&mut persistence, 2024, 2).unwrap();
    assert_eq!(month.days.len(), 29);
    assert_eq!(month.year, 2024);
    assert!(!month.is_locked);

    let again: MonthInfo = get_month(&mut persistence, 2024, 2).unwrap();
    assert_eq!(again.month_id, month.month_id);
}

#[test]
fn test_get_month_rejects_invalid_month_number() {
    let mut persistence: Persistence = test_persistence();

    let result = get_month(&mut persistence, 2024, 13);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_update_user_calendar_round_trips_subset() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);

    let request = items(&[
        ("2024-04-01", DayStatus::Remote),
        ("2024-04-02", DayStatus::Vacation),
    ]);
    let response: UserCalendarResponse =
        update_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4, &request).unwrap();

    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].date, "2024-04-01");
    assert_eq!(response.items[0].status, DayStatus::Remote);

    // A second replace with a different subset removes the first one.
    let replacement = items(&[("2024-04-10", DayStatus::Trip)]);
    let replaced: UserCalendarResponse =
        update_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4, &replacement)
            .unwrap();
    assert_eq!(replaced.items.len(), 1);
    assert_eq!(replaced.items[0].date, "2024-04-10");
    assert_eq!(replaced.items[0].status, DayStatus::Trip);
}

#[test]
fn test_update_user_calendar_rejects_date_outside_month() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);

    let request = items(&[
        ("2024-04-01", DayStatus::Remote),
        ("2024-05-01", DayStatus::Remote),
    ]);
    let result = update_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));

    // Fail-closed: the valid first item was not applied either.
    let read: UserCalendarResponse =
        get_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4).unwrap();
    assert!(read.items.is_empty());
}

#[test]
fn test_update_user_calendar_rejects_locked_month() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);

    set_month_locked(&mut persistence, &alice, 2024, 4, true).unwrap();

    let request = items(&[("2024-04-01", DayStatus::Remote)]);
    let result = update_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4, &request);
    assert_eq!(result.unwrap_err(), ApiError::MonthLocked { year: 2024, month: 4 });

    let read: UserCalendarResponse =
        get_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4).unwrap();
    assert!(read.items.is_empty());

    // Unlocking lets the write through again.
    set_month_locked(&mut persistence, &alice, 2024, 4, false).unwrap();
    assert!(
        update_user_calendar(&mut persistence, &alice, alice.id(), 2024, 4, &request).is_ok()
    );
}

#[test]
fn test_day_flags_require_date_inside_month() {
    let mut persistence: Persistence = test_persistence();
    let admin: CurrentUser =
        create_actor(&mut persistence, "Root", "root@example.com", Role::Admin);

    let result = set_day_holiday(&mut persistence, &admin, 2024, 4, "2024-05-01", true);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_day_flags_round_trip() {
    let mut persistence: Persistence = test_persistence();
    let admin: CurrentUser =
        create_actor(&mut persistence, "Root", "root@example.com", Role::Admin);

    let holiday = set_day_holiday(&mut persistence, &admin, 2024, 12, "2024-12-25", true).unwrap();
    assert!(holiday.is_holiday);

    let workday =
        set_day_workday_override(&mut persistence, &admin, 2024, 12, "2024-12-28", true).unwrap();
    assert!(workday.is_workday_override);
    // 2024-12-28 is a Saturday; the nominal classification is untouched.
    assert!(workday.is_weekend);

    let month: MonthInfo = get_month(&mut persistence, 2024, 12).unwrap();
    let christmas = month.days.iter().find(|d| d.date == "2024-12-25").unwrap();
    assert!(christmas.is_holiday);
}

#[test]
fn test_update_other_users_calendar_requires_admin() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);
    let bob: CurrentUser =
        create_actor(&mut persistence, "Bob", "bob@example.com", Role::Employee);

    let request = items(&[("2024-04-01", DayStatus::Remote)]);
    let result = update_user_calendar(&mut persistence, &alice, bob.id(), 2024, 4, &request);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
