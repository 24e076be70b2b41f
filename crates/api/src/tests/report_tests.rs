// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_actor, test_persistence};
use crate::auth::CurrentUser;
use crate::handlers::{
    remote_counter, team_calendar, update_user_calendar, vacation_counter, vacation_dates,
    who_is_in_office,
};
use crate::request_response::{
    DayStatusItem, RemoteCounterResponse, TeamCalendarResponse, UserCalendarUpdateRequest,
    VacationCounterResponse, WhoIsInOfficeResponse,
};
use officecal_domain::{DayStatus, Role};
use officecal_persistence::{Persistence, UserUpdateData};

/// Marks `count` days of the given month with a status via the calendar
/// replace operation, starting at the 1st.
fn mark_days(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    year: i32,
    month: u8,
    status: DayStatus,
    count: u8,
) {
    let items: Vec<DayStatusItem> = (1..=count)
        .map(|day| DayStatusItem {
            date: format!("{year:04}-{month:02}-{day:02}"),
            status,
            note: None,
        })
        .collect();
    update_user_calendar(
        persistence,
        actor,
        actor.id(),
        year,
        month,
        &UserCalendarUpdateRequest { items },
    )
    .unwrap();
}

#[test]
fn test_remote_counter_scenario() {
    // User starts 2024-04-01 with the default limit of 100; ten April
    // days are remote.
    let mut persistence: Persistence = test_persistence();
    let mut alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);
    alice.user = persistence
        .update_user(
            alice.id(),
            &UserUpdateData {
                start_date: Some("2024-04-01".to_string()),
                ..UserUpdateData::default()
            },
        )
        .unwrap();

    mark_days(&mut persistence, &alice, 2024, 4, DayStatus::Remote, 10);

    let counter: RemoteCounterResponse = remote_counter(&mut persistence, &alice, 2024).unwrap();
    assert_eq!(counter.used, 10);
    assert_eq!(counter.limit, 100);
    assert_eq!(counter.remaining, 90);
}

#[test]
fn test_remote_counter_remaining_is_not_floored() {
    let mut persistence: Persistence = test_persistence();
    let mut alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);
    alice.user = persistence
        .update_user(
            alice.id(),
            &UserUpdateData {
                annual_remote_limit: Some(5),
                ..UserUpdateData::default()
            },
        )
        .unwrap();

    mark_days(&mut persistence, &alice, 2024, 4, DayStatus::Remote, 10);

    let counter: RemoteCounterResponse = remote_counter(&mut persistence, &alice, 2024).unwrap();
    assert_eq!(counter.remaining, -5);
}

#[test]
fn test_vacation_counter_combines_accrual_and_grants() {
    let mut persistence: Persistence = test_persistence();
    let mut alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);
    alice.user = persistence
        .update_user(
            alice.id(),
            &UserUpdateData {
                additional_vacation_days: Some(2),
                carryover_vacation_days: Some(3),
                ..UserUpdateData::default()
            },
        )
        .unwrap();

    mark_days(&mut persistence, &alice, 2024, 7, DayStatus::Vacation, 4);

    // No start date: full 20-day accrual, plus 2 + 3 in grants.
    let counter: VacationCounterResponse =
        vacation_counter(&mut persistence, &alice, 2024, None).unwrap();
    assert_eq!(counter.allowed, 25);
    assert_eq!(counter.used, 4);
    assert_eq!(counter.remaining, 21);
}

#[test]
fn test_vacation_counter_mid_year_start_floors_remaining_at_zero() {
    let mut persistence: Persistence = test_persistence();
    let mut alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);
    alice.user = persistence
        .update_user(
            alice.id(),
            &UserUpdateData {
                start_date: Some("2024-07-01".to_string()),
                ..UserUpdateData::default()
            },
        )
        .unwrap();

    // Accrual through December is 10; 12 vacation days overdraw it.
    mark_days(&mut persistence, &alice, 2024, 8, DayStatus::Vacation, 12);

    let counter: VacationCounterResponse =
        vacation_counter(&mut persistence, &alice, 2024, None).unwrap();
    assert_eq!(counter.allowed, 10);
    assert_eq!(counter.used, 12);
    assert_eq!(counter.remaining, 0);
}

#[test]
fn test_vacation_counter_month_narrows_used_only() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);

    mark_days(&mut persistence, &alice, 2024, 4, DayStatus::Vacation, 3);
    mark_days(&mut persistence, &alice, 2024, 7, DayStatus::Vacation, 5);

    let april: VacationCounterResponse =
        vacation_counter(&mut persistence, &alice, 2024, Some(4)).unwrap();
    assert_eq!(april.used, 3);
    // Remaining still reflects the full year's eight used days.
    assert_eq!(april.remaining, 12);
}

#[test]
fn test_team_calendar_start_and_end_figures() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);

    // Five remote days in March, ten in April, two in July.
    mark_days(&mut persistence, &alice, 2024, 3, DayStatus::Remote, 5);
    mark_days(&mut persistence, &alice, 2024, 4, DayStatus::Remote, 10);
    mark_days(&mut persistence, &alice, 2024, 7, DayStatus::Remote, 2);

    let team: TeamCalendarResponse = team_calendar(&mut persistence, 2024, 4).unwrap();
    assert_eq!(team.rows.len(), 1);

    let row = &team.rows[0];
    // Start figure: cutoff 2024-03-31, five used days before April.
    assert_eq!(row.remote_remaining_start, 95);
    // End figure uses the total-year count (17 used days).
    assert_eq!(row.remote_remaining_end, 83);
    assert_eq!(row.statuses.len(), 10);
    assert_eq!(
        row.statuses.get("2024-04-01"),
        Some(&DayStatus::Remote)
    );
}

#[test]
fn test_vacation_dates_are_ascending() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);

    mark_days(&mut persistence, &alice, 2024, 7, DayStatus::Vacation, 2);
    mark_days(&mut persistence, &alice, 2024, 4, DayStatus::Vacation, 1);

    let response = vacation_dates(&mut persistence, &alice, alice.id(), 2024).unwrap();
    assert_eq!(
        response.dates,
        vec!["2024-04-01", "2024-07-01", "2024-07-02"]
    );
}

#[test]
fn test_who_is_in_office_defaults_to_office() {
    let mut persistence: Persistence = test_persistence();
    let alice: CurrentUser =
        create_actor(&mut persistence, "Alice", "alice@example.com", Role::Employee);
    let bob: CurrentUser =
        create_actor(&mut persistence, "Bob", "bob@example.com", Role::Admin);

    mark_days(&mut persistence, &alice, 2024, 4, DayStatus::Remote, 1);

    let view: WhoIsInOfficeResponse =
        who_is_in_office(&mut persistence, "2024-04-01").unwrap();

    // Every status bucket is present, even when empty.
    assert_eq!(view.by_status.len(), 6);
    assert_eq!(view.by_status["remote"].len(), 1);
    assert_eq!(view.by_status["remote"][0].user_id, alice.id());
    // Bob has no stored row and lands in the office bucket.
    assert_eq!(view.by_status["office"].len(), 1);
    assert_eq!(view.by_status["office"][0].user_id, bob.id());
    assert!(view.by_status["vacation"].is_empty());
}
