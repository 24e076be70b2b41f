// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_user, test_persistence};
use crate::Persistence;
use crate::data_models::{DayStatusData, MonthWithDays, NewStatusEntry, UserData};
use officecal_domain::DayStatus;

#[test]
fn test_upsert_twice_leaves_one_row_with_latest_value() {
    let mut persistence: Persistence = test_persistence();
    let user: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();
    let day_id: i64 = month.days[0].day_id;

    persistence
        .upsert_day_status(user.user_id, day_id, DayStatus::Remote, None)
        .unwrap();
    persistence
        .upsert_day_status(user.user_id, day_id, DayStatus::Vacation, Some("spring break"))
        .unwrap();

    let stored: Vec<DayStatusData> = persistence
        .statuses_for_user_month(user.user_id, month.month.month_id)
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, "vacation");
    assert_eq!(stored[0].note.as_deref(), Some("spring break"));
}

#[test]
fn test_upsert_replaces_note_with_none() {
    let mut persistence: Persistence = test_persistence();
    let user: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();
    let day_id: i64 = month.days[0].day_id;

    persistence
        .upsert_day_status(user.user_id, day_id, DayStatus::Trip, Some("client visit"))
        .unwrap();
    persistence
        .upsert_day_status(user.user_id, day_id, DayStatus::Trip, None)
        .unwrap();

    let stored: Option<DayStatusData> =
        persistence.find_day_status(user.user_id, day_id).unwrap();
    assert_eq!(stored.unwrap().note, None);
}

#[test]
fn test_delete_day_status_reports_whether_row_existed() {
    let mut persistence: Persistence = test_persistence();
    let user: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();
    let day_id: i64 = month.days[3].day_id;

    assert!(!persistence.delete_day_status(user.user_id, day_id).unwrap());

    persistence
        .upsert_day_status(user.user_id, day_id, DayStatus::Absent, None)
        .unwrap();
    assert!(persistence.delete_day_status(user.user_id, day_id).unwrap());
    assert!(persistence
        .find_day_status(user.user_id, day_id)
        .unwrap()
        .is_none());
}

#[test]
fn test_replace_user_month_round_trips_a_subset() {
    let mut persistence: Persistence = test_persistence();
    let user: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();

    // Fill the first ten days, then replace with a three-day subset.
    for day in &month.days[..10] {
        persistence
            .upsert_day_status(user.user_id, day.day_id, DayStatus::Office, None)
            .unwrap();
    }

    let entries: Vec<NewStatusEntry> = vec![
        NewStatusEntry {
            day_id: month.days[1].day_id,
            status: DayStatus::Remote.as_str().to_string(),
            note: None,
        },
        NewStatusEntry {
            day_id: month.days[2].day_id,
            status: DayStatus::Vacation.as_str().to_string(),
            note: Some("long weekend".to_string()),
        },
        NewStatusEntry {
            day_id: month.days[4].day_id,
            status: DayStatus::Night.as_str().to_string(),
            note: None,
        },
    ];
    persistence
        .replace_user_month(user.user_id, month.month.month_id, &entries)
        .unwrap();

    let stored: Vec<DayStatusData> = persistence
        .statuses_for_user_month(user.user_id, month.month.month_id)
        .unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0].date, "2024-04-02");
    assert_eq!(stored[0].status, "remote");
    assert_eq!(stored[1].date, "2024-04-03");
    assert_eq!(stored[1].status, "vacation");
    assert_eq!(stored[1].note.as_deref(), Some("long weekend"));
    assert_eq!(stored[2].date, "2024-04-05");
    assert_eq!(stored[2].status, "night");
}

#[test]
fn test_delete_user_month_statuses_is_scoped_to_user_and_month() {
    let mut persistence: Persistence = test_persistence();
    let alice: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let bob: UserData = create_test_user(&mut persistence, "Bob", "bob@example.com");
    let april: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();
    let may: MonthWithDays = persistence.get_or_create_month(2024, 5).unwrap();

    persistence
        .upsert_day_status(alice.user_id, april.days[0].day_id, DayStatus::Remote, None)
        .unwrap();
    persistence
        .upsert_day_status(alice.user_id, may.days[0].day_id, DayStatus::Remote, None)
        .unwrap();
    persistence
        .upsert_day_status(bob.user_id, april.days[0].day_id, DayStatus::Remote, None)
        .unwrap();

    let deleted: usize = persistence
        .delete_user_month_statuses(alice.user_id, april.month.month_id)
        .unwrap();
    assert_eq!(deleted, 1);

    assert!(persistence
        .statuses_for_user_month(alice.user_id, april.month.month_id)
        .unwrap()
        .is_empty());
    assert_eq!(
        persistence
            .statuses_for_user_month(alice.user_id, may.month.month_id)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        persistence
            .statuses_for_user_month(bob.user_id, april.month.month_id)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_statuses_for_month_covers_every_user() {
    let mut persistence: Persistence = test_persistence();
    let alice: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let bob: UserData = create_test_user(&mut persistence, "Bob", "bob@example.com");
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();

    persistence
        .upsert_day_status(alice.user_id, month.days[0].day_id, DayStatus::Remote, None)
        .unwrap();
    persistence
        .upsert_day_status(bob.user_id, month.days[1].day_id, DayStatus::Trip, Some("expo"))
        .unwrap();

    let all: Vec<DayStatusData> = persistence
        .statuses_for_month(month.month.month_id)
        .unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|s| s.user_id == alice.user_id && s.status == "remote"));
    assert!(all.iter().any(|s| s.user_id == bob.user_id && s.status == "trip"));
}

#[test]
fn test_statuses_for_day() {
    let mut persistence: Persistence = test_persistence();
    let alice: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    let bob: UserData = create_test_user(&mut persistence, "Bob", "bob@example.com");
    let month: MonthWithDays = persistence.get_or_create_month(2024, 4).unwrap();
    let day_id: i64 = month.days[9].day_id;

    persistence
        .upsert_day_status(alice.user_id, day_id, DayStatus::Night, None)
        .unwrap();
    persistence
        .upsert_day_status(bob.user_id, month.days[10].day_id, DayStatus::Remote, None)
        .unwrap();

    let statuses: Vec<DayStatusData> = persistence.statuses_for_day(day_id).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].user_id, alice.user_id);
    assert_eq!(statuses[0].status, "night");
}
