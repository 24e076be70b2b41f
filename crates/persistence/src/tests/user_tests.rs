// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_user, new_user, test_persistence};
use crate::data_models::{
    DepartmentData, NewUserData, UserData, UserUpdateData, VacationAllotmentData,
};
use crate::{Persistence, PersistenceError};

#[test]
fn test_create_and_get_user() {
    let mut persistence: Persistence = test_persistence();

    let created: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");
    assert_eq!(created.display_name, "Alice");
    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.role, "employee");
    assert_eq!(created.annual_remote_limit, 100);

    let fetched: UserData = persistence.get_user(created.user_id).unwrap().unwrap();
    assert_eq!(fetched, created);

    assert!(persistence.get_user(9999).unwrap().is_none());
}

#[test]
fn test_duplicate_email_is_a_unique_violation() {
    let mut persistence: Persistence = test_persistence();
    create_test_user(&mut persistence, "Alice", "alice@example.com");

    let result: Result<UserData, PersistenceError> =
        persistence.create_user(&new_user("Alice Again", "alice@example.com"));

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_list_users_is_ordered_by_display_name() {
    let mut persistence: Persistence = test_persistence();
    create_test_user(&mut persistence, "Charlie", "charlie@example.com");
    create_test_user(&mut persistence, "Alice", "alice@example.com");
    create_test_user(&mut persistence, "Bob", "bob@example.com");

    let names: Vec<String> = persistence
        .list_users()
        .unwrap()
        .into_iter()
        .map(|u| u.display_name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_count_users() {
    let mut persistence: Persistence = test_persistence();
    assert_eq!(persistence.count_users().unwrap(), 0);

    create_test_user(&mut persistence, "Alice", "alice@example.com");
    assert_eq!(persistence.count_users().unwrap(), 1);

    create_test_user(&mut persistence, "Bob", "bob@example.com");
    assert_eq!(persistence.count_users().unwrap(), 2);
}

#[test]
fn test_update_user_changes_only_supplied_fields() {
    let mut persistence: Persistence = test_persistence();
    let user: UserData = create_test_user(&mut persistence, "Alice", "alice@example.com");

    let changes: UserUpdateData = UserUpdateData {
        annual_remote_limit: Some(50),
        start_date: Some("2024-04-01".to_string()),
        ..UserUpdateData::default()
    };
    let updated: UserData = persistence.update_user(user.user_id, &changes).unwrap();

    assert_eq!(updated.display_name, "Alice");
    assert_eq!(updated.email, "alice@example.com");
    assert_eq!(updated.annual_remote_limit, 50);
    assert_eq!(updated.start_date.as_deref(), Some("2024-04-01"));
}

#[test]
fn test_update_unknown_user_is_not_found() {
    let mut persistence: Persistence = test_persistence();

    let result = persistence.update_user(42, &UserUpdateData::default());
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_vacation_allotments_created_and_replaced() {
    let mut persistence: Persistence = test_persistence();

    let mut data: NewUserData = new_user("Alice", "alice@example.com");
    data.vacation_days = vec![
        VacationAllotmentData {
            vacation_type: "statutory".to_string(),
            days_per_year: 20,
        },
        VacationAllotmentData {
            vacation_type: "seniority".to_string(),
            days_per_year: 2,
        },
    ];
    let user: UserData = persistence.create_user(&data).unwrap();

    let stored: Vec<VacationAllotmentData> =
        persistence.vacation_allotments(user.user_id).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].vacation_type, "seniority");
    assert_eq!(stored[1].vacation_type, "statutory");

    let changes: UserUpdateData = UserUpdateData {
        vacation_days: Some(vec![VacationAllotmentData {
            vacation_type: "statutory".to_string(),
            days_per_year: 25,
        }]),
        ..UserUpdateData::default()
    };
    persistence.update_user(user.user_id, &changes).unwrap();

    let replaced: Vec<VacationAllotmentData> =
        persistence.vacation_allotments(user.user_id).unwrap();
    assert_eq!(replaced.len(), 1);
    assert_eq!(replaced[0].days_per_year, 25);
}

#[test]
fn test_departments_unique_listed_and_found() {
    let mut persistence: Persistence = test_persistence();

    let hr: DepartmentData = persistence.create_department("HR").unwrap();
    persistence.create_department("Development").unwrap();

    let duplicate = persistence.create_department("HR");
    assert!(matches!(
        duplicate,
        Err(PersistenceError::UniqueViolation(_))
    ));

    let listed: Vec<DepartmentData> = persistence.list_departments().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Development");
    assert_eq!(listed[1].name, "HR");

    let found: DepartmentData = persistence
        .find_department(hr.department_id)
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "HR");
    assert!(persistence
        .find_department_by_name("Security")
        .unwrap()
        .is_none());
}

#[test]
fn test_user_with_department_reference() {
    let mut persistence: Persistence = test_persistence();
    let dept: DepartmentData = persistence.create_department("Development").unwrap();

    let mut data: NewUserData = new_user("Alice", "alice@example.com");
    data.department_id = Some(dept.department_id);
    let user: UserData = persistence.create_user(&data).unwrap();

    assert_eq!(user.department_id, Some(dept.department_id));
}
