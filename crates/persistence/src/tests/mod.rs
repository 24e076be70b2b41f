// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#[cfg(feature = "mysql")]
mod backend_validation_tests;
mod calendar_tests;
mod status_tests;
mod user_tests;

use crate::data_models::{NewUserData, UserData};
use crate::Persistence;
use officecal_domain::Role;

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

pub fn new_user(display_name: &str, email: &str) -> NewUserData {
    NewUserData {
        display_name: display_name.to_string(),
        email: email.to_string(),
        role: Role::Employee.as_str().to_string(),
        annual_remote_limit: 100,
        start_date: None,
        additional_vacation_days: 0,
        carryover_vacation_days: 0,
        department_id: None,
        vacation_days: Vec::new(),
    }
}

pub fn create_test_user(persistence: &mut Persistence, display_name: &str, email: &str) -> UserData {
    persistence
        .create_user(&new_user(display_name, email))
        .expect("User creation should succeed")
}
