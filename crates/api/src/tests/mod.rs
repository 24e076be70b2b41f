// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod calendar_tests;
mod report_tests;

use crate::auth::CurrentUser;
use officecal_domain::Role;
use officecal_persistence::{NewUserData, Persistence, UserData};

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

pub fn create_actor(
    persistence: &mut Persistence,
    display_name: &str,
    email: &str,
    role: Role,
) -> CurrentUser {
    let data: NewUserData = NewUserData {
        display_name: display_name.to_string(),
        email: email.to_string(),
        role: role.as_str().to_string(),
        annual_remote_limit: 100,
        start_date: None,
        additional_vacation_days: 0,
        carryover_vacation_days: 0,
        department_id: None,
        vacation_days: Vec::new(),
    };
    let user: UserData = persistence
        .create_user(&data)
        .expect("User creation should succeed");
    CurrentUser { user, role }
}
