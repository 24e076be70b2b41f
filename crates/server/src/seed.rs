// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data seeding.
//!
//! Departments are topped up idempotently on every seed run; demo users
//! are created only when the user table is empty, so re-seeding an
//! existing database never clobbers real accounts.

use officecal_domain::Role;
use officecal_persistence::{NewUserData, Persistence, PersistenceError};
use tracing::info;

/// The fixed department list provisioned by seeding.
const DEPARTMENT_NAMES: [&str; 14] = [
    "Accounting and law",
    "Cloud",
    "Development",
    "HR",
    "Integrations",
    "Marketing",
    "Office administrators",
    "Partner relationships",
    "Product owners",
    "Sales",
    "Security",
    "Support",
    "System administration",
    "Trainings",
];

fn demo_user(display_name: &str, email: &str, role: Role, department_id: Option<i64>) -> NewUserData {
    NewUserData {
        display_name: display_name.to_string(),
        email: email.to_string(),
        role: role.as_str().to_string(),
        annual_remote_limit: 100,
        start_date: None,
        additional_vacation_days: 0,
        carryover_vacation_days: 0,
        department_id,
        vacation_days: Vec::new(),
    }
}

/// Seeds the fixed department list and, when no users exist yet, three
/// demo users (admin, employee, manager).
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn seed_demo_data(persistence: &mut Persistence) -> Result<(), PersistenceError> {
    let mut hr_department: Option<i64> = None;
    let mut dev_department: Option<i64> = None;

    for name in DEPARTMENT_NAMES {
        let department = match persistence.find_department_by_name(name)? {
            Some(existing) => existing,
            None => persistence.create_department(name)?,
        };
        match name {
            "HR" => hr_department = Some(department.department_id),
            "Development" => dev_department = Some(department.department_id),
            _ => {}
        }
    }
    info!("Seeded {} departments", DEPARTMENT_NAMES.len());

    if persistence.count_users()? > 0 {
        info!("Users already exist; skipping demo users");
        return Ok(());
    }

    persistence.create_user(&demo_user(
        "Admin User",
        "admin@example.com",
        Role::Admin,
        hr_department,
    ))?;
    persistence.create_user(&demo_user(
        "Alice Employee",
        "alice@example.com",
        Role::Employee,
        dev_department,
    ))?;
    persistence.create_user(&demo_user(
        "Bob Manager",
        "bob@example.com",
        Role::Manager,
        dev_department,
    ))?;
    info!("Seeded 3 demo users");

    Ok(())
}
