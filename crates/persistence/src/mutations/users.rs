// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and vacation-allotment mutations.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::{Connection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewUserData, UserUpdateData};
use crate::diesel_schema::{user_vacation_days, users};
use crate::error::PersistenceError;
use crate::queries::users::UserRow;

backend_fn! {
/// Creates a user together with its vacation allotments.
///
/// The user row and allotment rows are inserted in one transaction. A
/// duplicate email surfaces as `PersistenceError::UniqueViolation`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `data` - The user fields and allotments to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_user(conn: &mut _, data: &NewUserData) -> Result<i64, PersistenceError> {
    info!(
        "Creating user '{}' <{}> with role '{}'",
        data.display_name, data.email, data.role
    );

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(users::table)
            .values((
                users::display_name.eq(&data.display_name),
                users::email.eq(&data.email),
                users::role.eq(&data.role),
                users::annual_remote_limit.eq(data.annual_remote_limit),
                users::start_date.eq(data.start_date.as_deref()),
                users::additional_vacation_days.eq(data.additional_vacation_days),
                users::carryover_vacation_days.eq(data.carryover_vacation_days),
                users::department_id.eq(data.department_id),
            ))
            .execute(conn)?;

        let user_id: i64 = conn.get_last_insert_rowid()?;

        for allotment in &data.vacation_days {
            diesel::insert_into(user_vacation_days::table)
                .values((
                    user_vacation_days::user_id.eq(user_id),
                    user_vacation_days::vacation_type.eq(&allotment.vacation_type),
                    user_vacation_days::days_per_year.eq(allotment.days_per_year),
                ))
                .execute(conn)?;
        }

        Ok(user_id)
    })
}
}

backend_fn! {
/// Applies a partial update to a user.
///
/// Only supplied fields change; `vacation_days: Some(_)` replaces the full
/// allotment set. Everything happens in one transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `changes` - The fields to update
///
/// # Errors
///
/// Returns `NotFound` if the user does not exist, or an error if a write
/// fails (e.g. `UniqueViolation` when the new email is taken).
pub fn update_user(
    conn: &mut _,
    user_id: i64,
    changes: &UserUpdateData,
) -> Result<(), PersistenceError> {
    info!("Updating user ID {}", user_id);

    conn.transaction::<(), PersistenceError, _>(|conn| {
        let existing: UserRow = users::table
            .filter(users::user_id.eq(user_id))
            .select(UserRow::as_select())
            .first(conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    PersistenceError::NotFound(format!("User {user_id} not found"))
                }
                other => PersistenceError::from(other),
            })?;

        let display_name: String = changes
            .display_name
            .clone()
            .unwrap_or(existing.display_name);
        let email: String = changes.email.clone().unwrap_or(existing.email);
        let role: String = changes.role.clone().unwrap_or(existing.role);
        let annual_remote_limit: i32 = changes
            .annual_remote_limit
            .unwrap_or(existing.annual_remote_limit);
        let start_date: Option<String> = changes.start_date.clone().or(existing.start_date);
        let additional_vacation_days: i32 = changes
            .additional_vacation_days
            .unwrap_or(existing.additional_vacation_days);
        let carryover_vacation_days: i32 = changes
            .carryover_vacation_days
            .unwrap_or(existing.carryover_vacation_days);
        let department_id: Option<i64> = changes.department_id.or(existing.department_id);

        diesel::update(users::table)
            .filter(users::user_id.eq(user_id))
            .set((
                users::display_name.eq(display_name),
                users::email.eq(email),
                users::role.eq(role),
                users::annual_remote_limit.eq(annual_remote_limit),
                users::start_date.eq(start_date),
                users::additional_vacation_days.eq(additional_vacation_days),
                users::carryover_vacation_days.eq(carryover_vacation_days),
                users::department_id.eq(department_id),
            ))
            .execute(conn)?;

        if let Some(allotments) = &changes.vacation_days {
            diesel::delete(
                user_vacation_days::table.filter(user_vacation_days::user_id.eq(user_id)),
            )
            .execute(conn)?;

            for allotment in allotments {
                diesel::insert_into(user_vacation_days::table)
                    .values((
                        user_vacation_days::user_id.eq(user_id),
                        user_vacation_days::vacation_type.eq(&allotment.vacation_type),
                        user_vacation_days::days_per_year.eq(allotment.days_per_year),
                    ))
                    .execute(conn)?;
            }
        }

        Ok(())
    })
}
}
