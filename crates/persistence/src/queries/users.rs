// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and vacation-allotment queries.

use diesel::dsl::count;
use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{UserData, VacationAllotmentData};
use crate::diesel_schema::{user_vacation_days, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub(crate) struct UserRow {
    pub(crate) user_id: i64,
    pub(crate) display_name: String,
    pub(crate) email: String,
    pub(crate) role: String,
    pub(crate) annual_remote_limit: i32,
    pub(crate) start_date: Option<String>,
    pub(crate) additional_vacation_days: i32,
    pub(crate) carryover_vacation_days: i32,
    pub(crate) department_id: Option<i64>,
}

impl From<UserRow> for UserData {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            display_name: row.display_name,
            email: row.email,
            role: row.role,
            annual_remote_limit: row.annual_remote_limit,
            start_date: row.start_date,
            additional_vacation_days: row.additional_vacation_days,
            carryover_vacation_days: row.carryover_vacation_days,
            department_id: row.department_id,
        }
    }
}

backend_fn! {
/// Retrieves a user by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user(conn: &mut _, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by ID: {}", user_id);

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(UserData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all users ordered by display name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut _) -> Result<Vec<UserData>, PersistenceError> {
    debug!("Listing all users");

    let rows: Vec<UserRow> = users::table
        .order_by(users::display_name.asc())
        .select(UserRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(UserData::from).collect())
}
}

backend_fn! {
/// Counts the total number of users.
///
/// This feeds the bootstrap authorization policy: while at most one user
/// exists, admin-gated actions bypass the role check.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_users(conn: &mut _) -> Result<i64, PersistenceError> {
    let total: i64 = users::table.select(count(users::user_id)).first(conn)?;
    Ok(total)
}
}

backend_fn! {
/// Lists a user's per-type vacation allotments, ordered by type.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn vacation_allotments(
    conn: &mut _,
    user_id: i64,
) -> Result<Vec<VacationAllotmentData>, PersistenceError> {
    let rows: Vec<(String, i32)> = user_vacation_days::table
        .filter(user_vacation_days::user_id.eq(user_id))
        .order_by(user_vacation_days::vacation_type.asc())
        .select((
            user_vacation_days::vacation_type,
            user_vacation_days::days_per_year,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(vacation_type, days_per_year)| VacationAllotmentData {
            vacation_type,
            days_per_year,
        })
        .collect())
}
}
