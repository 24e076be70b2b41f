// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department queries.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;

use crate::data_models::DepartmentData;
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a department by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `department_id` - The department ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the department is not found.
pub fn find_department(
    conn: &mut _,
    department_id: i64,
) -> Result<Option<DepartmentData>, PersistenceError> {
    let result: Result<(i64, String), diesel::result::Error> = departments::table
        .filter(departments::department_id.eq(department_id))
        .select((departments::department_id, departments::name))
        .first(conn);

    match result {
        Ok((department_id, name)) => Ok(Some(DepartmentData {
            department_id,
            name,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a department by its unique name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The department name
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the department is not found.
pub fn find_department_by_name(
    conn: &mut _,
    name: &str,
) -> Result<Option<DepartmentData>, PersistenceError> {
    let result: Result<(i64, String), diesel::result::Error> = departments::table
        .filter(departments::name.eq(name))
        .select((departments::department_id, departments::name))
        .first(conn);

    match result {
        Ok((department_id, name)) => Ok(Some(DepartmentData {
            department_id,
            name,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all departments ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_departments(conn: &mut _) -> Result<Vec<DepartmentData>, PersistenceError> {
    let rows: Vec<(i64, String)> = departments::table
        .order_by(departments::name.asc())
        .select((departments::department_id, departments::name))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(department_id, name)| DepartmentData {
            department_id,
            name,
        })
        .collect())
}
}
