// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department mutations.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a department.
///
/// A duplicate name surfaces as `PersistenceError::UniqueViolation`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The unique department name
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_department(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    info!("Creating department '{}'", name);

    diesel::insert_into(departments::table)
        .values(departments::name.eq(name))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}
