// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status store mutations: upsert, single delete, bulk delete, and the
//! full-month replace cycle.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::{Connection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::NewStatusEntry;
use crate::diesel_schema::{calendar_days, user_day_statuses};
use crate::error::PersistenceError;

backend_fn! {
/// Upserts the status for a (user, day) pair.
///
/// If a row exists it is mutated in place (status and note both); else a
/// new row is inserted. At most one row per (user, day) ever exists.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `day_id` - The day ID
/// * `status` - The status string (canonical form)
/// * `note` - The note to store, replacing any prior note
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_day_status(
    conn: &mut _,
    user_id: i64,
    day_id: i64,
    status: &str,
    note: Option<&str>,
) -> Result<(), PersistenceError> {
    debug!(
        "Upserting status '{}' for user ID {} day ID {}",
        status, user_id, day_id
    );

    let existing: Option<i64> = user_day_statuses::table
        .filter(user_day_statuses::user_id.eq(user_id))
        .filter(user_day_statuses::day_id.eq(day_id))
        .select(user_day_statuses::status_id)
        .first(conn)
        .optional()?;

    if let Some(status_id) = existing {
        diesel::update(user_day_statuses::table)
            .filter(user_day_statuses::status_id.eq(status_id))
            .set((
                user_day_statuses::status.eq(status),
                user_day_statuses::note.eq(note),
            ))
            .execute(conn)?;
    } else {
        diesel::insert_into(user_day_statuses::table)
            .values((
                user_day_statuses::user_id.eq(user_id),
                user_day_statuses::day_id.eq(day_id),
                user_day_statuses::status.eq(status),
                user_day_statuses::note.eq(note),
            ))
            .execute(conn)?;
    }

    Ok(())
}
}

backend_fn! {
/// Deletes the status row for a (user, day) pair, if any.
///
/// Used by the day-note endpoint's `clear` action; a subsequent read shows
/// the implicit default status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `day_id` - The day ID
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_day_status(
    conn: &mut _,
    user_id: i64,
    day_id: i64,
) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(
        user_day_statuses::table
            .filter(user_day_statuses::user_id.eq(user_id))
            .filter(user_day_statuses::day_id.eq(day_id)),
    )
    .execute(conn)?;

    Ok(deleted)
}
}

backend_fn! {
/// Bulk-deletes every status row of a user whose day belongs to a month.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `month_id` - The month ID
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_user_month_statuses(
    conn: &mut _,
    user_id: i64,
    month_id: i64,
) -> Result<usize, PersistenceError> {
    info!(
        "Deleting statuses of user ID {} in month ID {}",
        user_id, month_id
    );

    let month_day_ids = calendar_days::table
        .filter(calendar_days::month_id.eq(month_id))
        .select(calendar_days::day_id);

    let deleted: usize = diesel::delete(
        user_day_statuses::table
            .filter(user_day_statuses::user_id.eq(user_id))
            .filter(user_day_statuses::day_id.eq_any(month_day_ids)),
    )
    .execute(conn)?;

    Ok(deleted)
}
}

backend_fn! {
/// Replaces a user's entire month of statuses in one transaction.
///
/// Delete-then-reinsert, not diff/merge: every existing row of the user in
/// the month is removed and the supplied entries are inserted fresh. The
/// caller must have resolved each entry to a day of this month; any
/// failure rolls the whole cycle back (fail-closed, never partial-apply).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `month_id` - The month ID
/// * `entries` - The replacement status entries
///
/// # Errors
///
/// Returns an error if any write fails; nothing is committed in that case.
pub fn replace_user_month(
    conn: &mut _,
    user_id: i64,
    month_id: i64,
    entries: &[NewStatusEntry],
) -> Result<(), PersistenceError> {
    info!(
        "Replacing month ID {} for user ID {} with {} entries",
        month_id,
        user_id,
        entries.len()
    );

    conn.transaction::<(), PersistenceError, _>(|conn| {
        let month_day_ids = calendar_days::table
            .filter(calendar_days::month_id.eq(month_id))
            .select(calendar_days::day_id);

        diesel::delete(
            user_day_statuses::table
                .filter(user_day_statuses::user_id.eq(user_id))
                .filter(user_day_statuses::day_id.eq_any(month_day_ids)),
        )
        .execute(conn)?;

        for entry in entries {
            diesel::insert_into(user_day_statuses::table)
                .values((
                    user_day_statuses::user_id.eq(user_id),
                    user_day_statuses::day_id.eq(entry.day_id),
                    user_day_statuses::status.eq(&entry.status),
                    user_day_statuses::note.eq(entry.note.as_deref()),
                ))
                .execute(conn)?;
        }

        Ok(())
    })
}
}
