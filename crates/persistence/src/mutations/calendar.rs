// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar month and day mutations.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::{Connection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::NewCalendarDay;
use crate::diesel_schema::{calendar_days, calendar_months};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a calendar month together with its full day set.
///
/// The month row and every day row are inserted in one transaction; a
/// month is never left partially populated. A uniqueness violation on the
/// (year, month) constraint rolls the whole batch back and surfaces as
/// `PersistenceError::UniqueViolation` for the caller to resolve (the
/// concurrent-creation race in `Persistence::get_or_create_month`).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `year` - The calendar year
/// * `month` - The 1-based month number
/// * `days` - One entry per calendar date, first through last day
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_month(
    conn: &mut _,
    year: i32,
    month: i32,
    days: &[NewCalendarDay],
) -> Result<i64, PersistenceError> {
    info!("Creating calendar month {}-{:02}", year, month);

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(calendar_months::table)
            .values((
                calendar_months::year.eq(year),
                calendar_months::month.eq(month),
                calendar_months::is_locked.eq(0),
            ))
            .execute(conn)?;

        let month_id: i64 = conn.get_last_insert_rowid()?;

        for day in days {
            diesel::insert_into(calendar_days::table)
                .values((
                    calendar_days::month_id.eq(month_id),
                    calendar_days::date.eq(&day.date),
                    calendar_days::weekday_name.eq(&day.weekday_name),
                    calendar_days::is_weekend.eq(i32::from(day.is_weekend)),
                    calendar_days::is_holiday.eq(0),
                    calendar_days::is_workday_override.eq(0),
                ))
                .execute(conn)?;
        }

        Ok(month_id)
    })
}
}

backend_fn! {
/// Sets the locked flag on a calendar month.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `month_id` - The month ID
/// * `locked` - The new locked state
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_month_locked(
    conn: &mut _,
    month_id: i64,
    locked: bool,
) -> Result<(), PersistenceError> {
    info!("Setting month ID {} locked = {}", month_id, locked);

    diesel::update(calendar_months::table)
        .filter(calendar_months::month_id.eq(month_id))
        .set(calendar_months::is_locked.eq(i32::from(locked)))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Sets the holiday flag on a calendar day.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `day_id` - The day ID
/// * `is_holiday` - The new holiday state
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_day_holiday(
    conn: &mut _,
    day_id: i64,
    is_holiday: bool,
) -> Result<(), PersistenceError> {
    debug!("Setting day ID {} is_holiday = {}", day_id, is_holiday);

    diesel::update(calendar_days::table)
        .filter(calendar_days::day_id.eq(day_id))
        .set(calendar_days::is_holiday.eq(i32::from(is_holiday)))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Sets the workday-override flag on a calendar day.
///
/// The override lets an admin force a nominal weekend or holiday to count
/// as a workday, or the reverse.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `day_id` - The day ID
/// * `is_workday_override` - The new override state
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_day_workday_override(
    conn: &mut _,
    day_id: i64,
    is_workday_override: bool,
) -> Result<(), PersistenceError> {
    debug!(
        "Setting day ID {} is_workday_override = {}",
        day_id, is_workday_override
    );

    diesel::update(calendar_days::table)
        .filter(calendar_days::day_id.eq(day_id))
        .set(calendar_days::is_workday_override.eq(i32::from(is_workday_override)))
        .execute(conn)?;

    Ok(())
}
}
