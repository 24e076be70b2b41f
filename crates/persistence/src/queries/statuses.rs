// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status store read queries: per-user and per-month status listings and
//! the aggregate counters behind the quota reports.
//!
//! A missing row means the implicit default status ("office"); none of
//! these queries materialize default rows. All counting and listing is
//! scoped strictly by the supplied user/year/month filters.

use diesel::dsl::count;
use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use officecal_domain::DayStatus;
use tracing::debug;

use crate::data_models::DayStatusData;
use crate::diesel_schema::{calendar_days, calendar_months, user_day_statuses};
use crate::error::PersistenceError;

/// Row tuple for a status joined with its day's date.
type StatusWithDateRow = (i64, i64, i64, String, String, Option<String>);

/// Shared select list for status-with-date queries.
macro_rules! status_with_date_select {
    () => {
        (
            user_day_statuses::status_id,
            user_day_statuses::user_id,
            user_day_statuses::day_id,
            calendar_days::date,
            user_day_statuses::status,
            user_day_statuses::note,
        )
    };
}

fn to_status_data(row: StatusWithDateRow) -> DayStatusData {
    DayStatusData {
        status_id: row.0,
        user_id: row.1,
        day_id: row.2,
        date: row.3,
        status: row.4,
        note: row.5,
    }
}

backend_fn! {
/// Retrieves the stored status for a (user, day) pair.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `day_id` - The day ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no status row exists (implicit default).
pub fn find_status(
    conn: &mut _,
    user_id: i64,
    day_id: i64,
) -> Result<Option<DayStatusData>, PersistenceError> {
    let result: Result<StatusWithDateRow, diesel::result::Error> = user_day_statuses::table
        .inner_join(calendar_days::table)
        .filter(user_day_statuses::user_id.eq(user_id))
        .filter(user_day_statuses::day_id.eq(day_id))
        .select(status_with_date_select!())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(to_status_data(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists one user's stored statuses within a month, ordered by date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `month_id` - The month ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn statuses_for_user_month(
    conn: &mut _,
    user_id: i64,
    month_id: i64,
) -> Result<Vec<DayStatusData>, PersistenceError> {
    debug!(
        "Listing statuses for user ID {} in month ID {}",
        user_id, month_id
    );

    let rows: Vec<StatusWithDateRow> = user_day_statuses::table
        .inner_join(calendar_days::table)
        .filter(user_day_statuses::user_id.eq(user_id))
        .filter(calendar_days::month_id.eq(month_id))
        .order_by(calendar_days::date.asc())
        .select(status_with_date_select!())
        .load(conn)?;

    Ok(rows.into_iter().map(to_status_data).collect())
}
}

backend_fn! {
/// Lists every user's stored statuses within a month, ordered by date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `month_id` - The month ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn statuses_for_month(
    conn: &mut _,
    month_id: i64,
) -> Result<Vec<DayStatusData>, PersistenceError> {
    let rows: Vec<StatusWithDateRow> = user_day_statuses::table
        .inner_join(calendar_days::table)
        .filter(calendar_days::month_id.eq(month_id))
        .order_by(calendar_days::date.asc())
        .select(status_with_date_select!())
        .load(conn)?;

    Ok(rows.into_iter().map(to_status_data).collect())
}
}

backend_fn! {
/// Lists every stored status for a single day.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `day_id` - The day ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn statuses_for_day(
    conn: &mut _,
    day_id: i64,
) -> Result<Vec<DayStatusData>, PersistenceError> {
    let rows: Vec<StatusWithDateRow> = user_day_statuses::table
        .inner_join(calendar_days::table)
        .filter(user_day_statuses::day_id.eq(day_id))
        .select(status_with_date_select!())
        .load(conn)?;

    Ok(rows.into_iter().map(to_status_data).collect())
}
}

backend_fn! {
/// Counts a user's remote days within a calendar year.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `year` - The calendar year
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_remote_days(
    conn: &mut _,
    user_id: i64,
    year: i32,
) -> Result<i64, PersistenceError> {
    debug!("Counting remote days for user ID {} in {}", user_id, year);

    let total: i64 = user_day_statuses::table
        .inner_join(calendar_days::table.inner_join(calendar_months::table))
        .filter(user_day_statuses::user_id.eq(user_id))
        .filter(user_day_statuses::status.eq(DayStatus::Remote.as_str()))
        .filter(calendar_months::year.eq(year))
        .select(count(user_day_statuses::status_id))
        .first(conn)?;

    Ok(total)
}
}

backend_fn! {
/// Counts a user's remote days from the start of a year through a cutoff
/// date (inclusive).
///
/// Returns 0 when `end_date` precedes January 1 of `year`. ISO date
/// strings order lexicographically, so the range filter compares text.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `year` - The calendar year the count is scoped to
/// * `end_date` - The inclusive ISO-8601 cutoff date
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_remote_days_until(
    conn: &mut _,
    user_id: i64,
    year: i32,
    end_date: &str,
) -> Result<i64, PersistenceError> {
    let year_start: String = format!("{year:04}-01-01");
    if end_date < year_start.as_str() {
        return Ok(0);
    }

    let total: i64 = user_day_statuses::table
        .inner_join(calendar_days::table)
        .filter(user_day_statuses::user_id.eq(user_id))
        .filter(user_day_statuses::status.eq(DayStatus::Remote.as_str()))
        .filter(calendar_days::date.ge(year_start))
        .filter(calendar_days::date.le(end_date))
        .select(count(user_day_statuses::status_id))
        .first(conn)?;

    Ok(total)
}
}

backend_fn! {
/// Counts a user's vacation days within a year, optionally restricted to
/// one month of that year.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `year` - The calendar year
/// * `month` - Optional 1-based month restriction
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_vacation_days(
    conn: &mut _,
    user_id: i64,
    year: i32,
    month: Option<i32>,
) -> Result<i64, PersistenceError> {
    let total: i64 = if let Some(month) = month {
        user_day_statuses::table
            .inner_join(calendar_days::table.inner_join(calendar_months::table))
            .filter(user_day_statuses::user_id.eq(user_id))
            .filter(user_day_statuses::status.eq(DayStatus::Vacation.as_str()))
            .filter(calendar_months::year.eq(year))
            .filter(calendar_months::month.eq(month))
            .select(count(user_day_statuses::status_id))
            .first(conn)?
    } else {
        user_day_statuses::table
            .inner_join(calendar_days::table.inner_join(calendar_months::table))
            .filter(user_day_statuses::user_id.eq(user_id))
            .filter(user_day_statuses::status.eq(DayStatus::Vacation.as_str()))
            .filter(calendar_months::year.eq(year))
            .select(count(user_day_statuses::status_id))
            .first(conn)?
    };

    Ok(total)
}
}

backend_fn! {
/// Lists a user's vacation dates within a year, ascending.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The user ID
/// * `year` - The calendar year
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn vacation_dates(
    conn: &mut _,
    user_id: i64,
    year: i32,
) -> Result<Vec<String>, PersistenceError> {
    let dates: Vec<String> = user_day_statuses::table
        .inner_join(calendar_days::table.inner_join(calendar_months::table))
        .filter(user_day_statuses::user_id.eq(user_id))
        .filter(user_day_statuses::status.eq(DayStatus::Vacation.as_str()))
        .filter(calendar_months::year.eq(year))
        .order_by(calendar_days::date.asc())
        .select(calendar_days::date)
        .load(conn)?;

    Ok(dates)
}
}
