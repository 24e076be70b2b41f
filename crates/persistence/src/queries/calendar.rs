// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar month and day queries.

use diesel::prelude::*;
#[cfg(feature = "mysql")]
use diesel::MysqlConnection;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{DayData, MonthData};
use crate::diesel_schema::{calendar_days, calendar_months};
use crate::error::PersistenceError;

/// Diesel Queryable struct for calendar month rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = calendar_months)]
struct MonthRow {
    month_id: i64,
    year: i32,
    month: i32,
    is_locked: i32,
}

impl From<MonthRow> for MonthData {
    fn from(row: MonthRow) -> Self {
        Self {
            month_id: row.month_id,
            year: row.year,
            month: row.month,
            is_locked: row.is_locked != 0,
        }
    }
}

/// Diesel Queryable struct for calendar day rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = calendar_days)]
struct DayRow {
    day_id: i64,
    month_id: i64,
    date: String,
    weekday_name: String,
    is_weekend: i32,
    is_holiday: i32,
    is_workday_override: i32,
}

impl From<DayRow> for DayData {
    fn from(row: DayRow) -> Self {
        Self {
            day_id: row.day_id,
            month_id: row.month_id,
            date: row.date,
            weekday_name: row.weekday_name,
            is_weekend: row.is_weekend != 0,
            is_holiday: row.is_holiday != 0,
            is_workday_override: row.is_workday_override != 0,
        }
    }
}

backend_fn! {
/// Looks up a calendar month by (year, month).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `year` - The calendar year
/// * `month` - The 1-based month number
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the month has not been provisioned.
pub fn find_month(
    conn: &mut _,
    year: i32,
    month: i32,
) -> Result<Option<MonthData>, PersistenceError> {
    debug!("Looking up calendar month {}-{:02}", year, month);

    let result: Result<MonthRow, diesel::result::Error> = calendar_months::table
        .filter(calendar_months::year.eq(year))
        .filter(calendar_months::month.eq(month))
        .select(MonthRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(MonthData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a calendar month by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `month_id` - The month ID
///
/// # Errors
///
/// Returns an error if the database query fails or the month is missing.
pub fn get_month_by_id(conn: &mut _, month_id: i64) -> Result<MonthData, PersistenceError> {
    let row: MonthRow = calendar_months::table
        .filter(calendar_months::month_id.eq(month_id))
        .select(MonthRow::as_select())
        .first(conn)?;

    Ok(MonthData::from(row))
}
}

backend_fn! {
/// Loads every day of a calendar month, ordered by date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `month_id` - The month ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn month_days(conn: &mut _, month_id: i64) -> Result<Vec<DayData>, PersistenceError> {
    let rows: Vec<DayRow> = calendar_days::table
        .filter(calendar_days::month_id.eq(month_id))
        .order_by(calendar_days::date.asc())
        .select(DayRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(DayData::from).collect())
}
}

backend_fn! {
/// Looks up one day of a month by its ISO date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `month_id` - The month ID
/// * `date` - The ISO-8601 date string
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no such day exists in the month.
pub fn find_day(
    conn: &mut _,
    month_id: i64,
    date: &str,
) -> Result<Option<DayData>, PersistenceError> {
    debug!("Looking up day {} in month ID {}", date, month_id);

    let result: Result<DayRow, diesel::result::Error> = calendar_days::table
        .filter(calendar_days::month_id.eq(month_id))
        .filter(calendar_days::date.eq(date))
        .select(DayRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(DayData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a calendar day by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `day_id` - The day ID
///
/// # Errors
///
/// Returns an error if the database query fails or the day is missing.
pub fn get_day_by_id(conn: &mut _, day_id: i64) -> Result<DayData, PersistenceError> {
    let row: DayRow = calendar_days::table
        .filter(calendar_days::day_id.eq(day_id))
        .select(DayRow::as_select())
        .first(conn)?;

    Ok(DayData::from(row))
}
}
