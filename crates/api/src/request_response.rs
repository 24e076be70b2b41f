// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates are ISO-8601 `YYYY-MM-DD` strings on the wire. Maps use
//! `BTreeMap` so serialized output is deterministic.

use officecal_domain::DayStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A department in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    /// The department's id.
    pub department_id: i64,
    /// The unique department name.
    pub name: String,
}

/// API request to create a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    /// The unique department name.
    pub name: String,
}

/// A per-type vacation allotment in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationAllotmentInfo {
    /// The vacation-type label.
    pub vacation_type: String,
    /// Days granted per year for this type.
    pub days_per_year: i32,
}

/// A user in API responses, with its department and allotments resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// The user's id.
    pub user_id: i64,
    /// The display name.
    pub display_name: String,
    /// The unique email address.
    pub email: String,
    /// The role string (employee, manager, or admin).
    pub role: String,
    /// The annual remote-day limit.
    pub annual_remote_limit: i32,
    /// The employment start date, if known.
    pub start_date: Option<String>,
    /// Manually granted additional vacation days.
    pub additional_vacation_days: i32,
    /// Vacation days carried over from the prior year.
    pub carryover_vacation_days: i32,
    /// The user's department, if any.
    pub department: Option<DepartmentInfo>,
    /// Per-type vacation allotments.
    pub vacation_days: Vec<VacationAllotmentInfo>,
}

/// API request to create a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// The display name.
    pub display_name: String,
    /// The unique email address.
    pub email: String,
    /// The role string; defaults to employee.
    #[serde(default)]
    pub role: Option<String>,
    /// The annual remote-day limit; defaults to 100.
    #[serde(default)]
    pub annual_remote_limit: Option<i32>,
    /// The employment start date (ISO 8601), if known.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Manually granted additional vacation days; defaults to 0.
    #[serde(default)]
    pub additional_vacation_days: Option<i32>,
    /// Vacation days carried over from the prior year; defaults to 0.
    #[serde(default)]
    pub carryover_vacation_days: Option<i32>,
    /// The department to assign, if any.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Per-type vacation allotments keyed by type label.
    #[serde(default)]
    pub vacation_days: Option<BTreeMap<String, i32>>,
}

/// API request to partially update a user. Absent fields are unchanged;
/// `vacation_days` replaces the full allotment set when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// The display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// The unique email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The role string.
    #[serde(default)]
    pub role: Option<String>,
    /// The annual remote-day limit.
    #[serde(default)]
    pub annual_remote_limit: Option<i32>,
    /// The employment start date (ISO 8601).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Manually granted additional vacation days.
    #[serde(default)]
    pub additional_vacation_days: Option<i32>,
    /// Vacation days carried over from the prior year.
    #[serde(default)]
    pub carryover_vacation_days: Option<i32>,
    /// The department to assign.
    #[serde(default)]
    pub department_id: Option<i64>,
    /// Per-type vacation allotments keyed by type label.
    #[serde(default)]
    pub vacation_days: Option<BTreeMap<String, i32>>,
}

/// A calendar day in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// The day's id.
    pub day_id: i64,
    /// The ISO-8601 date.
    pub date: String,
    /// The three-letter weekday abbreviation.
    pub weekday_name: String,
    /// Whether the date is a nominal weekend day.
    pub is_weekend: bool,
    /// Whether an admin marked the day a holiday.
    pub is_holiday: bool,
    /// Whether an admin forced the day's workday classification.
    pub is_workday_override: bool,
}

/// A calendar month with its full day set in API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInfo {
    /// The month's id.
    pub month_id: i64,
    /// The calendar year.
    pub year: i32,
    /// The 1-based month number.
    pub month: i32,
    /// Whether the month rejects further status writes.
    pub is_locked: bool,
    /// Every day of the month, ordered by date.
    pub days: Vec<DayInfo>,
}

/// One (date, status) item of a user's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatusItem {
    /// The ISO-8601 date.
    pub date: String,
    /// The day's status.
    pub status: DayStatus,
    /// The free-text note, if any.
    #[serde(default)]
    pub note: Option<String>,
}

/// API request to fully replace a user's statuses for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCalendarUpdateRequest {
    /// The replacement items; every stored item of the month not listed
    /// here is removed.
    #[serde(default)]
    pub items: Vec<DayStatusItem>,
}

/// API response for a user's calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCalendarResponse {
    /// The user the calendar belongs to.
    pub user: UserInfo,
    /// The month with its day set.
    pub month: MonthInfo,
    /// The user's stored items, ordered by date.
    pub items: Vec<DayStatusItem>,
}

/// API request to set a day-level flag (holiday or workday override).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDayFlagRequest {
    /// The new flag value.
    pub value: bool,
}

/// API request to set or clear one day's status and note.
///
/// The status string is parsed leniently: `"clear"` deletes the stored
/// row, an unknown status falls back to office when creating and keeps
/// the prior status when updating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDayNoteRequest {
    /// The status string, if supplied.
    #[serde(default)]
    pub status: Option<String>,
    /// The note; absent clears any stored note.
    #[serde(default)]
    pub note: Option<String>,
}

/// API response for the day-note operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayNoteResponse {
    /// The ISO-8601 date.
    pub date: String,
    /// The day's effective status after the operation.
    pub status: DayStatus,
    /// The stored note, if any.
    pub note: Option<String>,
    /// Whether the stored row was deleted (`status = "clear"`).
    pub cleared: bool,
}

/// One row of the team calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRowInfo {
    /// The user this row describes.
    pub user: UserInfo,
    /// Stored statuses keyed by ISO date. Missing dates mean office.
    pub statuses: BTreeMap<String, DayStatus>,
    /// Stored notes keyed by ISO date.
    pub notes: BTreeMap<String, String>,
    /// Remaining remote days at the month's start (cutoff the day before
    /// the month's first date). May be negative.
    pub remote_remaining_start: i64,
    /// Remaining remote days against the whole year's usage. May be
    /// negative.
    pub remote_remaining_end: i64,
}

/// API response for the team calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCalendarResponse {
    /// The month with its day set.
    pub month: MonthInfo,
    /// One row per user, ordered by display name.
    pub rows: Vec<TeamRowInfo>,
}

/// API response for the who-is-in-office view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoIsInOfficeResponse {
    /// The ISO-8601 date the view describes.
    pub date: String,
    /// Every user bucketed by status; users without a stored row land in
    /// the office bucket. Every status key is present, possibly empty.
    pub by_status: BTreeMap<String, Vec<UserInfo>>,
}

/// API response for the remote-day counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCounterResponse {
    /// The year the counter covers.
    pub year: i32,
    /// Remote days used within the year.
    pub used: i64,
    /// The user's annual remote-day limit.
    pub limit: i64,
    /// Remaining remote days (`limit - used`). May be negative.
    pub remaining: i64,
}

/// API response for the vacation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationCounterResponse {
    /// The year the counter covers.
    pub year: i32,
    /// Vacation days available for the year: full-year accrual plus the
    /// additional and carryover grants.
    pub allowed: i64,
    /// Vacation days used (optionally narrowed to one month).
    pub used: i64,
    /// Remaining vacation days against the full-year usage, floored at 0.
    pub remaining: i64,
}

/// API response for a user's vacation dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationDatesResponse {
    /// The user the dates belong to.
    pub user_id: i64,
    /// The year the dates fall in.
    pub year: i32,
    /// The ISO-8601 vacation dates, ascending.
    pub dates: Vec<String>,
}
