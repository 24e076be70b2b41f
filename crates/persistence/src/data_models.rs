// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable data transfer structs returned by the persistence adapter.
//!
//! Dates are ISO-8601 `YYYY-MM-DD` strings throughout; parsing to
//! `time::Date` happens at the API boundary. Role and status values are
//! stored as their canonical string forms.

use serde::{Deserialize, Serialize};

/// Serializable representation of a department row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentData {
    pub department_id: i64,
    pub name: String,
}

/// Serializable representation of a user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub annual_remote_limit: i32,
    pub start_date: Option<String>,
    pub additional_vacation_days: i32,
    pub carryover_vacation_days: i32,
    pub department_id: Option<i64>,
}

/// Input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserData {
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub annual_remote_limit: i32,
    pub start_date: Option<String>,
    pub additional_vacation_days: i32,
    pub carryover_vacation_days: i32,
    pub department_id: Option<i64>,
    /// Per-type vacation allotments created alongside the user.
    pub vacation_days: Vec<VacationAllotmentData>,
}

/// Partial update for a user. `None` fields are left unchanged;
/// `vacation_days: Some(_)` replaces the full allotment set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdateData {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub annual_remote_limit: Option<i32>,
    pub start_date: Option<String>,
    pub additional_vacation_days: Option<i32>,
    pub carryover_vacation_days: Option<i32>,
    pub department_id: Option<i64>,
    pub vacation_days: Option<Vec<VacationAllotmentData>>,
}

/// A per-type vacation allotment for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationAllotmentData {
    pub vacation_type: String,
    pub days_per_year: i32,
}

/// Serializable representation of a calendar month row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthData {
    pub month_id: i64,
    pub year: i32,
    pub month: i32,
    pub is_locked: bool,
}

/// Serializable representation of a calendar day row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayData {
    pub day_id: i64,
    pub month_id: i64,
    pub date: String,
    pub weekday_name: String,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub is_workday_override: bool,
}

/// A calendar month together with its full day set, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWithDays {
    pub month: MonthData,
    pub days: Vec<DayData>,
}

/// Input for creating one calendar day during month provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarDay {
    pub date: String,
    pub weekday_name: String,
    pub is_weekend: bool,
}

/// Serializable representation of a stored (user, day) status,
/// joined with the day's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatusData {
    pub status_id: i64,
    pub user_id: i64,
    pub day_id: i64,
    pub date: String,
    pub status: String,
    pub note: Option<String>,
}

/// Input for one status entry in a full-month replace cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatusEntry {
    pub day_id: i64,
    pub status: String,
    pub note: Option<String>,
}
