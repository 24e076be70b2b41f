// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for calendar, status, user, and department
//! operations.
//!
//! Handlers authorize the caller, validate input against the domain
//! rules, call into persistence, and translate every lower-layer error to
//! an `ApiError`. The HTTP layer above maps `ApiError` to status codes.

use officecal_domain::DayStatus;
use officecal_persistence::{
    DayData, DayStatusData, MonthWithDays, NewStatusEntry, NewUserData, Persistence, UserData,
    UserUpdateData, VacationAllotmentData,
};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::Date;
use tracing::info;

use crate::auth::{AuthorizationService, CurrentUser};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::reports;
use crate::request_response::{
    CreateDepartmentRequest, CreateUserRequest, DayInfo, DayNoteResponse, DayStatusItem,
    DepartmentInfo, MonthInfo, RemoteCounterResponse, SetDayNoteRequest, TeamCalendarResponse,
    TeamRowInfo, UpdateUserRequest, UserCalendarResponse, UserCalendarUpdateRequest, UserInfo,
    VacationAllotmentInfo, VacationCounterResponse, VacationDatesResponse, WhoIsInOfficeResponse,
};

/// The sentinel status string that deletes a stored day status.
const CLEAR_STATUS: &str = "clear";

// ============================================================================
// Conversion helpers
// ============================================================================

fn day_info(day: DayData) -> DayInfo {
    DayInfo {
        day_id: day.day_id,
        date: day.date,
        weekday_name: day.weekday_name,
        is_weekend: day.is_weekend,
        is_holiday: day.is_holiday,
        is_workday_override: day.is_workday_override,
    }
}

fn month_info(month: MonthWithDays) -> MonthInfo {
    MonthInfo {
        month_id: month.month.month_id,
        year: month.month.year,
        month: month.month.month,
        is_locked: month.month.is_locked,
        days: month.days.into_iter().map(day_info).collect(),
    }
}

/// Resolves a user row into its API shape, attaching the department and
/// vacation allotments.
fn build_user_info(
    persistence: &mut Persistence,
    user: UserData,
) -> Result<UserInfo, ApiError> {
    let department: Option<DepartmentInfo> = match user.department_id {
        Some(department_id) => persistence
            .find_department(department_id)
            .map_err(|e| translate_persistence_error(e, "Department"))?
            .map(|d| DepartmentInfo {
                department_id: d.department_id,
                name: d.name,
            }),
        None => None,
    };

    let vacation_days: Vec<VacationAllotmentInfo> = persistence
        .vacation_allotments(user.user_id)
        .map_err(|e| translate_persistence_error(e, "User"))?
        .into_iter()
        .map(|a| VacationAllotmentInfo {
            vacation_type: a.vacation_type,
            days_per_year: a.days_per_year,
        })
        .collect();

    Ok(UserInfo {
        user_id: user.user_id,
        display_name: user.display_name,
        email: user.email,
        role: user.role,
        annual_remote_limit: user.annual_remote_limit,
        start_date: user.start_date,
        additional_vacation_days: user.additional_vacation_days,
        carryover_vacation_days: user.carryover_vacation_days,
        department,
        vacation_days,
    })
}

/// Validates a month number and provisions the month.
fn provision_month(
    persistence: &mut Persistence,
    year: i32,
    month: u8,
) -> Result<MonthWithDays, ApiError> {
    officecal_domain::month_number(month).map_err(translate_domain_error)?;
    persistence
        .get_or_create_month(year, month)
        .map_err(|e| translate_persistence_error(e, "Month"))
}

/// Parses a date string and returns it with its canonical ISO form.
fn canonical_date(date_string: &str) -> Result<(Date, String), ApiError> {
    let date: Date = officecal_domain::parse_date(date_string).map_err(translate_domain_error)?;
    let canonical: String = officecal_domain::format_date(date);
    Ok((date, canonical))
}

/// Parses a date string and checks it falls inside the given month.
fn date_in_month(date_string: &str, year: i32, month: u8) -> Result<String, ApiError> {
    let (date, canonical) = canonical_date(date_string)?;
    if date.year() != year || u8::from(date.month()) != month {
        return Err(ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date {canonical} is not in {year}-{month:02}"),
        });
    }
    Ok(canonical)
}

/// Parses a stored status string. Stored values are written in canonical
/// form, so a parse failure is an internal inconsistency, not bad input.
fn parse_stored_status(stored: &str) -> Result<DayStatus, ApiError> {
    DayStatus::from_str(stored).map_err(|_| ApiError::Internal {
        message: format!("Stored status '{stored}' is not a known status"),
    })
}

fn fetch_user(persistence: &mut Persistence, user_id: i64) -> Result<UserData, ApiError> {
    persistence
        .get_user(user_id)
        .map_err(|e| translate_persistence_error(e, "User"))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User {user_id} does not exist"),
        })
}

fn allotments_from_map(map: &BTreeMap<String, i32>) -> Vec<VacationAllotmentData> {
    map.iter()
        .map(|(vacation_type, days_per_year)| VacationAllotmentData {
            vacation_type: vacation_type.clone(),
            days_per_year: *days_per_year,
        })
        .collect()
}

/// Validates an optional department reference.
fn validate_department(
    persistence: &mut Persistence,
    department_id: Option<i64>,
) -> Result<(), ApiError> {
    if let Some(department_id) = department_id {
        persistence
            .find_department(department_id)
            .map_err(|e| translate_persistence_error(e, "Department"))?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Department"),
                message: format!("Department {department_id} does not exist"),
            })?;
    }
    Ok(())
}

// ============================================================================
// Calendar provisioning & month locking
// ============================================================================

/// Provisions and returns a month with its full day set.
///
/// # Errors
///
/// Returns an error if the month number is invalid or persistence fails.
pub fn get_month(
    persistence: &mut Persistence,
    year: i32,
    month: u8,
) -> Result<MonthInfo, ApiError> {
    Ok(month_info(provision_month(persistence, year, month)?))
}

/// Sets the locked flag on a month (admin only).
///
/// # Errors
///
/// Returns an error if the caller is not authorized or persistence fails.
pub fn set_month_locked(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    year: i32,
    month: u8,
    locked: bool,
) -> Result<MonthInfo, ApiError> {
    AuthorizationService::authorize_admin(persistence, actor, "lock_month")?;

    let provisioned: MonthWithDays = provision_month(persistence, year, month)?;
    persistence
        .set_month_locked(provisioned.month.month_id, locked)
        .map_err(|e| translate_persistence_error(e, "Month"))?;

    info!(
        year,
        month,
        locked,
        actor_id = actor.id(),
        "Month lock state changed"
    );

    let refreshed: MonthWithDays = persistence
        .get_month(provisioned.month.month_id)
        .map_err(|e| translate_persistence_error(e, "Month"))?;
    Ok(month_info(refreshed))
}

/// Sets the holiday flag on one day of a month (admin only).
///
/// # Errors
///
/// Returns an error if the caller is not authorized, the date is not in
/// the month, or persistence fails.
pub fn set_day_holiday(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    year: i32,
    month: u8,
    date: &str,
    value: bool,
) -> Result<DayInfo, ApiError> {
    AuthorizationService::authorize_admin(persistence, actor, "set_day_holiday")?;

    let day: DayData = resolve_day(persistence, year, month, date)?;
    let updated: DayData = persistence
        .set_day_holiday(day.day_id, value)
        .map_err(|e| translate_persistence_error(e, "Day"))?;
    Ok(day_info(updated))
}

/// Sets the workday-override flag on one day of a month (admin only).
///
/// # Errors
///
/// Returns an error if the caller is not authorized, the date is not in
/// the month, or persistence fails.
pub fn set_day_workday_override(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    year: i32,
    month: u8,
    date: &str,
    value: bool,
) -> Result<DayInfo, ApiError> {
    AuthorizationService::authorize_admin(persistence, actor, "set_day_workday_override")?;

    let day: DayData = resolve_day(persistence, year, month, date)?;
    let updated: DayData = persistence
        .set_day_workday_override(day.day_id, value)
        .map_err(|e| translate_persistence_error(e, "Day"))?;
    Ok(day_info(updated))
}

/// Provisions the month and resolves one of its days by date.
fn resolve_day(
    persistence: &mut Persistence,
    year: i32,
    month: u8,
    date: &str,
) -> Result<DayData, ApiError> {
    let canonical: String = date_in_month(date, year, month)?;
    let provisioned: MonthWithDays = provision_month(persistence, year, month)?;

    persistence
        .find_day(provisioned.month.month_id, &canonical)
        .map_err(|e| translate_persistence_error(e, "Day"))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Day"),
            message: format!("Day {canonical} does not exist"),
        })
}

// ============================================================================
// User calendars
// ============================================================================

fn status_items(rows: Vec<DayStatusData>) -> Result<Vec<DayStatusItem>, ApiError> {
    rows.into_iter()
        .map(|row| {
            Ok(DayStatusItem {
                date: row.date,
                status: parse_stored_status(&row.status)?,
                note: row.note,
            })
        })
        .collect()
}

/// Reads one user's calendar for a month (self or admin).
///
/// # Errors
///
/// Returns an error if the caller is not authorized, the user does not
/// exist, or persistence fails.
pub fn get_user_calendar(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    user_id: i64,
    year: i32,
    month: u8,
) -> Result<UserCalendarResponse, ApiError> {
    AuthorizationService::authorize_self_or_admin(persistence, actor, user_id, "read_calendar")?;

    let provisioned: MonthWithDays = provision_month(persistence, year, month)?;
    let user: UserData = fetch_user(persistence, user_id)?;

    let items: Vec<DayStatusItem> = status_items(
        persistence
            .statuses_for_user_month(user_id, provisioned.month.month_id)
            .map_err(|e| translate_persistence_error(e, "Calendar"))?,
    )?;

    Ok(UserCalendarResponse {
        user: build_user_info(persistence, user)?,
        month: month_info(provisioned),
        items,
    })
}

/// Fully replaces one user's calendar for a month (self or admin).
///
/// The month must not be locked. Every supplied item must fall within the
/// month; otherwise the whole operation is rejected before any write
/// (fail-closed, never partial-apply).
///
/// # Errors
///
/// Returns `MonthLocked` for a locked month, `InvalidInput` for an item
/// dated outside the month, or another error if authorization or
/// persistence fails.
pub fn update_user_calendar(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    user_id: i64,
    year: i32,
    month: u8,
    request: &UserCalendarUpdateRequest,
) -> Result<UserCalendarResponse, ApiError> {
    let provisioned: MonthWithDays = provision_month(persistence, year, month)?;
    if provisioned.month.is_locked {
        return Err(ApiError::MonthLocked { year, month });
    }

    AuthorizationService::authorize_self_or_admin(persistence, actor, user_id, "write_calendar")?;

    let user: UserData = fetch_user(persistence, user_id)?;

    let day_by_date: BTreeMap<&str, i64> = provisioned
        .days
        .iter()
        .map(|day| (day.date.as_str(), day.day_id))
        .collect();

    let mut entries: Vec<NewStatusEntry> = Vec::with_capacity(request.items.len());
    for item in &request.items {
        let (_, canonical) = canonical_date(&item.date)?;
        let day_id: i64 =
            *day_by_date
                .get(canonical.as_str())
                .ok_or_else(|| ApiError::InvalidInput {
                    field: String::from("date"),
                    message: format!("Date {canonical} is not in {year}-{month:02}"),
                })?;
        entries.push(NewStatusEntry {
            day_id,
            status: item.status.as_str().to_string(),
            note: item.note.clone(),
        });
    }

    persistence
        .replace_user_month(user_id, provisioned.month.month_id, &entries)
        .map_err(|e| translate_persistence_error(e, "Calendar"))?;

    info!(
        user_id,
        year,
        month,
        items = entries.len(),
        actor_id = actor.id(),
        "User calendar replaced"
    );

    let items: Vec<DayStatusItem> = status_items(
        persistence
            .statuses_for_user_month(user_id, provisioned.month.month_id)
            .map_err(|e| translate_persistence_error(e, "Calendar"))?,
    )?;

    Ok(UserCalendarResponse {
        user: build_user_info(persistence, user)?,
        month: month_info(provisioned),
        items,
    })
}

/// Sets or clears one day's status and note for a user (admin only).
///
/// `status = "clear"` deletes the stored row. Unknown status strings
/// degrade gracefully: office when creating, prior status kept when
/// updating.
///
/// # Errors
///
/// Returns an error if the caller is not authorized, the user does not
/// exist, the date is not in the month, or persistence fails.
pub fn set_user_day_note(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    user_id: i64,
    year: i32,
    month: u8,
    date: &str,
    request: &SetDayNoteRequest,
) -> Result<DayNoteResponse, ApiError> {
    AuthorizationService::authorize_admin(persistence, actor, "set_day_note")?;

    fetch_user(persistence, user_id)?;
    let day: DayData = resolve_day(persistence, year, month, date)?;

    if request.status.as_deref() == Some(CLEAR_STATUS) {
        persistence
            .delete_day_status(user_id, day.day_id)
            .map_err(|e| translate_persistence_error(e, "Status"))?;

        info!(user_id, date = %day.date, actor_id = actor.id(), "Day status cleared");

        return Ok(DayNoteResponse {
            date: day.date,
            status: DayStatus::default(),
            note: None,
            cleared: true,
        });
    }

    let requested: Option<DayStatus> = request
        .status
        .as_deref()
        .and_then(|s| DayStatus::from_str(s).ok());

    let existing: Option<DayStatusData> = persistence
        .find_day_status(user_id, day.day_id)
        .map_err(|e| translate_persistence_error(e, "Status"))?;

    // Unknown status strings fall back to office on create and keep the
    // prior status on update.
    let status: DayStatus = match (&existing, requested) {
        (_, Some(status)) => status,
        (None, None) => DayStatus::default(),
        (Some(row), None) => parse_stored_status(&row.status)?,
    };

    persistence
        .upsert_day_status(user_id, day.day_id, status, request.note.as_deref())
        .map_err(|e| translate_persistence_error(e, "Status"))?;

    info!(user_id, date = %day.date, status = %status, actor_id = actor.id(), "Day note set");

    Ok(DayNoteResponse {
        date: day.date,
        status,
        note: request.note.clone(),
        cleared: false,
    })
}

// ============================================================================
// Team views
// ============================================================================

/// Builds the team calendar for a month: every user's statuses and notes
/// plus their remaining-remote figures at month start and end.
///
/// # Errors
///
/// Returns an error if the month number is invalid or persistence fails.
pub fn team_calendar(
    persistence: &mut Persistence,
    year: i32,
    month: u8,
) -> Result<TeamCalendarResponse, ApiError> {
    let provisioned: MonthWithDays = provision_month(persistence, year, month)?;
    let first_day: Date =
        officecal_domain::month_first_day(year, month).map_err(translate_domain_error)?;

    let stored: Vec<DayStatusData> = persistence
        .statuses_for_month(provisioned.month.month_id)
        .map_err(|e| translate_persistence_error(e, "Calendar"))?;

    let mut by_user: BTreeMap<i64, Vec<DayStatusData>> = BTreeMap::new();
    for row in stored {
        by_user.entry(row.user_id).or_default().push(row);
    }

    let users: Vec<UserData> = persistence
        .list_users()
        .map_err(|e| translate_persistence_error(e, "User"))?;

    let mut rows: Vec<TeamRowInfo> = Vec::with_capacity(users.len());
    for user in users {
        let (remote_remaining_start, remote_remaining_end) =
            reports::team_remote_figures(persistence, &user, year, first_day)?;

        let mut statuses: BTreeMap<String, DayStatus> = BTreeMap::new();
        let mut notes: BTreeMap<String, String> = BTreeMap::new();
        for row in by_user.remove(&user.user_id).unwrap_or_default() {
            statuses.insert(row.date.clone(), parse_stored_status(&row.status)?);
            if let Some(note) = row.note {
                notes.insert(row.date, note);
            }
        }

        rows.push(TeamRowInfo {
            user: build_user_info(persistence, user)?,
            statuses,
            notes,
            remote_remaining_start,
            remote_remaining_end,
        });
    }

    Ok(TeamCalendarResponse {
        month: month_info(provisioned),
        rows,
    })
}

/// Buckets every user by status on one date. Users without a stored row
/// land in the office bucket; every status bucket is present.
///
/// # Errors
///
/// Returns an error if the date is invalid or persistence fails.
pub fn who_is_in_office(
    persistence: &mut Persistence,
    date: &str,
) -> Result<WhoIsInOfficeResponse, ApiError> {
    let (parsed, canonical) = canonical_date(date)?;

    let provisioned: MonthWithDays =
        provision_month(persistence, parsed.year(), u8::from(parsed.month()))?;
    let day: DayData = persistence
        .find_day(provisioned.month.month_id, &canonical)
        .map_err(|e| translate_persistence_error(e, "Day"))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Day"),
            message: format!("Day {canonical} does not exist"),
        })?;

    let stored: Vec<DayStatusData> = persistence
        .statuses_for_day(day.day_id)
        .map_err(|e| translate_persistence_error(e, "Status"))?;
    let mut status_by_user: BTreeMap<i64, DayStatus> = BTreeMap::new();
    for row in stored {
        status_by_user.insert(row.user_id, parse_stored_status(&row.status)?);
    }

    let mut by_status: BTreeMap<String, Vec<UserInfo>> = DayStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), Vec::new()))
        .collect();

    let users: Vec<UserData> = persistence
        .list_users()
        .map_err(|e| translate_persistence_error(e, "User"))?;
    for user in users {
        let status: DayStatus = status_by_user
            .get(&user.user_id)
            .copied()
            .unwrap_or_default();
        let user_info: UserInfo = build_user_info(persistence, user)?;
        if let Some(bucket) = by_status.get_mut(status.as_str()) {
            bucket.push(user_info);
        }
    }

    Ok(WhoIsInOfficeResponse {
        date: canonical,
        by_status,
    })
}

// ============================================================================
// Quota reports
// ============================================================================

/// Builds the caller's remote-day counter for a year.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn remote_counter(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    year: i32,
) -> Result<RemoteCounterResponse, ApiError> {
    reports::remote_counter(persistence, &actor.user, year)
}

/// Builds the caller's vacation counter for a year, optionally narrowing
/// the `used` figure to one month.
///
/// # Errors
///
/// Returns an error if the month number is invalid or persistence fails.
pub fn vacation_counter(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    year: i32,
    month: Option<u8>,
) -> Result<VacationCounterResponse, ApiError> {
    if let Some(month) = month {
        officecal_domain::month_number(month).map_err(translate_domain_error)?;
    }
    reports::vacation_counter(persistence, &actor.user, year, month)
}

/// Lists a user's vacation dates for a year, ascending (self or admin).
///
/// # Errors
///
/// Returns an error if the caller is not authorized, the user does not
/// exist, or persistence fails.
pub fn vacation_dates(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    user_id: i64,
    year: i32,
) -> Result<VacationDatesResponse, ApiError> {
    AuthorizationService::authorize_self_or_admin(
        persistence,
        actor,
        user_id,
        "read_vacation_dates",
    )?;
    fetch_user(persistence, user_id)?;

    let dates: Vec<String> = persistence
        .vacation_dates(user_id, year)
        .map_err(|e| translate_persistence_error(e, "Vacation dates"))?;

    Ok(VacationDatesResponse {
        user_id,
        year,
        dates,
    })
}

// ============================================================================
// Departments & users
// ============================================================================

/// Creates a department (admin only).
///
/// # Errors
///
/// Returns `Conflict` for a duplicate name, or another error if
/// authorization or persistence fails.
pub fn create_department(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    request: &CreateDepartmentRequest,
) -> Result<DepartmentInfo, ApiError> {
    AuthorizationService::authorize_admin(persistence, actor, "create_department")?;

    let created = persistence
        .create_department(&request.name)
        .map_err(|e| translate_persistence_error(e, "Department"))?;

    info!(name = %created.name, actor_id = actor.id(), "Department created");

    Ok(DepartmentInfo {
        department_id: created.department_id,
        name: created.name,
    })
}

/// Lists all departments ordered by name.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_departments(
    persistence: &mut Persistence,
) -> Result<Vec<DepartmentInfo>, ApiError> {
    Ok(persistence
        .list_departments()
        .map_err(|e| translate_persistence_error(e, "Department"))?
        .into_iter()
        .map(|d| DepartmentInfo {
            department_id: d.department_id,
            name: d.name,
        })
        .collect())
}

/// Creates a user.
///
/// # Errors
///
/// Returns `Conflict` for a duplicate email, `InvalidInput` for a bad
/// role or start date, or another error if persistence fails.
pub fn create_user(
    persistence: &mut Persistence,
    request: &CreateUserRequest,
) -> Result<UserInfo, ApiError> {
    let role: String = match request.role.as_deref() {
        Some(role) => officecal_domain::Role::from_str(role)
            .map_err(translate_domain_error)?
            .as_str()
            .to_string(),
        None => officecal_domain::Role::default().as_str().to_string(),
    };

    let start_date: Option<String> = request
        .start_date
        .as_deref()
        .map(|s| canonical_date(s).map(|(_, canonical)| canonical))
        .transpose()?;

    validate_department(persistence, request.department_id)?;

    let data: NewUserData = NewUserData {
        display_name: request.display_name.clone(),
        email: request.email.clone(),
        role,
        annual_remote_limit: request.annual_remote_limit.unwrap_or(100),
        start_date,
        additional_vacation_days: request.additional_vacation_days.unwrap_or(0),
        carryover_vacation_days: request.carryover_vacation_days.unwrap_or(0),
        department_id: request.department_id,
        vacation_days: request
            .vacation_days
            .as_ref()
            .map(allotments_from_map)
            .unwrap_or_default(),
    };

    let created: UserData = persistence
        .create_user(&data)
        .map_err(|e| translate_persistence_error(e, "User"))?;

    info!(user_id = created.user_id, email = %created.email, "User created");

    build_user_info(persistence, created)
}

/// Lists all users ordered by display name.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_users(persistence: &mut Persistence) -> Result<Vec<UserInfo>, ApiError> {
    let users: Vec<UserData> = persistence
        .list_users()
        .map_err(|e| translate_persistence_error(e, "User"))?;

    let mut result: Vec<UserInfo> = Vec::with_capacity(users.len());
    for user in users {
        result.push(build_user_info(persistence, user)?);
    }
    Ok(result)
}

/// Partially updates a user (admin only).
///
/// # Errors
///
/// Returns `NotFound` for an unknown user, `Conflict` when the new email
/// is taken, `InvalidInput` for a bad role or start date, or another
/// error if authorization or persistence fails.
pub fn update_user(
    persistence: &mut Persistence,
    actor: &CurrentUser,
    user_id: i64,
    request: &UpdateUserRequest,
) -> Result<UserInfo, ApiError> {
    AuthorizationService::authorize_admin(persistence, actor, "update_user")?;

    let role: Option<String> = request
        .role
        .as_deref()
        .map(|role| {
            officecal_domain::Role::from_str(role)
                .map_err(translate_domain_error)
                .map(|r| r.as_str().to_string())
        })
        .transpose()?;

    let start_date: Option<String> = request
        .start_date
        .as_deref()
        .map(|s| canonical_date(s).map(|(_, canonical)| canonical))
        .transpose()?;

    validate_department(persistence, request.department_id)?;

    let changes: UserUpdateData = UserUpdateData {
        display_name: request.display_name.clone(),
        email: request.email.clone(),
        role,
        annual_remote_limit: request.annual_remote_limit,
        start_date,
        additional_vacation_days: request.additional_vacation_days,
        carryover_vacation_days: request.carryover_vacation_days,
        department_id: request.department_id,
        vacation_days: request.vacation_days.as_ref().map(|m| allotments_from_map(m)),
    };

    let updated: UserData = persistence
        .update_user(user_id, &changes)
        .map_err(|e| translate_persistence_error(e, "User"))?;

    info!(user_id, actor_id = actor.id(), "User updated");

    build_user_info(persistence, updated)
}
