// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the OfficeCal attendance and leave tracking
//! system.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! resolves the caller's identity from the `X-User-Id` header value,
//! enforces role-based authorization (with the first-user bootstrap
//! bypass), validates input against the domain rules, and translates
//! every lower-layer error into the API error contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod reports;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthorizationService, CurrentUser, resolve_current_user};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_department, create_user, get_month, get_user_calendar, list_departments, list_users,
    remote_counter, set_day_holiday, set_day_workday_override, set_month_locked,
    set_user_day_note, team_calendar, update_user, update_user_calendar, vacation_counter,
    vacation_dates, who_is_in_office,
};
pub use request_response::{
    CreateDepartmentRequest, CreateUserRequest, DayInfo, DayNoteResponse, DayStatusItem,
    DepartmentInfo, MonthInfo, RemoteCounterResponse, SetDayFlagRequest, SetDayNoteRequest,
    TeamCalendarResponse, TeamRowInfo, UpdateUserRequest, UserCalendarResponse,
    UserCalendarUpdateRequest, UserInfo, VacationAllotmentInfo, VacationCounterResponse,
    VacationDatesResponse, WhoIsInOfficeResponse,
};
