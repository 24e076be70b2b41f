// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use officecal_api::{
    ApiError, CreateDepartmentRequest, CreateUserRequest, CurrentUser, DayInfo, DayNoteResponse,
    DepartmentInfo, MonthInfo, RemoteCounterResponse, SetDayFlagRequest, SetDayNoteRequest,
    TeamCalendarResponse, UpdateUserRequest, UserCalendarResponse, UserCalendarUpdateRequest,
    UserInfo, VacationCounterResponse, VacationDatesResponse, WhoIsInOfficeResponse,
    resolve_current_user,
};
use officecal_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

mod seed;

/// OfficeCal Server - HTTP server for the office attendance and leave
/// tracking system.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seed the fixed department list and demo users on startup
    #[arg(long, default_value_t = false)]
    seed: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for calendar, status, and user records.
    persistence: Arc<Mutex<Persistence>>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always "ok" when the server is up.
    status: String,
}

/// Query parameters naming a year.
#[derive(Debug, Deserialize)]
struct YearQuery {
    /// The calendar year.
    year: i32,
}

/// Query parameters for the vacation counter.
#[derive(Debug, Deserialize)]
struct VacationCounterQuery {
    /// The calendar year.
    year: i32,
    /// Optional month to narrow the used figure.
    month: Option<u8>,
}

/// Query parameters for the who-is-in-office view.
#[derive(Debug, Deserialize)]
struct WhoIsInOfficeQuery {
    /// The ISO-8601 date to describe.
    date: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::MonthLocked { .. } | ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Resolves the caller's identity from the `X-User-Id` header.
fn resolve_actor(
    persistence: &mut Persistence,
    headers: &HeaderMap,
) -> Result<CurrentUser, HttpError> {
    let header_value: Option<&str> = headers
        .get("X-User-Id")
        .and_then(|value| value.to_str().ok());
    resolve_current_user(persistence, header_value)
        .map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Handler for GET /health.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST /departments (admin).
async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<DepartmentInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let department: DepartmentInfo =
        officecal_api::create_department(&mut persistence, &actor, &req)?;
    Ok(Json(department))
}

/// Handler for GET /departments.
async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<DepartmentInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let departments: Vec<DepartmentInfo> = officecal_api::list_departments(&mut persistence)?;
    Ok(Json(departments))
}

/// Handler for POST /users.
///
/// Open by design: the first user must be creatable before anyone can
/// authenticate. Uniqueness on email is still enforced.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: UserInfo = officecal_api::create_user(&mut persistence, &req)?;
    Ok(Json(user))
}

/// Handler for GET /users.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<UserInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let users: Vec<UserInfo> = officecal_api::list_users(&mut persistence)?;
    Ok(Json(users))
}

/// Handler for PUT `/users/{user_id}` (admin).
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let user: UserInfo = officecal_api::update_user(&mut persistence, &actor, user_id, &req)?;
    Ok(Json(user))
}

/// Handler for GET `/months/{year}/{month}`.
async fn handle_get_month(
    AxumState(app_state): AxumState<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<MonthInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let month_info: MonthInfo = officecal_api::get_month(&mut persistence, year, month)?;
    Ok(Json(month_info))
}

/// Handler for POST `/months/{year}/{month}/lock` (admin).
async fn handle_lock_month(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<MonthInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let month_info: MonthInfo =
        officecal_api::set_month_locked(&mut persistence, &actor, year, month, true)?;
    Ok(Json(month_info))
}

/// Handler for POST `/months/{year}/{month}/unlock` (admin).
async fn handle_unlock_month(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<MonthInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let month_info: MonthInfo =
        officecal_api::set_month_locked(&mut persistence, &actor, year, month, false)?;
    Ok(Json(month_info))
}

/// Handler for PUT `/months/{year}/{month}/days/{date}/holiday` (admin).
async fn handle_set_day_holiday(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((year, month, date)): Path<(i32, u8, String)>,
    Json(req): Json<SetDayFlagRequest>,
) -> Result<Json<DayInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let day: DayInfo =
        officecal_api::set_day_holiday(&mut persistence, &actor, year, month, &date, req.value)?;
    Ok(Json(day))
}

/// Handler for PUT `/months/{year}/{month}/days/{date}/workday` (admin).
async fn handle_set_day_workday(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((year, month, date)): Path<(i32, u8, String)>,
    Json(req): Json<SetDayFlagRequest>,
) -> Result<Json<DayInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let day: DayInfo = officecal_api::set_day_workday_override(
        &mut persistence,
        &actor,
        year,
        month,
        &date,
        req.value,
    )?;
    Ok(Json(day))
}

/// Handler for GET `/users/{user_id}/calendar/{year}/{month}` (self or admin).
async fn handle_get_user_calendar(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((user_id, year, month)): Path<(i64, i32, u8)>,
) -> Result<Json<UserCalendarResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let calendar: UserCalendarResponse =
        officecal_api::get_user_calendar(&mut persistence, &actor, user_id, year, month)?;
    Ok(Json(calendar))
}

/// Handler for PUT `/users/{user_id}/calendar/{year}/{month}` (self or admin).
///
/// Full-replace semantics; rejected with a conflict while the month is
/// locked.
async fn handle_update_user_calendar(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((user_id, year, month)): Path<(i64, i32, u8)>,
    Json(req): Json<UserCalendarUpdateRequest>,
) -> Result<Json<UserCalendarResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let calendar: UserCalendarResponse = officecal_api::update_user_calendar(
        &mut persistence,
        &actor,
        user_id,
        year,
        month,
        &req,
    )?;
    Ok(Json(calendar))
}

/// Handler for PUT `/users/{user_id}/calendar/{year}/{month}/{date}/note` (admin).
async fn handle_set_day_note(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path((user_id, year, month, date)): Path<(i64, i32, u8, String)>,
    Json(req): Json<SetDayNoteRequest>,
) -> Result<Json<DayNoteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let response: DayNoteResponse = officecal_api::set_user_day_note(
        &mut persistence,
        &actor,
        user_id,
        year,
        month,
        &date,
        &req,
    )?;
    Ok(Json(response))
}

/// Handler for GET `/calendar/{year}/{month}`, the team view.
async fn handle_team_calendar(
    AxumState(app_state): AxumState<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<TeamCalendarResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let team: TeamCalendarResponse = officecal_api::team_calendar(&mut persistence, year, month)?;
    Ok(Json(team))
}

/// Handler for GET /who-is-in-office.
async fn handle_who_is_in_office(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<WhoIsInOfficeQuery>,
) -> Result<Json<WhoIsInOfficeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let view: WhoIsInOfficeResponse =
        officecal_api::who_is_in_office(&mut persistence, &query.date)?;
    Ok(Json(view))
}

/// Handler for GET /me/remote-counter.
async fn handle_remote_counter(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<YearQuery>,
) -> Result<Json<RemoteCounterResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let counter: RemoteCounterResponse =
        officecal_api::remote_counter(&mut persistence, &actor, query.year)?;
    Ok(Json(counter))
}

/// Handler for GET /me/vacation-counter.
async fn handle_vacation_counter(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<VacationCounterQuery>,
) -> Result<Json<VacationCounterResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let counter: VacationCounterResponse =
        officecal_api::vacation_counter(&mut persistence, &actor, query.year, query.month)?;
    Ok(Json(counter))
}

/// Handler for GET `/users/{user_id}/vacation-dates` (self or admin).
async fn handle_vacation_dates(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i64>,
    Query(query): Query<YearQuery>,
) -> Result<Json<VacationDatesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: CurrentUser = resolve_actor(&mut persistence, &headers)?;
    let dates: VacationDatesResponse =
        officecal_api::vacation_dates(&mut persistence, &actor, user_id, query.year)?;
    Ok(Json(dates))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/departments", post(handle_create_department))
        .route("/departments", get(handle_list_departments))
        .route("/users", post(handle_create_user))
        .route("/users", get(handle_list_users))
        .route("/users/{user_id}", put(handle_update_user))
        .route("/months/{year}/{month}", get(handle_get_month))
        .route("/months/{year}/{month}/lock", post(handle_lock_month))
        .route("/months/{year}/{month}/unlock", post(handle_unlock_month))
        .route(
            "/months/{year}/{month}/days/{date}/holiday",
            put(handle_set_day_holiday),
        )
        .route(
            "/months/{year}/{month}/days/{date}/workday",
            put(handle_set_day_workday),
        )
        .route(
            "/users/{user_id}/calendar/{year}/{month}",
            get(handle_get_user_calendar),
        )
        .route(
            "/users/{user_id}/calendar/{year}/{month}",
            put(handle_update_user_calendar),
        )
        .route(
            "/users/{user_id}/calendar/{year}/{month}/{date}/note",
            put(handle_set_day_note),
        )
        .route("/calendar/{year}/{month}", get(handle_team_calendar))
        .route("/who-is-in-office", get(handle_who_is_in_office))
        .route("/me/remote-counter", get(handle_remote_counter))
        .route("/me/vacation-counter", get(handle_vacation_counter))
        .route(
            "/users/{user_id}/vacation-dates",
            get(handle_vacation_dates),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing OfficeCal Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.seed {
        seed::seed_demo_data(&mut persistence)?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
