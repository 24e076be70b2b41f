// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and pure calculations for the OfficeCal attendance and
//! leave tracking system.
//!
//! This crate has no I/O and no storage knowledge. It provides:
//!
//! - the `Role` and `DayStatus` enums shared by every layer
//! - calendar utilities (month enumeration, weekday names, weekend
//!   classification, ISO date conversion)
//! - the vacation accrual calculator

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod accrual;
mod calendar;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use accrual::{ANNUAL_VACATION_DAYS, accrued_vacation_days};
pub use calendar::{
    format_date, is_weekend, month_dates, month_first_day, month_last_day, month_length,
    month_number, parse_date, weekday_abbrev,
};
pub use error::DomainError;
pub use types::{DayStatus, Role};
