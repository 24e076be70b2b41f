// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role assigned to a user.
///
/// Roles gate authorization at the API boundary. Managers have no extra
/// privileges over employees in the current rules; the distinction is kept
/// for organizational reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee. May read and write only their own calendar.
    #[default]
    Employee,
    /// Team manager. Treated as an employee for authorization purposes.
    Manager,
    /// Administrator. May manage users, departments, month locks, and
    /// day-level overrides for any user.
    Admin,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Returns whether this role carries administrative privileges.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The single classification of a user's day.
///
/// Absence of a stored status for a (user, day) pair means the implicit
/// default `Office`; that rule is applied in every read path, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Working from the office (the implicit default).
    #[default]
    Office,
    /// Working remotely. Counts against the annual remote-day limit.
    Remote,
    /// On vacation. Counts against the accrued vacation balance.
    Vacation,
    /// Night shift.
    Night,
    /// Business trip.
    Trip,
    /// Absent (sick leave or otherwise unaccounted).
    Absent,
}

impl DayStatus {
    /// Every status, in display order. Used to build complete
    /// bucketed views (e.g. who-is-in-office) with empty buckets present.
    pub const ALL: [Self; 6] = [
        Self::Office,
        Self::Remote,
        Self::Vacation,
        Self::Night,
        Self::Trip,
        Self::Absent,
    ];

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Remote => "remote",
            Self::Vacation => "vacation",
            Self::Night => "night",
            Self::Trip => "trip",
            Self::Absent => "absent",
        }
    }
}

impl FromStr for DayStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(Self::Office),
            "remote" => Ok(Self::Remote),
            "vacation" => Ok(Self::Vacation),
            "night" => Ok(Self::Night),
            "trip" => Ok(Self::Trip),
            "absent" => Ok(Self::Absent),
            _ => Err(DomainError::InvalidDayStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
