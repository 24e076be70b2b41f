// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and calendar math.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A role string is not one of the known roles.
    InvalidRole(String),
    /// A day status string is not one of the known statuses.
    InvalidDayStatus(String),
    /// A month number is outside 1..=12.
    InvalidMonthNumber {
        /// The invalid month value.
        month: u8,
    },
    /// A date string failed to parse.
    DateParseError {
        /// The string that failed to parse.
        date_string: String,
        /// The underlying parse error.
        error: String,
    },
    /// Date arithmetic overflowed the representable range.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(role) => write!(f, "Invalid role: '{role}'"),
            Self::InvalidDayStatus(status) => write!(f, "Invalid day status: '{status}'"),
            Self::InvalidMonthNumber { month } => {
                write!(f, "Invalid month number: {month}. Must be between 1 and 12")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
