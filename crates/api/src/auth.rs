// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity resolution and authorization services.
//!
//! Identity is the caller-supplied numeric user id (the `X-User-Id`
//! header); there are no sessions or passwords. Authorization is
//! role-based with one explicit bootstrap exception: while at most one
//! user row exists, admin-gated actions bypass the role check so the
//! first user can finish setting the system up. The bypass is a pure
//! function of the current row count at call time, never ambient state.

use officecal_domain::Role;
use officecal_persistence::{Persistence, UserData};
use std::str::FromStr;
use tracing::debug;

use crate::error::{ApiError, AuthError};

/// An authenticated user with its parsed role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// The stored user row.
    pub user: UserData,
    /// The user's role, parsed from the stored string.
    pub role: Role,
}

impl CurrentUser {
    /// The authenticated user's id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.user.user_id
    }
}

/// Resolves the caller's identity from the raw `X-User-Id` header value.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `header_value` - The raw header value, if the header was present
///
/// # Errors
///
/// Returns an error if the header is missing, not a number, or does not
/// name a stored user.
pub fn resolve_current_user(
    persistence: &mut Persistence,
    header_value: Option<&str>,
) -> Result<CurrentUser, AuthError> {
    let raw: &str = header_value.ok_or_else(|| AuthError::AuthenticationFailed {
        reason: String::from("Missing X-User-Id header"),
    })?;

    let user_id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AuthError::AuthenticationFailed {
            reason: format!("'{raw}' is not a numeric user id"),
        })?;

    debug!("Resolving caller identity for user ID {}", user_id);

    let user: UserData = persistence
        .get_user(user_id)
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Database error: {e}"),
        })?
        .ok_or_else(|| AuthError::AuthenticationFailed {
            reason: format!("Unknown user: {user_id}"),
        })?;

    let role: Role = Role::from_str(&user.role).map_err(|_| AuthError::AuthenticationFailed {
        reason: format!("Invalid stored role: {}", user.role),
    })?;

    Ok(CurrentUser { user, role })
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if a user is authorized to perform an admin-only action.
    ///
    /// Admins always pass. A non-admin passes only under the bootstrap
    /// policy: when at most one user row exists, the role check is
    /// bypassed.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer (for the bootstrap count)
    /// * `actor` - The authenticated user
    /// * `action` - The action name, used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if the user lacks the admin role and the bootstrap
    /// bypass does not apply.
    pub fn authorize_admin(
        persistence: &mut Persistence,
        actor: &CurrentUser,
        action: &str,
    ) -> Result<(), ApiError> {
        if actor.role.is_admin() {
            return Ok(());
        }

        let total_users: i64 = persistence.count_users().map_err(|e| ApiError::Internal {
            message: format!("Failed to count users: {e}"),
        })?;

        if total_users <= 1 {
            debug!(
                "Bootstrap policy: sole user ID {} granted '{}'",
                actor.id(),
                action
            );
            return Ok(());
        }

        Err(ApiError::Unauthorized {
            action: action.to_string(),
            required_role: String::from("admin"),
        })
    }

    /// Checks if a user may act on the calendar data of `target_user_id`.
    ///
    /// Users always pass for themselves; acting on another user requires
    /// the admin authorization above.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer (for the bootstrap count)
    /// * `actor` - The authenticated user
    /// * `target_user_id` - The user whose data is being accessed
    /// * `action` - The action name, used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither the target user nor an
    /// authorized admin.
    pub fn authorize_self_or_admin(
        persistence: &mut Persistence,
        actor: &CurrentUser,
        target_user_id: i64,
        action: &str,
    ) -> Result<(), ApiError> {
        if actor.id() == target_user_id {
            return Ok(());
        }
        Self::authorize_admin(persistence, actor, action)
    }
}
