//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No session has been started.
    #[error("not logged in")]
    NotLoggedIn,

    /// The session's access token has passed its expiry.
    #[error("session expired")]
    SessionExpired,

    /// Insufficient permissions.
    #[error("insufficient permissions")]
    InsufficientPermissions,
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::NotLoggedIn | AuthError::SessionExpired)
    }

    /// Check if this is a permission error.
    pub fn is_permission_error(&self) -> bool {
        matches!(self, AuthError::InsufficientPermissions)
    }
}
