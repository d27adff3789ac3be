//! Client errors.

use eshop_auth::AuthError;
use eshop_commerce::CommerceError;
use eshop_data::Failure;
use eshop_forms::FormError;
use thiserror::Error;

use crate::routes::Route;

/// Client error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// No usable session, or the session lacks a role.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The backend call failed; the reason is displayable.
    #[error(transparent)]
    Api(#[from] Failure),

    /// The form has invalid fields; messages are on the fields.
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The view was reset before the result arrived.
    #[error("result arrived after its view was reset")]
    Stale,
}

impl ClientError {
    /// Where the user should be sent instead of seeing a message.
    ///
    /// Missing or expired sessions go to the login page; a missing role
    /// goes home.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            ClientError::Auth(e) if e.is_auth_failure() => Some(Route::Login),
            ClientError::Auth(e) if e.is_permission_error() => Some(Route::Home),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_redirect() {
        assert_eq!(
            ClientError::from(AuthError::SessionExpired).redirect(),
            Some(Route::Login)
        );
        assert_eq!(
            ClientError::from(AuthError::InsufficientPermissions).redirect(),
            Some(Route::Home)
        );
        assert_eq!(ClientError::from(Failure::transport(None)).redirect(), None);
    }
}
