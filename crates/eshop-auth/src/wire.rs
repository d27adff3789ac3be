//! Request and response bodies of the authentication endpoints.

use crate::user::{roles, Role, Roles};
use crate::Session;
use eshop_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// Sign-in request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Sign-up request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
}

/// Successful sign-in body.
///
/// Only `token` is guaranteed; `id` and `roles` are used when present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

impl SignInResponse {
    /// Start a session for `username` issued at `issued_at_ms`.
    ///
    /// A backend that sends no roles is treated as granting `USER`.
    pub fn into_session(self, username: impl Into<String>, issued_at_ms: i64) -> Session {
        let granted: Roles = match self.roles {
            Some(names) if !names.is_empty() => roles(names),
            _ => roles([Role::User.as_str()]),
        };
        Session::new(username, self.token, granted, self.id, issued_at_ms)
    }
}

/// Body of a message-only response, as returned by sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_body_is_camel_case() {
        let body = SignUpRequest {
            first_name: "Asha".into(),
            contact_number: "9876543210".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["firstName"], "Asha");
        assert_eq!(json["contactNumber"], "9876543210");
    }

    #[test]
    fn test_sign_in_token_only() {
        let resp: SignInResponse = serde_json::from_str(r#"{"token":"jwt"}"#).unwrap();
        let session = resp.into_session("a@b.co", 1_000);
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.access_token_expiry_ms, 301_000);
        assert!(session.has_role(&["USER"]));
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn test_sign_in_with_id_and_roles() {
        let resp: SignInResponse =
            serde_json::from_str(r#"{"token":"jwt","id":"u7","roles":["ADMIN"]}"#).unwrap();
        let session = resp.into_session("a@b.co", 0);
        assert_eq!(session.user_id, Some(UserId::new("u7")));
        assert!(session.has_role(&["ADMIN"]));
        assert!(!session.has_role(&["USER"]));
    }
}
