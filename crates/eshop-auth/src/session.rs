//! Session management.

use std::sync::{Arc, RwLock};

use crate::clock::{Clock, SystemClock};
use crate::user::{intersects, Roles};
use crate::AuthError;
use eshop_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Login name (the email address used to sign in).
    pub username: String,
    /// Bearer token for protected calls.
    pub access_token: String,
    /// Milliseconds since the epoch at which the token stops being usable.
    pub access_token_expiry_ms: i64,
    pub roles: Roles,
    pub user_id: Option<UserId>,
}

impl Session {
    /// Token lifetime: 5 minutes. There is no refresh.
    pub const TOKEN_LIFETIME_MS: i64 = 300_000;

    /// Create a session issued at `issued_at_ms`.
    pub fn new(
        username: impl Into<String>,
        access_token: impl Into<String>,
        roles: Roles,
        user_id: Option<UserId>,
        issued_at_ms: i64,
    ) -> Self {
        Self {
            username: username.into(),
            access_token: access_token.into(),
            access_token_expiry_ms: issued_at_ms + Self::TOKEN_LIFETIME_MS,
            roles,
            user_id,
        }
    }

    /// Check if the token has expired at `now_ms`.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.access_token_expiry_ms
    }

    /// True iff the session holds at least one of `required`.
    pub fn has_role<S: AsRef<str>>(&self, required: &[S]) -> bool {
        intersects(&self.roles, required)
    }
}

/// Owner of the current session.
///
/// One store lives in the application context; it is the only writer of
/// the session. An expired session is dropped as soon as it is noticed.
pub struct SessionStore {
    session: RwLock<Option<Session>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl SessionStore {
    /// Create an empty store reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            session: RwLock::new(None),
            clock,
        }
    }

    /// The store's clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Current time from the store's clock.
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Replace any session with `session`.
    pub fn begin(&self, session: Session) {
        tracing::info!(username = %session.username, "session started");
        *self.write() = Some(session);
    }

    /// Restore a previously saved session, unless it has already expired.
    pub fn restore(&self, session: Session) -> Result<(), AuthError> {
        if session.is_expired_at(self.now_ms()) {
            return Err(AuthError::SessionExpired);
        }
        *self.write() = Some(session);
        Ok(())
    }

    /// Log out. Returns the session that was active, if any.
    pub fn end(&self) -> Option<Session> {
        let ended = self.write().take();
        if let Some(session) = &ended {
            tracing::info!(username = %session.username, "session ended");
        }
        ended
    }

    /// The live session, distinguishing "never logged in" from "expired".
    pub fn active(&self) -> Result<Session, AuthError> {
        let now = self.now_ms();
        {
            let guard = self.read();
            match guard.as_ref() {
                None => return Err(AuthError::NotLoggedIn),
                Some(session) if !session.is_expired_at(now) => return Ok(session.clone()),
                Some(_) => {}
            }
        }

        let mut guard = self.write();
        // Re-check under the write lock; a new login may have raced in.
        match guard.as_ref() {
            Some(session) if !session.is_expired_at(now) => Ok(session.clone()),
            Some(session) => {
                tracing::debug!(username = %session.username, "session expired");
                *guard = None;
                Err(AuthError::SessionExpired)
            }
            None => Err(AuthError::NotLoggedIn),
        }
    }

    /// The live session, if any.
    pub fn current(&self) -> Option<Session> {
        self.active().ok()
    }

    /// The bearer token for a protected call.
    pub fn access_token(&self) -> Result<String, AuthError> {
        self.active().map(|s| s.access_token)
    }

    /// The logged-in user's id, if known.
    pub fn user_id(&self) -> Option<UserId> {
        self.active().ok().and_then(|s| s.user_id)
    }

    pub fn is_logged_in(&self) -> bool {
        self.active().is_ok()
    }

    /// True iff a live session holds at least one of `required`.
    pub fn has_role<S: AsRef<str>>(&self, required: &[S]) -> bool {
        self.active().map(|s| s.has_role(required)).unwrap_or(false)
    }

    /// Fail unless a live session holds at least one of `required`.
    pub fn require_role<S: AsRef<str>>(&self, required: &[S]) -> Result<Session, AuthError> {
        let session = self.active()?;
        if session.has_role(required) {
            Ok(session)
        } else {
            Err(AuthError::InsufficientPermissions)
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::user::roles;

    const ISSUED: i64 = 1_700_000_000_000;

    fn store() -> (SessionStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(ISSUED));
        (SessionStore::new(clock.clone()), clock)
    }

    fn session() -> Session {
        Session::new(
            "asha@example.com",
            "jwt",
            roles(["ADMIN"]),
            Some(UserId::new("u1")),
            ISSUED,
        )
    }

    #[test]
    fn test_expiry_is_five_minutes_after_issue() {
        let session = session();
        assert_eq!(session.access_token_expiry_ms, ISSUED + 300_000);
        assert!(!session.is_expired_at(ISSUED + 299_999));
        assert!(session.is_expired_at(ISSUED + 300_000));
    }

    #[test]
    fn test_not_logged_in_differs_from_expired() {
        let (store, clock) = store();
        assert_eq!(store.access_token(), Err(AuthError::NotLoggedIn));

        store.begin(session());
        assert_eq!(store.access_token().as_deref(), Ok("jwt"));

        clock.advance(Session::TOKEN_LIFETIME_MS);
        assert_eq!(store.access_token(), Err(AuthError::SessionExpired));
        // The expired session was dropped.
        assert_eq!(store.access_token(), Err(AuthError::NotLoggedIn));
    }

    #[test]
    fn test_logout_is_immediate() {
        let (store, _) = store();
        store.begin(session());
        assert!(store.end().is_some());
        assert!(!store.is_logged_in());
        assert!(store.end().is_none());
    }

    #[test]
    fn test_roles() {
        let (store, _) = store();
        assert!(!store.has_role(&["ADMIN"]));
        store.begin(session());
        assert!(store.has_role(&["ADMIN", "USER"]));
        assert!(!store.has_role(&["USER"]));
        assert_eq!(
            store.require_role(&["USER"]),
            Err(AuthError::InsufficientPermissions)
        );
        assert_eq!(store.user_id(), Some(UserId::new("u1")));
    }

    #[test]
    fn test_restore_rejects_expired() {
        let (store, clock) = store();
        clock.advance(Session::TOKEN_LIFETIME_MS + 1);
        assert_eq!(store.restore(session()), Err(AuthError::SessionExpired));
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let json = serde_json::to_value(session()).unwrap();
        assert_eq!(json["accessTokenExpiryMs"], ISSUED + 300_000);
        assert_eq!(json["roles"], serde_json::json!(["ADMIN"]));
    }
}
