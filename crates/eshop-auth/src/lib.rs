//! Session and role state for the E-Shop storefront client.
//!
//! A [`Session`] is created on login and lives in a [`SessionStore`] until
//! logout or token expiry. Protected calls take their bearer token from
//! [`SessionStore::access_token`], which reports [`AuthError::NotLoggedIn`]
//! and [`AuthError::SessionExpired`] separately.

mod clock;
mod error;
mod session;
mod user;
mod wire;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::AuthError;
pub use session::{Session, SessionStore};
pub use user::{intersects, roles, Role, Roles};
pub use wire::{Credentials, MessageResponse, SignInResponse, SignUpRequest};
