//! Application context shared by every view.

use std::sync::Arc;

use eshop_auth::{Clock, Session, SessionStore, SystemClock};
use eshop_data::FetchClient;

use crate::notify::Notifier;
use crate::routes::{guard, Guard, Route};
use crate::ClientError;

/// Handles to the backend client, the session and the notification slot.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<AppContextInner>,
}

struct AppContextInner {
    client: FetchClient,
    session: SessionStore,
    notifier: Notifier,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("client", &self.inner.client)
            .field("session", &self.inner.session)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    pub fn new(client: FetchClient) -> Self {
        Self::with_clock(client, Arc::new(SystemClock))
    }

    pub fn with_clock(client: FetchClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(AppContextInner {
                client,
                session: SessionStore::new(clock),
                notifier: Notifier::new(),
            }),
        }
    }

    pub fn client(&self) -> &FetchClient {
        &self.inner.client
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// Bearer token for a protected call, checked for expiry first.
    pub fn token(&self) -> Result<String, ClientError> {
        Ok(self.inner.session.access_token()?)
    }

    /// The live session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.inner.session.current()
    }

    /// Guard decision for opening `route` now.
    pub fn guard(&self, route: &Route) -> Guard {
        guard(route, self.current_session().as_ref())
    }
}
