//! View scopes.
//!
//! A view takes a [`ScopeTicket`] before starting a request and applies the
//! result only if the ticket is still current. Resetting or dropping the
//! [`ViewScope`] invalidates every outstanding ticket.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use crate::ClientError;

#[derive(Debug, Default)]
pub struct ViewScope {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct ScopeTicket {
    generation: Weak<AtomicU64>,
    issued: u64,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a result about to be requested.
    pub fn ticket(&self) -> ScopeTicket {
        ScopeTicket {
            generation: Arc::downgrade(&self.generation),
            issued: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate every ticket issued so far.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl ScopeTicket {
    pub fn is_current(&self) -> bool {
        self.generation
            .upgrade()
            .is_some_and(|g| g.load(Ordering::Acquire) == self.issued)
    }

    /// Pass `value` through if the ticket is still current.
    pub fn admit<T>(&self, value: T) -> Result<T, ClientError> {
        if self.is_current() {
            Ok(value)
        } else {
            tracing::debug!("discarding stale result");
            Err(ClientError::Stale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_current_until_invalidated() {
        let scope = ViewScope::new();
        let ticket = scope.ticket();
        assert!(ticket.is_current());

        scope.invalidate();
        assert!(!ticket.is_current());
        assert_eq!(ticket.admit(1), Err(ClientError::Stale));
        assert_eq!(scope.ticket().admit(2), Ok(2));
    }

    #[test]
    fn test_dropping_scope_invalidates() {
        let scope = ViewScope::new();
        let ticket = scope.ticket();
        drop(scope);
        assert!(!ticket.is_current());
    }
}
