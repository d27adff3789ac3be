//! Single-slot notification broadcaster.
//!
//! Views post a message with a level; whatever shows toasts reads the
//! newest one. A new message replaces the old one, there is no queue.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub level: Level,
}

/// Broadcaster handle. Clones share the slot.
#[derive(Debug, Clone)]
pub struct Notifier {
    slot: Arc<watch::Sender<Option<Notification>>>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Replace the current notification.
    pub fn broadcast(&self, message: impl Into<String>, level: Level) {
        let notification = Notification {
            message: message.into(),
            level,
        };
        tracing::debug!(level = %notification.level, message = %notification.message, "broadcast");
        self.slot.send_replace(Some(notification));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.broadcast(message, Level::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.broadcast(message, Level::Error);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.broadcast(message, Level::Warning);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.broadcast(message, Level::Info);
    }

    /// The newest notification, if any.
    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().clone()
    }

    /// Take the newest notification, leaving the slot empty.
    pub fn take(&self) -> Option<Notification> {
        self.slot.send_replace(None)
    }

    /// Watch the slot. Receivers only ever observe the newest value.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.slot.subscribe()
    }
}
