//! Notification types and dispatch for async-action.
//!
//! This crate provides:
//! - The [`Notification`] record handed to the display subsystem
//! - The [`Notify`] trait implemented by notification backends
//! - A logging backend and an in-memory recording backend

pub mod error;

pub use error::{NotifyError, Result};

use std::fmt::Display;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// How a notification should be styled by the display subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Default,
    Destructive,
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Default => write!(f, "default"),
            Variant::Destructive => write!(f, "destructive"),
        }
    }
}

/// A transient message for the user.
///
/// Displays render the description under the optional title and
/// auto-dismiss after a short delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Variant,
}

impl Notification {
    /// A neutral, untitled message.
    pub fn message(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: Some(description.into()),
            variant: Variant::Default,
        }
    }

    /// A destructive-styled message with a title.
    pub fn alert(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            variant: Variant::Destructive,
        }
    }

    pub const fn is_destructive(&self) -> bool {
        matches!(self.variant, Variant::Destructive)
    }
}

/// A notification backend.
///
/// Injected into whatever produces notifications so that callers decide
/// where messages go (UI surface, logs, a test buffer).
pub trait Notify: Send + Sync {
    fn notify(&self, notification: Notification) -> Result<()>;
}

pub type BoxedNotifier = Box<dyn Notify>;

impl Notify for Box<dyn Notify> {
    fn notify(&self, notification: Notification) -> Result<()> {
        self.as_ref().notify(notification)
    }
}

impl<N: Notify + ?Sized> Notify for Arc<N> {
    fn notify(&self, notification: Notification) -> Result<()> {
        self.as_ref().notify(notification)
    }
}

/// Renders notifications as tracing events.
///
/// Destructive notifications log at warn level, everything else at info.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub const fn new() -> Self {
        Self
    }
}

impl Notify for LogNotifier {
    fn notify(&self, notification: Notification) -> Result<()> {
        let body = notification.description.as_deref().unwrap_or("");
        match notification.title.as_deref() {
            Some(title) if notification.is_destructive() => warn!("{}: {}", title, body),
            Some(title) => info!("{}: {}", title, body),
            None if notification.is_destructive() => warn!("{}", body),
            None => info!("{}", body),
        }
        Ok(())
    }
}

/// Records every notification in delivery order.
///
/// Useful both as a test double and as a buffer for callers that want to
/// observe what was sent.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notify for MemoryNotifier {
    fn notify(&self, notification: Notification) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
        Ok(())
    }
}
