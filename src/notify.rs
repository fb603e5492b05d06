//! User notifications
//!
//! The preset and export flows report their outcome through a
//! `NotificationSink` supplied by the host. `NotificationQueue` collects them
//! in memory; the CLI prints them as they arrive.

use serde::Serialize;
use std::fmt;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Get the icon/prefix for this severity
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub title: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, title: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            title: title.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, title)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error, title)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning, title)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, title)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.icon(), self.title, self.message)
    }
}

/// Receives notifications emitted by the modal flows
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// An in-memory list of notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent notification
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// Remove and return everything queued so far
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("Export Started", "Preparing file");
        assert_eq!(n.message, "Preparing file");
        assert_eq!(n.title, "Export Started");
        assert_eq!(n.severity, Severity::Info);
        assert_eq!(n.to_string(), "[i] Export Started: Preparing file");
    }

    #[test]
    fn test_notification_queue() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.notify(Notification::info("First", "one"));
        queue.notify(Notification::success("Second", "two"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.all()[0].title, "First");
        assert_eq!(queue.last().unwrap().severity, Severity::Success);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    }
}
