//! User-facing notifications.
//!
//! Fire-and-forget success/warning/error notices. Producers never learn
//! whether or how a notice was shown.

use std::collections::VecDeque;
use tracing::{error, info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    /// Operation completed.
    Success,
    /// Informational message.
    Info,
    /// Validation failure; nothing changed.
    Warning,
    /// Operation failed.
    Error,
}

/// A titled message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short heading.
    pub title: String,
    /// User-facing text.
    pub message: String,
    /// Severity.
    pub variant: NotificationVariant,
}

impl Notification {
    /// Notification with an explicit variant.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        variant: NotificationVariant,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant,
        }
    }

    /// Success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationVariant::Success)
    }

    /// Info notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationVariant::Info)
    }

    /// Warning notification.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationVariant::Warning)
    }

    /// Error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationVariant::Error)
    }
}

/// Notification boundary.
pub trait Notifier {
    /// Deliver one notification.
    fn notify(&mut self, notification: Notification);
}

/// Writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, n: Notification) {
        match n.variant {
            NotificationVariant::Success | NotificationVariant::Info => {
                info!(title = %n.title, "{}", n.message)
            }
            NotificationVariant::Warning => warn!(title = %n.title, "{}", n.message),
            NotificationVariant::Error => error!(title = %n.title, "{}", n.message),
        }
    }
}

/// Bounded in-memory notification history, newest last.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationLog {
    /// Log keeping at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Most recent notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been notified.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        TracingNotifier.notify(notification.clone());
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_keeps_latest_notification() {
        let mut log = NotificationLog::default();

        log.notify(Notification::success("File Upload", "File uploaded successfully."));
        log.notify(Notification::error("Error", "Error submitting certification."));

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().variant, NotificationVariant::Error);
    }

    #[test]
    fn log_drops_oldest_beyond_capacity() {
        let mut log = NotificationLog::new(2);

        for i in 0..3 {
            log.notify(Notification::warning("Export", format!("n{i}")));
        }

        let messages: Vec<&str> = log.entries().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["n1", "n2"]);
    }

    #[test]
    fn zero_capacity_still_keeps_one() {
        let mut log = NotificationLog::new(0);

        log.notify(Notification::warning("Export", "a"));
        log.notify(Notification::warning("Export", "b"));

        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().unwrap().message, "b");
    }
}
