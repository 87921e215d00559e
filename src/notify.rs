//! Transient user notifications.
//!
//! The workflow reports every success and failure through the [`Notifier`]
//! trait so it stays independent of any rendering surface.

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Surface for transient, non-blocking user notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Report a message to the user. Must not block.
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Notifier printing successes to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => println!("{message}"),
            NotificationKind::Error => eprintln!("{message}"),
        }
    }
}
