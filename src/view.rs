//! View-layer collaborators for CampusPass.
//!
//! Navigation and user-facing notifications are outward-facing concerns
//! of the UI shell. The auth manager only knows these two seams; the
//! production impls here log through tracing, and tests substitute
//! recording doubles.

use std::sync::Mutex;

use tracing::{error, info};

use crate::route::RoutePath;

/// Navigation collaborator. Invoked when an auth operation demands a
/// view change (role landing after login, sign-in after logout).
pub trait Navigator: Send + Sync {
    /// Navigate to the given view.
    fn navigate_to(&self, path: RoutePath);
}

/// Notification surface (toast-equivalent).
pub trait Notifier: Send + Sync {
    /// Report a successful operation.
    fn success(&self, message: &str);

    /// Report a failed operation.
    fn error(&self, message: &str);

    /// Report a neutral status change.
    fn info(&self, message: &str);
}

/// Navigator that records the requested path in the log.
///
/// Stands in for a real router when the crate runs headless.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_to(&self, path: RoutePath) {
        info!(path = %path, "Navigating");
    }
}

/// Notifier that forwards messages to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(kind = "success", "{message}");
    }

    fn error(&self, message: &str) {
        error!(kind = "error", "{message}");
    }

    fn info(&self, message: &str) {
        info!(kind = "info", "{message}");
    }
}

/// Recording navigator for tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<RoutePath>>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths navigated to, in order.
    pub fn visited(&self) -> Vec<RoutePath> {
        self.visited.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The most recent navigation target, if any.
    pub fn last(&self) -> Option<RoutePath> {
        self.visited().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: RoutePath) {
        self.visited
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path);
    }
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Success toast.
    Success(String),
    /// Error toast.
    Error(String),
    /// Info toast.
    Info(String),
}

/// Recording notifier for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications shown, in order.
    pub fn messages(&self) -> Vec<Notification> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(&self, n: Notification) {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).push(n);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Notification::Error(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.push(Notification::Info(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator_tracks_order() {
        let nav = RecordingNavigator::new();
        assert!(nav.last().is_none());

        nav.navigate_to(RoutePath::Login);
        nav.navigate_to(RoutePath::StudentDashboard);

        assert_eq!(
            nav.visited(),
            vec![RoutePath::Login, RoutePath::StudentDashboard]
        );
        assert_eq!(nav.last(), Some(RoutePath::StudentDashboard));
    }

    #[test]
    fn test_recording_notifier_tracks_kinds() {
        let notifier = RecordingNotifier::new();
        notifier.success("Login successful!");
        notifier.error("Invalid email or password");
        notifier.info("You have been logged out");

        assert_eq!(
            notifier.messages(),
            vec![
                Notification::Success("Login successful!".to_string()),
                Notification::Error("Invalid email or password".to_string()),
                Notification::Info("You have been logged out".to_string()),
            ]
        );
    }
}
