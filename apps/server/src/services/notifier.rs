//! Notification sink.
//!
//! The notification layer is informed, not consulted: after each mutation
//! it receives a success/failure signal and a human-readable message. The
//! signature is infallible — a sink that cannot deliver must swallow the
//! problem rather than block or fail the operation that triggered it.

/// Outcome of the operation being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Trait for notification sinks.
pub trait Notifier: Send + Sync {
    /// Reports an operation outcome with a title and message.
    fn notify(&self, outcome: Outcome, title: &str, message: &str);
}

/// Notification sink that reports through the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, outcome: Outcome, title: &str, message: &str) {
        match outcome {
            Outcome::Success => tracing::info!(title = %title, "{}", message),
            Outcome::Failure => tracing::warn!(title = %title, "{}", message),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use super::*;

    /// Notifier that records every notification for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub notifications: Mutex<Vec<(Outcome, String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, outcome: Outcome, title: &str, message: &str) {
            // A sink that cannot record just drops the notification.
            if let Ok(mut notifications) = self.notifications.lock() {
                notifications.push((outcome, title.to_string(), message.to_string()));
            }
        }
    }
}
