//! Server-side services.

pub mod notifier;
