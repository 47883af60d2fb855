//! Toast notifications: a synchronous notifier plus a catalog of
//! domain-specific messages (payments, accounts, credit applications).

// Supporting modules
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain layer
pub mod catalog;
pub mod notification;

pub use catalog::{CatalogEntry, Notifications};
pub use error::{NotifyError, Result};
pub use notification::{Notifier, Severity, Toast, ToastEvent, ToastSubscriber};
