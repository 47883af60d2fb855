//! Toast types, the notifier, and its subscribers.
//!
//! A `Notifier` emits one `ToastEvent` (`showToast`, `{message, type}`) per
//! `notify` call to every registered `ToastSubscriber`. Closures implement
//! the trait directly; `BroadcastSubscriber` bridges into async consumers and
//! `RecordingSubscriber` captures events in memory.

mod notifier;
mod subscriber;
mod types;

pub use notifier::{Notifier, NotifierStats, NotifierStatsSnapshot, SubscriptionId};
pub use subscriber::{BroadcastSubscriber, RecordingSubscriber, ToastSubscriber};
pub use types::{Severity, Toast, ToastEvent, TOAST_EVENT_NAME};
