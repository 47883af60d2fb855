use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::error::Result;
use crate::metrics::ToastMetrics;

use super::{Severity, Toast, ToastEvent, ToastSubscriber};

/// Handle returned by `Notifier::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Statistics for the notifier
#[derive(Debug, Default)]
pub struct NotifierStats {
    /// Total events emitted
    pub total_emitted: AtomicU64,
    /// Total subscriber invocations
    pub total_delivered: AtomicU64,
    /// Events emitted while nobody was subscribed
    pub total_dropped: AtomicU64,
}

impl NotifierStats {
    pub fn snapshot(&self) -> NotifierStatsSnapshot {
        NotifierStatsSnapshot {
            total_emitted: self.total_emitted.load(Ordering::Relaxed),
            total_delivered: self.total_delivered.load(Ordering::Relaxed),
            total_dropped: self.total_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of notifier statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotifierStatsSnapshot {
    pub total_emitted: u64,
    pub total_delivered: u64,
    pub total_dropped: u64,
}

type Registry = Vec<(SubscriptionId, Arc<dyn ToastSubscriber>)>;

/// Emits toast events to registered subscribers.
///
/// Delivery is synchronous and best-effort: every subscriber registered when
/// `notify` is called sees the event before `notify` returns, and an event
/// emitted with no subscribers is dropped.
pub struct Notifier {
    subscribers: RwLock<Registry>,
    next_id: AtomicU64,
    stats: NotifierStats,
}

impl Notifier {
    /// Create a notifier with no subscribers
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            stats: NotifierStats::default(),
        }
    }

    /// Register a subscriber. Subscribers are invoked in registration order.
    pub fn subscribe<S>(&self, subscriber: S) -> SubscriptionId
    where
        S: ToastSubscriber + 'static,
    {
        self.subscribe_arc(Arc::new(subscriber))
    }

    /// Register a shared subscriber, keeping a handle to it elsewhere
    pub fn subscribe_arc(&self, subscriber: Arc<dyn ToastSubscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subscribers = self.write_registry();
        subscribers.push((id, subscriber));
        tracing::debug!(subscribers = subscribers.len(), "Toast subscriber registered");
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.write_registry();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!(subscribers = subscribers.len(), "Toast subscriber removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.read_registry().len()
    }

    /// Emit one toast to every subscriber.
    ///
    /// `None` means `info`.
    pub fn notify(&self, message: impl Into<String>, severity: Option<Severity>) {
        let severity = severity.unwrap_or_default();
        let event = ToastEvent::new(Toast::new(message, severity));

        // Snapshot so subscribers may (un)subscribe while being invoked
        let subscribers: Vec<Arc<dyn ToastSubscriber>> = self
            .read_registry()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();

        self.stats.total_emitted.fetch_add(1, Ordering::Relaxed);
        ToastMetrics::record_emitted(severity);

        if subscribers.is_empty() {
            self.stats.total_dropped.fetch_add(1, Ordering::Relaxed);
            ToastMetrics::record_dropped();
            tracing::trace!(severity = %severity, "No toast subscribers, event dropped");
            return;
        }

        for subscriber in &subscribers {
            subscriber.on_toast(&event);
        }

        self.stats
            .total_delivered
            .fetch_add(subscribers.len() as u64, Ordering::Relaxed);

        tracing::debug!(
            severity = %severity,
            subscribers = subscribers.len(),
            "Toast emitted"
        );
    }

    /// Emit a toast whose severity arrives as an untyped literal.
    ///
    /// Fails with `InvalidSeverity` and emits nothing if `severity` is not
    /// one of `success`, `error`, `info`, `warning`.
    pub fn notify_str(&self, message: impl Into<String>, severity: &str) -> Result<()> {
        let severity = severity.parse::<Severity>().inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected toast with unknown severity");
        })?;
        self.notify(message, Some(severity));
        Ok(())
    }

    pub fn stats(&self) -> NotifierStatsSnapshot {
        self.stats.snapshot()
    }

    fn read_registry(&self) -> std::sync::RwLockReadGuard<'_, Registry> {
        self.subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_registry(&self) -> std::sync::RwLockWriteGuard<'_, Registry> {
        self.subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotifyError;
    use crate::notification::RecordingSubscriber;

    fn recorded() -> (Notifier, Arc<RecordingSubscriber>) {
        let notifier = Notifier::new();
        let recorder = Arc::new(RecordingSubscriber::new());
        notifier.subscribe_arc(recorder.clone());
        (notifier, recorder)
    }

    #[test]
    fn test_notify_defaults_to_info() {
        let (notifier, recorder) = recorded();

        notifier.notify("hello", None);

        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "showToast");
        assert_eq!(events[0].message(), "hello");
        assert_eq!(events[0].severity(), Severity::Info);
    }

    #[test]
    fn test_explicit_severity_overrides_default() {
        let (notifier, recorder) = recorded();

        notifier.notify("careful", None);
        notifier.notify("done", Some(Severity::Success));

        let severities: Vec<_> = recorder.take().iter().map(|e| e.severity()).collect();
        assert_eq!(severities, vec![Severity::Info, Severity::Success]);
    }

    #[test]
    fn test_empty_message_is_emitted() {
        let (notifier, recorder) = recorded();
        notifier.notify("", Some(Severity::Error));
        assert_eq!(recorder.take()[0].message(), "");
    }

    #[test]
    fn test_no_subscribers_is_dropped() {
        let notifier = Notifier::new();
        notifier.notify("into the void", Some(Severity::Success));

        let stats = notifier.stats();
        assert_eq!(stats.total_emitted, 1);
        assert_eq!(stats.total_dropped, 1);
        assert_eq!(stats.total_delivered, 0);
    }

    #[test]
    fn test_every_subscriber_in_registration_order() {
        let notifier = Notifier::new();
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            notifier.subscribe(move |_: &ToastEvent| order.lock().unwrap().push(tag));
        }

        notifier.notify("x", None);

        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
        assert_eq!(notifier.stats().total_delivered, 3);
    }

    #[test]
    fn test_unsubscribe() {
        let notifier = Notifier::new();
        let recorder = Arc::new(RecordingSubscriber::new());
        let id = notifier.subscribe_arc(recorder.clone());

        notifier.notify("seen", None);
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify("not seen", None);

        assert_eq!(notifier.subscriber_count(), 0);
        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "seen");
    }

    #[test]
    fn test_subscriber_may_subscribe_reentrantly() {
        let notifier = Arc::new(Notifier::new());
        let inner = notifier.clone();
        notifier.subscribe(move |_: &ToastEvent| {
            inner.subscribe(|_: &ToastEvent| {});
        });

        notifier.notify("grow", None);

        assert_eq!(notifier.subscriber_count(), 2);
    }

    #[test]
    fn test_notify_str_validates_severity() {
        let (notifier, recorder) = recorded();

        notifier.notify_str("ok", "warning").unwrap();
        let err = notifier.notify_str("bad", "fatal").unwrap_err();

        assert!(matches!(err, NotifyError::InvalidSeverity(ref s) if s == "fatal"));
        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Warning);
    }
}
