//! Subscriber seam between the notifier and whatever renders toasts.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::broadcast;

use super::ToastEvent;

/// Receives every event emitted by a `Notifier` it is registered with.
///
/// Called synchronously on the notifying thread, so implementations should
/// return promptly and must not panic.
pub trait ToastSubscriber: Send + Sync {
    fn on_toast(&self, event: &ToastEvent);
}

impl<F> ToastSubscriber for F
where
    F: Fn(&ToastEvent) + Send + Sync,
{
    fn on_toast(&self, event: &ToastEvent) {
        self(event)
    }
}

/// Forwards events into a tokio broadcast channel for async consumers
/// (e.g. a WebSocket or SSE session rendering toasts).
#[derive(Debug, Clone)]
pub struct BroadcastSubscriber {
    sender: broadcast::Sender<ToastEvent>,
}

impl BroadcastSubscriber {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn from_sender(sender: broadcast::Sender<ToastEvent>) -> Self {
        Self { sender }
    }

    pub fn receiver(&self) -> broadcast::Receiver<ToastEvent> {
        self.sender.subscribe()
    }
}

impl ToastSubscriber for BroadcastSubscriber {
    fn on_toast(&self, event: &ToastEvent) {
        // No receivers is not an error; the toast is simply not shown
        if self.sender.send(event.clone()).is_err() {
            tracing::trace!("Broadcast subscriber has no receivers, toast dropped");
        }
    }
}

/// Default number of events kept by `RecordingSubscriber`
const DEFAULT_RECORDING_CAPACITY: usize = 256;

/// Keeps the most recent events in memory, oldest evicted first.
#[derive(Debug)]
pub struct RecordingSubscriber {
    capacity: usize,
    events: Mutex<VecDeque<ToastEvent>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_RECORDING_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Copy of the recorded events, in emission order
    pub fn events(&self) -> Vec<ToastEvent> {
        self.lock().iter().cloned().collect()
    }

    /// Drain the recorded events, in emission order
    pub fn take(&self) -> Vec<ToastEvent> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<ToastEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RecordingSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSubscriber for RecordingSubscriber {
    fn on_toast(&self, event: &ToastEvent) {
        let mut events = self.lock();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event.clone());
    }
}
