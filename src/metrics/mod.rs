//! Prometheus metrics for toast dispatch.

mod helpers;

pub use helpers::{encode_metrics, ToastMetrics};

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "toast";

lazy_static! {
    /// Total toasts emitted by severity
    pub static ref NOTIFICATIONS_EMITTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_notifications_emitted_total", METRIC_PREFIX),
        "Total toast notifications emitted",
        &["severity"]
    ).unwrap();

    /// Toasts emitted while no subscriber was registered
    pub static ref NOTIFICATIONS_DROPPED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_notifications_dropped_total", METRIC_PREFIX),
        "Total toast notifications emitted with no subscriber"
    ).unwrap();
}
