//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use crate::notification::Severity;

use super::{NOTIFICATIONS_DROPPED_TOTAL, NOTIFICATIONS_EMITTED_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording toast metrics
pub struct ToastMetrics;

impl ToastMetrics {
    pub fn record_emitted(severity: Severity) {
        NOTIFICATIONS_EMITTED_TOTAL
            .with_label_values(&[severity.as_str()])
            .inc();
    }

    pub fn record_dropped() {
        NOTIFICATIONS_DROPPED_TOTAL.inc();
    }
}
