use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// Name of the platform event carrying a toast
pub const TOAST_EVENT_NAME: &str = "showToast";

/// Visual treatment and urgency of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    /// Used when no severity is given
    #[default]
    Info,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Info,
        Severity::Warning,
    ];

    /// Wire literal understood by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| NotifyError::InvalidSeverity(s.to_string()))
    }
}

/// A single toast: message text plus severity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    /// Listeners read this as `detail.type`
    #[serde(rename = "type", alias = "severity")]
    pub severity: Severity,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Event handed to every subscriber on `notify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastEvent {
    pub name: String,
    pub detail: Toast,
}

impl ToastEvent {
    pub fn new(detail: Toast) -> Self {
        Self {
            name: TOAST_EVENT_NAME.to_string(),
            detail,
        }
    }

    pub fn message(&self) -> &str {
        &self.detail.message
    }

    pub fn severity(&self) -> Severity {
        self.detail.severity
    }

    /// Serialize to the JSON shape listeners expect
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("success".parse::<Severity>().unwrap(), Severity::Success);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);

        let err = "Success".parse::<Severity>().unwrap_err();
        assert!(matches!(err, NotifyError::InvalidSeverity(ref s) if s == "Success"));
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_event_wire_format() {
        let event = ToastEvent::new(Toast::new("Payment failed: card declined", Severity::Error));
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "showToast",
                "detail": {
                    "message": "Payment failed: card declined",
                    "type": "error"
                }
            })
        );
    }

    #[test]
    fn test_toast_accepts_severity_field_name() {
        let toast: Toast =
            serde_json::from_value(json!({"message": "hi", "severity": "warning"})).unwrap();
        assert_eq!(toast.severity, Severity::Warning);

        let bad = serde_json::from_value::<Toast>(json!({"message": "hi", "type": "fatal"}));
        assert!(bad.is_err());
    }
}
