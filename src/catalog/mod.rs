//! Message catalog: domain-specific toasts with fixed severities.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use toast_notifications::catalog::Notifications;
//! use toast_notifications::config::CurrencyConfig;
//! use toast_notifications::notification::{Notifier, RecordingSubscriber, Severity};
//!
//! let notifier = Arc::new(Notifier::new());
//! let recorder = Arc::new(RecordingSubscriber::new());
//! notifier.subscribe_arc(recorder.clone());
//!
//! let notifications = Notifications::new(notifier, CurrencyConfig::default());
//! notifications.payment().success(50);
//! notifications.application().rejected("income too low");
//! notifications.general().warning("Session expires soon");
//!
//! let events = recorder.take();
//! assert_eq!(events[0].message(), "Payment of ₵50 processed successfully!");
//! assert_eq!(events[1].severity(), Severity::Error);
//! assert_eq!(events[2].message(), "Session expires soon");
//! ```

mod entry;

use std::fmt::Display;
use std::sync::Arc;

use crate::config::{CurrencyConfig, Settings};
use crate::notification::Notifier;

pub use entry::CatalogEntry;

/// Catalog of toasts, grouped by domain, emitting through one notifier
#[derive(Debug, Clone)]
pub struct Notifications {
    notifier: Arc<Notifier>,
    currency: CurrencyConfig,
}

impl Notifications {
    pub fn new(notifier: Arc<Notifier>, currency: CurrencyConfig) -> Self {
        Self { notifier, currency }
    }

    pub fn from_settings(notifier: Arc<Notifier>, settings: &Settings) -> Self {
        Self::new(notifier, settings.currency.clone())
    }

    pub fn notifier(&self) -> &Arc<Notifier> {
        &self.notifier
    }

    pub fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    pub fn payment(&self) -> PaymentNotifications<'_> {
        PaymentNotifications { catalog: self }
    }

    pub fn account(&self) -> AccountNotifications<'_> {
        AccountNotifications { catalog: self }
    }

    pub fn application(&self) -> ApplicationNotifications<'_> {
        ApplicationNotifications { catalog: self }
    }

    pub fn general(&self) -> GeneralNotifications<'_> {
        GeneralNotifications { catalog: self }
    }

    /// Render `entry` and emit it with the entry's fixed severity
    pub fn emit(&self, entry: CatalogEntry, arg: Option<&dyn Display>) {
        let message = entry.render(&self.currency, arg);
        tracing::trace!(
            domain = entry.domain(),
            entry = entry.name(),
            "Emitting catalog toast"
        );
        self.notifier.notify(message, Some(entry.severity()));
    }
}

pub struct PaymentNotifications<'a> {
    catalog: &'a Notifications,
}

impl PaymentNotifications<'_> {
    pub fn success(&self, amount: impl Display) {
        self.catalog
            .emit(CatalogEntry::PaymentSuccess, Some(&amount as &dyn Display));
    }

    pub fn failed(&self, reason: impl Display) {
        self.catalog
            .emit(CatalogEntry::PaymentFailed, Some(&reason as &dyn Display));
    }

    pub fn pending(&self) {
        self.catalog.emit(CatalogEntry::PaymentPending, None);
    }
}

pub struct AccountNotifications<'a> {
    catalog: &'a Notifications,
}

impl AccountNotifications<'_> {
    pub fn created(&self) {
        self.catalog.emit(CatalogEntry::AccountCreated, None);
    }

    pub fn updated(&self) {
        self.catalog.emit(CatalogEntry::AccountUpdated, None);
    }

    pub fn plan_completed(&self, product: impl Display) {
        self.catalog.emit(
            CatalogEntry::AccountPlanCompleted,
            Some(&product as &dyn Display),
        );
    }
}

pub struct ApplicationNotifications<'a> {
    catalog: &'a Notifications,
}

impl ApplicationNotifications<'_> {
    pub fn submitted(&self) {
        self.catalog.emit(CatalogEntry::ApplicationSubmitted, None);
    }

    pub fn approved(&self) {
        self.catalog.emit(CatalogEntry::ApplicationApproved, None);
    }

    pub fn rejected(&self, reason: impl Display) {
        self.catalog.emit(
            CatalogEntry::ApplicationRejected,
            Some(&reason as &dyn Display),
        );
    }

    pub fn pending(&self) {
        self.catalog.emit(CatalogEntry::ApplicationPending, None);
    }
}

/// Pass-through messages; the method name is the severity
pub struct GeneralNotifications<'a> {
    catalog: &'a Notifications,
}

impl GeneralNotifications<'_> {
    pub fn success(&self, message: impl Display) {
        self.catalog
            .emit(CatalogEntry::GeneralSuccess, Some(&message as &dyn Display));
    }

    pub fn error(&self, message: impl Display) {
        self.catalog
            .emit(CatalogEntry::GeneralError, Some(&message as &dyn Display));
    }

    pub fn info(&self, message: impl Display) {
        self.catalog
            .emit(CatalogEntry::GeneralInfo, Some(&message as &dyn Display));
    }

    pub fn warning(&self, message: impl Display) {
        self.catalog
            .emit(CatalogEntry::GeneralWarning, Some(&message as &dyn Display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{RecordingSubscriber, Severity};

    fn catalog() -> (Notifications, Arc<RecordingSubscriber>) {
        let notifier = Arc::new(Notifier::new());
        let recorder = Arc::new(RecordingSubscriber::new());
        notifier.subscribe_arc(recorder.clone());
        (
            Notifications::new(notifier, CurrencyConfig::default()),
            recorder,
        )
    }

    #[test]
    fn test_payment_failed() {
        let (notifications, recorder) = catalog();

        notifications.payment().failed("card declined");

        let events = recorder.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "Payment failed: card declined");
        assert_eq!(events[0].severity(), Severity::Error);
    }

    #[test]
    fn test_payment_success_amount_verbatim() {
        let (notifications, recorder) = catalog();

        notifications.payment().success(50);
        notifications.payment().success(12.5);

        let messages: Vec<_> = recorder
            .take()
            .into_iter()
            .map(|e| e.detail.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Payment of ₵50 processed successfully!",
                "Payment of ₵12.5 processed successfully!",
            ]
        );
    }

    #[test]
    fn test_from_settings_uses_configured_currency() {
        let mut settings = Settings::default();
        settings.currency.symbol = "GH₵".to_string();

        let notifier = Arc::new(Notifier::new());
        let recorder = Arc::new(RecordingSubscriber::new());
        notifier.subscribe_arc(recorder.clone());
        let notifications = Notifications::from_settings(notifier, &settings);

        notifications.payment().success(100);

        assert_eq!(
            recorder.take()[0].message(),
            "Payment of GH₵100 processed successfully!"
        );
    }

    #[test]
    fn test_from_settings_keeps_info_default() {
        // A stale `notifier` section in config files must not change severity
        let settings: Settings = ::config::Config::builder()
            .set_override("notifier.default_severity", "warning")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let notifier = Arc::new(Notifier::new());
        let recorder = Arc::new(RecordingSubscriber::new());
        notifier.subscribe_arc(recorder.clone());
        let notifications = Notifications::from_settings(notifier, &settings);

        notifications.notifier().notify("x", None);

        assert_eq!(recorder.take()[0].severity(), Severity::Info);
    }

    #[test]
    fn test_general_pass_through() {
        let (notifications, recorder) = catalog();

        notifications.general().success("X");
        notifications.general().error("X");
        notifications.general().info("X");
        notifications.general().warning("X");

        let events = recorder.take();
        let severities: Vec<_> = events.iter().map(|e| e.severity()).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert!(events.iter().all(|e| e.message() == "X"));
    }
}
