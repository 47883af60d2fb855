use std::fmt::Display;

use crate::config::CurrencyConfig;
use crate::notification::Severity;

/// A named message template bound to a fixed severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogEntry {
    PaymentSuccess,
    PaymentFailed,
    PaymentPending,
    AccountCreated,
    AccountUpdated,
    AccountPlanCompleted,
    ApplicationSubmitted,
    ApplicationApproved,
    ApplicationRejected,
    ApplicationPending,
    GeneralSuccess,
    GeneralError,
    GeneralInfo,
    GeneralWarning,
}

impl CatalogEntry {
    pub const ALL: [CatalogEntry; 14] = [
        CatalogEntry::PaymentSuccess,
        CatalogEntry::PaymentFailed,
        CatalogEntry::PaymentPending,
        CatalogEntry::AccountCreated,
        CatalogEntry::AccountUpdated,
        CatalogEntry::AccountPlanCompleted,
        CatalogEntry::ApplicationSubmitted,
        CatalogEntry::ApplicationApproved,
        CatalogEntry::ApplicationRejected,
        CatalogEntry::ApplicationPending,
        CatalogEntry::GeneralSuccess,
        CatalogEntry::GeneralError,
        CatalogEntry::GeneralInfo,
        CatalogEntry::GeneralWarning,
    ];

    pub fn domain(&self) -> &'static str {
        match self {
            CatalogEntry::PaymentSuccess
            | CatalogEntry::PaymentFailed
            | CatalogEntry::PaymentPending => "payment",
            CatalogEntry::AccountCreated
            | CatalogEntry::AccountUpdated
            | CatalogEntry::AccountPlanCompleted => "account",
            CatalogEntry::ApplicationSubmitted
            | CatalogEntry::ApplicationApproved
            | CatalogEntry::ApplicationRejected
            | CatalogEntry::ApplicationPending => "application",
            CatalogEntry::GeneralSuccess
            | CatalogEntry::GeneralError
            | CatalogEntry::GeneralInfo
            | CatalogEntry::GeneralWarning => "general",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogEntry::PaymentSuccess | CatalogEntry::GeneralSuccess => "success",
            CatalogEntry::PaymentFailed => "failed",
            CatalogEntry::PaymentPending | CatalogEntry::ApplicationPending => "pending",
            CatalogEntry::AccountCreated => "created",
            CatalogEntry::AccountUpdated => "updated",
            CatalogEntry::AccountPlanCompleted => "plan_completed",
            CatalogEntry::ApplicationSubmitted => "submitted",
            CatalogEntry::ApplicationApproved => "approved",
            CatalogEntry::ApplicationRejected => "rejected",
            CatalogEntry::GeneralError => "error",
            CatalogEntry::GeneralInfo => "info",
            CatalogEntry::GeneralWarning => "warning",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CatalogEntry::PaymentSuccess
            | CatalogEntry::AccountCreated
            | CatalogEntry::AccountUpdated
            | CatalogEntry::AccountPlanCompleted
            | CatalogEntry::ApplicationSubmitted
            | CatalogEntry::ApplicationApproved
            | CatalogEntry::GeneralSuccess => Severity::Success,
            CatalogEntry::PaymentFailed
            | CatalogEntry::ApplicationRejected
            | CatalogEntry::GeneralError => Severity::Error,
            CatalogEntry::PaymentPending
            | CatalogEntry::ApplicationPending
            | CatalogEntry::GeneralInfo => Severity::Info,
            CatalogEntry::GeneralWarning => Severity::Warning,
        }
    }

    /// Whether the template interpolates an argument
    pub fn takes_argument(&self) -> bool {
        matches!(
            self,
            CatalogEntry::PaymentSuccess
                | CatalogEntry::PaymentFailed
                | CatalogEntry::AccountPlanCompleted
                | CatalogEntry::ApplicationRejected
                | CatalogEntry::GeneralSuccess
                | CatalogEntry::GeneralError
                | CatalogEntry::GeneralInfo
                | CatalogEntry::GeneralWarning
        )
    }

    /// Build the message text without emitting anything.
    ///
    /// `arg` is substituted verbatim; a missing argument renders as empty.
    /// Entries without a placeholder ignore it.
    pub fn render(&self, currency: &CurrencyConfig, arg: Option<&dyn Display>) -> String {
        let arg = arg.map(|value| value.to_string()).unwrap_or_default();

        match self {
            CatalogEntry::PaymentSuccess => format!(
                "Payment of {}{} processed successfully!",
                currency.symbol, arg
            ),
            CatalogEntry::PaymentFailed => format!("Payment failed: {}", arg),
            CatalogEntry::PaymentPending => "Your payment is being processed...".to_string(),
            CatalogEntry::AccountCreated => {
                "Your account has been created successfully!".to_string()
            }
            CatalogEntry::AccountUpdated => {
                "Your account has been updated successfully!".to_string()
            }
            CatalogEntry::AccountPlanCompleted => format!(
                "Congratulations! You've completed your payment plan for the {}!",
                arg
            ),
            CatalogEntry::ApplicationSubmitted => {
                "Your application has been submitted successfully!".to_string()
            }
            CatalogEntry::ApplicationApproved => {
                "Your credit application has been approved!".to_string()
            }
            CatalogEntry::ApplicationRejected => {
                format!("Your application was not approved: {}", arg)
            }
            CatalogEntry::ApplicationPending => "Your application is being reviewed...".to_string(),
            CatalogEntry::GeneralSuccess
            | CatalogEntry::GeneralError
            | CatalogEntry::GeneralInfo
            | CatalogEntry::GeneralWarning => arg,
        }
    }
}
