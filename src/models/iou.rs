//! IOU draft and flow types
//!
//! `IouDraft`, `NetworkStatus` and `CurrentUser` are owned by the host store;
//! the wizard only reads snapshots of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WizardError;

/// Which flow the wizard was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IouType {
    #[default]
    Request,
    Send,
    Split,
}

impl fmt::Display for IouType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IouType::Request => write!(f, "request"),
            IouType::Send => write!(f, "send"),
            IouType::Split => write!(f, "split"),
        }
    }
}

impl FromStr for IouType {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "request" => Ok(IouType::Request),
            "send" => Ok(IouType::Send),
            "split" => Ok(IouType::Split),
            other => Err(WizardError::Validation(format!(
                "Invalid request type: '{}'. Valid types: request, send, split",
                other
            ))),
        }
    }
}

/// Payment rail used by the send-money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Settled outside the app (cash, check, another service)
    Elsewhere,
    /// Redirect to the recipient's PayPal.me address
    PayPalMe,
    /// In-app wallet transfer
    Wallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Elsewhere,
        PaymentMethod::PayPalMe,
        PaymentMethod::Wallet,
    ];

    /// Parse the wire name of a payment type.
    ///
    /// Returns `None` for anything unrecognised; callers treat that as
    /// "dispatch nothing".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "elsewhere" | "cash" => Some(PaymentMethod::Elsewhere),
            "paypal.me" | "paypal" | "paypalme" => Some(PaymentMethod::PayPalMe),
            "expensify" | "wallet" => Some(PaymentMethod::Wallet),
            _ => None,
        }
    }

    /// Wire name used by the action layer
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Elsewhere => "Elsewhere",
            PaymentMethod::PayPalMe => "PayPal.me",
            PaymentMethod::Wallet => "Expensify",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shared in-progress request record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IouDraft {
    /// A create/send action is in flight
    #[serde(default)]
    pub creating_in_flight: bool,

    /// The last action failed
    #[serde(default)]
    pub error: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_currency_code: Option<String>,

    #[serde(default)]
    pub comment: String,
}

impl IouDraft {
    /// Comment as submitted: surrounding whitespace removed
    pub fn trimmed_comment(&self) -> &str {
        self.comment.trim()
    }

    /// Selected currency, or the given default when none is set
    pub fn currency_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.selected_currency_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(default)
    }
}

/// Connectivity as seen by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    #[serde(default)]
    pub is_offline: bool,
}

impl NetworkStatus {
    pub const fn online() -> Self {
        Self { is_offline: false }
    }

    pub const fn offline() -> Self {
        Self { is_offline: true }
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub login: String,
    pub local_currency_code: String,
    pub preferred_locale: String,
}

impl CurrentUser {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            local_currency_code: "USD".to_string(),
            preferred_locale: "en".to_string(),
        }
    }

    pub fn with_currency(mut self, currency_code: impl Into<String>) -> Self {
        self.local_currency_code = currency_code.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.preferred_locale = locale.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iou_type_parse() {
        assert_eq!("Split".parse::<IouType>().unwrap(), IouType::Split);
        assert!("loan".parse::<IouType>().unwrap_err().is_validation());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("PayPal.me"), Some(PaymentMethod::PayPalMe));
        assert_eq!(PaymentMethod::parse("Expensify"), Some(PaymentMethod::Wallet));
        assert_eq!(PaymentMethod::parse("elsewhere"), Some(PaymentMethod::Elsewhere));
        assert_eq!(PaymentMethod::parse("venmo"), None);
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::parse(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_draft_helpers() {
        let draft = IouDraft {
            comment: "  dinner  ".into(),
            selected_currency_code: Some(String::new()),
            ..IouDraft::default()
        };
        assert_eq!(draft.trimmed_comment(), "dinner");
        assert_eq!(draft.currency_or("EUR"), "EUR");
    }
}
