//! Report context the wizard is mounted against

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric report identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(u64);

impl ReportId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Parse a report id taken from a route.
    ///
    /// Only non-empty all-digit strings naming a non-zero id are valid;
    /// "", "0", "null" and anything with a sign or whitespace are not.
    pub fn from_route(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The report the wizard was opened from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<ReportId>,

    /// Logins of the report's participants, in report order
    #[serde(default)]
    pub participant_logins: Vec<String>,
}

impl Report {
    pub fn new(report_id: Option<ReportId>, participant_logins: Vec<String>) -> Self {
        Self {
            report_id,
            participant_logins,
        }
    }

    /// A report with no known participants, as when opened from global create
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn participant_count(&self) -> usize {
        self.participant_logins.len()
    }
}

/// Parameters carried by the route that opened the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Raw report id segment, unvalidated
    pub report_id: Option<String>,
}

impl RouteParams {
    pub fn with_report_id(report_id: impl Into<String>) -> Self {
        Self {
            report_id: Some(report_id.into()),
        }
    }

    /// The route's report id, if it names a valid report
    pub fn valid_report_id(&self) -> Option<ReportId> {
        self.report_id.as_deref().and_then(ReportId::from_route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_report_id_validation() {
        assert_eq!(ReportId::from_route("998877"), Some(ReportId::new(998877)));
        assert_eq!(ReportId::from_route(""), None);
        assert_eq!(ReportId::from_route("0"), None);
        assert_eq!(ReportId::from_route("null"), None);
        assert_eq!(ReportId::from_route("-12"), None);
        assert_eq!(ReportId::from_route(" 12"), None);
        assert_eq!(ReportId::from_route("12a"), None);
    }

    #[test]
    fn test_route_params() {
        assert_eq!(
            RouteParams::with_report_id("42").valid_report_id(),
            Some(ReportId::new(42))
        );
        assert_eq!(RouteParams::default().valid_report_id(), None);
    }
}
