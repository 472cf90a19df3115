//! JSON export of the journal with schema versioning

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::{ActionRecord, ActionStatus};
use crate::error::{WizardError, WizardResult};
use crate::models::Money;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full journal export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub actions: Vec<ActionRecord>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub action_count: usize,
    pub failed_count: usize,

    /// Sum of completed amounts per currency code
    pub completed_totals: BTreeMap<String, Money>,

    pub earliest_action: Option<DateTime<Utc>>,
    pub latest_action: Option<DateTime<Utc>>,
}

impl JournalExport {
    pub fn from_records(records: &[ActionRecord]) -> Self {
        let mut completed_totals: BTreeMap<String, Money> = BTreeMap::new();
        for record in records
            .iter()
            .filter(|r| r.status == ActionStatus::Completed)
        {
            let total = completed_totals.entry(record.currency.clone()).or_default();
            *total = *total + record.amount;
        }

        let metadata = ExportMetadata {
            action_count: records.len(),
            failed_count: records
                .iter()
                .filter(|r| r.status == ActionStatus::Failed)
                .count(),
            completed_totals,
            earliest_action: records.iter().map(|r| r.timestamp).min(),
            latest_action: records.iter().map(|r| r.timestamp).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            actions: records.to_vec(),
            metadata,
        }
    }
}

/// Write the journal as pretty-printed JSON
pub fn export_actions_json<W: Write>(records: &[ActionRecord], writer: W) -> WizardResult<()> {
    let export = JournalExport::from_records(records);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| WizardError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::ActionKind;

    fn record(currency: &str, minor: i64, status: ActionStatus) -> ActionRecord {
        let mut r = ActionRecord::new(
            ActionKind::RequestMoney,
            Money::from_minor(minor),
            currency,
            "me@example.com",
            vec!["jane@example.com".into()],
        );
        r.status = status;
        r
    }

    #[test]
    fn test_metadata_totals() {
        let export = JournalExport::from_records(&[
            record("USD", 1000, ActionStatus::Completed),
            record("USD", 250, ActionStatus::Completed),
            record("EUR", 500, ActionStatus::Failed),
            record("EUR", 700, ActionStatus::Completed),
        ]);

        assert_eq!(export.metadata.action_count, 4);
        assert_eq!(export.metadata.failed_count, 1);
        assert_eq!(export.metadata.completed_totals["USD"].minor(), 1250);
        assert_eq!(export.metadata.completed_totals["EUR"].minor(), 700);
        assert!(export.metadata.earliest_action.is_some());
    }

    #[test]
    fn test_json_export_parses_back() {
        let mut output = Vec::new();
        export_actions_json(&[record("USD", 1235, ActionStatus::Pending)], &mut output).unwrap();

        let parsed: JournalExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.actions.len(), 1);
        assert_eq!(parsed.actions[0].amount.minor(), 1235);
    }

    #[test]
    fn test_empty_export() {
        let export = JournalExport::from_records(&[]);
        assert_eq!(export.metadata.action_count, 0);
        assert!(export.metadata.latest_action.is_none());
        assert!(export.metadata.completed_totals.is_empty());
    }
}
