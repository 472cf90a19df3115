//! CSV export of journal actions

use std::io::Write;

use crate::backend::ActionRecord;
use crate::error::{WizardError, WizardResult};

const HEADER: [&str; 10] = [
    "ID",
    "Timestamp",
    "Action",
    "Amount",
    "Currency",
    "Actor",
    "Participants",
    "Report",
    "Comment",
    "Status",
];

/// Write one row per action. Participants are joined with `;`.
pub fn export_actions_csv<W: Write>(records: &[ActionRecord], writer: W) -> WizardResult<()> {
    let mut out = ::csv::Writer::from_writer(writer);
    out.write_record(HEADER).map_err(export_err)?;

    for record in records {
        let report = record
            .report_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        out.write_record([
            record.id.to_string(),
            record.timestamp.to_rfc3339(),
            record.kind.to_string(),
            record.amount.to_string(),
            record.currency.clone(),
            record.actor.clone(),
            record.participants.join(";"),
            report,
            record.comment.clone(),
            record.status.to_string(),
        ])
        .map_err(export_err)?;
    }

    out.flush()
        .map_err(|e| WizardError::Export(e.to_string()))?;
    Ok(())
}

fn export_err(e: ::csv::Error) -> WizardError {
    WizardError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ReportId};
    use crate::wizard::ActionKind;

    #[test]
    fn test_export_actions_csv() {
        let records = vec![
            ActionRecord::new(
                ActionKind::SplitBill,
                Money::from_minor(3000),
                "USD",
                "me@example.com",
                vec!["a@example.com".into(), "b@example.com".into()],
            )
            .with_comment("dinner, drinks")
            .with_report(Some(ReportId::new(998877))),
        ];

        let mut output = Vec::new();
        export_actions_csv(&records, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("ID,Timestamp,Action,Amount"));
        assert!(text.contains("split_bill,30.00,USD"));
        assert!(text.contains("a@example.com;b@example.com,998877"));
        assert!(text.contains("\"dinner, drinks\""));
        assert!(text.contains("pending"));
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let mut output = Vec::new();
        export_actions_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
