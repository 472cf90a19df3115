//! YAML export of the journal

use std::io::Write;

use crate::backend::ActionRecord;
use crate::error::{WizardError, WizardResult};
use crate::export::json::JournalExport;

/// Write the journal as YAML with a short comment header
pub fn export_actions_yaml<W: Write>(records: &[ActionRecord], mut writer: W) -> WizardResult<()> {
    let export = JournalExport::from_records(records);

    let header = format!(
        "# iou-wizard action journal\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| WizardError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| WizardError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::wizard::ActionKind;

    #[test]
    fn test_yaml_export() {
        let records = vec![ActionRecord::new(
            ActionKind::SendMoneyViaPaypal,
            Money::from_minor(1235),
            "USD",
            "me@example.com",
            vec!["jane@example.com".into()],
        )];

        let mut output = Vec::new();
        export_actions_yaml(&records, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# iou-wizard action journal"));
        assert!(text.contains("send_money_via_paypal"));
        assert!(text.contains("schema_version"));

        let body: String = text.lines().skip(4).collect::<Vec<_>>().join("\n");
        let parsed: JournalExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.actions[0].amount.minor(), 1235);
    }
}
