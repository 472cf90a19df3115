//! Action journal
//!
//! Every action the local backend receives becomes an [`ActionRecord`]. The
//! journal file is line-delimited JSON, one record per line, appended and
//! flushed per write.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WizardError, WizardResult};
use crate::models::{Money, ReportId};
use crate::wizard::ActionKind;

/// Settlement state of a recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionStatus::Pending => write!(f, "pending"),
            ActionStatus::Completed => write!(f, "completed"),
            ActionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One dispatched action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: Uuid,

    /// When the action was received (UTC)
    pub timestamp: DateTime<Utc>,

    pub kind: ActionKind,
    pub amount: Money,
    pub currency: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    /// Login of the user who dispatched the action
    pub actor: String,

    /// Logins on the other side of the action
    pub participants: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<ReportId>,

    pub status: ActionStatus,
}

impl ActionRecord {
    pub fn new(
        kind: ActionKind,
        amount: Money,
        currency: impl Into<String>,
        actor: impl Into<String>,
        participants: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            amount,
            currency: currency.into(),
            comment: String::new(),
            actor: actor.into(),
            participants,
            report_id: None,
            status: ActionStatus::Pending,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_report(mut self, report_id: Option<ReportId>) -> Self {
        self.report_id = report_id;
        self
    }

    /// Short id shown in listings
    pub fn short_id(&self) -> String {
        format!("act-{}", &self.id.to_string()[..8])
    }
}

/// Append-only JSONL file of [`ActionRecord`]s
pub struct ActionJournal {
    path: PathBuf,
}

impl ActionJournal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn open_for_append(&self) -> WizardResult<File> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WizardError::Io(format!("Failed to create journal directory: {}", e)))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| WizardError::Io(format!("Failed to open journal: {}", e)))
    }

    /// Append one record and flush
    pub fn append(&self, record: &ActionRecord) -> WizardResult<()> {
        self.append_batch(std::slice::from_ref(record))
    }

    /// Append several records, flushing once at the end
    pub fn append_batch(&self, records: &[ActionRecord]) -> WizardResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;
        for record in records {
            let json = serde_json::to_string(record)
                .map_err(|e| WizardError::Json(format!("Failed to serialize action: {}", e)))?;
            writeln!(file, "{}", json)
                .map_err(|e| WizardError::Io(format!("Failed to write action: {}", e)))?;
        }
        file.flush()
            .map_err(|e| WizardError::Io(format!("Failed to flush journal: {}", e)))?;

        tracing::debug!(count = records.len(), path = %self.path.display(), "journal appended");
        Ok(())
    }

    /// Read all records, oldest first
    pub fn read_all(&self) -> WizardResult<Vec<ActionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| WizardError::Io(format!("Failed to open journal: {}", e)))?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                WizardError::Io(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: ActionRecord = serde_json::from_str(&line).map_err(|e| {
                WizardError::Json(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// The most recent `count` records, oldest first
    pub fn read_recent(&self, count: usize) -> WizardResult<Vec<ActionRecord>> {
        let all = self.read_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all[start..].to_vec())
    }

    /// Find a record by full id, short id (`act-xxxxxxxx`) or id prefix
    pub fn find(&self, id: &str) -> WizardResult<ActionRecord> {
        let needle = id.trim().trim_start_matches("act-").to_lowercase();
        if needle.is_empty() {
            return Err(WizardError::Validation("Action id must not be empty".into()));
        }

        let mut matches = self
            .read_all()?
            .into_iter()
            .filter(|r| r.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (Some(_), Some(_)) => Err(WizardError::Validation(format!(
                "Action id '{}' is ambiguous",
                id
            ))),
            (None, _) => Err(WizardError::action_not_found(id)),
        }
    }

    /// Remove the journal file
    pub fn clear(&self) -> WizardResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .map_err(|e| WizardError::Io(format!("Failed to remove journal: {}", e)))?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(kind: ActionKind, minor: i64) -> ActionRecord {
        ActionRecord::new(
            kind,
            Money::from_minor(minor),
            "USD",
            "me@example.com",
            vec!["jane@example.com".into()],
        )
    }

    #[test]
    fn test_append_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let journal = ActionJournal::new(temp_dir.path().join("data").join("actions.jsonl"));

        journal.append(&record(ActionKind::RequestMoney, 1235)).unwrap();
        journal
            .append(&record(ActionKind::SplitBill, 3000).with_report(Some(ReportId::new(9))))
            .unwrap();

        let records = journal.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, ActionKind::RequestMoney);
        assert_eq!(records[0].amount.minor(), 1235);
        assert_eq!(records[1].report_id, Some(ReportId::new(9)));
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let journal = ActionJournal::new(temp_dir.path().join("actions.jsonl"));
        assert!(journal.read_all().unwrap().is_empty());
        assert!(!journal.exists());
    }

    #[test]
    fn test_read_recent_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let journal = ActionJournal::new(temp_dir.path().join("actions.jsonl"));
        let batch: Vec<_> = (1..=5)
            .map(|i| record(ActionKind::SendMoneyElsewhere, i * 100))
            .collect();
        journal.append_batch(&batch).unwrap();

        let recent = journal.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].amount.minor(), 500);

        journal.clear().unwrap();
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_reports_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("actions.jsonl");
        std::fs::write(&path, "\n{oops\n").unwrap();

        let err = ActionJournal::new(path).read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_find_by_short_id() {
        let temp_dir = TempDir::new().unwrap();
        let journal = ActionJournal::new(temp_dir.path().join("actions.jsonl"));
        let first = record(ActionKind::RequestMoney, 100);
        journal.append(&first).unwrap();
        journal.append(&record(ActionKind::SplitBill, 200)).unwrap();

        let found = journal.find(&first.short_id()).unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(journal.find(&first.id.to_string()).unwrap().id, first.id);

        let err = journal.find("act-zzzzzzzz").unwrap_err();
        assert!(err.is_not_found());
        assert!(journal.find("  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_short_id() {
        let r = record(ActionKind::RequestMoney, 1);
        assert!(r.short_id().starts_with("act-"));
        assert_eq!(r.short_id().len(), 12);
    }
}
