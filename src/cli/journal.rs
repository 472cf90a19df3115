//! CLI commands for the action journal

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::backend::{ActionJournal, ActionRecord};
use crate::config::WizardPaths;
use crate::error::{WizardError, WizardResult};
use crate::export::{export_actions_csv, export_actions_json, export_actions_yaml};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per action
    Csv,
    /// Versioned document with metadata
    Json,
    /// Same document as JSON, human-readable
    Yaml,
}

/// Journal subcommands
#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// List recorded actions
    List {
        /// Number of most recent actions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show one action in full
    Show {
        /// Action id, short id (act-xxxxxxxx) or id prefix
        id: String,
    },

    /// Export the journal
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all recorded actions
    Clear,
}

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "With")]
    participants: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&ActionRecord> for ActionRow {
    fn from(record: &ActionRecord) -> Self {
        Self {
            id: record.short_id(),
            when: record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            action: record.kind.to_string(),
            amount: record.amount.format_for_currency(&record.currency),
            participants: record.participants.join(", "),
            status: record.status.to_string(),
        }
    }
}

/// Render records as a table
pub fn format_action_table(records: &[ActionRecord]) -> String {
    if records.is_empty() {
        return "No actions recorded.\n".to_string();
    }
    let rows: Vec<ActionRow> = records.iter().map(ActionRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}

/// Render one record as labelled lines
pub fn format_action_details(record: &ActionRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("Action:       {}\n", record.id));
    output.push_str(&format!("Kind:         {}\n", record.kind));
    output.push_str(&format!("When:         {}\n", record.timestamp.to_rfc3339()));
    output.push_str(&format!(
        "Amount:       {}\n",
        record.amount.format_for_currency(&record.currency)
    ));
    output.push_str(&format!("From:         {}\n", record.actor));
    output.push_str(&format!("With:         {}\n", record.participants.join(", ")));
    if let Some(report_id) = record.report_id {
        output.push_str(&format!("Report:       {}\n", report_id));
    }
    if !record.comment.is_empty() {
        output.push_str(&format!("Comment:      {}\n", record.comment));
    }
    output.push_str(&format!("Status:       {}\n", record.status));
    output
}

/// Handle a journal command
pub fn handle_journal_command(paths: &WizardPaths, cmd: JournalCommands) -> WizardResult<()> {
    let journal = ActionJournal::new(paths.journal_file());

    match cmd {
        JournalCommands::List { limit } => {
            let records = journal.read_recent(limit)?;
            print!("{}", format_action_table(&records));
        }

        JournalCommands::Show { id } => {
            let record = journal.find(&id)?;
            print!("{}", format_action_details(&record));
        }

        JournalCommands::Export { format, output } => {
            let records = journal.read_all()?;
            match &output {
                Some(path) => {
                    let file = File::create(path).map_err(|e| {
                        WizardError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    write_export(&records, format, BufWriter::new(file))?;
                    println!("Exported {} actions to: {}", records.len(), path.display());
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    write_export(&records, format, &mut handle)?;
                    writeln!(handle).map_err(|e| WizardError::Export(e.to_string()))?;
                }
            }
        }

        JournalCommands::Clear => {
            let count = journal.read_all()?.len();
            journal.clear()?;
            println!("Cleared {} actions.", count);
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    records: &[ActionRecord],
    format: ExportFormat,
    writer: W,
) -> WizardResult<()> {
    match format {
        ExportFormat::Csv => export_actions_csv(records, writer),
        ExportFormat::Json => export_actions_json(records, writer),
        ExportFormat::Yaml => export_actions_yaml(records, writer),
    }
}
