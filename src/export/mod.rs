//! Journal export
//!
//! Writes the action journal in three formats:
//! - CSV: one row per action (spreadsheet-compatible)
//! - JSON: versioned document with metadata
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_actions_csv;
pub use json::{export_actions_json, ExportMetadata, JournalExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_actions_yaml;
