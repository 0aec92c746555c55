//! Append-only review and dictionary stores
//!
//! Reviewer decisions go to one JSONL log; approved/edited descriptions go
//! to a second. Appends are serialized through `&mut self` plus
//! `OpenOptions::append`, and the core never rewrites either log.

use crate::config::StoreConfig;
use crate::domain::{
    DatalexError, DictionaryEntry, EntrySource, GeneratedColumn, Result, ReviewAction,
    ReviewRecord, ReviewSubmission, ReviewSummary,
};
use chrono::Utc;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSONL-backed review decision store
pub struct ReviewStore {
    reviews_path: PathBuf,
    dictionary_path: PathBuf,
}

impl ReviewStore {
    /// Create a store over the configured paths
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            reviews_path: config.reviews_path.clone(),
            dictionary_path: config.dictionary_path.clone(),
        }
    }

    /// Persist a review submission
    ///
    /// Appends one review record, then one dictionary entry per
    /// approved/edited decision. Rejected decisions, and decisions whose
    /// column is missing from `generated_columns`, produce no dictionary
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`DatalexError::InputValidation`] for a blank table name,
    /// reviewer, or empty decision list; [`DatalexError::Store`] on write
    /// failure.
    pub fn save(&mut self, submission: &ReviewSubmission) -> Result<ReviewSummary> {
        if submission.table_name.trim().is_empty() {
            return Err(DatalexError::InputValidation(
                "table_name must not be empty".to_string(),
            ));
        }
        if submission.reviewer.trim().is_empty() {
            return Err(DatalexError::InputValidation(
                "reviewer must not be empty".to_string(),
            ));
        }
        if submission.decisions.is_empty() {
            return Err(DatalexError::InputValidation(
                "at least one decision is required".to_string(),
            ));
        }

        let record = ReviewRecord {
            timestamp: Utc::now(),
            table_name: submission.table_name.clone(),
            reviewer: submission.reviewer.clone(),
            decisions: submission.decisions.clone(),
        };
        append_line(&self.reviews_path, &record)?;

        let entries = dictionary_entries(submission);
        for entry in &entries {
            append_line(&self.dictionary_path, entry)?;
        }

        let summary = ReviewSummary::from_decisions(&submission.decisions);
        tracing::info!(
            table_name = %submission.table_name,
            approved = summary.approved,
            edited = summary.edited,
            rejected = summary.rejected,
            "Review saved"
        );
        Ok(summary)
    }

    /// Read every review record
    pub fn read_reviews(&self) -> Result<Vec<ReviewRecord>> {
        read_lines(&self.reviews_path)
    }

    /// Read every dictionary entry
    pub fn read_dictionary(&self) -> Result<Vec<DictionaryEntry>> {
        read_lines(&self.dictionary_path)
    }

    /// Export the approved dictionary as CSV
    ///
    /// Returns the number of exported entries.
    pub fn export_dictionary_csv<W: std::io::Write>(&self, writer: W) -> Result<usize> {
        let entries = self.read_dictionary()?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "timestamp",
            "table_name",
            "column_name",
            "description",
            "confidence",
            "pii_categories",
            "source",
        ])?;

        for entry in &entries {
            let categories: Vec<&str> =
                entry.pii_categories.iter().map(|c| c.label()).collect();
            csv_writer.write_record([
                entry.timestamp.to_rfc3339().as_str(),
                entry.table_name.as_str(),
                entry.column_name.as_str(),
                entry.description.as_str(),
                format!("{:.2}", entry.confidence).as_str(),
                categories.join("; ").as_str(),
                match entry.source {
                    EntrySource::Approved => "approved",
                    EntrySource::Edited => "edited",
                },
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| DatalexError::Store(format!("Failed to flush CSV export: {e}")))?;
        Ok(entries.len())
    }
}

/// Materialize dictionary entries from a submission
fn dictionary_entries(submission: &ReviewSubmission) -> Vec<DictionaryEntry> {
    let generated: HashMap<&str, &GeneratedColumn> = submission
        .generated_columns
        .iter()
        .map(|c| (c.column_name.as_str(), c))
        .collect();

    let now = Utc::now();
    let mut entries = Vec::new();

    for decision in &submission.decisions {
        if decision.action == ReviewAction::Rejected {
            continue;
        }
        let Some(column) = generated.get(decision.column_name.as_str()) else {
            continue;
        };

        let (description, source) = match (&decision.action, &decision.edited_description) {
            (ReviewAction::Edited, Some(edited)) if !edited.trim().is_empty() => {
                (edited.trim().to_string(), EntrySource::Edited)
            }
            _ => (column.description.clone(), EntrySource::Approved),
        };

        entries.push(DictionaryEntry {
            timestamp: now,
            table_name: submission.table_name.clone(),
            column_name: decision.column_name.clone(),
            description,
            confidence: column.confidence,
            pii_categories: column.pii_findings.iter().map(|f| f.category).collect(),
            source,
        });
    }

    entries
}

/// Append one serialized record to a JSONL log
fn append_line<T: serde::Serialize>(path: &Path, record: &T) -> Result<()> {
    let line = serde_json::to_string(record)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| DatalexError::Store(format!("Failed to open {}: {e}", path.display())))?;
    writeln!(file, "{line}")
        .map_err(|e| DatalexError::Store(format!("Failed to append to {}: {e}", path.display())))?;
    Ok(())
}

/// Read every record from a JSONL log; a missing file is an empty log
fn read_lines<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| DatalexError::Store(format!("Failed to read {}: {e}", path.display())))?;

    let mut records = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str(line).map_err(|e| {
            DatalexError::Store(format!("Corrupt record in {}: {e}", path.display()))
        })?);
    }
    Ok(records)
}
