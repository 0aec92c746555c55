//! Reviewer decision and dictionary entry records
//!
//! These are the records the review store appends to its JSONL logs. The
//! core produces and reads them; it defines no storage engine beyond the
//! append-only log interface.

use crate::domain::payload::GeneratedColumn;
use crate::domain::pii::PiiCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reviewer verdict on a single generated column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    /// Accept the generated description as-is
    Approved,
    /// Accept with a replacement description
    Edited,
    /// Discard the generated description
    Rejected,
}

/// A single reviewer decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDecision {
    /// Column the decision applies to
    pub column_name: String,
    /// The reviewer's verdict
    pub action: ReviewAction,
    /// Replacement text, only meaningful for [`ReviewAction::Edited`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_description: Option<String>,
}

/// A batch of reviewer decisions for one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Table the decisions apply to
    pub table_name: String,
    /// Reviewer identity (e.g. email)
    pub reviewer: String,
    /// One decision per reviewed column
    pub decisions: Vec<ReviewDecision>,
    /// The generated columns the decisions refer to; used to materialize
    /// dictionary entries for approved/edited columns
    #[serde(default)]
    pub generated_columns: Vec<GeneratedColumn>,
}

/// Review record as appended to the review log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub timestamp: DateTime<Utc>,
    pub table_name: String,
    pub reviewer: String,
    pub decisions: Vec<ReviewDecision>,
}

/// Provenance of a dictionary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySource {
    Approved,
    Edited,
}

/// Approved or edited entry as appended to the dictionary log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub timestamp: DateTime<Utc>,
    pub table_name: String,
    pub column_name: String,
    pub description: String,
    pub confidence: f32,
    /// Categories of PII detected on the column at generation time
    #[serde(default)]
    pub pii_categories: Vec<PiiCategory>,
    pub source: EntrySource,
}

/// Counts returned after a review submission is persisted
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub approved: usize,
    pub edited: usize,
    pub rejected: usize,
}

impl ReviewSummary {
    /// Tally decisions by action
    pub fn from_decisions(decisions: &[ReviewDecision]) -> Self {
        let mut summary = Self::default();
        for decision in decisions {
            match decision.action {
                ReviewAction::Approved => summary.approved += 1,
                ReviewAction::Edited => summary.edited += 1,
                ReviewAction::Rejected => summary.rejected += 1,
            }
        }
        summary
    }
}
