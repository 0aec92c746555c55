//! Generated description payloads
//!
//! A [`GeneratedPayload`] is produced once per generation call and is
//! immutable afterwards; the validator and the review store both consume it
//! without modifying it.

use crate::domain::pii::PiiFinding;
use serde::{Deserialize, Serialize};

/// Model version tag for the deterministic rule path
pub const RULES_MODEL_VERSION: &str = "rules-v1";

/// Generated description for a single column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedColumn {
    /// Column the description belongs to
    pub column_name: String,
    /// Business-facing description text
    pub description: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// PII findings detected on this column; empty = not sensitive
    #[serde(default)]
    pub pii_findings: Vec<PiiFinding>,
    /// Whether a human reviewer must inspect this column
    pub needs_review: bool,
}

impl GeneratedColumn {
    /// Check if any PII was detected
    pub fn has_pii(&self) -> bool {
        !self.pii_findings.is_empty()
    }
}

/// Generated descriptions for a whole table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPayload {
    /// Business-facing description of the table itself
    pub table_description: String,
    /// Per-column descriptions, in input order
    pub columns: Vec<GeneratedColumn>,
    /// Which generation path produced this payload
    /// (`rules-v1` or a remote model identifier)
    pub model_version: String,
    /// Logical OR of all column-level `needs_review` flags
    pub needs_review: bool,
}

impl GeneratedPayload {
    /// Assemble a payload, deriving the aggregate `needs_review` flag from
    /// the columns
    pub fn new(
        table_description: impl Into<String>,
        columns: Vec<GeneratedColumn>,
        model_version: impl Into<String>,
    ) -> Self {
        let needs_review = columns.iter().any(|c| c.needs_review);
        Self {
            table_description: table_description.into(),
            columns,
            model_version: model_version.into(),
            needs_review,
        }
    }

    /// Total PII findings across all columns
    pub fn total_pii_findings(&self) -> usize {
        self.columns.iter().map(|c| c.pii_findings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pii::{MatchKind, PiiCategory, PiiFinding};

    fn column(name: &str, needs_review: bool) -> GeneratedColumn {
        GeneratedColumn {
            column_name: name.to_string(),
            description: format!("{name} description"),
            confidence: 0.8,
            pii_findings: Vec::new(),
            needs_review,
        }
    }

    #[test]
    fn test_needs_review_is_or_of_columns() {
        let payload = GeneratedPayload::new(
            "table",
            vec![column("a", false), column("b", true)],
            RULES_MODEL_VERSION,
        );
        assert!(payload.needs_review);

        let payload = GeneratedPayload::new(
            "table",
            vec![column("a", false), column("b", false)],
            RULES_MODEL_VERSION,
        );
        assert!(!payload.needs_review);
    }

    #[test]
    fn test_total_pii_findings() {
        let mut flagged = column("ssn", true);
        flagged.pii_findings.push(PiiFinding::new(
            PiiCategory::SsnLike,
            "123-45-6789",
            0.95,
            MatchKind::Value,
        ));
        let payload =
            GeneratedPayload::new("table", vec![flagged, column("bal", false)], RULES_MODEL_VERSION);
        assert_eq!(payload.total_pii_findings(), 1);
    }
}
