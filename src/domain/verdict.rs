//! Validation verdict types

use crate::domain::pii::PiiCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate PII exposure classification for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No PII findings
    Low,
    /// Some PII findings, below the high-risk thresholds
    Medium,
    /// High-confidence PII or too many findings overall
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Per-column validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnStatus {
    Pass,
    Fail,
}

/// Validation result for a single column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Column the result belongs to
    pub column_name: String,
    /// Pass or fail against the confidence threshold
    pub status: ColumnStatus,
    /// Human-readable reason, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ColumnResult {
    /// A passing result
    pub fn pass(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            status: ColumnStatus::Pass,
            reason: None,
        }
    }

    /// A failing result with a reason
    pub fn fail(column_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            status: ColumnStatus::Fail,
            reason: Some(reason.into()),
        }
    }

    /// Check whether the column passed
    pub fn is_pass(&self) -> bool {
        self.status == ColumnStatus::Pass
    }
}

/// Verdict produced by the validator for one generated payload
///
/// `pii_summary` uses a `BTreeMap` so repeated validation of the same
/// payload serializes identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Table the payload was generated for
    pub table_name: String,
    /// Aggregate PII risk classification
    pub overall_risk: RiskLevel,
    /// Per-column results, in payload order
    pub column_results: Vec<ColumnResult>,
    /// Count of PII findings per category across all columns
    pub pii_summary: BTreeMap<PiiCategory, usize>,
    /// Overall pass/fail given the thresholds
    pub passed: bool,
    /// Human-readable one-line summary of the verdict
    pub summary: String,
}

impl ValidationVerdict {
    /// Columns that failed the confidence threshold
    pub fn failed_columns(&self) -> impl Iterator<Item = &ColumnResult> {
        self.column_results.iter().filter(|r| !r.is_pass())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn test_risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, r#""medium""#);
    }

    #[test]
    fn test_column_result_constructors() {
        let pass = ColumnResult::pass("bal");
        assert!(pass.is_pass());
        assert!(pass.reason.is_none());

        let fail = ColumnResult::fail("zzqq1", "confidence 0.35 below threshold 0.75");
        assert!(!fail.is_pass());
        assert!(fail.reason.unwrap().contains("below threshold"));
    }
}
