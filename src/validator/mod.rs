//! Validation of generated payloads
//!
//! A pure scoring pass: no generation, no side effects. Calling
//! [`validate`] twice with the same payload and thresholds returns an
//! identical verdict.

use crate::domain::{
    ColumnResult, GeneratedPayload, PiiCategory, RiskLevel, ValidationVerdict,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller-supplied validation thresholds
///
/// Defaults: a column passes at confidence >= 0.75; a single PII finding at
/// confidence >= 0.9, or more than 2 findings overall, escalates the table
/// to high risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValidationThresholds {
    /// Columns below this confidence fail
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// A finding at or above this confidence makes the table high risk
    #[serde(default = "default_high_risk_pii_confidence")]
    pub high_risk_pii_confidence: f32,

    /// More than this many findings overall makes the table high risk
    #[serde(default = "default_high_risk_pii_count")]
    pub high_risk_pii_count: usize,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            high_risk_pii_confidence: default_high_risk_pii_confidence(),
            high_risk_pii_count: default_high_risk_pii_count(),
        }
    }
}

impl ValidationThresholds {
    /// Validates threshold ranges
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(format!(
                "validation.min_confidence must be within [0.0, 1.0], got {}",
                self.min_confidence
            ));
        }
        if !(0.0..=1.0).contains(&self.high_risk_pii_confidence) {
            return Err(format!(
                "validation.high_risk_pii_confidence must be within [0.0, 1.0], got {}",
                self.high_risk_pii_confidence
            ));
        }
        Ok(())
    }
}

fn default_min_confidence() -> f32 {
    0.75
}

fn default_high_risk_pii_confidence() -> f32 {
    0.9
}

fn default_high_risk_pii_count() -> usize {
    2
}

/// Score a generated payload against thresholds
///
/// Each column passes or fails on its confidence alone; the PII summary and
/// risk level are computed independently across all columns. `passed` is
/// true iff no column failed and the overall risk is not high.
pub fn validate(
    table_name: &str,
    payload: &GeneratedPayload,
    thresholds: &ValidationThresholds,
) -> ValidationVerdict {
    let mut column_results = Vec::with_capacity(payload.columns.len());
    let mut pii_summary: BTreeMap<PiiCategory, usize> = BTreeMap::new();
    let mut max_pii_confidence: f32 = 0.0;
    let mut total_findings = 0usize;

    for column in &payload.columns {
        if column.confidence < thresholds.min_confidence {
            column_results.push(ColumnResult::fail(
                &column.column_name,
                format!(
                    "confidence {:.2} below threshold {:.2}",
                    column.confidence, thresholds.min_confidence
                ),
            ));
        } else {
            column_results.push(ColumnResult::pass(&column.column_name));
        }

        for finding in &column.pii_findings {
            *pii_summary.entry(finding.category).or_insert(0) += 1;
            total_findings += 1;
            max_pii_confidence = max_pii_confidence.max(finding.confidence);
        }
    }

    let overall_risk = if total_findings == 0 {
        RiskLevel::Low
    } else if max_pii_confidence >= thresholds.high_risk_pii_confidence
        || total_findings > thresholds.high_risk_pii_count
    {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    };

    let failed = column_results.iter().filter(|r| !r.is_pass()).count();
    let passed = failed == 0 && overall_risk != RiskLevel::High;

    let summary = format!(
        "{}/{} columns passed, {} PII finding{} across {} categor{}, {} risk",
        column_results.len() - failed,
        column_results.len(),
        total_findings,
        if total_findings == 1 { "" } else { "s" },
        pii_summary.len(),
        if pii_summary.len() == 1 { "y" } else { "ies" },
        overall_risk,
    );

    ValidationVerdict {
        table_name: table_name.to_string(),
        overall_risk,
        column_results,
        pii_summary,
        passed,
        summary,
    }
}
