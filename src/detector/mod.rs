//! PII detection
//!
//! Scans a column name and its sample values against the pattern library,
//! producing deduplicated [`PiiFinding`]s. Detection is a pure function of
//! its inputs and the read-only registry: same input, same output, no side
//! effects, and no match is never an error.

use crate::dictionary::PatternRegistry;
use crate::domain::{MatchKind, PiiCategory, PiiFinding};
use std::collections::HashMap;
use std::sync::Arc;

/// Pattern-driven PII detector
///
/// Thread-safe: holds only an `Arc` to the immutable registry and can be
/// cloned freely across tasks.
#[derive(Clone, Debug)]
pub struct PiiDetector {
    registry: Arc<PatternRegistry>,
}

impl PiiDetector {
    /// Create a detector over a pattern registry
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Detect PII on a column
    ///
    /// Name patterns run against the normalized column name; value patterns
    /// run against each sample value independently. Findings are
    /// deduplicated by category, keeping the highest confidence, and
    /// returned in category order for reproducibility.
    pub fn detect(&self, column_name: &str, sample_values: &[String]) -> Vec<PiiFinding> {
        let normalized = normalize_name(column_name);
        let mut best: HashMap<PiiCategory, PiiFinding> = HashMap::new();

        for pattern in self.registry.name_patterns() {
            if pattern.regex.is_match(&normalized) {
                consider(
                    &mut best,
                    PiiFinding::new(
                        pattern.category,
                        column_name,
                        pattern.confidence,
                        MatchKind::Name,
                    ),
                );
            }
        }

        for value in sample_values {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            for pattern in self.registry.value_patterns() {
                if pattern.regex.is_match(trimmed) {
                    consider(
                        &mut best,
                        PiiFinding::new(
                            pattern.category,
                            trimmed,
                            pattern.confidence,
                            MatchKind::Value,
                        ),
                    );
                }
            }
        }

        let mut findings: Vec<PiiFinding> = best.into_values().collect();
        findings.sort_by_key(|f| f.category);
        findings
    }
}

/// Keep the higher-confidence finding per category
fn consider(best: &mut HashMap<PiiCategory, PiiFinding>, candidate: PiiFinding) {
    match best.get(&candidate.category) {
        Some(existing) if existing.confidence >= candidate.confidence => {}
        _ => {
            best.insert(candidate.category, candidate);
        }
    }
}

/// Lowercase a column name and strip separators
///
/// `Acct_Open-Dt` and `acctOpenDt` both normalize to `acctopendt`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
