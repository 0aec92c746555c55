//! PII pattern library
//!
//! Patterns are defined in TOML, compiled once at load, and never mutated
//! afterward. Each pattern carries a fixed confidence and a kind: name
//! patterns run against the normalized column name, value patterns against
//! individual sample values.

use crate::domain::{DatalexError, MatchKind, PiiCategory, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this entry
    pub patterns: Vec<String>,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// PII category label
    pub category: String,
    /// "name" or "value"
    pub kind: String,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
    /// Confidence score
    pub confidence: f32,
    /// Match surface (column name or sample value)
    pub kind: MatchKind,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// PII pattern registry
///
/// Ordered pattern list; ordering is deterministic (sorted by definition
/// name) so detection output is reproducible across runs.
#[derive(Debug)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DatalexError::Dictionary(format!(
                "Failed to read pattern library {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| DatalexError::Dictionary(format!("Failed to parse pattern library: {e}")))?;

        // Sort by definition name for a stable pattern order
        let mut definitions: Vec<(String, PatternDefinition)> =
            library.patterns.into_iter().collect();
        definitions.sort_by(|a, b| a.0.cmp(&b.0));

        let mut patterns = Vec::new();
        for (name, def) in definitions {
            let category = Self::parse_category(&def.category).map_err(|e| {
                DatalexError::Dictionary(format!("Invalid category in pattern '{name}': {e}"))
            })?;
            let kind = Self::parse_kind(&def.kind).map_err(|e| {
                DatalexError::Dictionary(format!("Invalid kind in pattern '{name}': {e}"))
            })?;
            if !(0.0..=1.0).contains(&def.confidence) {
                return Err(DatalexError::Dictionary(format!(
                    "Confidence out of range in pattern '{name}': {}",
                    def.confidence
                )));
            }

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str).map_err(|e| {
                    DatalexError::Dictionary(format!(
                        "Invalid regex in pattern '{name}': {pattern_str}: {e}"
                    ))
                })?;

                patterns.push(CompiledPattern {
                    regex,
                    category,
                    confidence: def.confidence,
                    kind,
                });
            }
        }

        if patterns.is_empty() {
            return Err(DatalexError::Dictionary(
                "Pattern library contains no patterns".to_string(),
            ));
        }

        Ok(Self { patterns })
    }

    /// Create the built-in pattern registry
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// All patterns, in stable order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Patterns matched against the normalized column name
    pub fn name_patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter().filter(|p| p.kind == MatchKind::Name)
    }

    /// Patterns matched against sample values
    pub fn value_patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter().filter(|p| p.kind == MatchKind::Value)
    }

    /// Parse category string to PiiCategory enum
    fn parse_category(s: &str) -> std::result::Result<PiiCategory, String> {
        match s.to_lowercase().as_str() {
            "name" => Ok(PiiCategory::Name),
            "account_number" => Ok(PiiCategory::AccountNumber),
            "ssn_like" => Ok(PiiCategory::SsnLike),
            "contact" => Ok(PiiCategory::Contact),
            "date_of_birth" => Ok(PiiCategory::DateOfBirth),
            "financial_amount" => Ok(PiiCategory::FinancialAmount),
            _ => Err(format!("Unknown PII category: {s}")),
        }
    }

    /// Parse kind string to MatchKind
    fn parse_kind(s: &str) -> std::result::Result<MatchKind, String> {
        match s.to_lowercase().as_str() {
            "name" => Ok(MatchKind::Name),
            "value" => Ok(MatchKind::Value),
            _ => Err(format!("Unknown pattern kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_patterns() {
        let registry = PatternRegistry::builtin().unwrap();
        assert!(!registry.all_patterns().is_empty());
        assert!(registry.name_patterns().count() > 0);
        assert!(registry.value_patterns().count() > 0);
    }

    #[test]
    fn test_ssn_value_pattern() {
        let registry = PatternRegistry::builtin().unwrap();
        let matched = registry
            .value_patterns()
            .filter(|p| p.category == PiiCategory::SsnLike)
            .any(|p| p.regex.is_match("123-45-6789"));
        assert!(matched);
    }

    #[test]
    fn test_date_sample_matches_no_value_pattern() {
        // A bare date-shaped value must not be treated as PII
        let registry = PatternRegistry::builtin().unwrap();
        let matched = registry
            .value_patterns()
            .any(|p| p.regex.is_match("2023-06-01"));
        assert!(!matched);
    }

    #[test]
    fn test_email_value_pattern() {
        let registry = PatternRegistry::builtin().unwrap();
        let matched = registry
            .value_patterns()
            .filter(|p| p.category == PiiCategory::Contact)
            .any(|p| p.regex.is_match("masked@example.com"));
        assert!(matched);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let toml = r#"
            [patterns.bad]
            category = "blood_type"
            kind = "name"
            confidence = 0.5
            patterns = ["blood"]
        "#;
        let err = PatternRegistry::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Unknown PII category"));
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let toml = r#"
            [patterns.bad]
            category = "contact"
            kind = "name"
            confidence = 1.5
            patterns = ["email"]
        "#;
        let err = PatternRegistry::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("Confidence out of range"));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
            [patterns.bad]
            category = "contact"
            kind = "name"
            confidence = 0.5
            patterns = ["("]
        "#;
        assert!(PatternRegistry::from_toml(toml).is_err());
    }
}
