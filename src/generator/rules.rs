//! Rule-based description generation
//!
//! The deterministic path: a pure function of the input metadata and the
//! read-only dictionary. Identical input always produces an identical
//! payload, which keeps regression tests reproducible. Malformed metadata
//! degrades confidence and description quality rather than failing; only a
//! blank `column_name`/`table_name` is a hard input-validation error.

use crate::config::GenerationConfig;
use crate::detector::PiiDetector;
use crate::dictionary::Dictionary;
use crate::domain::{
    ColumnMetadata, GeneratedColumn, GeneratedPayload, MatchKind, PiiFinding, Result,
    TableContext, RULES_MODEL_VERSION,
};
use crate::generator::tokens::{capitalize, resolve_identifier, ResolvedName};
use std::sync::Arc;

/// Deterministic dictionary/template-driven generator
///
/// Thread-safe: all state is read-only after construction.
#[derive(Debug)]
pub struct RuleBasedGenerator {
    dictionary: Arc<Dictionary>,
    detector: PiiDetector,
    config: GenerationConfig,
}

impl RuleBasedGenerator {
    /// Create a generator over a loaded dictionary
    pub fn new(dictionary: Arc<Dictionary>, config: GenerationConfig) -> Self {
        let detector = PiiDetector::new(dictionary.patterns_arc());
        Self {
            dictionary,
            detector,
            config,
        }
    }

    /// Generate a description for a single column
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DatalexError::InputValidation`] only for a
    /// blank `column_name`.
    pub fn generate_column(
        &self,
        table_name: &str,
        column: &ColumnMetadata,
    ) -> Result<GeneratedColumn> {
        column.validate()?;

        let resolved = resolve_identifier(&column.column_name, self.dictionary.terms());
        let findings = self.detector.detect(&column.column_name, &column.sample_values);
        let description = self.compose_description(table_name, column, &resolved, &findings);
        let confidence = self.score_confidence(column, &resolved, &findings);
        let needs_review = confidence < self.config.review_threshold
            || findings
                .iter()
                .any(|f| f.confidence > self.config.sensitivity_threshold);

        Ok(GeneratedColumn {
            column_name: column.column_name.clone(),
            description,
            confidence,
            pii_findings: findings,
            needs_review,
        })
    }

    /// Generate descriptions for a whole table
    pub fn generate_table(&self, ctx: &TableContext) -> Result<GeneratedPayload> {
        ctx.validate()?;

        let table_description = self.describe_table(ctx);
        let columns = ctx
            .columns
            .iter()
            .map(|c| self.generate_column(&ctx.table_name, c))
            .collect::<Result<Vec<_>>>()?;

        Ok(GeneratedPayload::new(
            table_description,
            columns,
            RULES_MODEL_VERSION,
        ))
    }

    /// Short description for a bare (table, column) pair, used by the CSV
    /// batch flow
    pub fn describe_row(&self, table_name: &str, column_name: &str) -> String {
        let resolved = resolve_identifier(column_name, self.dictionary.terms());
        format!("{} in `{}`.", capitalize(&resolved.phrase), table_name)
    }

    /// Table description from name and optional free-text context,
    /// independent of per-column results
    fn describe_table(&self, ctx: &TableContext) -> String {
        let resolved = resolve_identifier(&ctx.table_name, self.dictionary.terms());
        let mut description = format!(
            "Stores {} attributes for banking operations.",
            resolved.phrase
        );
        if let Some(context) = ctx.table_context.as_deref() {
            let context = context.trim();
            if !context.is_empty() {
                description.push_str(&format!(" Context: {context}."));
            }
        }
        description
    }

    /// Build a GeneratedColumn around remotely produced description text
    ///
    /// Detection and scoring stay local so sensitivity never depends on an
    /// external service. The sensitivity note is appended here as well,
    /// since the remote text cannot be trusted to carry it.
    pub fn with_remote_description(
        &self,
        table_name: &str,
        column: &ColumnMetadata,
        description: String,
    ) -> Result<GeneratedColumn> {
        column.validate()?;

        let resolved = resolve_identifier(&column.column_name, self.dictionary.terms());
        let findings = self.detector.detect(&column.column_name, &column.sample_values);
        let confidence = self.score_confidence(column, &resolved, &findings);
        let needs_review = confidence < self.config.review_threshold
            || findings
                .iter()
                .any(|f| f.confidence > self.config.sensitivity_threshold);

        let mut description = description.trim().to_string();
        if description.is_empty() {
            description = self.compose_description(table_name, column, &resolved, &findings);
        } else if !findings.is_empty() {
            description.push_str(&sensitivity_note(&findings));
        }

        Ok(GeneratedColumn {
            column_name: column.column_name.clone(),
            description,
            confidence,
            pii_findings: findings,
            needs_review,
        })
    }

    /// Compose the description template
    fn compose_description(
        &self,
        table_name: &str,
        column: &ColumnMetadata,
        resolved: &ResolvedName,
        findings: &[PiiFinding],
    ) -> String {
        let requirement = if column.nullable { "optional" } else { "required" };
        let mut description = format!("{} in `{}`.", capitalize(&resolved.phrase), table_name);

        let data_type = column.data_type.trim();
        if data_type.is_empty() {
            description.push_str(&format!(" {} field.", capitalize(requirement)));
        } else {
            description.push_str(&format!(" Stored as {data_type}; {requirement}."));
        }

        if !column.constraints.is_empty() {
            let qualifiers: Vec<String> = column
                .constraints
                .iter()
                .map(|c| constraint_qualifier(c))
                .collect();
            description.push_str(&format!(" {}.", capitalize(&qualifiers.join("; "))));
        }

        if !column.sample_values.is_empty() {
            let examples: Vec<&str> = column
                .sample_values
                .iter()
                .take(self.config.max_sample_values)
                .map(String::as_str)
                .collect();
            description.push_str(&format!(" Example values: {}.", examples.join(", ")));
        }

        if !findings.is_empty() {
            description.push_str(&sensitivity_note(findings));
        }

        description
    }

    /// Coverage-based confidence with metadata bonuses and PII penalties
    fn score_confidence(
        &self,
        column: &ColumnMetadata,
        resolved: &ResolvedName,
        findings: &[PiiFinding],
    ) -> f32 {
        let mut confidence =
            self.config.base_confidence + self.config.coverage_weight * resolved.coverage();

        if !column.data_type.trim().is_empty() {
            confidence += self.config.metadata_bonus;
        }
        if !column.constraints.is_empty() {
            confidence += self.config.metadata_bonus;
        }
        // Samples that matched a value-shaped PII pattern earn no bonus;
        // otherwise a sensitive sample could raise confidence
        let sensitive_samples = findings.iter().any(|f| f.match_kind == MatchKind::Value);
        if !column.sample_values.is_empty() && !sensitive_samples {
            confidence += self.config.metadata_bonus;
        }

        confidence -= self.config.pii_penalty * findings.len() as f32;

        confidence.clamp(self.config.confidence_floor, 0.99)
    }
}

/// Sensitivity note appended to descriptions of flagged columns
fn sensitivity_note(findings: &[PiiFinding]) -> String {
    let categories: Vec<&str> = findings.iter().map(|f| f.category.label()).collect();
    format!(
        " May contain sensitive data ({}); handle under data protection controls.",
        categories.join(", ")
    )
}

/// Render a declared constraint as a business qualifier
fn constraint_qualifier(constraint: &str) -> String {
    match constraint.trim().to_lowercase().as_str() {
        "not_null" | "not null" => "must always be present".to_string(),
        "unique" => "must be unique".to_string(),
        "primary_key" | "primary key" => "uniquely identifies each row".to_string(),
        "foreign_key" | "foreign key" => "references another table".to_string(),
        other => format!("constraint: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PiiCategory;

    fn generator() -> RuleBasedGenerator {
        RuleBasedGenerator::new(
            Arc::new(Dictionary::builtin().unwrap()),
            GenerationConfig::default(),
        )
    }

    fn acct_open_dt() -> ColumnMetadata {
        ColumnMetadata::new("acct_open_dt")
            .with_data_type("date")
            .with_nullable(false)
            .with_constraint("not_null")
            .with_sample_values(["2023-06-01"])
    }

    #[test]
    fn test_account_open_date_scenario() {
        let generated = generator()
            .generate_column("customer_account", &acct_open_dt())
            .unwrap();

        assert!(generated.description.contains("account")
            || generated.description.contains("Account"));
        assert!(generated.description.contains("open date"));
        assert!(!generated.needs_review);
        assert!(generated.pii_findings.is_empty());
        assert!(generated.confidence >= 0.75);
    }

    #[test]
    fn test_unresolvable_column_degrades_gracefully() {
        let column = ColumnMetadata::new("zzqq1");
        let generated = generator().generate_column("mystery", &column).unwrap();

        assert!(!generated.description.is_empty());
        assert!(generated.confidence > 0.0);
        assert!(generated.confidence < 0.75);
        assert!(generated.needs_review);
    }

    #[test]
    fn test_ssn_column_is_flagged_and_penalized() {
        let column = ColumnMetadata::new("ssn").with_sample_values(["123-45-6789"]);
        let generated = generator().generate_column("customers", &column).unwrap();

        assert_eq!(generated.pii_findings.len(), 1);
        assert_eq!(generated.pii_findings[0].category, PiiCategory::SsnLike);
        assert!(generated.pii_findings[0].confidence >= 0.9);
        assert!(generated.needs_review);
        assert!(generated.description.contains("sensitive"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = generator();
        let ctx = TableContext::new("customer_account")
            .with_context("Retail banking account master")
            .with_column(acct_open_dt())
            .with_column(ColumnMetadata::new("customer_email").with_sample_values(["masked@example.com"]));

        let first = generator.generate_table(&ctx).unwrap();
        let second = generator.generate_table(&ctx).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_confidence_bounds_hold() {
        let generator = generator();
        let columns = [
            ColumnMetadata::new("zzqq1"),
            ColumnMetadata::new("ssn")
                .with_sample_values(["123-45-6789", "987-65-4321"]),
            acct_open_dt(),
            ColumnMetadata::new("acct_bal_amt")
                .with_data_type("decimal(18,2)")
                .with_constraint("not_null")
                .with_sample_values(["1023.50"]),
        ];

        for column in &columns {
            let generated = generator.generate_column("t", column).unwrap();
            assert!((0.0..=1.0).contains(&generated.confidence));
        }
    }

    #[test]
    fn test_pii_sample_never_increases_confidence() {
        let generator = generator();
        let clean = ColumnMetadata::new("contact_phone").with_data_type("varchar(20)");
        let with_pii = clean.clone().with_sample_values(["(555) 123-4567"]);

        let clean_gen = generator.generate_column("t", &clean).unwrap();
        let pii_gen = generator.generate_column("t", &with_pii).unwrap();

        assert!(pii_gen.confidence <= clean_gen.confidence);
        assert!(!pii_gen.pii_findings.is_empty());
    }

    #[test]
    fn test_blank_column_name_is_input_error() {
        let column = ColumnMetadata::new("  ");
        let err = generator().generate_column("t", &column).unwrap_err();
        assert!(matches!(err, crate::domain::DatalexError::InputValidation(_)));
    }

    #[test]
    fn test_table_description_includes_context() {
        let ctx = TableContext::new("customer_account")
            .with_context("Retail banking account master")
            .with_column(ColumnMetadata::new("bal"));
        let payload = generator().generate_table(&ctx).unwrap();

        assert!(payload.table_description.contains("customer account"));
        assert!(payload.table_description.contains("Retail banking account master"));
    }

    #[test]
    fn test_payload_needs_review_aggregates() {
        let ctx = TableContext::new("t")
            .with_column(acct_open_dt())
            .with_column(ColumnMetadata::new("zzqq1"));
        let payload = generator().generate_table(&ctx).unwrap();
        assert!(payload.needs_review);
    }

    #[test]
    fn test_remote_description_keeps_local_findings() {
        let generator = generator();
        let column = ColumnMetadata::new("ssn").with_sample_values(["123-45-6789"]);
        let generated = generator
            .with_remote_description("customers", &column, "Customer tax identifier.".to_string())
            .unwrap();

        assert!(generated.description.starts_with("Customer tax identifier."));
        assert!(generated.description.contains("sensitive"));
        assert_eq!(generated.pii_findings.len(), 1);
    }

    #[test]
    fn test_describe_row() {
        let description = generator().describe_row("customer_account", "acct_open_dt");
        assert_eq!(description, "Account open date in `customer_account`.");
    }

    #[test]
    fn test_constraint_qualifiers() {
        assert_eq!(constraint_qualifier("unique"), "must be unique");
        assert_eq!(constraint_qualifier("not_null"), "must always be present");
        assert!(constraint_qualifier("check positive").contains("check positive"));
    }
}
