//! Generation strategy selection
//!
//! Strategies form a priority chain tried in order with a uniform
//! success/failure contract: external first when configured, the rule path
//! last. The rule path cannot fail transiently, so the chain as a whole
//! never leaves a valid request unanswered; the external path is never a
//! single point of failure.

use crate::config::DatalexConfig;
use crate::dictionary::Dictionary;
use crate::domain::{DatalexError, GeneratedPayload, Result, TableContext};
use crate::generator::external::ExternalGenerator;
use crate::generator::rules::RuleBasedGenerator;
use async_trait::async_trait;
use std::sync::Arc;

/// A bare (table, column) pair from the CSV batch flow
#[derive(Debug, Clone)]
pub struct RowSpec {
    pub table_name: String,
    pub column_name: String,
}

/// Uniform contract every generation path implements
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    /// Identifier used in fallback log events
    fn name(&self) -> &str;

    /// Generate a full payload for a table
    async fn generate_table(&self, ctx: &TableContext) -> Result<GeneratedPayload>;

    /// Generate one description per (table, column) pair, in input order
    async fn describe_rows(&self, rows: &[RowSpec]) -> Result<Vec<String>>;
}

#[async_trait]
impl GenerationStrategy for RuleBasedGenerator {
    fn name(&self) -> &str {
        crate::domain::RULES_MODEL_VERSION
    }

    async fn generate_table(&self, ctx: &TableContext) -> Result<GeneratedPayload> {
        RuleBasedGenerator::generate_table(self, ctx)
    }

    async fn describe_rows(&self, rows: &[RowSpec]) -> Result<Vec<String>> {
        Ok(rows
            .iter()
            .map(|r| self.describe_row(&r.table_name, &r.column_name))
            .collect())
    }
}

#[async_trait]
impl GenerationStrategy for ExternalGenerator {
    fn name(&self) -> &str {
        self.model()
    }

    async fn generate_table(&self, ctx: &TableContext) -> Result<GeneratedPayload> {
        ExternalGenerator::generate_table(self, ctx).await
    }

    async fn describe_rows(&self, rows: &[RowSpec]) -> Result<Vec<String>> {
        ExternalGenerator::describe_rows(self, rows).await
    }
}

/// Priority chain over the configured strategies
///
/// Input validation runs once up front; everything after that is
/// fallback-eligible. A strategy failure is logged as a degraded-path
/// event, never surfaced as a request failure while a later strategy
/// remains.
pub struct GenerationEngine {
    strategies: Vec<Arc<dyn GenerationStrategy>>,
}

impl GenerationEngine {
    /// Build the chain from configuration
    ///
    /// Absent external credentials mean "rule path only", never an error.
    pub fn from_config(config: &DatalexConfig, dictionary: Arc<Dictionary>) -> Result<Self> {
        let mut strategies: Vec<Arc<dyn GenerationStrategy>> = Vec::new();

        if config.external.is_available() {
            let external = ExternalGenerator::new(
                &config.external,
                config.generation.clone(),
                Arc::clone(&dictionary),
            )?;
            tracing::info!(model = external.model(), "External generation enabled");
            strategies.push(Arc::new(external));
        }

        strategies.push(Arc::new(RuleBasedGenerator::new(
            dictionary,
            config.generation.clone(),
        )));

        Ok(Self { strategies })
    }

    /// Chain with only the rule path, used by tests and offline tools
    pub fn rules_only(dictionary: Arc<Dictionary>, config: &DatalexConfig) -> Self {
        Self {
            strategies: vec![Arc::new(RuleBasedGenerator::new(
                dictionary,
                config.generation.clone(),
            ))],
        }
    }

    /// Generate a payload, falling through the chain on failure
    pub async fn generate_table(&self, ctx: &TableContext) -> Result<GeneratedPayload> {
        ctx.validate()?;
        let mut last_err = None;

        for strategy in &self.strategies {
            match strategy.generate_table(ctx).await {
                Ok(payload) => return Ok(payload),
                Err(err) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %err,
                        "Generation strategy failed, falling back"
                    );
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            DatalexError::Other("no generation strategies configured".to_string())
        }))
    }

    /// Describe batch rows, falling through the chain on failure
    pub async fn describe_rows(&self, rows: &[RowSpec]) -> Result<Vec<String>> {
        let mut last_err = None;

        for strategy in &self.strategies {
            match strategy.describe_rows(rows).await {
                Ok(descriptions) => return Ok(descriptions),
                Err(err) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %err,
                        "Row description strategy failed, falling back"
                    );
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            DatalexError::Other("no generation strategies configured".to_string())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnMetadata, RULES_MODEL_VERSION};

    fn engine() -> GenerationEngine {
        GenerationEngine::from_config(
            &DatalexConfig::default(),
            Arc::new(Dictionary::builtin().unwrap()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_default_config_uses_rule_path() {
        let ctx = TableContext::new("customer_account")
            .with_column(ColumnMetadata::new("acct_open_dt"));
        let payload = engine().generate_table(&ctx).await.unwrap();
        assert_eq!(payload.model_version, RULES_MODEL_VERSION);
    }

    #[tokio::test]
    async fn test_invalid_input_is_not_recovered() {
        let ctx = TableContext::new("  ");
        let err = engine().generate_table(&ctx).await.unwrap_err();
        assert!(matches!(err, DatalexError::InputValidation(_)));
    }

    #[tokio::test]
    async fn test_describe_rows_rule_path() {
        let rows = vec![
            RowSpec {
                table_name: "customer_account".to_string(),
                column_name: "acct_open_dt".to_string(),
            },
            RowSpec {
                table_name: "customer_account".to_string(),
                column_name: "bal_amt".to_string(),
            },
        ];
        let descriptions = engine().describe_rows(&rows).await.unwrap();
        assert_eq!(descriptions.len(), 2);
        assert!(descriptions[0].contains("Account open date"));
        assert!(descriptions[1].contains("Balance amount"));
    }
}
