//! External (remote LLM) description generation
//!
//! Delegates description text to an OpenAI-compatible chat-completion
//! endpoint; PII detection and confidence scoring always run locally so
//! sensitivity never depends on an external service. Every failure mode
//! (timeout, transport, non-success status, malformed body) surfaces as an
//! [`ExternalGeneratorError`] that the strategy chain recovers by falling
//! back to the rule path.

use crate::config::{ExternalConfig, GenerationConfig};
use crate::dictionary::Dictionary;
use crate::domain::{
    ExternalGeneratorError, GeneratedPayload, Result, TableContext,
};
use crate::generator::rules::RuleBasedGenerator;
use crate::generator::RowSpec;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Remote description generator with local sensitivity analysis
#[derive(Debug)]
pub struct ExternalGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout_seconds: u64,
    rules: RuleBasedGenerator,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Expected remote contract for whole-table generation
#[derive(Deserialize)]
struct RemoteTablePayload {
    table_description: String,
    columns: Vec<RemoteColumn>,
}

#[derive(Deserialize)]
struct RemoteColumn {
    column_name: String,
    description: String,
}

/// Expected remote contract for batch row descriptions
#[derive(Deserialize)]
struct RemoteRowPayload {
    descriptions: Vec<String>,
}

const TABLE_SYSTEM_PROMPT: &str = "You are a banking data dictionary expert. \
    Given a table and its columns, return strict JSON with keys \
    table_description and columns; each column entry must include \
    column_name and description (1-2 concise business-facing sentences). \
    Output only valid JSON, no markdown.";

const ROWS_SYSTEM_PROMPT: &str = "You are a banking data dictionary expert. \
    Given a list of table_name and column_name pairs, return a JSON object \
    with a single key 'descriptions': an array of strings, one per pair in \
    the same order. Each string is a concise business-facing column \
    description. Output only valid JSON, no markdown.";

impl ExternalGenerator {
    /// Create an external generator from configuration
    ///
    /// # Errors
    ///
    /// Returns [`ExternalGeneratorError::NotConfigured`] when no API key is
    /// configured, and a configuration error if the HTTP client cannot be
    /// built.
    pub fn new(
        external: &ExternalConfig,
        generation: GenerationConfig,
        dictionary: Arc<Dictionary>,
    ) -> Result<Self> {
        let api_key = external
            .api_key
            .as_ref()
            .ok_or(ExternalGeneratorError::NotConfigured)?
            .expose_secret()
            .as_ref()
            .to_string();

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(external.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ExternalGeneratorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: external.endpoint.trim_end_matches('/').to_string(),
            model: external.model.clone(),
            api_key,
            timeout_seconds: external.timeout_seconds,
            rules: RuleBasedGenerator::new(dictionary, generation),
        })
    }

    /// Model identifier recorded as `model_version` in payloads
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate descriptions for a whole table via the remote model
    pub async fn generate_table(&self, ctx: &TableContext) -> Result<GeneratedPayload> {
        ctx.validate()?;

        let request = json!({
            "table_name": ctx.table_name,
            "table_context": ctx.table_context,
            "columns": ctx.columns.iter().map(|c| json!({
                "column_name": c.column_name,
                "data_type": c.data_type,
                "nullable": c.nullable,
                "constraints": c.constraints,
            })).collect::<Vec<_>>(),
        });

        let content = self
            .chat(TABLE_SYSTEM_PROMPT, request.to_string())
            .await?;

        let remote: RemoteTablePayload = serde_json::from_str(&content).map_err(|e| {
            ExternalGeneratorError::MalformedResponse(format!("invalid payload JSON: {e}"))
        })?;

        let mut columns = Vec::with_capacity(ctx.columns.len());
        for column in &ctx.columns {
            let description = remote
                .columns
                .iter()
                .find(|r| r.column_name == column.column_name)
                .map(|r| r.description.clone())
                .ok_or_else(|| {
                    ExternalGeneratorError::MalformedResponse(format!(
                        "response missing column '{}'",
                        column.column_name
                    ))
                })?;
            columns.push(
                self.rules
                    .with_remote_description(&ctx.table_name, column, description)?,
            );
        }

        let table_description = remote.table_description.trim().to_string();
        if table_description.is_empty() {
            return Err(ExternalGeneratorError::MalformedResponse(
                "empty table_description".to_string(),
            )
            .into());
        }

        Ok(GeneratedPayload::new(table_description, columns, &self.model))
    }

    /// One description per (table, column) pair, in input order
    pub async fn describe_rows(&self, rows: &[RowSpec]) -> Result<Vec<String>> {
        let request = json!(rows
            .iter()
            .map(|r| json!({
                "table_name": r.table_name,
                "column_name": r.column_name,
            }))
            .collect::<Vec<_>>());

        let content = self.chat(ROWS_SYSTEM_PROMPT, request.to_string()).await?;

        let remote: RemoteRowPayload = serde_json::from_str(&content).map_err(|e| {
            ExternalGeneratorError::MalformedResponse(format!("invalid row JSON: {e}"))
        })?;

        if remote.descriptions.len() != rows.len() {
            return Err(ExternalGeneratorError::MalformedResponse(format!(
                "expected {} descriptions, got {}",
                rows.len(),
                remote.descriptions.len()
            ))
            .into());
        }

        Ok(remote
            .descriptions
            .into_iter()
            .map(|d| d.trim().to_string())
            .collect())
    }

    /// Issue one chat-completion request and return the message content
    async fn chat(&self, system: &str, user: String) -> Result<String> {
        let url = format!("{}/chat/completions", self.endpoint);
        let body = json!({
            "model": self.model,
            "messages": [
                ChatMessage { role: "system", content: system.to_string() },
                ChatMessage { role: "user", content: user },
            ],
            "temperature": 0.1,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExternalGeneratorError::Timeout(self.timeout_seconds)
                } else {
                    ExternalGeneratorError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExternalGeneratorError::Provider {
                status: status.as_u16(),
                message: truncate(&message, 200),
            }
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            ExternalGeneratorError::MalformedResponse(format!("invalid completion JSON: {e}"))
        })?;

        parsed
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| {
                ExternalGeneratorError::MalformedResponse("no choices in response".to_string())
                    .into()
            })
    }
}

/// Cap provider error bodies so logs stay readable
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_not_configured() {
        let external = ExternalConfig {
            enabled: true,
            ..ExternalConfig::default()
        };
        let err = ExternalGenerator::new(
            &external,
            GenerationConfig::default(),
            Arc::new(Dictionary::builtin().unwrap()),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 200), "short");
        let long = "é".repeat(300);
        let out = truncate(&long, 201);
        assert!(out.ends_with("..."));
    }
}
