//! Configuration schema types
//!
//! This module defines the configuration structure for Datalex. Every knob
//! the core consumes (confidence tuning, validation thresholds, the
//! external provider) lives here rather than as hard-coded constants, so
//! test suites can probe boundary values directly.

use crate::config::secret::ApiKey;
use crate::validator::ValidationThresholds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Datalex configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has working defaults; a missing `datalex.toml` means
/// "builtin dictionary, rule path only, JSONL stores in the working
/// directory".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatalexConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Generation tuning and review thresholds
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Validation thresholds
    #[serde(default)]
    pub validation: ValidationThresholds,

    /// External generator (remote LLM) settings
    #[serde(default)]
    pub external: ExternalConfig,

    /// Term dictionary / pattern library overrides
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Review and dictionary store paths
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DatalexConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.generation.validate()?;
        self.validation.validate()?;
        self.external.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "Invalid log_level '{other}': expected trace, debug, info, warn, or error"
            )),
        }
    }
}

fn default_app_name() -> String {
    "datalex".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Generation tuning and review thresholds
///
/// The confidence formula is
/// `base_confidence + coverage_weight * coverage + bonuses - pii_penalty *
/// findings`, clamped to `[confidence_floor, 0.99]`. The defaults were
/// calibrated against the recorded sample outputs; they are configuration,
/// not constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Columns below this confidence are flagged `needs_review`
    #[serde(default = "default_review_threshold")]
    pub review_threshold: f32,

    /// A PII finding above this confidence flags the column for review
    #[serde(default = "default_sensitivity_threshold")]
    pub sensitivity_threshold: f32,

    /// Maximum sample values rendered as illustrative examples
    #[serde(default = "default_max_sample_values")]
    pub max_sample_values: usize,

    /// Confidence when no token resolves
    #[serde(default = "default_base_confidence")]
    pub base_confidence: f32,

    /// Weight of the token-resolution coverage fraction
    #[serde(default = "default_coverage_weight")]
    pub coverage_weight: f32,

    /// Bonus for each of: data type present, constraints present,
    /// sample values present
    #[serde(default = "default_metadata_bonus")]
    pub metadata_bonus: f32,

    /// Confidence subtracted per PII finding
    #[serde(default = "default_pii_penalty")]
    pub pii_penalty: f32,

    /// Confidence never drops below this floor
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            review_threshold: default_review_threshold(),
            sensitivity_threshold: default_sensitivity_threshold(),
            max_sample_values: default_max_sample_values(),
            base_confidence: default_base_confidence(),
            coverage_weight: default_coverage_weight(),
            metadata_bonus: default_metadata_bonus(),
            pii_penalty: default_pii_penalty(),
            confidence_floor: default_confidence_floor(),
        }
    }
}

impl GenerationConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("review_threshold", self.review_threshold),
            ("sensitivity_threshold", self.sensitivity_threshold),
            ("base_confidence", self.base_confidence),
            ("coverage_weight", self.coverage_weight),
            ("metadata_bonus", self.metadata_bonus),
            ("pii_penalty", self.pii_penalty),
            ("confidence_floor", self.confidence_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("generation.{name} must be within [0.0, 1.0], got {value}"));
            }
        }
        if self.max_sample_values == 0 {
            return Err("generation.max_sample_values must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_review_threshold() -> f32 {
    0.75
}

fn default_sensitivity_threshold() -> f32 {
    0.8
}

fn default_max_sample_values() -> usize {
    3
}

fn default_base_confidence() -> f32 {
    0.35
}

fn default_coverage_weight() -> f32 {
    0.45
}

fn default_metadata_bonus() -> f32 {
    0.05
}

fn default_pii_penalty() -> f32 {
    0.10
}

fn default_confidence_floor() -> f32 {
    0.20
}

/// External generator (remote LLM) configuration
///
/// Absence of credentials means "use the rule path", never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    /// Enable the external path; still requires an API key to activate
    #[serde(default)]
    pub enabled: bool,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_external_endpoint")]
    pub endpoint: String,

    /// Model identifier; also recorded as `model_version` in payloads
    #[serde(default = "default_external_model")]
    pub model: String,

    /// Provider API key; typically supplied via DATALEX_EXTERNAL_API_KEY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKey>,

    /// Hard deadline for a remote call
    #[serde(default = "default_external_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ExternalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_external_endpoint(),
            model: default_external_model(),
            api_key: None,
            timeout_seconds: default_external_timeout(),
        }
    }
}

impl ExternalConfig {
    /// Whether the external path can actually be used
    pub fn is_available(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }

    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.endpoint.trim().is_empty() {
            return Err("external.endpoint must not be empty when enabled".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("external.timeout_seconds must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_external_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_external_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_external_timeout() -> u64 {
    20
}

/// Term dictionary / pattern library file overrides
///
/// When unset, the embedded defaults are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to a banking terms TOML file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_path: Option<PathBuf>,

    /// Path to a PII patterns TOML file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns_path: Option<PathBuf>,
}

/// Review and dictionary store paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Append-only review decision log
    #[serde(default = "default_reviews_path")]
    pub reviews_path: PathBuf,

    /// Append-only approved/edited dictionary log
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,

    /// Demo sample library override; embedded samples when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reviews_path: default_reviews_path(),
            dictionary_path: default_dictionary_path(),
            samples_path: None,
        }
    }
}

fn default_reviews_path() -> PathBuf {
    PathBuf::from("reviews.jsonl")
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dictionary.jsonl")
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for rotated log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation schedule: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(format!(
                "Invalid logging.local_rotation '{other}': expected daily or hourly"
            )),
        }
    }
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
