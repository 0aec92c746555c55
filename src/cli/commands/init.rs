//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "datalex.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        println!("📝 Initializing Datalex configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::config_template()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Optional: set DATALEX_EXTERNAL_API_KEY in .env to");
                println!("     enable the external generator (rule path otherwise)");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file: {e}");
                Ok(2)
            }
        }
    }

    fn config_template() -> &'static str {
        r#"# Datalex Configuration File
#
# Every value below is the default; delete anything you don't want to
# override. Environment variables with the DATALEX_ prefix override the
# file (e.g. DATALEX_EXTERNAL_API_KEY, DATALEX_VALIDATION_MIN_CONFIDENCE).

[application]
name = "datalex"
log_level = "info"

[generation]
# Columns below this confidence are flagged needs_review
review_threshold = 0.75
# A PII finding above this confidence flags the column for review
sensitivity_threshold = 0.8
# Sample values rendered as illustrative examples
max_sample_values = 3
# Confidence formula: base + coverage_weight * coverage + bonuses
# - pii_penalty per finding, clamped to [confidence_floor, 0.99]
base_confidence = 0.35
coverage_weight = 0.45
metadata_bonus = 0.05
pii_penalty = 0.10
confidence_floor = 0.20

[validation]
min_confidence = 0.75
high_risk_pii_confidence = 0.9
# More than this many findings overall escalates to high risk
high_risk_pii_count = 2

[external]
# The external path also needs an API key (DATALEX_EXTERNAL_API_KEY);
# without one the rule path is used. This is not an error.
enabled = false
endpoint = "https://api.openai.com/v1"
model = "gpt-4o-mini"
timeout_seconds = 20

[dictionary]
# Override the embedded term dictionary / PII pattern library
# terms_path = "terms/banking_terms.toml"
# patterns_path = "patterns/pii_patterns.toml"

[store]
reviews_path = "reviews.jsonl"
dictionary_path = "dictionary.jsonl"
# samples_path = "data/demo_samples.json"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatalexConfig;

    #[test]
    fn test_template_parses_as_valid_config() {
        let config: DatalexConfig = toml::from_str(InitArgs::config_template()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.generation.review_threshold, 0.75);
        assert_eq!(config.validation.high_risk_pii_count, 2);
    }
}
