//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Datalex configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateConfigArgs {}

impl ValidateConfigArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Review Threshold: {:.2}",
            config.generation.review_threshold
        );
        println!(
            "  Min Confidence: {:.2}",
            config.validation.min_confidence
        );
        println!(
            "  External Generator: {}",
            if config.external.is_available() {
                format!("enabled ({})", config.external.model)
            } else if config.external.enabled {
                "enabled but no API key (rule path will be used)".to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!("  Reviews Log: {}", config.store.reviews_path.display());
        println!(
            "  Dictionary Log: {}",
            config.store.dictionary_path.display()
        );

        Ok(0)
    }
}
