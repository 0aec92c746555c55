//! Validate command implementation
//!
//! Scores a previously generated payload against the configured
//! thresholds. The payload may have been produced elsewhere; validation is
//! independent of generation.

use crate::config::DatalexConfig;
use crate::domain::GeneratedPayload;
use crate::validator;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a generated payload JSON file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Table name the payload was generated for
    #[arg(short, long)]
    pub table_name: String,
}

impl ValidateArgs {
    /// Execute the validate command
    pub async fn execute(&self, config: &DatalexConfig) -> anyhow::Result<i32> {
        let content = std::fs::read_to_string(&self.input)?;
        let payload: GeneratedPayload = serde_json::from_str(&content)?;

        let verdict = validator::validate(&self.table_name, &payload, &config.validation);
        println!("{}", serde_json::to_string_pretty(&verdict)?);

        if verdict.passed {
            println!();
            println!("✅ {}", verdict.summary);
            Ok(0)
        } else {
            println!();
            println!("❌ {}", verdict.summary);
            Ok(1)
        }
    }
}
