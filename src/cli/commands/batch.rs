//! Batch command implementation
//!
//! CSV in, CSV out: each input row gains a `column_description` field.
//! Invalid rows are flagged in place; the batch itself only fails on
//! structural problems like missing headers.

use crate::batch;
use crate::config::DatalexConfig;
use crate::dictionary::Dictionary;
use crate::generator::GenerationEngine;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input CSV with table_name and column_name headers
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "descriptions.csv")]
    pub output: PathBuf,
}

impl BatchArgs {
    /// Execute the batch command
    pub async fn execute(&self, config: &DatalexConfig) -> anyhow::Result<i32> {
        println!("🗂️  Describing {}", self.input.display());

        let dictionary = Arc::new(Dictionary::load(&config.dictionary)?);
        let engine = GenerationEngine::from_config(config, dictionary)?;

        let summary = batch::process_csv(&self.input, &self.output, &engine).await?;

        println!("✅ Wrote {}", self.output.display());
        println!();
        println!("Batch Summary:");
        println!("  Rows:      {}", summary.total_rows);
        println!("  Described: {}", summary.described);
        println!("  Flagged:   {}", summary.failed);

        Ok(0)
    }
}
