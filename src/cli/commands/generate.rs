//! Generate command implementation
//!
//! Generates descriptions for a table context read from a JSON file or a
//! named demo sample, printing the payload as JSON. With `--validate`, the
//! payload is scored in the same run and the exit code reflects the
//! verdict.

use crate::config::DatalexConfig;
use crate::dictionary::Dictionary;
use crate::domain::TableContext;
use crate::generator::GenerationEngine;
use crate::store::SampleLibrary;
use crate::validator;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to a table context JSON file
    #[arg(short, long, conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Name of a demo sample to generate from
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Write the payload to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Validate the payload in the same run
    #[arg(long)]
    pub validate: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub async fn execute(&self, config: &DatalexConfig) -> anyhow::Result<i32> {
        let ctx = self.load_context(config)?;
        tracing::info!(table_name = %ctx.table_name, columns = ctx.columns.len(), "Generating descriptions");

        let dictionary = Arc::new(Dictionary::load(&config.dictionary)?);
        let engine = GenerationEngine::from_config(config, dictionary)?;

        let payload = engine.generate_table(&ctx).await?;
        let rendered = serde_json::to_string_pretty(&payload)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                println!("✅ Payload written to {}", path.display());
            }
            None => println!("{rendered}"),
        }

        if payload.needs_review {
            println!();
            println!("⚠️  One or more columns need human review");
        }

        if self.validate {
            let verdict = validator::validate(&ctx.table_name, &payload, &config.validation);
            println!();
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if !verdict.passed {
                return Ok(1);
            }
        }

        Ok(0)
    }

    fn load_context(&self, config: &DatalexConfig) -> anyhow::Result<TableContext> {
        if let Some(input) = &self.input {
            let content = std::fs::read_to_string(input)?;
            let ctx: TableContext = serde_json::from_str(&content)?;
            return Ok(ctx);
        }

        let library = SampleLibrary::load(config.store.samples_path.as_deref())?;
        let ctx = library.get(self.sample.as_deref())?.clone();
        Ok(ctx)
    }
}
