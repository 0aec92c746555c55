//! Samples command implementation

use crate::config::DatalexConfig;
use crate::store::SampleLibrary;
use clap::Args;

/// Arguments for the samples command
#[derive(Args, Debug)]
pub struct SamplesArgs {}

impl SamplesArgs {
    /// Execute the samples command
    pub async fn execute(&self, config: &DatalexConfig) -> anyhow::Result<i32> {
        let library = SampleLibrary::load(config.store.samples_path.as_deref())?;

        println!("Available demo samples:");
        println!();
        for sample in library.list() {
            println!("  {} - {}", sample.name, sample.description);
        }
        println!();
        println!("Run `datalex generate --sample <name>` to use one.");

        Ok(0)
    }
}
