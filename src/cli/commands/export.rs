//! Export command implementation
//!
//! Writes the approved dictionary as CSV, to a file or stdout.

use crate::config::DatalexConfig;
use crate::store::ReviewStore;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config: &DatalexConfig) -> anyhow::Result<i32> {
        let store = ReviewStore::new(&config.store);

        let count = match &self.output {
            Some(path) => {
                let file = std::fs::File::create(path)?;
                let count = store.export_dictionary_csv(file)?;
                println!("✅ Exported {count} entries to {}", path.display());
                count
            }
            None => store.export_dictionary_csv(std::io::stdout())?,
        };

        if count == 0 {
            tracing::warn!("Dictionary log is empty; nothing approved yet");
        }

        Ok(0)
    }
}
