//! Review command implementation
//!
//! Appends reviewer decisions to the review log and materializes
//! dictionary entries for approved/edited columns.

use crate::config::DatalexConfig;
use crate::domain::ReviewSubmission;
use crate::store::ReviewStore;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the review command
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Path to a review submission JSON file
    #[arg(short, long)]
    pub input: PathBuf,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, config: &DatalexConfig) -> anyhow::Result<i32> {
        let content = std::fs::read_to_string(&self.input)?;
        let submission: ReviewSubmission = serde_json::from_str(&content)?;

        let mut store = ReviewStore::new(&config.store);
        let summary = store.save(&submission)?;

        println!("✅ Review saved for `{}`", submission.table_name);
        println!();
        println!("  Approved: {}", summary.approved);
        println!("  Edited:   {}", summary.edited);
        println!("  Rejected: {}", summary.rejected);

        Ok(0)
    }
}
