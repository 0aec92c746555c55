//! Demo sample library
//!
//! Named example [`TableContext`]s for demos and smoke tests, embedded in
//! the binary and overridable by a JSON file.

use crate::domain::{DatalexError, Result, TableContext};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named demo sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSample {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub payload: TableContext,
}

/// Summary row for listing samples
#[derive(Debug, Clone, Serialize)]
pub struct SampleInfo {
    pub name: String,
    pub description: String,
}

/// Loaded sample library
pub struct SampleLibrary {
    samples: Vec<DemoSample>,
}

impl SampleLibrary {
    /// Load samples from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DatalexError::Store(format!(
                "Failed to read sample library {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_json(&content)
    }

    /// Load samples from JSON content
    pub fn from_json(content: &str) -> Result<Self> {
        let samples: Vec<DemoSample> = serde_json::from_str(content)
            .map_err(|e| DatalexError::Store(format!("Failed to parse sample library: {e}")))?;
        if samples.is_empty() {
            return Err(DatalexError::Store(
                "Sample library contains no samples".to_string(),
            ));
        }
        Ok(Self { samples })
    }

    /// Load the embedded sample library
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../../data/demo_samples.json"))
    }

    /// Load from an optional override path, falling back to the embedded set
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Names and descriptions of all samples
    pub fn list(&self) -> Vec<SampleInfo> {
        self.samples
            .iter()
            .map(|s| SampleInfo {
                name: s.name.clone(),
                description: s.description.clone(),
            })
            .collect()
    }

    /// Fetch a sample by name; `None` returns the first sample
    ///
    /// # Errors
    ///
    /// Returns [`DatalexError::Store`] for an unknown name.
    pub fn get(&self, name: Option<&str>) -> Result<&TableContext> {
        match name {
            None => Ok(&self.samples[0].payload),
            Some(name) => self
                .samples
                .iter()
                .find(|s| s.name == name)
                .map(|s| &s.payload)
                .ok_or_else(|| DatalexError::Store(format!("Sample '{name}' not found"))),
        }
    }
}
