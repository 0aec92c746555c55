//! Term dictionary and PII pattern library
//!
//! Process-wide, read-only knowledge loaded once at startup and passed by
//! reference into the detector and generators. Failure to load is fatal:
//! the process cannot serve generation requests without it.

pub mod patterns;
pub mod terms;

pub use patterns::{CompiledPattern, PatternRegistry};
pub use terms::TermDictionary;

use crate::config::DictionaryConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Combined domain knowledge: term lookups plus PII patterns
#[derive(Debug)]
pub struct Dictionary {
    terms: TermDictionary,
    patterns: Arc<PatternRegistry>,
}

impl Dictionary {
    /// Load the dictionary from configuration
    ///
    /// File overrides take precedence over the embedded defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DatalexError::Dictionary`] if either source
    /// fails to load or parse. This error is fatal at startup.
    pub fn load(config: &DictionaryConfig) -> Result<Self> {
        let terms = match &config.terms_path {
            Some(path) => TermDictionary::from_file(path)?,
            None => TermDictionary::builtin()?,
        };
        let patterns = match &config.patterns_path {
            Some(path) => PatternRegistry::from_file(path)?,
            None => PatternRegistry::builtin()?,
        };
        tracing::info!(
            terms = terms.len(),
            patterns = patterns.all_patterns().len(),
            "Dictionary loaded"
        );
        Ok(Self {
            terms,
            patterns: Arc::new(patterns),
        })
    }

    /// Load the embedded defaults
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            terms: TermDictionary::builtin()?,
            patterns: Arc::new(PatternRegistry::builtin()?),
        })
    }

    /// The term dictionary
    pub fn terms(&self) -> &TermDictionary {
        &self.terms
    }

    /// The PII pattern registry
    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    /// Shared handle to the pattern registry for detector construction
    pub fn patterns_arc(&self) -> Arc<PatternRegistry> {
        Arc::clone(&self.patterns)
    }
}
