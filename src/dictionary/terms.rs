//! Banking term dictionary
//!
//! Static mapping from column-name tokens (abbreviations, domain keywords)
//! to canonical business terms. Loaded once at startup; read-only afterward,
//! so concurrent readers never race.

use crate::domain::{DatalexError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Term table container as parsed from TOML
#[derive(Debug, Deserialize)]
struct TermTable {
    terms: HashMap<String, String>,
}

/// Abbreviation-to-business-term dictionary
#[derive(Debug, Clone)]
pub struct TermDictionary {
    terms: HashMap<String, String>,
}

impl TermDictionary {
    /// Create a term dictionary from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`DatalexError::Dictionary`] if the file cannot be read or
    /// parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DatalexError::Dictionary(format!(
                "Failed to read term dictionary {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Create a term dictionary from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let table: TermTable = toml::from_str(content)
            .map_err(|e| DatalexError::Dictionary(format!("Failed to parse term dictionary: {e}")))?;

        if table.terms.is_empty() {
            return Err(DatalexError::Dictionary(
                "Term dictionary contains no terms".to_string(),
            ));
        }

        // Keys are matched against lowercased tokens
        let terms = table
            .terms
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Ok(Self { terms })
    }

    /// Create the built-in banking term dictionary
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../terms/banking_terms.toml");
        Self::from_toml(default_toml)
    }

    /// Look up the canonical business term for an abbreviation
    ///
    /// Returns `None` for unmapped tokens; callers pass those through
    /// verbatim.
    pub fn lookup_term(&self, abbrev: &str) -> Option<&str> {
        self.terms.get(&abbrev.to_lowercase()).map(String::as_str)
    }

    /// Number of mapped terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_terms_load() {
        let dict = TermDictionary::builtin().unwrap();
        assert!(!dict.is_empty());
        assert_eq!(dict.lookup_term("acct"), Some("account"));
        assert_eq!(dict.lookup_term("dt"), Some("date"));
        assert_eq!(dict.lookup_term("kyc"), Some("know your customer"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = TermDictionary::builtin().unwrap();
        assert_eq!(dict.lookup_term("ACCT"), Some("account"));
    }

    #[test]
    fn test_unmapped_token_returns_none() {
        let dict = TermDictionary::builtin().unwrap();
        assert_eq!(dict.lookup_term("zzqq1"), None);
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = TermDictionary::from_toml("[terms]\n").unwrap_err();
        assert!(err.to_string().contains("no terms"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(TermDictionary::from_toml("not toml at all [").is_err());
    }
}
