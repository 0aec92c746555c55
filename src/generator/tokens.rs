//! Identifier tokenization and term resolution
//!
//! Column and table names are decomposed on underscores, dashes, spaces,
//! and camelCase boundaries; each token is mapped through the term
//! dictionary. Unmapped tokens pass through verbatim.

use crate::dictionary::TermDictionary;

/// A column/table name resolved against the term dictionary
#[derive(Debug, Clone)]
pub struct ResolvedName {
    /// Human-readable phrase, e.g. "account open date"
    pub phrase: String,
    /// Number of tokens that resolved via the dictionary
    pub resolved: usize,
    /// Total token count
    pub total: usize,
}

impl ResolvedName {
    /// Fraction of tokens resolved via the dictionary, in [0, 1]
    pub fn coverage(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.resolved as f32 / self.total as f32
        }
    }
}

/// Split an identifier into lowercase tokens
///
/// `acct_open_dt`, `acct-open-dt`, and `acctOpenDt` all yield
/// `["acct", "open", "dt"]`.
pub fn split_identifier(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' || c == '.' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Resolve an identifier into a business phrase
///
/// Returns the joined phrase plus the resolution counts that drive the
/// generator's coverage-based confidence.
pub fn resolve_identifier(name: &str, terms: &TermDictionary) -> ResolvedName {
    let tokens = split_identifier(name);
    let total = tokens.len();
    let mut resolved = 0;
    let mut parts = Vec::with_capacity(total);

    for token in &tokens {
        match terms.lookup_term(token) {
            Some(term) => {
                resolved += 1;
                parts.push(term.to_string());
            }
            None => parts.push(token.clone()),
        }
    }

    ResolvedName {
        phrase: parts.join(" "),
        resolved,
        total,
    }
}

/// Uppercase the first character of a phrase
pub fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> TermDictionary {
        TermDictionary::builtin().unwrap()
    }

    #[test]
    fn test_split_snake_case() {
        assert_eq!(split_identifier("acct_open_dt"), vec!["acct", "open", "dt"]);
    }

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split_identifier("acctOpenDt"), vec!["acct", "open", "dt"]);
    }

    #[test]
    fn test_split_mixed_separators() {
        assert_eq!(split_identifier("cust-email addr"), vec!["cust", "email", "addr"]);
    }

    #[test]
    fn test_split_keeps_digits_in_token() {
        assert_eq!(split_identifier("zzqq1"), vec!["zzqq1"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_identifier("").is_empty());
        assert!(split_identifier("___").is_empty());
    }

    #[test]
    fn test_resolve_maps_abbreviations() {
        let resolved = resolve_identifier("acct_open_dt", &terms());
        assert_eq!(resolved.phrase, "account open date");
        assert_eq!(resolved.resolved, 2);
        assert_eq!(resolved.total, 3);
    }

    #[test]
    fn test_coverage_fraction() {
        let resolved = resolve_identifier("acct_open_dt", &terms());
        assert!((resolved.coverage() - 2.0 / 3.0).abs() < 1e-6);

        let unresolved = resolve_identifier("zzqq1", &terms());
        assert_eq!(unresolved.coverage(), 0.0);

        let empty = resolve_identifier("", &terms());
        assert_eq!(empty.coverage(), 0.0);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("account open date"), "Account open date");
        assert_eq!(capitalize(""), "");
    }
}
