//! PII finding data models

use serde::{Deserialize, Serialize};

/// PII category enumeration for banking metadata
///
/// The set is fixed: detectors map both name-based and value-shaped matches
/// into one of these categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Personal names (first, last, maiden, account holder)
    Name,
    /// Bank account / IBAN / routing numbers
    AccountNumber,
    /// Social security numbers, tax identifiers, national IDs
    SsnLike,
    /// Contact details (email, phone, fax)
    Contact,
    /// Dates of birth
    DateOfBirth,
    /// Personal financial amounts (salary, income, net worth)
    FinancialAmount,
}

impl PiiCategory {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AccountNumber => "account number",
            Self::SsnLike => "SSN-like identifier",
            Self::Contact => "contact detail",
            Self::DateOfBirth => "date of birth",
            Self::FinancialAmount => "personal financial amount",
        }
    }
}

/// How a PII match was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Matched against the normalized column name
    Name,
    /// Matched against a sample value
    Value,
}

/// A single PII detection on a column
///
/// A column may carry zero or more findings; an empty set means the column
/// is not considered sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiFinding {
    /// Category of PII
    pub category: PiiCategory,
    /// The string that triggered the match (column name or sample value)
    pub matched_on: String,
    /// Confidence score (0.0 - 1.0); value-shaped matches score higher
    /// than name-based matches
    pub confidence: f32,
    /// Whether the match came from the name or a sample value
    pub match_kind: MatchKind,
}

impl PiiFinding {
    /// Create a new finding with the confidence clamped to [0.0, 1.0]
    pub fn new(
        category: PiiCategory,
        matched_on: impl Into<String>,
        confidence: f32,
        match_kind: MatchKind,
    ) -> Self {
        Self {
            category,
            matched_on: matched_on.into(),
            confidence: confidence.clamp(0.0, 1.0),
            match_kind,
        }
    }
}
