//! Domain models and types for Datalex.
//!
//! This module contains the core data model shared by the generator,
//! detector, validator, and stores.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Metadata inputs** ([`ColumnMetadata`], [`TableContext`])
//! - **Generated output** ([`GeneratedColumn`], [`GeneratedPayload`])
//! - **PII findings** ([`PiiCategory`], [`PiiFinding`])
//! - **Validation verdicts** ([`ValidationVerdict`], [`RiskLevel`])
//! - **Review records** ([`ReviewSubmission`], [`DictionaryEntry`])
//! - **Error types** ([`DatalexError`], [`ExternalGeneratorError`])
//! - **Result type alias** ([`Result`])
//!
//! Inputs are caller-supplied per request and never stored by the core;
//! payloads are produced once per generation call and immutable afterwards.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DatalexError>`]:
//!
//! ```rust
//! use datalex::domain::{DatalexError, Result, TableContext};
//!
//! fn example(ctx: &TableContext) -> Result<()> {
//!     ctx.validate()?;
//!     Ok(())
//! }
//! ```

pub mod column;
pub mod errors;
pub mod payload;
pub mod pii;
pub mod result;
pub mod review;
pub mod verdict;

// Re-export commonly used types for convenience
pub use column::{ColumnMetadata, TableContext};
pub use errors::{DatalexError, ExternalGeneratorError};
pub use payload::{GeneratedColumn, GeneratedPayload, RULES_MODEL_VERSION};
pub use pii::{MatchKind, PiiCategory, PiiFinding};
pub use result::Result;
pub use review::{
    DictionaryEntry, EntrySource, ReviewAction, ReviewDecision, ReviewRecord, ReviewSubmission,
    ReviewSummary,
};
pub use verdict::{ColumnResult, ColumnStatus, RiskLevel, ValidationVerdict};
