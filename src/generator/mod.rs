//! Description generation
//!
//! Two paths with one output contract: the deterministic rule-based
//! generator ([`rules::RuleBasedGenerator`]) and the optional remote path
//! ([`external::ExternalGenerator`]), selected through a priority chain
//! ([`strategy::GenerationEngine`]) that always ends at the rule path.

pub mod external;
pub mod rules;
pub mod strategy;
pub mod tokens;

pub use external::ExternalGenerator;
pub use rules::RuleBasedGenerator;
pub use strategy::{GenerationEngine, GenerationStrategy, RowSpec};
