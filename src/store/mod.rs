//! Collaborator stores
//!
//! Append-only JSONL logs for reviewer decisions and the approved
//! dictionary, plus the demo sample loader. The core needs only
//! read/append semantics here; there is no database engine.

pub mod review;
pub mod samples;

pub use review::ReviewStore;
pub use samples::{DemoSample, SampleInfo, SampleLibrary};
