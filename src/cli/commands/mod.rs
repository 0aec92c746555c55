//! Command implementations
//!
//! Each command parses its own arguments and returns a process exit code.

pub mod batch;
pub mod export;
pub mod generate;
pub mod init;
pub mod review;
pub mod samples;
pub mod validate;
pub mod validate_config;
