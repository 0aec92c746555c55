//! Logging and observability
//!
//! Structured logging with configurable levels, console output, and an
//! optional JSON file layer with rotation.
//!
//! # Example
//!
//! ```no_run
//! use datalex::logging::init_logging;
//! use datalex::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
