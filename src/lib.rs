// Datalex - Banking Data Dictionary Description Generator
// Copyright (c) 2026 Datalex Contributors
// Licensed under the MIT License

//! # Datalex - Banking Data Dictionary Description Generator
//!
//! Datalex assigns human-readable business descriptions to banking
//! table/column metadata and scores the result for quality and privacy
//! (PII) risk, so a human reviewer can approve, edit, or reject each
//! suggestion.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Generating** descriptions deterministically from a term dictionary
//!   and templates, or via an optional remote model with local fallback
//! - **Detecting** PII from column names and sample values
//! - **Validating** generated payloads into pass/fail verdicts with a
//!   low/medium/high risk level
//! - **Recording** reviewer decisions in append-only JSONL logs
//!
//! ## Architecture
//!
//! Datalex follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`generator`] - Rule-based and external description generation
//! - [`detector`] - PII detection over names and sample values
//! - [`validator`] - Threshold scoring of generated payloads
//! - [`batch`] - CSV batch flow
//! - [`dictionary`] - Term dictionary and PII pattern library
//! - [`store`] - Review/dictionary logs and demo samples
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use datalex::config::DatalexConfig;
//! use datalex::dictionary::Dictionary;
//! use datalex::domain::{ColumnMetadata, TableContext};
//! use datalex::generator::GenerationEngine;
//! use datalex::validator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatalexConfig::default();
//!     let dictionary = Arc::new(Dictionary::builtin()?);
//!     let engine = GenerationEngine::from_config(&config, dictionary)?;
//!
//!     let ctx = TableContext::new("customer_account").with_column(
//!         ColumnMetadata::new("acct_open_dt")
//!             .with_data_type("date")
//!             .with_nullable(false),
//!     );
//!
//!     let payload = engine.generate_table(&ctx).await?;
//!     let verdict = validator::validate(&ctx.table_name, &payload, &config.validation);
//!
//!     println!("{}: {}", verdict.overall_risk, verdict.summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Determinism
//!
//! The rule path is a pure function of its input and the read-only
//! dictionary: identical input always produces an identical payload. All
//! core operations are synchronous and safe to call concurrently; only the
//! external generator suspends, bounded by a timeout, and falls back to
//! the rule path on any failure.
//!
//! ## Error Handling
//!
//! Datalex uses the [`domain::DatalexError`] type for all errors:
//!
//! ```rust,no_run
//! use datalex::domain::DatalexError;
//!
//! fn example() -> Result<(), DatalexError> {
//!     let config = datalex::config::load_or_default("datalex.toml")?;
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod detector;
pub mod dictionary;
pub mod domain;
pub mod generator;
pub mod logging;
pub mod store;
pub mod validator;
