//! Result type alias for Datalex
//!
//! This module provides a convenient Result type alias that uses
//! DatalexError as the error type.

use super::errors::DatalexError;

/// Result type alias for Datalex operations
///
/// # Examples
///
/// ```
/// use datalex::domain::result::Result;
/// use datalex::domain::errors::DatalexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DatalexError::InputValidation("blank column_name".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DatalexError>;
