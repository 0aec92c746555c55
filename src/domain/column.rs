//! Table and column metadata inputs
//!
//! These types are supplied by the caller for each generation request and are
//! never stored by the core. Only `table_name` and `column_name` are required;
//! every other field defaults so the CSV flow can supply minimal rows.

use crate::domain::errors::DatalexError;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};

/// Metadata for a single database column
///
/// `sample_values` are treated as already masked by the caller; the core
/// never re-masks or redacts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Physical column name (required, non-empty)
    pub column_name: String,

    /// Declared data type, free-form (e.g. "varchar(10)")
    #[serde(default)]
    pub data_type: String,

    /// Whether the column accepts NULL values
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// Declared constraints, e.g. "not_null", "unique"
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Illustrative sample values, possibly masked or partial
    #[serde(default)]
    pub sample_values: Vec<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnMetadata {
    /// Create column metadata with just a name; remaining fields default
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: String::new(),
            nullable: true,
            constraints: Vec::new(),
            sample_values: Vec::new(),
        }
    }

    /// Sets the data type
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = data_type.into();
        self
    }

    /// Sets nullability
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Adds a constraint
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Sets sample values
    pub fn with_sample_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Validates required fields
    ///
    /// # Errors
    ///
    /// Returns [`DatalexError::InputValidation`] if `column_name` is blank.
    pub fn validate(&self) -> Result<()> {
        if self.column_name.trim().is_empty() {
            return Err(DatalexError::InputValidation(
                "column_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A table plus the columns to describe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableContext {
    /// Physical table name (required, non-empty)
    pub table_name: String,

    /// Optional free-text description of the table's purpose
    #[serde(default)]
    pub table_context: Option<String>,

    /// Columns to describe, unique by `column_name`
    pub columns: Vec<ColumnMetadata>,
}

impl TableContext {
    /// Create a table context with no columns
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            table_context: None,
            columns: Vec::new(),
        }
    }

    /// Sets the free-text context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.table_context = Some(context.into());
        self
    }

    /// Adds a column
    pub fn with_column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    /// Validates the request shape
    ///
    /// # Errors
    ///
    /// Returns [`DatalexError::InputValidation`] if `table_name` is blank,
    /// no columns are supplied, a column name is blank, or two columns share
    /// a name.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(DatalexError::InputValidation(
                "table_name must not be empty".to_string(),
            ));
        }
        if self.columns.is_empty() {
            return Err(DatalexError::InputValidation(format!(
                "table '{}' has no columns to describe",
                self.table_name
            )));
        }
        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            column.validate()?;
            if !seen.insert(column.column_name.as_str()) {
                return Err(DatalexError::InputValidation(format!(
                    "duplicate column_name '{}' in table '{}'",
                    column.column_name, self.table_name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let column = ColumnMetadata::new("acct_open_dt")
            .with_data_type("date")
            .with_nullable(false)
            .with_constraint("not_null")
            .with_sample_values(["2023-06-01"]);

        assert_eq!(column.column_name, "acct_open_dt");
        assert_eq!(column.data_type, "date");
        assert!(!column.nullable);
        assert_eq!(column.constraints, vec!["not_null".to_string()]);
        assert_eq!(column.sample_values, vec!["2023-06-01".to_string()]);
    }

    #[test]
    fn test_blank_column_name_rejected() {
        let column = ColumnMetadata::new("   ");
        assert!(column.validate().is_err());
    }

    #[test]
    fn test_table_context_validate() {
        let ctx = TableContext::new("customer_account")
            .with_column(ColumnMetadata::new("acct_open_dt"));
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_table_context_rejects_duplicates() {
        let ctx = TableContext::new("customer_account")
            .with_column(ColumnMetadata::new("bal"))
            .with_column(ColumnMetadata::new("bal"));
        let err = ctx.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate column_name"));
    }

    #[test]
    fn test_table_context_requires_columns() {
        let ctx = TableContext::new("customer_account");
        assert!(ctx.validate().is_err());
    }

    #[test]
    fn test_minimal_deserialization_defaults() {
        let json = r#"{"table_name": "t", "columns": [{"column_name": "c"}]}"#;
        let ctx: TableContext = serde_json::from_str(json).unwrap();
        assert!(ctx.columns[0].nullable);
        assert!(ctx.columns[0].constraints.is_empty());
        assert!(ctx.columns[0].sample_values.is_empty());
    }
}
