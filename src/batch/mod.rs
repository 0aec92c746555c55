//! CSV batch description flow
//!
//! Reads a CSV carrying at minimum `table_name` and `column_name`, and
//! writes the same rows back with a `column_description` column appended.
//! Rows are independent: a row with a blank required field is flagged in
//! place and the rest of the batch still succeeds.

use crate::domain::{DatalexError, Result};
use crate::generator::{GenerationEngine, RowSpec};
use serde::Serialize;
use std::path::Path;

/// Column appended to the output CSV
const DESCRIPTION_HEADER: &str = "column_description";

/// Counts for one processed batch
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchSummary {
    /// Rows read from the input
    pub total_rows: usize,
    /// Rows that received a description
    pub described: usize,
    /// Rows flagged with a per-row error
    pub failed: usize,
}

/// Internal representation of one parsed CSV row
struct ParsedRow {
    record: csv::StringRecord,
    /// Position in the valid-row list, or the per-row error message
    outcome: std::result::Result<usize, String>,
}

/// Process a CSV file, appending a description to every row
///
/// Descriptions come from the engine's strategy chain: one batched external
/// call when configured, rule-based generation otherwise or on fallback.
///
/// # Errors
///
/// Returns [`DatalexError::Batch`] for structural problems (unreadable
/// file, missing headers, no data rows). Per-row validation failures are
/// not errors; they are flagged in the output.
pub async fn process_csv(
    input: &Path,
    output: &Path,
    engine: &GenerationEngine,
) -> Result<BatchSummary> {
    let mut reader = csv::Reader::from_path(input)
        .map_err(|e| DatalexError::Batch(format!("Failed to open {}: {e}", input.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| DatalexError::Batch(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let table_idx = position(&headers, "table_name")?;
    let column_idx = position(&headers, "column_name")?;

    let mut rows = Vec::new();
    let mut specs = Vec::new();

    for record in reader.records() {
        let record = record?;
        let table_name = record.get(table_idx).unwrap_or("").trim().to_string();
        let column_name = record.get(column_idx).unwrap_or("").trim().to_string();

        let outcome = if table_name.is_empty() {
            Err("table_name is required".to_string())
        } else if column_name.is_empty() {
            Err("column_name is required".to_string())
        } else {
            specs.push(RowSpec {
                table_name,
                column_name,
            });
            Ok(specs.len() - 1)
        };

        rows.push(ParsedRow { record, outcome });
    }

    if rows.is_empty() {
        return Err(DatalexError::Batch("CSV has no data rows".to_string()));
    }

    let descriptions = if specs.is_empty() {
        Vec::new()
    } else {
        engine.describe_rows(&specs).await?
    };

    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| DatalexError::Batch(format!("Failed to create {}: {e}", output.display())))?;

    // Existing column_description columns are replaced, not duplicated
    let kept: Vec<usize> = (0..headers.len())
        .filter(|&i| headers.get(i) != Some(DESCRIPTION_HEADER))
        .collect();

    let mut out_headers: Vec<&str> = kept.iter().filter_map(|&i| headers.get(i)).collect();
    out_headers.push(DESCRIPTION_HEADER);
    writer.write_record(&out_headers)?;

    let mut summary = BatchSummary {
        total_rows: rows.len(),
        ..BatchSummary::default()
    };

    for row in &rows {
        let mut record: Vec<String> = kept
            .iter()
            .map(|&i| row.record.get(i).unwrap_or("").to_string())
            .collect();

        match &row.outcome {
            Ok(spec_idx) => {
                summary.described += 1;
                record.push(descriptions[*spec_idx].clone());
            }
            Err(message) => {
                summary.failed += 1;
                tracing::debug!(error = %message, "Flagging invalid batch row");
                record.push(format!("ERROR: {message}"));
            }
        }
        writer.write_record(&record)?;
    }

    writer
        .flush()
        .map_err(|e| DatalexError::Batch(format!("Failed to flush output: {e}")))?;

    tracing::info!(
        total = summary.total_rows,
        described = summary.described,
        failed = summary.failed,
        "Batch complete"
    );

    Ok(summary)
}

fn position(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| {
            DatalexError::Batch(format!("CSV must have a '{name}' header column"))
        })
}
