// ==========================================
// Survey Unifier - Schema validator
// ==========================================
// Reconciles a file's normalized columns against the provider's expected
// schema. Missing expected columns are synthesized with empty values
// (widening) so downstream mapping always finds its sources; an empty
// intersection means the file does not resemble the declared provider.
// ==========================================

use crate::domain::schema::SchemaDefinition;
use crate::unifier::error::{UnifyError, UnifyResult};
use crate::unifier::normalizer::normalize_column;
use crate::unifier::reader::RawTable;
use std::collections::HashSet;
use tracing::warn;

/// Outcome of reconciling one file against one schema.
#[derive(Debug)]
pub struct SchemaCheck {
    /// Expected columns found in the file, in expected order.
    pub present: Vec<String>,
    /// Expected columns synthesized as empty (widened).
    pub missing: Vec<String>,
}

/// Reconcile `table` against `schema`, widening in place.
///
/// Returns `NoSchemaOverlap` when no expected column is present; otherwise
/// every missing expected column is appended with empty-string values for
/// all rows and processing proceeds.
pub fn reconcile(
    table: &mut RawTable,
    schema: &SchemaDefinition,
    file_name: &str,
) -> UnifyResult<SchemaCheck> {
    let expected: Vec<String> = schema
        .expected_columns
        .iter()
        .map(|column| normalize_column(column))
        .collect();

    let have: HashSet<&str> = table.columns.iter().map(String::as_str).collect();

    let mut present = Vec::new();
    let mut missing = Vec::new();
    for column in expected {
        if have.contains(column.as_str()) {
            present.push(column);
        } else {
            missing.push(column);
        }
    }

    if present.is_empty() {
        return Err(UnifyError::NoSchemaOverlap {
            file: file_name.to_string(),
            provider: schema.provider,
        });
    }

    if !missing.is_empty() {
        warn!(
            file = file_name,
            provider = %schema.provider,
            missing = ?missing,
            "expected columns missing, widening with empty values"
        );
        for column in &missing {
            table.columns.push(column.clone());
            for row in &mut table.rows {
                row.insert(column.clone(), String::new());
            }
        }
    }

    Ok(SchemaCheck { present, missing })
}
