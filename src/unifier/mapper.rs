// ==========================================
// Survey Unifier - Field mapper
// ==========================================
// Applies the provider's rename table to the widened columns and builds one
// immutable CanonicalRecord per source row. The complement parts are joined
// literally: every designated column contributes (empty or not), separated
// by single spaces, with only outer whitespace trimmed.
// ==========================================

use crate::domain::record::CanonicalRecord;
use crate::domain::schema::{CanonicalSlot, SchemaDefinition};
use crate::unifier::normalizer::normalize_column;
use crate::unifier::reader::RawTable;
use std::collections::HashMap;

/// Map a reconciled table into a file-local batch of canonical records.
pub fn map_table(table: &RawTable, schema: &SchemaDefinition) -> Vec<CanonicalRecord> {
    table
        .rows
        .iter()
        .map(|row| map_row(row, schema))
        .collect()
}

fn map_row(row: &HashMap<String, String>, schema: &SchemaDefinition) -> CanonicalRecord {
    let mut record = CanonicalRecord::empty(schema.provider);

    for (source, slot) in schema.renames {
        let key = normalize_column(source);
        let value = row.get(&key).cloned().unwrap_or_default();
        match slot {
            CanonicalSlot::Cep => record.cep = value,
            CanonicalSlot::Numero => record.numero = value,
            CanonicalSlot::Logradouro => record.logradouro = value,
            CanonicalSlot::Estado => record.estado = value,
            CanonicalSlot::Cidade => record.cidade = value,
            CanonicalSlot::Bairro => record.bairro = value,
            // Complement parts are assembled below, in declared order.
            CanonicalSlot::Complemento1
            | CanonicalSlot::Complemento2
            | CanonicalSlot::Complemento3 => {}
        }
    }

    // Literal join over the schema's complement sources: empty middle parts
    // leave double spaces behind, and only the outer whitespace is trimmed.
    // Preserved source behavior.
    let parts: Vec<String> = schema
        .complement_sources()
        .iter()
        .map(|source| {
            row.get(&normalize_column(source))
                .cloned()
                .unwrap_or_default()
        })
        .collect();
    record.complemento = parts.join(" ").trim().to_string();
    record
}
