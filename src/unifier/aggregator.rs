// ==========================================
// Survey Unifier - Dataset aggregator
// ==========================================
// Join barrier of the run: concatenates every file-local batch, prunes
// records with no content, sorts by (estado, cidade) and serializes the
// final dataset as UTF-8 with a leading BOM for spreadsheet tools.
// ==========================================

use crate::domain::record::CanonicalRecord;
use crate::unifier::error::{UnifyError, UnifyResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte-order mark expected by downstream spreadsheet tools.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Canonical output header, written even when the dataset is empty.
const CANONICAL_HEADER: [&str; 8] = [
    "prestador",
    "cep",
    "numero",
    "logradouro",
    "estado",
    "cidade",
    "bairro",
    "complemento",
];

/// Merge all batches into the final dataset.
///
/// Batches are concatenated in file-discovery order and rows keep their
/// in-file order. Records with all seven content fields empty are dropped.
/// `sort_by` is stable, so records tying on (estado, cidade) keep their
/// prior relative order.
pub fn finalize(batches: Vec<Vec<CanonicalRecord>>) -> Vec<CanonicalRecord> {
    let mut dataset: Vec<CanonicalRecord> = batches.into_iter().flatten().collect();
    dataset.retain(|record| !record.is_content_empty());
    dataset.sort_by(|a, b| (&a.estado, &a.cidade).cmp(&(&b.estado, &b.cidade)));
    dataset
}

/// Serialize the dataset to `path` with the canonical 8-column header.
pub fn write_csv(dataset: &[CanonicalRecord], path: &Path) -> UnifyResult<()> {
    let mut file =
        File::create(path).map_err(|e| UnifyError::OutputWrite(e.to_string()))?;
    file.write_all(UTF8_BOM)
        .map_err(|e| UnifyError::OutputWrite(e.to_string()))?;

    // The header is part of the output contract, so it is written
    // explicitly rather than derived from the first serialized record.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(CANONICAL_HEADER)?;
    for record in dataset {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| UnifyError::OutputWrite(e.to_string()))?;
    Ok(())
}
