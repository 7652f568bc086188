// ==========================================
// Survey Unifier - Encoding-aware CSV reader
// ==========================================
// Parses a whole file trying encodings in a fixed fallback order. The two
// fallback encodings are byte-total, so in practice only the utf-8 attempt
// can fail; exhausting the list is still a declared per-file recovery.
// Malformed rows are individually dropped, never fatal to the file.
// ==========================================

use crate::unifier::error::{UnifyError, UnifyResult};
use crate::unifier::normalizer::normalize_column;
use csv::ReaderBuilder;
use encoding_rs::Encoding;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Encoding labels in attempt order, resolved through WHATWG label rules.
pub const ENCODING_LABELS: [&str; 3] = ["utf-8", "latin1", "iso-8859-1"];

/// Parsed file contents keyed by normalized column name.
#[derive(Debug)]
pub struct RawTable {
    /// Normalized header names in file order.
    pub columns: Vec<String>,
    /// One map per data row, keyed by normalized header name.
    pub rows: Vec<HashMap<String, String>>,
    /// Label of the encoding that decoded the file.
    pub encoding: &'static str,
    /// Malformed rows dropped during parse.
    pub skipped_rows: usize,
}

pub struct EncodingReader {
    delimiter: u8,
}

impl EncodingReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read and parse `path`, attempting each encoding in order.
    ///
    /// The loop stops at the first encoding that decodes without error;
    /// if every attempt fails the file is reported unreadable.
    pub fn read(&self, path: &Path) -> UnifyResult<RawTable> {
        if !path.exists() {
            return Err(UnifyError::FileNotFound(path.display().to_string()));
        }
        let bytes = fs::read(path)?;

        for label in ENCODING_LABELS {
            let encoding = match Encoding::for_label(label.as_bytes()) {
                Some(encoding) => encoding,
                None => continue,
            };

            let (text, had_errors) = encoding.decode_with_bom_removal(&bytes);
            if had_errors {
                warn!(
                    file = %path.display(),
                    encoding = label,
                    "decode failed, trying next encoding"
                );
                continue;
            }

            debug!(file = %path.display(), encoding = label, "file decoded");
            let mut table = self.parse_rows(&text)?;
            table.encoding = label;
            return Ok(table);
        }

        Err(UnifyError::EncodingExhausted(path.display().to_string()))
    }

    /// Parse decoded text into a RawTable.
    ///
    /// Rows with more fields than the header are dropped (RowSkip); rows
    /// with fewer fields are padded with empty strings.
    fn parse_rows(&self, text: &str) -> UnifyResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_column)
            .collect();

        let mut rows = Vec::new();
        let mut skipped_rows = 0usize;

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    debug!(error = %err, "malformed row dropped");
                    skipped_rows += 1;
                    continue;
                }
            };

            if record.len() > columns.len() {
                debug!(
                    fields = record.len(),
                    expected = columns.len(),
                    "overlong row dropped"
                );
                skipped_rows += 1;
                continue;
            }

            let mut row = HashMap::with_capacity(columns.len());
            for (idx, column) in columns.iter().enumerate() {
                let value = record.get(idx).unwrap_or("");
                row.insert(column.clone(), value.to_string());
            }
            rows.push(row);
        }

        Ok(RawTable {
            columns,
            rows,
            encoding: ENCODING_LABELS[0],
            skipped_rows,
        })
    }
}
