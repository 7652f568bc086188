// ==========================================
// Survey Unifier - Unification error types
// ==========================================
// Every variant here is non-fatal to the overall run: the pipeline catches
// them at the file boundary and skips to the next file.
// ==========================================

use crate::domain::provider::ProviderType;
use thiserror::Error;

/// Unification error taxonomy.
#[derive(Error, Debug)]
pub enum UnifyError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file read failed: {0}")]
    FileRead(String),

    // ===== Classification =====
    #[error("filename matches no known provider marker: {0}")]
    UnknownProvider(String),

    // ===== Decode / parse =====
    #[error("no encoding in the fallback list could parse {0}")]
    EncodingExhausted(String),

    #[error("CSV parse failed: {0}")]
    CsvParse(String),

    // ===== Schema reconciliation =====
    #[error("{file}: normalized columns share nothing with the {provider} schema")]
    NoSchemaOverlap { file: String, provider: ProviderType },

    // ===== Output =====
    #[error("output write failed: {0}")]
    OutputWrite(String),

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for UnifyError {
    fn from(err: std::io::Error) -> Self {
        UnifyError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for UnifyError {
    fn from(err: csv::Error) -> Self {
        UnifyError::CsvParse(err.to_string())
    }
}

/// Result alias for the unification pipeline.
pub type UnifyResult<T> = Result<T, UnifyError>;
