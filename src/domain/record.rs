// ==========================================
// Survey Unifier - Canonical records and run reports
// ==========================================
// CanonicalRecord is the 8-field unified address row. It is built once per
// source row by the field mapper and never mutated afterwards.
// ==========================================

use crate::domain::provider::ProviderType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One unified address row.
///
/// Field order matches the canonical output header:
/// `prestador,cep,numero,logradouro,estado,cidade,bairro,complemento`.
/// Every field is always present; unmapped slots stay empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub prestador: String,
    pub cep: String,
    pub numero: String,
    pub logradouro: String,
    pub estado: String,
    pub cidade: String,
    pub bairro: String,
    pub complemento: String,
}

impl CanonicalRecord {
    /// Empty record stamped with the provider tag.
    pub fn empty(provider: ProviderType) -> Self {
        Self {
            prestador: provider.as_str().to_string(),
            cep: String::new(),
            numero: String::new(),
            logradouro: String::new(),
            estado: String::new(),
            cidade: String::new(),
            bairro: String::new(),
            complemento: String::new(),
        }
    }

    /// True when all seven non-provider fields are empty. Such records are
    /// pruned at aggregation.
    pub fn is_content_empty(&self) -> bool {
        self.cep.is_empty()
            && self.numero.is_empty()
            && self.logradouro.is_empty()
            && self.estado.is_empty()
            && self.cidade.is_empty()
            && self.bairro.is_empty()
            && self.complemento.is_empty()
    }
}

/// Terminal disposition of one unification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunDisposition {
    /// At least one file contributed a batch; the output file was written.
    Completed {
        files_contributed: usize,
        total_rows: usize,
    },
    /// No file contributed; no output was produced.
    NoData,
}

/// Per-run summary for operators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifyReport {
    pub batch_id: String,
    pub total_files: usize,
    pub files_contributed: usize,
    /// Rows surviving pruning, as written to the output file.
    pub total_rows: usize,
    pub skipped_unclassified: usize,
    pub skipped_unreadable: usize,
    pub skipped_no_overlap: usize,
    pub failed_files: usize,
    pub disposition: RunDisposition,
    pub output_path: Option<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl UnifyReport {
    /// JSON rendering of the report, for logs and operator tooling.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
