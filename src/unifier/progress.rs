// ==========================================
// Survey Unifier - Progress events
// ==========================================
// Callback contract consumed by whatever hosts the pipeline (CLI today).
// The core invokes it once per file and once at the end; the hosting
// execution model is not part of this contract.
// ==========================================

use crate::domain::record::RunDisposition;
use serde::{Deserialize, Serialize};

/// Per-file outcome as reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileOutcome {
    /// File contributed a batch of `rows` canonical records.
    Imported { rows: usize },
    /// Filename matched no provider marker.
    SkippedUnclassified,
    /// No encoding in the fallback list could parse the file.
    SkippedUnreadable,
    /// Columns shared nothing with the classified provider's schema.
    SkippedNoOverlap,
    /// Any other per-file failure; the run continues.
    Failed { reason: String },
}

impl FileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOutcome::Imported { .. } => "Imported",
            FileOutcome::SkippedUnclassified => "SkippedUnclassified",
            FileOutcome::SkippedUnreadable => "SkippedUnreadable",
            FileOutcome::SkippedNoOverlap => "SkippedNoOverlap",
            FileOutcome::Failed { .. } => "Failed",
        }
    }
}

/// Progress event emitted after each file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProgress {
    /// 1-based index of the file within the run.
    pub index: usize,
    pub total: usize,
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// Progress consumer implemented by the hosting layer.
pub trait ProgressReporter: Send + Sync {
    /// Called once per file, after its terminal per-file state.
    fn on_file(&self, progress: &FileProgress);

    /// Called once, after aggregation, with the run disposition.
    fn on_finished(&self, disposition: &RunDisposition);
}

/// Reporter that discards every event. Used by tests and library callers
/// that only need the returned report.
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressReporter;

impl ProgressReporter for NoOpProgressReporter {
    fn on_file(&self, _progress: &FileProgress) {}
    fn on_finished(&self, _disposition: &RunDisposition) {}
}
