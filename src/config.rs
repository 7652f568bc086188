// ==========================================
// Survey Unifier - Pipeline configuration
// ==========================================

use std::path::PathBuf;

use crate::unifier::sniffer::SNIFF_SAMPLE_LEN;

/// Canonical output file name.
pub const OUTPUT_FILE_NAME: &str = "planilha_unificada.csv";

/// Run-level knobs consumed by the pipeline.
#[derive(Debug, Clone)]
pub struct UnifierConfig {
    /// Destination of the unified dataset.
    pub output_path: PathBuf,
    /// Bytes sampled from each file head for delimiter detection.
    pub sniff_sample_len: usize,
}

impl Default for UnifierConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            sniff_sample_len: SNIFF_SAMPLE_LEN,
        }
    }
}
