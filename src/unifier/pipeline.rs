// ==========================================
// Survey Unifier - Unification pipeline
// ==========================================
// Per-file flow: classify -> sniff -> read -> reconcile -> map, each file
// independent. Every error class is caught at the file boundary and turned
// into a skip; aggregation is the single join barrier at the end.
// ==========================================

use crate::config::UnifierConfig;
use crate::domain::record::{CanonicalRecord, RunDisposition, UnifyReport};
use crate::domain::schema::SchemaDefinition;
use crate::unifier::aggregator;
use crate::unifier::classifier;
use crate::unifier::error::{UnifyError, UnifyResult};
use crate::unifier::mapper;
use crate::unifier::progress::{FileOutcome, FileProgress, NoOpProgressReporter, ProgressReporter};
use crate::unifier::reader::EncodingReader;
use crate::unifier::sniffer;
use crate::unifier::validator;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct UnifierPipeline {
    config: UnifierConfig,
    reporter: Box<dyn ProgressReporter>,
}

impl UnifierPipeline {
    pub fn new(config: UnifierConfig) -> Self {
        Self::with_reporter(config, Box::new(NoOpProgressReporter))
    }

    pub fn with_reporter(config: UnifierConfig, reporter: Box<dyn ProgressReporter>) -> Self {
        Self { config, reporter }
    }

    /// Run the pipeline over `files` in discovery order.
    ///
    /// No per-file failure ever aborts the run; the only run-level error is
    /// failing to write the final output file.
    pub fn run(&self, files: &[PathBuf]) -> UnifyResult<UnifyReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        info!(
            batch_id = %batch_id,
            total_files = files.len(),
            "starting unification run"
        );

        let mut batches: Vec<Vec<CanonicalRecord>> = Vec::new();
        let mut skipped_unclassified = 0usize;
        let mut skipped_unreadable = 0usize;
        let mut skipped_no_overlap = 0usize;
        let mut failed_files = 0usize;

        for (idx, path) in files.iter().enumerate() {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            let outcome = match self.process_file(path, &file_name) {
                Ok(batch) => {
                    let rows = batch.len();
                    batches.push(batch);
                    FileOutcome::Imported { rows }
                }
                Err(err) => Self::outcome_for(&file_name, err),
            };

            match &outcome {
                FileOutcome::Imported { .. } => {}
                FileOutcome::SkippedUnclassified => skipped_unclassified += 1,
                FileOutcome::SkippedUnreadable => skipped_unreadable += 1,
                FileOutcome::SkippedNoOverlap => skipped_no_overlap += 1,
                FileOutcome::Failed { .. } => failed_files += 1,
            }

            self.reporter.on_file(&FileProgress {
                index: idx + 1,
                total: files.len(),
                file_name,
                outcome,
            });
        }

        // Aggregation barrier: all batches are in before pruning and sorting.
        let files_contributed = batches.len();
        let (disposition, total_rows, output_path) = if batches.is_empty() {
            info!("no data processed, output file not written");
            (RunDisposition::NoData, 0, None)
        } else {
            let dataset = aggregator::finalize(batches);
            aggregator::write_csv(&dataset, &self.config.output_path)?;
            info!(
                output = %self.config.output_path.display(),
                rows = dataset.len(),
                files_contributed,
                "unified dataset written"
            );
            (
                RunDisposition::Completed {
                    files_contributed,
                    total_rows: dataset.len(),
                },
                dataset.len(),
                Some(self.config.output_path.clone()),
            )
        };

        self.reporter.on_finished(&disposition);

        let report = UnifyReport {
            batch_id,
            total_files: files.len(),
            files_contributed,
            total_rows,
            skipped_unclassified,
            skipped_unreadable,
            skipped_no_overlap,
            failed_files,
            disposition,
            output_path,
            started_at,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            batch_id = %report.batch_id,
            files_contributed = report.files_contributed,
            total_rows = report.total_rows,
            elapsed_ms = report.elapsed_ms,
            "unification run finished"
        );

        Ok(report)
    }

    /// Process one file through the full per-file state machine.
    fn process_file(&self, path: &Path, file_name: &str) -> UnifyResult<Vec<CanonicalRecord>> {
        let provider = classifier::classify(file_name)
            .ok_or_else(|| UnifyError::UnknownProvider(file_name.to_string()))?;
        info!(file = file_name, provider = %provider, "provider classified");

        let delimiter = sniffer::sniff_file(path, self.config.sniff_sample_len)?;
        info!(
            file = file_name,
            delimiter = %(delimiter as char).escape_default(),
            "delimiter detected"
        );

        let mut table = EncodingReader::new(delimiter).read(path)?;
        info!(
            file = file_name,
            encoding = table.encoding,
            rows = table.rows.len(),
            skipped_rows = table.skipped_rows,
            "file parsed"
        );

        let schema = SchemaDefinition::for_provider(provider);
        validator::reconcile(&mut table, schema, file_name)?;

        let batch = mapper::map_table(&table, schema);
        info!(file = file_name, rows = batch.len(), "rows mapped");
        Ok(batch)
    }

    /// Convert a per-file error into its terminal skip outcome.
    fn outcome_for(file_name: &str, err: UnifyError) -> FileOutcome {
        match err {
            UnifyError::UnknownProvider(_) => {
                info!(file = file_name, "no provider marker, skipping");
                FileOutcome::SkippedUnclassified
            }
            UnifyError::EncodingExhausted(_) => {
                error!(file = file_name, "unreadable with every encoding, skipping");
                FileOutcome::SkippedUnreadable
            }
            UnifyError::NoSchemaOverlap { provider, .. } => {
                info!(
                    file = file_name,
                    provider = %provider,
                    "no expected column present, skipping"
                );
                FileOutcome::SkippedNoOverlap
            }
            other => {
                warn!(file = file_name, error = %other, "file processing failed, skipping");
                FileOutcome::Failed {
                    reason: other.to_string(),
                }
            }
        }
    }
}
