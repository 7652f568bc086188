// ==========================================
// Survey Unifier - CLI entry point
// ==========================================
// Usage: survey-unifier [DIRECTORY] [OUTPUT_FILE]
// Discovers .csv files recursively under DIRECTORY (default: current
// directory) and writes the unified dataset to OUTPUT_FILE (default:
// planilha_unificada.csv).
// ==========================================

use anyhow::Context;
use std::path::{Path, PathBuf};
use survey_unifier::domain::RunDisposition;
use survey_unifier::unifier::progress::{FileProgress, ProgressReporter};
use survey_unifier::{logging, UnifierConfig, UnifierPipeline};
use walkdir::WalkDir;

/// Reporter that mirrors pipeline progress to the console.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_file(&self, progress: &FileProgress) {
        println!(
            "[{}/{}] {} - {}",
            progress.index,
            progress.total,
            progress.file_name,
            progress.outcome.as_str()
        );
    }

    fn on_finished(&self, disposition: &RunDisposition) {
        match disposition {
            RunDisposition::Completed {
                files_contributed,
                total_rows,
            } => println!(
                "Done: {} file(s) contributed, {} row(s) written.",
                files_contributed, total_rows
            ),
            RunDisposition::NoData => {
                println!("No data processed. Check the logs for details.")
            }
        }
    }
}

/// Recursively discover .csv files, sorted for a deterministic run order.
fn discover_csv_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", survey_unifier::APP_NAME, survey_unifier::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let root = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let mut config = UnifierConfig::default();
    if let Some(output) = args.next() {
        config.output_path = PathBuf::from(output);
    }

    let files = discover_csv_files(&root);
    tracing::info!(root = %root.display(), total = files.len(), "csv files discovered");
    println!("Found {} csv file(s) under {}", files.len(), root.display());

    let pipeline = UnifierPipeline::with_reporter(config, Box::new(ConsoleReporter));
    let report = pipeline
        .run(&files)
        .context("unification run failed")?;

    let report_json = report.to_json().context("serializing run report")?;
    tracing::info!(report = %report_json, "run report");
    Ok(())
}
