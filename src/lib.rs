// ==========================================
// Survey Unifier - Core library
// ==========================================
// Unifies address survey exports from four providers (FIBRASIL, ATC, VTAL,
// IHS), each with its own CSV schema, into one canonical address table.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and schema tables
pub mod domain;

// Unification layer - the per-file pipeline and aggregation
pub mod unifier;

// Configuration
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use config::{UnifierConfig, OUTPUT_FILE_NAME};
pub use domain::{
    CanonicalRecord, CanonicalSlot, ProviderType, RunDisposition, SchemaDefinition, UnifyReport,
};
pub use unifier::{
    FileOutcome, FileProgress, NoOpProgressReporter, ProgressReporter, UnifierPipeline,
    UnifyError, UnifyResult,
};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Survey Unifier";
