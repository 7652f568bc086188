// ==========================================
// Survey Unifier - Unification layer
// ==========================================
// The schema-reconciliation pipeline: one stage per module, consulted in
// order by the pipeline runner. Providers are a fixed set; schemas live in
// the domain layer.
// ==========================================

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod mapper;
pub mod normalizer;
pub mod pipeline;
pub mod progress;
pub mod reader;
pub mod sniffer;
pub mod validator;

pub use error::{UnifyError, UnifyResult};
pub use pipeline::UnifierPipeline;
pub use progress::{FileOutcome, FileProgress, NoOpProgressReporter, ProgressReporter};
pub use reader::{EncodingReader, RawTable};
pub use validator::SchemaCheck;
