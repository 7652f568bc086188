// ==========================================
// Survey Unifier - Domain layer
// ==========================================
// Entities and fixed tables: provider types, per-provider schemas, the
// canonical record shape and run reports. No parsing or I/O logic here.
// ==========================================

pub mod provider;
pub mod record;
pub mod schema;

pub use provider::{ProviderType, PROVIDER_MARKERS};
pub use record::{CanonicalRecord, RunDisposition, UnifyReport};
pub use schema::{CanonicalSlot, SchemaDefinition};
