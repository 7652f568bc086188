// ==========================================
// Survey Unifier - Provider types
// ==========================================
// The four survey sources are a fixed, closed set. Filename markers are
// checked in declared order; the first match wins.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Survey data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    Fibrasil,
    Atc,
    Vtal,
    Ihs,
}

impl ProviderType {
    /// Literal provider tag stamped into the `prestador` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Fibrasil => "FIBRASIL",
            ProviderType::Atc => "ATC",
            ProviderType::Vtal => "VTAL",
            ProviderType::Ihs => "IHS",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filename markers in match-priority order.
///
/// Priority is a data fact: classification walks this list and returns the
/// first marker contained in the uppercased filename.
pub const PROVIDER_MARKERS: [(&str, ProviderType); 4] = [
    ("_FIBRASIL", ProviderType::Fibrasil),
    ("_ATC", ProviderType::Atc),
    ("_VTAL", ProviderType::Vtal),
    ("_IHS", ProviderType::Ihs),
];
