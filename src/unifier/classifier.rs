// ==========================================
// Survey Unifier - Provider classifier
// ==========================================
// Maps a filename to a provider by marker containment, in the fixed
// priority order of PROVIDER_MARKERS. A miss is a skip signal for the
// file, not an error of the run.
// ==========================================

use crate::domain::provider::{ProviderType, PROVIDER_MARKERS};

/// Classify a filename against the known provider markers.
///
/// The filename is uppercased and each marker is tested for substring
/// containment in declared order; the first match wins.
pub fn classify(file_name: &str) -> Option<ProviderType> {
    let upper = file_name.to_uppercase();
    PROVIDER_MARKERS
        .iter()
        .find(|(marker, _)| upper.contains(marker))
        .map(|(_, provider)| *provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_marker() {
        assert_eq!(
            classify("survey_FIBRASIL_2024.csv"),
            Some(ProviderType::Fibrasil)
        );
        assert_eq!(classify("lote3_ATC.csv"), Some(ProviderType::Atc));
        assert_eq!(classify("export_VTAL_sp.csv"), Some(ProviderType::Vtal));
        assert_eq!(classify("base_IHS.csv"), Some(ProviderType::Ihs));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("survey_fibrasil.csv"), Some(ProviderType::Fibrasil));
        assert_eq!(classify("Survey_Vtal.CSV"), Some(ProviderType::Vtal));
    }

    #[test]
    fn test_classify_priority_order() {
        // _ATC is tested before _VTAL, so a filename carrying both markers
        // classifies as ATC.
        assert_eq!(classify("x_ATC_VTAL.csv"), Some(ProviderType::Atc));
        assert_eq!(classify("x_VTAL_ATC.csv"), Some(ProviderType::Atc));
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("enderecos.csv"), None);
        // Marker requires the leading underscore.
        assert_eq!(classify("VTAL.csv"), None);
    }
}
