// ==========================================
// Survey Unifier - Column name normalizer
// ==========================================
// Canonicalizes raw header names so that comparisons are insensitive to
// diacritics, case and spacing. Applied identically to file headers and to
// the expected-column lists of every schema.
// ==========================================

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a raw header name.
///
/// NFD-decomposes the string, drops combining marks, trims surrounding
/// whitespace, lowercases and replaces spaces with underscores. Idempotent:
/// normalizing an already-normalized name is a no-op.
pub fn normalize_column(raw: &str) -> String {
    let stripped: String = raw.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_diacritics() {
        assert_eq!(normalize_column("Número"), "numero");
        assert_eq!(normalize_column("Município"), "municipio");
        assert_eq!(normalize_column("estação abastecedora"), "estacao_abastecedora");
    }

    #[test]
    fn test_normalize_trim_case_spaces() {
        assert_eq!(normalize_column("  Survey Endereco  "), "survey_endereco");
        assert_eq!(normalize_column("CEP"), "cep");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Número", "  Logradouro Nome ", "cod_survey", "UF", "ç Ç ã"] {
            let once = normalize_column(raw);
            assert_eq!(normalize_column(&once), once);
        }
    }

    #[test]
    fn test_diacritic_variants_collapse() {
        assert_eq!(normalize_column("Número"), normalize_column("numero"));
        assert_eq!(normalize_column("Código IBGE"), normalize_column("codigo ibge"));
    }
}
