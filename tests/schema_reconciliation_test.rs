// ==========================================
// Survey Unifier - Schema reconciliation tests
// ==========================================
// Encoding fallback, delimiter sniffing, schema widening and empty-row
// pruning, exercised through full pipeline runs.
// ==========================================

use std::io::Write;
use std::path::{Path, PathBuf};
use survey_unifier::domain::RunDisposition;
use survey_unifier::{UnifierConfig, UnifierPipeline};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

fn run_one(dir: &Path, file: PathBuf) -> (RunDisposition, Vec<String>) {
    let config = UnifierConfig {
        output_path: dir.join("planilha_unificada.csv"),
        ..UnifierConfig::default()
    };
    let report = UnifierPipeline::new(config).run(&[file]).unwrap();

    let lines = if report.output_path.is_some() {
        let bytes = std::fs::read(dir.join("planilha_unificada.csv")).unwrap();
        String::from_utf8(bytes[3..].to_vec())
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    } else {
        Vec::new()
    };
    (report.disposition, lines)
}

#[test]
fn test_latin1_semicolon_file_is_recovered() {
    survey_unifier::logging::init_test();
    let dir = tempdir().unwrap();
    // Semicolon-delimited VTAL export saved as latin1: 0xE3 = "ã", 0xED = "í".
    let file = write_file(
        dir.path(),
        "survey_VTAL_sp.csv",
        b"uf;munic\xEDpio;cep;logradouro;num_fachada;bairro\n\
          SP;S\xE3o Paulo;01310-100;Avenida Paulista;1578;Bela Vista\n",
    );

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(
        disposition,
        RunDisposition::Completed {
            files_contributed: 1,
            total_rows: 1
        }
    );
    assert_eq!(
        lines[1],
        "VTAL,01310-100,1578,Avenida Paulista,SP,São Paulo,Bela Vista,"
    );
}

#[test]
fn test_missing_expected_columns_are_widened_not_skipped() {
    let dir = tempdir().unwrap();
    // Only two expected ATC columns present; the rest must be synthesized.
    let file = write_file(
        dir.path(),
        "parcial_ATC.csv",
        b"cep,uf\n40000-000,BA\n",
    );

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(
        disposition,
        RunDisposition::Completed {
            files_contributed: 1,
            total_rows: 1
        }
    );
    // Unmapped slots stay empty strings in the canonical row.
    assert_eq!(lines[1], "ATC,40000-000,,,BA,,,");
}

#[test]
fn test_rows_with_no_canonical_content_are_pruned() {
    let dir = tempdir().unwrap();
    // First data row only fills columns outside the rename table, so its
    // canonical record is all-empty and must be pruned.
    let file = write_file(
        dir.path(),
        "lote_IHS.csv",
        b"codigo_ibge,cep\n3550308,\n3550308,01000-000\n",
    );

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(
        disposition,
        RunDisposition::Completed {
            files_contributed: 1,
            total_rows: 1
        }
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("IHS,01000-000"));
}

#[test]
fn test_all_rows_pruned_still_writes_header() {
    let dir = tempdir().unwrap();
    // The only expected column present is never renamed, so every mapped
    // record is content-empty and pruned. The file still contributes, and
    // the output must carry the canonical header even with zero rows.
    let file = write_file(
        dir.path(),
        "lote_FIBRASIL.csv",
        b"codigo_ibge\n3550308\n",
    );

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(
        disposition,
        RunDisposition::Completed {
            files_contributed: 1,
            total_rows: 0
        }
    );
    assert_eq!(
        lines,
        vec!["prestador,cep,numero,logradouro,estado,cidade,bairro,complemento"]
    );
}

#[test]
fn test_header_diacritics_match_expected_schema() {
    let dir = tempdir().unwrap();
    // Accented/cased headers normalize onto the expected column names.
    let file = write_file(
        dir.path(),
        "acentos_VTAL.csv",
        "UF,Município,CEP,Logradouro\nRJ,Niterói,24000-000,Rua da Praia\n".as_bytes(),
    );

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(
        disposition,
        RunDisposition::Completed {
            files_contributed: 1,
            total_rows: 1
        }
    );
    assert_eq!(lines[1], "VTAL,24000-000,,Rua da Praia,RJ,Niterói,,");
}

#[test]
fn test_overlong_rows_dropped_file_still_contributes() {
    let dir = tempdir().unwrap();
    let file = write_file(
        dir.path(),
        "quebrado_ATC.csv",
        b"uf,municipio,cep\n\
          SP,Santos,11010-000\n\
          SP,Santos,11010-000,extra,extra\n\
          RJ,Rio de Janeiro,20000-000\n",
    );

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(
        disposition,
        RunDisposition::Completed {
            files_contributed: 1,
            total_rows: 2
        }
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_no_overlap_single_file_yields_no_data() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "alheio_FIBRASIL.csv", b"foo,bar\n1,2\n");

    let (disposition, lines) = run_one(dir.path(), file);
    assert_eq!(disposition, RunDisposition::NoData);
    assert!(lines.is_empty());
}
