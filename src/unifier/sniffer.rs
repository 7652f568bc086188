// ==========================================
// Survey Unifier - Delimiter sniffer
// ==========================================
// Detects the field separator from the first bytes of a file. Ties,
// including the all-zero case, resolve to the first candidate (comma);
// that is the documented fallback, not an error.
// ==========================================

use crate::unifier::error::UnifyResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Candidate separators in tie-break order.
pub const DELIMITER_CANDIDATES: [u8; 3] = [b',', b';', b'\t'];

/// Sample size read from the head of the file.
pub const SNIFF_SAMPLE_LEN: usize = 1024;

/// Detect the delimiter from the first `sample_len` bytes of `path`.
pub fn sniff_file(path: &Path, sample_len: usize) -> UnifyResult<u8> {
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; sample_len];
    let n = file.read(&mut buf)?;
    buf.truncate(n);

    // Permissive decode: invalid byte sequences must never fail sniffing.
    let sample = String::from_utf8_lossy(&buf);
    Ok(sniff_sample(&sample))
}

/// Count each candidate in the sample and return the most frequent one.
pub fn sniff_sample(sample: &str) -> u8 {
    let mut best = DELIMITER_CANDIDATES[0];
    let mut best_count = sample.matches(best as char).count();

    for &candidate in &DELIMITER_CANDIDATES[1..] {
        let count = sample.matches(candidate as char).count();
        // Strictly greater keeps the earlier candidate on ties.
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sniff_semicolons() {
        assert_eq!(sniff_sample("uf;municipio;cep\nSP;Santos;11010-000"), b';');
    }

    #[test]
    fn test_sniff_tabs() {
        assert_eq!(sniff_sample("uf\tmunicipio\tcep"), b'\t');
    }

    #[test]
    fn test_sniff_empty_sample_falls_back_to_comma() {
        assert_eq!(sniff_sample(""), b',');
    }

    #[test]
    fn test_sniff_delimiter_free_sample_falls_back_to_comma() {
        assert_eq!(sniff_sample("uma linha sem separador"), b',');
    }

    #[test]
    fn test_sniff_tie_prefers_first_candidate() {
        // One comma, one semicolon: comma wins by candidate order.
        assert_eq!(sniff_sample("a,b;c"), b',');
    }

    #[test]
    fn test_sniff_file_reads_head_only() {
        let mut temp = NamedTempFile::new().unwrap();
        // Semicolons in the head, a flood of commas past the sample window.
        write!(temp, "a;b;c;d\n").unwrap();
        let tail = ",".repeat(4096);
        write!(temp, "{}", tail).unwrap();

        let delim = sniff_file(temp.path(), 8).unwrap();
        assert_eq!(delim, b';');
    }

    #[test]
    fn test_sniff_file_with_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"munic\xEDpio;uf\n").unwrap();

        let delim = sniff_file(temp.path(), SNIFF_SAMPLE_LEN).unwrap();
        assert_eq!(delim, b';');
    }
}
