//! File reading and tokenization.
//!
//! `read_text` maps I/O failures onto the `IngestError` taxonomy so each
//! utility can report the exact cause. The tokenizers apply the filters
//! from [`crate::filter`]; skipped tokens are reported immediately at
//! `warn` and never interrupt processing, except for the statistics
//! fail-fast path on a post-filter parse error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use textkit_model::{IngestError, Result};

use crate::filter::{is_all_digits, is_alphabetic_word, is_loose_numeric};

/// Read the whole input file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| map_read_error(path, source))?;
    String::from_utf8(bytes).map_err(|_| IngestError::Decode {
        path: path.to_path_buf(),
    })
}

fn map_read_error(path: &Path, source: std::io::Error) -> IngestError {
    let path = path.to_path_buf();
    match source.kind() {
        ErrorKind::NotFound => IngestError::NotFound { path },
        ErrorKind::PermissionDenied => IngestError::PermissionDenied { path },
        ErrorKind::InvalidData => IngestError::Decode { path },
        _ => IngestError::Io { path, source },
    }
}

/// Collect the numeric sample set for the statistics utility.
///
/// Lines passing the loose filter must parse as `f64`; a residual parse
/// failure aborts the whole run. Blank lines are dropped silently,
/// anything else is skipped with a diagnostic.
pub fn numeric_samples(text: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let token = line.trim();
        if is_loose_numeric(token) {
            let value = token
                .parse::<f64>()
                .map_err(|_| IngestError::InvalidNumber {
                    line: index + 1,
                    value: token.to_string(),
                })?;
            samples.push(value);
        } else if !token.is_empty() {
            warn!("invalid data encountered and skipped: {token}");
        }
    }
    Ok(samples)
}

/// Collect the integers for the converter, skipping anything that is not
/// all digits (or that overflows u128) with an immediate diagnostic.
pub fn digit_lines(text: &str) -> Vec<u128> {
    let mut numbers = Vec::new();
    for line in text.lines() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if !is_all_digits(token) {
            warn!("invalid data encountered and skipped: {token}");
            continue;
        }
        match token.parse::<u128>() {
            Ok(number) => numbers.push(number),
            // all-digit but wider than u128
            Err(_) => warn!("invalid data encountered and skipped: {token}"),
        }
    }
    numbers
}

/// Collect lowercased alphabetic words for the word-count utility,
/// skipping every non-alphabetic token with a diagnostic.
pub fn alphabetic_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for line in text.lines() {
        for token in line.split_whitespace() {
            if is_alphabetic_word(token) {
                words.push(token.to_lowercase());
            } else {
                warn!("invalid data encountered and skipped: {token}");
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_text_reports_missing_file() {
        let error = read_text(Path::new("no-such-file.txt")).unwrap_err();
        assert!(matches!(error, IngestError::NotFound { .. }));
    }

    #[test]
    fn read_text_reports_decoding_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xE9]).expect("write bytes");
        let error = read_text(&path).unwrap_err();
        assert!(matches!(error, IngestError::Decode { .. }));
    }

    #[test]
    fn numeric_samples_keeps_qualifying_lines_only() {
        let samples = numeric_samples("1\n2.5\n\n-3\nabc\n4\n").expect("ingest");
        assert_eq!(samples, vec![1.0, 2.5, 4.0]);
    }

    #[test]
    fn digit_lines_skip_mixed_tokens_and_continue() {
        let numbers = digit_lines("7\n12a\n255\n3.14\n");
        assert_eq!(numbers, vec![7, 255]);
    }

    #[test]
    fn digit_lines_skip_values_wider_than_u128() {
        let numbers = digit_lines("1\n340282366920938463463374607431768211456\n2\n");
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn alphabetic_words_lowercase_and_skip_punctuation() {
        let words = alphabetic_words("The cat sat. The CAT ran");
        assert_eq!(words, vec!["the", "cat", "the", "cat", "ran"]);
    }
}
