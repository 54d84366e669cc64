// File: src/corpus.rs
use crate::errors::{AnalyzerError, Result};
use std::fs;
use std::path::Path;

/// Splits corpus text into records.
///
/// Spaces are removed everywhere first, so `### happy, cat` and `( T_T )`
/// read the same as their compact forms. Records are separated by newlines
/// and tabs; a trailing carriage return is dropped. Empty records are kept so
/// they count as processed.
pub fn split_records(text: &str) -> Vec<String> {
    text.replace(' ', "")
        .split(['\n', '\t'])
        .map(|record| record.strip_suffix('\r').unwrap_or(record).to_string())
        .collect()
}

/// Reads the whole corpus into memory. An unreadable corpus is fatal.
pub fn read_corpus(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| AnalyzerError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_records(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces_and_splits_lines_and_tabs() {
        let records = split_records("### happy, cat\n( T_T )\t(^_^)\r\n");
        assert_eq!(records, vec!["###happy,cat", "(T_T)", "(^_^)", ""]);
    }

    #[test]
    fn missing_corpus_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_corpus(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AnalyzerError::CorpusRead { .. }));
    }
}
