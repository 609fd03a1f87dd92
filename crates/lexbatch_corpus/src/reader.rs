//! Corpus reader.
//!
//! One record per line: `"<intent>","<utterance>"`. Quotes are optional and
//! stripped everywhere on the line; only the first comma separates fields.

use crate::types::UtteranceRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

const FIELD_DELIMITER: char = ',';

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Cannot read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A corpus line that could not be split into intent and utterance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: expected \"intent\",\"utterance\" but found no comma in '{content}'")]
pub struct FormatError {
    /// 1-based line number in the corpus file
    pub line: usize,
    pub content: String,
}

/// Parsed corpus: accepted records in file order plus rejected lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    pub records: Vec<UtteranceRecord>,
    pub rejected: Vec<FormatError>,
}

impl CorpusReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a single corpus line.
pub fn parse_line(line_no: usize, text: &str) -> Result<UtteranceRecord, FormatError> {
    let unquoted = text.replace('"', "");
    match unquoted.split_once(FIELD_DELIMITER) {
        Some((intent, utterance)) => Ok(UtteranceRecord::new(intent.trim(), utterance.trim())),
        None => Err(FormatError {
            line: line_no,
            content: text.to_string(),
        }),
    }
}

/// Parse an in-memory corpus.
pub fn parse_corpus(text: &str) -> CorpusReport {
    let mut report = CorpusReport::default();
    for (idx, line) in text.lines().enumerate() {
        accept_line(&mut report, idx + 1, line);
    }
    report
}

/// Read and parse the corpus file at `path`.
///
/// Only a failure to open the file is an error. Lines are decoded lossily, so
/// invalid UTF-8 never drops a record, and a read failure part way through
/// keeps every line read before it.
pub fn read_corpus(path: &Path) -> Result<CorpusReport, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_lines(BufReader::new(file), path))
}

fn read_lines<R: BufRead>(mut reader: R, path: &Path) -> CorpusReport {
    let mut report = CorpusReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                line_no += 1;
                let text = String::from_utf8_lossy(trim_line_ending(&buf));
                accept_line(&mut report, line_no, &text);
            }
            Err(err) => {
                tracing::error!(
                    path = %path.display(),
                    line = line_no + 1,
                    error = %err,
                    "Corpus read failed; keeping lines read so far"
                );
                break;
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = report.records.len(),
        rejected = report.rejected.len(),
        "Corpus loaded"
    );
    report
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn accept_line(report: &mut CorpusReport, line_no: usize, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    match parse_line(line_no, line) {
        Ok(record) => report.records.push(record),
        Err(err) => report.rejected.push(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_parse_line_strips_quotes_and_trims() {
        let record = parse_line(1, r#" "greeting" , "hi there" "#).unwrap();
        assert_eq!(record, UtteranceRecord::new("greeting", "hi there"));
    }

    #[test]
    fn test_parse_line_splits_on_first_comma_only() {
        let record = parse_line(1, r#""order","one, two, three""#).unwrap();
        assert_eq!(record.intent, "order");
        assert_eq!(record.utterance, "one, two, three");
    }

    #[test]
    fn test_parse_line_without_comma_is_format_error() {
        let err = parse_line(7, "no delimiter here").unwrap_err();
        assert_eq!(err.line, 7);
        assert_eq!(err.content, "no delimiter here");
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_parse_corpus_skips_blank_lines_and_collects_rejects() {
        let text = "\"greeting\",\"hi\"\n\n   \nbroken line\n\"farewell\",\"bye\"\n";
        let report = parse_corpus(text);
        assert_eq!(
            report.records,
            vec![
                UtteranceRecord::new("greeting", "hi"),
                UtteranceRecord::new("farewell", "bye"),
            ]
        );
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 4);
    }

    struct FailAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_read_failure_keeps_earlier_lines() {
        let reader = BufReader::new(FailAfter {
            data: Cursor::new(b"greeting,hi\r\nfarewell,bye\n".to_vec()),
        });
        let report = read_lines(reader, Path::new("corpus.csv"));
        assert_eq!(
            report.records,
            vec![
                UtteranceRecord::new("greeting", "hi"),
                UtteranceRecord::new("farewell", "bye"),
            ]
        );
    }

    #[test]
    fn test_empty_utterance_is_kept() {
        let record = parse_line(1, "greeting,").unwrap();
        assert_eq!(record.intent, "greeting");
        assert_eq!(record.utterance, "");
    }
}
