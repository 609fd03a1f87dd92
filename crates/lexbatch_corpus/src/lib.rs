//! Corpus handling for lexbatch
//!
//! Provides:
//! - **Reader**: line-oriented `"intent","utterance"` parsing with per-line errors
//! - **Grouping**: insertion-ordered partition of records by intent label
//! - **Sanitizing**: length-bounding of sample utterances for the model-building API

pub mod group;
pub mod reader;
pub mod sanitize;
pub mod types;

pub use group::group_records;
pub use reader::{parse_corpus, parse_line, read_corpus, CorpusError, CorpusReport, FormatError};
pub use sanitize::{sanitize_all, sanitize_utterance, MAX_UTTERANCE_CHARS, STRIPPED_CHARS};
pub use types::{IntentGroup, IntentGroups, UtteranceRecord};
