//! Word-list loading.
//!
//! The search structures consume an already-materialized collection of
//! words; turning a file into that collection is this module's whole job.
//! Lines are trimmed and blank lines dropped, with no case folding or
//! alphabet filtering: the core is alphabet-agnostic and takes the
//! dictionary as-is.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Failure to materialize a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The file could not be opened or read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a word list from a file, one word per line.
///
/// Order is preserved; surrounding whitespace is trimmed and empty lines are
/// skipped.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
