//! Word list loading utilities
//!
//! Reads dictionaries from plain word-per-line files or from delimited tables
//! (such as a tab-separated noun list with a `bare` column). Entries are
//! normalized to uppercase and anything that is not a five-letter word is
//! skipped.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How to read a delimited dictionary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFormat {
    /// Field separator
    pub delimiter: char,
    /// Header name of the column holding the words; `None` means "no header,
    /// use the first field"
    pub column: Option<String>,
}

impl Default for DictionaryFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            column: None,
        }
    }
}

impl DictionaryFormat {
    /// Delimited table with a header row, reading the named column
    #[must_use]
    pub fn with_column(delimiter: char, column: impl Into<String>) -> Self {
        Self {
            delimiter,
            column: Some(column.into()),
        }
    }
}

/// Error type for dictionary loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("column '{column}' not found in header of {origin}")]
    MissingColumn { column: String, origin: String },

    #[error("no five-letter words found in {origin}")]
    NoWords { origin: String },
}

/// Load words from a file with one word per line
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::NoWords` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    load_delimited(path, &DictionaryFormat::default())
}

/// Load words from a delimited file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read,
/// `LoadError::MissingColumn` if the requested column is not in the header and
/// `LoadError::NoWords` if no usable words remain after filtering.
pub fn load_delimited<P: AsRef<Path>>(
    path: P,
    format: &DictionaryFormat,
) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_delimited(&content, format, &path.display().to_string())?;
    info!(path = %path.display(), count = words.len(), "dictionary loaded");
    Ok(words)
}

/// Parse dictionary text that has already been read
///
/// `origin` names the input in error messages.
///
/// # Errors
///
/// Same as [`load_delimited`], minus I/O failures.
pub fn parse_delimited(
    content: &str,
    format: &DictionaryFormat,
    origin: &str,
) -> Result<Vec<Word>, LoadError> {
    // Spreadsheet exports often start with a UTF-8 byte order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();

    let column_index = match &format.column {
        Some(column) => {
            let header = lines.next().unwrap_or_default();
            header
                .split(format.delimiter)
                .position(|name| name.trim() == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: column.clone(),
                    origin: origin.to_string(),
                })?
        }
        None => 0,
    };

    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;
    let mut duplicates = 0usize;
    let mut words = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let Some(field) = line.split(format.delimiter).nth(column_index) else {
            skipped += 1;
            continue;
        };

        match Word::new(field.trim()) {
            Ok(word) if seen.insert(word.text().to_string()) => words.push(word),
            Ok(_) => duplicates += 1,
            Err(_) => skipped += 1,
        }
    }

    debug!(
        origin,
        kept = words.len(),
        skipped,
        duplicates,
        "dictionary parsed"
    );

    if words.is_empty() {
        return Err(LoadError::NoWords {
            origin: origin.to_string(),
        });
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
/// use wordle_filter::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
