//! Vocabulary loading utilities
//!
//! Provides functions to load vocabularies from files or from the embedded constant.
//!
//! File format: a `[Theme]` line starts a theme, and each following `WORD|clue` line
//! adds an entry to it. Blank lines and lines starting with `#` are ignored.

use super::{Theme, Vocabulary};
use crate::core::WordEntry;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for vocabulary files
#[derive(Debug)]
pub enum VocabularyError {
    Io(io::Error),
    EntryBeforeTheme { line: usize },
    MissingClue { line: usize },
    Empty,
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read vocabulary: {e}"),
            Self::EntryBeforeTheme { line } => {
                write!(f, "Line {line}: entry appears before any [theme] header")
            }
            Self::MissingClue { line } => write!(f, "Line {line}: expected WORD|clue"),
            Self::Empty => write!(f, "Vocabulary contains no usable themes"),
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VocabularyError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a vocabulary from a file
///
/// Invalid words are skipped; structural problems are errors.
///
/// # Errors
///
/// Returns `VocabularyError` if the file cannot be read, is malformed, or yields no
/// theme with at least one valid entry.
///
/// # Examples
/// ```no_run
/// use crucigrama::vocabulary::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/vocabulary.txt").unwrap();
/// println!("Loaded {} themes", vocabulary.themes().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, VocabularyError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse vocabulary text
///
/// # Errors
///
/// See [`load_from_file`].
pub fn parse(content: &str) -> Result<Vocabulary, VocabularyError> {
    let mut themes: Vec<Theme> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            themes.push(Theme::new(name.trim(), Vec::new()));
            continue;
        }

        let (word, clue) = trimmed
            .split_once('|')
            .ok_or(VocabularyError::MissingClue { line: line_no })?;
        let theme = themes
            .last_mut()
            .ok_or(VocabularyError::EntryBeforeTheme { line: line_no })?;

        if let Ok(entry) = WordEntry::new(word, clue) {
            theme.entries.push(entry);
        }
    }

    let vocabulary = Vocabulary::new(themes);
    if vocabulary.is_empty() {
        return Err(VocabularyError::Empty);
    }
    Ok(vocabulary)
}

/// Convert the embedded table to a `Vocabulary`
///
/// # Examples
/// ```
/// use crucigrama::vocabulary::loader::vocabulary_from_slice;
/// use crucigrama::vocabulary::VOCABULARY;
///
/// let vocabulary = vocabulary_from_slice(VOCABULARY);
/// assert_eq!(vocabulary.themes().len(), VOCABULARY.len());
/// ```
#[must_use]
pub fn vocabulary_from_slice(slice: &[(&str, &[(&str, &str)])]) -> Vocabulary {
    let themes = slice
        .iter()
        .map(|&(name, entries)| {
            let entries = entries
                .iter()
                .filter_map(|&(word, clue)| WordEntry::new(word, clue).ok())
                .collect();
            Theme::new(name, entries)
        })
        .collect();
    Vocabulary::new(themes)
}
