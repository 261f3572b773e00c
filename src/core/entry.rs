//! Vocabulary entry representation
//!
//! A `WordEntry` stores an uppercase-normalized word, its letters, and the clue shown to the player.

use serde::Serialize;
use std::fmt;

/// A crossword answer paired with its clue
///
/// Letters are stored as `char`s so that words like `ARAÑA` keep one slot per letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    text: String,
    #[serde(skip)]
    letters: Vec<char>,
    clue: String,
}

/// Error type for invalid vocabulary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    Empty,
    InvalidCharacters(String),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' must contain only alphabetic characters")
            }
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create a new entry from a word and its clue
    ///
    /// The word is trimmed and uppercased; the clue is trimmed.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word is empty after trimming
    /// - The word contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use crucigrama::core::WordEntry;
    ///
    /// let entry = WordEntry::new("araña", "Tece unha tea").unwrap();
    /// assert_eq!(entry.text(), "ARAÑA");
    /// assert_eq!(entry.len(), 5);
    ///
    /// assert!(WordEntry::new("", "nada").is_err());
    /// assert!(WordEntry::new("r2d2", "robot").is_err());
    /// ```
    pub fn new(word: &str, clue: &str) -> Result<Self, EntryError> {
        let text = word.trim().to_uppercase();

        if text.is_empty() {
            return Err(EntryError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(EntryError::InvalidCharacters(text));
        }

        let letters = text.chars().collect();

        Ok(Self {
            text,
            letters,
            clue: clue.trim().to_string(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed entry; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("GAITA", "Instrumento de fol").unwrap();
        assert_eq!(entry.text(), "GAITA");
        assert_eq!(entry.clue(), "Instrumento de fol");
        assert_eq!(entry.letters(), &['G', 'A', 'I', 'T', 'A']);
    }

    #[test]
    fn entry_creation_uppercase_normalized() {
        let entry = WordEntry::new("  gaita ", " clue ").unwrap();
        assert_eq!(entry.text(), "GAITA");
        assert_eq!(entry.clue(), "clue");
    }

    #[test]
    fn entry_counts_letters_not_bytes() {
        let entry = WordEntry::new("castaña", "").unwrap();
        assert_eq!(entry.text(), "CASTAÑA");
        assert_eq!(entry.len(), 7);
        assert_eq!(entry.letters()[5], 'Ñ');
    }

    #[test]
    fn entry_creation_invalid() {
        assert_eq!(WordEntry::new("   ", "x"), Err(EntryError::Empty));
        assert!(matches!(
            WordEntry::new("two words", "x"),
            Err(EntryError::InvalidCharacters(_))
        ));
        assert!(WordEntry::new("abc1", "x").is_err());
        assert!(WordEntry::new("a-b", "x").is_err());
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("porto", "").unwrap();
        assert_eq!(format!("{entry}"), "PORTO");
    }
}
