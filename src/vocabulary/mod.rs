//! Themed vocabulary
//!
//! Maps theme names to the word entries a round draws from. The built-in vocabulary
//! is embedded at build time; custom vocabularies load from text files.

mod embedded;
pub mod loader;

use crate::core::WordEntry;

pub use embedded::{THEME_COUNT, VOCABULARY};

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    entries: Vec<WordEntry>,
}

impl Theme {
    #[must_use]
    pub fn new(name: impl Into<String>, entries: Vec<WordEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}

/// Read-only collection of themes, kept in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    themes: Vec<Theme>,
}

impl Vocabulary {
    /// Build a vocabulary, discarding themes with no entries
    #[must_use]
    pub fn new(themes: Vec<Theme>) -> Self {
        Self {
            themes: themes.into_iter().filter(|t| !t.entries.is_empty()).collect(),
        }
    }

    /// The vocabulary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        loader::vocabulary_from_slice(VOCABULARY)
    }

    #[inline]
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Look up a theme by name, ignoring case
    #[must_use]
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|t| t.name.to_lowercase() == name.to_lowercase())
    }
}
