//! Generate command
//!
//! Builds a single puzzle without starting a play session.

use crate::core::WordEntry;
use crate::generator::{Generator, Puzzle};
use crate::session::{GameConfig, draw_words};
use crate::vocabulary::Vocabulary;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A generated puzzle and the words it was built from
#[derive(Debug, Serialize)]
pub struct GeneratedPuzzle {
    pub theme: String,
    pub requested: Vec<String>,
    pub puzzle: Puzzle,
}

impl GeneratedPuzzle {
    /// Requested words the generator could not place
    #[must_use]
    pub fn dropped(&self) -> Vec<&str> {
        self.requested
            .iter()
            .filter(|word| !self.puzzle.words.iter().any(|w| w.word() == word.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Draw words (from `theme`, or a random theme) and generate a puzzle
///
/// # Errors
///
/// Returns an error if the named theme does not exist or the vocabulary is empty.
pub fn generate_puzzle<R: Rng>(
    vocabulary: &Vocabulary,
    theme: Option<&str>,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GeneratedPuzzle, String> {
    let (theme_name, words) = if let Some(name) = theme {
        let theme = vocabulary
            .theme(name)
            .ok_or_else(|| format!("Unknown theme '{name}'"))?;
        let mut words: Vec<WordEntry> = theme.entries().to_vec();
        words.shuffle(rng);
        words.truncate(config.word_count);
        (theme.name().to_string(), words)
    } else {
        let (theme, words) = draw_words(vocabulary, config.word_count, rng)
            .ok_or_else(|| "Vocabulary is empty".to_string())?;
        (theme.name().to_string(), words)
    };

    let puzzle = Generator::new(config.width, config.height).generate(&words);

    Ok(GeneratedPuzzle {
        theme: theme_name,
        requested: words.iter().map(|w| w.text().to_string()).collect(),
        puzzle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_from_named_theme() {
        let vocabulary = Vocabulary::embedded();
        let name = vocabulary.themes()[0].name().to_string();
        let mut rng = StdRng::seed_from_u64(4);

        let result =
            generate_puzzle(&vocabulary, Some(&name), &GameConfig::default(), &mut rng).unwrap();
        assert_eq!(result.theme, name);
        assert_eq!(result.requested.len(), 8);
        assert_eq!(
            result.puzzle.words.len() + result.dropped().len(),
            result.requested.len()
        );
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_puzzle(
            &Vocabulary::embedded(),
            Some("no such theme"),
            &GameConfig::default(),
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_vocabulary_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = generate_puzzle(&Vocabulary::default(), None, &GameConfig::default(), &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn same_seed_same_puzzle() {
        let vocabulary = Vocabulary::embedded();
        let config = GameConfig::default();
        let a = generate_puzzle(&vocabulary, None, &config, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = generate_puzzle(&vocabulary, None, &config, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a.theme, b.theme);
        assert_eq!(a.puzzle, b.puzzle);
    }

    #[test]
    fn serializes_to_json() {
        let vocabulary = Vocabulary::embedded();
        let mut rng = StdRng::seed_from_u64(2);
        let result = generate_puzzle(&vocabulary, None, &GameConfig::default(), &mut rng).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        let first = &json["puzzle"]["words"][0];
        assert_eq!(first["number"], 1);
        assert_eq!(first["direction"], "across");
        assert!(first["text"].is_string());
        assert!(first["clue"].is_string());
    }
}
