//! Letter rack construction and bookkeeping
//!
//! A rack holds the target word's letters plus random distractors, shuffled once.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashMap;

/// Letters distractors are drawn from, including `Ñ`
pub const DISTRACTOR_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Distractors added to each rack
pub const DEFAULT_DISTRACTORS: usize = 3;

/// Build a shuffled rack from a word's letters plus `distractors` random letters
///
/// Distractors are drawn uniformly and independently, so one may repeat a word letter.
pub fn build_rack<R: Rng + ?Sized>(letters: &[char], distractors: usize, rng: &mut R) -> Vec<char> {
    let mut rack = Vec::with_capacity(letters.len() + distractors);
    rack.extend_from_slice(letters);
    for _ in 0..distractors {
        if let Some(&letter) = DISTRACTOR_ALPHABET.choose(rng) {
            rack.push(letter);
        }
    }
    rack.shuffle(rng);
    rack
}

/// Pair each rack letter with whether the guess already uses it
///
/// For repeated letters, the leftmost copies in the rack are marked used first.
#[must_use]
pub fn mark_used(rack: &[char], guess: &[Option<char>]) -> Vec<(char, bool)> {
    let mut used = letter_counts(guess.iter().flatten().copied());
    rack.iter()
        .map(|&letter| match used.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                (letter, true)
            }
            _ => (letter, false),
        })
        .collect()
}

/// How many more copies of `letter` the rack can supply for this guess
#[must_use]
pub fn remaining(rack: &[char], guess: &[Option<char>], letter: char) -> usize {
    let in_rack = rack.iter().filter(|&&c| c == letter).count();
    let in_guess = guess.iter().filter(|&&c| c == Some(letter)).count();
    in_rack.saturating_sub(in_guess)
}

fn letter_counts(letters: impl Iterator<Item = char>) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rack_contains_word_letters_plus_distractors() {
        let mut rng = StdRng::seed_from_u64(7);
        let word: Vec<char> = "ARAÑA".chars().collect();
        let rack = build_rack(&word, DEFAULT_DISTRACTORS, &mut rng);

        assert_eq!(rack.len(), word.len() + DEFAULT_DISTRACTORS);

        let mut rack_counts = letter_counts(rack.iter().copied());
        for letter in &word {
            let count = rack_counts.get_mut(letter).unwrap();
            assert!(*count > 0);
            *count -= 1;
        }
        let leftovers: usize = rack_counts.values().sum();
        assert_eq!(leftovers, DEFAULT_DISTRACTORS);
        assert!(rack.iter().all(|c| DISTRACTOR_ALPHABET.contains(c)));
    }

    #[test]
    fn rack_is_reproducible_with_same_seed() {
        let word: Vec<char> = "GAITA".chars().collect();
        let a = build_rack(&word, 3, &mut StdRng::seed_from_u64(42));
        let b = build_rack(&word, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn rack_without_distractors_is_a_permutation() {
        let word: Vec<char> = "PORTO".chars().collect();
        let mut rack = build_rack(&word, 0, &mut StdRng::seed_from_u64(1));
        rack.sort_unstable();
        let mut sorted = word.clone();
        sorted.sort_unstable();
        assert_eq!(rack, sorted);
    }

    #[test]
    fn mark_used_marks_leftmost_copies() {
        let rack = ['A', 'B', 'A', 'C'];
        let guess = [Some('A'), None, Some('C')];
        assert_eq!(
            mark_used(&rack, &guess),
            vec![('A', true), ('B', false), ('A', false), ('C', true)]
        );
    }

    #[test]
    fn remaining_counts_unused_copies() {
        let rack = ['A', 'B', 'A'];
        let guess = [Some('A'), None];
        assert_eq!(remaining(&rack, &guess, 'A'), 1);
        assert_eq!(remaining(&rack, &guess, 'B'), 1);
        assert_eq!(remaining(&rack, &guess, 'Z'), 0);
    }
}
