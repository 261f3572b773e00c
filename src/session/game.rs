//! Play session state machine
//!
//! A `Session` owns one round at a time: the generated puzzle, the word being edited,
//! per-word failed attempts, and the set of solved words. The cumulative score outlives
//! rounds and is persisted through a `ScoreStore`.

use super::clock::{Clock, SystemClock};
use super::rack::{DEFAULT_DISTRACTORS, build_rack, mark_used, remaining};
use super::scoring::{ScoreBreakdown, score_round};
use super::store::{ScoreStore, TOTAL_SCORE_KEY};
use crate::core::{Grid, PlacedWord, WordEntry};
use crate::generator::{DEFAULT_SIZE, Generator, Puzzle};
use crate::vocabulary::{Theme, Vocabulary};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Tunable round parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Words drawn from the theme before generation
    pub word_count: usize,
    /// Random letters added to each rack
    pub distractor_count: usize,
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_count: 8,
            distractor_count: DEFAULT_DISTRACTORS,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

/// The word currently being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWord {
    index: usize,
    guess: Vec<Option<char>>,
    rack: Vec<char>,
}

impl ActiveWord {
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// One slot per letter; `None` marks an empty slot
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &[Option<char>] {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn rack(&self) -> &[char] {
        &self.rack
    }

    fn guess_text(&self) -> String {
        self.guess.iter().flatten().collect()
    }
}

/// State of one round
///
/// Word indices are positions in `words()`, i.e. placement order (`number - 1`).
#[derive(Debug, Clone)]
pub struct Round {
    theme: String,
    puzzle: Puzzle,
    score: u64,
    started_at: Duration,
    active: Option<ActiveWord>,
    attempts: FxHashMap<usize, u32>,
    completed: FxHashSet<usize>,
}

impl Round {
    fn new(theme: String, puzzle: Puzzle, started_at: Duration) -> Self {
        let attempts = (0..puzzle.words.len()).map(|i| (i, 0)).collect();
        Self {
            theme,
            puzzle,
            score: 0,
            started_at,
            active: None,
            attempts,
            completed: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    #[inline]
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.puzzle.words
    }

    /// Score of the last finished round, zero until then
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&ActiveWord> {
        self.active.as_ref()
    }

    /// Failed validations for a word
    #[must_use]
    pub fn attempts(&self, index: usize) -> u32 {
        self.attempts.get(&index).copied().unwrap_or(0)
    }

    /// Failed validations across all words
    #[must_use]
    pub fn total_attempts(&self) -> u64 {
        self.attempts.values().map(|&a| u64::from(a)).sum()
    }

    #[inline]
    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Active word that can still be edited
    fn editable(&mut self) -> Option<&mut ActiveWord> {
        self.active
            .as_mut()
            .filter(|a| !self.completed.contains(&a.index))
    }
}

/// What the front end needs to draw a fresh round
#[derive(Debug, Clone, Copy)]
pub struct NewRound<'a> {
    pub theme: &'a str,
    pub grid: &'a Grid,
    pub words: &'a [PlacedWord],
    pub total_score: u64,
}

/// What the front end needs to draw the word being edited
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub index: usize,
    pub word: &'a PlacedWord,
    pub rack: &'a [char],
    pub guess: &'a [Option<char>],
}

/// Pick a random theme and a uniformly shuffled subset of up to `word_count` of its entries
///
/// Returns `None` for an empty vocabulary.
pub fn draw_words<'v, R: Rng + ?Sized>(
    vocabulary: &'v Vocabulary,
    word_count: usize,
    rng: &mut R,
) -> Option<(&'v Theme, Vec<WordEntry>)> {
    let theme = vocabulary.themes().choose(rng)?;
    let mut entries = theme.entries().to_vec();
    entries.shuffle(rng);
    entries.truncate(word_count);
    Some((theme, entries))
}

/// Single-player crossword session
///
/// Randomness, time, and persistence are injected so a seeded RNG and a manual clock
/// replay a session exactly.
pub struct Session<R, S, C = SystemClock> {
    vocabulary: Vocabulary,
    generator: Generator,
    config: GameConfig,
    rng: R,
    store: S,
    clock: C,
    total_score: u64,
    round: Round,
}

impl<R: Rng, S: ScoreStore> Session<R, S, SystemClock> {
    /// Create a session timed by the system clock
    #[must_use]
    pub fn new(vocabulary: Vocabulary, config: GameConfig, rng: R, store: S) -> Self {
        Self::with_clock(vocabulary, config, rng, store, SystemClock::new())
    }
}

impl<R: Rng, S: ScoreStore, C: Clock> Session<R, S, C> {
    /// Create a session with an explicit clock
    ///
    /// The cumulative score is loaded from `store`. No round is in progress until
    /// [`Session::start_new_game`] is called.
    pub fn with_clock(
        vocabulary: Vocabulary,
        config: GameConfig,
        rng: R,
        store: S,
        clock: C,
    ) -> Self {
        let total_score = store.load(TOTAL_SCORE_KEY).unwrap_or(0);
        let generator = Generator::new(config.width, config.height);
        let empty = Puzzle {
            grid: Grid::new(config.width, config.height),
            words: Vec::new(),
        };
        let round = Round::new(String::new(), empty, clock.now());

        debug!(total_score, themes = vocabulary.themes().len(), "session created");

        Self {
            vocabulary,
            generator,
            config,
            rng,
            store,
            clock,
            total_score,
            round,
        }
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u64 {
        self.total_score
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a round: random theme, random subset, fresh puzzle, reset counters and clock
    ///
    /// An empty vocabulary yields a round with no words.
    pub fn start_new_game(&mut self) -> NewRound<'_> {
        let drawn = draw_words(&self.vocabulary, self.config.word_count, &mut self.rng);
        let (theme, subset) = match drawn {
            Some((theme, subset)) => (theme.name().to_string(), subset),
            None => {
                warn!("vocabulary is empty, starting a round with no words");
                (String::new(), Vec::new())
            }
        };

        let puzzle = self.generator.generate(&subset);
        info!(
            theme = %theme,
            requested = subset.len(),
            placed = puzzle.words.len(),
            "new round"
        );

        self.round = Round::new(theme, puzzle, self.clock.now());

        NewRound {
            theme: &self.round.theme,
            grid: &self.round.puzzle.grid,
            words: &self.round.puzzle.words,
            total_score: self.total_score,
        }
    }

    /// Whole seconds since the round started
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.clock
            .now()
            .saturating_sub(self.round.started_at)
            .as_secs()
    }

    /// Make a word the one being edited
    ///
    /// Returns `None` for an unknown or already solved word. Re-selecting the active word
    /// returns its rack and guess unchanged; selecting any other word starts it with an
    /// empty guess and a freshly shuffled rack.
    pub fn select_word(&mut self, index: usize) -> Option<Selection<'_>> {
        if index >= self.round.puzzle.words.len() || self.round.is_completed(index) {
            return None;
        }

        let reselect = self.round.active.as_ref().is_some_and(|a| a.index == index);
        if !reselect {
            let word = &self.round.puzzle.words[index];
            let rack = build_rack(
                word.entry.letters(),
                self.config.distractor_count,
                &mut self.rng,
            );
            debug!(index, word = word.word(), rack = ?rack, "word selected");
            self.round.active = Some(ActiveWord {
                index,
                guess: vec![None; word.len()],
                rack,
            });
        }

        self.selection()
    }

    /// The current selection, if a word is active
    #[must_use]
    pub fn selection(&self) -> Option<Selection<'_>> {
        let active = self.round.active.as_ref()?;
        Some(Selection {
            index: active.index,
            word: &self.round.puzzle.words[active.index],
            rack: &active.rack,
            guess: &active.guess,
        })
    }

    /// Put a letter in a slot of the active word
    ///
    /// Returns `None` when no editable word is active. Out-of-range positions leave the
    /// guess untouched.
    pub fn place_letter(&mut self, letter: char, position: usize) -> Option<&[Option<char>]> {
        let active = self.round.editable()?;
        if let Some(slot) = active.guess.get_mut(position) {
            *slot = Some(letter);
        }
        Some(active.guess.as_slice())
    }

    /// Clear a slot of the active word
    ///
    /// Same no-op rules as [`Session::place_letter`].
    pub fn remove_letter(&mut self, position: usize) -> Option<&[Option<char>]> {
        let active = self.round.editable()?;
        if let Some(slot) = active.guess.get_mut(position) {
            *slot = None;
        }
        Some(active.guess.as_slice())
    }

    /// Check the active word's guess against its answer
    ///
    /// A match marks the word solved. A mismatch counts one failed attempt for the word.
    /// Without an active word this returns false and changes nothing.
    pub fn validate_current_word(&mut self) -> bool {
        let Some(active) = self.round.active.as_ref() else {
            return false;
        };
        let index = active.index;
        if self.round.completed.contains(&index) {
            return true;
        }

        let word = &self.round.puzzle.words[index];
        if active.guess_text() == word.word() {
            self.round.completed.insert(index);
            info!(index, word = word.word(), "word solved");
            true
        } else {
            let attempts = self.round.attempts.entry(index).or_insert(0);
            *attempts += 1;
            debug!(index, attempts = *attempts, "wrong guess");
            false
        }
    }

    /// True once every placed word in the round is solved
    #[must_use]
    pub fn check_game_complete(&self) -> bool {
        self.round.completed.len() == self.round.puzzle.words.len()
    }

    /// Score the round, add it to the running total, and persist the total
    ///
    /// A failed save is logged and does not affect the returned score.
    pub fn calculate_final_score(&mut self) -> ScoreBreakdown {
        let mut breakdown = score_round(self.elapsed_secs(), self.round.total_attempts());

        self.round.score = breakdown.score;
        self.total_score += breakdown.score;
        breakdown.total_score = self.total_score;

        if let Err(e) = self.store.save(TOTAL_SCORE_KEY, self.total_score) {
            warn!(error = %e, "failed to persist total score");
        }

        info!(
            score = breakdown.score,
            total = breakdown.total_score,
            elapsed = breakdown.elapsed_secs,
            attempts = breakdown.attempts,
            "round finished"
        );
        breakdown
    }

    /// The unsolved word covering a cell
    ///
    /// Where two words cross and the first one is already active, the other is preferred,
    /// so selecting the same cell twice toggles direction.
    #[must_use]
    pub fn word_at(&self, row: usize, col: usize) -> Option<usize> {
        let candidates: Vec<usize> = self
            .round
            .puzzle
            .words_at(row, col)
            .iter()
            .map(|w| w.number - 1)
            .collect();

        let active = self.round.active.as_ref().map(ActiveWord::index);
        let found = match candidates.as_slice() {
            [] => return None,
            [first, second, ..] if active == Some(*first) => *second,
            [first, ..] => *first,
        };

        (!self.round.is_completed(found)).then_some(found)
    }

    /// Put `letter` in the first empty slot if the rack still has an unused copy
    ///
    /// Returns whether the letter was placed.
    pub fn type_letter(&mut self, letter: char) -> bool {
        let letter = letter.to_uppercase().next().unwrap_or(letter);
        let Some(active) = self.round.editable() else {
            return false;
        };

        if remaining(&active.rack, &active.guess, letter) == 0 {
            return false;
        }

        match active.guess.iter().position(Option::is_none) {
            Some(slot) => {
                active.guess[slot] = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the last filled slot; returns whether anything was cleared
    pub fn erase_last(&mut self) -> bool {
        let Some(active) = self.round.editable() else {
            return false;
        };

        match active.guess.iter().rposition(Option::is_some) {
            Some(slot) => {
                active.guess[slot] = None;
                true
            }
            None => false,
        }
    }

    /// Rack letters with a flag for copies already used in the guess
    #[must_use]
    pub fn available_letters(&self) -> Vec<(char, bool)> {
        self.round
            .active
            .as_ref()
            .map(|a| mark_used(&a.rack, &a.guess))
            .unwrap_or_default()
    }
}
