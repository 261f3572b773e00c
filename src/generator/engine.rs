//! Main crossword generator interface

use super::placement::can_place;
use crate::core::{Direction, Grid, PlacedWord, WordEntry};
use serde::Serialize;
use tracing::debug;

/// Default grid width and height
pub const DEFAULT_SIZE: usize = 15;

/// Result of a generation run: the filled grid plus placement metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
}

impl Puzzle {
    /// Placed words that pass through a cell, in placement order
    #[must_use]
    pub fn words_at(&self, row: usize, col: usize) -> Vec<&PlacedWord> {
        self.words.iter().filter(|w| w.covers(row, col)).collect()
    }
}

/// First-fit crossword generator
///
/// Deterministic: the same words in the same order always produce the same puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    width: usize,
    height: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Working state owned by a single `generate` call
struct Board {
    grid: Grid,
    placed: Vec<PlacedWord>,
}

impl Generator {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Build a crossword from the given entries
    ///
    /// Entries are tried longest first (stable for equal lengths). The first word that fits
    /// is centered across the middle row; each later word is crossed against the words
    /// already placed, taking the first valid position found. Words with no valid position
    /// are dropped.
    ///
    /// # Examples
    /// ```
    /// use crucigrama::core::{Direction, WordEntry};
    /// use crucigrama::generator::Generator;
    ///
    /// let words = vec![
    ///     WordEntry::new("GAITA", "").unwrap(),
    ///     WordEntry::new("TAMBOR", "").unwrap(),
    /// ];
    /// let puzzle = Generator::default().generate(&words);
    ///
    /// assert_eq!(puzzle.words[0].word(), "TAMBOR");
    /// assert_eq!((puzzle.words[0].row, puzzle.words[0].col), (7, 4));
    /// assert_eq!(puzzle.words[1].direction, Direction::Down);
    /// ```
    #[must_use]
    pub fn generate(&self, words: &[WordEntry]) -> Puzzle {
        let mut sorted: Vec<&WordEntry> = words.iter().collect();
        // sort_by is stable: equal lengths keep input order
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut board = Board {
            grid: Grid::new(self.width, self.height),
            placed: Vec::with_capacity(sorted.len()),
        };

        for entry in sorted {
            if !self.try_place(&mut board, entry) {
                debug!(word = entry.text(), "no valid position, dropping word");
            }
        }

        debug!(
            requested = words.len(),
            placed = board.placed.len(),
            filled = board.grid.filled_count(),
            "crossword generated"
        );

        Puzzle {
            grid: board.grid,
            words: board.placed,
        }
    }

    fn try_place(&self, board: &mut Board, entry: &WordEntry) -> bool {
        let letters = entry.letters();

        if board.placed.is_empty() {
            let row = (self.height / 2) as isize;
            let col = (self.width as isize - letters.len() as isize).div_euclid(2);
            if can_place(&board.grid, letters, row, col, Direction::Across) {
                place(board, entry, row, col, Direction::Across);
                return true;
            }
            return false;
        }

        if let Some((row, col, direction)) = find_crossing(board, letters) {
            place(board, entry, row, col, direction);
            true
        } else {
            false
        }
    }
}

/// First valid crossing position, scanning placed words in order, then the
/// candidate's letters, then the placed word's letters.
fn find_crossing(board: &Board, letters: &[char]) -> Option<(isize, isize, Direction)> {
    for placed in &board.placed {
        let direction = placed.direction.perpendicular();
        let placed_letters = placed.entry.letters();

        for (i, &letter) in letters.iter().enumerate() {
            for (j, _) in placed_letters.iter().enumerate().filter(|&(_, &p)| p == letter) {
                let (i, j) = (i as isize, j as isize);
                let (row, col) = match placed.direction {
                    Direction::Across => (placed.row as isize - i, placed.col as isize + j),
                    Direction::Down => (placed.row as isize + j, placed.col as isize - i),
                };

                if can_place(&board.grid, letters, row, col, direction) {
                    return Some((row, col, direction));
                }
            }
        }
    }

    None
}

fn place(board: &mut Board, entry: &WordEntry, row: isize, col: isize, direction: Direction) {
    let (row, col) = (row as usize, col as usize);
    let placed = PlacedWord {
        entry: entry.clone(),
        row,
        col,
        direction,
        number: board.placed.len() + 1,
    };

    for ((r, c), &letter) in placed.cells().zip(entry.letters()) {
        board.grid.set(r, c, letter);
    }

    debug!(
        word = entry.text(),
        row,
        col,
        %direction,
        number = placed.number,
        "placed word"
    );
    board.placed.push(placed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;
    use rustc_hash::FxHashMap;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(w, &format!("clue for {w}")).unwrap())
            .collect()
    }

    fn assert_puzzle_consistent(puzzle: &Puzzle, input: &[WordEntry]) {
        // Every placed word reads back from the grid
        for word in &puzzle.words {
            let read = puzzle
                .grid
                .read(word.row, word.col, word.direction, word.len());
            assert_eq!(read, word.word(), "word {} does not read back", word.word());
        }

        // Crossing cells agree for every pair of words
        let mut seen: FxHashMap<(usize, usize), char> = FxHashMap::default();
        for word in &puzzle.words {
            for ((r, c), &letter) in word.cells().zip(word.entry.letters()) {
                let previous = *seen.entry((r, c)).or_insert(letter);
                assert_eq!(previous, letter, "conflict at ({r}, {c})");
            }
        }

        // Placed words come from the input, without duplicates beyond input multiplicity
        assert!(puzzle.words.len() <= input.len());
        for word in &puzzle.words {
            let in_input = input.iter().filter(|e| e.text() == word.word()).count();
            let in_output = puzzle
                .words
                .iter()
                .filter(|w| w.word() == word.word())
                .count();
            assert!(in_output <= in_input, "{} duplicated", word.word());
        }

        // Numbers are exactly 1..=n in placement order
        for (i, word) in puzzle.words.iter().enumerate() {
            assert_eq!(word.number, i + 1);
        }
    }

    #[test]
    fn empty_input_gives_empty_puzzle() {
        let puzzle = Generator::default().generate(&[]);
        assert!(puzzle.words.is_empty());
        assert_eq!(puzzle.grid.filled_count(), 0);
        assert_eq!(puzzle.grid.width(), DEFAULT_SIZE);
        assert_eq!(puzzle.grid.height(), DEFAULT_SIZE);
    }

    #[test]
    fn first_word_is_longest_and_centered() {
        let input = entries(&["MAR", "CARBALLO", "RIO"]);
        let puzzle = Generator::default().generate(&input);

        let first = &puzzle.words[0];
        assert_eq!(first.word(), "CARBALLO");
        assert_eq!(first.direction, Direction::Across);
        assert_eq!(first.row, 7);
        assert_eq!(first.col, (15 - 8) / 2);
        assert_eq!(first.number, 1);
    }

    #[test]
    fn first_word_centered_on_uneven_grid() {
        let input = entries(&["PORTO"]);
        let puzzle = Generator::new(10, 6).generate(&input);
        assert_eq!((puzzle.words[0].row, puzzle.words[0].col), (3, 2));
    }

    #[test]
    fn equal_lengths_keep_input_order() {
        let input = entries(&["LOBO", "GATO", "VACA"]);
        let puzzle = Generator::default().generate(&input);
        assert_eq!(puzzle.words[0].word(), "LOBO");
    }

    #[test]
    fn second_word_crosses_first_at_first_match() {
        // CASA across at row 7, cols 5..=8. For "MAR" the scan finds i=1 ('A')
        // against j=1 first, so MAR goes down from (6, 6).
        let input = entries(&["CASA", "MAR"]);
        let puzzle = Generator::default().generate(&input);

        assert_eq!(puzzle.words.len(), 2);
        let mar = &puzzle.words[1];
        assert_eq!(mar.word(), "MAR");
        assert_eq!(mar.direction, Direction::Down);
        assert_eq!((mar.row, mar.col), (6, 6));
        assert_eq!(mar.number, 2);
        assert_puzzle_consistent(&puzzle, &input);
    }

    #[test]
    fn third_word_crosses_down_word_across() {
        // TAMBOR across row 7 cols 4..=9. GAITA's A (i=1) is scanned before its T,
        // so GAITA goes down through TAMBOR's A from (6, 5).
        // LIGA cannot cross TAMBOR cleanly, so it crosses GAITA's last A across.
        let input = entries(&["TAMBOR", "GAITA", "LIGA"]);
        let puzzle = Generator::default().generate(&input);

        assert_eq!(puzzle.words[1].word(), "GAITA");
        assert_eq!((puzzle.words[1].row, puzzle.words[1].col), (6, 5));
        assert_eq!(puzzle.words[1].direction, Direction::Down);

        let liga = &puzzle.words[2];
        assert_eq!(liga.word(), "LIGA");
        assert_eq!(liga.direction, Direction::Across);
        assert_eq!((liga.row, liga.col), (10, 2));
        assert_puzzle_consistent(&puzzle, &input);
    }

    #[test]
    fn word_without_common_letters_is_dropped() {
        let input = entries(&["CASA", "TUX"]);
        let puzzle = Generator::default().generate(&input);
        assert_eq!(puzzle.words.len(), 1);
        assert_eq!(puzzle.words[0].word(), "CASA");
    }

    #[test]
    fn first_word_too_wide_is_dropped() {
        let input = entries(&["PANDEIRETA", "PAN"]);
        let puzzle = Generator::new(5, 5).generate(&input);
        assert_eq!(puzzle.words.len(), 1);
        assert_eq!(puzzle.words[0].word(), "PAN");
        assert_eq!((puzzle.words[0].row, puzzle.words[0].col), (2, 1));
        assert_eq!(puzzle.words[0].number, 1);
    }

    #[test]
    fn generation_is_deterministic() {
        let input = entries(&["MUIÑEIRA", "GAITA", "TAMBOR", "RITMO", "CORO"]);
        let generator = Generator::default();
        assert_eq!(generator.generate(&input), generator.generate(&input));
    }

    #[test]
    fn words_at_reports_crossings() {
        let input = entries(&["CASA", "MAR"]);
        let puzzle = Generator::default().generate(&input);

        let at_crossing = puzzle.words_at(7, 6);
        assert_eq!(at_crossing.len(), 2);
        assert_eq!(at_crossing[0].word(), "CASA");
        assert_eq!(at_crossing[1].word(), "MAR");

        assert_eq!(puzzle.words_at(7, 5).len(), 1);
        assert!(puzzle.words_at(0, 0).is_empty());
    }

    #[test]
    fn embedded_themes_generate_consistent_puzzles() {
        let vocabulary = Vocabulary::embedded();
        let generator = Generator::default();

        for theme in vocabulary.themes() {
            let input = theme.entries();
            let puzzle = generator.generate(input);

            assert!(!puzzle.words.is_empty(), "theme {} placed nothing", theme.name());
            assert_puzzle_consistent(&puzzle, input);

            let first = &puzzle.words[0];
            assert_eq!(first.row, DEFAULT_SIZE / 2);
            assert_eq!(first.col, (DEFAULT_SIZE - first.len()) / 2);
        }
    }

    #[test]
    fn rotated_inputs_stay_consistent() {
        let vocabulary = Vocabulary::embedded();
        let generator = Generator::new(13, 11);

        for theme in vocabulary.themes() {
            let mut input = theme.entries().to_vec();
            for _ in 0..input.len() {
                input.rotate_left(1);
                let subset = &input[..input.len().min(8)];
                let puzzle = generator.generate(subset);
                assert_puzzle_consistent(&puzzle, subset);
            }
        }
    }
}
