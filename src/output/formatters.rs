//! Formatting utilities for terminal output

use crate::core::PlacedWord;

/// Format seconds as `MM:SS`
#[must_use]
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Number of the word starting at a cell, if any
#[must_use]
pub fn number_at(words: &[PlacedWord], row: usize, col: usize) -> Option<usize> {
    words
        .iter()
        .find(|w| w.row == row && w.col == col)
        .map(|w| w.number)
}

/// Three-character label for a grid cell
///
/// Empty cells are blank, revealed letters are centered, and hidden letters show the
/// starting word number when there is one.
#[must_use]
pub fn cell_label(letter: Option<char>, revealed: bool, number: Option<usize>) -> String {
    match (letter, revealed, number) {
        (None, _, _) => "   ".to_string(),
        (Some(ch), true, _) => format!(" {ch} "),
        (Some(_), false, Some(n)) => format!("{n:>2}·"),
        (Some(_), false, None) => " · ".to_string(),
    }
}

/// Guess slots, e.g. `C _ S _`
#[must_use]
pub fn guess_line(guess: &[Option<char>]) -> String {
    guess
        .iter()
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rack letters with used copies bracketed, e.g. `A [M] R`
#[must_use]
pub fn rack_line(letters: &[(char, bool)]) -> String {
    letters
        .iter()
        .map(|&(letter, used)| {
            if used {
                format!("[{letter}]")
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, WordEntry};

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn number_at_finds_word_starts() {
        let words = vec![PlacedWord {
            entry: WordEntry::new("MAR", "").unwrap(),
            row: 2,
            col: 3,
            direction: Direction::Down,
            number: 4,
        }];
        assert_eq!(number_at(&words, 2, 3), Some(4));
        assert_eq!(number_at(&words, 3, 3), None);
    }

    #[test]
    fn cell_labels() {
        assert_eq!(cell_label(None, true, None), "   ");
        assert_eq!(cell_label(Some('Ñ'), true, Some(1)), " Ñ ");
        assert_eq!(cell_label(Some('A'), false, Some(12)), "12·");
        assert_eq!(cell_label(Some('A'), false, None), " · ");
    }

    #[test]
    fn guess_and_rack_lines() {
        assert_eq!(guess_line(&[Some('C'), None, Some('S')]), "C _ S");
        assert_eq!(rack_line(&[('A', false), ('M', true)]), "A [M]");
    }
}
