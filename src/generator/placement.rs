//! Placement validity check
//!
//! Decides whether a word may be written at a given start cell and direction
//! without breaking the grid's crossing rules.

use crate::core::{Direction, Grid};

/// Check whether `letters` can be written starting at (`row`, `col`)
///
/// A placement is rejected when:
/// 1. Any letter would fall outside the grid
/// 2. The cell just before the first letter, or just after the last, is filled
///    (two words would run together on the same line)
/// 3. An occupied cell holds a different letter than the word needs there
/// 4. An empty cell the word would fill has a filled neighbour on either side
///    perpendicular to the word (an unrelated word would touch edge-on)
///
/// Occupied cells with the same letter are intersections and skip rule 4.
#[must_use]
pub fn can_place(grid: &Grid, letters: &[char], row: isize, col: isize, direction: Direction) -> bool {
    let len = letters.len() as isize;
    if len == 0 {
        return false;
    }

    let (dr, dc) = direction.step();

    // Rule 1: bounds
    let end_row = row + dr * (len - 1);
    let end_col = col + dc * (len - 1);
    if !grid.in_bounds(row, col) || !grid.in_bounds(end_row, end_col) {
        return false;
    }

    // Rule 2: sandwich
    if grid.is_filled(row - dr, col - dc) || grid.is_filled(end_row + dr, end_col + dc) {
        return false;
    }

    for (i, &letter) in letters.iter().enumerate() {
        let r = row + dr * i as isize;
        let c = col + dc * i as isize;

        match grid.get_signed(r, c) {
            // Rule 3: crossing must agree
            Some(existing) if existing != letter => return false,
            Some(_) => {}
            // Rule 4: no edge-on contact
            None => {
                if grid.is_filled(r + dc, c + dr) || grid.is_filled(r - dc, c - dr) {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    /// 7x7 grid with "CASA" across at row 3, cols 1..=4
    fn grid_with_casa() -> Grid {
        let mut grid = Grid::new(7, 7);
        for (i, ch) in "CASA".chars().enumerate() {
            grid.set(3, 1 + i, ch);
        }
        grid
    }

    #[test]
    fn accepts_empty_grid_inside_bounds() {
        let grid = Grid::new(5, 5);
        assert!(can_place(&grid, &letters("PORTO"), 0, 0, Direction::Across));
        assert!(can_place(&grid, &letters("PORTO"), 0, 4, Direction::Down));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let grid = Grid::new(5, 5);
        assert!(!can_place(&grid, &letters("PORTO"), 0, 1, Direction::Across));
        assert!(!can_place(&grid, &letters("PORTO"), 1, 0, Direction::Down));
        assert!(!can_place(&grid, &letters("MAR"), -1, 0, Direction::Down));
        assert!(!can_place(&grid, &letters("MAR"), 0, -2, Direction::Across));
    }

    #[test]
    fn rejects_empty_word() {
        let grid = Grid::new(5, 5);
        assert!(!can_place(&grid, &[], 0, 0, Direction::Across));
    }

    #[test]
    fn accepts_valid_crossing() {
        let grid = grid_with_casa();
        // "MAR" down crossing the first A of CASA (row 3, col 2)
        assert!(can_place(&grid, &letters("MAR"), 2, 2, Direction::Down));
    }

    #[test]
    fn rejects_conflicting_letter() {
        let grid = grid_with_casa();
        // "MOR" would put 'O' on the 'A'
        assert!(!can_place(&grid, &letters("MOR"), 2, 2, Direction::Down));
    }

    #[test]
    fn rejects_sandwich_before_and_after() {
        let grid = grid_with_casa();
        // Across on the same row, ending just before 'C'
        assert!(!can_place(&grid, &letters("O"), 3, 0, Direction::Across));
        // Starting right after the last 'A'
        assert!(!can_place(&grid, &letters("SO"), 3, 5, Direction::Across));
        // Down word ending right above a filled cell
        assert!(!can_place(&grid, &letters("MO"), 1, 1, Direction::Down));
    }

    #[test]
    fn rejects_edge_on_contact() {
        let grid = grid_with_casa();
        // Parallel word directly above CASA
        assert!(!can_place(&grid, &letters("RIO"), 2, 2, Direction::Across));
        // Down word alongside the 'A' at col 4 without crossing
        assert!(!can_place(&grid, &letters("SOL"), 2, 5, Direction::Down));
    }

    #[test]
    fn accepts_parallel_word_with_gap() {
        let grid = grid_with_casa();
        assert!(can_place(&grid, &letters("RIO"), 1, 1, Direction::Across));
    }
}
