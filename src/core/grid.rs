//! Crossword grid and placed-word representation
//!
//! The grid is a fixed-size, row-major array of cells. Each cell is either empty
//! or holds a single letter.

use super::WordEntry;
use serde::Serialize;
use std::fmt;

/// Orientation of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The orientation crossing this one
    #[inline]
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Row/column step taken when advancing one letter
    #[inline]
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Fixed-size letter grid
///
/// Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
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

    /// Check whether signed coordinates fall inside the grid
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Letter at a cell, or `None` if the cell is empty or outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    /// Signed variant of [`Grid::get`], used while probing neighbours
    #[inline]
    #[must_use]
    pub fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        if self.in_bounds(row, col) {
            self.get(row as usize, col as usize)
        } else {
            None
        }
    }

    /// Whether the cell holds a letter
    #[inline]
    #[must_use]
    pub fn is_filled(&self, row: isize, col: isize) -> bool {
        self.get_signed(row, col).is_some()
    }

    /// Write a letter; only the generator mutates grids
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.cells[row * self.width + col] = Some(letter);
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Number of filled cells
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Read `len` letters starting at a cell, stopping at empty cells or the edge
    #[must_use]
    pub fn read(&self, row: usize, col: usize, direction: Direction, len: usize) -> String {
        let (dr, dc) = direction.step();
        (0..len)
            .map_while(|i| {
                let r = row as isize + dr * i as isize;
                let c = col as isize + dc * i as isize;
                self.get_signed(r, c)
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.unwrap_or('.')).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A word that the generator placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    #[serde(flatten)]
    pub entry: WordEntry,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Number printed in the starting cell; 1-based, in placement order
    pub number: usize,
}

impl PlacedWord {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.entry.text()
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        self.entry.clue()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entry.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.is_empty()
    }

    /// Grid coordinates of every letter, in word order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(move |i| match self.direction {
            Direction::Across => (self.row, self.col + i),
            Direction::Down => (self.row + i, self.col),
        })
    }

    /// Whether the word passes through a cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        match self.direction {
            Direction::Across => row == self.row && col >= self.col && col < self.col + self.len(),
            Direction::Down => col == self.col && row >= self.row && row < self.row + self.len(),
        }
    }
}
