//! Core domain types for crosswords
//!
//! Word entries, the letter grid, and placed words. No randomness, no I/O.

mod entry;
mod grid;

pub use entry::{EntryError, WordEntry};
pub use grid::{Direction, Grid, PlacedWord};
