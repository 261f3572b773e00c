//! Crossword placement engine
//!
//! Pure function from an ordered word list to a populated grid. Holds no session state.

mod engine;
pub mod placement;

pub use engine::{DEFAULT_SIZE, Generator, Puzzle};
pub use placement::can_place;
