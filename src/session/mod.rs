//! Play session management
//!
//! Owns per-round interaction state on top of the placement engine: word selection,
//! letter racks, guess editing, validation, completion, and scoring.

pub mod clock;
mod game;
pub mod rack;
pub mod scoring;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game::{ActiveWord, GameConfig, NewRound, Round, Selection, Session, draw_words};
pub use scoring::{ScoreBreakdown, score_round};
pub use store::{JsonFileStore, MemoryStore, ScoreStore, StoreError, TOTAL_SCORE_KEY};
