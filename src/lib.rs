//! Crucigrama
//!
//! Themed crossword generator with a letter-rack play session on top.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crucigrama::core::WordEntry;
//! use crucigrama::generator::Generator;
//!
//! let words = vec![
//!     WordEntry::new("casa", "Where you live").unwrap(),
//!     WordEntry::new("mar", "Salt water").unwrap(),
//! ];
//!
//! let puzzle = Generator::default().generate(&words);
//! for word in &puzzle.words {
//!     println!("{} {} {}", word.number, word.direction, word.word());
//! }
//! println!("{}", puzzle.grid);
//! ```

// Core domain types
pub mod core;

// Crossword placement engine
pub mod generator;

// Play sessions and scoring
pub mod session;

// Themed word lists
pub mod vocabulary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
