//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_active_word, print_benchmark_result, print_clues, print_generated, print_grid,
    print_round, print_score,
};
