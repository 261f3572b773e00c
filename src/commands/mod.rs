//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GeneratedPuzzle, generate_puzzle};
pub use simple::{Command, run_simple};
