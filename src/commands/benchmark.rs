//! Benchmark command
//!
//! Measures how well the generator packs rounds across many seeded draws.

use crate::generator::Generator;
use crate::session::{GameConfig, draw_words};
use crate::vocabulary::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub puzzles: usize,
    pub requested_words: usize,
    pub placed_words: usize,
    pub average_placed: f64,
    /// Placed words divided by requested words
    pub placement_rate: f64,
    pub min_placed: usize,
    pub max_placed: usize,
    /// Puzzles in which every requested word was placed
    pub complete_puzzles: usize,
    /// Placed-word count → number of puzzles
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` rounds, round `i` drawn with seed `base_seed + i`
///
/// Rounds are generated in parallel; the result does not depend on thread scheduling.
#[must_use]
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    config: &GameConfig,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("generating");

    let generator = Generator::new(config.width, config.height);
    let start = Instant::now();

    let counts: Vec<(usize, usize)> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let counts = draw_words(vocabulary, config.word_count, &mut rng).map_or(
                (0, 0),
                |(_, words)| (words.len(), generator.generate(&words).words.len()),
            );
            pb.inc(1);
            counts
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &(_, placed) in &counts {
        *distribution.entry(placed).or_insert(0) += 1;
    }

    let requested_words: usize = counts.iter().map(|&(r, _)| r).sum();
    let placed_words: usize = counts.iter().map(|&(_, p)| p).sum();

    BenchmarkResult {
        puzzles: count,
        requested_words,
        placed_words,
        average_placed: if count > 0 {
            placed_words as f64 / count as f64
        } else {
            0.0
        },
        placement_rate: if requested_words > 0 {
            placed_words as f64 / requested_words as f64
        } else {
            0.0
        },
        min_placed: counts.iter().map(|&(_, p)| p).min().unwrap_or(0),
        max_placed: counts.iter().map(|&(_, p)| p).max().unwrap_or(0),
        complete_puzzles: counts.iter().filter(|&&(r, p)| r == p).count(),
        distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
