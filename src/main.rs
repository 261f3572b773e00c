//! Crucigrama - CLI
//!
//! Themed crossword game with TUI and CLI modes, plus puzzle generation tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crucigrama::{
    commands::{generate_puzzle, run_benchmark, run_simple},
    output::{print_benchmark_result, print_generated},
    session::{GameConfig, JsonFileStore, MemoryStore, ScoreStore, Session},
    vocabulary::{Vocabulary, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crucigrama",
    about = "Themed crossword puzzles solved with a letter rack",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vocabulary file ([Theme] headers, WORD|clue lines); defaults to the built-in one
    #[arg(short = 'w', long, global = true)]
    vocabulary: Option<PathBuf>,

    /// Seed for reproducible puzzles and racks
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Where the cumulative score is kept
    #[arg(long, global = true, default_value = ".crucigrama_scores.json")]
    score_file: PathBuf,

    /// Keep the score in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Generate one puzzle and print it
    Generate {
        /// Theme to draw words from (random if omitted)
        #[arg(short, long)]
        theme: Option<String>,

        /// Print the puzzle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Benchmark generator placement rate
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("crucigrama=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the vocabulary from `--vocabulary`, or the embedded one
fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load vocabulary from {}", path.display())),
        None => Ok(Vocabulary::embedded()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn make_store(cli: &Cli) -> Box<dyn ScoreStore> {
    if cli.no_save {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::open(&cli.score_file))
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary = load_vocabulary(cli.vocabulary.as_deref())?;
    info!(themes = vocabulary.themes().len(), "vocabulary loaded");

    let config = GameConfig::default();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, vocabulary, config),
        Commands::Simple => run_simple_command(&cli, vocabulary, config),
        Commands::Generate { theme, json } => {
            run_generate_command(&vocabulary, theme.as_deref(), json, cli.seed, &config)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&vocabulary, &config, count, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, vocabulary: Vocabulary, config: GameConfig) -> Result<()> {
    use crucigrama::interactive::{App, run_tui};

    let session = Session::new(vocabulary, config, make_rng(cli.seed), make_store(cli));
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli, vocabulary: Vocabulary, config: GameConfig) -> Result<()> {
    let mut session = Session::new(vocabulary, config, make_rng(cli.seed), make_store(cli));
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_generate_command(
    vocabulary: &Vocabulary,
    theme: Option<&str>,
    json: bool,
    seed: Option<u64>,
    config: &GameConfig,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let result =
        generate_puzzle(vocabulary, theme, config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_generated(&result);
    }
    Ok(())
}

fn run_benchmark_command(
    vocabulary: &Vocabulary,
    config: &GameConfig,
    count: usize,
    seed: Option<u64>,
) {
    println!("Generating {count} puzzles...");
    let result = run_benchmark(vocabulary, config, count, seed.unwrap_or(0), true);
    print_benchmark_result(&result);
}
