//! Display functions for command results

use super::formatters::{
    cell_label, create_progress_bar, format_time, guess_line, number_at, rack_line,
};
use crate::commands::{BenchmarkResult, GeneratedPuzzle};
use crate::core::{Direction, PlacedWord};
use crate::generator::Puzzle;
use crate::session::scoring::TIME_LIMIT_SECS;
use crate::session::{ActiveWord, Round, ScoreBreakdown};
use colored::Colorize;

/// Print a grid, showing letters only where `revealed(row, col)` holds
///
/// Cells of the word at `highlight` are drawn on a yellow background.
pub fn print_grid(
    puzzle: &Puzzle,
    highlight: Option<usize>,
    revealed: impl Fn(usize, usize) -> bool,
) {
    let grid = &puzzle.grid;
    let highlighted = highlight.and_then(|i| puzzle.words.get(i));

    print!("    ");
    for col in 0..grid.width() {
        print!("{:^3}", col + 1);
    }
    println!();

    for row in 0..grid.height() {
        print!("{:>3} ", (row + 1).to_string().bright_black());
        for col in 0..grid.width() {
            let letter = grid.get(row, col);
            let shown = revealed(row, col);
            let label = cell_label(letter, shown, number_at(&puzzle.words, row, col));

            let styled = if letter.is_none() {
                label.normal()
            } else if highlighted.is_some_and(|w| w.covers(row, col)) {
                label.black().on_yellow()
            } else if shown {
                label.bright_green().bold().on_black()
            } else {
                label.white().on_bright_black()
            };
            print!("{styled}");
        }
        println!();
    }
}

/// Print clues grouped by direction, striking through solved ones
pub fn print_clues(words: &[PlacedWord], solved: impl Fn(usize) -> bool) {
    for (direction, title) in [(Direction::Across, "Across"), (Direction::Down, "Down")] {
        println!("\n{}", title.bright_cyan().bold());
        for (i, word) in words.iter().enumerate() {
            if word.direction != direction {
                continue;
            }
            let line = format!("{:>3}. {} ({})", word.number, word.clue(), word.len());
            if solved(i) {
                println!("{}  {}", line.bright_black().strikethrough(), word.word().green());
            } else {
                println!("{line}");
            }
        }
    }
}

/// Print the board of a round in progress
pub fn print_round(round: &Round, elapsed_secs: u64) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}   {} {}/{}   {} {}",
        "Theme:".bright_cyan().bold(),
        round.theme().bright_yellow().bold(),
        "Solved:".bright_cyan(),
        round.completed_count(),
        round.words().len(),
        "Time:".bright_cyan(),
        format_time(elapsed_secs)
    );
    println!("{}", "═".repeat(60).cyan());

    let revealed = |row: usize, col: usize| {
        round
            .words()
            .iter()
            .enumerate()
            .any(|(i, w)| round.is_completed(i) && w.covers(row, col))
    };
    print_grid(round.puzzle(), round.active().map(ActiveWord::index), revealed);
    print_clues(round.words(), |i| round.is_completed(i));
}

/// Print the word being edited with its rack
pub fn print_active_word(word: &PlacedWord, guess: &[Option<char>], letters: &[(char, bool)]) {
    println!(
        "\n{} {} {} ({})",
        "Word".bright_cyan().bold(),
        word.number.to_string().bright_yellow().bold(),
        word.direction,
        word.clue()
    );
    println!("   Guess:  {}", guess_line(guess).bright_white().bold());
    println!("   Letters: {}", rack_line(letters).yellow());
}

/// Print the score of a finished round
pub fn print_score(breakdown: &ScoreBreakdown) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  C R O S S W O R D   C O M P L E T E !  🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let remaining = TIME_LIMIT_SECS.saturating_sub(breakdown.elapsed_secs);
    println!("\n   Time:        {}", format_time(breakdown.elapsed_secs));
    println!(
        "   Time left:   [{}] {}",
        create_progress_bar(remaining as f64, TIME_LIMIT_SECS as f64, 20).green(),
        format_time(remaining)
    );
    println!("   Base:        {}", breakdown.base);
    println!(
        "   Time bonus:  {}",
        format!("+{}", breakdown.time_bonus).green()
    );
    println!(
        "   Penalty:     {} ({} wrong {})",
        format!("-{}", breakdown.penalty).red(),
        breakdown.attempts,
        if breakdown.attempts == 1 { "guess" } else { "guesses" }
    );
    println!(
        "\n   Score:       {}",
        breakdown.score.to_string().bright_yellow().bold()
    );
    println!(
        "   Total:       {}",
        breakdown.total_score.to_string().bright_cyan().bold()
    );
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print a generated puzzle with every letter shown
pub fn print_generated(result: &GeneratedPuzzle) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        result.theme.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    print_grid(&result.puzzle, None, |_, _| true);
    print_clues(&result.puzzle.words, |_| false);

    let dropped = result.dropped();
    println!(
        "\n📊 Placed {} of {} words",
        result.puzzle.words.len().to_string().bright_yellow().bold(),
        result.requested.len()
    );
    if !dropped.is_empty() {
        println!("   Dropped: {}", dropped.join(", ").yellow());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.puzzles);
    println!(
        "   Words placed:     {}/{}",
        result.placed_words, result.requested_words
    );
    println!(
        "   Placement rate:   {}",
        format!("{:.1}%", result.placement_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average placed:   {:.2}", result.average_placed);
    println!(
        "   Best case:        {}",
        result.max_placed.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.min_placed.to_string().yellow()
    );
    println!("   Complete puzzles: {}", result.complete_puzzles);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Words placed per puzzle:".bright_cyan().bold());
    for (&placed, &count) in &result.distribution {
        let pct = (count as f64 / result.puzzles as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {placed:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
