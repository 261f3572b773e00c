//! Simple interactive CLI mode
//!
//! Text-based play loop without TUI

use crate::output::{print_active_word, print_round, print_score};
use crate::session::{Clock, ScoreStore, Session};
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select a word by its clue number
    Select(usize),
    /// Select the word covering a cell, 1-based
    At(usize, usize),
    /// Type letters into the active word
    Letters(Vec<char>),
    Erase,
    Check,
    Clues,
    New,
    Quit,
    Help,
    Unknown(String),
}

impl Command {
    /// Parse an input line
    ///
    /// Keywords are whole words, so single letters always type.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let lower = input.to_lowercase();
        let mut parts = lower.split_whitespace();

        match parts.next() {
            None => Self::Help,
            Some("quit" | "exit") => Self::Quit,
            Some("new") => Self::New,
            Some("check") => Self::Check,
            Some("clues") => Self::Clues,
            Some("help" | "?") => Self::Help,
            Some("-") => Self::Erase,
            Some("at") => {
                let row = parts.next().and_then(|s| s.parse().ok());
                let col = parts.next().and_then(|s| s.parse().ok());
                match (row, col) {
                    (Some(row), Some(col)) if row > 0 && col > 0 => Self::At(row, col),
                    _ => Self::Unknown(input.to_string()),
                }
            }
            Some(first) => {
                if let Ok(number) = first.parse::<usize>() {
                    return Self::Select(number);
                }
                if input.chars().all(char::is_alphabetic) {
                    Self::Letters(input.to_uppercase().chars().collect())
                } else {
                    Self::Unknown(input.to_string())
                }
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: Rng, S: ScoreStore, C: Clock>(
    session: &mut Session<R, S, C>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Crucigrama - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    session.start_new_game();
    print_round(session.round(), session.elapsed_secs());

    loop {
        if let Some(selection) = session.selection() {
            let word = selection.word.clone();
            let guess = selection.guess.to_vec();
            print_active_word(&word, &guess, &session.available_letters());
        }

        let Some(line) = get_user_input("Command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                session.start_new_game();
                println!("\n🔄 New game started!");
                print_round(session.round(), session.elapsed_secs());
            }
            Command::Help => print_help(),
            Command::Clues => print_round(session.round(), session.elapsed_secs()),
            Command::Select(number) => select(session, number.checked_sub(1)),
            Command::At(row, col) => {
                let index = session.word_at(row - 1, col - 1);
                if index.is_none() {
                    println!("❌ No unsolved word covers row {row}, column {col}");
                }
                select(session, index);
            }
            Command::Letters(letters) => {
                if session.selection().is_none() {
                    println!("❌ Select a word first (type its number)");
                    continue;
                }
                for letter in letters {
                    if !session.type_letter(letter) {
                        println!("❌ Cannot place '{letter}'");
                        break;
                    }
                }
            }
            Command::Erase => {
                if !session.erase_last() {
                    println!("Nothing to erase!");
                }
            }
            Command::Check => {
                if session.selection().is_none() {
                    println!("❌ Select a word first (type its number)");
                    continue;
                }
                if session.validate_current_word() {
                    println!("✅ Correct!");
                    if session.check_game_complete() {
                        let breakdown = session.calculate_final_score();
                        print_round(session.round(), breakdown.elapsed_secs);
                        print_score(&breakdown);

                        let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                        if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                            session.start_new_game();
                            println!("\n🔄 New game started!");
                            print_round(session.round(), session.elapsed_secs());
                        } else {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    } else {
                        print_round(session.round(), session.elapsed_secs());
                    }
                } else {
                    let attempts = session
                        .selection()
                        .map_or(0, |s| session.round().attempts(s.index));
                    println!("❌ Not quite ({attempts} wrong so far)");
                }
            }
            Command::Unknown(input) => println!("❌ Unknown command '{input}' (try 'help')"),
        }
    }
}

fn select<R: Rng, S: ScoreStore, C: Clock>(session: &mut Session<R, S, C>, index: Option<usize>) {
    let Some(index) = index else {
        return;
    };
    if session.select_word(index).is_none() {
        println!("❌ Word {} is unknown or already solved", index + 1);
    }
}

fn print_help() {
    println!("Solve every word of the crossword using the letters offered for it.\n");
    println!("  <number>      select the word with that clue number");
    println!("  at ROW COL    select the word covering a cell");
    println!("  <letters>     type letters into the selected word");
    println!("  -             erase the last letter");
    println!("  check         check the selected word");
    println!("  clues         show the board again");
    println!("  new / quit    start over / leave\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
