//! TUI application state and logic

use crate::session::{ScoreBreakdown, ScoreStore, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Session type driven by the TUI
pub type TuiSession = Session<StdRng, Box<dyn ScoreStore>>;

/// Redraw interval for the timer
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: TuiSession,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub last_score: Option<ScoreBreakdown>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Wrap a session and start the first round
    #[must_use]
    pub fn new(session: TuiSession) -> Self {
        let mut app = Self {
            session,
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            last_score: None,
            rounds_played: 0,
            should_quit: false,
        };
        app.new_game();
        app
    }

    pub fn new_game(&mut self) {
        let new_round = self.session.start_new_game();
        let theme = new_round.theme.to_string();
        let count = new_round.words.len();

        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.last_score = None;

        if count == 0 {
            self.add_message("No words could be placed. Press Ctrl+N to retry.", MessageStyle::Error);
            return;
        }

        self.add_message(
            &format!("New crossword: {theme} ({count} words)"),
            MessageStyle::Info,
        );
        self.add_message(
            "Type letters, Enter to check, Tab to switch word",
            MessageStyle::Info,
        );
        self.session.select_word(0);
    }

    /// Move to the next unsolved word, wrapping around
    pub fn select_next(&mut self, forward: bool) {
        let count = self.session.round().words().len();
        if count == 0 {
            return;
        }
        let current = self.session.round().active().map_or(count - 1, |a| a.index());

        for step in 1..=count {
            let index = if forward {
                (current + step) % count
            } else {
                (current + count * step - step) % count
            };
            if !self.session.round().is_completed(index) {
                self.session.select_word(index);
                return;
            }
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        if self.session.selection().is_none() {
            return;
        }
        if !self.session.type_letter(letter) {
            self.add_message(
                &format!("'{}' is not available", letter.to_uppercase()),
                MessageStyle::Error,
            );
        }
    }

    pub fn erase(&mut self) {
        self.session.erase_last();
    }

    pub fn validate(&mut self) {
        let Some(selection) = self.session.selection() else {
            return;
        };
        let index = selection.index;
        let number = selection.word.number;

        if self.session.round().is_completed(index) {
            return;
        }

        if self.session.validate_current_word() {
            self.add_message(&format!("✅ {number} solved!"), MessageStyle::Success);
            if self.session.check_game_complete() {
                self.finish_round();
            } else {
                self.select_next(true);
            }
        } else {
            let attempts = self.session.round().attempts(index);
            self.add_message(
                &format!("❌ {number} is wrong ({attempts} so far)"),
                MessageStyle::Error,
            );
        }
    }

    fn finish_round(&mut self) {
        let breakdown = self.session.calculate_final_score();
        self.rounds_played += 1;
        self.input_mode = InputMode::WinCelebration;

        let celebration = match breakdown.attempts {
            0 => "🏆 FLAWLESS! Not a single mistake! 🌟",
            1..=2 => "🔥 MAGNIFICENT! 🔥",
            3..=5 => "✨ SPLENDID! ✨",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message(
            &format!(
                "Score {} | Total {}",
                breakdown.score, breakdown.total_score
            ),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.last_score = Some(breakdown);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Down | KeyCode::Right => self.select_next(true),
                KeyCode::BackTab | KeyCode::Up | KeyCode::Left => self.select_next(false),
                KeyCode::Backspace => self.erase(),
                KeyCode::Enter => self.validate(),
                KeyCode::Char(c) if c.is_alphabetic() => self.type_letter(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the timer keeps ticking without input.
        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::session::{GameConfig, MemoryStore};
    use crate::vocabulary::{Theme, Vocabulary};
    use rand::SeedableRng;

    fn app_with(words: &[&str]) -> App {
        let entries = words
            .iter()
            .map(|w| WordEntry::new(w, "clue").unwrap())
            .collect();
        let session = Session::new(
            Vocabulary::new(vec![Theme::new("proba", entries)]),
            GameConfig::default(),
            StdRng::seed_from_u64(5),
            Box::new(MemoryStore::new()) as Box<dyn ScoreStore>,
        );
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_answer(app: &mut App) {
        let letters = app.session.selection().unwrap().word.entry.letters().to_vec();
        for letter in letters {
            press(app, KeyCode::Char(letter.to_ascii_lowercase()));
        }
    }

    #[test]
    fn new_app_selects_first_word() {
        let app = app_with(&["CASA", "MAR"]);
        assert_eq!(app.session.round().active().map(|a| a.index()), Some(0));
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn tab_cycles_words() {
        let mut app = app_with(&["CASA", "MAR"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.round().active().map(|a| a.index()), Some(1));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.round().active().map(|a| a.index()), Some(0));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.round().active().map(|a| a.index()), Some(1));
    }

    #[test]
    fn typing_and_backspace_edit_guess() {
        let mut app = app_with(&["CASA", "MAR"]);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.selection().unwrap().guess[0], Some('C'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.selection().unwrap().guess[0], None);
    }

    #[test]
    fn wrong_guess_reports_error() {
        let mut app = app_with(&["CASA", "MAR"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.round().attempts(0), 1);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn solving_every_word_celebrates() {
        let mut app = app_with(&["CASA", "MAR"]);
        type_answer(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.round().active().map(|a| a.index()), Some(1));
        assert_eq!(app.input_mode, InputMode::Playing);

        type_answer(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.rounds_played, 1);
        assert!(app.last_score.is_some_and(|s| s.score >= 1000));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.session.round().completed_count(), 0);
    }

    #[test]
    fn escape_quits() {
        let mut app = app_with(&["CASA"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
