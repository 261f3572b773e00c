//! TUI rendering with ratatui
//!
//! Board, clues, and the letter rack for the crossword.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Direction as WordDirection;
use crate::output::formatters::{cell_label, format_time, number_at};
use crate::session::scoring::TIME_LIMIT_SECS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Active word
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Clues and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_active_word(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.session.round().theme();
    let title = if theme.is_empty() {
        "🧩 CRUCIGRAMA".to_string()
    } else {
        format!("🧩 CRUCIGRAMA - {theme}")
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let grid = round.grid();
    let words = round.words();
    let active = round
        .active()
        .filter(|a| !round.is_completed(a.index()))
        .map(|a| (&words[a.index()], a.guess()));

    let lines: Vec<Line> = (0..grid.height())
        .map(|row| {
            let spans: Vec<Span> = (0..grid.width())
                .map(|col| {
                    let letter = grid.get(row, col);
                    let solved = words
                        .iter()
                        .enumerate()
                        .any(|(i, w)| round.is_completed(i) && w.covers(row, col));

                    // Show the in-progress guess over the active word's cells
                    let typed = active.and_then(|(word, guess)| {
                        word.cells()
                            .position(|cell| cell == (row, col))
                            .and_then(|i| guess.get(i).copied().flatten())
                    });
                    let in_active = active.is_some_and(|(word, _)| word.covers(row, col));

                    let (label, style) = match (letter, typed) {
                        (None, _) => (cell_label(None, false, None), Style::default()),
                        (Some(_), _) if solved => (
                            cell_label(letter, true, None),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                        (Some(_), Some(ch)) if in_active => (
                            cell_label(Some(ch), true, None),
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        (Some(_), _) => (
                            cell_label(letter, false, number_at(words, row, col)),
                            if in_active {
                                Style::default().fg(Color::Black).bg(Color::Yellow)
                            } else {
                                Style::default().fg(Color::White).bg(Color::DarkGray)
                            },
                        ),
                    };
                    Span::styled(label, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                " Board {}/{} ",
                round.completed_count(),
                words.len()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Clues
            Constraint::Length(3), // Time gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_clues(f, app, chunks[0]);
    render_time(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let active = round.active().map(|a| a.index());

    let mut items: Vec<ListItem> = Vec::new();
    for (direction, title) in [
        (WordDirection::Across, "Across"),
        (WordDirection::Down, "Down"),
    ] {
        items.push(
            ListItem::new(title).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        );
        for (i, word) in round.words().iter().enumerate() {
            if word.direction != direction {
                continue;
            }
            let text = format!("{:>3}. {} ({})", word.number, word.clue(), word.len());
            let style = if round.is_completed(i) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if active == Some(i) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            items.push(ListItem::new(text).style(style));
        }
    }

    let clues = List::new(items).block(
        Block::default()
            .title(" Clues ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(clues, area);
}

fn render_time(f: &mut Frame, app: &App, area: Rect) {
    let elapsed = app
        .last_score
        .map_or_else(|| app.session.elapsed_secs(), |s| s.elapsed_secs);
    let remaining = TIME_LIMIT_SECS.saturating_sub(elapsed);
    let percent = (remaining * 100 / TIME_LIMIT_SECS) as u16;

    let color = match percent {
        0..=20 => Color::Red,
        21..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Time Bonus ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{} elapsed | {} left",
            format_time(elapsed),
            format_time(remaining)
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_active_word(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.session.selection()) {
        (InputMode::WinCelebration, _) => {
            let content = app.last_score.map_or_else(Vec::new, |s| {
                vec![Line::from(format!(
                    "Base {} + bonus {} - penalty {} = {}   Total: {}",
                    s.base, s.time_bonus, s.penalty, s.score, s.total_score
                ))]
            });
            (
                " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
                content,
                Color::Green,
            )
        }
        (InputMode::Playing, Some(selection)) => {
            let guess: Vec<Span> = selection
                .guess
                .iter()
                .map(|slot| {
                    Span::styled(
                        format!(" {} ", slot.unwrap_or('_')),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect();

            let rack: Vec<Span> = app
                .session
                .available_letters()
                .into_iter()
                .map(|(letter, used)| {
                    let style = if used {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();

            let direction = match selection.word.direction {
                WordDirection::Across => "across",
                WordDirection::Down => "down",
            };
            (
                format!(
                    " {} {}: {} ",
                    selection.word.number,
                    direction,
                    selection.word.clue()
                ),
                vec![Line::from(guess), Line::from(rack)],
                Color::Yellow,
            )
        }
        (InputMode::Playing, None) => (
            " No word selected ".to_string(),
            vec![Line::from("Press Tab to pick a word")],
            Color::DarkGray,
        ),
    };

    let input = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round = app.session.round();
    let progress = Paragraph::new(format!(
        "Solved: {}/{} | Mistakes: {}",
        round.completed_count(),
        round.words().len(),
        round.total_attempts()
    ))
    .alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let score = Paragraph::new(format!(
        "Total: {} | Rounds: {}",
        app.session.total_score(),
        app.rounds_played
    ))
    .alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | n: New Game",
        InputMode::Playing => {
            "Esc: Quit | Ctrl+N: New | Enter: Check | Tab/←→: Word | Backspace: Erase"
        }
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
