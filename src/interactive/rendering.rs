//! TUI rendering with ratatui
//!
//! Guess grid, keyboard panel, messages and status bar.

use super::app::App;
use crate::core::Feedback;
use crate::game::Status;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let grid_height = u16::try_from(app.view.max_guesses).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(grid_height), // Guess grid
            Constraint::Length(5),           // Keyboard
            Constraint::Length(3),           // Message
            Constraint::Length(3),           // Input area
            Constraint::Min(1),              // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_input(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

/// Tile colors for a letter's feedback
fn tile_style(feedback: Option<Feedback>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Some(Feedback::Green) => base.fg(Color::Black).bg(Color::Green),
        Some(Feedback::Yellow) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Gray) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, feedback: Option<Feedback>) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_uppercase()), tile_style(feedback))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_grid<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let view = &app.view;
    let mut lines: Vec<Line> = view
        .rows()
        .map(|(guess, row)| {
            let tiles: Vec<Span> = guess
                .chars()
                .zip(row)
                .flat_map(|(letter, &fb)| [tile(letter, Some(fb)), Span::raw(" ")])
                .collect();
            Line::from(tiles)
        })
        .collect();

    // Row being typed
    if !view.is_over() && lines.len() < view.max_guesses {
        let mut typed: Vec<char> = app.input_buffer.chars().collect();
        typed.resize(view.word_length, '_');
        let tiles: Vec<Span> = typed
            .into_iter()
            .flat_map(|letter| [tile(letter, None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(tiles));
    }

    while lines.len() < view.max_guesses {
        let empty = " _  ".repeat(view.word_length);
        lines.push(Line::styled(empty, Style::default().fg(Color::DarkGray)));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .chars()
                .map(|letter| tile(letter, app.view.letter_state(letter)))
                .collect();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_message<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let color = match app.view.status {
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
        Status::Active => Color::Yellow,
    };

    let message = Paragraph::new(app.view.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(message, area);
}

fn render_input<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = if app.view.is_over() {
        (" Game over | Ctrl-N for a new game ", Color::Green)
    } else {
        (" Type your guess | Enter to submit ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let remaining = Paragraph::new(format!(
        "Guesses left: {}",
        app.view.remaining_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution: Vec<String> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(n, count)| format!("{n}:{count}"))
        .collect();
    let distribution = Paragraph::new(distribution.join(" ")).alignment(Alignment::Center);
    f.render_widget(distribution, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
