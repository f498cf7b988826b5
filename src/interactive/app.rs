//! TUI application state and logic

use crate::game::{GameSession, GameView, Status, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Results across the games played in this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses + 1],
        }
    }

    /// Record a finished game
    pub fn record(&mut self, view: &GameView) {
        self.total_games += 1;
        if view.status == Status::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(view.guesses.len()) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App<S> {
    pub session: GameSession<S>,
    pub view: GameView,
    pub input_buffer: String,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        let view = session.view();
        let stats = Statistics::new(session.config().max_guesses());
        Self {
            session,
            view,
            input_buffer: String::new(),
            stats,
            should_quit: false,
        }
    }

    /// Submit the typed guess
    pub fn submit(&mut self) {
        let was_over = self.view.is_over();
        let guesses_before = self.view.guesses.len();
        self.view = self.session.submit_guess(&self.input_buffer);

        if !was_over && self.view.is_over() {
            self.stats.record(&self.view);
        }
        // Rejected input stays in the buffer so it can be corrected
        if self.view.guesses.len() > guesses_before {
            self.input_buffer.clear();
        }
    }

    pub fn new_game(&mut self) {
        self.view = self.session.reset();
        self.input_buffer.clear();
    }

    /// Type a letter, up to the word length
    pub fn push_letter(&mut self, c: char) {
        if self.view.is_over() || !c.is_alphabetic() {
            return;
        }
        if self.input_buffer.chars().count() < self.view.word_length {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.push_letter(c),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
