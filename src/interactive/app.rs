//! TUI application state and logic

use crate::commands::find_solutions;
use crate::core::{Alert, WordValidator};
use crate::dictionary::WordListDictionary;
use crate::session::GameSession;
use crate::wordlists::{FALLBACK_ROOT_WORD, RootWordPool};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App<'a> {
    pub session: GameSession,
    pub validator: &'a WordValidator<WordListDictionary>,
    pub pool: &'a RootWordPool,
    pub rng: StdRng,
    pub input_mode: InputMode,
    /// Rejection currently shown as a popup
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Number of acceptable words for the current root, if the scan succeeded
    pub possible_words: Option<usize>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: Option<i32>,
    pub total_words: usize,
}

impl Statistics {
    fn record(&mut self, session: &GameSession) {
        self.games_played += 1;
        self.total_words += session.words_found();
        self.best_score = Some(
            self.best_score
                .map_or(session.score(), |best| best.max(session.score())),
        );
    }
}

impl<'a> App<'a> {
    pub fn new(
        validator: &'a WordValidator<WordListDictionary>,
        pool: &'a RootWordPool,
        mut rng: StdRng,
    ) -> Self {
        let session = GameSession::start(pool, &mut rng);

        let mut app = Self {
            session,
            validator,
            pool,
            rng,
            input_mode: InputMode::Typing,
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word. Enter submits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            possible_words: None,
            should_quit: false,
        };
        if pool.is_fallback() {
            app.add_message(
                &format!("Start words unavailable, playing with '{FALLBACK_ROOT_WORD}'"),
                MessageStyle::Error,
            );
        }
        app.count_possible_words();
        app
    }

    /// Scan the dictionary for how many words the current root allows
    pub fn count_possible_words(&mut self) {
        let candidates: Vec<&str> = self.validator.dictionary().words().collect();
        self.possible_words =
            match find_solutions(self.session.root(), &candidates, self.validator) {
                Ok(words) => Some(words.len()),
                Err(err) => {
                    warn!(error = %err, "could not count possible words");
                    None
                }
            };
    }

    /// Submit whatever is in the input box
    pub fn submit(&mut self) {
        match self.session.submit(self.validator) {
            Ok(None) => {}
            Ok(Some(outcome)) => match outcome.alert(self.session.root().text()) {
                None => {
                    let word = self
                        .session
                        .used_words()
                        .first()
                        .cloned()
                        .unwrap_or_default();
                    self.add_message(
                        &format!("✓ {} (+1)", word.to_uppercase()),
                        MessageStyle::Success,
                    );
                }
                Some(alert) => {
                    self.add_message(&alert.to_string(), MessageStyle::Error);
                    self.alert = Some(alert);
                    self.input_mode = InputMode::Alert;
                }
            },
            Err(err) => {
                warn!(error = %err, "dictionary lookup failed");
                self.add_message(
                    &format!("Dictionary unavailable: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.stats.record(&self.session);
        self.session.new_game(self.pool, &mut self.rng);
        self.alert = None;
        self.input_mode = InputMode::Typing;
        self.messages.clear();
        self.count_possible_words();
        self.add_message(
            &format!(
                "New game! Root word: {}",
                self.session.root().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
        info!(games = self.stats.games_played, "new game from TUI");
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
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
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                // Only acknowledging the alert does anything
                if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match code {
                KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c)
                    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.session.pending_mut().push(c);
                }
                KeyCode::Backspace => {
                    self.session.pending_mut().pop();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Esc => {
                    if self.session.pending().is_empty() {
                        self.should_quit = true;
                    } else {
                        self.session.pending_mut().clear();
                    }
                }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            app.stats.record(&app.session);
            info!(
                games = app.stats.games_played,
                best = ?app.stats.best_score,
                "leaving TUI"
            );
            break;
        }
    }

    Ok(())
}
