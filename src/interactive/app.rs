//! TUI application state and logic

use crate::core::{Mask, Rule, WORD_LENGTH, Word};
use crate::engine::{GuessError, Session};
use crate::output::{CandidateSample, sample_candidates};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::error;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_mode: InputMode,
    pub word_buffer: String,
    pub mask_buffer: String,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub sample: CandidateSample<'a>,
    pub limit: usize,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Word,
    Mask,
}

/// One accepted guess, kept for the history panel
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: String,
    pub mask: Mask,
    pub rules_added: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
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

impl<'a> App<'a> {
    /// Create the app over `words`, showing at most `limit` candidates
    ///
    /// `seed` fixes the display shuffle; `None` picks a random one.
    #[must_use]
    pub fn new(words: &'a [Word], limit: usize, seed: Option<u64>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
        let session = Session::new(words);
        let sample = sample_candidates(session.candidates(), limit, &mut rng);

        Self {
            session,
            input_mode: InputMode::Word,
            word_buffer: String::new(),
            mask_buffer: String::new(),
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Type your guess, press Enter, then type its mask.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Mask letters: N = absent, E = exact, M = elsewhere".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            sample,
            limit,
            should_quit: false,
            rng,
        }
    }

    /// Re-draw the displayed sample of candidates
    pub fn refresh_candidates(&mut self) {
        self.sample = sample_candidates(self.session.candidates(), self.limit, &mut self.rng);
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.session.rules().rules()
    }

    #[must_use]
    pub const fn candidates_count(&self) -> usize {
        self.sample.total
    }

    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.session.words().len()
    }

    /// Accept the word buffer and move on to the mask
    pub fn submit_word(&mut self) {
        match Word::new(&self.word_buffer) {
            Ok(_) => {
                self.input_mode = InputMode::Mask;
                self.mask_buffer.clear();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Derive rules from the word and mask buffers
    pub fn submit_mask(&mut self) {
        let candidates_before = self.candidates_count();

        let parsed = Word::new(&self.word_buffer)
            .map_err(GuessError::from)
            .and_then(|word| Ok((word, Mask::parse(&self.mask_buffer)?)));
        let (word, mask) = match parsed {
            Ok(parsed) => parsed,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let added = self.session.add_feedback(&word, &mask).len();

        self.refresh_candidates();
        let candidates_after = self.candidates_count();

        self.history.push(HistoryEntry {
            word: word.text().to_string(),
            mask,
            rules_added: added,
            candidates_before,
            candidates_after,
        });

        if mask.is_solved() {
            self.add_message(&format!("Solved: {word}"), MessageStyle::Success);
        } else if candidates_after == 0 {
            self.add_message(
                "No candidates remain - the mask may be wrong. Ctrl-U to undo.",
                MessageStyle::Error,
            );
        } else {
            self.add_message(
                &format!("{added} rules added, {candidates_after} candidates remaining"),
                MessageStyle::Success,
            );
        }

        self.word_buffer.clear();
        self.mask_buffer.clear();
        self.input_mode = InputMode::Word;
    }

    pub fn clear_rules(&mut self) {
        self.session.clear();
        self.history.clear();
        self.refresh_candidates();
        self.add_message("Rule list cleared", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if self.session.undo_last().is_some() {
            self.history.pop();
            self.refresh_candidates();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
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
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.clear_rules(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Char('s') => self.refresh_candidates(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab if self.input_mode == InputMode::Mask => {
                // Back to editing the word
                self.input_mode = InputMode::Word;
                self.mask_buffer.clear();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::Word => self.submit_word(),
                InputMode::Mask => self.submit_mask(),
            },
            KeyCode::Backspace => {
                let buffer = match self.input_mode {
                    InputMode::Word => &mut self.word_buffer,
                    InputMode::Mask => &mut self.mask_buffer,
                };
                buffer.pop();
            }
            KeyCode::Char(c) => match self.input_mode {
                InputMode::Word => {
                    if self.word_buffer.chars().count() < WORD_LENGTH && c.is_alphabetic() {
                        self.word_buffer.extend(c.to_uppercase());
                    }
                }
                InputMode::Mask => {
                    let c = c.to_ascii_uppercase();
                    if self.mask_buffer.len() < WORD_LENGTH && matches!(c, 'N' | 'E' | 'M') {
                        self.mask_buffer.push(c);
                    }
                }
            },
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = %err, "tui loop failed");
    }

    res
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
            break;
        }
    }

    Ok(())
}
