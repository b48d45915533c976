//! Application state and event handling

pub mod config;
mod events;
mod state;

pub use config::{ConfigError, TuiConfig};
pub use events::{Event, EventHandler};
pub use state::{AppState, HitAreas, Screen};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use tarot_core::{spread, Deck};

use crate::ui;
use crate::ui::Theme;
use crate::utils::pluralize_cards;

/// Application result type
pub type AppResult<T> = anyhow::Result<T>;

/// Rows scrolled per key press or wheel step in the detail view
const SCROLL_STEP: u16 = 2;

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Color palette
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Random source for draws
    rng: ChaCha8Rng,
}

impl App {
    /// Create a new application instance.
    ///
    /// With a seed every reading of the session is reproducible.
    pub fn new(deck: Deck, config: &TuiConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Self {
            state: AppState::new(deck, config),
            theme,
            should_quit: false,
            rng,
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let mut events = EventHandler::new(Duration::from_millis(250));

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;
            self.handle_event(events.next()?);
        }

        Ok(())
    }

    /// Apply a single event to the state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) | Event::Tick => {}
        }
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state.current_screen {
            Screen::Help => self.handle_help_key(key.code),
            Screen::Reading if self.state.reading.is_detail_open() => {
                self.handle_detail_key(key.code)
            }
            Screen::Reading => self.handle_reading_key(key.code),
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                self.state.current_screen = Screen::Reading;
            }
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.current_screen = Screen::Help,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('[') => self.cycle_spread(false),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char(']') => self.cycle_spread(true),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_count(1),
            KeyCode::Char('-') => self.adjust_count(-1),
            KeyCode::Char('r') => self.toggle_reversed(),
            KeyCode::Char('d') | KeyCode::Char(' ') => self.draw_cards(),
            KeyCode::Char('x') | KeyCode::Backspace => self.reset_reading(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.state.move_cursor(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.state.move_cursor(true),
            KeyCode::Enter => self.open_detail(self.state.card_cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // 1-9 open a card directly, 0 opens the tenth
                let index = c.to_digit(10).map_or(0, |d| if d == 0 { 9 } else { d - 1 });
                self.open_detail(index as usize);
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => self.close_detail(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_detail(false, SCROLL_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_detail(true, SCROLL_STEP),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.state.move_cursor(false);
                self.open_detail(self.state.card_cursor);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.move_cursor(true);
                self.open_detail(self.state.card_cursor);
            }
            _ => {}
        }
    }

    /// Handle mouse events against the regions of the last frame
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hits = &self.state.hit_areas;
                let dismisses_detail =
                    hits.on_detail_close(column, row) || !hits.in_detail(column, row);
                let clicked_card = hits.card_at(column, row);

                if self.state.current_screen == Screen::Help {
                    self.state.current_screen = Screen::Reading;
                } else if self.state.reading.is_detail_open() {
                    // Clicks inside the overlay content do not dismiss it
                    if dismisses_detail {
                        self.close_detail();
                    }
                } else if let Some(index) = clicked_card {
                    self.state.card_cursor = index;
                    self.open_detail(index);
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp
                if self.state.current_screen == Screen::Reading =>
            {
                let down = mouse.kind == MouseEventKind::ScrollDown;
                if self.state.reading.is_detail_open() {
                    self.state.scroll_detail(down, SCROLL_STEP);
                } else if self.state.reading.has_reading() {
                    self.state.scroll_cards(down);
                }
            }
            _ => {}
        }
    }

    fn cycle_spread(&mut self, forward: bool) {
        let count = spread::count();
        let current = self.state.reading.spread_index();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.state.reading.select_spread(next);
        tracing::debug!("Selected spread {:?}", self.state.reading.spread().name);
    }

    fn adjust_count(&mut self, delta: i64) {
        if !self.state.reading.spread().is_free_count() {
            return;
        }
        let current = i64::try_from(self.state.reading.requested_count()).unwrap_or(i64::MAX);
        let max = i64::try_from(self.state.deck.len()).unwrap_or(i64::MAX);
        self.state
            .reading
            .set_count(current.saturating_add(delta).min(max));
    }

    fn toggle_reversed(&mut self) {
        let allow = !self.state.reading.allow_reversed();
        self.state.reading.set_allow_reversed(allow);
    }

    /// Draw a new reading
    pub fn draw_cards(&mut self) {
        self.state.clear_messages();
        match self.state.reading.draw(self.state.deck.cards(), &mut self.rng) {
            Ok(()) => {
                self.state.card_cursor = 0;
                self.state.card_scroll = 0;
                self.state.follow_cursor = true;
                self.state.detail_scroll = 0;
                let drawn = pluralize_cards(self.state.reading.drawn().len());
                let spread = self.state.reading.spread();
                self.state.status_message = Some(if spread.is_free_count() {
                    format!("Drew {}", drawn)
                } else {
                    format!("Drew {} for {}", drawn, spread.name)
                });
            }
            Err(e) => {
                tracing::error!("Draw failed: {}", e);
                self.state.error_message = Some(e.to_string());
            }
        }
    }

    /// Clear the current reading
    pub fn reset_reading(&mut self) {
        if !self.state.reading.has_reading() {
            return;
        }
        self.state.reading.reset();
        self.state.card_cursor = 0;
        self.state.card_scroll = 0;
        self.state.detail_scroll = 0;
        self.state.clear_messages();
        self.state.status_message = Some("Reading cleared".to_string());
    }

    /// Open the detail view for a drawn card
    pub fn open_detail(&mut self, index: usize) {
        if self.state.reading.open_detail(index) {
            self.state.card_cursor = index;
            self.state.follow_cursor = true;
            self.state.detail_scroll = 0;
        }
    }

    /// Close the detail view
    pub fn close_detail(&mut self) {
        self.state.reading.close_detail();
        self.state.detail_scroll = 0;
    }
}
