//! Event handling for the TUI

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resized
    Resize(u16, u16),
    /// Terminal tick (refreshes the header clock)
    Tick,
}

/// Polls the terminal for input, emitting a tick when nothing arrives in time
pub struct EventHandler {
    /// Tick rate for redraws
    tick_rate: Duration,
    /// Last tick time
    last_tick: Instant,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Block until the next event or tick
    pub fn next(&mut self) -> std::io::Result<Event> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    // Ignore key release/repeat events reported by some terminals
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        return Ok(Event::Key(key));
                    }
                    CrosstermEvent::Mouse(mouse) => return Ok(Event::Mouse(mouse)),
                    CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
                    _ => {}
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(Event::Tick);
            }
        }
    }
}
