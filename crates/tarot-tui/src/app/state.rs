//! Application state

use std::path::PathBuf;

use ratatui::layout::{Position, Rect};
use tarot_core::{Deck, ReadingState};

use super::config::TuiConfig;

/// Current screen/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Spread controls and the drawn cards
    #[default]
    Reading,

    /// Key binding reference over the reading
    Help,
}

/// Screen regions recorded during the last render, used for mouse hits
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// One slot per drawn card; empty rects for cards that did not fit
    pub cards: Vec<Rect>,
    /// Detail overlay, when open
    pub detail: Option<Rect>,
    /// Close control of the detail overlay
    pub detail_close: Option<Rect>,
    /// Largest scroll offset of the detail text at its rendered size
    pub detail_max_scroll: u16,
}

impl HitAreas {
    /// Index of the card slot containing a point
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = Position::new(column, row);
        self.cards.iter().position(|area| area.contains(point))
    }

    pub fn in_detail(&self, column: u16, row: u16) -> bool {
        self.detail
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    pub fn on_detail_close(&self, column: u16, row: u16) -> bool {
        self.detail_close
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

/// Application state
pub struct AppState {
    /// Current screen
    pub current_screen: Screen,

    /// Reading: spread, count, reversal flag, drawn cards, detail view
    pub reading: ReadingState,

    /// Loaded card dataset
    pub deck: Deck,

    /// Directory card images are resolved against
    pub images_dir: PathBuf,

    /// Drawn card under the keyboard cursor
    pub card_cursor: usize,

    /// Scroll offset of the detail view
    pub detail_scroll: u16,

    /// First visible row when the reading does not fit the card area
    pub card_scroll: u16,

    /// Scroll the card area to the cursor on the next render
    pub follow_cursor: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Error message to display
    pub error_message: Option<String>,

    /// Regions from the last frame
    pub hit_areas: HitAreas,
}

impl AppState {
    /// Create new application state
    pub fn new(deck: Deck, config: &TuiConfig) -> Self {
        Self {
            current_screen: Screen::Reading,
            reading: ReadingState::with_defaults(
                config.default_spread,
                config.default_count,
                config.allow_reversed,
            ),
            deck,
            images_dir: config.images_dir.clone(),
            card_cursor: 0,
            detail_scroll: 0,
            card_scroll: 0,
            follow_cursor: true,
            status_message: None,
            error_message: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// Move the card cursor, wrapping around the reading
    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.reading.drawn().len();
        if len == 0 {
            return;
        }
        self.card_cursor = if forward {
            (self.card_cursor + 1) % len
        } else {
            (self.card_cursor + len - 1) % len
        };
        self.follow_cursor = true;
    }

    /// Scroll the detail text, staying within the last rendered extent
    pub fn scroll_detail(&mut self, down: bool, step: u16) {
        self.detail_scroll = if down {
            self.detail_scroll
                .saturating_add(step)
                .min(self.hit_areas.detail_max_scroll)
        } else {
            self.detail_scroll.saturating_sub(step)
        };
    }

    /// Scroll the card area by one row without moving the cursor
    pub fn scroll_cards(&mut self, down: bool) {
        self.follow_cursor = false;
        self.card_scroll = if down {
            self.card_scroll.saturating_add(1)
        } else {
            self.card_scroll.saturating_sub(1)
        };
    }

    /// Clear status messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_areas() {
        let hits = HitAreas {
            cards: vec![Rect::new(0, 0, 10, 5), Rect::default(), Rect::new(12, 0, 10, 5)],
            detail: Some(Rect::new(5, 5, 20, 10)),
            detail_close: Some(Rect::new(20, 5, 3, 1)),
            detail_max_scroll: 0,
        };

        assert_eq!(hits.card_at(3, 3), Some(0));
        assert_eq!(hits.card_at(15, 2), Some(2));
        assert_eq!(hits.card_at(11, 2), None);
        assert!(hits.in_detail(6, 6));
        assert!(!hits.in_detail(1, 1));
        assert!(hits.on_detail_close(21, 5));
    }
}
