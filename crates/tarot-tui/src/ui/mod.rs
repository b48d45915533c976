//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod spread_layout;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function. The reading is always drawn; help sits on top of it.
pub fn render(frame: &mut Frame, app: &mut App) {
    screens::reading::render(frame, app);

    match app.state.current_screen {
        Screen::Reading => {}
        Screen::Help => screens::help::render(frame, app),
    }
}
