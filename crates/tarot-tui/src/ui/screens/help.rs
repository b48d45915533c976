//! Help screen, drawn over the reading

use ratatui::prelude::*;

use crate::app::App;
use crate::ui::components::help;

/// Render the help overlay
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    help::render_help(frame, area, &app.theme);
}
