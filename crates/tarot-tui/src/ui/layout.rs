//! Layout helpers for consistent screen structure

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Theme;

/// Reading screen layout with header, controls, cards, status and footer
pub struct ScreenLayout {
    /// Header area
    pub header: Rect,
    /// Spread controls
    pub controls: Rect,
    /// Drawn cards
    pub content: Rect,
    /// Status line
    pub status: Rect,
    /// Footer/help area
    pub footer: Rect,
}

impl ScreenLayout {
    /// Create the standard layout from the total area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(5), // Controls
                Constraint::Min(6),    // Cards
                Constraint::Length(1), // Status
                Constraint::Length(2), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            controls: chunks[1],
            content: chunks[2],
            status: chunks[3],
            footer: chunks[4],
        }
    }
}

/// Create a centered box for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the header bar
pub fn render_header(frame: &mut Frame, area: Rect, breadcrumb: Option<&str>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border())
        .style(Style::default().bg(theme.mystic_dark));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Min(20),
            Constraint::Length(8),
        ])
        .split(inner);

    let logo = Paragraph::new(format!(" {} TAROTATES: CARD READER", '\u{2726}')).style(theme.title());
    frame.render_widget(logo, chunks[0]);

    if let Some(crumb) = breadcrumb {
        let breadcrumb_text = Paragraph::new(crumb)
            .style(theme.text_secondary())
            .alignment(Alignment::Center);
        frame.render_widget(breadcrumb_text, chunks[1]);
    }

    let time = chrono::Local::now().format("%H:%M").to_string();
    let time_widget = Paragraph::new(time)
        .style(theme.text_muted())
        .alignment(Alignment::Right);
    frame.render_widget(time_widget, chunks[2]);
}

/// Render a standard footer with help hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_highlight()),
                Span::styled(format!(" {}  ", action), theme.text_muted()),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    frame.render_widget(footer, inner);
}

/// Render a one-line status message; errors take precedence
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    status: Option<&str>,
    error: Option<&str>,
    theme: &Theme,
) {
    let style = if error.is_some() {
        theme.danger()
    } else {
        theme.success()
    };

    let text = error.or(status).unwrap_or("");

    let status_line = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(status_line, area);
}

/// Create a section block with title
pub fn section_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.text_highlight())
        .borders(Borders::ALL)
        .border_style(theme.border())
}
