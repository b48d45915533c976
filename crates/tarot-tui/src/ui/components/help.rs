//! Key binding reference

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::ui::{layout::centered_rect, Theme};

/// Help content for one group of bindings
pub struct HelpContent {
    /// Section title
    pub title: &'static str,
    /// Description
    pub description: &'static str,
    /// Key bindings
    pub keys: &'static [(&'static str, &'static str)],
}

/// Binding groups shown in the help overlay
pub const HELP_SECTIONS: &[HelpContent] = &[
    HelpContent {
        title: "Reading",
        description: "Choose a spread, set how many cards to draw when the spread has no fixed \
                      positions, then draw. Drawn cards are laid out in the shape of the spread. \
                      Readings too large for the window scroll with the selection or the \
                      mouse wheel.",
        keys: &[
            ("\u{2191}/\u{2193}", "Previous/next spread"),
            ("+/-", "More/fewer cards (free spreads)"),
            ("r", "Allow reversed cards"),
            ("d/Space", "Draw"),
            ("x", "Reset reading"),
            ("\u{2190}/\u{2192}", "Move between cards"),
            ("Enter", "Open selected card"),
            ("1-9, 0", "Open card by number"),
            ("q", "Quit"),
        ],
    },
    HelpContent {
        title: "Card detail",
        description: "The enlarged view lists every section the card carries. Click outside \
                      the overlay or on the close control to dismiss it.",
        keys: &[
            ("\u{2191}/\u{2193}", "Scroll"),
            ("\u{2190}/\u{2192}", "Previous/next card"),
            ("Esc", "Close"),
        ],
    },
];

/// Lines for a help section
pub fn help_lines(content: &HelpContent, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(content.title, theme.text_highlight())),
        Line::from(Span::styled(content.description, theme.text())),
        Line::default(),
    ];
    lines.extend(content.keys.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!("  [{:^9}]  ", key), theme.text_highlight()),
            Span::styled(*action, theme.text_secondary()),
        ])
    }));
    lines.push(Line::default());
    lines
}

/// Render the help overlay
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let dialog = centered_rect(70, 80, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(" Help ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let lines: Vec<Line> = HELP_SECTIONS
        .iter()
        .flat_map(|section| help_lines(section, theme))
        .chain(std::iter::once(Line::from(Span::styled(
            "Press Esc or ? to close",
            theme.text_muted(),
        ))))
        .collect();

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(help, inner);
}
