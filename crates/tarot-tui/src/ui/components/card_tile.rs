//! Drawn card tile shown in a spread slot

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tarot_core::DrawnCard;

use crate::ui::Theme;
use crate::utils::{slot_title, truncate};

/// Render one drawn card into its slot
pub fn render(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    card: &DrawnCard,
    focused: bool,
    theme: &Theme,
) {
    if area.is_empty() {
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let title = truncate(
        &slot_title(index, card.position.as_deref()),
        inner_width.saturating_sub(2),
    );

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused {
            theme.text_highlight()
        } else {
            theme.text_secondary()
        })
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(theme.card_border(card.reversed, focused));

    let name_style = if focused {
        theme.selection().add_modifier(Modifier::BOLD)
    } else {
        theme.text_highlight()
    };
    let mut lines = vec![Line::from(Span::styled(
        truncate(&card.card.name, inner_width),
        name_style,
    ))];

    if card.reversed {
        lines.push(Line::from(Span::styled(
            "\u{21bb} Reversed",
            theme.reversed_badge(),
        )));
    }

    let suit = card.card.suit.as_deref().unwrap_or(&card.card.arcana);
    lines.push(Line::from(Span::styled(
        truncate(&format!("{} \u{00b7} {}", card.card.number, suit), inner_width),
        theme.text_muted(),
    )));

    if !card.card.keywords.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&card.card.keywords.join(", "), inner_width),
            theme.text_secondary(),
        )));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
