//! Enlarged single-card overlay

use std::path::Path;

use ratatui::prelude::*;
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tarot_core::{Deck, DrawnCard};
use unicode_width::UnicodeWidthStr;

use crate::ui::{layout::centered_rect, Theme};

/// Close control shown in the overlay's top border
const CLOSE_LABEL: &str = "[\u{2715}]";

/// Screen regions of a rendered overlay
#[derive(Debug, Clone, Copy)]
pub struct DetailAreas {
    pub dialog: Rect,
    pub close: Rect,
    /// Largest scroll offset that still shows text
    pub max_scroll: u16,
}

fn field<'a>(label: &'static str, value: String, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.text_secondary()),
        Span::styled(value, theme.text()),
    ])
}

fn heading<'a>(title: &'static str, style: Style) -> [Line<'a>; 2] {
    [Line::default(), Line::from(Span::styled(title, style))]
}

fn bullets<'a>(lines: &mut Vec<Line<'a>>, items: &[String], style: Style) {
    lines.extend(
        items
            .iter()
            .map(|item| Line::from(Span::styled(format!("  \u{2022} {item}"), style))),
    );
}

/// Text of the detail view. Sections the card does not carry are left out.
///
/// A reversed card lists its shadow meanings before the light ones.
pub fn detail_lines(card: &DrawnCard, images_dir: &Path, theme: &Theme) -> Vec<Line<'static>> {
    let c = &card.card;
    let mut lines = Vec::new();

    if let Some(position) = &card.position {
        lines.push(Line::from(Span::styled(position.clone(), theme.text_muted())));
    }

    let mut title = vec![Span::styled(c.name.clone(), theme.title())];
    if card.reversed {
        title.push(Span::styled(" (Reversed)", theme.reversed_badge()));
    }
    lines.push(Line::from(title));
    lines.push(Line::default());

    lines.push(field("Number", c.number.clone(), theme));
    lines.push(field("Arcana", c.arcana.clone(), theme));
    let optional = [
        ("Suit", &c.suit),
        ("Archetype", &c.archetype),
        ("Elemental", &c.elemental),
        ("Hebrew letter", &c.hebrew_letter),
        ("Numerology", &c.numerology),
        ("Astrology", &c.astrology),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(field(label, value.clone(), theme));
        }
    }
    lines.push(field(
        "Image",
        Deck::image_path(c, images_dir).display().to_string(),
        theme,
    ));

    if !c.keywords.is_empty() {
        lines.extend(heading("Keywords", theme.text_highlight()));
        lines.push(Line::from(Span::styled(
            format!("  {}", c.keywords.join(" \u{00b7} ")),
            theme.keyword(),
        )));
    }

    if !c.fortune_telling.is_empty() {
        lines.extend(heading("Fortune Telling", theme.text_highlight()));
        bullets(&mut lines, &c.fortune_telling, theme.text());
    }

    let light = c.light_meanings();
    let shadow = c.shadow_meanings();
    let mut meanings = Vec::new();
    if !light.is_empty() {
        meanings.push(("\u{2728} Light Meanings", light, theme.meaning_light()));
    }
    if !shadow.is_empty() {
        meanings.push(("\u{1f311} Shadow Meanings", shadow, theme.meaning_shadow()));
    }
    if card.reversed {
        meanings.reverse();
    }
    for (title, items, style) in meanings {
        lines.extend(heading(title, style));
        bullets(&mut lines, items, theme.text());
    }

    if !c.questions.is_empty() {
        lines.extend(heading("Questions to Ask", theme.text_highlight()));
        bullets(&mut lines, &c.questions, theme.text());
    }

    if let Some(mythical) = &c.mythical {
        lines.extend(heading("Mythical/Spiritual", theme.text_highlight()));
        lines.push(Line::from(Span::styled(
            format!("  {mythical}"),
            theme.text_secondary().add_modifier(Modifier::ITALIC),
        )));
    }

    if let Some(affirmation) = &c.affirmation {
        lines.extend(heading("Affirmation", theme.text_highlight()));
        lines.push(Line::from(Span::styled(
            format!("  \u{201c}{affirmation}\u{201d}"),
            theme.text(),
        )));
    }

    lines
}

/// Render the overlay for `card` and return its regions for mouse hits
pub fn render(
    frame: &mut Frame,
    area: Rect,
    card: &DrawnCard,
    images_dir: &Path,
    scroll: u16,
    theme: &Theme,
) -> DetailAreas {
    let dialog = centered_rect(70, 80, area);

    // Clear the background
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {} ", card.title()))
        .title_style(theme.title())
        .title(Title::from(CLOSE_LABEL).alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_style(theme.card_border(card.reversed, true));

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text_area = chunks[0].inner(Margin::new(1, 0));
    let lines = detail_lines(card, images_dir, theme);
    let rows = wrapped_rows(&lines, text_area.width);
    let max_scroll = u16::try_from(rows.saturating_sub(usize::from(text_area.height)))
        .unwrap_or(u16::MAX);

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(content, text_area);

    let help = Paragraph::new("[\u{2191}/\u{2193}] Scroll    [\u{2190}/\u{2192}] Other cards    [Esc] Close")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);

    let close_width = CLOSE_LABEL.chars().count() as u16;
    DetailAreas {
        dialog,
        close: Rect::new(
            dialog.right().saturating_sub(close_width + 1),
            dialog.y,
            close_width,
            1,
        ),
        max_scroll,
    }
}

/// Rows `lines` take once word-wrapped to `width` columns
fn wrapped_rows(lines: &[Line], width: u16) -> usize {
    let width = usize::from(width.max(1));

    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            let mut rows = 1;
            let mut used = 0;
            for (i, word) in text.split(' ').enumerate() {
                let w = word.width();
                // Each word after the first brings its leading space
                let cost = if i == 0 { w } else { w + 1 };
                if used + cost <= width {
                    used += cost;
                    continue;
                }
                if used > 0 {
                    rows += 1;
                }
                // Words wider than a row are broken across rows
                let extra = w.saturating_sub(1) / width;
                rows += extra;
                used = w - extra * width;
            }
            rows
        })
        .sum()
}
