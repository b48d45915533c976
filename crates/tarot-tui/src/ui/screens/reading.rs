//! Reading screen: controls, the spread-shaped card arrangement and the
//! detail overlay

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::ui::components::{card_detail, card_tile, controls};
use crate::ui::layout::{render_footer, render_header, render_status_line, ScreenLayout};
use crate::ui::spread_layout::{card_slots, hidden_count, ScrollGrid};

const IDLE_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "Spread"),
    ("+/-", "Count"),
    ("r", "Reversed"),
    ("d", "Draw"),
    ("?", "Help"),
    ("q", "Quit"),
];

const READING_HINTS: &[(&str, &str)] = &[
    ("\u{2190}\u{2192}", "Select card"),
    ("Enter", "Open"),
    ("d", "Redraw"),
    ("x", "Reset"),
    ("?", "Help"),
    ("q", "Quit"),
];

const DETAIL_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "Scroll"),
    ("\u{2190}\u{2192}", "Other card"),
    ("Esc", "Close"),
];

/// Render the reading screen and record its regions for mouse handling
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let layout = ScreenLayout::new(area);
    let theme = &app.theme;
    let state = &mut app.state;
    let reading = &state.reading;

    render_header(frame, layout.header, Some(&reading.spread().label()), theme);
    controls::render(frame, layout.controls, reading, theme);

    let mut title = Span::styled(" Cards ", theme.text_highlight());
    let slots = if reading.has_reading() {
        let count = reading.drawn().len();
        let block_inner = Block::default().borders(Borders::ALL).inner(layout.content);
        let fitted = card_slots(reading.spread().layout, count, block_inner);
        if hidden_count(&fitted) == 0 {
            fitted
        } else {
            // Too many cards for the area: page through rows of smaller tiles
            let grid = ScrollGrid::new(count, block_inner);
            if state.follow_cursor {
                state.card_scroll = grid.follow(state.card_scroll, state.card_cursor);
                state.follow_cursor = false;
            }
            state.card_scroll = state.card_scroll.min(grid.max_first_row());

            let slots = grid.slots(state.card_scroll);
            let (start, end) = grid.visible_range(state.card_scroll);
            title = if hidden_count(&slots) == count {
                Span::styled(" Cards (enlarge the terminal) ", theme.warning())
            } else {
                Span::styled(
                    format!(" Cards {}-{} of {} (scroll for more) ", start + 1, end, count),
                    theme.text_highlight(),
                )
            };
            slots
        }
    } else {
        Vec::new()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border());
    let inner = block.inner(layout.content);
    frame.render_widget(block, layout.content);

    if reading.has_reading() {
        let focus = !reading.is_detail_open();
        for (index, (card, slot)) in reading.drawn().iter().zip(&slots).enumerate() {
            card_tile::render(
                frame,
                *slot,
                index,
                card,
                focus && index == state.card_cursor,
                theme,
            );
        }
    } else {
        let prompt = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "No cards drawn yet",
                theme.text_secondary(),
            )),
            Line::from(Span::styled(
                "Choose a spread, then press d to draw",
                theme.text_muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(prompt, inner);
    }

    render_status_line(
        frame,
        layout.status,
        state.status_message.as_deref(),
        state.error_message.as_deref(),
        theme,
    );

    let hints = if reading.is_detail_open() {
        DETAIL_HINTS
    } else if reading.has_reading() {
        READING_HINTS
    } else {
        IDLE_HINTS
    };
    render_footer(frame, layout.footer, hints, theme);

    let detail = reading.detail_card().map(|card| {
        card_detail::render(
            frame,
            area,
            card,
            &state.images_dir,
            state.detail_scroll,
            theme,
        )
    });

    state.hit_areas.cards = slots;
    state.hit_areas.detail = detail.map(|areas| areas.dialog);
    state.hit_areas.detail_close = detail.map(|areas| areas.close);
    state.hit_areas.detail_max_scroll = detail.map_or(0, |areas| areas.max_scroll);
    state.detail_scroll = state.detail_scroll.min(state.hit_areas.detail_max_scroll);
}
