//! Reading controls: spread selector, card count, reversal toggle, actions

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tarot_core::ReadingState;

use crate::ui::layout::section_block;
use crate::ui::Theme;
use crate::utils::pluralize_cards;

/// Lines of the controls panel for the current reading state
pub fn control_lines<'a>(reading: &ReadingState, theme: &Theme) -> Vec<Line<'a>> {
    let spread = reading.spread();

    let mut first = vec![
        Span::styled("Spread: ", theme.text_secondary()),
        Span::styled("\u{25c0} ", theme.text_muted()),
        Span::styled(spread.label(), theme.text_highlight()),
        Span::styled(" \u{25b6}", theme.text_muted()),
    ];

    // Count input only exists in free-count mode
    if spread.is_free_count() {
        first.extend([
            Span::raw("    "),
            Span::styled("Number of cards: ", theme.text_secondary()),
            Span::styled("- ", theme.text_muted()),
            Span::styled(reading.requested_count().to_string(), theme.text_highlight()),
            Span::styled(" +", theme.text_muted()),
        ]);
    }

    let checkbox = if reading.allow_reversed() {
        "[\u{2713}]"
    } else {
        "[ ]"
    };
    let second = vec![
        Span::styled(checkbox, theme.text_highlight()),
        Span::styled(" Allow reversed cards", theme.text()),
    ];

    let mut third = vec![
        Span::styled("[d]", theme.text_highlight()),
        Span::styled(
            format!(" Draw {}", pluralize_cards(reading.effective_count())),
            theme.text(),
        ),
    ];
    if reading.has_reading() {
        third.extend([
            Span::raw("    "),
            Span::styled("[x]", theme.text_highlight()),
            Span::styled(" Reset", theme.text()),
        ]);
    }

    vec![Line::from(first), Line::from(second), Line::from(third)]
}

/// Render the controls panel
pub fn render(frame: &mut Frame, area: Rect, reading: &ReadingState, theme: &Theme) {
    let panel = Paragraph::new(control_lines(reading, theme))
        .block(section_block("Reading", theme))
        .alignment(Alignment::Center);
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_count_shown_only_in_free_mode() {
        let theme = Theme::default();
        let mut reading = ReadingState::new();
        let free = text(&control_lines(&reading, &theme));
        assert!(free[0].contains("Number of cards: - 3 +"));
        assert!(free[2].contains("Draw 3 cards"));

        reading.select_spread(5);
        let fixed = text(&control_lines(&reading, &theme));
        assert!(fixed[0].contains("Celtic Cross (10 cards)"));
        assert!(!fixed[0].contains("Number of cards"));
        assert!(fixed[2].contains("Draw 10 cards"));
    }

    #[test]
    fn test_reversal_checkbox() {
        let theme = Theme::default();
        let mut reading = ReadingState::new();
        assert!(text(&control_lines(&reading, &theme))[1].starts_with("[ ]"));
        reading.set_allow_reversed(true);
        assert!(text(&control_lines(&reading, &theme))[1].starts_with("[\u{2713}]"));
    }

    #[test]
    fn test_reset_only_with_reading() {
        let theme = Theme::default();
        let reading = ReadingState::new();
        assert!(!text(&control_lines(&reading, &theme))[2].contains("Reset"));
    }
}
