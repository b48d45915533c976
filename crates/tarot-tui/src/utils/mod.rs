//! Utility functions for the TUI

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, adding an ellipsis when cut
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}

/// Title of a card slot, e.g. "3 · Past"
pub fn slot_title(index: usize, position: Option<&str>) -> String {
    match position {
        Some(label) => format!("{} \u{00b7} {}", index + 1, label),
        None => format!("{}", index + 1),
    }
}

/// "1 card", "3 cards"
pub fn pluralize_cards(n: usize) -> String {
    format!("{} card{}", n, if n == 1 { "" } else { "s" })
}
