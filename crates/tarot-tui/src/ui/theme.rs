//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Reader color palette
pub struct Theme {
    // Primary branding colors
    pub mystic_gold: Color,
    pub mystic_violet: Color,
    pub mystic_dark: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Card faces
    pub card_upright: Color,
    pub card_reversed: Color,
    pub meaning_light: Color,
    pub meaning_shadow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding
            mystic_gold: Color::Rgb(230, 190, 90),   // #E6BE5A
            mystic_violet: Color::Rgb(149, 117, 205), // #9575CD
            mystic_dark: Color::Rgb(26, 20, 38),     // #1A1426

            // Status colors
            success: Color::Rgb(102, 187, 106), // #66BB6A - Green
            warning: Color::Rgb(255, 167, 38),  // #FFA726 - Orange
            danger: Color::Rgb(239, 83, 80),    // #EF5350 - Red

            // UI elements
            border: Color::Rgb(77, 64, 102),           // #4D4066
            border_focused: Color::Rgb(230, 190, 90),  // #E6BE5A
            text_primary: Color::Rgb(245, 240, 250),   // #F5F0FA
            text_secondary: Color::Rgb(190, 180, 205), // #BEB4CD
            text_muted: Color::Rgb(120, 110, 135),     // #786E87
            selection: Color::Rgb(52, 40, 72),         // #342848

            // Card faces
            card_upright: Color::Rgb(149, 117, 205),
            card_reversed: Color::Rgb(239, 83, 80),
            meaning_light: Color::Rgb(255, 224, 130),
            meaning_shadow: Color::Rgb(144, 164, 174),
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default()
            .fg(self.mystic_gold)
            .add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.mystic_gold)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get selection/highlight style
    pub fn selection(&self) -> Style {
        Style::default().bg(self.selection).fg(self.mystic_gold)
    }

    /// Border style of a card tile
    pub fn card_border(&self, reversed: bool, focused: bool) -> Style {
        if focused {
            self.border_focused().add_modifier(Modifier::BOLD)
        } else if reversed {
            Style::default().fg(self.card_reversed)
        } else {
            Style::default().fg(self.card_upright)
        }
    }

    /// Reversal badge
    pub fn reversed_badge(&self) -> Style {
        Style::default()
            .fg(self.card_reversed)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn meaning_light(&self) -> Style {
        Style::default().fg(self.meaning_light)
    }

    pub fn meaning_shadow(&self) -> Style {
        Style::default().fg(self.meaning_shadow)
    }

    /// Keyword tag
    pub fn keyword(&self) -> Style {
        Style::default().fg(self.mystic_violet).bg(self.selection)
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            card_upright: Color::White,
            card_reversed: Color::LightRed,
            ..Self::default()
        }
    }
}
