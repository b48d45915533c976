//! Spread catalog
//!
//! A spread names the slots of a reading. The order of the position labels is
//! the draw order and also picks the spatial slot in the layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual arrangement of a spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadLayout {
    /// Rows of cards, used for free-count readings
    Grid,
    Single,
    Horizontal,
    Triangle,
    CelticCross,
    Horseshoe,
    Relationship,
}

impl SpreadLayout {
    /// Stable tag name
    pub fn tag(&self) -> &'static str {
        match self {
            SpreadLayout::Grid => "grid",
            SpreadLayout::Single => "single",
            SpreadLayout::Horizontal => "horizontal",
            SpreadLayout::Triangle => "triangle",
            SpreadLayout::CelticCross => "celtic-cross",
            SpreadLayout::Horseshoe => "horseshoe",
            SpreadLayout::Relationship => "relationship",
        }
    }
}

/// A named layout of labelled positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadDefinition {
    pub name: &'static str,
    /// Empty means the user picks the count and positions are unlabeled
    pub positions: &'static [&'static str],
    pub layout: SpreadLayout,
}

impl SpreadDefinition {
    /// Whether the card count is chosen by the user
    pub fn is_free_count(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of cards this spread draws, if fixed
    pub fn card_count(&self) -> Option<usize> {
        (!self.is_free_count()).then_some(self.positions.len())
    }

    /// Label of the position at `index`, if any
    pub fn position(&self, index: usize) -> Option<&'static str> {
        self.positions.get(index).copied()
    }

    /// Label for a selection control, e.g. "Celtic Cross (10 cards)"
    pub fn label(&self) -> String {
        match self.card_count() {
            Some(n) => format!("{} ({} cards)", self.name, n),
            None => self.name.to_string(),
        }
    }
}

impl fmt::Display for SpreadDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every spread the reader offers, in selection order
pub const SPREADS: [SpreadDefinition; 8] = [
    SpreadDefinition {
        name: "None",
        positions: &[],
        layout: SpreadLayout::Grid,
    },
    SpreadDefinition {
        name: "Single Card",
        positions: &["Present Situation"],
        layout: SpreadLayout::Single,
    },
    SpreadDefinition {
        name: "Past-Present-Future",
        positions: &["Past", "Present", "Future"],
        layout: SpreadLayout::Horizontal,
    },
    SpreadDefinition {
        name: "Mind-Body-Spirit",
        positions: &["Mind", "Body", "Spirit"],
        layout: SpreadLayout::Triangle,
    },
    SpreadDefinition {
        name: "Situation-Action-Outcome",
        positions: &["Situation", "Action", "Outcome"],
        layout: SpreadLayout::Horizontal,
    },
    SpreadDefinition {
        name: "Celtic Cross",
        positions: &[
            "Present",
            "Challenge",
            "Past",
            "Future",
            "Above",
            "Below",
            "Advice",
            "External Influences",
            "Hopes/Fears",
            "Outcome",
        ],
        layout: SpreadLayout::CelticCross,
    },
    SpreadDefinition {
        name: "Horseshoe Spread",
        positions: &[
            "Past",
            "Present",
            "Hidden Influences",
            "Obstacles",
            "Environment",
            "Action to Take",
            "Outcome",
        ],
        layout: SpreadLayout::Horseshoe,
    },
    SpreadDefinition {
        name: "Relationship Spread",
        positions: &[
            "You",
            "The Other Person",
            "The Connection",
            "Challenges",
            "Potential",
        ],
        layout: SpreadLayout::Relationship,
    },
];

/// Entry for a spread selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadOption {
    pub index: usize,
    pub label: String,
}

/// Look up a spread by index
pub fn get(index: usize) -> Option<&'static SpreadDefinition> {
    SPREADS.get(index)
}

/// All spreads
pub fn all() -> &'static [SpreadDefinition] {
    &SPREADS
}

/// Number of spreads in the catalog
pub fn count() -> usize {
    SPREADS.len()
}

/// Index and display label of every spread
pub fn options() -> impl Iterator<Item = SpreadOption> {
    SPREADS.iter().enumerate().map(|(index, spread)| SpreadOption {
        index,
        label: spread.label(),
    })
}

/// Find a spread index by case-insensitive name
pub fn find_by_name(name: &str) -> Option<usize> {
    SPREADS
        .iter()
        .position(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = all().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "None",
                "Single Card",
                "Past-Present-Future",
                "Mind-Body-Spirit",
                "Situation-Action-Outcome",
                "Celtic Cross",
                "Horseshoe Spread",
                "Relationship Spread",
            ]
        );
    }

    #[test]
    fn test_only_first_spread_is_free_count() {
        assert!(SPREADS[0].is_free_count());
        assert_eq!(SPREADS[0].card_count(), None);
        assert!(SPREADS[1..].iter().all(|s| !s.is_free_count()));
    }

    #[test]
    fn test_option_labels() {
        let labels: Vec<_> = options().map(|o| o.label).collect();
        assert_eq!(labels[0], "None");
        assert_eq!(labels[1], "Single Card (1 cards)");
        assert_eq!(labels[5], "Celtic Cross (10 cards)");
        assert_eq!(labels[6], "Horseshoe Spread (7 cards)");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get(5).map(|s| s.layout), Some(SpreadLayout::CelticCross));
        assert!(get(count()).is_none());
        assert_eq!(find_by_name("celtic cross"), Some(5));
        assert_eq!(find_by_name("nope"), None);
        assert_eq!(get(7).and_then(|s| s.position(4)), Some("Potential"));
        assert_eq!(get(7).and_then(|s| s.position(5)), None);
    }

    #[test]
    fn test_layout_tags() {
        assert_eq!(SpreadLayout::CelticCross.tag(), "celtic-cross");
        let json = serde_json::to_string(&SpreadLayout::CelticCross).unwrap();
        assert_eq!(json, "\"celtic-cross\"");
    }
}
