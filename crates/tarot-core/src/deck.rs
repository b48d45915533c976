//! Card dataset loading and validation
//!
//! The deck is loaded once at startup. Every problem with the dataset is
//! reported as a configuration error here, so a draw never has to deal with
//! an empty or malformed deck.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::card::Card;
use crate::error::{Result, TarotError};

/// Dataset bundled with the crate
const EMBEDDED_DATASET: &str = include_str!("../data/tarot-images.json");

/// On-disk dataset shape
#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default)]
    description: Option<String>,
    cards: Vec<Card>,
}

/// The full, validated set of cards a reading samples from
#[derive(Debug, Clone)]
pub struct Deck {
    description: Option<String>,
    cards: Vec<Card>,
}

impl Deck {
    /// Load the dataset bundled with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a dataset file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            TarotError::Configuration(format!(
                "cannot read dataset {}: {}",
                path.display(),
                e
            ))
        })?;

        let deck = Self::from_json(&contents)?;
        tracing::info!("Loaded {} cards from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Parse and validate a dataset document
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)
            .map_err(|e| TarotError::Configuration(format!("malformed dataset: {}", e)))?;
        Self::from_cards(dataset.cards).map(|mut deck| {
            deck.description = dataset.description;
            deck
        })
    }

    /// Build a deck from already-parsed cards
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.is_empty() {
            return Err(TarotError::Configuration(
                "dataset contains no cards".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if card.name.trim().is_empty() {
                return Err(TarotError::Configuration(
                    "dataset contains a card without a name".to_string(),
                ));
            }
            if card.image.trim().is_empty() {
                return Err(TarotError::Configuration(format!(
                    "card {:?} has no image reference",
                    card.name
                )));
            }
            if !seen.insert(card.name.as_str()) {
                return Err(TarotError::Configuration(format!(
                    "duplicate card name {:?}",
                    card.name
                )));
            }
        }

        Ok(Self {
            description: None,
            cards,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a validated deck
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Look up a card by name
    pub fn find(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Resolve a card's image reference against an images directory
    pub fn image_path(card: &Card, images_dir: &Path) -> PathBuf {
        images_dir.join(&card.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_json(name: &str, img: &str) -> String {
        format!(
            r#"{{"name":"{}","number":"1","arcana":"Minor Arcana","img":"{}"}}"#,
            name, img
        )
    }

    #[test]
    fn test_embedded_dataset_is_complete() {
        let deck = Deck::embedded().unwrap();
        assert_eq!(deck.len(), 78);
        assert_eq!(deck.cards().iter().filter(|c| c.is_major()).count(), 22);
        assert!(deck.find("The Fool").is_some());
        assert!(deck.find("King of Pentacles").is_some());
        assert!(deck.description().is_some());
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = Deck::from_json(r#"{"cards": []}"#).unwrap_err();
        assert!(matches!(err, TarotError::Configuration(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_dataset_rejected() {
        let err = Deck::from_json(r#"{"cards": [{"name": "x"}]}"#).unwrap_err();
        assert!(matches!(err, TarotError::Configuration(_)));

        let err = Deck::from_json("not json").unwrap_err();
        assert!(matches!(err, TarotError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = format!(
            r#"{{"cards": [{}, {}]}}"#,
            card_json("Ace of Cups", "c01.jpg"),
            card_json("Ace of Cups", "c01b.jpg")
        );
        let err = Deck::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_missing_image_rejected() {
        let json = format!(r#"{{"cards": [{}]}}"#, card_json("Ace of Cups", " "));
        let err = Deck::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("image"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Deck::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TarotError::Configuration(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let json = format!(
            r#"{{"description": "tiny", "cards": [{}, {}]}}"#,
            card_json("Ace of Cups", "c01.jpg"),
            card_json("Two of Cups", "c02.jpg")
        );
        fs::write(&path, json).unwrap();

        let deck = Deck::load(&path).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.description(), Some("tiny"));
    }

    #[test]
    fn test_image_path() {
        let deck = Deck::embedded().unwrap();
        let fool = deck.find("The Fool").unwrap();
        let path = Deck::image_path(fool, Path::new("tarot-json/cards"));
        assert_eq!(path, PathBuf::from("tarot-json/cards/m00.jpg"));
    }
}
