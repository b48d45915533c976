//! Card data model
//!
//! Cards are deserialized once from the dataset and never mutated. Free-text
//! fields are present on some cards and absent on others; absence means the
//! field is simply not displayed.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Favorable and unfavorable interpretations of a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meanings {
    #[serde(default)]
    pub light: Vec<String>,
    #[serde(default)]
    pub shadow: Vec<String>,
}

impl Meanings {
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.shadow.is_empty()
    }
}

/// A single tarot card as described by the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card name; unique within a deck
    pub name: String,

    /// Card number ("0".."21" for trumps, "1".."10" or a court rank for minors)
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,

    pub arcana: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<String>,

    /// Image file name, relative to the images directory
    #[serde(rename = "img")]
    pub image: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub fortune_telling: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Meanings>,

    #[serde(rename = "Archetype", default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,

    #[serde(rename = "Elemental", default, skip_serializing_if = "Option::is_none")]
    pub elemental: Option<String>,

    #[serde(
        rename = "Mythical/Spiritual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mythical: Option<String>,

    #[serde(
        rename = "Questions to Ask",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub questions: Vec<String>,

    #[serde(
        rename = "Hebrew Alphabet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hebrew_letter: Option<String>,

    #[serde(rename = "Numerology", default, skip_serializing_if = "Option::is_none")]
    pub numerology: Option<String>,

    #[serde(rename = "Astrology", default, skip_serializing_if = "Option::is_none")]
    pub astrology: Option<String>,

    #[serde(rename = "Affirmation", default, skip_serializing_if = "Option::is_none")]
    pub affirmation: Option<String>,
}

impl Card {
    /// Whether this card belongs to the major arcana
    pub fn is_major(&self) -> bool {
        self.arcana.eq_ignore_ascii_case("major arcana")
    }

    /// Light meanings, empty when the card carries none
    pub fn light_meanings(&self) -> &[String] {
        self.meanings.as_ref().map_or(&[], |m| m.light.as_slice())
    }

    /// Shadow meanings, empty when the card carries none
    pub fn shadow_meanings(&self) -> &[String] {
        self.meanings.as_ref().map_or(&[], |m| m.shadow.as_slice())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Accept the card number as either a JSON string or an integer
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_card_parses() {
        let json = r#"{"name":"The Fool","number":"0","arcana":"Major Arcana","img":"m00.jpg"}"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.name, "The Fool");
        assert_eq!(card.image, "m00.jpg");
        assert!(card.suit.is_none());
        assert!(card.keywords.is_empty());
        assert!(card.light_meanings().is_empty());
        assert!(card.is_major());
    }

    #[test]
    fn test_numeric_number_accepted() {
        let json = r#"{"name":"Two of Cups","number":2,"arcana":"Minor Arcana","suit":"Cups","img":"c02.jpg"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.number, "2");
        assert!(!card.is_major());
    }

    #[test]
    fn test_free_text_keys() {
        let json = r#"{
            "name": "The Star", "number": "17", "arcana": "Major Arcana", "img": "m17.jpg",
            "meanings": {"light": ["Hope"], "shadow": ["Despair"]},
            "Archetype": "The Hope",
            "Elemental": "Air",
            "Mythical/Spiritual": "Pandora",
            "Questions to Ask": ["What gives me hope?"]
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.archetype.as_deref(), Some("The Hope"));
        assert_eq!(card.elemental.as_deref(), Some("Air"));
        assert_eq!(card.mythical.as_deref(), Some("Pandora"));
        assert_eq!(card.questions, vec!["What gives me hope?".to_string()]);
        assert_eq!(card.light_meanings(), ["Hope".to_string()]);
        assert_eq!(card.shadow_meanings(), ["Despair".to_string()]);
    }
}
