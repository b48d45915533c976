//! Draw engine
//!
//! Sampling is without replacement: a fresh uniform permutation of the deck
//! is taken on every call and the first `count` cards become the reading.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{Result, TarotError};
use crate::spread::SpreadDefinition;

/// A card as it lands in a reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    #[serde(flatten)]
    pub card: Card,
    /// Drawn upside down
    pub reversed: bool,
    /// Spread position label, `None` for free-count readings
    pub position: Option<String>,
}

impl DrawnCard {
    pub fn name(&self) -> &str {
        &self.card.name
    }

    /// Card name with a reversal marker
    pub fn title(&self) -> String {
        if self.reversed {
            format!("{} (Reversed)", self.card.name)
        } else {
            self.card.name.clone()
        }
    }
}

/// Draw a reading for `spread`.
///
/// `requested_count` is only consulted when the spread has no positions.
pub fn draw<R: Rng + ?Sized>(
    cards: &[Card],
    spread: &SpreadDefinition,
    requested_count: usize,
    allow_reversed: bool,
    rng: &mut R,
) -> Result<Vec<DrawnCard>> {
    let count = spread.card_count().unwrap_or(requested_count);

    if count < 1 {
        return Err(TarotError::InvalidCount { requested: count });
    }
    if count > cards.len() {
        return Err(TarotError::InsufficientCards {
            requested: count,
            available: cards.len(),
        });
    }

    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.shuffle(rng);

    let drawn = order
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, card_index)| DrawnCard {
            card: cards[card_index].clone(),
            reversed: allow_reversed && rng.gen_bool(0.5),
            position: spread.position(i).map(str::to_string),
        })
        .collect();

    Ok(drawn)
}
