//! Tarot Core - card dataset, spreads, draw engine and reading state
//!
//! This crate holds everything about a tarot reading that does not depend on
//! how it is displayed:
//! - Card model and dataset loading
//! - The spread catalog
//! - The draw engine (uniform shuffle, optional reversals)
//! - The reading state machine

pub mod card;
pub mod deck;
pub mod draw;
pub mod error;
pub mod reading;
pub mod spread;

pub use card::{Card, Meanings};
pub use deck::Deck;
pub use draw::{draw, DrawnCard};
pub use error::{Result, TarotError};
pub use reading::{Action, Phase, ReadingState, DEFAULT_COUNT};
pub use spread::{SpreadDefinition, SpreadLayout, SpreadOption, SPREADS};
