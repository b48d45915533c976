//! Tarot TUI Library
//!
//! Terminal presentation of a tarot reading: spread controls, the drawn
//! cards laid out in the shape of the spread, and a detail overlay.

pub mod app;
pub mod cli;
pub mod ui;
pub mod utils;

pub use app::App;
