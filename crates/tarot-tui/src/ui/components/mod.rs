//! Reusable UI components

pub mod card_detail;
pub mod card_tile;
pub mod controls;
pub mod help;

pub use card_detail::DetailAreas;
pub use help::{HelpContent, HELP_SECTIONS};
