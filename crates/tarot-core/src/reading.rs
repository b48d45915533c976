//! Reading state machine
//!
//! `ReadingState` is the whole mutable state of a session. Transitions are
//! applied either through [`ReadingState::apply`] (reducer form) or through
//! the matching `&mut self` methods. The detail view is held as an index
//! into the drawn cards and is cleared whenever those cards are replaced or
//! removed.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::draw::{self, DrawnCard};
use crate::error::{Result, TarotError};
use crate::spread::{self, SpreadDefinition};

/// Default card count for free-count readings
pub const DEFAULT_COUNT: usize = 3;

/// Coarse state of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No cards drawn
    Idle,
    /// A reading is on the table
    HasReading,
}

/// User actions that change the reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SelectSpread(usize),
    /// Raw user input; clamped to at least one
    SetCount(i64),
    SetAllowReversed(bool),
    Draw,
    Reset,
    /// Index into the drawn cards
    OpenDetail(usize),
    CloseDetail,
}

/// Complete state of a reading session
///
/// Deserialization goes through the same checks as the transitions, so a
/// stored state cannot name an unknown spread or a detail card outside the
/// reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredReading")]
pub struct ReadingState {
    spread_index: usize,
    requested_count: usize,
    allow_reversed: bool,
    drawn: Vec<DrawnCard>,
    detail: Option<usize>,
}

/// Unchecked wire form of [`ReadingState`]
#[derive(Deserialize)]
struct StoredReading {
    spread_index: usize,
    requested_count: usize,
    allow_reversed: bool,
    drawn: Vec<DrawnCard>,
    detail: Option<usize>,
}

impl TryFrom<StoredReading> for ReadingState {
    type Error = TarotError;

    fn try_from(stored: StoredReading) -> Result<Self> {
        if spread::get(stored.spread_index).is_none() {
            return Err(TarotError::Configuration(format!(
                "Unknown spread index {}",
                stored.spread_index
            )));
        }
        if stored.requested_count == 0 {
            return Err(TarotError::InvalidCount { requested: 0 });
        }
        if let Some(index) = stored.detail {
            if index >= stored.drawn.len() {
                return Err(TarotError::Configuration(format!(
                    "Detail card {} outside a reading of {} cards",
                    index,
                    stored.drawn.len()
                )));
            }
        }
        let mut names = HashSet::new();
        if let Some(card) = stored.drawn.iter().find(|c| !names.insert(c.name())) {
            return Err(TarotError::Configuration(format!(
                "Card '{}' drawn twice",
                card.name()
            )));
        }

        Ok(Self {
            spread_index: stored.spread_index,
            requested_count: stored.requested_count,
            allow_reversed: stored.allow_reversed,
            drawn: stored.drawn,
            detail: stored.detail,
        })
    }
}

impl Default for ReadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingState {
    /// Empty state with the free-count spread selected
    pub fn new() -> Self {
        Self {
            spread_index: 0,
            requested_count: DEFAULT_COUNT,
            allow_reversed: false,
            drawn: Vec::new(),
            detail: None,
        }
    }

    /// Empty state with initial selections; out-of-range values are corrected
    pub fn with_defaults(spread_index: usize, requested_count: usize, allow_reversed: bool) -> Self {
        let spread_index = if spread::get(spread_index).is_some() {
            spread_index
        } else {
            tracing::warn!("Unknown spread index {}, using default", spread_index);
            0
        };

        Self {
            spread_index,
            requested_count: requested_count.max(1),
            allow_reversed,
            ..Self::new()
        }
    }

    /// Apply one action and return the next state.
    ///
    /// A failed draw leaves the state unchanged and returns the error.
    pub fn apply<R: Rng + ?Sized>(
        mut self,
        action: Action,
        cards: &[Card],
        rng: &mut R,
    ) -> Result<Self> {
        match action {
            Action::SelectSpread(index) => self.select_spread(index),
            Action::SetCount(n) => self.set_count(n),
            Action::SetAllowReversed(allow) => self.set_allow_reversed(allow),
            Action::Draw => self.draw(cards, rng)?,
            Action::Reset => self.reset(),
            Action::OpenDetail(index) => {
                self.open_detail(index);
            }
            Action::CloseDetail => self.close_detail(),
        }
        Ok(self)
    }

    /// Select a spread. An existing reading stays on the table.
    pub fn select_spread(&mut self, index: usize) {
        if spread::get(index).is_none() {
            tracing::debug!("Ignoring unknown spread index {}", index);
            return;
        }
        self.spread_index = index;
    }

    /// Set the free-count card count; ignored for spreads with positions
    pub fn set_count(&mut self, n: i64) {
        if !self.spread().is_free_count() {
            tracing::debug!("Ignoring count change for fixed spread");
            return;
        }
        self.requested_count = usize::try_from(n.max(1)).unwrap_or(usize::MAX);
    }

    /// Allow or forbid reversals for future draws
    pub fn set_allow_reversed(&mut self, allow: bool) {
        self.allow_reversed = allow;
    }

    /// Draw a fresh reading, replacing any previous one
    pub fn draw<R: Rng + ?Sized>(&mut self, cards: &[Card], rng: &mut R) -> Result<()> {
        let spread = self.spread();
        let drawn = draw::draw(
            cards,
            spread,
            self.requested_count,
            self.allow_reversed,
            rng,
        )?;

        tracing::info!(
            "Drew {} cards for spread {:?} (reversals {})",
            drawn.len(),
            spread.name,
            if self.allow_reversed { "on" } else { "off" }
        );

        self.drawn = drawn;
        self.detail = None;
        Ok(())
    }

    /// Clear the reading and close the detail view
    pub fn reset(&mut self) {
        self.drawn.clear();
        self.detail = None;
    }

    /// Show the drawn card at `index` in the detail view.
    ///
    /// Returns false without changing anything when there is no such card.
    pub fn open_detail(&mut self, index: usize) -> bool {
        if index >= self.drawn.len() {
            tracing::debug!(
                "Cannot open detail {} with {} drawn cards",
                index,
                self.drawn.len()
            );
            return false;
        }
        self.detail = Some(index);
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn phase(&self) -> Phase {
        if self.drawn.is_empty() {
            Phase::Idle
        } else {
            Phase::HasReading
        }
    }

    pub fn has_reading(&self) -> bool {
        self.phase() == Phase::HasReading
    }

    pub fn spread_index(&self) -> usize {
        self.spread_index
    }

    /// Currently selected spread
    pub fn spread(&self) -> &'static SpreadDefinition {
        // spread_index is only ever set to a valid index
        spread::get(self.spread_index).unwrap_or(&spread::SPREADS[0])
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// Number of cards the next draw will produce
    pub fn effective_count(&self) -> usize {
        self.spread().card_count().unwrap_or(self.requested_count)
    }

    pub fn allow_reversed(&self) -> bool {
        self.allow_reversed
    }

    pub fn drawn(&self) -> &[DrawnCard] {
        &self.drawn
    }

    pub fn detail_index(&self) -> Option<usize> {
        self.detail
    }

    /// Card shown in the detail view, if open
    pub fn detail_card(&self) -> Option<&DrawnCard> {
        self.detail.and_then(|i| self.drawn.get(i))
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_some()
    }
}
