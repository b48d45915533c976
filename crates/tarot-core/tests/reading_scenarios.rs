//! End-to-end reading scenarios against the embedded 78 card dataset

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tarot_core::{spread, Deck, Phase, ReadingState, TarotError};

fn setup() -> (Deck, ChaCha8Rng) {
    (Deck::embedded().unwrap(), ChaCha8Rng::seed_from_u64(0x7a70))
}

#[test]
fn celtic_cross_reading() {
    let (deck, mut rng) = setup();
    assert_eq!(deck.len(), 78);

    let mut state = ReadingState::new();
    state.select_spread(spread::find_by_name("Celtic Cross").unwrap());
    state.draw(deck.cards(), &mut rng).unwrap();

    let positions: Vec<_> = state
        .drawn()
        .iter()
        .map(|c| c.position.clone().unwrap())
        .collect();
    assert_eq!(
        positions,
        [
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
        ]
    );

    let names: HashSet<_> = state.drawn().iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), 10);
}

#[test]
fn free_count_reading_of_five() {
    let (deck, mut rng) = setup();
    let mut state = ReadingState::new();
    assert!(state.spread().is_free_count());

    state.set_count(5);
    state.draw(deck.cards(), &mut rng).unwrap();

    assert_eq!(state.drawn().len(), 5);
    assert!(state.drawn().iter().all(|c| c.position.is_none()));
}

#[test]
fn reset_clears_reading_and_detail() {
    let (deck, mut rng) = setup();
    let mut state = ReadingState::new();
    state.draw(deck.cards(), &mut rng).unwrap();
    assert!(state.open_detail(0));

    state.reset();

    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.drawn().is_empty());
    assert!(!state.is_detail_open());
}

#[test]
fn redraw_closes_detail() {
    let (deck, mut rng) = setup();
    let mut state = ReadingState::new();
    state.draw(deck.cards(), &mut rng).unwrap();
    assert!(state.open_detail(2));

    state.draw(deck.cards(), &mut rng).unwrap();

    assert!(state.detail_card().is_none());
    assert_eq!(state.phase(), Phase::HasReading);
}

#[test]
fn close_detail_twice() {
    let (deck, mut rng) = setup();
    let mut state = ReadingState::new();
    state.draw(deck.cards(), &mut rng).unwrap();
    state.open_detail(1);

    state.close_detail();
    let after_once = state.clone();
    state.close_detail();

    assert_eq!(state, after_once);
}

#[test]
fn count_errors_surface() {
    let (deck, mut rng) = setup();

    let err = tarot_core::draw(deck.cards(), &spread::SPREADS[0], 0, false, &mut rng).unwrap_err();
    assert!(matches!(err, TarotError::InvalidCount { .. }));

    let err = tarot_core::draw(deck.cards(), &spread::SPREADS[0], 100, false, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        TarotError::InsufficientCards {
            requested: 100,
            available: 78
        }
    ));
}

#[test]
fn small_deck_cannot_fill_celtic_cross() {
    let (deck, mut rng) = setup();
    let small = Deck::from_cards(deck.cards()[..4].to_vec()).unwrap();

    let mut state = ReadingState::new();
    state.select_spread(5);
    let err = state.draw(small.cards(), &mut rng).unwrap_err();

    assert!(matches!(err, TarotError::InsufficientCards { .. }));
    assert_eq!(state.phase(), Phase::Idle);
}
