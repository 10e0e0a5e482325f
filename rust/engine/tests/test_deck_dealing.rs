use std::collections::HashSet;

use vingt_engine::cards::Card;
use vingt_engine::deck::Deck;

#[test]
fn deck_deals_52_unique_cards_between_reshuffles() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card();
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(set.len(), 52);
}

#[test]
fn dealing_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn dealing_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn deal_crosses_reshuffle_boundary_transparently() {
    let mut deck = Deck::new_with_seed(7);
    for _ in 0..52 {
        deck.deal_card();
    }
    assert_eq!(deck.remaining(), 0, "first pass exhausted");

    // The 53rd deal must succeed and open a fresh, complete 52-card pass.
    let mut second_pass = HashSet::new();
    for _ in 0..52 {
        second_pass.insert(deck.deal_card());
    }
    assert_eq!(second_pass.len(), 52, "second pass is a full fresh deck");
}

#[test]
fn reshuffled_sequence_stays_deterministic() {
    let mut d1 = Deck::new_with_seed(99);
    let mut d2 = Deck::new_with_seed(99);
    // Run well past two reshuffle boundaries.
    for i in 0..130 {
        assert_eq!(d1.deal_card(), d2.deal_card(), "diverged at deal {}", i);
    }
}

#[test]
fn remaining_counts_down_and_resets() {
    let mut deck = Deck::new_with_seed(5);
    assert_eq!(deck.remaining(), 52);
    deck.deal_card();
    assert_eq!(deck.remaining(), 51);
    for _ in 0..51 {
        deck.deal_card();
    }
    assert_eq!(deck.remaining(), 0);
    deck.deal_card();
    assert_eq!(deck.remaining(), 51, "reshuffle happened before the deal");
}

#[test]
fn serialized_deck_resumes_identical_sequence() {
    let mut original = Deck::new_with_seed(2024);
    // Advance mid-pass so the snapshot carries a nontrivial cursor.
    for _ in 0..30 {
        original.deal_card();
    }

    let snapshot = serde_json::to_string(&original).expect("serialize deck");
    let mut restored: Deck = serde_json::from_str(&snapshot).expect("deserialize deck");

    // Both must produce the same future sequence, across the reshuffle too.
    for i in 0..60 {
        assert_eq!(
            original.deal_card(),
            restored.deal_card(),
            "restored deck diverged at deal {}",
            i
        );
    }
}
