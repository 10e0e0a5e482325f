use vingt_engine::cards::{Card, Rank, Suit};
use vingt_engine::hand::Hand;

fn hand(ranks: &[Rank]) -> Hand {
    // Suits never matter for the count; cycle them for variety.
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| Card {
            suit: suits[i % 4],
            rank,
        })
        .collect()
}

#[test]
fn empty_hand_is_zero_and_hard() {
    let h = Hand::new();
    assert_eq!(h.value(), 0);
    assert!(!h.is_soft());
    assert!(!h.is_bust());
}

#[test]
fn ace_king_is_soft_21() {
    let h = hand(&[Rank::Ace, Rank::King]);
    assert_eq!(h.value(), 21);
    assert!(h.is_soft());
}

#[test]
fn two_aces_demote_one() {
    let h = hand(&[Rank::Ace, Rank::Ace]);
    assert_eq!(h.value(), 12);
    assert!(h.is_soft(), "one ace still counts 11");
}

#[test]
fn ace_ace_nine_is_21() {
    let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(h.value(), 21);
    assert!(h.is_soft());
}

#[test]
fn soft_hand_turns_hard_after_demotion() {
    let soft = hand(&[Rank::Ace, Rank::Nine]);
    assert_eq!(soft.value(), 20);
    assert!(soft.is_soft());

    let hard = hand(&[Rank::Ace, Rank::Nine, Rank::Five]);
    assert_eq!(hard.value(), 15, "ace demoted to 1");
    assert!(!hard.is_soft());
}

#[test]
fn late_ace_enters_at_one_when_eleven_busts() {
    let h = hand(&[Rank::King, Rank::Queen, Rank::Ace]);
    assert_eq!(h.value(), 21);
    assert!(!h.is_soft());
}

#[test]
fn plain_hand_counts_pips_and_faces() {
    assert_eq!(hand(&[Rank::Five, Rank::Nine]).value(), 14);
    assert_eq!(hand(&[Rank::Ten, Rank::Jack]).value(), 20);
    assert_eq!(hand(&[Rank::Two, Rank::Three, Rank::Four]).value(), 9);
}

#[test]
fn bust_detection() {
    let h = hand(&[Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(h.value(), 25);
    assert!(h.is_bust());

    let edge = hand(&[Rank::King, Rank::Queen, Rank::Ace]);
    assert!(!edge.is_bust(), "21 is not bust");
}

#[test]
fn four_aces_demote_until_safe() {
    let h = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
    assert_eq!(h.value(), 14, "11 + 1 + 1 + 1");
    assert!(h.is_soft());
}

#[test]
fn hand_serializes_with_cards_intact() {
    let h = hand(&[Rank::Ace, Rank::Seven]);
    let json = serde_json::to_string(&h).expect("serialize");
    let back: Hand = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, h);
    assert_eq!(back.value(), 18);
    assert!(back.is_soft());
}
