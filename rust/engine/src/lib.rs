//! # vingt-engine: Blackjack (21) Rules Core
//!
//! A deterministic blackjack engine for heads-up play against a standing
//! dealer. Provides the card and deck model, hand evaluation with ace
//! demotion, an explicit round state machine, analytic decision tables,
//! snapshotable session state, and JSONL round logging, all driven by
//! reproducible seeded RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic, auto-reshuffling deck with ChaCha20 RNG
//! - [`hand`] - Hand totals with ace demotion and soft/hard detection
//! - [`round`] - The Deal -> PlayerTurn -> DealerTurn -> Resolved machine
//! - [`rules`] - Table constants and threshold validation
//! - [`tables`] - Analytic bust probabilities and hit expected values
//! - [`game`] - Serializable session state with bankroll settlement
//! - [`logger`] - RoundRecord serialization for run histories
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use vingt_engine::deck::Deck;
//! use vingt_engine::round::{Outcome, Phase, Round};
//!
//! let mut deck = Deck::new_with_seed(42);
//! let mut round = Round::new();
//! round.deal(&mut deck)?;
//!
//! // Hit to a fixed threshold; the engine stops the turn at 21 on its own.
//! while round.phase() == Phase::PlayerTurn {
//!     if round.player().value() <= 16 {
//!         round.player_hit(&mut deck)?;
//!     } else {
//!         round.player_stand()?;
//!     }
//! }
//! if round.phase() == Phase::DealerTurn {
//!     round.play_dealer(&mut deck)?;
//! }
//!
//! let outcome = round.outcome()?;
//! assert!(matches!(outcome, Outcome::Win | Outcome::Loss | Outcome::Push));
//! # Ok::<(), vingt_engine::errors::GameError>(())
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use vingt_engine::deck::Deck;
//!
//! // Same seed produces the same endless card sequence
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! for _ in 0..104 {
//!     assert_eq!(deck1.deal_card(), deck2.deal_card());
//! }
//! ```
//!
//! ## Analytic Tables
//!
//! The hit/stand chart data comes straight from rank counting:
//!
//! ```rust
//! use vingt_engine::tables::bust_probability;
//!
//! assert_eq!(bust_probability(11), 0.0);
//! assert_eq!(bust_probability(21), 100.0);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod round;
pub mod rules;
pub mod tables;
