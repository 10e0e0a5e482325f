use vingt_engine::errors::GameError;
use vingt_engine::game::GameState;
use vingt_engine::round::{Outcome, Phase};

/// Drive one full round with a fixed-threshold policy (hit while the
/// total is at most `threshold`).
fn play_round(game: &mut GameState, threshold: u8) {
    game.start_round().expect("start");
    while game.phase() == Phase::PlayerTurn {
        if game.player_hand().value() <= threshold {
            game.hit().expect("hit");
        } else {
            game.stand().expect("stand");
        }
    }
    assert_eq!(game.phase(), Phase::Resolved);
}

/// First seed whose opening deal leaves the player's turn open.
fn seed_with_open_player_turn() -> u64 {
    for seed in 0..200 {
        let mut game = GameState::new(seed, 100, 1).expect("new");
        game.start_round().expect("start");
        if game.phase() == Phase::PlayerTurn {
            return seed;
        }
    }
    panic!("every one of 200 seeds dealt an opening 21");
}

#[test]
fn new_rejects_nonpositive_arguments() {
    assert!(matches!(
        GameState::new(1, 0, 1),
        Err(GameError::OutOfCapital { capital: 0 })
    ));
    assert!(matches!(
        GameState::new(1, -5, 1),
        Err(GameError::OutOfCapital { capital: -5 })
    ));
    assert!(matches!(
        GameState::new(1, 100, 0),
        Err(GameError::InvalidBet { bet: 0 })
    ));
    assert!(matches!(
        GameState::new(1, 100, -1),
        Err(GameError::InvalidBet { bet: -1 })
    ));
}

#[test]
fn wager_is_clamped_to_capital() {
    let mut game = GameState::new(9, 5, 10).expect("new");
    game.start_round().expect("start");
    assert_eq!(game.wager(), 5);
}

#[test]
fn settlement_moves_capital_by_the_wager() {
    for seed in 0..30 {
        let mut game = GameState::new(seed, 100, 7).expect("new");
        play_round(&mut game, 16);

        assert_eq!(game.rounds_played(), 1);
        assert_eq!(game.wins() + game.losses() + game.pushes(), 1);
        let outcome = game.last_outcome().expect("settled round");
        let expected =
            100 + game.wager() * i64::from(outcome.net_units());
        assert_eq!(game.capital(), expected, "seed {}", seed);
    }
}

#[test]
fn capital_never_goes_negative() {
    let mut game = GameState::new(42, 10, 7).expect("new");
    for _ in 0..200 {
        if game.is_ruined() {
            break;
        }
        play_round(&mut game, 16);
        assert!(game.capital() >= 0, "capital {}", game.capital());
        assert!(game.wager() <= 7);
    }
}

#[test]
fn ruin_blocks_the_next_round() {
    // One unit of capital: the first loss is ruin. Standing on every
    // opening hand loses often enough that 300 rounds cannot all miss.
    let mut game = GameState::new(5, 1, 1).expect("new");
    for _ in 0..300 {
        if game.is_ruined() {
            break;
        }
        game.start_round().expect("start");
        if game.phase() == Phase::PlayerTurn {
            game.stand().expect("stand");
        }
    }
    assert!(game.is_ruined(), "no loss in 300 stand-only rounds");
    assert_eq!(game.capital(), 0);
    assert!(matches!(
        game.start_round(),
        Err(GameError::OutOfCapital { capital: 0 })
    ));
}

#[test]
fn bet_changes_only_between_rounds() {
    let seed = seed_with_open_player_turn();
    let mut game = GameState::new(seed, 100, 1).expect("new");

    // Before any round.
    game.set_bet(3).expect("set between rounds");
    assert_eq!(game.bet(), 3);

    game.start_round().expect("start");
    assert!(matches!(
        game.set_bet(5),
        Err(GameError::BetLocked {
            phase: Phase::PlayerTurn
        })
    ));

    game.stand().expect("stand");
    game.set_bet(5).expect("set after resolve");
    assert_eq!(game.bet(), 5);
}

#[test]
fn set_bet_rejects_nonpositive_amounts() {
    let mut game = GameState::new(1, 100, 1).expect("new");
    assert!(matches!(
        game.set_bet(0),
        Err(GameError::InvalidBet { bet: 0 })
    ));
    assert!(matches!(
        game.set_bet(-4),
        Err(GameError::InvalidBet { bet: -4 })
    ));
    assert_eq!(game.bet(), 1);
}

#[test]
fn start_round_rejects_a_round_in_progress() {
    let seed = seed_with_open_player_turn();
    let mut game = GameState::new(seed, 100, 1).expect("new");
    game.start_round().expect("start");
    assert!(matches!(
        game.start_round(),
        Err(GameError::RoundInProgress {
            phase: Phase::PlayerTurn
        })
    ));
}

#[test]
fn snapshot_resumes_the_same_future() {
    let mut original = GameState::new(77, 100, 2).expect("new");
    play_round(&mut original, 16);

    let json = serde_json::to_string(&original).expect("serialize");
    let mut restored: GameState = serde_json::from_str(&json).expect("deserialize");

    // Same operations from the same snapshot give the same session,
    // card for card.
    play_round(&mut original, 16);
    play_round(&mut restored, 16);

    assert_eq!(original.capital(), restored.capital());
    assert_eq!(original.rounds_played(), restored.rounds_played());
    assert_eq!(original.last_outcome(), restored.last_outcome());
    assert_eq!(
        original.player_hand().cards(),
        restored.player_hand().cards()
    );
    assert_eq!(
        original.dealer_hand().cards(),
        restored.dealer_hand().cards()
    );
    assert_eq!(
        serde_json::to_string(&original).expect("serialize"),
        serde_json::to_string(&restored).expect("serialize")
    );
}

#[test]
fn dealt_21_settles_without_a_player_turn() {
    let mut found = false;
    for seed in 0..400 {
        let mut game = GameState::new(seed, 100, 1).expect("new");
        game.start_round().expect("start");
        if game.phase() == Phase::Resolved && game.player_hand().len() == 2 {
            assert_eq!(game.player_hand().value(), 21);
            assert_eq!(game.rounds_played(), 1);
            // The dealer cannot beat 21, only match it.
            assert_ne!(game.last_outcome(), Some(Outcome::Loss));
            found = true;
            break;
        }
    }
    assert!(found, "no opening 21 in 400 seeds");
}
