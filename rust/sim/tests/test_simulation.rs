use vingt_engine::deck::Deck;
use vingt_engine::errors::GameError;
use vingt_engine::hand::Hand;
use vingt_sim::monte_carlo::{simulate, sweep, SimConfig, SweepConfig};
use vingt_sim::SimError;
use vingt_strategy::threshold::FixedThreshold;

#[test]
fn tallies_always_sum_to_the_round_count() {
    let report = simulate(&SimConfig {
        rounds: 500,
        threshold: 16,
        seed: Some(7),
    })
    .expect("simulate");
    assert_eq!(report.rounds, 500);
    assert_eq!(report.wins + report.losses + report.pushes, 500);
    assert_eq!(report.seed, 7);
}

#[test]
fn rates_are_fractions_that_sum_to_one() {
    let report = simulate(&SimConfig {
        rounds: 1_000,
        threshold: 14,
        seed: Some(3),
    })
    .expect("simulate");
    let total = report.win_rate() + report.loss_rate() + report.push_rate();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(
        (report.expected_return() - (report.win_rate() - report.loss_rate())).abs()
            < 1e-12
    );
}

#[test]
fn same_seed_reproduces_the_batch() {
    let config = SimConfig {
        rounds: 800,
        threshold: 15,
        seed: Some(123),
    };
    assert_eq!(
        simulate(&config).expect("simulate"),
        simulate(&config).expect("simulate")
    );
}

#[test]
fn random_seed_is_echoed_back() {
    let config = SimConfig {
        rounds: 50,
        threshold: 16,
        seed: None,
    };
    let report = simulate(&config).expect("simulate");
    // Whatever seed was drawn, rerunning with it reproduces the batch.
    let replay = simulate(&SimConfig {
        seed: Some(report.seed),
        ..config
    })
    .expect("simulate");
    assert_eq!(report, replay);
}

#[test]
fn rejects_zero_rounds_and_bad_thresholds() {
    assert_eq!(
        simulate(&SimConfig {
            rounds: 0,
            threshold: 16,
            seed: Some(1),
        }),
        Err(SimError::InvalidRounds { rounds: 0 })
    );
    assert!(matches!(
        simulate(&SimConfig {
            rounds: 10,
            threshold: 3,
            seed: Some(1),
        }),
        Err(SimError::Engine(GameError::InvalidThreshold { threshold: 3, .. }))
    ));
    assert!(matches!(
        simulate(&SimConfig {
            rounds: 10,
            threshold: 22,
            seed: Some(1),
        }),
        Err(SimError::Engine(GameError::InvalidThreshold { .. }))
    ));
}

#[test]
fn reckless_thresholds_lose_money() {
    // Hitting to 21 busts most rounds; 2000 rounds put the expected
    // return far below zero on any seed.
    let reckless = simulate(&SimConfig {
        rounds: 2_000,
        threshold: 21,
        seed: Some(11),
    })
    .expect("simulate");
    assert!(reckless.expected_return() < -0.5);

    let sensible = simulate(&SimConfig {
        rounds: 2_000,
        threshold: 16,
        seed: Some(11),
    })
    .expect("simulate");
    assert!(sensible.expected_return() > reckless.expected_return());
}

#[test]
fn play_round_reports_consistent_hands() {
    let mut deck = Deck::new_with_seed(99);
    let policy = FixedThreshold::new(16).expect("policy");
    for _ in 0..50 {
        let summary =
            vingt_sim::monte_carlo::play_round(&mut deck, &policy).expect("round");
        assert!(summary.player_cards.len() >= 2);
        assert!(summary.dealer_cards.len() >= 2);
        let player: Hand = summary.player_cards.iter().copied().collect();
        let dealer: Hand = summary.dealer_cards.iter().copied().collect();
        assert_eq!(player.value(), summary.player_total);
        assert_eq!(dealer.value(), summary.dealer_total);
    }
}

#[test]
fn sweep_reports_ascending_thresholds() {
    let report = sweep(&SweepConfig {
        rounds: 300,
        thresholds: 11..=20,
        seed: Some(5),
    })
    .expect("sweep");
    let thresholds: Vec<u8> = report.entries.iter().map(|e| e.threshold).collect();
    assert_eq!(thresholds, (11..=20).collect::<Vec<u8>>());
}

#[test]
fn sweep_best_is_the_first_maximum() {
    let report = sweep(&SweepConfig {
        rounds: 400,
        thresholds: 11..=20,
        seed: Some(21),
    })
    .expect("sweep");

    let mut expected_best = report.entries[0].threshold;
    let mut best_return = f64::NEG_INFINITY;
    for entry in &report.entries {
        let ret = entry.report.expected_return();
        if ret > best_return {
            expected_best = entry.threshold;
            best_return = ret;
        }
    }
    assert_eq!(report.best, expected_best);
    assert!((11..=20).contains(&report.best));
}

#[test]
fn sweep_is_deterministic_for_a_base_seed() {
    let config = SweepConfig {
        rounds: 250,
        thresholds: 12..=18,
        seed: Some(77),
    };
    assert_eq!(sweep(&config).expect("sweep"), sweep(&config).expect("sweep"));
}

#[test]
fn sweep_rejects_bad_ranges() {
    assert_eq!(
        sweep(&SweepConfig {
            rounds: 100,
            thresholds: 15..=12,
            seed: Some(1),
        }),
        Err(SimError::EmptyThresholds { from: 15, to: 12 })
    );
    assert!(matches!(
        sweep(&SweepConfig {
            rounds: 100,
            thresholds: 2..=20,
            seed: Some(1),
        }),
        Err(SimError::Engine(GameError::InvalidThreshold { threshold: 2, .. }))
    ));
    assert_eq!(
        sweep(&SweepConfig {
            rounds: 0,
            thresholds: 11..=20,
            seed: Some(1),
        }),
        Err(SimError::InvalidRounds { rounds: 0 })
    );
}

#[test]
fn reports_serialize_for_run_outputs() {
    let report = simulate(&SimConfig {
        rounds: 20,
        threshold: 16,
        seed: Some(2),
    })
    .expect("simulate");
    let json = serde_json::to_string(&report).expect("serialize");
    assert!(json.contains("\"rounds\":20"));
    assert!(json.contains("\"seed\":2"));
    let parsed: vingt_sim::monte_carlo::SimReport =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, report);
}
