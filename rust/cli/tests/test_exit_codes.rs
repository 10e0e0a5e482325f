//! Tests for exit code standardization and error handling consistency
//!
//! - All successful operations return exit code 0
//! - File errors and validation errors return exit code 2
//! - Argument parse failures return exit code 2 with a command listing
//! - All errors are written to stderr, not stdout

/// Test that successful deal command returns exit code 0
#[test]
fn test_deal_success_returns_zero() {
    let args = vec!["vingt", "deal", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Successful deal command should return exit code 0");
}

/// Test that rng command returns 0
#[test]
fn test_rng_success_returns_zero() {
    let args = vec!["vingt", "rng", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "RNG command should return exit code 0");
}

/// Test that cfg command returns 0
#[test]
fn test_cfg_success_returns_zero() {
    let args = vec!["vingt", "cfg"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Config command should return exit code 0");
}

/// Test that tables command returns 0
#[test]
fn test_tables_success_returns_zero() {
    let args = vec!["vingt", "tables"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Tables command should return exit code 0");
}

/// Test that advise command returns 0 for a valid decision
#[test]
fn test_advise_success_returns_zero() {
    let args = vec![
        "vingt", "advise", "--total", "16", "--upcard", "7", "--trials", "50", "--seed", "42",
    ];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 0, "Advise command should return exit code 0");
}

/// Test that invalid rounds parameter returns exit code 2
#[test]
fn test_sim_invalid_rounds_returns_two() {
    let args = vec!["vingt", "sim", "--rounds", "0"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Invalid rounds parameter should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("rounds must be >= 1"),
        "Error message should be written to stderr"
    );
}

/// Test that out-of-range thresholds are rejected by the parser
#[test]
fn test_sim_threshold_out_of_range_returns_two() {
    let args = vec!["vingt", "sim", "--threshold", "22"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Threshold above 21 should return exit code 2");
}

/// Test that play rejects a non-positive starting capital before reading stdin
#[test]
fn test_play_invalid_capital_returns_two() {
    let args = vec!["vingt", "play", "--capital", "0", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Invalid capital should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("capital must be >= 1"),
        "Error message should be written to stderr"
    );
}

/// Test that play rejects a non-positive bet before reading stdin
#[test]
fn test_play_invalid_bet_returns_two() {
    let args = vec!["vingt", "play", "--bet", "0", "--seed", "42"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Invalid bet should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(err_str.contains("bet must be >= 1"));
}

/// Test that walk rejects a zero walk count
#[test]
fn test_walk_invalid_walks_returns_two() {
    let args = vec!["vingt", "walk", "--walks", "0"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Zero walks should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(err_str.contains("walks must be >= 1"));
}

/// Test that advise rejects an unknown upcard rank
#[test]
fn test_advise_invalid_upcard_returns_two() {
    let args = vec!["vingt", "advise", "--total", "16", "--upcard", "Z"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Unknown upcard should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("Invalid upcard 'Z'"),
        "Error should name the rejected upcard"
    );
}

/// Test that stats with missing input returns exit code 2
#[test]
fn test_stats_missing_input_returns_two() {
    let args = vec!["vingt", "stats", "--input", "/nonexistent/path"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Stats with missing input should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("Failed to read"),
        "Error should mention failed read"
    );
}

/// Test that an unknown subcommand prints the command listing
#[test]
fn test_unknown_command_returns_two_with_listing() {
    let args = vec!["vingt", "frobnicate"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2, "Unknown command should return exit code 2");
    let err_str = String::from_utf8_lossy(&err);
    assert!(err_str.contains("Vingt Blackjack CLI"));
    assert!(err_str.contains("Commands:"));
    for cmd in ["sim", "sweep", "walk", "play", "deal", "tables"] {
        assert!(err_str.contains(cmd), "listing should include `{}`", cmd);
    }
    assert!(err_str.contains("For full help, run: vingt --help"));
}

/// Test that errors are written to stderr, not stdout
#[test]
fn test_errors_written_to_stderr_not_stdout() {
    let args = vec!["vingt", "sim", "--rounds", "0"];
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = vingt_cli::run(args, &mut out, &mut err);

    assert_eq!(code, 2);
    let err_str = String::from_utf8_lossy(&err);
    assert!(
        err_str.contains("rounds must be >= 1"),
        "Error should be in stderr"
    );
    assert!(
        out.is_empty() || !String::from_utf8_lossy(&out).contains("rounds must be >= 1"),
        "Error should not be in stdout"
    );
}

/// Test that all error messages go to stderr consistently
#[test]
fn test_all_errors_to_stderr() {
    let test_cases = vec![
        (
            vec!["vingt", "sim", "--rounds", "0"],
            "rounds must be >= 1",
        ),
        (
            vec!["vingt", "sweep", "--rounds", "0"],
            "rounds must be >= 1",
        ),
        (
            vec!["vingt", "walk", "--capital", "0"],
            "capital must be >= 1",
        ),
        (
            vec!["vingt", "stats", "--input", "/nonexistent.jsonl"],
            "Failed to read",
        ),
    ];

    for (args, expected_error) in test_cases {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = vingt_cli::run(args.clone(), &mut out, &mut err);

        assert_eq!(code, 2, "Error case should return exit code 2 for {:?}", args);
        let err_str = String::from_utf8_lossy(&err);
        assert!(
            err_str.contains(expected_error),
            "Error message '{}' should be in stderr for {:?}",
            expected_error,
            args
        );

        let out_str = String::from_utf8_lossy(&out);
        assert!(
            !out_str.contains(expected_error),
            "Error message should NOT be in stdout for {:?}",
            args
        );
    }
}

/// Test exit code consistency: successful operations return 0
#[test]
fn test_successful_commands_return_zero() {
    let test_cases = vec![
        vec!["vingt", "deal", "--seed", "42"],
        vec!["vingt", "rng", "--seed", "42"],
        vec!["vingt", "cfg"],
        vec!["vingt", "tables"],
        vec!["vingt", "sim", "--rounds", "5", "--seed", "42"],
        vec!["vingt", "sweep", "--rounds", "5", "--from", "15", "--to", "16", "--seed", "42"],
        vec!["vingt", "walk", "--rounds", "5", "--capital", "50", "--bet", "1", "--seed", "42"],
    ];

    for args in test_cases {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = vingt_cli::run(args.clone(), &mut out, &mut err);

        assert_eq!(code, 0, "Successful command should return 0 for {:?}", args);
    }
}
