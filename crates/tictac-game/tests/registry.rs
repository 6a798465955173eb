//! Integration tests for the game registry: full games driven through the
//! public API, with precedence probes before and after every move.

use std::collections::HashSet;

use tictac_game::{GameError, GameRegistry, IdStrategy, RegistryConfig};
use tictac_protocol::{GameId, GameStatus, MoveOutcome, PlayerId, StatusCode};

// =========================================================================
// Scripted games
// =========================================================================

/// Games that end with a win on the last listed move.
///
/// Odd-length scripts are won by the first player, even-length ones by the
/// second.
const WINS: &[&[(i32, i32)]] = &[
    // A wins the top row.
    &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    // A wins the anti-diagonal.
    &[(2, 0), (2, 1), (0, 0), (1, 0), (0, 2), (0, 1), (1, 1)],
    // B wins the middle column.
    &[(0, 2), (1, 1), (2, 0), (0, 1), (1, 2), (0, 0), (1, 0), (2, 1)],
    // B wins the main diagonal.
    &[(1, 0), (1, 1), (0, 2), (0, 0), (1, 2), (2, 2)],
];

/// Games that fill the board without a line.
const DRAWS: &[&[(i32, i32)]] = &[
    &[(1, 2), (1, 1), (0, 2), (2, 2), (0, 0), (0, 1), (2, 1), (2, 0), (1, 0)],
    &[(1, 1), (0, 0), (0, 2), (2, 0), (1, 0), (1, 2), (0, 1), (2, 1), (2, 2)],
];

// =========================================================================
// Helpers
// =========================================================================

fn code<T>(result: Result<T, GameError>) -> StatusCode {
    match result {
        Ok(_) => panic!("expected an error"),
        Err(err) => err.code(),
    }
}

/// Creates a game and admits both players.
fn started_game(registry: &mut GameRegistry) -> (GameId, PlayerId, PlayerId) {
    let game = registry.create_game();
    let a = registry.add_player(game).unwrap();
    let b = registry.add_player(game).unwrap();
    (game, a, b)
}

/// Plays a script move by move, probing every rejection path first.
fn play_full_game(script: &[(i32, i32)], is_draw: bool) {
    let mut registry = GameRegistry::new();
    let (game, a, b) = started_game(&mut registry);

    for (i, &(x, y)) in script.iter().enumerate() {
        let (current, other) = if i % 2 == 0 { (a, b) } else { (b, a) };

        // No one can join mid-game.
        assert_eq!(
            code(registry.add_player(game)),
            StatusCode::GameOngoing,
            "move {i}: join during game"
        );

        // The waiting player can't move.
        assert_eq!(
            code(registry.make_move(game, other, x, y)),
            StatusCode::WrongTurn,
            "move {i}: wrong player accepted"
        );

        // Every previously taken cell is refused.
        for &(px, py) in &script[..i] {
            assert_eq!(
                code(registry.make_move(game, current, px, py)),
                StatusCode::InvalidLocation,
                "move {i}: occupied ({px}, {py}) accepted"
            );
        }

        // Off-board coordinates are refused.
        let n = i as i32;
        assert_eq!(
            code(registry.make_move(game, current, -1 - n, 0)),
            StatusCode::InvalidLocation
        );
        assert_eq!(
            code(registry.make_move(game, current, 0, n + 3)),
            StatusCode::InvalidLocation
        );

        let outcome = registry.make_move(game, current, x, y).unwrap();

        if i + 1 < script.len() {
            assert_eq!(outcome, MoveOutcome::Ongoing, "move {i} should not end the game");
            continue;
        }

        let expected = if is_draw {
            MoveOutcome::Draw { other }
        } else {
            MoveOutcome::Win { winner: current }
        };
        assert_eq!(outcome, expected);
        let reported = if is_draw { other } else { current };
        assert_eq!(outcome.to_raw(), reported.to_raw());
        assert_eq!(registry.status(game), Ok(GameStatus::Ended));

        // After the end, everything reports GameEnded.
        assert_eq!(code(registry.add_player(game)), StatusCode::GameEnded);
        assert_eq!(
            code(registry.make_move(game, other, x, y)),
            StatusCode::GameEnded
        );
        assert_eq!(
            code(registry.make_move(game, current, 9, 9)),
            StatusCode::GameEnded
        );
    }
}

// =========================================================================
// CreateGame
// =========================================================================

#[test]
fn test_create_game_returns_unique_non_negative_ids() {
    let mut registry = GameRegistry::new();
    let mut seen = HashSet::new();
    for _ in 0..10 {
        let id = registry.create_game();
        assert!(id.to_raw() >= 0);
        assert!(seen.insert(id), "duplicate game id {id}");
    }
}

#[test]
fn test_random_ids_stay_unique_in_a_tiny_range() {
    // 16 slots, 16 games: the registry must re-draw until it finds the
    // remaining free ids.
    let config = RegistryConfig {
        id_strategy: IdStrategy::Random {
            max: 15,
            seed: Some(3),
        },
        ..RegistryConfig::default()
    };
    let mut registry = GameRegistry::with_config(&config);

    let ids: HashSet<GameId> = (0..16).map(|_| registry.create_game()).collect();
    assert_eq!(ids.len(), 16);
    assert!(ids.iter().all(|id| id.0 <= 15));
}

// =========================================================================
// Unknown games
// =========================================================================

#[test]
fn test_unknown_game_ids_are_rejected() {
    let mut registry = GameRegistry::new();
    for _ in 0..10 {
        registry.create_game();
    }

    assert_eq!(
        registry.add_player(GameId(200)),
        Err(GameError::GameDoesNotExist(GameId(200)))
    );
    assert_eq!(
        code(registry.make_move(GameId(200), PlayerId(1), 0, 0)),
        StatusCode::GameDoesNotExist
    );
}

#[test]
fn test_unknown_game_wins_over_every_other_error() {
    let mut registry = GameRegistry::new();
    // Bad player, bad coordinates, unknown game: the game is reported.
    assert_eq!(
        code(registry.make_move(GameId(1), PlayerId(99), -5, 17)),
        StatusCode::GameDoesNotExist
    );
}

// =========================================================================
// AddPlayer
// =========================================================================

#[test]
fn test_add_player_lifecycle() {
    let mut registry = GameRegistry::new();
    let game = registry.create_game();

    // No players: no moves.
    assert_eq!(
        code(registry.make_move(game, PlayerId(1), 0, 0)),
        StatusCode::GameNotStarted
    );

    let a = registry.add_player(game).unwrap();
    assert!(a.0 > 0);

    // One player: still no moves, even for that player.
    assert_eq!(
        code(registry.make_move(game, a, 0, 0)),
        StatusCode::GameNotStarted
    );
    assert_eq!(registry.status(game), Ok(GameStatus::NotStarted));

    let b = registry.add_player(game).unwrap();
    assert!(b.0 > 0);
    assert_ne!(a, b);
    assert_eq!(registry.status(game), Ok(GameStatus::Ongoing));

    // The game has started and B is not first.
    assert_eq!(code(registry.make_move(game, b, 0, 0)), StatusCode::WrongTurn);
    assert_eq!(registry.snapshot(game).unwrap().moves_played, 0);

    for _ in 0..10 {
        assert_eq!(registry.add_player(game), Err(GameError::GameOngoing(game)));
    }
}

#[test]
fn test_not_started_wins_over_unknown_player() {
    let mut registry = GameRegistry::new();
    let game = registry.create_game();
    registry.add_player(game).unwrap();

    assert_eq!(
        code(registry.make_move(game, PlayerId(12345), 7, 7)),
        StatusCode::GameNotStarted
    );
}

// =========================================================================
// MakeMove precedence
// =========================================================================

#[test]
fn test_unknown_player_wins_over_wrong_turn_and_location() {
    let mut registry = GameRegistry::new();
    let (game, _, _) = started_game(&mut registry);

    assert_eq!(
        code(registry.make_move(game, PlayerId(999), 3, 3)),
        StatusCode::PlayerDoesNotExist
    );
}

#[test]
fn test_wrong_turn_wins_over_invalid_location() {
    let mut registry = GameRegistry::new();
    let (game, _, b) = started_game(&mut registry);

    assert_eq!(code(registry.make_move(game, b, -1, 3)), StatusCode::WrongTurn);
}

#[test]
fn test_invalid_location_leaves_board_unchanged() {
    let mut registry = GameRegistry::new();
    let (game, a, b) = started_game(&mut registry);
    registry.make_move(game, a, 1, 1).unwrap();
    let before = registry.snapshot(game).unwrap();

    assert_eq!(code(registry.make_move(game, b, 1, 1)), StatusCode::InvalidLocation);
    assert_eq!(code(registry.make_move(game, b, 3, 0)), StatusCode::InvalidLocation);
    assert_eq!(code(registry.make_move(game, b, 0, -1)), StatusCode::InvalidLocation);

    assert_eq!(registry.snapshot(game).unwrap(), before);
}

#[test]
fn test_turns_alternate_strictly() {
    let mut registry = GameRegistry::new();
    let (game, a, b) = started_game(&mut registry);

    assert_eq!(registry.make_move(game, a, 0, 0), Ok(MoveOutcome::Ongoing));
    assert_eq!(code(registry.make_move(game, a, 0, 1)), StatusCode::WrongTurn);
    assert_eq!(registry.make_move(game, b, 0, 1), Ok(MoveOutcome::Ongoing));
    assert_eq!(code(registry.make_move(game, b, 0, 2)), StatusCode::WrongTurn);
    assert_eq!(registry.make_move(game, a, 0, 2), Ok(MoveOutcome::Ongoing));
}

#[test]
fn test_games_are_independent() {
    let mut registry = GameRegistry::new();
    let (g1, a1, _) = started_game(&mut registry);
    let (g2, a2, _) = started_game(&mut registry);

    registry.make_move(g1, a1, 1, 1).unwrap();
    registry.make_move(g2, a2, 1, 1).unwrap();

    assert_eq!(registry.snapshot(g1).unwrap().moves_played, 1);
    assert_eq!(registry.snapshot(g2).unwrap().moves_played, 1);
}

// =========================================================================
// Full games
// =========================================================================

#[test]
fn test_player_one_wins() {
    for script in WINS.iter().filter(|s| s.len() % 2 == 1) {
        play_full_game(script, false);
    }
}

#[test]
fn test_player_two_wins() {
    for script in WINS.iter().filter(|s| s.len() % 2 == 0) {
        play_full_game(script, false);
    }
}

#[test]
fn test_draws_report_the_other_player() {
    for script in DRAWS {
        play_full_game(script, true);
    }
}

#[test]
fn test_ended_board_is_frozen() {
    let mut registry = GameRegistry::new();
    let (game, a, b) = started_game(&mut registry);
    for (i, &(x, y)) in WINS[0].iter().enumerate() {
        let player = if i % 2 == 0 { a } else { b };
        registry.make_move(game, player, x, y).unwrap();
    }
    let frozen = registry.snapshot(game).unwrap();

    assert_eq!(code(registry.make_move(game, b, 2, 2)), StatusCode::GameEnded);
    assert_eq!(code(registry.make_move(game, a, 2, 2)), StatusCode::GameEnded);
    assert_eq!(registry.snapshot(game).unwrap().board, frozen.board);
}

#[test]
fn test_ended_wins_over_unknown_player() {
    let mut registry = GameRegistry::new();
    let (game, a, b) = started_game(&mut registry);
    for (i, &(x, y)) in WINS[0].iter().enumerate() {
        let player = if i % 2 == 0 { a } else { b };
        registry.make_move(game, player, x, y).unwrap();
    }

    assert_eq!(
        registry.make_move(game, PlayerId(999), 9, 9),
        Err(GameError::GameEnded(game))
    );
}
