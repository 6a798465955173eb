//! Plays scripted matches against the integer interface and reports
//! `[PASSED]` / `[FAILED]` per scenario. Exits non-zero if any fail.
//!
//! Set `RUST_LOG=debug` to watch every accepted and rejected call.

use std::collections::HashMap;
use std::process::ExitCode;

use tictac::prelude::*;
use tictac::RawReply;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

/// Each picture shows the final board, `x` as the row and `y` as the
/// column. `X` is the first player, `O` the second.
const WINS: &[&[(i32, i32)]] = &[
    // X X X
    // O O .
    // . . .
    &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    // X O X
    // O X .
    // X O .
    &[(2, 0), (2, 1), (0, 0), (1, 0), (0, 2), (0, 1), (1, 1)],
    // O O X
    // X O X
    // X O .
    &[(0, 2), (1, 1), (2, 0), (0, 1), (1, 2), (0, 0), (1, 0), (2, 1)],
    // O . X
    // X O X
    // . . O
    &[(1, 0), (1, 1), (0, 2), (0, 0), (1, 2), (2, 2)],
];

const DRAWS: &[&[(i32, i32)]] = &[
    &[(1, 2), (1, 1), (0, 2), (2, 2), (0, 0), (0, 1), (2, 1), (2, 0), (1, 0)],
    &[(1, 1), (0, 0), (0, 2), (2, 0), (1, 0), (1, 2), (0, 1), (2, 1), (2, 2)],
];

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

type Check = Result<(), String>;

/// Tracks what the harness has been told, to catch duplicate ids.
struct Harness {
    raw: RawRegistry,
    games: HashMap<i32, Vec<i32>>,
}

impl Harness {
    fn new() -> Self {
        Self {
            raw: RawRegistry::new(),
            games: HashMap::new(),
        }
    }

    fn create_game(&mut self) -> Result<i32, String> {
        let game = self.raw.create_game();
        ensure(game >= 0, "negative game id")?;
        ensure(self.games.insert(game, Vec::new()).is_none(), "duplicate game id")?;
        Ok(game)
    }

    /// Adds a player and records it; passes status codes through.
    fn add_player(&mut self, game: i32) -> Result<i32, String> {
        let player = self.raw.add_player(game);
        if player < 0 {
            return Ok(player);
        }
        let players = self
            .games
            .get_mut(&game)
            .ok_or("invalid game id accepted by add_player")?;
        ensure(!players.contains(&player), "duplicate player id in game")?;
        ensure(players.len() < 2, "player id received from a full game")?;
        players.push(player);
        Ok(player)
    }

    /// An id this harness never received from `create_game`.
    fn unused_game_id(&self) -> i32 {
        (200..).find(|id| !self.games.contains_key(id)).unwrap_or(i32::MAX)
    }
}

fn ensure(cond: bool, text: &str) -> Check {
    if cond {
        Ok(())
    } else {
        Err(text.to_string())
    }
}

fn expect(actual: i32, expected: StatusCode, text: &str) -> Check {
    if actual == expected.code() {
        return Ok(());
    }
    let got = RawReply::try_from(actual)
        .map(|reply| reply.to_string())
        .unwrap_or_else(|err| TictacError::from(err).to_string());
    Err(format!("{text} (expected {expected}, got {got})"))
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

fn create_games(h: &mut Harness) -> Check {
    for _ in 0..10 {
        h.create_game()?;
    }
    Ok(())
}

fn invalid_game_ids(h: &mut Harness) -> Check {
    for id in (-9..=-1).rev() {
        expect(h.add_player(id)?, StatusCode::GameDoesNotExist, "negative game id accepted")?;
    }
    let unused = h.unused_game_id();
    expect(h.add_player(unused)?, StatusCode::GameDoesNotExist, "invalid game id accepted")?;
    expect(
        h.raw.make_move(unused, 0, 0, 0),
        StatusCode::GameDoesNotExist,
        "move on invalid game accepted",
    )
}

fn add_players(h: &mut Harness) -> Check {
    let game = h.create_game()?;
    expect(h.raw.make_move(game, 0, 0, 0), StatusCode::GameNotStarted, "moved with no players")?;

    let a = h.add_player(game)?;
    ensure(a > 0, "first player rejected")?;
    expect(h.raw.make_move(game, a, 0, 0), StatusCode::GameNotStarted, "moved with one player")?;

    let b = h.add_player(game)?;
    ensure(b > 0, "second player rejected")?;
    expect(h.raw.make_move(game, b, 0, 0), StatusCode::WrongTurn, "second player moved first")?;

    for _ in 0..10 {
        expect(h.add_player(game)?, StatusCode::GameOngoing, "third player admitted")?;
    }
    Ok(())
}

fn full_game(h: &mut Harness, script: &[(i32, i32)], is_draw: bool) -> Check {
    let game = h.create_game()?;
    let a = h.add_player(game)?;
    let b = h.add_player(game)?;

    for (i, &(x, y)) in script.iter().enumerate() {
        let (current, other) = if i % 2 == 0 { (a, b) } else { (b, a) };

        expect(h.add_player(game)?, StatusCode::GameOngoing, "joined mid-game")?;
        expect(h.raw.make_move(game, other, x, y), StatusCode::WrongTurn, "wrong player moved")?;
        for &(px, py) in &script[..i] {
            expect(
                h.raw.make_move(game, current, px, py),
                StatusCode::InvalidLocation,
                "occupied cell accepted",
            )?;
        }
        let n = i as i32;
        expect(
            h.raw.make_move(game, current, -1 - n, 0),
            StatusCode::InvalidLocation,
            "off-board move accepted",
        )?;
        expect(
            h.raw.make_move(game, current, 0, n + 3),
            StatusCode::InvalidLocation,
            "off-board move accepted",
        )?;

        let result = h.raw.make_move(game, current, x, y);
        if i + 1 < script.len() {
            expect(result, StatusCode::GameOngoing, "valid move rejected")?;
            continue;
        }

        let (expected, text) = match (is_draw, i % 2) {
            (true, _) => (other, "game should have been a draw"),
            (false, 0) => (current, "player 1 should have won"),
            (false, _) => (current, "player 2 should have won"),
        };
        ensure(result == expected, text)?;

        if let Ok(id) = GameId::try_from(game) {
            if let Some(session) = h.raw.registry().game(id) {
                tracing::debug!(%id, "final board\n{}", session.board());
            }
        }

        expect(h.add_player(game)?, StatusCode::GameEnded, "joined after the end")?;
        expect(h.raw.make_move(game, other, x, y), StatusCode::GameEnded, "moved after the end")?;
    }
    Ok(())
}

fn run(name: &str, outcome: Check) -> bool {
    match outcome {
        Ok(()) => {
            println!("[PASSED] {name}");
            true
        }
        Err(text) => {
            println!("[FAILED] {name}: {text}");
            false
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut h = Harness::new();
    let mut passed = run("testCreateGame", create_games(&mut h));
    passed &= run("testInvalidGameIds", invalid_game_ids(&mut h));
    passed &= run("testAddPlayer", add_players(&mut h));

    for script in WINS {
        let name = if script.len() % 2 == 0 {
            "testPlayer2Win"
        } else {
            "testPlayer1Win"
        };
        passed &= run(name, full_game(&mut h, script, false));
    }
    for script in DRAWS {
        passed &= run("testDraw", full_game(&mut h, script, true));
    }

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
