//! The integer interface.
//!
//! Every call returns a single `i32`: a non-negative game id, a positive
//! player id, or one of the negative [`StatusCode`] values. It's the shape
//! a C-style caller or a test harness expects, layered over the typed
//! [`GameRegistry`].

use tictac_game::GameRegistry;
use tictac_ids::{IdAllocator, SequentialIds};
use tictac_protocol::{GameId, PlayerId, ProtocolError, StatusCode};

/// Stands in for raw player ids that can't be valid (zero or negative).
///
/// The counter never issues it, so no game has admitted it, and the
/// registry reports `PlayerDoesNotExist` only after the game-level checks
/// that take precedence.
const NEVER_ADMITTED: PlayerId = PlayerId(0);

/// A [`GameRegistry`] behind the integer interface.
///
/// Ids are returned as `i32`. Game allocators and the player counter both
/// stay inside `0..=i32::MAX`, so no id is ever truncated on the way out.
pub struct RawRegistry<A: IdAllocator = SequentialIds> {
    inner: GameRegistry<A>,
}

impl RawRegistry<SequentialIds> {
    pub fn new() -> Self {
        Self::from_registry(GameRegistry::new())
    }
}

impl Default for RawRegistry<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: IdAllocator> RawRegistry<A> {
    pub fn from_registry(inner: GameRegistry<A>) -> Self {
        Self { inner }
    }

    /// Creates a game. Always returns a game id `>= 0`.
    pub fn create_game(&mut self) -> i32 {
        self.inner.create_game().to_raw()
    }

    /// Admits a player. Returns the new player id (`> 0`) or one of
    /// `GameDoesNotExist`, `GameEnded`, `GameOngoing`.
    pub fn add_player(&mut self, game_id: i32) -> i32 {
        let Ok(game_id) = GameId::try_from(game_id) else {
            return StatusCode::GameDoesNotExist.code();
        };
        match self.inner.add_player(game_id) {
            Ok(player_id) => player_id.to_raw(),
            Err(err) => err.code().code(),
        }
    }

    /// Plays a move.
    ///
    /// Returns `GameOngoing` if the game continues, the mover's id on a
    /// win, the other player's id on a draw, or the status code of the
    /// first failed check.
    pub fn make_move(&mut self, game_id: i32, player_id: i32, x: i32, y: i32) -> i32 {
        let Ok(game_id) = GameId::try_from(game_id) else {
            return StatusCode::GameDoesNotExist.code();
        };
        let player_id = PlayerId::try_from(player_id).unwrap_or(NEVER_ADMITTED);
        match self.inner.make_move(game_id, player_id, x, y) {
            Ok(outcome) => outcome.to_raw(),
            Err(err) => err.code().code(),
        }
    }

    /// The typed registry underneath.
    pub fn registry(&self) -> &GameRegistry<A> {
        &self.inner
    }

    pub fn into_inner(self) -> GameRegistry<A> {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// RawReply
// ---------------------------------------------------------------------------

/// A decoded raw return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawReply {
    /// A game or player id.
    Id(u64),
    /// A status code.
    Status(StatusCode),
}

impl TryFrom<i32> for RawReply {
    type Error = ProtocolError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match u64::try_from(raw) {
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => StatusCode::try_from(raw).map(Self::Status),
        }
    }
}

impl std::fmt::Display for RawReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Status(code) => write!(f, "{code}"),
        }
    }
}
