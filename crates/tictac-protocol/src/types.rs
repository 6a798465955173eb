//! Core value types shared by every Tictac crate.
//!
//! These are plain data: identifiers, the lifecycle enum, the status-code
//! table and the result of a move. None of them own anything or hold a
//! lock, so they are all `Copy` and can be passed around freely.
//!
//! Think of this module as the vocabulary that a registry and its caller
//! share. The typed API speaks it directly; the raw API squeezes the same
//! values into a single `i32` using the encodings defined here.

// Serde derives let an embedding system put any of these values on
// whatever wire it likes (JSON for a web front end, a binary format for a
// game server). The core never serializes anything itself.
use serde::{Deserialize, Serialize};

// `fmt` backs the `Display` impls, which is what `%field` in a tracing
// macro uses.
use std::fmt;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The largest identifier that still fits the raw `i32` encoding.
///
/// Ids are stored as `u64` but the raw interface returns `i32`. Every
/// allocator and the player counter stay at or below this value, so the
/// conversion in `to_raw` never has to saturate in practice.
pub const MAX_RAW_ID: u64 = i32::MAX as u64;

/// A unique identifier for a game.
///
/// This is a newtype wrapper around `u64`. Wrapping the number buys two
/// things:
///
/// 1. **Type safety**: a `PlayerId` can't be passed where a `GameId` is
///    expected, even though both are integers underneath. With three
///    integer arguments on `make_move` that matters.
/// 2. **Readability**: `fn add_player(game_id: GameId)` says what it
///    takes.
///
/// Valid game ids are always non-negative, which is why the inner value is
/// unsigned: a negative raw id is rejected at the boundary by the
/// `TryFrom<i32>` impl instead of being carried around.
///
/// The derives:
///   - `Copy` → it's just a `u64`, so copying is free
///   - `Hash, Eq` → usable as a `HashMap` key in the registry
///   - `PartialOrd, Ord` → lets tests sort collected ids
///
/// `#[serde(transparent)]` makes `GameId(7)` serialize as plain `7` rather
/// than `{ "0": 7 }`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    /// Returns the id in its raw integer form, saturating at `i32::MAX`.
    ///
    /// Saturation only happens for ids above [`MAX_RAW_ID`], which no
    /// allocator produces.
    pub fn to_raw(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

/// Decodes a raw game id. Negative values are never valid game ids.
impl TryFrom<i32> for GameId {
    type Error = ProtocolError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        u64::try_from(raw)
            .map(GameId)
            .map_err(|_| ProtocolError::InvalidId(raw))
    }
}

/// `tracing::info!(%game_id, "game created")` prints `game_id=G-7`.
impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

/// A unique identifier for a player.
///
/// Same newtype pattern as [`GameId`]. Player ids are strictly positive:
/// zero is never handed out, so it can't collide with an empty board cell
/// in any raw encoding, and every sentinel code is negative so it can't
/// collide with a player either.
///
/// A move result reuses this type. A win or draw is reported as a player
/// id, so the raw interface can return one `i32` for every outcome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Returns the id in its raw integer form, saturating at `i32::MAX`.
    pub fn to_raw(self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl TryFrom<i32> for PlayerId {
    type Error = ProtocolError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match u64::try_from(raw) {
            Ok(id) if id > 0 => Ok(PlayerId(id)),
            _ => Err(ProtocolError::InvalidId(raw)),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a game.
///
/// This is a Rust `enum` with no data in its variants, so it compiles
/// down to a single byte and matches on it are checked for exhaustiveness:
/// adding a fourth state would flag every `match` that forgot it.
///
/// Transitions are strictly ordered, with no way back:
///
/// ```text
/// NotStarted → Ongoing → Ended
/// ```
///
/// - **NotStarted**: created, fewer than two players admitted.
/// - **Ongoing**: both players admitted, moves are accepted.
/// - **Ended**: a move produced a win or filled the board. The board is
///   frozen from here on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    Ongoing,
    Ended,
}

impl GameStatus {
    /// Returns `true` if the game still admits players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Returns `true` once the game has concluded.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns the state that follows this one, or `None` from `Ended`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::Ongoing),
            Self::Ongoing => Some(Self::Ended),
            Self::Ended => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NotStarted"),
            Self::Ongoing => write!(f, "Ongoing"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

// ---------------------------------------------------------------------------
// StatusCode
// ---------------------------------------------------------------------------

/// Sentinel result codes of the raw integer interface.
///
/// All codes are negative, so they can never be mistaken for a game id
/// (`>= 0`) or a player id (`> 0`). Variants are listed in precedence
/// order: when several conditions apply to one call, the one listed first
/// is reported.
///
/// `#[repr(i32)]` pins each variant to the integer written next to it, so
/// `StatusCode::WrongTurn as i32` is `-7` and the values can't drift if
/// variants are reordered. The code `-1` is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum StatusCode {
    GameDoesNotExist = -2,
    GameNotStarted = -3,
    GameEnded = -4,
    /// As an admission error: the game already has two players.
    /// As a move result: the game continues.
    GameOngoing = -5,
    PlayerDoesNotExist = -6,
    WrongTurn = -7,
    InvalidLocation = -8,
}

impl StatusCode {
    /// Every code, in precedence order.
    pub const ALL: [StatusCode; 7] = [
        Self::GameDoesNotExist,
        Self::GameNotStarted,
        Self::GameEnded,
        Self::GameOngoing,
        Self::PlayerDoesNotExist,
        Self::WrongTurn,
        Self::InvalidLocation,
    ];

    /// Returns the raw integer value.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = ProtocolError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == raw)
            .ok_or(ProtocolError::UnknownCode(raw))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GameDoesNotExist => "GAME_DOESNT_EXIST",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameEnded => "GAME_ENDED",
            Self::GameOngoing => "GAME_ONGOING",
            Self::PlayerDoesNotExist => "PLAYER_DOESNT_EXIST",
            Self::WrongTurn => "WRONG_TURN",
            Self::InvalidLocation => "INVALID_LOCATION",
        };
        write!(f, "{name}({})", self.code())
    }
}

// ---------------------------------------------------------------------------
// MoveOutcome
// ---------------------------------------------------------------------------

/// The result of an accepted move.
///
/// A win reports the mover. A draw reports the *other* player, which is
/// how the raw interface tells a draw apart from a win: the caller knows
/// who just moved, so getting back its own id means it won and getting
/// back the opponent's id means nobody did.
///
/// Serde's default enum encoding is used here, so `Ongoing` becomes the
/// string `"Ongoing"` and `Win { winner: P-3 }` becomes
/// `{ "Win": { "winner": 3 } }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No line completed and the board still has empty cells.
    Ongoing,
    /// The mover completed a line.
    Win { winner: PlayerId },
    /// The ninth mark was placed without completing a line.
    Draw { other: PlayerId },
}

impl MoveOutcome {
    /// Returns `true` if this move ended the game.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// Encodes the outcome as a raw integer.
    ///
    /// `Ongoing` becomes the `GameOngoing` code; a win or draw becomes the
    /// reported player id.
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Ongoing => StatusCode::GameOngoing.code(),
            Self::Win { winner } => winner.to_raw(),
            Self::Draw { other } => other.to_raw(),
        }
    }
}
