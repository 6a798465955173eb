//! # Tictac
//!
//! In-process game-session manager for two-player tic-tac-toe.
//!
//! Tictac creates games, admits exactly two players per game and
//! validates moves, reporting a precise status for every edge case. The
//! core is a synchronous [`GameRegistry`]; this crate adds two ways to
//! drive it:
//!
//! - [`SharedRegistry`]: a cloneable async handle for use across tasks
//! - [`RawRegistry`]: the integer interface, where every result is an id
//!   or a negative [`StatusCode`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tictac::prelude::*;
//!
//! let mut registry = GameRegistry::new();
//! let game = registry.create_game();
//! let a = registry.add_player(game)?;
//! let b = registry.add_player(game)?;
//!
//! assert_eq!(registry.make_move(game, a, 1, 1)?, MoveOutcome::Ongoing);
//! assert_eq!(
//!     registry.make_move(game, a, 0, 0).unwrap_err().code(),
//!     StatusCode::WrongTurn
//! );
//! # let _ = b;
//! # Ok::<(), GameError>(())
//! ```

mod error;
mod raw;
mod shared;

pub use error::TictacError;
pub use raw::{RawRegistry, RawReply};
pub use shared::SharedRegistry;

pub use tictac_game::{
    Board, GameError, GameRegistry, GameSession, GameSnapshot, IdStrategy, Position,
    RegistryConfig, WINNING_LINES,
};
pub use tictac_ids::{IdAllocator, PlayerCounter, RandomIds, SequentialIds};
pub use tictac_protocol::{GameId, GameStatus, MoveOutcome, PlayerId, ProtocolError, StatusCode};

pub mod prelude {
    pub use crate::{
        GameError, GameId, GameRegistry, GameStatus, MoveOutcome, PlayerId, RawRegistry,
        RegistryConfig, SharedRegistry, StatusCode, TictacError,
    };
}
