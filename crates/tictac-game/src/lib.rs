//! Game lifecycle management for Tictac.
//!
//! A [`GameRegistry`] owns every game. Each game is a [`GameSession`]: a
//! 3×3 [`Board`], up to two players, a turn pointer and a [`GameStatus`]
//! that only ever moves forward. Callers never touch a session directly;
//! they go through the registry, which checks preconditions in a fixed
//! precedence order and leaves state untouched whenever it rejects a call.
//!
//! # Key types
//!
//! - [`GameRegistry`]: creates games, admits players, applies moves
//! - [`GameSession`]: one game's state machine
//! - [`Board`] / [`Position`]: the grid and the eight winning lines
//! - [`GameError`]: why a call was rejected, with its [`StatusCode`]
//! - [`RegistryConfig`]: id allocation settings
//!
//! [`GameStatus`]: tictac_protocol::GameStatus
//! [`StatusCode`]: tictac_protocol::StatusCode

mod board;
mod config;
mod error;
mod registry;
mod session;

pub use board::{Board, Position, WINNING_LINES};
pub use config::{IdStrategy, RegistryConfig};
pub use error::GameError;
pub use registry::GameRegistry;
pub use session::{GameSession, GameSnapshot};
