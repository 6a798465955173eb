//! Unified error type for Tictac.

use tictac_game::GameError;
use tictac_protocol::ProtocolError;

/// Top-level error that wraps all crate-specific errors.
///
/// `#[from]` on each variant lets `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum TictacError {
    /// A registry call was rejected (unknown game, wrong turn, ...).
    #[error(transparent)]
    Game(#[from] GameError),

    /// A raw integer could not be decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl TictacError {
    /// Returns the status code if this is a rejected registry call.
    pub fn status_code(&self) -> Option<tictac_protocol::StatusCode> {
        match self {
            Self::Game(err) => Some(err.code()),
            Self::Protocol(_) => None,
        }
    }
}
