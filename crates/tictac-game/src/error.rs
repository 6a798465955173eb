//! Error types for the game layer.

use tictac_protocol::{GameId, PlayerId, StatusCode};

/// Reasons a registry call was rejected.
///
/// There is exactly one variant per [`StatusCode`], and the registry
/// reports the first one that applies in the order they are listed here.
/// A rejected call never changes any state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No tracked game has this id.
    #[error("game {0} does not exist")]
    GameDoesNotExist(GameId),

    /// Fewer than two players have joined.
    #[error("game {0} has not started")]
    GameNotStarted(GameId),

    /// The game has already been won or drawn.
    #[error("game {0} has ended")]
    GameEnded(GameId),

    /// The game already has both of its players.
    #[error("game {0} is already ongoing")]
    GameOngoing(GameId),

    /// The player was never admitted to this game.
    #[error("player {0} is not part of game {1}")]
    PlayerDoesNotExist(PlayerId, GameId),

    /// It is the other player's move.
    #[error("it is not player {0}'s turn in game {1}")]
    WrongTurn(PlayerId, GameId),

    /// The coordinates are off the board or the cell is taken.
    #[error("invalid location ({x}, {y})")]
    InvalidLocation { x: i32, y: i32 },
}

impl GameError {
    /// Returns the status code reported for this error.
    pub fn code(&self) -> StatusCode {
        match self {
            Self::GameDoesNotExist(_) => StatusCode::GameDoesNotExist,
            Self::GameNotStarted(_) => StatusCode::GameNotStarted,
            Self::GameEnded(_) => StatusCode::GameEnded,
            Self::GameOngoing(_) => StatusCode::GameOngoing,
            Self::PlayerDoesNotExist(..) => StatusCode::PlayerDoesNotExist,
            Self::WrongTurn(..) => StatusCode::WrongTurn,
            Self::InvalidLocation { .. } => StatusCode::InvalidLocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_error_maps_to_its_code() {
        let g = GameId(1);
        let p = PlayerId(2);
        assert_eq!(GameError::GameDoesNotExist(g).code(), StatusCode::GameDoesNotExist);
        assert_eq!(GameError::GameNotStarted(g).code(), StatusCode::GameNotStarted);
        assert_eq!(GameError::GameEnded(g).code(), StatusCode::GameEnded);
        assert_eq!(GameError::GameOngoing(g).code(), StatusCode::GameOngoing);
        assert_eq!(
            GameError::PlayerDoesNotExist(p, g).code(),
            StatusCode::PlayerDoesNotExist
        );
        assert_eq!(GameError::WrongTurn(p, g).code(), StatusCode::WrongTurn);
        assert_eq!(
            GameError::InvalidLocation { x: 3, y: 0 }.code(),
            StatusCode::InvalidLocation
        );
    }

    #[test]
    fn test_error_messages_name_the_ids() {
        let err = GameError::WrongTurn(PlayerId(4), GameId(9));
        assert_eq!(err.to_string(), "it is not player P-4's turn in game G-9");
        let err = GameError::InvalidLocation { x: -1, y: 2 };
        assert_eq!(err.to_string(), "invalid location (-1, 2)");
    }
}
