//! One game's state machine.
//!
//! A `GameSession` owns everything about a single game: its board, its
//! players, whose turn it is, and its lifecycle status. It is only
//! reachable through the [`GameRegistry`](crate::GameRegistry), which
//! hands out `&GameSession` for inspection but never `&mut`.
//!
//! Every mutating method checks all of its preconditions before it
//! touches anything, so a rejected call leaves the session exactly as it
//! was.

use serde::{Deserialize, Serialize};
use tictac_ids::PlayerCounter;
use tictac_protocol::{GameId, GameStatus, MoveOutcome, PlayerId};

use crate::{Board, GameError, Position};

/// A serializable, point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub status: GameStatus,
    /// Admitted players in admission order.
    pub players: Vec<PlayerId>,
    /// Whose move is next. `None` until the first player joins.
    pub turn: Option<PlayerId>,
    pub board: Board,
    pub moves_played: usize,
}

/// The full mutable state of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: GameId,
    status: GameStatus,
    /// Player A, then player B.
    players: [Option<PlayerId>; 2],
    turn: Option<PlayerId>,
    board: Board,
}

impl GameSession {
    /// Creates an empty game waiting for players.
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            status: GameStatus::NotStarted,
            players: [None, None],
            turn: None,
            board: Board::new(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Admitted players in admission order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().flatten().copied()
    }

    /// Whose move is next.
    ///
    /// Set when the first player joins, so it already names player A while
    /// the game waits for player B.
    pub fn turn(&self) -> Option<PlayerId> {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_played(&self) -> usize {
        self.board.occupied_count()
    }

    /// Returns `true` if `player` was admitted to this game.
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.players.contains(&Some(player))
    }

    /// Returns the opponent of `player`, if both are admitted.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        match self.players {
            [Some(a), Some(b)] if a == player => Some(b),
            [Some(a), Some(b)] if b == player => Some(a),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.id,
            status: self.status,
            players: self.players().collect(),
            turn: self.turn,
            board: self.board.clone(),
            moves_played: self.moves_played(),
        }
    }

    // -----------------------------------------------------------------------
    // Admission
    // -----------------------------------------------------------------------

    /// Checks whether another player may join, without joining.
    pub fn check_admission(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Ended => Err(GameError::GameEnded(self.id)),
            GameStatus::Ongoing => Err(GameError::GameOngoing(self.id)),
            GameStatus::NotStarted => Ok(()),
        }
    }

    /// Admits a player, drawing their id from `counter`.
    ///
    /// The counter is only touched once admission is certain, so rejected
    /// calls never burn an id. The first player becomes player A and takes
    /// the turn pointer; the second becomes player B and starts the game.
    pub fn admit(&mut self, counter: &mut PlayerCounter) -> Result<PlayerId, GameError> {
        self.check_admission()?;

        let player = counter.next();
        match self.players {
            [None, _] => {
                self.players[0] = Some(player);
                self.turn = Some(player);
            }
            [Some(_), None] => {
                self.players[1] = Some(player);
                self.advance(GameStatus::Ongoing);
            }
            // Both slots filled means Ongoing, which check_admission rejects.
            [Some(_), Some(_)] => return Err(GameError::GameOngoing(self.id)),
        }
        Ok(player)
    }

    // -----------------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------------

    /// Runs every move precondition in precedence order and returns the
    /// validated position and the opponent.
    pub fn validate_move(
        &self,
        player: PlayerId,
        x: i32,
        y: i32,
    ) -> Result<(Position, PlayerId), GameError> {
        match self.status {
            GameStatus::NotStarted => return Err(GameError::GameNotStarted(self.id)),
            GameStatus::Ended => return Err(GameError::GameEnded(self.id)),
            GameStatus::Ongoing => {}
        }

        let other = self
            .opponent_of(player)
            .ok_or(GameError::PlayerDoesNotExist(player, self.id))?;

        if self.turn != Some(player) {
            return Err(GameError::WrongTurn(player, self.id));
        }

        let pos = Position::new(x, y)
            .filter(|&pos| self.board.is_empty_at(pos))
            .ok_or(GameError::InvalidLocation { x, y })?;

        Ok((pos, other))
    }

    /// Applies a move by `player` at `(x, y)`.
    ///
    /// After the mark is placed the outcome is evaluated, the game ends if
    /// it was won or drawn, and the turn passes to the other player either
    /// way.
    pub fn make_move(
        &mut self,
        player: PlayerId,
        x: i32,
        y: i32,
    ) -> Result<MoveOutcome, GameError> {
        let (pos, other) = self.validate_move(player, x, y)?;

        if !self.board.place(pos, player) {
            return Err(GameError::InvalidLocation { x, y });
        }

        let outcome = self.board.outcome_after(player, other);
        if outcome.is_final() {
            self.advance(GameStatus::Ended);
        }
        self.turn = Some(other);

        Ok(outcome)
    }

    fn advance(&mut self, target: GameStatus) {
        debug_assert!(
            self.status.can_transition_to(target),
            "illegal transition {} -> {}",
            self.status,
            target
        );
        self.status = target;
    }
}
