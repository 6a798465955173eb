//! Game registry: creates, tracks, and routes calls to game sessions.

use std::collections::HashMap;

use tictac_ids::{IdAllocator, PlayerCounter, SequentialIds};
use tictac_protocol::{GameId, GameStatus, MoveOutcome, PlayerId};

use crate::{GameError, GameSession, GameSnapshot, RegistryConfig};

/// Owns every game and is the only way to change one.
///
/// The registry is a plain synchronous object: every call runs to
/// completion without yielding. Wrap it in a mutex to share it between
/// tasks (the `tictac` crate's `SharedRegistry` does exactly that).
///
/// ## Lifecycle of a game
///
/// ```text
/// create_game() ──→ add_player() ──→ add_player() ──→ make_move()…
///       │                │                 │                │
///       ▼                ▼                 ▼                ▼
///  [NotStarted]     [NotStarted]       [Ongoing]    [Ongoing | Ended]
/// ```
///
/// Games are never removed by the registry itself. An embedding system
/// that wants a retention policy calls [`remove_game`](Self::remove_game).
pub struct GameRegistry<A: IdAllocator = SequentialIds> {
    /// Tracked games, keyed by id.
    games: HashMap<GameId, GameSession>,

    /// Source of candidate game ids. Collisions are re-drawn.
    allocator: A,

    /// One player counter for the whole registry, so player ids are
    /// unique across games.
    players: PlayerCounter,
}

impl GameRegistry<SequentialIds> {
    /// Creates an empty registry with sequential game ids from 0 and
    /// player ids from 1.
    pub fn new() -> Self {
        Self::with_allocator(SequentialIds::default())
    }
}

impl Default for GameRegistry<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRegistry<Box<dyn IdAllocator>> {
    /// Creates an empty registry as described by `config`.
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            games: HashMap::new(),
            allocator: config.id_strategy.build(),
            players: config.player_counter(),
        }
    }
}

impl<A: IdAllocator> GameRegistry<A> {
    /// How many colliding candidates `create_game` accepts from the
    /// allocator before falling back to a scan.
    pub const MAX_DRAWS: usize = 64;

    /// Creates an empty registry that draws game ids from `allocator`.
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            games: HashMap::new(),
            allocator,
            players: PlayerCounter::default(),
        }
    }

    /// Creates a new game and returns its id.
    ///
    /// The id is unique among tracked games: candidates that collide with
    /// an existing game are discarded and another is drawn. After
    /// [`MAX_DRAWS`](Self::MAX_DRAWS) collisions in a row the registry stops
    /// asking the allocator and takes the lowest free id instead, so this
    /// call always returns and has no failure mode.
    pub fn create_game(&mut self) -> GameId {
        let game_id = self.draw_free_id().unwrap_or_else(|| {
            let fallback = self.lowest_free_id();
            tracing::warn!(
                draws = Self::MAX_DRAWS,
                %fallback,
                "allocator kept colliding, using lowest free id"
            );
            fallback
        });

        self.games.insert(game_id, GameSession::new(game_id));
        tracing::info!(%game_id, "game created");
        game_id
    }

    /// Asks the allocator for up to `MAX_DRAWS` candidates and returns the
    /// first one no tracked game uses.
    fn draw_free_id(&mut self) -> Option<GameId> {
        for _ in 0..Self::MAX_DRAWS {
            let candidate = self.allocator.next_id();
            if !self.games.contains_key(&candidate) {
                return Some(candidate);
            }
            tracing::trace!(%candidate, "game id collision, drawing again");
        }
        None
    }

    /// Scans upward from 0. With `n` tracked games a free id is found within
    /// `n + 1` steps, and it stays within `MAX_RAW_ID` unless more than
    /// `MAX_RAW_ID` games are tracked.
    fn lowest_free_id(&self) -> GameId {
        let mut id = 0;
        while self.games.contains_key(&GameId(id)) {
            id += 1;
        }
        GameId(id)
    }

    /// Admits a new player to a game that hasn't started yet.
    ///
    /// The second admission starts the game; the first admitted player
    /// moves first.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`GameError::GameDoesNotExist`]: unknown id
    /// - [`GameError::GameEnded`]: the game is over
    /// - [`GameError::GameOngoing`]: both players already joined
    pub fn add_player(&mut self, game_id: GameId) -> Result<PlayerId, GameError> {
        let result = match self.games.get_mut(&game_id) {
            Some(session) => session.admit(&mut self.players).inspect(|&player_id| {
                tracing::info!(%game_id, %player_id, "player admitted");
                if session.status() == GameStatus::Ongoing {
                    tracing::info!(%game_id, "game started");
                }
            }),
            None => Err(GameError::GameDoesNotExist(game_id)),
        };

        result.inspect_err(|err| {
            tracing::debug!(%game_id, code = %err.code(), "player rejected");
        })
    }

    /// Plays a move for `player_id` at `(x, y)`.
    ///
    /// Returns [`MoveOutcome::Win`] with the mover's id if the move
    /// completes a line, [`MoveOutcome::Draw`] with the *other* player's id
    /// if it fills the board without one, and [`MoveOutcome::Ongoing`]
    /// otherwise.
    ///
    /// # Errors
    /// Checked in this order, and nothing changes on any of them:
    /// - [`GameError::GameDoesNotExist`]: unknown game id
    /// - [`GameError::GameNotStarted`]: fewer than two players
    /// - [`GameError::GameEnded`]: the game is over
    /// - [`GameError::PlayerDoesNotExist`]: not one of this game's players
    /// - [`GameError::WrongTurn`]: the other player is to move
    /// - [`GameError::InvalidLocation`]: off the board or occupied
    pub fn make_move(
        &mut self,
        game_id: GameId,
        player_id: PlayerId,
        x: i32,
        y: i32,
    ) -> Result<MoveOutcome, GameError> {
        let session = match self.games.get_mut(&game_id) {
            Some(session) => session,
            None => {
                tracing::debug!(%game_id, %player_id, "move rejected: unknown game");
                return Err(GameError::GameDoesNotExist(game_id));
            }
        };

        match session.make_move(player_id, x, y) {
            Ok(outcome) => {
                match outcome {
                    MoveOutcome::Ongoing => {
                        tracing::debug!(%game_id, %player_id, x, y, "move played");
                    }
                    MoveOutcome::Win { winner } => {
                        tracing::info!(%game_id, %winner, "game ended in a win");
                    }
                    MoveOutcome::Draw { .. } => {
                        tracing::info!(%game_id, "game ended in a draw");
                    }
                }
                Ok(outcome)
            }
            Err(err) => {
                tracing::debug!(%game_id, %player_id, x, y, code = %err.code(), "move rejected");
                Err(err)
            }
        }
    }

    /// Returns a game for inspection.
    pub fn game(&self, game_id: GameId) -> Option<&GameSession> {
        self.games.get(&game_id)
    }

    /// Returns a game's lifecycle status.
    pub fn status(&self, game_id: GameId) -> Result<GameStatus, GameError> {
        self.game(game_id)
            .map(GameSession::status)
            .ok_or(GameError::GameDoesNotExist(game_id))
    }

    /// Returns a serializable view of a game.
    pub fn snapshot(&self, game_id: GameId) -> Result<GameSnapshot, GameError> {
        self.game(game_id)
            .map(GameSession::snapshot)
            .ok_or(GameError::GameDoesNotExist(game_id))
    }

    /// Returns `true` if `game_id` names a tracked game.
    pub fn contains(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    /// Stops tracking a game and returns its final state.
    ///
    /// The core never calls this; it exists for retention policies in the
    /// embedding system. Once removed, the id may be handed out again.
    pub fn remove_game(&mut self, game_id: GameId) -> Option<GameSession> {
        let removed = self.games.remove(&game_id);
        if removed.is_some() {
            tracing::info!(%game_id, "game removed");
        }
        removed
    }

    /// Returns the number of tracked games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Lists all tracked game ids, in no particular order.
    pub fn game_ids(&self) -> Vec<GameId> {
        self.games.keys().copied().collect()
    }
}
