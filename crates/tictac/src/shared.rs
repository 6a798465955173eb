//! A registry handle that can be shared between tasks.
//!
//! The registry itself is synchronous and single-owner. `SharedRegistry`
//! puts it behind one `tokio::sync::Mutex`, so every call (on any game)
//! is serialized. The critical sections are a hash lookup and at most nine
//! cell checks, so a single lock is plenty for the expected contention.

use std::sync::Arc;

use tictac_game::{GameRegistry, GameSnapshot, RegistryConfig};
use tictac_ids::{IdAllocator, SequentialIds};
use tictac_protocol::{GameId, GameStatus, MoveOutcome, PlayerId};
use tokio::sync::Mutex;

use crate::TictacError;

/// Cloneable async handle to a [`GameRegistry`].
///
/// Clones share the same registry. Each method takes the lock for the
/// duration of one registry call and releases it before returning.
pub struct SharedRegistry<A: IdAllocator = SequentialIds> {
    inner: Arc<Mutex<GameRegistry<A>>>,
}

impl<A: IdAllocator> Clone for SharedRegistry<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedRegistry<SequentialIds> {
    pub fn new() -> Self {
        Self::from_registry(GameRegistry::new())
    }
}

impl Default for SharedRegistry<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedRegistry<Box<dyn IdAllocator>> {
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self::from_registry(GameRegistry::with_config(config))
    }
}

impl<A: IdAllocator> SharedRegistry<A> {
    pub fn from_registry(registry: GameRegistry<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub async fn create_game(&self) -> GameId {
        self.inner.lock().await.create_game()
    }

    pub async fn add_player(&self, game_id: GameId) -> Result<PlayerId, TictacError> {
        Ok(self.inner.lock().await.add_player(game_id)?)
    }

    pub async fn make_move(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        x: i32,
        y: i32,
    ) -> Result<MoveOutcome, TictacError> {
        Ok(self.inner.lock().await.make_move(game_id, player_id, x, y)?)
    }

    pub async fn status(&self, game_id: GameId) -> Result<GameStatus, TictacError> {
        Ok(self.inner.lock().await.status(game_id)?)
    }

    pub async fn snapshot(&self, game_id: GameId) -> Result<GameSnapshot, TictacError> {
        Ok(self.inner.lock().await.snapshot(game_id)?)
    }

    pub async fn game_count(&self) -> usize {
        self.inner.lock().await.game_count()
    }
}
