//! Registry configuration.

use serde::{Deserialize, Serialize};
use tictac_ids::{IdAllocator, PlayerCounter, RandomIds, SequentialIds};

// ---------------------------------------------------------------------------
// IdStrategy
// ---------------------------------------------------------------------------

/// How a registry picks game ids.
///
/// Either way the registry re-draws on collision, so ids are unique among
/// tracked games regardless of strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IdStrategy {
    /// Count up from `start`.
    Sequential { start: u64 },

    /// Draw uniformly from `0..=max`. A `seed` makes the sequence
    /// reproducible; without one the generator is seeded from the OS.
    Random {
        max: u64,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl IdStrategy {
    /// Builds the allocator this strategy describes.
    pub fn build(&self) -> Box<dyn IdAllocator> {
        match *self {
            Self::Sequential { start } => Box::new(SequentialIds::starting_at(start)),
            Self::Random {
                max,
                seed: Some(seed),
            } => Box::new(RandomIds::seeded(max, seed)),
            Self::Random { max, seed: None } => Box::new(RandomIds::from_entropy(max)),
        }
    }
}

impl Default for IdStrategy {
    fn default() -> Self {
        Self::Sequential { start: 0 }
    }
}

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`GameRegistry`](crate::GameRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Game id allocation.
    pub id_strategy: IdStrategy,

    /// The first player id handed out, clamped to `1..=MAX_RAW_ID` so every
    /// player id fits the raw interface.
    pub first_player_id: u64,
}

impl RegistryConfig {
    pub(crate) fn player_counter(&self) -> PlayerCounter {
        PlayerCounter::starting_at(self.first_player_id)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            first_player_id: 1,
        }
    }
}
