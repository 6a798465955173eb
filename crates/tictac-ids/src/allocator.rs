//! The game-id allocation hook.
//!
//! Tictac doesn't care how game ids look, only that no two tracked games
//! share one. The [`IdAllocator`] trait produces *candidates*; the registry
//! checks each candidate against the games it tracks and asks again on a
//! collision. That split keeps allocators trivial:
//!
//! - [`SequentialIds`] for predictable ids (the default)
//! - [`RandomIds`] for ids that don't leak how many games exist
//! - anything else a test or an embedding system wants to plug in

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictac_protocol::{GameId, MAX_RAW_ID};

/// Produces candidate game ids.
///
/// Every id returned must be in `0..=MAX_RAW_ID`. Candidates may repeat;
/// the caller is responsible for rejecting ids that are already in use.
/// An allocator that keeps repeating itself is tolerated: the registry
/// gives up on it after a bounded number of collisions and picks a free
/// id itself.
///
/// This is a trait rather than a closure so that an allocator can carry
/// state (a counter, an RNG) and still be stored as `Box<dyn IdAllocator>`
/// when the strategy is picked from configuration at runtime.
///
/// # Trait bounds
///
/// - `Send` → a registry holding the allocator can move into a task.
/// - `'static` → the allocator lives as long as the registry.
///
/// # Example
///
/// ```rust
/// use tictac_ids::IdAllocator;
/// use tictac_protocol::GameId;
///
/// /// Hands out even numbers only.
/// struct EvenIds(u64);
///
/// impl IdAllocator for EvenIds {
///     fn next_id(&mut self) -> GameId {
///         let id = self.0;
///         self.0 += 2;
///         GameId(id)
///     }
/// }
/// ```
pub trait IdAllocator: Send + 'static {
    /// Returns the next candidate id.
    fn next_id(&mut self) -> GameId;
}

impl<A: IdAllocator + ?Sized> IdAllocator for Box<A> {
    fn next_id(&mut self) -> GameId {
        (**self).next_id()
    }
}

// ---------------------------------------------------------------------------
// SequentialIds
// ---------------------------------------------------------------------------

/// Counts up from a starting value, wrapping back to 0 past `MAX_RAW_ID`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates an allocator whose first id is `start` (clamped to
    /// `MAX_RAW_ID`).
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: start.min(MAX_RAW_ID),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&mut self) -> GameId {
        let id = self.next;
        self.next = if id >= MAX_RAW_ID { 0 } else { id + 1 };
        GameId(id)
    }
}

// ---------------------------------------------------------------------------
// RandomIds
// ---------------------------------------------------------------------------

/// Draws ids uniformly from `0..=max`.
///
/// With a small `max` and many live games collisions become frequent.
/// Once the range is full the registry falls back to ids above `max`, so
/// size `max` well above the expected number of live games if ids should
/// stay in range.
///
/// `StdRng` is rand's general-purpose seedable generator. Seeding it with
/// a fixed value makes test runs reproducible.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
    max: u64,
}

impl RandomIds {
    /// Default upper bound for drawn ids.
    pub const DEFAULT_MAX: u64 = 1_000_000;

    /// Creates an allocator seeded from the operating system.
    pub fn from_entropy(max: u64) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            max: max.min(MAX_RAW_ID),
        }
    }

    /// Creates a deterministic allocator. The same seed and bound always
    /// produce the same sequence.
    pub fn seeded(max: u64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max: max.min(MAX_RAW_ID),
        }
    }

    /// Returns the inclusive upper bound.
    pub fn max(&self) -> u64 {
        self.max
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::from_entropy(Self::DEFAULT_MAX)
    }
}

impl IdAllocator for RandomIds {
    fn next_id(&mut self) -> GameId {
        GameId(self.rng.random_range(0..=self.max))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_counts_up_from_zero() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), GameId(0));
        assert_eq!(ids.next_id(), GameId(1));
        assert_eq!(ids.next_id(), GameId(2));
    }

    #[test]
    fn test_sequential_custom_start() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), GameId(100));
        assert_eq!(ids.next_id(), GameId(101));
    }

    #[test]
    fn test_sequential_wraps_at_raw_limit() {
        let mut ids = SequentialIds::starting_at(MAX_RAW_ID);
        assert_eq!(ids.next_id(), GameId(MAX_RAW_ID));
        assert_eq!(ids.next_id(), GameId(0));
    }

    #[test]
    fn test_sequential_start_is_clamped() {
        let mut ids = SequentialIds::starting_at(u64::MAX);
        assert_eq!(ids.next_id(), GameId(MAX_RAW_ID));
    }

    #[test]
    fn test_random_stays_within_bound() {
        let mut ids = RandomIds::seeded(10, 7);
        for _ in 0..500 {
            assert!(ids.next_id().0 <= 10);
        }
    }

    #[test]
    fn test_random_same_seed_same_sequence() {
        let mut a = RandomIds::seeded(RandomIds::DEFAULT_MAX, 42);
        let mut b = RandomIds::seeded(RandomIds::DEFAULT_MAX, 42);
        let xs: Vec<GameId> = (0..20).map(|_| a.next_id()).collect();
        let ys: Vec<GameId> = (0..20).map(|_| b.next_id()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_random_zero_bound_always_yields_zero() {
        let mut ids = RandomIds::seeded(0, 1);
        assert_eq!(ids.next_id(), GameId(0));
        assert_eq!(ids.next_id(), GameId(0));
    }

    #[test]
    fn test_boxed_allocator_delegates() {
        let mut ids: Box<dyn IdAllocator> = Box::new(SequentialIds::starting_at(5));
        assert_eq!(ids.next_id(), GameId(5));
        assert_eq!(ids.next_id(), GameId(6));
    }
}
