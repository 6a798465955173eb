//! Identifier allocation for Tictac.
//!
//! This crate hands out the numbers that name games and players:
//!
//! 1. **Game ids**: drawn from an [`IdAllocator`]. The registry re-draws
//!    on collision, so an allocator only has to produce candidates.
//!    [`SequentialIds`] counts up; [`RandomIds`] draws uniformly from a
//!    range and can be seeded for reproducible tests.
//! 2. **Player ids**: issued by a [`PlayerCounter`], increasing from a
//!    positive start and kept inside the raw `i32` range.
//!
//! # How it fits in the stack
//!
//! ```text
//! Game Layer (above)  ← asks for fresh ids when creating games / admitting players
//!     ↕
//! Id Layer (this crate)  ← produces candidate ids
//!     ↕
//! Protocol Layer (below)  ← provides GameId, PlayerId
//! ```

// Game ids and player ids are allocated differently on purpose: game ids
// may be random and are checked for collisions by the registry, while
// player ids come from one counter and never need checking.

mod allocator;
mod counter;

pub use allocator::{IdAllocator, RandomIds, SequentialIds};
pub use counter::PlayerCounter;
