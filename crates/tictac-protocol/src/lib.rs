//! Shared vocabulary for Tictac.
//!
//! This crate defines the values that cross the boundary between a game
//! registry and whoever drives it:
//!
//! - **Identity** ([`GameId`], [`PlayerId`]): who and what a call is about.
//! - **Lifecycle** ([`GameStatus`]): where a game sits in its state machine.
//! - **Results** ([`MoveOutcome`], [`StatusCode`]): what a call produced,
//!   including the integer sentinel encoding used by the raw interface.
//! - **Errors** ([`ProtocolError`]): what can go wrong decoding a raw code.
//!
//! # Architecture
//!
//! ```text
//! Ids (allocation) → Protocol (values) → Game (sessions, registry)
//! ```
//!
//! Nothing here holds state. The game crate owns every mutable thing; this
//! crate only says what the values mean and how they look as raw integers.

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

mod error;
mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

// Callers write `use tictac_protocol::GameId` rather than reaching into
// `types`. The submodules stay private so the file layout can change
// without breaking anyone.

pub use error::ProtocolError;
pub use types::{GameId, GameStatus, MAX_RAW_ID, MoveOutcome, PlayerId, StatusCode};
