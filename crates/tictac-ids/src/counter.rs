//! Player id issuance.
//!
//! Player ids come from a single counter per registry, shared by every game
//! in it. Two players never share an id, even across different games, and
//! an id is not handed out twice until the counter has gone all the way
//! round its range.
//!
//! The range is `1..=MAX_RAW_ID`. Zero is left out because the raw
//! interface treats player ids as strictly positive, and the upper bound
//! keeps every id representable as an `i32`. Without it, two ids above
//! `i32::MAX` would both encode as `i32::MAX` and a raw caller could no
//! longer tell the players apart.

use tictac_protocol::{MAX_RAW_ID, PlayerId};

/// Issues strictly positive player ids in increasing order, wrapping back
/// to 1 past `MAX_RAW_ID`.
#[derive(Debug, Clone)]
pub struct PlayerCounter {
    next: u64,
}

impl PlayerCounter {
    /// Creates a counter whose first id is `first`, clamped to
    /// `1..=MAX_RAW_ID`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.clamp(1, MAX_RAW_ID),
        }
    }

    /// Issues the next player id.
    pub fn next(&mut self) -> PlayerId {
        let id = self.next;
        self.next = if id >= MAX_RAW_ID { 1 } else { id + 1 };
        PlayerId(id)
    }

    /// Returns the id the next call to [`next`](Self::next) would issue,
    /// without consuming it.
    pub fn peek(&self) -> PlayerId {
        PlayerId(self.next)
    }
}

impl Default for PlayerCounter {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
