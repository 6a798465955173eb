//! The 3×3 grid and the winning-line table.
//!
//! Cells hold the id of the player who took them. `None` is the empty
//! sentinel, and since player ids are strictly positive there is no raw
//! value that could be confused with it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tictac_protocol::{MoveOutcome, PlayerId};

/// Side length of the board.
pub const SIZE: usize = 3;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A validated cell coordinate.
///
/// `x` is the first index (row) and `y` the second (column). Both are in
/// `0..3`; the only way to get a `Position` from caller input is
/// [`Position::new`], which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Validates raw coordinates. Returns `None` if either is outside
    /// `[0, 2]`.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let x = usize::try_from(x).ok().filter(|&v| v < SIZE)?;
        let y = usize::try_from(y).ok().filter(|&v| v < SIZE)?;
        Some(Self { x, y })
    }

    const fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// Every line that wins the game: three rows, three columns, two
/// diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A tic-tac-toe grid.
///
/// Once a cell is occupied it is never overwritten: [`place`](Self::place)
/// refuses occupied cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<PlayerId>; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns who occupies `pos`, if anyone.
    pub fn get(&self, pos: Position) -> Option<PlayerId> {
        self.cells[pos.x][pos.y]
    }

    /// Returns `true` if `pos` is free.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Marks `pos` for `player`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is
    /// already taken.
    pub fn place(&mut self, pos: Position, player: PlayerId) -> bool {
        let cell = &mut self.cells[pos.x][pos.y];
        if cell.is_some() {
            return false;
        }
        *cell = Some(player);
        true
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Returns `true` when all nine cells are occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == SIZE * SIZE
    }

    /// Returns `true` if `player` holds all three cells of any winning line.
    pub fn completes_line(&self, player: PlayerId) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&pos| self.get(pos) == Some(player)))
    }

    /// Evaluates the board right after `mover` placed a mark.
    ///
    /// A completed line wins for the mover. Otherwise a full board is a
    /// draw, reported with the other player's id. Anything else keeps the
    /// game going. No early draw detection: a position that can no longer
    /// be won still plays out to the ninth mark.
    pub fn outcome_after(&self, mover: PlayerId, other: PlayerId) -> MoveOutcome {
        if self.completes_line(mover) {
            MoveOutcome::Win { winner: mover }
        } else if self.is_full() {
            MoveOutcome::Draw { other }
        } else {
            MoveOutcome::Ongoing
        }
    }

    /// Raw rows of the grid.
    pub fn rows(&self) -> &[[Option<PlayerId>; SIZE]; SIZE] {
        &self.cells
    }
}

/// Renders one row per line, `.` for empty cells and the raw player id
/// otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(player) => write!(f, "{}", player.0)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
