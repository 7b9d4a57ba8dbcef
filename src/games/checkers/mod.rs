//! Checkers (draughts) on an `N×N` board, by default the standard 8×8 one.
//!
//! # Rules
//! 1. Pieces only stand on dark squares, those with `col % 2 == (row + 1) % 2`.
//!    [Player::A] starts on the bottom three rows and moves up (towards row 0),
//!    [Player::B] starts on the top three rows and moves down.
//! 2. A man moves one square diagonally forward. A king may move in both row directions.
//! 3. A man or king can jump over an adjacent opponent piece onto the empty square directly behind it,
//!    capturing it. From the landing square it may keep jumping in the same row direction,
//!    possibly switching column direction, forming a capture chain.
//!    Every landing square of a chain is a valid destination. Capturing is not mandatory.
//! 4. A piece landing on row `0` or row `N-1` is promoted to a king.
//! 5. A player loses when they have no pieces left or no legal moves.
//!
//! The board layout can be written and parsed in a compact text form, see [CheckersBoard::from_layout].
use std::fmt::{Display, Formatter};

use crate::board::Player;

pub use board::CheckersBoard;
pub use movegen::MoveMap;
pub use piece::Piece;

mod board;
mod io;
mod movegen;
mod piece;
pub mod session;

/// A square on the board, `row` counts from the top, `col` from the left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The square `(dr, dc)` away from this one, if it is still on a `size×size` board.
    pub fn offset(self, dr: i8, dc: i8, size: usize) -> Option<Square> {
        let row = self.row as isize + dr as isize;
        let col = self.col as isize + dc as isize;
        let range = 0..size as isize;
        (range.contains(&row) && range.contains(&col)).then(|| Square::new(row as u8, col as u8))
    }

    /// Whether pieces can stand on this square.
    pub fn is_dark(self) -> bool {
        self.col % 2 == (self.row + 1) % 2
    }
}

/// A move of the piece on `from` to `to`, which may capture pieces on the way.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

/// The row direction men of `player` move in.
pub fn forward(player: Player) -> i8 {
    match player {
        Player::A => -1,
        Player::B => 1,
    }
}

/// Errors returned by the checkers board operations.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum CheckersError {
    #[error("square ({row}, {col}) is outside of the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("invalid move {from} -> {to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: &'static str,
    },

    #[error("piece {0} is not on the board")]
    NotOnBoard(Piece),
}

/// Error returned when parsing a board layout fails.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid checkers layout {layout:?}: {reason}")]
pub struct InvalidLayout {
    pub layout: String,
    pub reason: &'static str,
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
