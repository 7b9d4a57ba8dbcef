use std::fmt::{Display, Formatter};

use crate::board::Player;
use crate::games::checkers::Square;

/// A single checker. This is a plain value, the board holds the authoritative copy and
/// callers only keep copies around as handles into the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    square: Square,
    player: Player,
    king: bool,
}

impl Piece {
    pub fn new(row: u8, col: u8, player: Player) -> Self {
        Piece {
            square: Square::new(row, col),
            player,
            king: false,
        }
    }

    pub fn new_king(row: u8, col: u8, player: Player) -> Self {
        Piece {
            king: true,
            ..Piece::new(row, col, player)
        }
    }

    pub fn square(self) -> Square {
        self.square
    }

    pub fn row(self) -> usize {
        self.square.row()
    }

    pub fn col(self) -> usize {
        self.square.col()
    }

    pub fn player(self) -> Player {
        self.player
    }

    pub fn is_king(self) -> bool {
        self.king
    }

    pub(super) fn move_to(&mut self, square: Square) {
        self.square = square;
    }

    pub(super) fn make_king(&mut self) {
        self.king = true;
    }

    /// The row directions this piece can move in.
    pub fn row_directions(self) -> &'static [i8] {
        match (self.king, self.player) {
            (true, _) => &[-1, 1],
            (false, Player::A) => &[-1],
            (false, Player::B) => &[1],
        }
    }

    pub fn to_char(self) -> char {
        let c = self.player.to_char();
        if self.king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.to_char(), self.square)
    }
}
