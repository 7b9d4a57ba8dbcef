use std::fmt::{Display, Formatter};

use itertools::Itertools;
use nom::Finish;

use crate::board::{Board, Player};
use crate::games::checkers::{CheckersBoard, InvalidLayout, Piece, Square};

type Tile = Option<(Player, bool)>;

mod parse {
    use nom::character::complete::{char, one_of};
    use nom::combinator::{eof, map};
    use nom::multi::{many1, separated_list1};
    use nom::sequence::{separated_pair, terminated};
    use nom::IResult;

    use super::*;

    fn tile(input: &str) -> IResult<&str, Tile> {
        map(one_of(".aAbB"), |c| match c {
            '.' => None,
            'a' => Some((Player::A, false)),
            'A' => Some((Player::A, true)),
            'b' => Some((Player::B, false)),
            'B' => Some((Player::B, true)),
            _ => unreachable!(),
        })(input)
    }

    fn player(input: &str) -> IResult<&str, Player> {
        map(one_of("ab"), |c| match c {
            'a' => Player::A,
            'b' => Player::B,
            _ => unreachable!(),
        })(input)
    }

    pub(super) fn layout(input: &str) -> IResult<&str, (Vec<Vec<Tile>>, Player)> {
        terminated(
            separated_pair(separated_list1(char('/'), many1(tile)), char(' '), player),
            eof,
        )(input)
    }
}

impl<const N: usize> CheckersBoard<N> {
    /// Parse a board from its layout: the rows from top to bottom separated by `/`,
    /// followed by a space and the next player.
    /// Tiles are `.` for an empty square, `a`/`b` for a man and `A`/`B` for a king.
    ///
    /// ```
    /// use checkers::games::checkers::CheckersBoard;
    ///
    /// let layout = ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../a.a.a.a./.a.a.a.a/a.a.a.a. a";
    /// let board = CheckersBoard::<8>::from_layout(layout).unwrap();
    /// assert_eq!(board, CheckersBoard::new());
    /// assert_eq!(board.to_layout(), layout);
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self, InvalidLayout> {
        let err = |reason| InvalidLayout {
            layout: layout.to_owned(),
            reason,
        };

        let (rows, next_player) = match parse::layout(layout).finish() {
            Ok((_, result)) => result,
            Err(_) => return Err(err("syntax error")),
        };

        if rows.len() != N || rows.iter().any(|row| row.len() != N) {
            return Err(err("wrong board size"));
        }

        let mut board = CheckersBoard::empty(next_player);
        for (row, tiles) in rows.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                let (player, king) = match tile {
                    None => continue,
                    Some(tile) => tile,
                };

                if !Square::new(row as u8, col as u8).is_dark() {
                    return Err(err("piece on a light square"));
                }

                let piece = if king {
                    Piece::new_king(row as u8, col as u8, player)
                } else {
                    Piece::new(row as u8, col as u8, player)
                };
                board.place(piece).map_err(|_| err("invalid piece"))?;
            }
        }

        Ok(board)
    }

    pub fn to_layout(&self) -> String {
        let rows = (0..N).map(|row| (0..N).map(|col| tile_to_char(self.tile_at(row, col))).collect::<String>());
        format!("{} {}", rows.format("/"), self.next_player().to_char())
    }

    fn tile_at(&self, row: usize, col: usize) -> Option<Piece> {
        self.tile(Square::new(row as u8, col as u8))
    }
}

fn tile_to_char(tile: Option<Piece>) -> char {
    tile.map_or('.', Piece::to_char)
}

impl<const N: usize> Display for CheckersBoard<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   {}", (0..N).map(|col| col % 10).join(""))?;
        writeln!(f, "  +{}+", "-".repeat(N))?;
        for row in 0..N {
            write!(f, "{:>2}|", row)?;
            for col in 0..N {
                write!(f, "{}", tile_to_char(self.tile_at(row, col)))?;
            }
            write!(f, "|")?;

            match row {
                0 => write!(f, "  next: {}", self.next_player().to_char())?,
                1 => write!(
                    f,
                    "  pieces: a {} b {}",
                    self.remaining(Player::A),
                    self.remaining(Player::B)
                )?,
                2 => write!(f, "  kings: a {} b {}", self.kings(Player::A), self.kings(Player::B))?,
                _ => {}
            }

            writeln!(f)?;
        }
        writeln!(f, "  +{}+", "-".repeat(N))?;
        Ok(())
    }
}
