use internal_iterator::{Internal, IteratorExt};

use crate::board::{Board, BoardDone, BoardMoves, Outcome, PlayError, Player};
use crate::games::checkers::{CheckersError, Move, Piece, Square};

/// Number of rows each player fills in the starting position.
const START_ROWS: usize = 3;

/// A checkers position on an `N×N` board.
///
/// `remaining` counts the live pieces per player, `kings` counts the promotions per player.
/// Kings are never uncounted when captured, so `kings` only grows during a game.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CheckersBoard<const N: usize = 8> {
    grid: [[Option<Piece>; N]; N],
    remaining: [usize; 2],
    kings: [usize; 2],
    next_player: Player,
}

impl<const N: usize> Default for CheckersBoard<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CheckersBoard<N> {
    /// The standard starting position: the dark squares of the first three rows are filled by [Player::B],
    /// those of the last three rows by [Player::A]. [Player::A] moves first.
    pub fn new() -> Self {
        assert!(N >= 2 * START_ROWS, "board size {} is too small for the starting position", N);

        let mut board = Self::empty(Player::A);
        for row in 0..N {
            for col in 0..N {
                let square = Square::new(row as u8, col as u8);
                if !square.is_dark() {
                    continue;
                }

                let player = if row < START_ROWS {
                    Player::B
                } else if row >= N - START_ROWS {
                    Player::A
                } else {
                    continue;
                };

                board.grid[row][col] = Some(Piece::new(row as u8, col as u8, player));
                board.remaining[player.index() as usize] += 1;
            }
        }

        board
    }

    /// A board without any pieces, useful together with [CheckersBoard::place] to build custom positions.
    pub fn empty(next_player: Player) -> Self {
        assert!(N <= u8::MAX as usize / 2, "board size {} is too large", N);
        CheckersBoard {
            grid: [[None; N]; N],
            remaining: [0; 2],
            kings: [0; 2],
            next_player,
        }
    }

    /// Put `piece` on the board. Placing a king counts as a promotion for its owner.
    pub fn place(&mut self, piece: Piece) -> Result<(), CheckersError> {
        self.check_bounds(piece.row(), piece.col())?;
        if self.grid[piece.row()][piece.col()].is_some() {
            return Err(CheckersError::InvalidMove {
                from: piece.square(),
                to: piece.square(),
                reason: "square is already occupied",
            });
        }

        self.grid[piece.row()][piece.col()] = Some(piece);
        self.remaining[piece.player().index() as usize] += 1;
        if piece.is_king() {
            self.kings[piece.player().index() as usize] += 1;
        }
        self.debug_assert_valid();
        Ok(())
    }

    pub const fn size() -> usize {
        N
    }

    pub fn set_next_player(&mut self, player: Player) {
        self.next_player = player;
    }

    pub fn remaining(&self, player: Player) -> usize {
        self.remaining[player.index() as usize]
    }

    pub fn kings(&self, player: Player) -> usize {
        self.kings[player.index() as usize]
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), CheckersError> {
        if row < N && col < N {
            Ok(())
        } else {
            Err(CheckersError::OutOfBounds { row, col, size: N })
        }
    }

    pub fn get_piece(&self, row: usize, col: usize) -> Result<Option<Piece>, CheckersError> {
        self.check_bounds(row, col)?;
        Ok(self.grid[row][col])
    }

    /// Unchecked lookup for squares that are known to be on the board.
    pub(super) fn tile(&self, square: Square) -> Option<Piece> {
        self.grid[square.row()][square.col()]
    }

    /// Return the copy of `piece` stored on the board, or an error if the handle is stale.
    pub(super) fn resolve(&self, piece: &Piece) -> Result<Piece, CheckersError> {
        match self.get_piece(piece.row(), piece.col())? {
            Some(actual) if actual.player() == piece.player() => Ok(actual),
            _ => Err(CheckersError::NotOnBoard(*piece)),
        }
    }

    /// All pieces of `player`, in row-major order.
    pub fn all_pieces(&self, player: Player) -> Vec<Piece> {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.player() == player)
            .copied()
            .collect()
    }

    /// Material balance, positive is good for [Player::B] and negative for [Player::A].
    pub fn evaluate(&self) -> f32 {
        let pieces = self.remaining(Player::B) as f32 - self.remaining(Player::A) as f32;
        let kings = self.kings(Player::B) as f32 - self.kings(Player::A) as f32;
        pieces + 0.5 * kings
    }

    /// Move `piece` to `(row, col)` without checking whether this is a legal checkers move,
    /// promoting it if it lands on the first or last row.
    /// Returns the piece as it is stored on the board after the move.
    pub fn move_piece(&mut self, piece: &Piece, row: usize, col: usize) -> Result<Piece, CheckersError> {
        self.check_bounds(row, col)?;
        let mut piece = self.resolve(piece)?;
        let to = Square::new(row as u8, col as u8);

        if self.grid[row][col].is_some() {
            return Err(CheckersError::InvalidMove {
                from: piece.square(),
                to,
                reason: "destination is occupied",
            });
        }

        self.grid[piece.row()][piece.col()] = None;
        piece.move_to(to);

        if (row == 0 || row == N - 1) && !piece.is_king() {
            piece.make_king();
            self.kings[piece.player().index() as usize] += 1;
        }

        self.grid[row][col] = Some(piece);
        self.debug_assert_valid();
        Ok(piece)
    }

    /// Remove captured pieces from the board. Nothing is removed if any of them is not on the board.
    pub fn remove(&mut self, pieces: &[Piece]) -> Result<(), CheckersError> {
        for piece in pieces {
            self.resolve(piece)?;
        }

        for piece in pieces {
            // a piece listed twice is only removed once
            if self.grid[piece.row()][piece.col()].take().is_some() {
                self.remaining[piece.player().index() as usize] -= 1;
            }
        }

        self.debug_assert_valid();
        Ok(())
    }

    /// Play `mv` for the next player: move the piece, remove everything it captured and pass the turn.
    /// Returns the captured pieces.
    pub fn apply_move(&mut self, mv: Move) -> Result<Vec<Piece>, CheckersError> {
        let invalid = |reason| CheckersError::InvalidMove {
            from: mv.from,
            to: mv.to,
            reason,
        };

        let piece = self
            .get_piece(mv.from.row(), mv.from.col())?
            .ok_or_else(|| invalid("there is no piece to move"))?;
        if piece.player() != self.next_player {
            return Err(invalid("piece belongs to the other player"));
        }

        let captured = self
            .get_valid_moves(&piece)?
            .get(mv.to)
            .ok_or_else(|| invalid("destination is not reachable"))?
            .to_vec();

        self.move_piece(&piece, mv.to.row(), mv.to.col())?;
        self.remove(&captured)?;
        self.next_player = self.next_player.other();

        Ok(captured)
    }

    /// The player that has won, if any. A player without pieces or without legal moves has lost.
    pub fn winner(&self) -> Option<Player> {
        if self.remaining(Player::A) == 0 || self.get_valid_player_moves(Player::A) == 0 {
            Some(Player::B)
        } else if self.remaining(Player::B) == 0 || self.get_valid_player_moves(Player::B) == 0 {
            Some(Player::A)
        } else {
            None
        }
    }

    fn debug_assert_valid(&self) {
        if cfg!(debug_assertions) {
            self.assert_valid();
        }
    }

    /// Check the internal consistency of this board, panics if something is wrong.
    pub fn assert_valid(&self) {
        for player in Player::BOTH {
            let pieces = self.all_pieces(player);
            assert_eq!(
                pieces.len(),
                self.remaining(player),
                "invariant violation: remaining count mismatch for {:?} on\n{}",
                player,
                self
            );

            let kings = pieces.iter().filter(|p| p.is_king()).count();
            assert!(
                kings <= self.kings(player),
                "invariant violation: {} kings on the board but only {} promotions for {:?}",
                kings,
                self.kings(player),
                player,
            );
        }

        for row in 0..N {
            for col in 0..N {
                if let Some(piece) = self.grid[row][col] {
                    assert_eq!(
                        (piece.row(), piece.col()),
                        (row, col),
                        "invariant violation: piece {} stored at ({}, {})",
                        piece,
                        row,
                        col
                    );
                }
            }
        }
    }
}

impl<const N: usize> Board for CheckersBoard<N> {
    type Move = Move;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;

        let piece = match self.get_piece(mv.from.row(), mv.from.col()) {
            Ok(Some(piece)) if piece.player() == self.next_player => piece,
            _ => return Ok(false),
        };
        Ok(self
            .get_valid_moves(&piece)
            .map_or(false, |moves| moves.contains(mv.to)))
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;
        self.apply_move(mv).map_err(|_| PlayError::UnavailableMove)?;
        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.winner().map(Outcome::WonBy)
    }
}

impl<'a, const N: usize> BoardMoves<'a, CheckersBoard<N>> for CheckersBoard<N> {
    type AvailableMovesIterator = Internal<std::vec::IntoIter<Move>>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;

        let mut moves = vec![];
        for piece in self.all_pieces(self.next_player) {
            // SAFETY: unwrap is safe because the piece was just read from the board.
            let map = self.get_valid_moves(&piece).unwrap();
            moves.extend(map.destinations().map(|to| Move::new(piece.square(), to)));
        }

        Ok(moves.into_iter().into_internal())
    }
}
