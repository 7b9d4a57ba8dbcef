use crate::board::Player;
use crate::games::checkers::{CheckersBoard, CheckersError, Piece, Square};

/// The destinations reachable by a single piece, each with the pieces captured on the way there.
///
/// Destinations are kept in the order they were first found.
/// Registering a destination again replaces its captures but keeps its position.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MoveMap {
    entries: Vec<(Square, Vec<Piece>)>,
}

impl MoveMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, to: Square) -> bool {
        self.get(to).is_some()
    }

    /// The pieces captured when moving to `to`, `None` if `to` is not reachable.
    pub fn get(&self, to: Square) -> Option<&[Piece]> {
        self.entries
            .iter()
            .find(|(square, _)| *square == to)
            .map(|(_, captured)| captured.as_slice())
    }

    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.entries.iter().map(|&(square, _)| square)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Piece])> + '_ {
        self.entries.iter().map(|(square, captured)| (*square, captured.as_slice()))
    }

    fn insert(&mut self, to: Square, captured: Vec<Piece>) {
        match self.entries.iter_mut().find(|(square, _)| *square == to) {
            Some(entry) => entry.1 = captured,
            None => self.entries.push((to, captured)),
        }
    }
}

impl<const N: usize> CheckersBoard<N> {
    /// All destinations `piece` can move to, including every landing square of capture chains.
    pub fn get_valid_moves(&self, piece: &Piece) -> Result<MoveMap, CheckersError> {
        let piece = self.resolve(piece)?;

        let mut moves = MoveMap::default();
        for &dr in piece.row_directions() {
            for dc in [-1, 1] {
                self.scan(piece.square(), dr, dc, piece.player(), &[], &mut moves);
            }
        }
        Ok(moves)
    }

    /// Follow the diagonal `(dr, dc)` starting next to `from`.
    /// `chain` are the pieces captured so far, a simple step is only allowed when it is empty.
    /// After a capture the scan continues from the landing square in both column directions,
    /// but always in the same row direction, so every call gets at least two rows closer to the edge.
    /// Only the board edge bounds a chain, in both row directions, so an upward chain may end on row 0
    /// just like a downward one may end on row `N-1`.
    fn scan(&self, from: Square, dr: i8, dc: i8, player: Player, chain: &[Piece], moves: &mut MoveMap) {
        let next = match from.offset(dr, dc, N) {
            Some(next) => next,
            None => return,
        };

        match self.tile(next) {
            None => {
                if chain.is_empty() {
                    moves.insert(next, vec![]);
                }
            }
            Some(other) if other.player() == player => {}
            Some(other) => {
                let landing = match next.offset(dr, dc, N) {
                    Some(landing) if self.tile(landing).is_none() => landing,
                    _ => return,
                };

                let mut captured = chain.to_vec();
                captured.push(other);
                moves.insert(landing, captured.clone());

                for dc in [-1, 1] {
                    self.scan(landing, dr, dc, player, &captured, moves);
                }
            }
        }
    }

    /// The total number of destinations over all pieces of `player`.
    pub fn get_valid_player_moves(&self, player: Player) -> usize {
        self.all_pieces(player)
            .iter()
            .map(|piece| self.get_valid_moves(piece).map_or(0, |moves| moves.len()))
            .sum()
    }
}
