//! Full-width minimax search over checkers positions.
//!
//! [Player::B] is the maximizing player and [Player::A] the minimizing one,
//! matching the sign of [CheckersBoard::evaluate]. Every reachable position up to the given depth is visited,
//! each as its own copy of the board, so the searched board is never modified.
use tracing::{debug, trace};

use crate::ai::Bot;
use crate::board::{Board, BoardDone, Player};
use crate::games::checkers::{CheckersBoard, CheckersError, Move, Piece, Square};
use crate::games::max_length::MaxMovesBoard;

#[derive(Debug, Clone)]
pub struct SearchResult<const N: usize> {
    /// The minimax value of the searched board.
    pub score: f32,

    /// The successor to continue with, or the searched board itself if the depth was 0 or the game is over.
    pub board: CheckersBoard<N>,

    /// The move leading to `board`, `None` if no move was searched.
    pub best_move: Option<Move>,

    /// The number of positions visited, including the root.
    pub nodes: u64,
}

/// Search `board` to `depth` plies. When `maximizing` [Player::B] is to move, otherwise [Player::A].
/// If multiple successors have the same score the first one generated is picked.
pub fn search<const N: usize>(board: &CheckersBoard<N>, depth: u32, maximizing: bool) -> SearchResult<N> {
    let mut nodes = 1;

    if depth == 0 || board.winner().is_some() {
        return SearchResult {
            score: board.evaluate(),
            board: board.clone(),
            best_move: None,
            nodes,
        };
    }

    let mut best: Option<(f32, Move, CheckersBoard<N>)> = None;
    for (mv, child) in successors(board, mover(maximizing)) {
        let score = minimax_recurse(&child, depth - 1, !maximizing, &mut nodes);
        if best.as_ref().map_or(true, |&(best_score, _, _)| improves(maximizing, best_score, score)) {
            best = Some((score, mv, child));
        }
    }

    let result = match best {
        Some((score, mv, child)) => SearchResult {
            score,
            board: child,
            best_move: Some(mv),
            nodes,
        },
        None => SearchResult {
            score: board.evaluate(),
            board: board.clone(),
            best_move: None,
            nodes,
        },
    };

    debug!(
        depth,
        maximizing,
        score = result.score,
        nodes = result.nodes,
        "minimax search finished"
    );
    result
}

/// The minimax value of `board`, without keeping track of the best successor.
pub fn minimax_value<const N: usize>(board: &CheckersBoard<N>, depth: u32, maximizing: bool) -> f32 {
    let mut nodes = 0;
    minimax_recurse(board, depth, maximizing, &mut nodes)
}

fn minimax_recurse<const N: usize>(board: &CheckersBoard<N>, depth: u32, maximizing: bool, nodes: &mut u64) -> f32 {
    *nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return board.evaluate();
    }

    let mut best_score = if maximizing { f32::NEG_INFINITY } else { f32::INFINITY };
    for (_, child) in successors(board, mover(maximizing)) {
        let score = minimax_recurse(&child, depth - 1, !maximizing, nodes);
        if improves(maximizing, best_score, score) {
            best_score = score;
        }
    }

    best_score
}

fn mover(maximizing: bool) -> Player {
    if maximizing {
        Player::B
    } else {
        Player::A
    }
}

fn improves(maximizing: bool, best: f32, score: f32) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

/// Every board reachable by a single move of `player`, regardless of whose turn `board` says it is.
/// Pieces are visited in row-major order and destinations in the order they were generated.
/// Each successor has the opponent of `player` as next player.
pub fn successors<const N: usize>(board: &CheckersBoard<N>, player: Player) -> Vec<(Move, CheckersBoard<N>)> {
    let mut result = vec![];

    for piece in board.all_pieces(player) {
        // SAFETY: unwrap is safe because the piece was just read from the board.
        let moves = board.get_valid_moves(&piece).unwrap();

        for (to, captured) in moves.iter() {
            // SAFETY: unwrap is safe because the destination and captures were generated on this board.
            let child = simulate_move(board, &piece, to, captured).unwrap();
            result.push((Move::new(piece.square(), to), child));
        }
    }

    trace!(?player, count = result.len(), "generated successors");
    result
}

fn simulate_move<const N: usize>(
    board: &CheckersBoard<N>,
    piece: &Piece,
    to: Square,
    captured: &[Piece],
) -> Result<CheckersBoard<N>, CheckersError> {
    let mut child = board.clone();
    child.move_piece(piece, to.row(), to.col())?;
    if !captured.is_empty() {
        child.remove(captured)?;
    }
    child.set_next_player(piece.player().other());
    Ok(child)
}

/// Bot that plays the best move found by [search] at a fixed depth.
#[derive(Debug, Clone)]
pub struct MiniMaxBot {
    depth: u32,
}

impl MiniMaxBot {
    pub fn new(depth: u32) -> Self {
        assert!(depth > 0, "requires depth>0 to find the best move");
        MiniMaxBot { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<const N: usize> Bot<CheckersBoard<N>> for MiniMaxBot {
    fn select_move(&mut self, board: &CheckersBoard<N>) -> Result<Move, BoardDone> {
        board.check_done()?;
        let maximizing = board.next_player() == Player::B;

        // SAFETY: unwrap is safe because depth > 0 (see [`MiniMaxBot::new`]) and the board is not done,
        // so the player to move has at least one legal move.
        Ok(search(board, self.depth, maximizing).best_move.unwrap())
    }
}

impl<const N: usize> Bot<MaxMovesBoard<CheckersBoard<N>>> for MiniMaxBot {
    fn select_move(&mut self, board: &MaxMovesBoard<CheckersBoard<N>>) -> Result<Move, BoardDone> {
        board.check_done()?;
        Bot::<CheckersBoard<N>>::select_move(self, board.inner())
    }
}
