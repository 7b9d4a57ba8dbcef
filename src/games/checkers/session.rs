//! Turn handling for an interactive game between a human ([Player::A]) and the minimax opponent ([Player::B]).
//!
//! The presentation layer forwards clicked squares to [GameSession::select], reads the board, selection and
//! valid moves to draw them, and calls [GameSession::ai_move] whenever it is the opponent's turn.
use tracing::{debug, info};

use crate::ai::minimax::search;
use crate::board::{Board, Player};
use crate::games::checkers::{CheckersBoard, CheckersError, Move, MoveMap, Piece, Square};

/// The default search depth of the opponent.
pub const DEFAULT_AI_DEPTH: u32 = 4;

/// What a call to [GameSession::select] did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Selection {
    /// The selected piece moved to the clicked square and the turn passed.
    Moved,
    /// A piece of the player to move is now selected.
    Selected,
    /// Nothing is selected anymore.
    Cleared,
}

#[derive(Debug, Clone)]
pub struct GameSession<const N: usize = 8> {
    board: CheckersBoard<N>,
    selected: Option<Piece>,
    valid_moves: MoveMap,
    ai_depth: u32,
}

impl<const N: usize> Default for GameSession<N> {
    fn default() -> Self {
        Self::new(DEFAULT_AI_DEPTH)
    }
}

impl<const N: usize> GameSession<N> {
    pub fn new(ai_depth: u32) -> Self {
        Self::from_board(CheckersBoard::new(), ai_depth)
    }

    pub fn from_board(board: CheckersBoard<N>, ai_depth: u32) -> Self {
        GameSession {
            board,
            selected: None,
            valid_moves: MoveMap::default(),
            ai_depth,
        }
    }

    pub fn board(&self) -> &CheckersBoard<N> {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.board.next_player()
    }

    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    pub fn valid_moves(&self) -> &MoveMap {
        &self.valid_moves
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Handle a click on `(row, col)`.
    pub fn select(&mut self, row: usize, col: usize) -> Result<Selection, CheckersError> {
        let clicked = self.board.get_piece(row, col)?;

        if let Some(selected) = self.selected {
            let to = Square::new(row as u8, col as u8);
            if clicked.is_none() && self.valid_moves.contains(to) {
                let captured = self.board.apply_move(Move::new(selected.square(), to))?;
                debug!("{:?} moved {} to {}, capturing {}", selected.player(), selected, to, captured.len());
                self.clear_selection();
                self.log_winner();
                return Ok(Selection::Moved);
            }
        }

        self.clear_selection();
        match clicked {
            Some(piece) if piece.player() == self.turn() => {
                self.valid_moves = self.board.get_valid_moves(&piece)?;
                self.selected = Some(piece);
                Ok(Selection::Selected)
            }
            _ => Ok(Selection::Cleared),
        }
    }

    /// Let the opponent play if it is its turn and the game is not over.
    /// Returns whether a move was played.
    pub fn ai_move(&mut self) -> bool {
        if self.turn() != Player::B || self.winner().is_some() {
            return false;
        }

        let result = search(&self.board, self.ai_depth, true);
        match result.best_move {
            Some(mv) => {
                debug!("opponent plays {} with score {}", mv, result.score);
                self.board = result.board;
                self.clear_selection();
                self.log_winner();
                true
            }
            None => false,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves = MoveMap::default();
    }

    fn log_winner(&self) {
        if let Some(winner) = self.winner() {
            info!("game over, {:?} won", winner);
        }
    }
}
