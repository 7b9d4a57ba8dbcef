#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! Checkers (draughts) rules and a full-width minimax opponent.
//!
//! The core of this crate is [CheckersBoard](crate::games::checkers::CheckersBoard):
//! the board state, legal move generation including capture chains, the material evaluation and the win condition.
//! On top of that [search](crate::ai::minimax::search) explores every position up to a fixed depth
//! and returns the successor board the automated player should continue with.
//!
//! The board also implements the generic [Board](crate::board::Board) trait, which the rest of the crate builds on:
//! * Game-playing bots:
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random move.
//!     * [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         which picks the best move found by minimax at a fixed depth (no pruning).
//! * [GameSession](crate::games::checkers::session::GameSession),
//!     the turn handling of a human against the minimax opponent, without any drawing.
//! * [MaxMovesBoard](crate::games::max_length::MaxMovesBoard)
//!     wraps another board and sets the outcome to a draw after move limit has been reached.
//! * Random board generation functions, see [board_gen](crate::util::board_gen).
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//! * Simple game statistics (perft, average game length) which can be used to test board implementations.
//!
//! # Examples
//!
//! ## List the valid moves of a piece and play one.
//!
//! ```
//! use checkers::board::Player;
//! use checkers::games::checkers::CheckersBoard;
//!
//! let mut board = CheckersBoard::<8>::new();
//! println!("{}", board);
//!
//! let piece = board.get_piece(5, 2).unwrap().unwrap();
//! let moves = board.get_valid_moves(&piece).unwrap();
//! for (to, captured) in moves.iter() {
//!     println!("{} -> {} capturing {:?}", piece, to, captured);
//! }
//!
//! let to = moves.destinations().next().unwrap();
//! board.move_piece(&piece, to.row(), to.col()).unwrap();
//! assert_eq!(board.all_pieces(Player::A).len(), 12);
//! ```
//!
//! ## Let the opponent pick its next board
//!
//! ```
//! use checkers::ai::minimax::search;
//! use checkers::games::checkers::CheckersBoard;
//!
//! let board = CheckersBoard::<8>::new();
//! let result = search(&board, 2, true);
//! println!("score {} after {:?}\n{}", result.score, result.best_move, result.board);
//! ```

pub mod board;

pub mod ai;

pub mod games;

pub mod util;
