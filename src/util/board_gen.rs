//! Build boards for tests and benchmarks, either from a known move list or from random playouts.
use rand::Rng;

use crate::board::{Board, BoardDone};

/// Play `moves` in order starting from `start`, panicking as soon as one of them is not available.
pub fn board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> B {
    moves.iter().fold(start, |mut board, &mv| {
        assert_eq!(
            board.is_available_move(mv),
            Ok(true),
            "cannot play {} on\n{}",
            mv,
            board
        );
        // SAFETY: unwrap is safe because the move was just checked to be available.
        board.play(mv).unwrap();
        board
    })
}

/// Play `n` random moves on `start`. Playouts that end before `n` moves are thrown away and retried.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    loop {
        let mut board = start.clone();
        let finished = (0..n).all(|_| board.play_random_available_move(rng) != Err(BoardDone));
        if finished {
            return board;
        }
    }
}

/// Play random moves on `start` until `cond` holds, restarting whenever a playout ends first.
/// This does not terminate if no random playout from `start` ever reaches `cond`.
pub fn random_board_with_condition<B: Board>(start: &B, rng: &mut impl Rng, mut cond: impl FnMut(&B) -> bool) -> B {
    if cond(start) {
        return start.clone();
    }
    assert!(!start.is_done(), "start board is done and does not match the condition");

    loop {
        let mut board = start.clone();
        while board.play_random_available_move(rng).is_ok() {
            if cond(&board) {
                return board;
            }
        }
    }
}
