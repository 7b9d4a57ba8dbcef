use checkers::board::{Board, Outcome, PlayError, Player};
use checkers::games::checkers::{CheckersBoard, CheckersError, Move, Piece, Square};
use checkers::util::board_gen::{board_with_moves, random_board_with_condition};
use checkers::util::game_stats::{perft, perft_naive};
use checkers::util::tiny::consistent_rng;

use crate::board::board_test_main;
use crate::board::checkers_moves::all_checkers_moves;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn assert_counts_match(board: &CheckersBoard) {
    board.assert_valid();

    for player in Player::BOTH {
        let mut scanned = 0;
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = board.get_piece(row, col).unwrap() {
                    assert_eq!((piece.row(), piece.col()), (row, col));
                    if piece.player() == player {
                        scanned += 1;
                    }
                }
            }
        }
        assert_eq!(scanned, board.remaining(player), "count mismatch on\n{}", board);
    }
}

#[test]
fn start_position() {
    let board = CheckersBoard::<8>::new();

    assert_eq!(board.remaining(Player::A), 12);
    assert_eq!(board.remaining(Player::B), 12);
    assert_eq!(board.kings(Player::A), 0);
    assert_eq!(board.kings(Player::B), 0);
    assert_eq!(board.evaluate(), 0.0);
    assert_eq!(board.winner(), None);
    assert_eq!(board.next_player(), Player::A);
    assert_counts_match(&board);

    let a = board.all_pieces(Player::A);
    assert_eq!(a.first().map(|p| p.square()), Some(sq(5, 0)));
    assert_eq!(a.last().map(|p| p.square()), Some(sq(7, 6)));
    assert!(a.windows(2).all(|w| w[0].square() < w[1].square()));
}

#[test]
fn out_of_bounds() {
    let mut board = CheckersBoard::<8>::new();
    assert_eq!(
        board.get_piece(8, 0),
        Err(CheckersError::OutOfBounds { row: 8, col: 0, size: 8 })
    );
    assert!(board.get_piece(0, 8).is_err());

    let piece = board.get_piece(5, 0).unwrap().unwrap();
    assert_eq!(
        board.move_piece(&piece, 4, 9),
        Err(CheckersError::OutOfBounds { row: 4, col: 9, size: 8 })
    );
}

#[test]
fn move_onto_occupied() {
    let mut board = CheckersBoard::<8>::new();
    let piece = board.get_piece(6, 1).unwrap().unwrap();

    let result = board.move_piece(&piece, 5, 0);
    assert!(matches!(result, Err(CheckersError::InvalidMove { .. })), "{:?}", result);
    assert_eq!(board, CheckersBoard::new());
}

#[test]
fn move_with_stale_handle() {
    let mut board = CheckersBoard::<8>::new();
    let piece = board.get_piece(5, 0).unwrap().unwrap();
    let moved = board.move_piece(&piece, 4, 1).unwrap();
    assert_eq!(moved.square(), sq(4, 1));

    assert_eq!(board.move_piece(&piece, 4, 1), Err(CheckersError::NotOnBoard(piece)));
    assert_eq!(board.get_piece(5, 0).unwrap(), None);
    assert_eq!(board.get_piece(4, 1).unwrap(), Some(moved));
    assert_counts_match(&board);
}

#[test]
fn promotion() {
    let mut board = CheckersBoard::<8>::empty(Player::A);
    board.place(Piece::new(1, 2, Player::A)).unwrap();
    board.place(Piece::new(6, 1, Player::B)).unwrap();

    let king = board.move_piece(&Piece::new(1, 2, Player::A), 0, 1).unwrap();
    assert!(king.is_king());
    assert_eq!(board.kings(Player::A), 1);
    assert_eq!(board.evaluate(), -0.5);

    // already a king, so moving back onto a back rank changes nothing
    let king = board.move_piece(&king, 1, 0).unwrap();
    let king = board.move_piece(&king, 0, 1).unwrap();
    assert!(king.is_king());
    assert_eq!(board.kings(Player::A), 1);

    let b_king = board.move_piece(&Piece::new(6, 1, Player::B), 7, 2).unwrap();
    assert!(b_king.is_king());
    assert_eq!(board.kings(Player::B), 1);
    assert_eq!(board.evaluate(), 0.0);
    assert_counts_match(&board);
}

#[test]
fn promotion_on_either_back_rank() {
    let mut board = CheckersBoard::<8>::empty(Player::A);
    board.place(Piece::new(6, 1, Player::A)).unwrap();

    let piece = board.move_piece(&Piece::new(6, 1, Player::A), 7, 0).unwrap();
    assert!(piece.is_king());
    assert_eq!(board.kings(Player::A), 1);
}

#[test]
fn remove_counts_every_piece() {
    let mut board = CheckersBoard::<8>::new();
    let first = board.get_piece(5, 0).unwrap().unwrap();
    let second = board.get_piece(6, 3).unwrap().unwrap();

    board.remove(&[first, second]).unwrap();
    assert_eq!(board.remaining(Player::A), 10);
    assert_eq!(board.remaining(Player::B), 12);
    assert_eq!(board.get_piece(5, 0).unwrap(), None);
    assert_eq!(board.evaluate(), 2.0);
    assert_counts_match(&board);
}

#[test]
fn remove_is_all_or_nothing() {
    let mut board = CheckersBoard::<8>::new();
    let present = board.get_piece(2, 1).unwrap().unwrap();
    let missing = Piece::new(3, 0, Player::B);

    assert_eq!(board.remove(&[present, missing]), Err(CheckersError::NotOnBoard(missing)));
    assert_eq!(board, CheckersBoard::new());
}

#[test]
fn counts_stay_consistent_in_random_games() {
    let mut rng = consistent_rng();

    for _ in 0..20 {
        let mut board = CheckersBoard::<8>::new();
        let mut kings = [0; 2];

        for _ in 0..200 {
            if board.play_random_available_move(&mut rng).is_err() {
                break;
            }
            assert_counts_match(&board);

            // king counters never go down
            for player in Player::BOTH {
                let index = player.index() as usize;
                assert!(board.kings(player) >= kings[index]);
                kings[index] = board.kings(player);
            }
        }
    }
}

#[test]
fn apply_move() {
    let mut board = CheckersBoard::<8>::new();

    let wrong_player = board.apply_move(Move::new(sq(2, 1), sq(3, 0)));
    assert!(matches!(wrong_player, Err(CheckersError::InvalidMove { .. })));
    let unreachable = board.apply_move(Move::new(sq(5, 2), sq(3, 4)));
    assert!(matches!(unreachable, Err(CheckersError::InvalidMove { .. })));
    let empty = board.apply_move(Move::new(sq(4, 1), sq(3, 2)));
    assert!(matches!(empty, Err(CheckersError::InvalidMove { .. })));
    assert_eq!(board, CheckersBoard::new());

    assert_eq!(board.apply_move(Move::new(sq(5, 2), sq(4, 3))), Ok(vec![]));
    assert_eq!(board.next_player(), Player::B);
    assert_eq!(board.get_piece(4, 3).unwrap().map(|p| p.player()), Some(Player::A));
}

#[test]
fn apply_capture_chain() {
    let layout = "......../......../.....b../......../...b..../..a...../......../........ a";
    let mut board = CheckersBoard::<8>::from_layout(layout).unwrap();
    let first = board.get_piece(4, 3).unwrap().unwrap();
    let second = board.get_piece(2, 5).unwrap().unwrap();

    let captured = board.apply_move(Move::new(sq(5, 2), sq(1, 6))).unwrap();
    assert_eq!(captured, vec![first, second]);
    assert_eq!(board.remaining(Player::B), 0);
    assert_eq!(board.evaluate(), -1.0);
    assert_eq!(board.winner(), Some(Player::A));
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
    assert_counts_match(&board);
}

#[test]
fn scripted_exchange() {
    let board = board_with_moves(
        CheckersBoard::<8>::new(),
        &[
            Move::new(sq(5, 2), sq(4, 3)),
            Move::new(sq(2, 5), sq(3, 4)),
            Move::new(sq(4, 3), sq(2, 5)),
        ],
    );

    assert_eq!(board.remaining(Player::B), 11);
    assert_eq!(board.evaluate(), -1.0);
    assert_eq!(board.next_player(), Player::B);

    // both neighbours can take back
    let recapture = board.get_valid_moves(&board.get_piece(1, 4).unwrap().unwrap()).unwrap();
    assert_eq!(recapture.get(sq(3, 6)).map(|c| c.len()), Some(1));
    let recapture = board.get_valid_moves(&board.get_piece(1, 6).unwrap().unwrap()).unwrap();
    assert_eq!(recapture.get(sq(3, 4)).map(|c| c.len()), Some(1));
    board_test_main(&board, &all_checkers_moves::<8>());
}

#[test]
fn kings_from_random_play() {
    let mut rng = consistent_rng();

    for _ in 0..5 {
        let board = random_board_with_condition(&CheckersBoard::<8>::new(), &mut rng, |board| {
            board.kings(Player::A) + board.kings(Player::B) > 0
        });

        let live_kings = Player::BOTH
            .iter()
            .flat_map(|&player| board.all_pieces(player))
            .filter(|piece| piece.is_king())
            .count();
        assert_eq!(live_kings, board.kings(Player::A) + board.kings(Player::B), "on\n{}", board);
        assert_counts_match(&board);
        board_test_main(&board, &all_checkers_moves::<8>());
    }
}

#[test]
fn play_rejects_unavailable() {
    let mut board = CheckersBoard::<8>::new();
    assert_eq!(
        board.play(Move::new(sq(5, 2), sq(3, 4))),
        Err(PlayError::UnavailableMove)
    );
    assert_eq!(board.play(Move::new(sq(5, 2), sq(4, 1))), Ok(()));
    assert_eq!(board.next_player(), Player::B);
}

#[test]
fn winner_without_pieces() {
    let board = CheckersBoard::<8>::from_layout(
        ".b....../......../......../......../......../......../......../........ a",
    )
    .unwrap();

    assert_eq!(board.remaining(Player::A), 0);
    assert_eq!(board.winner(), Some(Player::B));
    board_test_main(&board, &all_checkers_moves::<8>());
}

#[test]
fn winner_by_stalemate() {
    let board = CheckersBoard::<8>::from_layout(
        ".b....../a.a...../...a..../......../......../......../......../........ b",
    )
    .unwrap();

    assert_eq!(board.remaining(Player::B), 1);
    assert_eq!(board.get_valid_player_moves(Player::B), 0);
    assert!(board.get_valid_player_moves(Player::A) > 0);
    assert_eq!(board.winner(), Some(Player::A));
    board_test_main(&board, &all_checkers_moves::<8>());
}

#[test]
fn perft_start() {
    let board = CheckersBoard::<8>::new();
    let expected = [1, 7, 49];

    for (depth, &count) in expected.iter().enumerate() {
        assert_eq!(perft(&board, depth as u32), count, "depth {}", depth);
    }
    assert_eq!(perft(&board, 4), perft_naive(&board, 4));
}

#[test]
fn large_board_counts() {
    let mut board = CheckersBoard::<24>::empty(Player::A);
    for row in 0..24 {
        for col in 0..24 {
            if Square::new(row, col).is_dark() {
                board.place(Piece::new(row, col, Player::A)).unwrap();
            }
        }
    }

    assert_eq!(board.remaining(Player::A), 288);
    assert_eq!(board.all_pieces(Player::A).len(), 288);
    assert_eq!(board.evaluate(), -288.0);

    let first = board.get_piece(0, 1).unwrap().unwrap();
    let last = board.get_piece(23, 22).unwrap().unwrap();
    board.remove(&[first, last]).unwrap();
    assert_eq!(board.remaining(Player::A), 286);
    board.assert_valid();

    let start = CheckersBoard::<24>::new();
    assert_eq!(start.remaining(Player::A), 36);
    assert_eq!(start.remaining(Player::B), 36);
    start.assert_valid();
}
