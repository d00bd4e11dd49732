//! Steppers game integration tests: the make/undo contract end to end.

use proptest::prelude::*;

use gridgame::core::{Coordinate, PieceColor};
use gridgame::games::steppers::{Steppers, WIN_SCORE};
use gridgame::moves::MoveKind;
use gridgame::search::NegaMax;
use gridgame::Searchable;

// =============================================================================
// Make/undo inverse law
// =============================================================================

proptest! {
    #[test]
    fn prop_make_undo_round_trips(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..16)
    ) {
        let mut game = Steppers::lineup(5, 2);
        let mut snapshots = vec![game.save_string()];
        let mut applied = 0usize;

        for pick in picks {
            if game.is_over() {
                break;
            }
            let moves = game.available_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[pick.index(moves.len())].clone();
            game.make_move(&mv);
            applied += 1;
            snapshots.push(game.save_string());
        }

        // Unwind everything; every intermediate position must reappear
        // exactly, color to move included.
        while applied > 0 {
            game.undo_last_move();
            applied -= 1;
            snapshots.pop();
            prop_assert_eq!(&game.save_string(), snapshots.last().unwrap());
        }
        prop_assert_eq!(game.color_to_move(), PieceColor::White);
    }

    #[test]
    fn prop_piece_counts_survive_round_trip(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..12)
    ) {
        let mut game = Steppers::lineup(4, 3);
        let before = game.board().piece_count();

        let mut applied = 0usize;
        for pick in picks {
            if game.is_over() {
                break;
            }
            let moves = game.available_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[pick.index(moves.len())].clone();
            game.make_move(&mv);
            applied += 1;
        }
        for _ in 0..applied {
            game.undo_last_move();
        }

        prop_assert_eq!(game.board().piece_count(), before);
    }
}

#[test]
fn test_undo_restores_captured_piece() {
    let mut game = Steppers::new(2, 1);
    game.place(PieceColor::White, 0, 0);
    game.place(PieceColor::Black, 1, 0);

    let capture = game.available_moves()[0].clone();
    game.make_move(&capture);
    assert_eq!(game.board().piece_count().black, 0);

    game.undo_last_move();
    let count = game.board().piece_count();
    assert_eq!(count.black, 1);
    assert_eq!(count.white, 1);
    assert_eq!(
        game.board()
            .square_at(1, 0)
            .piece()
            .map(|piece| piece.color()),
        Some(PieceColor::Black)
    );
}

// =============================================================================
// Terminal conditions
// =============================================================================

#[test]
fn test_capture_all_ends_game() {
    let mut game = Steppers::new(2, 1);
    game.place(PieceColor::White, 0, 0);
    game.place(PieceColor::Black, 1, 0);
    assert!(!game.is_over());

    let capture = game.available_moves()[0].clone();
    game.make_move(&capture);
    assert!(game.is_over());
    assert_eq!(game.evaluate(true), WIN_SCORE);
}

#[test]
fn test_full_board_is_terminal() {
    let mut game = Steppers::new(2, 1);
    game.place(PieceColor::White, 0, 0);
    game.place(PieceColor::White, 1, 0);
    // Both playable squares occupied
    assert!(game.is_over());
}

// =============================================================================
// Search integration
// =============================================================================

#[test]
fn test_engine_prefers_capture_over_quiet_step() {
    // Two White pieces: one can capture and win, one just walks.
    let mut game = Steppers::new(3, 2);
    game.place(PieceColor::White, 0, 0);
    game.place(PieceColor::White, 1, 1);
    game.place(PieceColor::Black, 2, 1);

    let mut engine = NegaMax::new(&game).unwrap();
    let best = engine.think(1).unwrap();

    assert_eq!(best.mv.from(), Some(Coordinate::new(1, 1)));
    assert_eq!(best.mv.to(), Some(Coordinate::new(2, 1)));
    assert_eq!(best.score, WIN_SCORE);
}

#[test]
fn test_engine_returns_pass_when_blocked_in() {
    // White's lone piece sits on the east edge with nowhere to go; the
    // only legal move is an explicit pass.
    let mut game = Steppers::new(3, 1);
    game.place(PieceColor::White, 2, 0);
    game.place(PieceColor::Black, 0, 0);

    let mut engine = NegaMax::new(&game).unwrap();
    let best = engine.think(3).unwrap();
    assert_eq!(best.mv.kind(), MoveKind::Pass);
}

#[test]
fn test_deeper_search_sees_the_trade_coming() {
    // White at 1, Black at 3 on a strip: stepping to file 2 lets Black
    // capture and win. Depth 1 cannot see it; depth 2 must score the
    // forced loss.
    let mut game = Steppers::new(4, 1);
    game.place(PieceColor::White, 1, 0);
    game.place(PieceColor::Black, 3, 0);

    let mut shallow = NegaMax::new(&game).unwrap();
    let at_depth_1 = shallow.think(1).unwrap();
    assert_eq!(at_depth_1.score, 0);

    let mut deep = NegaMax::new(&game).unwrap();
    let at_depth_2 = deep.think(2).unwrap();
    assert_eq!(at_depth_2.score, -WIN_SCORE);
}
