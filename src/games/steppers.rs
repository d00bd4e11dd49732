//! Steppers: the smallest real game the engine can search.
//!
//! Each White piece may step one file east, each Black piece one file
//! west, onto an empty or enemy-occupied square (capture by
//! displacement). A side with pieces but no steps passes. The game ends
//! when the board is full or a color is wiped out.
//!
//! This is a test-bed, not a production rule set: it exists so tests,
//! docs, and benches have a concrete [`Searchable`] implementation whose
//! outcomes are easy to reason about.

use crate::board::Board;
use crate::core::{Coordinate, Direction, Piece, PieceColor};
use crate::game::{generic_is_over, GameError, Searchable};
use crate::moves::{Move, MoveKind};

/// Terminal score for a won position. Dominates material while staying
/// far below the engine sentinel.
pub const WIN_SCORE: i32 = 10_000;

#[derive(Clone, Debug)]
struct UndoEntry {
    mv: Move,
    captured: Option<Piece>,
}

/// A steppers game.
#[derive(Clone, Debug)]
pub struct Steppers {
    board: Board,
    color_to_move: PieceColor,
    undo_stack: Vec<UndoEntry>,
}

impl Steppers {
    /// Create an empty game on a files×ranks board. Place pieces with
    /// [`Steppers::place`] before searching.
    #[must_use]
    pub fn new(files: i32, ranks: i32) -> Self {
        Self::with_blocked(files, ranks, &[])
    }

    /// Create an empty game with the given squares blocked.
    #[must_use]
    pub fn with_blocked(files: i32, ranks: i32, blocked: &[(i32, i32)]) -> Self {
        let mut board = Board::new(files, ranks);
        for &(file, rank) in blocked {
            board.set_blocked(file, rank);
        }
        board.build_adjacency();
        Self {
            board,
            color_to_move: PieceColor::White,
            undo_stack: Vec::new(),
        }
    }

    /// The conventional starting position: a White piece on every rank
    /// of the first file, a Black piece on every rank of the last.
    #[must_use]
    pub fn lineup(files: i32, ranks: i32) -> Self {
        assert!(files >= 2, "lineup needs at least two files");
        let mut game = Self::new(files, ranks);
        for rank in 0..ranks {
            game.place(PieceColor::White, 0, rank);
            game.place(PieceColor::Black, files - 1, rank);
        }
        game
    }

    /// Put a piece on the board. Setup only; not a move.
    pub fn place(&mut self, color: PieceColor, file: i32, rank: i32) {
        self.board
            .square_at_mut(file, rank)
            .set_piece(Piece::new(color));
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Encode the position in a FEN-like form: ranks joined by `/`,
    /// then the color to move.
    #[must_use]
    pub fn save_string(&self) -> String {
        let ranks: Vec<String> = (0..self.board.num_ranks())
            .map(|rank| self.board.rank_string(rank))
            .collect();
        format!("{} {}", ranks.join("/"), self.color_to_move.to_char())
    }

    /// Parse `pass` or `from-to` text (e.g. `a1-b1`) into one of the
    /// currently legal moves.
    pub fn parse_move(&self, text: &str) -> Result<Move, GameError> {
        let candidate = if text == "pass" {
            Move::pass(self.color_to_move)
        } else {
            let (from_text, to_text) = text.split_once('-').ok_or_else(|| {
                GameError::IllegalMove {
                    message: format!("expected `pass` or `from-to`, got `{text}`"),
                }
            })?;
            let from = Coordinate::parse_text(from_text).ok_or_else(|| {
                GameError::IllegalMove {
                    message: format!("bad square `{from_text}`"),
                }
            })?;
            let to = Coordinate::parse_text(to_text).ok_or_else(|| {
                GameError::IllegalMove {
                    message: format!("bad square `{to_text}`"),
                }
            })?;
            Move::jump(self.color_to_move, from, to)
        };

        if self.available_moves().contains(&candidate) {
            Ok(candidate)
        } else {
            Err(GameError::IllegalMove {
                message: format!("`{text}` is not legal here"),
            })
        }
    }

    const fn step_direction(color: PieceColor) -> Direction {
        match color {
            PieceColor::White => Direction::E,
            PieceColor::Black => Direction::W,
        }
    }
}

impl Searchable for Steppers {
    fn is_over(&self) -> bool {
        generic_is_over(&self.board)
    }

    fn evaluate(&self, game_over: bool) -> i32 {
        let count = self.board.piece_count();
        if game_over {
            if count.white == 0 {
                return -WIN_SCORE;
            }
            if count.black == 0 {
                return WIN_SCORE;
            }
        }
        count.white as i32 - count.black as i32
    }

    fn color_to_move(&self) -> PieceColor {
        self.color_to_move
    }

    fn available_moves(&self) -> Vec<Move> {
        let color = self.color_to_move;
        let dir = Self::step_direction(color);
        let mut moves = Vec::new();
        let mut has_piece = false;

        for rank in 0..self.board.num_ranks() {
            for file in 0..self.board.num_files() {
                let sq = self.board.square_at(file, rank);
                match sq.piece() {
                    Some(piece) if piece.color() == color => {}
                    _ => continue,
                }
                has_piece = true;

                let Some(id) = sq.neighbor(dir) else { continue };
                let dest = self.board.get(id);
                if dest.piece().is_some_and(|p| p.color() == color) {
                    continue;
                }
                moves.push(Move::jump(color, sq.coordinate(), dest.coordinate()));
            }
        }

        // Blocked in but not beaten: the side must pass explicitly.
        if moves.is_empty() && has_piece {
            moves.push(Move::pass(color));
        }
        moves
    }

    fn make_move(&mut self, mv: &Move) {
        let captured = match (mv.kind(), mv.from(), mv.to()) {
            (MoveKind::Pass, _, _) => None,
            (MoveKind::Jump, Some(from), Some(to)) => {
                let piece = self
                    .board
                    .square_at_coordinate_mut(from)
                    .pickup_piece()
                    .expect("jump from an empty square");
                let dest = self.board.square_at_coordinate_mut(to);
                let captured = dest.pickup_piece();
                dest.set_piece(piece);
                captured
            }
            (MoveKind::Drop, _, Some(to)) => {
                self.board
                    .square_at_coordinate_mut(to)
                    .set_piece(Piece::new(mv.color()));
                None
            }
            _ => panic!("malformed {:?} move", mv.kind()),
        };

        self.undo_stack.push(UndoEntry {
            mv: mv.clone(),
            captured,
        });
        self.color_to_move = self.color_to_move.opposite();
    }

    fn undo_last_move(&mut self) {
        let Some(entry) = self.undo_stack.pop() else {
            return;
        };

        match (entry.mv.kind(), entry.mv.from(), entry.mv.to()) {
            (MoveKind::Pass, _, _) => {}
            (MoveKind::Jump, Some(from), Some(to)) => {
                let dest = self.board.square_at_coordinate_mut(to);
                let piece = dest.pickup_piece().expect("undo found destination empty");
                if let Some(captured) = entry.captured {
                    dest.set_piece(captured);
                }
                self.board.square_at_coordinate_mut(from).set_piece(piece);
            }
            (MoveKind::Drop, _, Some(to)) => {
                self.board.square_at_coordinate_mut(to).pickup_piece();
            }
            _ => {}
        }

        self.color_to_move = self.color_to_move.opposite();
    }

    fn copy_game(&self) -> Result<Self, GameError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineup_counts() {
        let game = Steppers::lineup(4, 2);
        let count = game.board().piece_count();
        assert_eq!(count.white, 2);
        assert_eq!(count.black, 2);
        assert_eq!(game.color_to_move(), PieceColor::White);
        assert!(!game.is_over());
    }

    #[test]
    fn test_white_steps_east() {
        let mut game = Steppers::new(3, 1);
        game.place(PieceColor::White, 0, 0);
        game.place(PieceColor::Black, 2, 0);

        let moves = game.available_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(
            moves[0],
            Move::jump(
                PieceColor::White,
                Coordinate::new(0, 0),
                Coordinate::new(1, 0)
            )
        );
    }

    #[test]
    fn test_capture_by_displacement() {
        let mut game = Steppers::new(2, 1);
        game.place(PieceColor::White, 0, 0);
        game.place(PieceColor::Black, 1, 0);

        let mv = game.available_moves()[0].clone();
        game.make_move(&mv);

        let count = game.board().piece_count();
        assert_eq!(count.white, 1);
        assert_eq!(count.black, 0);
        assert!(game.is_over());
    }

    #[test]
    fn test_blocked_in_side_passes() {
        // White at the far east edge has nowhere to step.
        let mut game = Steppers::new(2, 1);
        game.place(PieceColor::White, 1, 0);
        game.place(PieceColor::Black, 0, 0);

        let moves = game.available_moves();
        assert_eq!(moves, vec![Move::pass(PieceColor::White)]);
    }

    #[test]
    fn test_own_piece_blocks_step() {
        let mut game = Steppers::new(3, 1);
        game.place(PieceColor::White, 0, 0);
        game.place(PieceColor::White, 1, 0);
        game.place(PieceColor::Black, 2, 0);

        let moves = game.available_moves();
        // Only the front piece can move (onto the black piece).
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from(), Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_make_then_undo_restores_position() {
        let mut game = Steppers::new(2, 1);
        game.place(PieceColor::White, 0, 0);
        game.place(PieceColor::Black, 1, 0);
        let before = game.save_string();

        let mv = game.available_moves()[0].clone();
        game.make_move(&mv);
        game.undo_last_move();

        assert_eq!(game.save_string(), before);
        assert_eq!(game.color_to_move(), PieceColor::White);
        assert_eq!(game.board().piece_count().black, 1);
    }

    #[test]
    fn test_save_string() {
        let mut game = Steppers::with_blocked(3, 2, &[(1, 1)]);
        game.place(PieceColor::White, 0, 0);
        game.place(PieceColor::Black, 2, 1);

        assert_eq!(game.save_string(), "w2/1Xb w");
    }

    #[test]
    fn test_parse_move_round_trip() {
        let game = Steppers::lineup(3, 1);
        let mv = game.parse_move("a1-b1").unwrap();
        assert_eq!(
            mv,
            Move::jump(
                PieceColor::White,
                Coordinate::new(0, 0),
                Coordinate::new(1, 0)
            )
        );
    }

    #[test]
    fn test_parse_move_rejects_illegal() {
        let game = Steppers::lineup(3, 1);
        assert!(game.parse_move("c1-b1").is_err());
        assert!(game.parse_move("nonsense").is_err());
        assert!(game.parse_move("pass").is_err());
    }

    #[test]
    fn test_copy_game_is_independent() {
        let mut game = Steppers::lineup(3, 1);
        let copy = game.copy_game().unwrap();

        let mv = game.available_moves()[0].clone();
        game.make_move(&mv);

        assert_eq!(copy.color_to_move(), PieceColor::White);
        assert_ne!(game.save_string(), copy.save_string());
    }
}
