//! The board: a rank-major arena of squares with one-shot adjacency.
//!
//! Adjacency caches are computed exactly once, after the initial layout's
//! blocked squares are known. Blocking is frozen from that point on, so
//! cached neighbor lists never go stale.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coordinate, Direction, Piece, PieceColor, PieceCount};

use super::square::{Square, SquareId};

/// One-away offsets as (file delta, rank delta), orthogonal group first.
const ONE_AWAY_ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const ONE_AWAY_DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// Two-away offsets. The three families are disjoint, so the combined
/// list can never contain duplicates.
const TWO_AWAY_ORTHOGONAL: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];
const TWO_AWAY_DIAGONAL: [(i32, i32); 4] = [(-2, -2), (2, 2), (-2, 2), (2, -2)];
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

/// A rectangular board of squares.
///
/// Squares live in a flat rank-major vector and reference their neighbors
/// by [`SquareId`] index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
    num_files: i32,
    num_ranks: i32,
    num_blocked: u32,
    adjacency_built: bool,
}

impl Board {
    /// Create a board with the given number of files (width) and ranks
    /// (height). All squares start open and empty; adjacency caches are
    /// not built yet.
    #[must_use]
    pub fn new(files: i32, ranks: i32) -> Self {
        assert!(files > 0 && ranks > 0, "Board must have positive dimensions");

        let mut squares = Vec::with_capacity((files * ranks) as usize);
        for rank in 0..ranks {
            for file in 0..files {
                squares.push(Square::new(file, rank));
            }
        }

        Self {
            squares,
            num_files: files,
            num_ranks: ranks,
            num_blocked: 0,
            adjacency_built: false,
        }
    }

    /// Create a square board of the given side length.
    #[must_use]
    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    #[inline]
    fn idx(&self, file: i32, rank: i32) -> usize {
        (rank * self.num_files + file) as usize
    }

    /// The ID of the square at the given file and rank.
    #[inline]
    #[must_use]
    pub fn id_at(&self, file: i32, rank: i32) -> SquareId {
        SquareId::new((rank * self.num_files + file) as u32)
    }

    /// Get a square by arena ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: SquareId) -> &Square {
        &self.squares[id.index()]
    }

    /// Get a square by arena ID, mutably.
    #[inline]
    pub fn get_mut(&mut self, id: SquareId) -> &mut Square {
        &mut self.squares[id.index()]
    }

    /// Get the square at the given file and rank.
    #[inline]
    #[must_use]
    pub fn square_at(&self, file: i32, rank: i32) -> &Square {
        &self.squares[self.idx(file, rank)]
    }

    /// Get the square at the given file and rank, mutably.
    pub fn square_at_mut(&mut self, file: i32, rank: i32) -> &mut Square {
        let idx = self.idx(file, rank);
        &mut self.squares[idx]
    }

    /// Get the square at a coordinate.
    #[must_use]
    pub fn square_at_coordinate(&self, c: Coordinate) -> &Square {
        self.square_at(c.x(), c.y())
    }

    /// Get the square at a coordinate, mutably.
    pub fn square_at_coordinate_mut(&mut self, c: Coordinate) -> &mut Square {
        self.square_at_mut(c.x(), c.y())
    }

    /// Number of files (width).
    #[must_use]
    pub const fn num_files(&self) -> i32 {
        self.num_files
    }

    /// Number of ranks (height).
    #[must_use]
    pub const fn num_ranks(&self) -> i32 {
        self.num_ranks
    }

    /// Number of squares not allowed to hold a piece.
    #[must_use]
    pub const fn num_blocked_squares(&self) -> u32 {
        self.num_blocked
    }

    /// Number of squares a piece may occupy.
    #[must_use]
    pub const fn num_playable_squares(&self) -> u32 {
        (self.num_files * self.num_ranks) as u32 - self.num_blocked
    }

    /// Whether the adjacency caches have been built.
    #[must_use]
    pub const fn adjacency_built(&self) -> bool {
        self.adjacency_built
    }

    /// True if the file and rank are on the board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(&self, file: i32, rank: i32) -> bool {
        file >= 0 && file < self.num_files && rank >= 0 && rank < self.num_ranks
    }

    /// True if the square is on the board and not blocked.
    #[inline]
    #[must_use]
    pub fn is_playable(&self, file: i32, rank: i32) -> bool {
        self.is_on_board(file, rank) && !self.squares[self.idx(file, rank)].is_blocked()
    }

    /// Mark a square as blocked.
    ///
    /// Idempotent: the blocked counter moves only on the Open -> Blocked
    /// transition. Must be called before [`Board::build_adjacency`];
    /// blocking is frozen once the caches exist.
    pub fn set_blocked(&mut self, file: i32, rank: i32) {
        assert!(
            !self.adjacency_built,
            "blocking is frozen once adjacency caches are built"
        );
        let idx = self.idx(file, rank);
        if !self.squares[idx].is_blocked() {
            self.squares[idx].set_blocked();
            self.num_blocked += 1;
        }
    }

    fn playable_id(&self, file: i32, rank: i32) -> Option<SquareId> {
        if self.is_playable(file, rank) {
            Some(self.id_at(file, rank))
        } else {
            None
        }
    }

    /// Compute every square's one-away ring, two-away ring, and
    /// per-direction neighbor. Called exactly once, after all blocked
    /// squares of the initial layout are marked.
    pub fn build_adjacency(&mut self) {
        assert!(!self.adjacency_built, "adjacency caches are built once");

        for i in 0..self.squares.len() {
            let (file, rank) = {
                let sq = &self.squares[i];
                (sq.file(), sq.rank())
            };

            let mut one: SmallVec<[SquareId; 8]> = SmallVec::new();
            for (df, dr) in ONE_AWAY_ORTHOGONAL.iter().chain(&ONE_AWAY_DIAGONAL) {
                if let Some(id) = self.playable_id(file + df, rank + dr) {
                    one.push(id);
                }
            }

            let mut two: SmallVec<[SquareId; 16]> = SmallVec::new();
            for (df, dr) in TWO_AWAY_ORTHOGONAL
                .iter()
                .chain(&TWO_AWAY_DIAGONAL)
                .chain(&KNIGHT_JUMPS)
            {
                if let Some(id) = self.playable_id(file + df, rank + dr) {
                    two.push(id);
                }
            }

            let mut by_direction: [Option<(Direction, SquareId)>; 8] = [None; 8];
            for dir in Direction::ALL {
                if let Some(id) = self.playable_id(file + dir.run(), rank + dir.rise()) {
                    by_direction[dir.index()] = Some((dir, id));
                }
            }

            let sq = &mut self.squares[i];
            sq.set_one_away(one);
            sq.set_two_away(two);
            for entry in by_direction.into_iter().flatten() {
                sq.set_neighbor(entry.0, entry.1);
            }
        }

        self.adjacency_built = true;
    }

    /// Copy piece occupancy from a same-shaped board.
    ///
    /// Only non-empty squares are copied; blocked state and adjacency are
    /// structural and assumed to already match.
    pub fn copy_pieces_from(&mut self, other: &Board) {
        assert!(
            self.num_files == other.num_files && self.num_ranks == other.num_ranks,
            "piece copy requires same-shaped boards"
        );
        for (dst, src) in self.squares.iter_mut().zip(&other.squares) {
            if let Some(piece) = src.piece() {
                dst.set_piece(piece);
            }
        }
    }

    /// Tally the pieces on the board by color. Full grid scan.
    #[must_use]
    pub fn piece_count(&self) -> PieceCount {
        let mut black = 0;
        let mut white = 0;
        for sq in &self.squares {
            match sq.piece().map(Piece::color) {
                Some(PieceColor::Black) => black += 1,
                Some(PieceColor::White) => white += 1,
                None => {}
            }
        }
        PieceCount::new(black, white)
    }

    /// Encode one rank in a FEN-like form: run-length for empty squares,
    /// `X` for blocked, the color's ascii character for pieces.
    #[must_use]
    pub fn rank_string(&self, rank: i32) -> String {
        let mut out = String::new();
        let mut empty_count = 0;

        for file in 0..self.num_files {
            let sq = self.square_at(file, rank);
            if sq.is_empty() {
                empty_count += 1;
                continue;
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
                empty_count = 0;
            }
            if sq.is_blocked() {
                out.push('X');
            } else if let Some(piece) = sq.piece() {
                out.push(piece.color().to_char());
            }
        }
        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for file in 0..self.num_files {
            write!(f, "{}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for rank in 0..self.num_ranks {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..self.num_files {
                let sq = self.square_at(file, rank);
                if sq.is_blocked() {
                    write!(f, "X")?;
                } else {
                    match sq.piece() {
                        Some(piece) => write!(f, "{}", piece)?,
                        None => write!(f, ".")?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
