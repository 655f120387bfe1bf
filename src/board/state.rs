use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, BOARD_LEN};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of pieces indexed by (file, rank).
///
/// `Board` is plain data: cloning it produces an independent scratch copy,
/// which is how hypothetical moves are evaluated.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement. The home color occupies ranks 0 and 1,
    /// the opponent ranks 6 and 7.
    #[must_use]
    pub fn starting(home: Color) -> Self {
        let mut board = Board::empty();
        let away = home.opponent();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            board.set_piece(Square(file, 0), Piece::new(home, *kind));
            board.set_piece(Square(file, 1), Piece::new(home, PieceKind::Pawn));
            board.set_piece(Square(file, 6), Piece::new(away, PieceKind::Pawn));
            board.set_piece(Square(file, 7), Piece::new(away, *kind));
        }
        board
    }

    /// Contents of a square; off-board squares read as empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let (file, rank) = sq.indices()?;
        self.squares[file][rank]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Place a piece, returning whatever occupied the square. Off-board
    /// squares are ignored.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        let (file, rank) = sq.indices()?;
        self.squares[file][rank].replace(piece)
    }

    /// Empty a square, returning its previous contents.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        let (file, rank) = sq.indices()?;
        self.squares[file][rank].take()
    }

    /// Copy the contents of `from` onto `to`, clearing `from` unless the two
    /// squares coincide. Returns the piece previously on `to`.
    ///
    /// No rule checking happens here; both squares must be on the board.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let (Some((ff, fr)), Some((tf, tr))) = (from.indices(), to.indices()) else {
            debug_assert!(false, "move_piece called with off-board square");
            return None;
        };
        let moving = self.squares[ff][fr];
        let captured = std::mem::replace(&mut self.squares[tf][tr], moving);
        if from != to {
            self.squares[ff][fr] = None;
        }
        captured
    }

    /// Occupied squares with their pieces, file-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Diagram with rank 7 on top, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_LEN).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_LEN {
                let c = self.piece_at(Square(file, rank)).map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
