//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 0), Color::White, PieceKind::King)
//!     .piece(Square(4, 7), Color::Black, PieceKind::King)
//!     .piece(Square(0, 1), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position with
    /// `home` on the low ranks.
    #[must_use]
    pub fn starting_position(home: Color) -> Self {
        BoardBuilder {
            board: Board::starting(home),
        }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(square, Piece::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_replaces_existing_piece() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, PieceKind::Rook)
            .piece(Square(3, 3), Color::Black, PieceKind::Knight)
            .build();
        assert_eq!(
            board.piece_at(Square(3, 3)),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_builder_clear_from_start() {
        let board = BoardBuilder::starting_position(Color::White)
            .clear(Square(4, 1))
            .build();
        assert!(board.is_empty(Square(4, 1)));
        assert_eq!(board.piece_count(), 31);
    }
}
