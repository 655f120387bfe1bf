mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, PieceKind, Square, SquareList};

impl Board {
    /// Shared own-piece block used by every primitive generator: the
    /// destination must be on the board, the source occupied, and the
    /// destination free of same-colored pieces.
    #[must_use]
    pub fn is_valid_primitive_move(&self, from: Square, to: Square) -> bool {
        if !to.is_on_board() {
            return false;
        }
        let Some(moving) = self.piece_at(from) else {
            return false;
        };
        match self.piece_at(to) {
            Some(target) => target.color != moving.color,
            None => true,
        }
    }

    /// Pseudo-legal destinations of the piece on `from`, ignoring whether the
    /// move exposes its own king. `home` selects the pawn direction.
    #[must_use]
    pub fn primitive_destinations(&self, from: Square, home: Color) -> SquareList {
        let Some(piece) = self.piece_at(from) else {
            return SquareList::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, home),
            PieceKind::Knight => self.knight_destinations(from),
            PieceKind::King => self.king_destinations(from),
            slider => self.slider_destinations(from, slider),
        }
    }

    fn offset_destinations(&self, from: Square, offsets: &[(i8, i8)]) -> SquareList {
        offsets
            .iter()
            .map(|&(df, dr)| from.offset(df, dr))
            .filter(|&to| self.is_valid_primitive_move(from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};

    #[test]
    fn test_validity_rejects_off_board_and_empty_source() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), Color::White, PieceKind::Rook)
            .build();
        assert!(!board.is_valid_primitive_move(Square(0, 0), Square(-1, 0)));
        assert!(!board.is_valid_primitive_move(Square(3, 3), Square(3, 4)));
        assert!(board.is_valid_primitive_move(Square(0, 0), Square(0, 5)));
    }

    #[test]
    fn test_validity_rejects_own_piece_accepts_capture() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), Color::White, PieceKind::Rook)
            .piece(Square(0, 1), Color::White, PieceKind::Pawn)
            .piece(Square(1, 0), Color::Black, PieceKind::Pawn)
            .build();
        assert!(!board.is_valid_primitive_move(Square(0, 0), Square(0, 1)));
        assert!(board.is_valid_primitive_move(Square(0, 0), Square(1, 0)));
    }

    #[test]
    fn test_empty_square_has_no_destinations() {
        let board = Board::starting(Color::White);
        assert!(board
            .primitive_destinations(Square(4, 4), Color::White)
            .is_empty());
        assert!(board
            .primitive_destinations(Square(9, 9), Color::White)
            .is_empty());
    }

    #[test]
    fn test_starting_position_primitive_counts() {
        let board = Board::starting(Color::White);
        let total: usize = board
            .pieces_of(Color::White)
            .map(|(sq, _)| board.primitive_destinations(sq, Color::White).len())
            .sum();
        assert_eq!(total, 20);
        let total: usize = board
            .pieces_of(Color::Black)
            .map(|(sq, _)| board.primitive_destinations(sq, Color::White).len())
            .sum();
        assert_eq!(total, 20);
    }
}
