use super::super::{Board, Square, SquareList};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Board {
    /// The eight neighbours, minus own pieces and the board edge. No castling.
    #[must_use]
    pub fn king_destinations(&self, from: Square) -> SquareList {
        self.offset_destinations(from, &KING_OFFSETS)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{BoardBuilder, Color, PieceKind, Square};

    #[test]
    fn test_king_moves() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::Black, PieceKind::King)
            .piece(Square(0, 0), Color::White, PieceKind::King)
            .build();
        assert_eq!(board.king_destinations(Square(4, 4)).len(), 8);
        assert_eq!(
            board.king_destinations(Square(0, 0)).as_slice(),
            &[Square(0, 1), Square(1, 1), Square(1, 0)]
        );
    }

    #[test]
    fn test_king_never_castles() {
        let mut board = crate::board::Board::starting(Color::White);
        board.clear(Square(5, 0));
        board.clear(Square(6, 0));
        let dests = board.king_destinations(Square(4, 0));
        assert_eq!(dests.as_slice(), &[Square(5, 0)]);
    }
}
