//! Check detection.

use super::{Board, Color, PieceKind};

impl Board {
    /// Whether the king of `color` stands on a square reachable by any piece
    /// of the opposite color.
    ///
    /// Attacked squares are exactly the primitive destinations, so a pawn also
    /// "attacks" the empty square in front of it. Nothing is cached; every
    /// call rescans the board.
    #[must_use]
    pub fn is_under_attack(&self, color: Color, home: Color) -> bool {
        self.pieces_of(color.opponent()).any(|(from, _)| {
            self.primitive_destinations(from, home).iter().any(|&to| {
                matches!(
                    self.piece_at(to),
                    Some(piece) if piece.kind == PieceKind::King && piece.color == color
                )
            })
        })
    }
}
