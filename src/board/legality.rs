//! Legal move filtering by scratch-board simulation.

use super::{Board, Color, Square, SquareList};

impl Board {
    /// Primitive destinations of the piece on `from` that do not leave its
    /// own king attacked. Turn order is not considered.
    ///
    /// Every candidate is played on a fresh clone of the board and the attack
    /// oracle is rerun from scratch; the clone never outlives the check.
    #[must_use]
    pub fn safe_destinations(&self, from: Square, home: Color) -> SquareList {
        let Some(moving) = self.piece_at(from) else {
            return SquareList::new();
        };

        self.primitive_destinations(from, home)
            .into_iter()
            .filter(|&to| {
                let mut scratch = self.clone();
                scratch.move_piece(from, to);
                let exposed = scratch.is_under_attack(moving.color, home);
                if exposed {
                    trace_log!("rejected {}{}: leaves {} king attacked", from, to, moving.color);
                }
                !exposed
            })
            .collect()
    }

    /// Legal destinations of the piece on `from` when `to_move` is the side
    /// to move. Empty for empty or off-board squares and for pieces of the
    /// other side.
    #[must_use]
    pub fn legal_destinations(&self, from: Square, home: Color, to_move: Color) -> SquareList {
        match self.color_at(from) {
            Some(color) if color == to_move => self.safe_destinations(from, home),
            _ => SquareList::new(),
        }
    }

    /// Whether any piece of `color` has a move that keeps its king safe.
    #[must_use]
    pub fn has_safe_move(&self, color: Color, home: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.safe_destinations(from, home).is_empty())
    }
}
