use super::super::{Board, Color, Square, SquareList};

impl Board {
    /// Pawn destinations. Pawns of the `home` color advance toward higher
    /// ranks and start on rank 1; the other color advances toward lower ranks
    /// and starts on rank 6. No en passant and no promotion: a pawn on the
    /// last rank simply has no forward move.
    #[must_use]
    pub fn pawn_destinations(&self, from: Square, home: Color) -> SquareList {
        let mut destinations = SquareList::new();
        let Some(pawn) = self.piece_at(from) else {
            return destinations;
        };
        let (dir, start_rank) = if pawn.color == home { (1, 1) } else { (-1, 6) };

        let one = from.offset(0, dir);
        if self.is_valid_primitive_move(from, one) && self.is_empty(one) {
            destinations.push(one);

            if from.rank() == start_rank {
                let two = from.offset(0, 2 * dir);
                if self.is_valid_primitive_move(from, two) && self.is_empty(two) {
                    destinations.push(two);
                }
            }
        }

        for df in [-1, 1] {
            let target = from.offset(df, dir);
            if self.is_valid_primitive_move(from, target) && !self.is_empty(target) {
                destinations.push(target);
            }
        }

        destinations
    }
}
