use super::super::{
    Board, Direction, PieceKind, Square, SquareList, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS,
};

/// Ray set of a sliding kind, empty for the others.
pub(crate) fn slider_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

impl Board {
    /// Squares reachable from `from` by sliding along each direction in turn.
    ///
    /// Each walk collects empty squares until it leaves the board or meets a
    /// piece; an enemy piece is included as a capture, a friendly one is not.
    /// An empty `from` yields nothing. Repeated directions are walked again,
    /// so the result may hold duplicates.
    #[must_use]
    pub fn ray_destinations(&self, from: Square, directions: &[Direction]) -> Vec<Square> {
        let mut destinations = Vec::new();
        self.walk_rays(from, directions, |sq| destinations.push(sq));
        destinations
    }

    /// Rays of the bishop, rook or queen on `from` along its own direction
    /// set. A single set never exceeds the `SquareList` capacity.
    pub(crate) fn slider_destinations(&self, from: Square, kind: PieceKind) -> SquareList {
        debug_assert!(kind.is_slider(), "{kind} does not slide");
        let mut destinations = SquareList::new();
        self.walk_rays(from, slider_directions(kind), |sq| destinations.push(sq));
        destinations
    }

    fn walk_rays(&self, from: Square, directions: &[Direction], mut emit: impl FnMut(Square)) {
        let Some(moving) = self.piece_at(from) else {
            return;
        };

        for direction in directions {
            let (df, dr) = direction.delta();
            let mut sq = from.offset(df, dr);
            while sq.is_on_board() {
                match self.piece_at(sq) {
                    None => emit(sq),
                    Some(blocker) => {
                        if blocker.color != moving.color {
                            emit(sq);
                        }
                        break;
                    }
                }
                sq = sq.offset(df, dr);
            }
        }
    }
}
