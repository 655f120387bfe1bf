use super::super::{Board, Square, SquareList};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    #[must_use]
    pub fn knight_destinations(&self, from: Square) -> SquareList {
        self.offset_destinations(from, &KNIGHT_OFFSETS)
    }
}
