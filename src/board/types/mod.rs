//! Core chess types.
//!
//! This module contains the fundamental value types used by the rules engine:
//! - `Piece`, `PieceKind` and `Color` - colored pieces and the classifier
//! - `Square` - (file, rank) coordinates, possibly off the board
//! - `Direction` - compass directions for sliding pieces
//! - `SquareList` - destination squares in generation order

mod direction;
mod piece;
mod square;
mod square_list;

pub use direction::{Direction, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
pub use piece::{
    code_color, code_kind, code_of, color_of, kind_of, piece_from_code, Color, Piece, PieceKind,
    COLOR_MASK, KIND_MASK,
};
pub use square::{Square, BOARD_LEN};
pub use square_list::{SquareList, SquareListIntoIter};
