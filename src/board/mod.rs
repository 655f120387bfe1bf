//! Board representation and move legality.
//!
//! Positions are an 8x8 grid of optional pieces. Move generation works per
//! square: primitive destinations come from per-kind generators, and the
//! legality filter replays each candidate on a scratch copy of the board to
//! reject moves that leave the mover's king attacked.
//!
//! The home color is passed explicitly wherever it matters: it decides which
//! way pawns advance and which rank they start from.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::starting(Color::White);
//! let dests = board.legal_destinations(Square(4, 1), Color::White, Color::White);
//! assert_eq!(dests.as_slice(), &[Square(4, 2), Square(4, 3)]);
//! ```

mod attacks;
mod builder;
mod error;
mod legality;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, PieceCodeError, SquareError};
pub use state::Board;
pub use types::{
    code_color, code_kind, code_of, color_of, kind_of, piece_from_code, Color, Direction, Piece,
    PieceKind, Square, SquareList, SquareListIntoIter, BISHOP_DIRECTIONS, BOARD_LEN, COLOR_MASK,
    KIND_MASK, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
