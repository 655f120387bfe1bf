//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, MoveError, Piece, PieceKind, Square, SquareError, SquareList,
};
pub use crate::game::{Game, GameConfig, Status};
