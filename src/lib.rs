//! Chess rules engine.
//!
//! Maintains an 8x8 board and answers, for any square, which squares its
//! piece may legally move to. Castling, en passant and promotion are not
//! part of the rule set.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Game, GameConfig, Square, Status};
//!
//! let mut game = Game::new(GameConfig::default());
//! assert!(game.legal_destinations(Square(6, 0)).contains(Square(5, 2)));
//! game.play(Square(4, 1), Square(4, 3)).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.status(), Status::InProgress);
//! ```

#[macro_use]
mod macros;

pub mod board;
pub mod game;

pub use board::{Board, Color, MoveError, Piece, PieceKind, Square, SquareList};
pub use game::{Game, GameConfig, Status};
