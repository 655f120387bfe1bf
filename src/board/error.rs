//! Error types for board and game operations.

use std::fmt;

use super::types::Square;

/// Error type for compact piece code decoding failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceCodeError {
    /// Bits set outside the kind and color fields
    OutOfRange { code: u8 },
    /// Kind field holds a value no piece kind maps to
    InvalidKind { bits: u8 },
    /// Both color bits are set
    InvalidColor { bits: u8 },
    /// Exactly one of kind and color is empty
    Incomplete { code: u8 },
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceCodeError::OutOfRange { code } => {
                write!(f, "Piece code {code:#07b} has bits outside the kind and color fields")
            }
            PieceCodeError::InvalidKind { bits } => {
                write!(f, "Invalid piece kind bits {bits:#05b}")
            }
            PieceCodeError::InvalidColor { bits } => {
                write!(f, "Invalid piece color bits {bits:#07b}")
            }
            PieceCodeError::Incomplete { code } => {
                write!(f, "Piece code {code:#07b} has a kind without a color or a color without a kind")
            }
        }
    }
}

impl std::error::Error for PieceCodeError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: i8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for committing or playing a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Source or destination lies outside the board
    OffBoard { square: Square },
    /// There is no piece on the source square
    EmptySource { square: Square },
    /// Destination is not among the legal destinations of the source
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard { square } => {
                write!(f, "Square {square} is off the board")
            }
            MoveError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
