//! Piece kind, color, and the piece classifier.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceCodeError;

/// Bits 0-2 of a compact piece code hold the kind.
pub const KIND_MASK: u8 = 0b0_0111;
/// Bits 3-4 of a compact piece code hold the color.
pub const COLOR_MASK: u8 = 0b1_1000;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in value order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a kind from a letter (p, n, b, r, q, k), either case
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true for pieces that move along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Kind field of the compact code. Value 2 is unused.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            PieceKind::Pawn => 0b001,
            PieceKind::Knight => 0b011,
            PieceKind::Bishop => 0b100,
            PieceKind::Rook => 0b101,
            PieceKind::Queen => 0b110,
            PieceKind::King => 0b111,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Color field of the compact code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Color::Black => 0b0_1000,
            Color::White => 0b1_0000,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A colored piece. Kind and color are independent fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { kind, color }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// FEN-style letter: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Parse a FEN-style letter into a piece.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// Compact integer code: kind in bits 0-2, color in bits 3-4.
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        let code = self.kind.code() | self.color.code();
        debug_assert_eq!(piece_from_code(code), Ok(Some(self)));
        code
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

impl TryFrom<u8> for Piece {
    type Error = PieceCodeError;

    /// Decodes a non-empty compact code. Use [`piece_from_code`] when the
    /// code may be the empty square.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match (code_kind(code)?, code_color(code)?) {
            (Some(kind), Some(color)) => Ok(Piece::new(color, kind)),
            _ => Err(PieceCodeError::Incomplete { code }),
        }
    }
}

/// Kind of the piece on a square, `None` for an empty square.
#[inline]
#[must_use]
pub fn kind_of(square: Option<Piece>) -> Option<PieceKind> {
    square.map(Piece::kind)
}

/// Color of the piece on a square, `None` for an empty square.
#[inline]
#[must_use]
pub fn color_of(square: Option<Piece>) -> Option<Color> {
    square.map(Piece::color)
}

/// Compact code of a square's contents; the empty square is `0`.
#[inline]
#[must_use]
pub fn code_of(square: Option<Piece>) -> u8 {
    square.map_or(0, Piece::code)
}

/// Decodes the kind field of a compact code by masking.
pub fn code_kind(code: u8) -> Result<Option<PieceKind>, PieceCodeError> {
    if code & !(KIND_MASK | COLOR_MASK) != 0 {
        return Err(PieceCodeError::OutOfRange { code });
    }
    match code & KIND_MASK {
        0b000 => Ok(None),
        0b001 => Ok(Some(PieceKind::Pawn)),
        0b011 => Ok(Some(PieceKind::Knight)),
        0b100 => Ok(Some(PieceKind::Bishop)),
        0b101 => Ok(Some(PieceKind::Rook)),
        0b110 => Ok(Some(PieceKind::Queen)),
        0b111 => Ok(Some(PieceKind::King)),
        bits => Err(PieceCodeError::InvalidKind { bits }),
    }
}

/// Decodes the color field of a compact code by masking.
pub fn code_color(code: u8) -> Result<Option<Color>, PieceCodeError> {
    if code & !(KIND_MASK | COLOR_MASK) != 0 {
        return Err(PieceCodeError::OutOfRange { code });
    }
    match code & COLOR_MASK {
        0b0_0000 => Ok(None),
        0b0_1000 => Ok(Some(Color::Black)),
        0b1_0000 => Ok(Some(Color::White)),
        bits => Err(PieceCodeError::InvalidColor { bits }),
    }
}

/// Decodes a compact code, mapping `0` to the empty square.
pub fn piece_from_code(code: u8) -> Result<Option<Piece>, PieceCodeError> {
    if code == 0 {
        return Ok(None);
    }
    Piece::try_from(code).map(Some)
}
