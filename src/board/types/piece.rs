//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (2 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Pawn promotion rank (8 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// FEN side-to-move letter
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
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

/// Piece kinds, without color.
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
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character of either case (p, n, b, r, q, k)
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

    /// Convert to lowercase character
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

    /// Attach a color to this kind.
    #[inline]
    #[must_use]
    pub const fn with_color(self, color: Color) -> Piece {
        match self {
            PieceKind::Pawn => Piece::Pawn(color),
            PieceKind::Knight => Piece::Knight(color),
            PieceKind::Bishop => Piece::Bishop(color),
            PieceKind::Rook => Piece::Rook(color),
            PieceKind::Queen => Piece::Queen(color),
            PieceKind::King => Piece::King(color),
        }
    }
}

/// The content of one board slot.
///
/// `Empty` is the sentinel for an unoccupied square. Pieces are plain
/// values: two white pawns compare equal and are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    #[default]
    Empty,
    Pawn(Color),
    Knight(Color),
    Bishop(Color),
    Rook(Color),
    Queen(Color),
    King(Color),
}

impl Piece {
    /// The kind of piece, or `None` for an empty slot
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Pawn(_) => Some(PieceKind::Pawn),
            Piece::Knight(_) => Some(PieceKind::Knight),
            Piece::Bishop(_) => Some(PieceKind::Bishop),
            Piece::Rook(_) => Some(PieceKind::Rook),
            Piece::Queen(_) => Some(PieceKind::Queen),
            Piece::King(_) => Some(PieceKind::King),
        }
    }

    /// The color of the piece, or `None` for an empty slot
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Pawn(c)
            | Piece::Knight(c)
            | Piece::Bishop(c)
            | Piece::Rook(c)
            | Piece::Queen(c)
            | Piece::King(c) => Some(c),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// True if this slot holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True if this slot holds a piece of the color opposing `color`
    #[inline]
    #[must_use]
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color() == Some(color.opponent())
    }

    /// Parse a FEN piece letter (uppercase White, lowercase Black)
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(kind.with_color(color))
    }

    /// FEN letter for this piece; `None` for an empty slot
    #[must_use]
    pub fn to_fen_char(self) -> Option<char> {
        let kind = self.kind()?;
        let c = kind.to_char();
        Some(if self.is_color(Color::White) {
            c.to_ascii_uppercase()
        } else {
            c
        })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fen_char() {
            Some(c) => write!(f, "{c}"),
            None => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_chars_round_trip() {
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let piece = kind.with_color(color);
                let c = piece.to_fen_char().unwrap();
                assert_eq!(Piece::from_fen_char(c), Some(piece));
                assert_eq!(c.is_ascii_uppercase(), color == Color::White);
            }
        }
        assert_eq!(Piece::Empty.to_fen_char(), None);
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Piece::Pawn(Color::White), Piece::Pawn(Color::White));
        assert_ne!(Piece::Pawn(Color::White), Piece::Pawn(Color::Black));
        assert_eq!(Piece::default(), Piece::Empty);
    }

    #[test]
    fn test_enemy_and_color() {
        let rook = Piece::Rook(Color::Black);
        assert!(rook.is_enemy_of(Color::White));
        assert!(!rook.is_enemy_of(Color::Black));
        assert!(!Piece::Empty.is_enemy_of(Color::White));
        assert_eq!(rook.kind(), Some(PieceKind::Rook));
        assert_eq!(Piece::Empty.color(), None);
    }
}
