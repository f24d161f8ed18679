//! Move types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move request: from-square, to-square and an optional promotion piece.
///
/// The promotion piece is carried for notation only; a pawn reaching its
/// last rank always becomes a Queen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation, e.g. `e2e4` or `a7a8q`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if !(4..=5).contains(&len) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(PieceKind::Pawn | PieceKind::King) | None => {
                    return Err(MoveParseError::InvalidPromotion { char: c })
                }
                Some(kind) => Some(kind),
            },
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

/// What the executor reports for an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    /// The piece that left `from`
    pub moved: Piece,
    /// Whatever stood on `to` before the move (`Piece::Empty` if nothing)
    pub captured: Piece,
    /// True if a pawn was replaced by a Queen on arrival
    pub promoted: bool,
    /// True if the move left the opponent in check
    pub gives_check: bool,
    /// True if the move ended the game by checkmate
    pub checkmate: bool,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}
