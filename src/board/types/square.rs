//! Square and coordinate types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, identified by file and rank, both in `1..=8`.
///
/// File 1 is the `a`-file, rank 1 is White's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// All 64 squares, a1, b1, ..., h8.
    pub const ALL: [Square; 64] = {
        let mut all = [Square { file: 1, rank: 1 }; 64];
        let mut idx = 0;
        while idx < 64 {
            all[idx] = Square::from_index(idx);
            idx += 1;
        }
        all
    };

    /// Create a square from a 1-based file and rank, with bounds checking.
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file >= 1 && file <= 8 && rank >= 1 && rank <= 8 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// File number (1 = `a`, 8 = `h`)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank number (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Index into a 64-slot grid (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Inverse of [`Square::index`]. `idx` must be below 64.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square {
            file: (idx % 8) as u8 + 1,
            rank: (idx / 8) as u8 + 1,
        }
    }

    /// The signed coordinate of this square.
    #[inline]
    #[must_use]
    pub const fn coord(self) -> Coord {
        Coord {
            file: self.file as i8,
            rank: self.rank as i8,
        }
    }

    /// File letter, `a`..`h`
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.file - 1) as char
    }

    /// Rank digit, `1`..`8`
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'0' + self.rank) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a' + 1,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'0',
            _ => return Err(invalid()),
        };

        Ok(Square { file, rank })
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file: file.into() });
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank: rank.into() });
        }
        Ok(Square { file, rank })
    }
}

impl TryFrom<Coord> for Square {
    type Error = SquareError;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        coord.square().ok_or(SquareError::OffBoard {
            file: coord.file.into(),
            rank: coord.rank.into(),
        })
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.file, sq.rank)
    }
}

/// A signed (file, rank) pair that may lie off the board.
///
/// Move shapes are built from coordinates so that direction vectors can
/// step past the edge; the legality filter drops the off-board ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Coord {
            file: self.file + df,
            rank: self.rank + dr,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }

    /// The square at this coordinate, or `None` when off the board.
    #[inline]
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        if self.is_on_board() {
            Some(Square {
                file: self.file as u8,
                rank: self.rank as u8,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip_all_squares() {
        for file in 1..=8u8 {
            for rank in 1..=8u8 {
                let sq = Square::new(file, rank).unwrap();
                let label = sq.to_string();
                let parsed: Square = label.parse().unwrap();
                assert_eq!(parsed, sq);
                assert_eq!((parsed.file(), parsed.rank()), (file, rank));
            }
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (idx, sq) in Square::ALL.iter().enumerate() {
            assert_eq!(sq.index(), idx);
            assert_eq!(Square::from_index(idx), *sq);
        }
        assert_eq!(Square::ALL[0].to_string(), "a1");
        assert_eq!(Square::ALL[63].to_string(), "h8");
    }

    #[test]
    fn test_invalid_labels() {
        for bad in ["", "a", "a9", "i1", "a0", "e44", "E4"] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_bounds() {
        assert!(Square::new(0, 1).is_none());
        assert!(Square::new(1, 9).is_none());
        assert!(matches!(
            Square::try_from((9, 1)),
            Err(SquareError::FileOutOfBounds { file: 9 })
        ));
        assert!(matches!(
            Square::try_from((1, 0)),
            Err(SquareError::RankOutOfBounds { rank: 0 })
        ));
    }

    #[test]
    fn test_coord_off_board() {
        let corner = Square::new(1, 1).unwrap().coord();
        assert!(corner.offset(-1, 0).square().is_none());
        assert!(Square::try_from(corner.offset(0, -2)).is_err());
        assert_eq!(corner.offset(1, 1).square(), Square::new(2, 2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_bounds() {
        let e4: Square = serde_json::from_str("[5,4]").unwrap();
        assert_eq!(e4, "e4".parse().unwrap());
        assert_eq!(serde_json::to_string(&e4).unwrap(), "[5,4]");

        for bad in ["[0,9]", "[9,1]", "[1,0]", r#"{"file":0,"rank":9}"#, r#"{"file":5,"rank":4}"#] {
            assert!(
                serde_json::from_str::<Square>(bad).is_err(),
                "{bad} should be rejected"
            );
        }
    }
}
