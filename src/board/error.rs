//! Error types for chess board operations.

use std::fmt;

use super::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewParts { found: usize },
    /// FEN string has more than six fields
    TooManyParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Placement does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant field
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { found: String },
    /// More than one king of the same color on the board
    DuplicateKing { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::TooManyParts { found } => {
                write!(f, "FEN must have at most 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant field '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::DuplicateKing { color } => {
                write!(f, "More than one {color} king on the board")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing and coordinate conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 1-8)
    RankOutOfBounds { rank: i32 },
    /// File out of bounds (must be 1-8)
    FileOutOfBounds { file: i32 },
    /// Coordinate lies off the board
    OffBoard { file: i32, rank: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 1-8)")
            }
            SquareError::OffBoard { file, rank } => {
                write!(f, "Coordinate ({file}, {rank}) is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
