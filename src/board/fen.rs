//! Position codec.
//!
//! Fields are joined with `_` so a position can travel as a single URL
//! path segment. Decoding also accepts whitespace, so conventional FEN
//! strings load as well.

use std::fmt::Write as _;
use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, Color, GameState, MoveRecord, Piece, Square};

/// Standard opening position in underscore-separated form.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR_w_-_-_0_1";

/// Separator between fields in encoded positions.
pub const FIELD_SEPARATOR: char = '_';

/// Encode a game state. Castling and en passant are always `-`.
#[must_use]
pub fn encode(state: &GameState) -> String {
    let mut out = placement(&state.board);
    let _ = write!(
        out,
        "{sep}{side}{sep}-{sep}-{sep}{half}{sep}{full}",
        sep = FIELD_SEPARATOR,
        side = state.side_to_move.to_fen_char(),
        half = state.halfmove_clock,
        full = state.fullmove_number,
    );
    out
}

/// Decode a position into a fresh game state with check and checkmate
/// already evaluated.
///
/// On error nothing is built.
pub fn decode(fen: &str) -> Result<GameState, FenError> {
    let parts: Vec<&str> = fen
        .split(|c: char| c == FIELD_SEPARATOR || c.is_ascii_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < 4 {
        return Err(FenError::TooFewParts { found: parts.len() });
    }
    if parts.len() > 6 {
        return Err(FenError::TooManyParts { found: parts.len() });
    }

    let board = parse_placement(parts[0])?;
    if let Some(color) = board.duplicate_king() {
        return Err(FenError::DuplicateKing { color });
    }

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    validate_castling(parts[2])?;
    validate_en_passant(parts[3])?;

    let halfmove_clock = match parts.get(4) {
        Some(field) => parse_counter(field)?,
        None => 0,
    };
    let fullmove_number = match parts.get(5) {
        Some(field) => parse_counter(field).and_then(|n| {
            if n == 0 {
                Err(FenError::InvalidCounter {
                    found: (*field).to_string(),
                })
            } else {
                Ok(n)
            }
        })?,
        None => 1,
    };

    let mut state = GameState::from_board(board, side_to_move);
    state.halfmove_clock = halfmove_clock;
    state.fullmove_number = fullmove_number;
    Ok(state)
}

fn placement(board: &Board) -> String {
    let mut rows = Vec::with_capacity(8);
    for rank in (1..=8).rev() {
        let mut row = String::new();
        let mut empty = 0;
        for file in 1..=8 {
            let piece = Square::new(file, rank).map_or(Piece::Empty, |sq| board.piece_at(sq));
            match piece.to_fen_char() {
                Some(c) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(c);
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }
    rows.join("/")
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - idx as u8;
        let mut files = 0usize;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => files += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    files += 1;
                    if let Some(sq) = u8::try_from(files).ok().and_then(|f| Square::new(f, rank)) {
                        board.set_piece(sq, piece);
                    }
                }
            }
            if files > 8 {
                return Err(FenError::WrongFileCount { rank: rank as usize, files });
            }
        }
        if files != 8 {
            return Err(FenError::WrongFileCount { rank: rank as usize, files });
        }
    }
    Ok(board)
}

fn validate_castling(field: &str) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    let mut seen = String::new();
    for c in field.chars() {
        if !"KQkq".contains(c) || seen.contains(c) {
            return Err(FenError::InvalidCastling {
                found: field.to_string(),
            });
        }
        seen.push(c);
    }
    Ok(())
}

fn validate_en_passant(field: &str) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    match field.parse::<Square>() {
        Ok(sq) if sq.rank() == 3 || sq.rank() == 6 => Ok(()),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

impl GameState {
    /// Parse a position. See [`decode`].
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        decode(fen)
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        encode(self)
    }

    /// Replace the whole state with the decoded position.
    ///
    /// On error `self` is left exactly as it was.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = decode(fen)?;
        Ok(())
    }

    /// Parse coordinate notation and apply the move.
    ///
    /// `Ok(None)` means the notation was fine but the move was rejected.
    pub fn apply_uci(&mut self, notation: &str) -> Result<Option<MoveRecord>, MoveParseError> {
        let mv = notation.parse()?;
        Ok(self.apply_move(mv))
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
