//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let state = BoardBuilder::new()
//!     .piece(sq("e1"), Piece::King(Color::White))
//!     .piece(sq("e8"), Piece::King(Color::Black))
//!     .piece(sq("a7"), Piece::Pawn(Color::White))
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!state.side_in_check());
//! ```

use super::{Board, Color, FenError, GameState, Piece, Square};

/// A fluent builder for [`GameState`] positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::starting_position(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the full-move number. Zero is raised to one.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = if number == 0 { 1 } else { number };
        self
    }

    /// Build the game state, rejecting a position with two kings of one
    /// color the same way [`decode`](super::decode) does.
    pub fn try_build(self) -> Result<GameState, FenError> {
        if let Some(color) = self.board.duplicate_king() {
            return Err(FenError::DuplicateKing { color });
        }
        Ok(self.build())
    }

    /// Build the game state, evaluating check and checkmate.
    ///
    /// The layout is taken as given. Missing kings are fine; a second king
    /// of one color is not checked here and only the first one found, in
    /// a1..h8 order, is guarded by the legality filter. Use
    /// [`try_build`](Self::try_build) for untrusted layouts.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut state = GameState::from_board(self.board, self.side_to_move);
        state.halfmove_clock = self.halfmove_clock;
        state.fullmove_number = self.fullmove_number;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built.to_fen(), GameState::new().to_fen());
    }

    #[test]
    fn test_empty_board() {
        let state = BoardBuilder::new()
            .piece(sq("e1"), Piece::King(Color::White))
            .piece(sq("e8"), Piece::King(Color::Black))
            .build();
        assert_eq!(state.board().occupied().count(), 2);
        assert!(state.board().is_empty(sq("a1")));
    }

    #[test]
    fn test_side_and_counters() {
        let state = BoardBuilder::new()
            .piece(sq("e1"), Piece::King(Color::White))
            .piece(sq("e8"), Piece::King(Color::Black))
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(0)
            .build();
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.halfmove_clock(), 12);
        assert_eq!(state.fullmove_number(), 1);
    }

    #[test]
    fn test_try_build_rejects_duplicate_king() {
        let result = BoardBuilder::new()
            .piece(sq("a1"), Piece::King(Color::White))
            .piece(sq("e1"), Piece::King(Color::White))
            .piece(sq("e8"), Piece::King(Color::Black))
            .try_build();
        assert_eq!(
            result.unwrap_err(),
            FenError::DuplicateKing {
                color: Color::White
            }
        );

        let kingless = BoardBuilder::new()
            .piece(sq("a1"), Piece::Rook(Color::White))
            .try_build()
            .unwrap();
        assert_eq!(kingless.board().king_square(Color::White), None);
        assert!(BoardBuilder::starting_position().try_build().is_ok());
    }

    #[test]
    fn test_clear_square() {
        let state = BoardBuilder::starting_position().clear(sq("a1")).build();
        assert!(state.board().is_empty(sq("a1")));
        assert_eq!(state.piece_at(sq("b1")), Piece::Knight(Color::White));
    }
}
