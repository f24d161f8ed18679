//! Chess board representation and game rules.
//!
//! A plain 8x8 grid of [`Piece`] values with move shapes, a legality
//! filter, check and checkmate detection, a move executor and a FEN
//! codec. Castling, en passant and stalemate are not part of the rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, Square};
//!
//! let mut state = GameState::new();
//! assert_eq!(state.legal_moves().len(), 20);
//!
//! let e2: Square = "e2".parse().unwrap();
//! assert_eq!(state.legal_destinations(e2).len(), 2);
//! assert!(state.apply_uci("e2e4").unwrap().is_some());
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod make_move;
mod movegen;
pub mod shapes;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::{decode, encode, FIELD_SEPARATOR, STARTING_FEN};
pub use movegen::{Reach, ReachMode};
pub use shapes::{raw_shape, Ray, RayKind};
pub use state::{Board, GameState, Outcome, Player};
pub use types::{Color, Coord, Move, MoveRecord, Piece, PieceKind, Square};
