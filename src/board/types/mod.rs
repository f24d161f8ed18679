//! Core chess types.
//!
//! This module contains the fundamental value types used by the engine:
//! - `Color`, `PieceKind` and `Piece` - colors, piece kinds and board slots
//! - `Square` and `Coord` - on-board squares and signed coordinates
//! - `Move` and `MoveRecord` - move requests and executor reports

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveRecord};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Coord, Square};
