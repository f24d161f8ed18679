//! Raw move shapes for every piece kind.
//!
//! A shape is a list of independent rays of coordinates, each ordered
//! outward from the piece. Shapes ignore occupancy and check and may
//! contain off-board coordinates; the legality filter in `movegen`
//! clips, blocks and classifies them.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Coord, Piece, Square};

/// How the squares of a ray may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayKind {
    /// Empty squares are moves, an enemy piece is a capture.
    MoveOrCapture,
    /// Only empty squares count (pawn advances).
    QuietOnly,
    /// Only enemy-occupied squares count (pawn diagonals).
    CaptureOnly,
}

/// One direction of travel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ray {
    pub kind: RayKind,
    pub coords: Vec<Coord>,
}

impl Ray {
    pub(crate) fn single(kind: RayKind, coord: Coord) -> Self {
        Ray {
            kind,
            coords: vec![coord],
        }
    }
}

/// The raw move shape of `piece` standing on `from`.
///
/// `Piece::Empty` has no shape.
#[must_use]
pub fn raw_shape(piece: Piece, from: Square) -> Vec<Ray> {
    let origin = from.coord();
    match piece {
        Piece::Empty => Vec::new(),
        Piece::Pawn(color) => pawns::pawn_shape(color, origin),
        Piece::Knight(_) => knights::knight_shape(origin),
        Piece::Bishop(_) => sliders::slider_shape(origin, &sliders::DIAGONALS),
        Piece::Rook(_) => sliders::slider_shape(origin, &sliders::ORTHOGONALS),
        Piece::Queen(_) => sliders::slider_shape(origin, &sliders::ALL_DIRECTIONS),
        Piece::King(_) => kings::king_shape(origin),
    }
}
