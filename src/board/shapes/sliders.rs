use super::{Coord, Ray, RayKind};

/// Longest possible slide on an 8x8 board
const MAX_SLIDE: i8 = 7;

pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(super) fn slider_shape(origin: Coord, directions: &[(i8, i8)]) -> Vec<Ray> {
    directions
        .iter()
        .map(|&(df, dr)| Ray {
            kind: RayKind::MoveOrCapture,
            coords: (1..=MAX_SLIDE)
                .map(|step| origin.offset(df * step, dr * step))
                .collect(),
        })
        .collect()
}
