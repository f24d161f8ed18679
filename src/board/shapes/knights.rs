use super::{Coord, Ray, RayKind};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) fn knight_shape(origin: Coord) -> Vec<Ray> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(df, dr)| Ray::single(RayKind::MoveOrCapture, origin.offset(df, dr)))
        .collect()
}
