use super::sliders::ALL_DIRECTIONS;
use super::{Coord, Ray, RayKind};

pub(super) fn king_shape(origin: Coord) -> Vec<Ray> {
    ALL_DIRECTIONS
        .iter()
        .map(|&(df, dr)| Ray::single(RayKind::MoveOrCapture, origin.offset(df, dr)))
        .collect()
}
