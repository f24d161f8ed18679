use super::{Coord, Ray, RayKind};
use crate::board::Color;

pub(super) fn pawn_shape(color: Color, origin: Coord) -> Vec<Ray> {
    let dir = color.pawn_direction();

    let mut advance = vec![origin.offset(0, dir)];
    if origin.rank == color.pawn_start_rank() as i8 {
        advance.push(origin.offset(0, 2 * dir));
    }

    vec![
        Ray {
            kind: RayKind::QuietOnly,
            coords: advance,
        },
        Ray::single(RayKind::CaptureOnly, origin.offset(-1, dir)),
        Ray::single(RayKind::CaptureOnly, origin.offset(1, dir)),
    ]
}
