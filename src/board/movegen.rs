//! Pseudo-legal move generation.
//!
//! Turns a raw shape into the squares a piece may actually use on the
//! current board: rays are clipped to the board and stop at the first
//! occupied square. Nothing here looks at king safety; see `check`.

use super::shapes::{raw_shape, RayKind};
use super::{Board, Square};

/// Destinations of one piece, split into captures and quiet moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reach {
    pub captures: Vec<Square>,
    pub quiets: Vec<Square>,
}

impl Reach {
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.captures.contains(&sq) || self.quiets.contains(&sq)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty() && self.quiets.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.captures.len() + self.quiets.len()
    }

    /// Captures first, then quiet moves.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.captures.iter().chain(self.quiets.iter()).copied()
    }

    /// Keep only the squares for which `keep` holds.
    #[must_use]
    pub(crate) fn filtered(mut self, mut keep: impl FnMut(Square) -> bool) -> Self {
        self.captures.retain(|&sq| keep(sq));
        self.quiets.retain(|&sq| keep(sq));
        self
    }
}

/// What a walk along the rays collects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReachMode {
    /// Enemy-occupied squares as captures, empty squares as quiet moves.
    Moves,
    /// Squares the piece would capture on if an enemy stood there: the
    /// blocker of each ray is included whatever its color, pawn
    /// diagonals are included even when empty, pawn advances never are.
    Controlled,
}

impl Board {
    /// Pseudo-legal destinations of the piece on `from`.
    ///
    /// Empty for an empty square.
    #[must_use]
    pub fn pseudo_legal(&self, from: Square) -> Reach {
        self.reach(from, ReachMode::Moves)
    }

    /// Squares controlled by the piece on `from`.
    #[must_use]
    pub fn controlled_squares(&self, from: Square) -> Vec<Square> {
        self.reach(from, ReachMode::Controlled).iter().collect()
    }

    /// Whether any piece of `color` controls `target`.
    #[must_use]
    pub fn is_defended_by(&self, target: Square, color: super::Color) -> bool {
        self.pieces_of(color)
            .filter(|&(sq, _)| sq != target)
            .any(|(sq, _)| self.controlled_squares(sq).contains(&target))
    }

    pub(crate) fn reach(&self, from: Square, mode: ReachMode) -> Reach {
        let piece = self.piece_at(from);
        let mut reach = Reach::default();
        let Some(color) = piece.color() else {
            return reach;
        };

        for ray in raw_shape(piece, from) {
            for coord in ray.coords {
                // rays are straight lines: once off the board, always off
                let Some(sq) = coord.square() else {
                    break;
                };
                let target = self.piece_at(sq);

                if target.is_empty() {
                    let counts = match ray.kind {
                        RayKind::MoveOrCapture => true,
                        RayKind::QuietOnly => mode == ReachMode::Moves,
                        RayKind::CaptureOnly => mode == ReachMode::Controlled,
                    };
                    if counts {
                        reach.quiets.push(sq);
                    }
                    continue;
                }

                let counts = match mode {
                    ReachMode::Moves => target.is_enemy_of(color),
                    ReachMode::Controlled => true,
                };
                if counts && ray.kind != RayKind::QuietOnly {
                    reach.captures.push(sq);
                }
                break;
            }
        }

        reach
    }
}
