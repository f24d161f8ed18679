//! Wire messages exchanged with the oracle.

use std::fmt;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::OracleError;
use crate::board::{decode, encode, FenError, GameState, Move};

/// Move field meaning "the position is already checkmate".
pub const CHECKMATE_REPLY: &str = "-1";

/// A move field long enough to mean "drawn, no move".
pub const DRAWN_REPLY: &str = "position is drawn";

/// Longest move field still read as a bare move.
const MAX_MOVE_LEN: usize = 5;
/// Move fields longer than this carry a trailing draw marker.
const DRAW_MARKER_MIN_EXCLUSIVE: usize = 6;
/// Move fields at least this long carry no move at all.
const DRAWN_MIN_LEN: usize = 15;

/// Request body: the position the oracle should answer for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OracleRequest {
    pub fen: String,
}

impl OracleRequest {
    #[must_use]
    pub fn new(fen: impl Into<String>) -> Self {
        OracleRequest { fen: fen.into() }
    }

    /// A request for the current position of `state`.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        OracleRequest { fen: encode(state) }
    }

    /// Decode the requested position.
    pub fn position(&self) -> Result<GameState, FenError> {
        decode(&self.fen)
    }
}

/// Response body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OracleReply {
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub mv: String,
    #[cfg_attr(feature = "serde", serde(rename = "pliesToMate"))]
    pub plies_to_mate: i64,
}

/// What a reply tells the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleVerdict {
    /// Play this move.
    Play(Move),
    /// The position is already checkmate; nothing to play.
    Checkmate,
    /// Play this move, after which the game is drawn.
    PlayThenDraw(Move),
    /// Drawn or stalemated; nothing to play.
    Drawn,
}

impl OracleVerdict {
    /// The move to apply, if the verdict carries one.
    #[must_use]
    pub const fn mv(self) -> Option<Move> {
        match self {
            OracleVerdict::Play(mv) | OracleVerdict::PlayThenDraw(mv) => Some(mv),
            OracleVerdict::Checkmate | OracleVerdict::Drawn => None,
        }
    }

    /// Whether the game is finished once this verdict is applied.
    #[must_use]
    pub const fn ends_game(self) -> bool {
        !matches!(self, OracleVerdict::Play(_))
    }
}

impl fmt::Display for OracleVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleVerdict::Play(mv) => write!(f, "{mv}"),
            OracleVerdict::Checkmate => write!(f, "checkmate"),
            OracleVerdict::PlayThenDraw(mv) => write!(f, "{mv}, then draw"),
            OracleVerdict::Drawn => write!(f, "draw"),
        }
    }
}

impl OracleReply {
    #[must_use]
    pub fn new(mv: impl Into<String>, plies_to_mate: i64) -> Self {
        OracleReply {
            mv: mv.into(),
            plies_to_mate,
        }
    }

    /// A reply that plays `mv`.
    #[must_use]
    pub fn play(mv: Move, plies_to_mate: i64) -> Self {
        OracleReply::new(mv.to_string(), plies_to_mate)
    }

    /// Decode the move field.
    ///
    /// By length: `"-1"` is checkmate, 4-5 characters a plain move,
    /// 7-14 characters a move followed by a draw marker, 15 or more a
    /// drawn position. Anything else is malformed.
    pub fn verdict(&self) -> Result<OracleVerdict, OracleError> {
        let field = self.mv.trim();
        let len = field.chars().count();

        let verdict = if field == CHECKMATE_REPLY {
            Some(OracleVerdict::Checkmate)
        } else if len >= DRAWN_MIN_LEN {
            Some(OracleVerdict::Drawn)
        } else if len > DRAW_MARKER_MIN_EXCLUSIVE {
            field
                .get(..4)
                .and_then(|head| head.parse().ok())
                .map(OracleVerdict::PlayThenDraw)
        } else if (4..=MAX_MOVE_LEN).contains(&len) {
            field.parse().ok().map(OracleVerdict::Play)
        } else {
            None
        };

        verdict.ok_or_else(|| {
            warn!("malformed oracle reply {:?}", self.mv);
            OracleError::MalformedReply {
                reply: self.mv.clone(),
            }
        })
    }

    /// Full moves until mate, rounding half-moves up. `None` when the
    /// oracle reported no distance.
    #[must_use]
    pub fn moves_to_mate(&self) -> Option<u32> {
        u32::try_from(self.plies_to_mate)
            .ok()
            .map(|plies| plies.div_ceil(2))
    }
}
