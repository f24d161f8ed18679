//! An oracle that plays uniformly random legal moves.

use log::debug;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::protocol::{OracleReply, OracleRequest, CHECKMATE_REPLY, DRAWN_REPLY};
use super::{MoveOracle, OracleError};

/// Picks a random legal move of the side to move.
///
/// It knows nothing about distances to mate, so every move reply carries
/// `pliesToMate = -1`. A checkmated position is answered with `"-1"`, a
/// position without legal moves with a draw reply.
#[derive(Debug)]
pub struct RandomOracle {
    rng: Mutex<StdRng>,
}

impl RandomOracle {
    #[must_use]
    pub fn new() -> Self {
        RandomOracle {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible oracle for tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomOracle {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOracle for RandomOracle {
    fn next_move(&self, request: &OracleRequest) -> Result<OracleReply, OracleError> {
        let state = request.position()?;
        if state.is_checkmate() {
            return Ok(OracleReply::new(CHECKMATE_REPLY, 0));
        }

        let moves = state.legal_moves();
        let choice = moves.choose(&mut *self.rng.lock()).copied();
        match choice {
            Some(mv) => {
                debug!("random oracle picked {mv} from {} moves", moves.len());
                Ok(OracleReply::play(mv, -1))
            }
            None => Ok(OracleReply::new(DRAWN_REPLY, 0)),
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
