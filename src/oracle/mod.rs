//! The move oracle: whatever picks the non-human side's moves.
//!
//! The engine has no search of its own. A position goes out as an
//! [`OracleRequest`], an [`OracleReply`] comes back and is decoded into
//! an [`OracleVerdict`] that the session applies through the executor.

use std::fmt;

use crate::board::FenError;

mod job;
mod protocol;
mod random;

pub use job::OracleJob;
pub use protocol::{OracleReply, OracleRequest, OracleVerdict, CHECKMATE_REPLY, DRAWN_REPLY};
pub use random::RandomOracle;

/// Error type for oracle requests and replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The request carried a position that does not decode
    InvalidFen(FenError),
    /// The reply's move field matches none of the known shapes
    MalformedReply { reply: String },
    /// The oracle could not produce a reply at all
    Unavailable { reason: String },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::InvalidFen(e) => write!(f, "Invalid FEN in oracle request: {e}"),
            OracleError::MalformedReply { reply } => {
                write!(f, "Malformed oracle reply '{reply}'")
            }
            OracleError::Unavailable { reason } => write!(f, "Oracle unavailable: {reason}"),
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OracleError::InvalidFen(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FenError> for OracleError {
    fn from(e: FenError) -> Self {
        OracleError::InvalidFen(e)
    }
}

/// Something that answers "what should be played here?".
///
/// Implementations are called from a background thread by [`OracleJob`].
pub trait MoveOracle: Send + Sync {
    /// Answer one request. Blocking is fine.
    fn next_move(&self, request: &OracleRequest) -> Result<OracleReply, OracleError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
