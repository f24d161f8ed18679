//! A game between a human and an oracle.
//!
//! The session owns the [`GameState`], knows which color the human
//! plays, and allows at most one oracle request in flight. While that
//! request is pending the human cannot move.

use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::board::{decode, Color, FenError, GameState, Move, MoveRecord, STARTING_FEN};
use crate::oracle::{MoveOracle, OracleError, OracleJob, OracleReply, OracleRequest, OracleVerdict};

/// Upper bound on the replies [`GameSession::solve`] asks for.
pub const MAX_SOLVE_PLIES: usize = 500;

/// Session settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub human: Color,
    pub start_fen: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            human: Color::White,
            start_fen: STARTING_FEN.to_string(),
        }
    }
}

impl SessionConfig {
    /// Human plays White from the opening position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn human(mut self, color: Color) -> Self {
        self.human = color;
        self
    }

    #[must_use]
    pub fn start_fen(mut self, fen: impl Into<String>) -> Self {
        self.start_fen = fen.into();
        self
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionResult {
    Checkmate { winner: Color },
    Drawn,
}

impl fmt::Display for SessionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionResult::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            SessionResult::Drawn => write!(f, "draw"),
        }
    }
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Starting or loaded position does not decode
    InvalidFen(FenError),
    /// The oracle failed or replied with garbage
    Oracle(OracleError),
    /// An oracle request is already pending
    OracleBusy,
    /// No oracle request is pending
    NoPendingRequest,
    /// It is the human's turn, not the oracle's
    NotOracleTurn,
    /// The game has already ended
    GameOver,
    /// The oracle asked for a move the rules reject
    IllegalOracleMove { mv: Move },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            SessionError::Oracle(e) => write!(f, "{e}"),
            SessionError::OracleBusy => write!(f, "An oracle request is already pending"),
            SessionError::NoPendingRequest => write!(f, "No oracle request is pending"),
            SessionError::NotOracleTurn => write!(f, "It is not the oracle's turn"),
            SessionError::GameOver => write!(f, "The game is over"),
            SessionError::IllegalOracleMove { mv } => {
                write!(f, "Oracle replied with illegal move {mv}")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidFen(e) => Some(e),
            SessionError::Oracle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FenError> for SessionError {
    fn from(e: FenError) -> Self {
        SessionError::InvalidFen(e)
    }
}

impl From<OracleError> for SessionError {
    fn from(e: OracleError) -> Self {
        SessionError::Oracle(e)
    }
}

/// One human-versus-oracle game.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    human: Color,
    pending: Option<OracleJob>,
    moves_to_mate: Option<u32>,
    result: Option<SessionResult>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let state = decode(&config.start_fen)?;
        let mut session = GameSession {
            state,
            human: config.human,
            pending: None,
            moves_to_mate: None,
            result: None,
        };
        session.sync_result();
        Ok(session)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn human(&self) -> Color {
        self.human
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.state.to_fen()
    }

    /// Whether an oracle request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn result(&self) -> Option<SessionResult> {
        self.result
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Full moves until mate, as last reported by the oracle.
    #[must_use]
    pub const fn moves_to_mate(&self) -> Option<u32> {
        self.moves_to_mate
    }

    /// Whether the side to move is the human.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.state.side_to_move() == self.human
    }

    /// Start over from another position. Refused while a request is pending.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::OracleBusy);
        }
        self.state.load_fen(fen)?;
        self.moves_to_mate = None;
        self.result = None;
        self.sync_result();
        Ok(())
    }

    /// Play a human move. `None` if rejected: a request is pending, the
    /// session is over, it is not the human's turn, or the move is illegal.
    pub fn human_move(&mut self, mv: Move) -> Option<MoveRecord> {
        if self.pending.is_some() {
            debug!("rejected {mv}: waiting for the oracle");
            return None;
        }
        if self.result.is_some() || !self.is_human_turn() {
            debug!("rejected {mv}: not the human's turn");
            return None;
        }
        let record = self.state.apply_move(mv)?;
        self.sync_result();
        Some(record)
    }

    /// Send the current position to `oracle` on a background thread.
    pub fn request_oracle(&mut self, oracle: Arc<dyn MoveOracle>) -> Result<(), SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::OracleBusy);
        }
        if self.result.is_some() {
            return Err(SessionError::GameOver);
        }
        if self.is_human_turn() {
            return Err(SessionError::NotOracleTurn);
        }
        let job = OracleJob::spawn(oracle, OracleRequest::from_state(&self.state))?;
        self.pending = Some(job);
        Ok(())
    }

    /// Apply the pending reply if it has arrived.
    ///
    /// `Ok(None)` while the oracle is still thinking.
    pub fn poll_oracle(&mut self) -> Result<Option<OracleVerdict>, SessionError> {
        let job = self.pending.as_mut().ok_or(SessionError::NoPendingRequest)?;
        let Some(reply) = job.try_take() else {
            return Ok(None);
        };
        self.pending = None;
        self.deliver_reply(reply?).map(Some)
    }

    /// Block for the pending reply and apply it.
    pub fn wait_oracle(&mut self) -> Result<OracleVerdict, SessionError> {
        let job = self.pending.take().ok_or(SessionError::NoPendingRequest)?;
        let reply = job.wait()?;
        self.deliver_reply(reply)
    }

    /// Request and wait in one call.
    pub fn play_oracle_turn(&mut self, oracle: Arc<dyn MoveOracle>) -> Result<OracleVerdict, SessionError> {
        self.request_oracle(oracle)?;
        self.wait_oracle()
    }

    /// Apply a reply obtained by other means, e.g. a caller's own
    /// transport. Refused while a background request is pending.
    pub fn deliver_reply(&mut self, reply: OracleReply) -> Result<OracleVerdict, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::OracleBusy);
        }
        if self.result.is_some() {
            return Err(SessionError::GameOver);
        }
        if self.is_human_turn() {
            return Err(SessionError::NotOracleTurn);
        }
        self.apply_reply(reply)
    }

    /// Let `oracle` play both sides from the current position until the
    /// game ends, returning every verdict in order.
    ///
    /// Stops early after [`MAX_SOLVE_PLIES`] replies, which only happens
    /// with an oracle that never finds a mate. A failed or illegal reply
    /// aborts the run; the moves already played stay on the board.
    pub fn solve(&mut self, oracle: &dyn MoveOracle) -> Result<Vec<OracleVerdict>, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::OracleBusy);
        }
        if self.result.is_some() {
            return Err(SessionError::GameOver);
        }

        let mut verdicts = Vec::new();
        while self.result.is_none() && verdicts.len() < MAX_SOLVE_PLIES {
            let reply = oracle.next_move(&OracleRequest::from_state(&self.state))?;
            verdicts.push(self.apply_reply(reply)?);
        }
        if matches!(self.result, Some(SessionResult::Checkmate { .. })) {
            self.moves_to_mate = Some(0);
        }
        debug!("solve played {} replies from {}", verdicts.len(), oracle.name());
        Ok(verdicts)
    }

    fn apply_reply(&mut self, reply: OracleReply) -> Result<OracleVerdict, SessionError> {
        let verdict = reply.verdict()?;
        if let Some(mv) = verdict.mv() {
            if self.state.apply_move(mv).is_none() {
                return Err(SessionError::IllegalOracleMove { mv });
            }
        }
        self.moves_to_mate = reply.moves_to_mate();

        match verdict {
            OracleVerdict::Play(_) => self.sync_result(),
            OracleVerdict::Checkmate => {
                let winner = self.state.winner().unwrap_or(self.human);
                self.finish(SessionResult::Checkmate { winner });
            }
            OracleVerdict::PlayThenDraw(_) | OracleVerdict::Drawn => {
                self.sync_result();
                if self.result.is_none() {
                    self.finish(SessionResult::Drawn);
                }
            }
        }
        Ok(verdict)
    }

    /// Ask `oracle` what it would play for the human. Blocks; refused
    /// while a background request is pending.
    pub fn hint(&self, oracle: &dyn MoveOracle) -> Result<Option<Move>, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::OracleBusy);
        }
        if self.result.is_some() {
            return Err(SessionError::GameOver);
        }
        let reply = oracle.next_move(&OracleRequest::from_state(&self.state))?;
        Ok(reply.verdict()?.mv())
    }

    fn sync_result(&mut self) {
        if self.result.is_none() {
            if let Some(winner) = self.state.winner() {
                self.finish(SessionResult::Checkmate { winner });
            }
        }
    }

    fn finish(&mut self, result: SessionResult) {
        info!("session over: {result}");
        self.result = Some(result);
    }
}
