//! Background oracle request.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use super::protocol::{OracleReply, OracleRequest};
use super::{MoveOracle, OracleError};

type ReplySlot = Arc<Mutex<Option<Result<OracleReply, OracleError>>>>;

/// One outstanding oracle request running on its own thread.
///
/// The thread writes its answer into a shared slot; the owner polls it
/// with [`OracleJob::try_take`] or blocks on [`OracleJob::wait`].
pub struct OracleJob {
    request: OracleRequest,
    slot: ReplySlot,
    handle: Option<JoinHandle<()>>,
}

impl OracleJob {
    /// Start answering `request` on a new thread.
    pub fn spawn(oracle: Arc<dyn MoveOracle>, request: OracleRequest) -> Result<Self, OracleError> {
        let slot: ReplySlot = Arc::new(Mutex::new(None));
        let thread_slot = Arc::clone(&slot);
        let thread_request = request.clone();

        debug!("oracle {} asked for {}", oracle.name(), request.fen);
        let handle = thread::Builder::new()
            .name(format!("oracle-{}", oracle.name()))
            .spawn(move || {
                let reply = oracle.next_move(&thread_request);
                *thread_slot.lock() = Some(reply);
            })
            .map_err(|e| OracleError::Unavailable {
                reason: e.to_string(),
            })?;

        Ok(OracleJob {
            request,
            slot,
            handle: Some(handle),
        })
    }

    #[must_use]
    pub fn request(&self) -> &OracleRequest {
        &self.request
    }

    /// Whether the reply has arrived.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Take the reply if it has arrived.
    pub fn try_take(&mut self) -> Option<Result<OracleReply, OracleError>> {
        let reply = self.slot.lock().take()?;
        self.join();
        Some(reply)
    }

    /// Block until the reply arrives.
    pub fn wait(mut self) -> Result<OracleReply, OracleError> {
        if !self.join() {
            return Err(OracleError::Unavailable {
                reason: "oracle thread panicked".to_string(),
            });
        }
        self.slot
            .lock()
            .take()
            .unwrap_or_else(|| {
                Err(OracleError::Unavailable {
                    reason: "oracle finished without a reply".to_string(),
                })
            })
    }

    /// Join the worker; false if it panicked.
    fn join(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => handle.join().is_ok(),
            None => true,
        }
    }
}

impl std::fmt::Debug for OracleJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleJob")
            .field("request", &self.request)
            .field("ready", &self.is_ready())
            .finish()
    }
}
