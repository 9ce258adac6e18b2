use super::RpcError;
use crate::utils::now;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Call-scoped context threaded through every stage of a unary call:
/// decode, interceptors, the handler itself, and encode.
///
/// Cloning is cheap and every clone shares one cancellation flag, so the
/// transport can cancel a call it no longer cares about while a handler
/// still holds its own clone. Deadlines are absolute timestamps in
/// microseconds since the UNIX epoch; they ride the request envelope so
/// the receiving side can rebuild an equivalent context.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
    deadline_micros: Option<u64>,
    cancelled: Arc<AtomicBool>,
}

impl CallContext {
    /// Context with no deadline and nothing cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying an absolute deadline in microseconds since the
    /// UNIX epoch.
    pub fn with_deadline_micros(deadline_micros: u64) -> Self {
        Self::from_deadline(Some(deadline_micros))
    }

    /// Context expiring `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline_micros(now() + timeout.as_micros() as u64)
    }

    /// Rebuilds a context from the deadline field of a request envelope.
    pub fn from_deadline(deadline_micros: Option<u64>) -> Self {
        CallContext {
            deadline_micros,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn deadline_micros(&self) -> Option<u64> {
        self.deadline_micros
    }

    /// Marks the call as cancelled for every clone of this context.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        self.deadline_micros.is_some_and(|deadline| now() >= deadline)
    }

    /// Returns the error a stage should surface if this call is already
    /// dead, or `Ok(())` if work may proceed. Cancellation wins over an
    /// expired deadline when both apply.
    pub fn check(&self) -> Result<(), RpcError> {
        if self.is_cancelled() {
            return Err(RpcError::cancelled("call cancelled"));
        }
        if self.is_deadline_exceeded() {
            return Err(RpcError::deadline_exceeded("call deadline exceeded"));
        }
        Ok(())
    }
}
