use super::{RpcRequestEnvelope, RpcResponseEnvelope};
use crate::utils::generate_u32_id;
use futures::channel::oneshot;
use std::collections::HashMap;
use std::io;

/// Client-side correlation table for in-flight unary calls.
///
/// The dispatcher owns no I/O. [`start_call`](Self::start_call) hands the
/// transport an encoded request envelope plus the receiver its response
/// will arrive on; the transport feeds inbound frames back through
/// [`read_bytes`](Self::read_bytes). Responses may complete in any order;
/// the correlation id pairs them back up.
#[derive(Default)]
pub struct RpcDispatcher {
    pending: HashMap<u32, oneshot::Sender<RpcResponseEnvelope>>,
}

impl RpcDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight call and returns the encoded request
    /// envelope together with the receiver the response arrives on.
    pub fn start_call(
        &mut self,
        method: &str,
        deadline_micros: Option<u64>,
        payload: Vec<u8>,
    ) -> (Vec<u8>, oneshot::Receiver<RpcResponseEnvelope>) {
        let call_id = generate_u32_id();
        let envelope = RpcRequestEnvelope {
            call_id,
            method: method.to_string(),
            deadline_micros,
            payload,
        };
        let (tx, rx) = oneshot::channel();
        self.pending.insert(call_id, tx);
        (envelope.encode(), rx)
    }

    /// Decodes one response envelope and completes the matching call.
    /// Responses for calls no longer pending are dropped.
    pub fn read_bytes(&mut self, bytes: &[u8]) -> Result<u32, io::Error> {
        let envelope = RpcResponseEnvelope::decode(bytes)?;
        let call_id = envelope.call_id;
        match self.pending.remove(&call_id) {
            Some(tx) => {
                // The receiver may have been dropped by an impatient
                // caller; there is nothing left to complete then.
                let _ = tx.send(envelope);
            }
            None => tracing::warn!("Dropping response for unknown call id {call_id}"),
        }
        Ok(call_id)
    }

    /// Drops every pending sender so all in-flight receivers observe the
    /// transport going away. Returns how many calls were aborted.
    pub fn fail_all_pending(&mut self) -> usize {
        let aborted = self.pending.len();
        self.pending.clear();
        aborted
    }

    pub fn pending_calls(&self) -> usize {
        self.pending.len()
    }
}
