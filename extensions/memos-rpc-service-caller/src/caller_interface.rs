use super::{RpcCallerError, WithDispatcher};
use memos_rpc::rpc::{RpcError, RpcStatusCode};
use memos_rpc::utils::now;
use std::sync::Arc;
use std::time::Duration;

/// Defines a generic capability for making unary RPC calls.
///
/// Any struct that can provide an `RpcDispatcher` and a function for
/// emitting raw bytes over the underlying transport (e.g. a WebSocket
/// client) implements the two getters and gains `call_unary` for free.
#[async_trait::async_trait]
pub trait RpcServiceCallerInterface: Send + Sync {
    /// The specific mutex type used to protect the dispatcher.
    type DispatcherLock: WithDispatcher;

    // --- METHODS TO BE IMPLEMENTED BY THE STRUCT (e.g., RpcClient) ---

    /// Provides access to the shared dispatcher.
    fn get_dispatcher(&self) -> Arc<Self::DispatcherLock>;

    /// Provides the function that hands raw outbound bytes to the
    /// underlying transport.
    fn get_emit_fn(&self) -> Arc<dyn Fn(Vec<u8>) + Send + Sync>;

    // --- METHODS PROVIDED AUTOMATICALLY BY THE TRAIT ---

    /// Performs a unary call: encode and send one request envelope, then
    /// block until the matching response envelope arrives or the
    /// transport goes away.
    ///
    /// A `timeout` becomes an absolute deadline carried in the request
    /// envelope; enforcement happens on the far side and in the transport,
    /// not here.
    async fn call_unary(
        &self,
        full_method_name: &str,
        payload: Vec<u8>,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, RpcCallerError> {
        let deadline_micros = timeout.map(|t| now() + t.as_micros() as u64);

        let (request_bytes, response_rx) = self
            .get_dispatcher()
            .with_dispatcher(|dispatcher| {
                dispatcher.start_call(full_method_name, deadline_micros, payload)
            })
            .await;

        (self.get_emit_fn())(request_bytes);

        let envelope = match response_rx.await {
            Ok(envelope) => envelope,
            // The dispatcher dropped our sender, i.e. the transport went
            // away before a response arrived.
            Err(_) => return Err(RpcCallerError::Aborted),
        };

        match envelope.status_code() {
            RpcStatusCode::Ok => Ok(envelope.payload),
            code => Err(RpcCallerError::Remote(RpcError::new(code, envelope.message))),
        }
    }
}
