use futures::future::BoxFuture;
use memos_rpc::rpc::{CallContext, RpcError};
use std::sync::Arc;

/// Metadata describing the call an interceptor is wrapping.
#[derive(Debug, Clone)]
pub struct UnaryCallInfo {
    /// Wire-level method name the call was routed as.
    pub full_method_name: &'static str,
    /// Routing key the call was matched on.
    pub method_key: u64,
}

/// The terminal handler with the per-connection context already bound.
pub(crate) type BoundHandler<'a> =
    &'a (dyn Fn(CallContext, Vec<u8>) -> BoxFuture<'static, Result<Vec<u8>, RpcError>>
         + Send
         + Sync);

/// The remaining links of an interceptor chain.
///
/// Calling [`run`](Self::run) enters the next interceptor or, once the
/// chain is exhausted, the handler itself. An interceptor that never calls
/// `run` short-circuits the call with its own result.
pub struct Next<'a> {
    pub(crate) chain: &'a [Arc<dyn RpcInterceptor>],
    pub(crate) info: &'a UnaryCallInfo,
    pub(crate) terminal: BoundHandler<'a>,
}

impl<'a> Next<'a> {
    pub async fn run(self, ctx: CallContext, payload: Vec<u8>) -> Result<Vec<u8>, RpcError> {
        match self.chain.split_first() {
            Some((head, rest)) => {
                head.intercept(
                    ctx,
                    self.info,
                    payload,
                    Next {
                        chain: rest,
                        info: self.info,
                        terminal: self.terminal,
                    },
                )
                .await
            }
            None => (self.terminal)(ctx, payload).await,
        }
    }
}

/// Middleware wrapping every unary call an endpoint dispatches.
///
/// Interceptors observe the raw request payload before the typed decode
/// and decide whether to forward the call (`next.run(...)`), short-circuit
/// with their own result, or transform whatever the rest of the chain
/// returned. The chain runs in registration order; results and errors
/// unwind in reverse.
#[async_trait::async_trait]
pub trait RpcInterceptor: Send + Sync {
    async fn intercept(
        &self,
        ctx: CallContext,
        info: &UnaryCallInfo,
        payload: Vec<u8>,
        next: Next<'_>,
    ) -> Result<Vec<u8>, RpcError>;
}
