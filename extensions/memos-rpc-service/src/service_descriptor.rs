use futures::future::BoxFuture;
use memos_rpc::rpc::{CallContext, RpcError};
use std::sync::Arc;

/// Type-erased asynchronous handler for one unary method.
///
/// Receives the call context, the transport's per-connection context, and
/// the raw request payload; returns the raw response payload or a typed
/// error. Typed decode/invoke/encode lives inside the handler, so routing
/// tables stay homogeneous.
pub type UnaryHandler<C> = Arc<
    dyn Fn(CallContext, C, Vec<u8>) -> BoxFuture<'static, Result<Vec<u8>, RpcError>> + Send + Sync,
>;

/// One row of a service's method table.
pub struct MethodDescriptor<C> {
    /// Wire-level method name, matched byte-for-byte against incoming
    /// calls.
    pub full_method_name: &'static str,
    pub handler: UnaryHandler<C>,
}

/// A service's complete method table, consumed by a [`ServiceRegistrar`].
pub struct ServiceDescriptor<C> {
    pub service_name: &'static str,
    pub methods: Vec<MethodDescriptor<C>>,
}

/// Accepts method-table registrations and routes incoming calls to them.
///
/// Implemented by server endpoints. Service definition crates register
/// against this trait and stay agnostic of which endpoint (or test
/// harness) ultimately hosts them.
#[async_trait::async_trait]
pub trait ServiceRegistrar<C>: Send + Sync
where
    C: Send + Sync + Clone + 'static,
{
    type Error;

    async fn register_service(
        &self,
        descriptor: ServiceDescriptor<C>,
    ) -> Result<(), Self::Error>;
}
