use super::RpcInterceptor;
use super::RpcServiceEndpointInterface;
use super::error::RpcServiceEndpointError;
use memos_rpc_service::{ServiceDescriptor, ServiceRegistrar, UnaryHandler};
use std::collections::HashMap;
use std::sync::Arc;

// --- Conditionally Alias the Mutex Implementation ---
#[cfg(not(feature = "tokio_support"))]
use std::sync::Mutex;
#[cfg(feature = "tokio_support")]
use tokio::sync::Mutex;

/// One routing-table row: the stored wire name plus the erased handler.
#[derive(Clone)]
pub struct RouteEntry<C> {
    pub full_method_name: &'static str,
    pub handler: UnaryHandler<C>,
}

/// Routing table keyed by the xxh3 hash of the wire-level method name.
pub type RouteTable<C> = HashMap<u64, RouteEntry<C>>;

/// A concrete RPC service endpoint, generic over a per-connection context
/// type `C`.
///
/// Both tables are populated during startup and only read under traffic;
/// registering while calls are in flight is not part of the contract.
pub struct RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    routes: Arc<Mutex<RouteTable<C>>>,
    interceptors: Arc<Mutex<Vec<Arc<dyn RpcInterceptor>>>>,
}

impl<C> Default for RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    /// Creates a new RPC service endpoint with an empty routing table and
    /// interceptor chain.
    pub fn new() -> Self {
        Self {
            routes: Arc::new(Mutex::new(HashMap::new())),
            interceptors: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl<C> RpcServiceEndpointInterface<C> for RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    type RoutesLock = Mutex<RouteTable<C>>;
    type InterceptorsLock = Mutex<Vec<Arc<dyn RpcInterceptor>>>;

    fn get_routes(&self) -> Arc<Self::RoutesLock> {
        self.routes.clone()
    }

    fn get_interceptors(&self) -> Arc<Self::InterceptorsLock> {
        self.interceptors.clone()
    }
}

/// Lets service definition crates register whole method tables without
/// naming the endpoint type.
#[async_trait::async_trait]
impl<C> ServiceRegistrar<C> for RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    type Error = RpcServiceEndpointError;

    async fn register_service(
        &self,
        descriptor: ServiceDescriptor<C>,
    ) -> Result<(), Self::Error> {
        for method in descriptor.methods {
            self.register_unary_handler(method.full_method_name, method.handler)
                .await?;
        }
        Ok(())
    }
}
