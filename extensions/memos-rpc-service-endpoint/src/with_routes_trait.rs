use super::endpoint::RouteTable;
use super::interceptor::RpcInterceptor;
use std::sync::Arc;

/// Generic, asynchronous access to a shared routing table behind a mutex.
///
/// The closure-passing shape abstracts over different mutex types
/// (`tokio::sync::Mutex` and `std::sync::Mutex`), keeping endpoint logic
/// runtime-agnostic.
#[async_trait::async_trait]
pub trait WithRoutes<C>: Send + Sync
where
    C: Send + Sync + Clone + 'static,
{
    /// Executes a closure with exclusive access to the routing table.
    async fn with_routes<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RouteTable<C>) -> R + Send,
        R: Send;
}

// Only compiled when the "tokio_support" feature is active.
#[cfg(feature = "tokio_support")]
#[async_trait::async_trait]
impl<C> WithRoutes<C> for tokio::sync::Mutex<RouteTable<C>>
where
    C: Send + Sync + Clone + 'static,
{
    async fn with_routes<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RouteTable<C>) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().await;
        f(&mut guard)
    }
}

/// Implementation for the standard library's blocking mutex, suitable for
/// single-threaded environments.
#[async_trait::async_trait]
impl<C> WithRoutes<C> for std::sync::Mutex<RouteTable<C>>
where
    C: Send + Sync + Clone + 'static,
{
    async fn with_routes<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RouteTable<C>) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().expect("Mutex was poisoned");
        f(&mut guard)
    }
}

/// Same closure-passing access for the interceptor chain.
#[async_trait::async_trait]
pub trait WithInterceptors: Send + Sync {
    async fn with_interceptors<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Arc<dyn RpcInterceptor>>) -> R + Send,
        R: Send;
}

#[cfg(feature = "tokio_support")]
#[async_trait::async_trait]
impl WithInterceptors for tokio::sync::Mutex<Vec<Arc<dyn RpcInterceptor>>> {
    async fn with_interceptors<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Arc<dyn RpcInterceptor>>) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().await;
        f(&mut guard)
    }
}

#[async_trait::async_trait]
impl WithInterceptors for std::sync::Mutex<Vec<Arc<dyn RpcInterceptor>>> {
    async fn with_interceptors<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Arc<dyn RpcInterceptor>>) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().expect("Mutex was poisoned");
        f(&mut guard)
    }
}
