use memos_rpc::rpc::RpcDispatcher;

/// Generic, asynchronous access to a shared [`RpcDispatcher`] behind a
/// mutex.
///
/// The closure-passing shape abstracts over different mutex types
/// (`tokio::sync::Mutex` and `std::sync::Mutex`), keeping caller logic
/// runtime-agnostic.
#[async_trait::async_trait]
pub trait WithDispatcher: Send + Sync {
    /// Executes a closure with exclusive access to the dispatcher.
    async fn with_dispatcher<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RpcDispatcher) -> R + Send,
        R: Send;
}

// Only compiled when the "tokio_support" feature is active.
#[cfg(feature = "tokio_support")]
#[async_trait::async_trait]
impl WithDispatcher for tokio::sync::Mutex<RpcDispatcher> {
    async fn with_dispatcher<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RpcDispatcher) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().await;
        f(&mut guard)
    }
}

/// Implementation for the standard library's blocking mutex, suitable for
/// single-threaded environments.
#[async_trait::async_trait]
impl WithDispatcher for std::sync::Mutex<RpcDispatcher> {
    async fn with_dispatcher<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RpcDispatcher) -> R + Send,
        R: Send,
    {
        let mut guard = self.lock().expect("Mutex was poisoned");
        f(&mut guard)
    }
}
