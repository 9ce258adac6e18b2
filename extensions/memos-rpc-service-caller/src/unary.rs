use super::{RpcCallerError, RpcServiceCallerInterface};
use memos_rpc_service::RpcMethodUnary;
use std::time::Duration;

/// Performs a one-shot unary RPC call for a method conforming to
/// [`RpcMethodUnary`].
///
/// Handles the full client-side lifecycle — encoding the request, sending
/// it via the generic transport, and decoding the response — so call sites
/// stay agnostic of the transport implementation and serialization format.
pub async fn call_unary_rpc<T, C>(
    rpc_client: &C,
    request: T::Request,
    timeout: Option<Duration>,
) -> Result<T::Response, RpcCallerError>
where
    T: RpcMethodUnary + Send + Sync + 'static,
    T::Request: Send + 'static,
    T::Response: Send + 'static,
    C: RpcServiceCallerInterface + Send + Sync,
{
    let payload = T::encode_request(request)?;
    let response_payload = rpc_client
        .call_unary(T::METHOD_NAME, payload, timeout)
        .await?;
    let response = T::decode_response(&response_payload)?;
    Ok(response)
}

/// Callable convention for unary method definitions.
///
/// The blanket implementation below lets downstream code write
/// `DeleteInbox::call(&client, request)` without dealing with traits or
/// transport logic explicitly.
#[async_trait::async_trait]
pub trait RpcCallUnary: RpcMethodUnary + Sized + Send + Sync {
    async fn call<C>(rpc_client: &C, request: Self::Request) -> Result<Self::Response, RpcCallerError>
    where
        C: RpcServiceCallerInterface + Send + Sync;

    /// Like [`call`](Self::call), but stamps the request with an absolute
    /// deadline `timeout` from now.
    async fn call_with_timeout<C>(
        rpc_client: &C,
        request: Self::Request,
        timeout: Duration,
    ) -> Result<Self::Response, RpcCallerError>
    where
        C: RpcServiceCallerInterface + Send + Sync;
}

#[async_trait::async_trait]
impl<T> RpcCallUnary for T
where
    T: RpcMethodUnary + Send + Sync + 'static,
    T::Request: Send + 'static,
    T::Response: Send + 'static,
{
    async fn call<C>(rpc_client: &C, request: Self::Request) -> Result<Self::Response, RpcCallerError>
    where
        C: RpcServiceCallerInterface + Send + Sync,
    {
        call_unary_rpc::<T, C>(rpc_client, request, None).await
    }

    async fn call_with_timeout<C>(
        rpc_client: &C,
        request: Self::Request,
        timeout: Duration,
    ) -> Result<Self::Response, RpcCallerError>
    where
        C: RpcServiceCallerInterface + Send + Sync,
    {
        call_unary_rpc::<T, C>(rpc_client, request, Some(timeout)).await
    }
}
