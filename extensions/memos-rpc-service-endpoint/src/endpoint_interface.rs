use super::error::RpcServiceEndpointError;
use super::interceptor::{Next, RpcInterceptor, UnaryCallInfo};
use super::with_routes_trait::{WithInterceptors, WithRoutes};
use memos_rpc::rpc::{CallContext, RpcError, RpcRequestEnvelope, RpcResponseEnvelope};
use memos_rpc_service::{UnaryHandler, method_key_hash};
use std::collections::hash_map::Entry;
use std::future::Future;
use std::sync::Arc;

use super::endpoint::RouteEntry;

#[async_trait::async_trait]
pub trait RpcServiceEndpointInterface<C>: Send + Sync
where
    C: Send + Sync + Clone + 'static,
{
    type RoutesLock: WithRoutes<C>;
    type InterceptorsLock: WithInterceptors;

    fn get_routes(&self) -> Arc<Self::RoutesLock>;

    fn get_interceptors(&self) -> Arc<Self::InterceptorsLock>;

    /// Registers one unary handler under its wire-level method name.
    /// Registering the same name twice is an error.
    async fn register_unary<F, Fut>(
        &self,
        full_method_name: &'static str,
        handler: F,
    ) -> Result<(), RpcServiceEndpointError>
    where
        F: Fn(CallContext, C, Vec<u8>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<u8>, RpcError>> + Send + 'static,
    {
        let wrapped: UnaryHandler<C> = Arc::new(move |ctx: CallContext, conn: C, bytes: Vec<u8>| {
            Box::pin(handler(ctx, conn, bytes))
                as std::pin::Pin<Box<dyn Future<Output = _> + Send>>
        });
        self.register_unary_handler(full_method_name, wrapped).await
    }

    /// Registers an already-erased handler. Service descriptors land here.
    async fn register_unary_handler(
        &self,
        full_method_name: &'static str,
        handler: UnaryHandler<C>,
    ) -> Result<(), RpcServiceEndpointError> {
        let method_key = method_key_hash(full_method_name);
        self.get_routes()
            .with_routes(|routes| match routes.entry(method_key) {
                Entry::Occupied(_) => {
                    let err_msg =
                        format!("a handler for method {full_method_name} is already registered");
                    Err(RpcServiceEndpointError::Handler(err_msg.into()))
                }
                Entry::Vacant(entry) => {
                    entry.insert(RouteEntry {
                        full_method_name,
                        handler,
                    });
                    Ok(())
                }
            })
            .await
    }

    /// Appends an interceptor to the chain wrapping every dispatched call.
    /// Interceptors run in the order they were added.
    async fn add_interceptor(&self, interceptor: Arc<dyn RpcInterceptor>) {
        self.get_interceptors()
            .with_interceptors(|chain| chain.push(interceptor))
            .await;
    }

    /// Reads one request envelope from the transport, dispatches it, and
    /// emits exactly one response envelope through `on_emit`.
    ///
    /// A frame that does not decode as a request envelope carries no
    /// correlation id to answer on, so it is returned to the transport as
    /// an error instead of producing a response.
    async fn read_bytes<E>(
        &self,
        conn_context: C,
        bytes: &[u8],
        on_emit: E,
    ) -> Result<(), RpcServiceEndpointError>
    where
        E: Fn(&[u8]) + Send + Sync,
    {
        let request =
            RpcRequestEnvelope::decode(bytes).map_err(RpcServiceEndpointError::Decode)?;
        let response = self.dispatch_request(conn_context, request).await;
        on_emit(&response.encode());
        Ok(())
    }

    /// Routes one decoded request envelope and folds the outcome into a
    /// response envelope. Sequencing within the call is strict: context
    /// checks, then the interceptor chain, then the handler's own
    /// decode → invoke → encode.
    async fn dispatch_request(
        &self,
        conn_context: C,
        request: RpcRequestEnvelope,
    ) -> RpcResponseEnvelope {
        let call_id = request.call_id;
        let ctx = CallContext::from_deadline(request.deadline_micros);

        let method_key = method_key_hash(&request.method);
        let route = self
            .get_routes()
            .with_routes(|routes| routes.get(&method_key).cloned())
            .await;

        let Some(route) = route else {
            tracing::warn!("No route for method {}", request.method);
            return RpcResponseEnvelope::failure(
                call_id,
                &RpcError::not_found(format!("method {} is not registered", request.method)),
            );
        };

        if let Err(err) = ctx.check() {
            return RpcResponseEnvelope::failure(call_id, &err);
        }

        let info = UnaryCallInfo {
            full_method_name: route.full_method_name,
            method_key,
        };
        let interceptors = self
            .get_interceptors()
            .with_interceptors(|chain| chain.clone())
            .await;

        let handler = route.handler.clone();
        let terminal = move |ctx: CallContext, payload: Vec<u8>| {
            handler(ctx, conn_context.clone(), payload)
        };

        let result = Next {
            chain: &interceptors,
            info: &info,
            terminal: &terminal,
        }
        .run(ctx, request.payload)
        .await;

        match result {
            Ok(payload) => RpcResponseEnvelope::success(call_id, payload),
            Err(err) => {
                tracing::trace!("Method {} failed: {}", info.full_method_name, err);
                RpcResponseEnvelope::failure(call_id, &err)
            }
        }
    }
}
