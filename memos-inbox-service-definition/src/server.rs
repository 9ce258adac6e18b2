use crate::types::{
    DeleteInboxRequest, DeleteInboxResponse, ListInboxRequest, ListInboxResponse,
    UpdateInboxRequest, UpdateInboxResponse,
};
use crate::unary::{DeleteInbox, ListInbox, UpdateInbox};
use memos_rpc::rpc::{CallContext, RpcError};
use memos_rpc_service::{
    MethodDescriptor, RpcMethodUnary, ServiceDescriptor, ServiceRegistrar, UnaryHandler,
};
use std::future::Future;
use std::sync::Arc;

/// Server-side contract for the inbox service.
///
/// Every method has a default body answering UNIMPLEMENTED, so a partial
/// implementation registers cleanly and advertises its gaps explicitly
/// instead of failing silently.
#[async_trait::async_trait]
pub trait InboxServiceServer: Send + Sync + 'static {
    async fn list_inbox(
        &self,
        ctx: &CallContext,
        request: ListInboxRequest,
    ) -> Result<ListInboxResponse, RpcError> {
        let _ = (ctx, request);
        Err(RpcError::unimplemented("method ListInbox not implemented"))
    }

    async fn update_inbox(
        &self,
        ctx: &CallContext,
        request: UpdateInboxRequest,
    ) -> Result<UpdateInboxResponse, RpcError> {
        let _ = (ctx, request);
        Err(RpcError::unimplemented("method UpdateInbox not implemented"))
    }

    async fn delete_inbox(
        &self,
        ctx: &CallContext,
        request: DeleteInboxRequest,
    ) -> Result<DeleteInboxResponse, RpcError> {
        let _ = (ctx, request);
        Err(RpcError::unimplemented("method DeleteInbox not implemented"))
    }
}

fn list_inbox_route<S, C>(server: Arc<S>) -> MethodDescriptor<C>
where
    S: InboxServiceServer,
    C: Send + Sync + Clone + 'static,
{
    let handler: UnaryHandler<C> = Arc::new(move |ctx: CallContext, _conn: C, payload: Vec<u8>| {
        let server = server.clone();
        Box::pin(async move {
            let request = ListInbox::decode_request(&payload)
                .map_err(|e| RpcError::invalid_argument(format!("malformed ListInbox request: {e}")))?;
            let response = server.list_inbox(&ctx, request).await?;
            ListInbox::encode_response(response)
                .map_err(|e| RpcError::internal(format!("failed to encode ListInbox response: {e}")))
        }) as std::pin::Pin<Box<dyn Future<Output = _> + Send>>
    });
    MethodDescriptor {
        full_method_name: ListInbox::METHOD_NAME,
        handler,
    }
}

fn update_inbox_route<S, C>(server: Arc<S>) -> MethodDescriptor<C>
where
    S: InboxServiceServer,
    C: Send + Sync + Clone + 'static,
{
    let handler: UnaryHandler<C> = Arc::new(move |ctx: CallContext, _conn: C, payload: Vec<u8>| {
        let server = server.clone();
        Box::pin(async move {
            let request = UpdateInbox::decode_request(&payload)
                .map_err(|e| RpcError::invalid_argument(format!("malformed UpdateInbox request: {e}")))?;
            let response = server.update_inbox(&ctx, request).await?;
            UpdateInbox::encode_response(response)
                .map_err(|e| RpcError::internal(format!("failed to encode UpdateInbox response: {e}")))
        }) as std::pin::Pin<Box<dyn Future<Output = _> + Send>>
    });
    MethodDescriptor {
        full_method_name: UpdateInbox::METHOD_NAME,
        handler,
    }
}

fn delete_inbox_route<S, C>(server: Arc<S>) -> MethodDescriptor<C>
where
    S: InboxServiceServer,
    C: Send + Sync + Clone + 'static,
{
    let handler: UnaryHandler<C> = Arc::new(move |ctx: CallContext, _conn: C, payload: Vec<u8>| {
        let server = server.clone();
        Box::pin(async move {
            let request = DeleteInbox::decode_request(&payload)
                .map_err(|e| RpcError::invalid_argument(format!("malformed DeleteInbox request: {e}")))?;
            let response = server.delete_inbox(&ctx, request).await?;
            DeleteInbox::encode_response(response)
                .map_err(|e| RpcError::internal(format!("failed to encode DeleteInbox response: {e}")))
        }) as std::pin::Pin<Box<dyn Future<Output = _> + Send>>
    });
    MethodDescriptor {
        full_method_name: DeleteInbox::METHOD_NAME,
        handler,
    }
}

/// Builds the inbox service's method table over `server`.
///
/// Each entry decodes the raw request record, invokes the corresponding
/// trait method, and encodes the response record. Decode failures answer
/// INVALID_ARGUMENT; encode failures answer INTERNAL; everything the
/// implementation returns passes through unchanged.
pub fn inbox_service_descriptor<S, C>(server: Arc<S>) -> ServiceDescriptor<C>
where
    S: InboxServiceServer,
    C: Send + Sync + Clone + 'static,
{
    ServiceDescriptor {
        service_name: crate::INBOX_SERVICE_NAME,
        methods: vec![
            list_inbox_route(server.clone()),
            update_inbox_route(server.clone()),
            delete_inbox_route(server),
        ],
    }
}

/// Registers the inbox service's method table against any registrar.
pub async fn register_inbox_service<R, S, C>(registrar: &R, server: Arc<S>) -> Result<(), R::Error>
where
    R: ServiceRegistrar<C>,
    S: InboxServiceServer,
    C: Send + Sync + Clone + 'static,
{
    registrar
        .register_service(inbox_service_descriptor(server))
        .await
}
