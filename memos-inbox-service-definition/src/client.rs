use crate::types::{
    DeleteInboxRequest, DeleteInboxResponse, ListInboxRequest, ListInboxResponse,
    UpdateInboxRequest, UpdateInboxResponse,
};
use crate::unary::{DeleteInbox, ListInbox, UpdateInbox};
use memos_rpc_service_caller::{RpcCallUnary, RpcCallerError, RpcServiceCallerInterface};

/// Thin client proxy for the inbox service over any caller transport.
///
/// Each method encodes its request record, performs the unary call, and
/// decodes the response record — the exact inverse of the server path.
/// The proxy holds no state beyond the borrowed caller, so it can be
/// created per call site.
pub struct InboxServiceClient<'a, C>
where
    C: RpcServiceCallerInterface,
{
    caller: &'a C,
}

impl<'a, C> InboxServiceClient<'a, C>
where
    C: RpcServiceCallerInterface + Send + Sync,
{
    pub fn new(caller: &'a C) -> Self {
        InboxServiceClient { caller }
    }

    pub async fn list_inbox(
        &self,
        request: ListInboxRequest,
    ) -> Result<ListInboxResponse, RpcCallerError> {
        ListInbox::call(self.caller, request).await
    }

    pub async fn update_inbox(
        &self,
        request: UpdateInboxRequest,
    ) -> Result<UpdateInboxResponse, RpcCallerError> {
        UpdateInbox::call(self.caller, request).await
    }

    pub async fn delete_inbox(
        &self,
        request: DeleteInboxRequest,
    ) -> Result<DeleteInboxResponse, RpcCallerError> {
        DeleteInbox::call(self.caller, request).await
    }
}
