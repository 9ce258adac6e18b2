use memos_inbox_service_definition::types::{
    DeleteInboxRequest, DeleteInboxResponse, Inbox, InboxStatus, ListInboxRequest,
    ListInboxResponse, UpdateInboxRequest, UpdateInboxResponse,
};
use memos_inbox_service_definition::{InboxServiceClient, InboxServiceServer, register_inbox_service};
use memos_rpc::rpc::{CallContext, RpcError};
use memos_rpc::utils::now;
use memos_tokio_rpc_client::RpcClient;
use memos_tokio_rpc_server::RpcServer;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::join;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Minimal in-memory store backing the demo server. Real deployments
/// would put persistence, pagination, and authorization behind the same
/// trait.
struct InMemoryInboxService {
    entries: Mutex<HashMap<String, Inbox>>,
}

impl InMemoryInboxService {
    fn with_seed_entries() -> Self {
        let mut entries = HashMap::new();
        for (idx, sender) in ["users/alice", "users/bob"].iter().enumerate() {
            let name = format!("inboxes/{}", idx + 1);
            entries.insert(
                name.clone(),
                Inbox {
                    name,
                    sender: sender.to_string(),
                    receiver: "users/steven".to_string(),
                    status: InboxStatus::Unread,
                    create_time_micros: now(),
                    activity_id: Some(idx as u32 + 100),
                },
            );
        }
        InMemoryInboxService {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait::async_trait]
impl InboxServiceServer for InMemoryInboxService {
    async fn list_inbox(
        &self,
        _ctx: &CallContext,
        request: ListInboxRequest,
    ) -> Result<ListInboxResponse, RpcError> {
        let entries = self.entries.lock().await;
        let inboxes = entries
            .values()
            .filter(|inbox| inbox.receiver == request.user)
            .cloned()
            .collect();
        Ok(ListInboxResponse { inboxes })
    }

    async fn update_inbox(
        &self,
        _ctx: &CallContext,
        request: UpdateInboxRequest,
    ) -> Result<UpdateInboxResponse, RpcError> {
        let mut entries = self.entries.lock().await;
        match entries.get_mut(&request.inbox.name) {
            Some(entry) => {
                if request.update_mask.iter().any(|path| path == "status") {
                    entry.status = request.inbox.status;
                }
                Ok(UpdateInboxResponse {
                    inbox: entry.clone(),
                })
            }
            None => Err(RpcError::not_found(format!(
                "inbox {} not found",
                request.inbox.name
            ))),
        }
    }

    async fn delete_inbox(
        &self,
        _ctx: &CallContext,
        request: DeleteInboxRequest,
    ) -> Result<DeleteInboxResponse, RpcError> {
        let mut entries = self.entries.lock().await;
        entries.remove(&request.name);
        Ok(DeleteInboxResponse {})
    }
}

#[tokio::main]
async fn main() {
    // Bind to a random available port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    {
        let server = Arc::new(RpcServer::new());
        let endpoint = server.endpoint();

        let service = Arc::new(InMemoryInboxService::with_seed_entries());
        register_inbox_service(&*endpoint, service).await.unwrap();

        // Spawn the server using the pre-bound listener
        let _server_task = tokio::spawn({
            let server = Arc::clone(&server);
            async move {
                let _ = server.serve_with_listener(listener).await;
            }
        });
    }

    {
        // Wait briefly for server to start
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;

        let rpc_client = RpcClient::new(&format!("ws://{addr}/ws")).await.unwrap();
        let client = InboxServiceClient::new(&rpc_client);

        let listed = client
            .list_inbox(ListInboxRequest {
                user: "users/steven".to_string(),
            })
            .await
            .unwrap();
        println!("Entries for users/steven: {:?}", listed.inboxes);

        let mut archived = listed.inboxes[0].clone();
        archived.status = InboxStatus::Archived;

        // `join!` will await both mutations before proceeding
        let (updated, deleted) = join!(
            client.update_inbox(UpdateInboxRequest {
                inbox: archived,
                update_mask: vec!["status".to_string()],
            }),
            client.delete_inbox(DeleteInboxRequest {
                name: listed.inboxes[1].name.clone(),
            })
        );

        println!("Result from update_inbox(): {:?}", updated);
        println!("Result from delete_inbox(): {:?}", deleted);
    }
}
