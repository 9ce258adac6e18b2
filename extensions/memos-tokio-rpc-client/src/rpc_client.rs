use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use memos_rpc::rpc::RpcDispatcher;
use memos_rpc_service_caller::RpcServiceCallerInterface;
use std::io;
use std::sync::Arc;
use tokio::sync::{
    Mutex,
    mpsc::{self, unbounded_channel},
};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message as WsMessage};

/// A WebSocket RPC client backed by a Tokio runtime.
///
/// The client owns a send loop, a receive loop, and a shared dispatcher
/// that completes in-flight calls as response frames arrive. When the
/// connection drops, every in-flight call is aborted rather than left
/// hanging.
pub struct RpcClient {
    dispatcher: Arc<Mutex<RpcDispatcher>>,
    tx: mpsc::UnboundedSender<WsMessage>,
}

impl RpcClient {
    /// Connects to a WebSocket RPC server, e.g. `ws://127.0.0.1:8080/ws`.
    pub async fn new(websocket_address: &str) -> Result<RpcClient, io::Error> {
        let (ws_stream, _) = connect_async(websocket_address)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;
        let (mut sender, mut receiver) = ws_stream.split();

        let (tx, mut rx) = unbounded_channel::<WsMessage>();
        let dispatcher = Arc::new(Mutex::new(RpcDispatcher::new()));

        // Send loop
        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        // Receive loop. When the stream ends, abort whatever is still in
        // flight so callers observe the disconnect instead of waiting
        // forever.
        let dispatcher_handle = dispatcher.clone();
        tokio::spawn(async move {
            while let Some(msg) = receiver.next().await {
                match msg {
                    Ok(WsMessage::Binary(bytes)) => {
                        if let Err(err) = dispatcher_handle.lock().await.read_bytes(&bytes) {
                            tracing::warn!("Failed to read response frame: {err}");
                        }
                    }
                    Ok(WsMessage::Close(_)) => break,
                    Ok(_) => {} // Ping/Pong are handled by the protocol layer.
                    Err(err) => {
                        tracing::warn!("WebSocket receive error: {err}");
                        break;
                    }
                }
            }
            let aborted = dispatcher_handle.lock().await.fail_all_pending();
            if aborted > 0 {
                tracing::warn!("Aborted {aborted} in-flight call(s) on disconnect");
            }
        });

        Ok(RpcClient { dispatcher, tx })
    }
}

#[async_trait::async_trait]
impl RpcServiceCallerInterface for RpcClient {
    type DispatcherLock = Mutex<RpcDispatcher>;

    fn get_dispatcher(&self) -> Arc<Self::DispatcherLock> {
        self.dispatcher.clone()
    }

    fn get_emit_fn(&self) -> Arc<dyn Fn(Vec<u8>) + Send + Sync> {
        let tx = self.tx.clone();
        Arc::new(move |bytes: Vec<u8>| {
            let _ = tx.send(WsMessage::Binary(Bytes::from(bytes)));
        })
    }
}
