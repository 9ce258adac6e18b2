use memos_rpc::rpc::{
    RpcDispatcher, RpcError, RpcRequestEnvelope, RpcResponseEnvelope, RpcStatusCode,
};
use memos_rpc_service::RpcMethodUnary;
use memos_rpc_service_caller::{RpcCallUnary, RpcCallerError, RpcServiceCallerInterface};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Byte-for-byte passthrough method used to exercise the call path.
struct Echo;

impl RpcMethodUnary for Echo {
    const METHOD_NAME: &'static str = "test.EchoService/Echo";

    type Request = Vec<u8>;
    type Response = Vec<u8>;

    fn encode_request(request: Self::Request) -> Result<Vec<u8>, io::Error> {
        Ok(request)
    }

    fn decode_request(bytes: &[u8]) -> Result<Self::Request, io::Error> {
        Ok(bytes.to_vec())
    }

    fn encode_response(response: Self::Response) -> Result<Vec<u8>, io::Error> {
        Ok(response)
    }

    fn decode_response(bytes: &[u8]) -> Result<Self::Response, io::Error> {
        Ok(bytes.to_vec())
    }
}

type RespondFn = Arc<dyn Fn(RpcRequestEnvelope) -> Option<RpcResponseEnvelope> + Send + Sync>;

/// Test double that answers every emitted request in-process: it decodes
/// the outbound envelope, synthesizes a response (or drops the call when
/// the responder returns `None`), and feeds it straight back into the
/// dispatcher.
struct LoopbackCaller {
    dispatcher: Arc<Mutex<RpcDispatcher>>,
    respond: RespondFn,
}

impl LoopbackCaller {
    fn new(respond: RespondFn) -> Self {
        LoopbackCaller {
            dispatcher: Arc::new(Mutex::new(RpcDispatcher::new())),
            respond,
        }
    }
}

#[async_trait::async_trait]
impl RpcServiceCallerInterface for LoopbackCaller {
    type DispatcherLock = Mutex<RpcDispatcher>;

    fn get_dispatcher(&self) -> Arc<Self::DispatcherLock> {
        self.dispatcher.clone()
    }

    fn get_emit_fn(&self) -> Arc<dyn Fn(Vec<u8>) + Send + Sync> {
        let dispatcher = self.dispatcher.clone();
        let respond = self.respond.clone();
        Arc::new(move |bytes: Vec<u8>| {
            let request = RpcRequestEnvelope::decode(&bytes).unwrap();
            let mut dispatcher = dispatcher.lock().unwrap();
            match respond(request) {
                Some(response) => {
                    dispatcher.read_bytes(&response.encode()).unwrap();
                }
                // Simulate the transport dropping mid-call.
                None => {
                    dispatcher.fail_all_pending();
                }
            }
        })
    }
}

#[tokio::test]
async fn test_blanket_call_roundtrips_payload() {
    let caller = LoopbackCaller::new(Arc::new(|request: RpcRequestEnvelope| {
        Some(RpcResponseEnvelope::success(
            request.call_id,
            request.payload,
        ))
    }));

    let response = Echo::call(&caller, b"testing 1 2 3".to_vec()).await.unwrap();
    assert_eq!(response, b"testing 1 2 3".to_vec());
}

#[tokio::test]
async fn test_call_sends_wire_method_name() {
    let seen_method = Arc::new(Mutex::new(String::new()));

    let caller = LoopbackCaller::new(Arc::new({
        let seen_method = seen_method.clone();
        move |request: RpcRequestEnvelope| {
            *seen_method.lock().unwrap() = request.method.clone();
            Some(RpcResponseEnvelope::success(request.call_id, vec![]))
        }
    }));

    Echo::call(&caller, vec![]).await.unwrap();
    assert_eq!(*seen_method.lock().unwrap(), "test.EchoService/Echo");
}

#[tokio::test]
async fn test_remote_error_passes_through_unchanged() {
    let caller = LoopbackCaller::new(Arc::new(|request: RpcRequestEnvelope| {
        Some(RpcResponseEnvelope::failure(
            request.call_id,
            &RpcError::unauthenticated("bad token"),
        ))
    }));

    let result = Echo::call(&caller, vec![]).await;

    match result {
        Err(RpcCallerError::Remote(err)) => {
            assert_eq!(err.code, RpcStatusCode::Unauthenticated);
            assert_eq!(err.message, "bad token");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_drop_surfaces_as_aborted() {
    let caller = LoopbackCaller::new(Arc::new(|_request: RpcRequestEnvelope| None));

    let result = Echo::call(&caller, vec![1]).await;
    assert!(matches!(result, Err(RpcCallerError::Aborted)));
}

#[tokio::test]
async fn test_call_with_timeout_stamps_a_deadline() {
    let seen_deadline = Arc::new(Mutex::new(None));

    let caller = LoopbackCaller::new(Arc::new({
        let seen_deadline = seen_deadline.clone();
        move |request: RpcRequestEnvelope| {
            *seen_deadline.lock().unwrap() = request.deadline_micros;
            Some(RpcResponseEnvelope::success(request.call_id, vec![]))
        }
    }));

    Echo::call_with_timeout(&caller, vec![], Duration::from_secs(5))
        .await
        .unwrap();
    assert!(seen_deadline.lock().unwrap().is_some());

    Echo::call(&caller, vec![]).await.unwrap();
    assert!(seen_deadline.lock().unwrap().is_none());
}
