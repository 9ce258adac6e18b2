use memos_rpc::rpc::{RpcDispatcher, RpcRequestEnvelope, RpcResponseEnvelope, RpcStatusCode};

#[tokio::test]
async fn test_start_call_registers_pending_and_encodes_envelope() {
    let mut dispatcher = RpcDispatcher::new();

    let (bytes, _rx) = dispatcher.start_call(
        "memos.api.v2.InboxService/DeleteInbox",
        None,
        vec![4, 5],
    );
    assert_eq!(dispatcher.pending_calls(), 1);

    let request = RpcRequestEnvelope::decode(&bytes).unwrap();
    assert_eq!(request.method, "memos.api.v2.InboxService/DeleteInbox");
    assert_eq!(request.payload, vec![4, 5]);
    assert_eq!(request.deadline_micros, None);
}

#[tokio::test]
async fn test_read_bytes_completes_matching_call() {
    let mut dispatcher = RpcDispatcher::new();
    let (bytes, rx) = dispatcher.start_call("svc/Method", None, vec![]);
    let request = RpcRequestEnvelope::decode(&bytes).unwrap();

    let response = RpcResponseEnvelope::success(request.call_id, vec![42]);
    let completed_id = dispatcher.read_bytes(&response.encode()).unwrap();
    assert_eq!(completed_id, request.call_id);
    assert_eq!(dispatcher.pending_calls(), 0);

    let received = rx.await.unwrap();
    assert_eq!(received.status_code(), RpcStatusCode::Ok);
    assert_eq!(received.payload, vec![42]);
}

#[tokio::test]
async fn test_interleaved_responses_pair_up_by_call_id() {
    let mut dispatcher = RpcDispatcher::new();
    let (bytes_a, rx_a) = dispatcher.start_call("svc/A", None, vec![]);
    let (bytes_b, rx_b) = dispatcher.start_call("svc/B", None, vec![]);

    let id_a = RpcRequestEnvelope::decode(&bytes_a).unwrap().call_id;
    let id_b = RpcRequestEnvelope::decode(&bytes_b).unwrap().call_id;

    // Complete B before A.
    dispatcher
        .read_bytes(&RpcResponseEnvelope::success(id_b, vec![2]).encode())
        .unwrap();
    dispatcher
        .read_bytes(&RpcResponseEnvelope::success(id_a, vec![1]).encode())
        .unwrap();

    assert_eq!(rx_a.await.unwrap().payload, vec![1]);
    assert_eq!(rx_b.await.unwrap().payload, vec![2]);
}

#[tokio::test]
async fn test_response_for_unknown_call_id_is_dropped() {
    let mut dispatcher = RpcDispatcher::new();

    let response = RpcResponseEnvelope::success(u32::MAX, vec![]);
    let call_id = dispatcher.read_bytes(&response.encode()).unwrap();
    assert_eq!(call_id, u32::MAX);
    assert_eq!(dispatcher.pending_calls(), 0);
}

#[tokio::test]
async fn test_read_bytes_rejects_malformed_frame() {
    let mut dispatcher = RpcDispatcher::new();
    assert!(dispatcher.read_bytes(&[]).is_err());
}

#[tokio::test]
async fn test_fail_all_pending_aborts_receivers() {
    let mut dispatcher = RpcDispatcher::new();
    let (_bytes_a, rx_a) = dispatcher.start_call("svc/A", None, vec![]);
    let (_bytes_b, rx_b) = dispatcher.start_call("svc/B", None, vec![]);

    assert_eq!(dispatcher.fail_all_pending(), 2);
    assert_eq!(dispatcher.pending_calls(), 0);

    assert!(rx_a.await.is_err());
    assert!(rx_b.await.is_err());
}
