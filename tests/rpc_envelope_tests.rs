use memos_rpc::rpc::{RpcError, RpcRequestEnvelope, RpcResponseEnvelope, RpcStatusCode};

#[test]
fn test_request_envelope_roundtrip() {
    let envelope = RpcRequestEnvelope {
        call_id: 7,
        method: "memos.api.v2.InboxService/ListInbox".to_string(),
        deadline_micros: Some(1_234_567),
        payload: vec![1, 2, 3],
    };

    let decoded = RpcRequestEnvelope::decode(&envelope.encode()).unwrap();
    assert_eq!(decoded, envelope);
}

#[test]
fn test_response_envelope_roundtrip_without_field_loss() {
    let envelope = RpcResponseEnvelope {
        call_id: 42,
        status: RpcStatusCode::Unauthenticated.into(),
        message: "token expired".to_string(),
        payload: vec![9, 8, 7],
    };

    let decoded = RpcResponseEnvelope::decode(&envelope.encode()).unwrap();
    assert_eq!(decoded, envelope);
    assert_eq!(decoded.status_code(), RpcStatusCode::Unauthenticated);
}

#[test]
fn test_success_and_failure_constructors() {
    let ok = RpcResponseEnvelope::success(1, vec![0xAB]);
    assert_eq!(ok.status_code(), RpcStatusCode::Ok);
    assert!(ok.message.is_empty());
    assert_eq!(ok.payload, vec![0xAB]);

    let err = RpcResponseEnvelope::failure(2, &RpcError::not_found("missing"));
    assert_eq!(err.status_code(), RpcStatusCode::NotFound);
    assert_eq!(err.message, "missing");
    assert!(err.payload.is_empty());
}

#[test]
fn test_unknown_status_byte_maps_to_unknown() {
    let envelope = RpcResponseEnvelope {
        call_id: 3,
        status: 250,
        message: String::new(),
        payload: vec![],
    };
    assert_eq!(envelope.status_code(), RpcStatusCode::Unknown);
}

#[test]
fn test_decode_rejects_truncated_frame() {
    assert!(RpcRequestEnvelope::decode(&[]).is_err());
    assert!(RpcResponseEnvelope::decode(&[]).is_err());
}

#[test]
fn test_status_code_wire_spellings() {
    assert_eq!(RpcStatusCode::Ok.as_str(), "OK");
    assert_eq!(RpcStatusCode::InvalidArgument.as_str(), "INVALID_ARGUMENT");
    assert_eq!(RpcStatusCode::Unimplemented.as_str(), "UNIMPLEMENTED");
    assert_eq!(RpcStatusCode::NotFound.as_str(), "NOT_FOUND");
    assert_eq!(RpcStatusCode::Unauthenticated.as_str(), "UNAUTHENTICATED");
}
