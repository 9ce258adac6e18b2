use memos_rpc::rpc::{CallContext, RpcStatusCode};
use memos_rpc::utils::now;
use std::time::Duration;

#[test]
fn test_fresh_context_allows_work() {
    let ctx = CallContext::new();
    assert!(!ctx.is_cancelled());
    assert!(!ctx.is_deadline_exceeded());
    assert_eq!(ctx.deadline_micros(), None);
    assert!(ctx.check().is_ok());
}

#[test]
fn test_cancellation_is_shared_across_clones() {
    let ctx = CallContext::new();
    let clone = ctx.clone();

    clone.cancel();

    assert!(ctx.is_cancelled());
    let err = ctx.check().unwrap_err();
    assert_eq!(err.code, RpcStatusCode::Cancelled);
}

#[test]
fn test_expired_deadline_is_reported() {
    let ctx = CallContext::with_deadline_micros(1);
    assert!(ctx.is_deadline_exceeded());

    let err = ctx.check().unwrap_err();
    assert_eq!(err.code, RpcStatusCode::DeadlineExceeded);
}

#[test]
fn test_with_timeout_sets_future_deadline() {
    let ctx = CallContext::with_timeout(Duration::from_secs(60));
    let deadline = ctx.deadline_micros().unwrap();
    assert!(deadline > now());
    assert!(ctx.check().is_ok());
}

#[test]
fn test_cancellation_wins_over_expired_deadline() {
    let ctx = CallContext::with_deadline_micros(1);
    ctx.cancel();

    let err = ctx.check().unwrap_err();
    assert_eq!(err.code, RpcStatusCode::Cancelled);
}
