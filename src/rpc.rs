mod rpc_call_context;
mod rpc_dispatcher;
mod rpc_envelope;
mod rpc_error;
mod rpc_status_code;

pub use rpc_call_context::CallContext;
pub use rpc_dispatcher::RpcDispatcher;
pub use rpc_envelope::{RpcRequestEnvelope, RpcResponseEnvelope};
pub use rpc_error::RpcError;
pub use rpc_status_code::RpcStatusCode;
