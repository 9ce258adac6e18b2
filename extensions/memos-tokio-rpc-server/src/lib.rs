mod rpc_server;
pub use rpc_server::{RpcServer, WsSenderContext};

pub use memos_rpc_service_endpoint::RpcServiceEndpointInterface;

pub mod utils;
