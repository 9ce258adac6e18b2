use memos_rpc::rpc::RpcError;
use std::fmt;
use std::io;

/// Errors that can occur during an RPC call from the perspective of the
/// caller.
#[derive(Debug)]
pub enum RpcCallerError {
    /// A codec or transport-level I/O failure on this side of the wire.
    Io(io::Error),
    /// The remote endpoint answered with a non-OK status. Application
    /// errors arrive here unchanged, status code and message intact.
    Remote(RpcError),
    /// The transport dropped before a response arrived.
    Aborted,
}

impl fmt::Display for RpcCallerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcCallerError::Io(e) => write!(f, "I/O error: {}", e),
            RpcCallerError::Remote(e) => write!(f, "remote error: {}", e),
            RpcCallerError::Aborted => write!(f, "RPC call aborted"),
        }
    }
}

impl std::error::Error for RpcCallerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcCallerError::Io(e) => Some(e),
            RpcCallerError::Remote(e) => Some(e),
            RpcCallerError::Aborted => None,
        }
    }
}

impl From<io::Error> for RpcCallerError {
    fn from(e: io::Error) -> Self {
        RpcCallerError::Io(e)
    }
}

impl From<RpcError> for RpcCallerError {
    fn from(e: RpcError) -> Self {
        RpcCallerError::Remote(e)
    }
}
