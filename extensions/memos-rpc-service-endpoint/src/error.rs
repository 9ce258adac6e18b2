use std::fmt;
use std::io;

/// Errors the endpoint reports back to the hosting transport.
///
/// Payload-level failures never show up here: a request whose *payload*
/// cannot be decoded is answered with an INVALID_ARGUMENT response on the
/// wire. Only frames with no usable correlation id, plus registration-time
/// problems, surface as endpoint errors.
#[derive(Debug)]
pub enum RpcServiceEndpointError {
    /// An inbound frame could not be decoded as a request envelope.
    Decode(io::Error),
    /// A handler could not be registered (e.g. duplicate method name).
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for RpcServiceEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcServiceEndpointError::Decode(e) => write!(f, "frame decode error: {}", e),
            RpcServiceEndpointError::Handler(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl std::error::Error for RpcServiceEndpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcServiceEndpointError::Decode(e) => Some(e),
            RpcServiceEndpointError::Handler(e) => Some(e.as_ref()),
        }
    }
}

impl From<io::Error> for RpcServiceEndpointError {
    fn from(err: io::Error) -> Self {
        RpcServiceEndpointError::Decode(err)
    }
}
