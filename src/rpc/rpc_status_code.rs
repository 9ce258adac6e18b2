use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Closed set of call-outcome classifiers, carried out-of-band from the
/// response payload. Discriminants follow gRPC status numbering.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum RpcStatusCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    Unauthenticated = 16,
}

impl RpcStatusCode {
    /// Wire-level spelling of the status, e.g. `UNIMPLEMENTED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcStatusCode::Ok => "OK",
            RpcStatusCode::Cancelled => "CANCELLED",
            RpcStatusCode::Unknown => "UNKNOWN",
            RpcStatusCode::InvalidArgument => "INVALID_ARGUMENT",
            RpcStatusCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            RpcStatusCode::NotFound => "NOT_FOUND",
            RpcStatusCode::Unimplemented => "UNIMPLEMENTED",
            RpcStatusCode::Internal => "INTERNAL",
            RpcStatusCode::Unavailable => "UNAVAILABLE",
            RpcStatusCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, RpcStatusCode::Ok)
    }
}
