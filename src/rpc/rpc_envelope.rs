use super::{RpcError, RpcStatusCode};
use bitcode::{Decode, Encode};
use std::io;

/// Wire record for a single unary request.
///
/// The method identifier travels as the fully-qualified method name (e.g.
/// `memos.api.v2.InboxService/ListInbox`) and must match the remote side
/// byte-for-byte. Exactly one envelope rides each transport message;
/// chunking and reassembly are the transport's job.
#[derive(Encode, Decode, PartialEq, Debug)]
pub struct RpcRequestEnvelope {
    /// Request/response correlation id, unique among this client's
    /// in-flight calls.
    pub call_id: u32,
    pub method: String,
    /// Absolute call deadline in microseconds since the UNIX epoch.
    pub deadline_micros: Option<u64>,
    /// Serialized request record, opaque to this layer.
    pub payload: Vec<u8>,
}

/// Wire record for a single unary response.
#[derive(Encode, Decode, PartialEq, Debug, Clone)]
pub struct RpcResponseEnvelope {
    pub call_id: u32,
    /// Raw status byte; see [`RpcResponseEnvelope::status_code`].
    pub status: u8,
    /// Human-readable error description, empty on success.
    pub message: String,
    /// Serialized response record, empty on failure.
    pub payload: Vec<u8>,
}

impl RpcRequestEnvelope {
    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, io::Error> {
        bitcode::decode(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl RpcResponseEnvelope {
    pub fn success(call_id: u32, payload: Vec<u8>) -> Self {
        RpcResponseEnvelope {
            call_id,
            status: RpcStatusCode::Ok.into(),
            message: String::new(),
            payload,
        }
    }

    pub fn failure(call_id: u32, error: &RpcError) -> Self {
        RpcResponseEnvelope {
            call_id,
            status: error.code.into(),
            message: error.message.clone(),
            payload: Vec::new(),
        }
    }

    /// Status bytes outside the closed enumeration map to
    /// [`RpcStatusCode::Unknown`].
    pub fn status_code(&self) -> RpcStatusCode {
        RpcStatusCode::try_from(self.status).unwrap_or(RpcStatusCode::Unknown)
    }

    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, io::Error> {
        bitcode::decode(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
