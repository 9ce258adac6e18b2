use std::io;

/// Contract for a single unary RPC method: exactly one request record in,
/// exactly one response record (or one typed error) out.
///
/// Implementations are zero-sized marker types pairing the wire-level
/// method name with the codec for its request and response records. The
/// same definition serves both sides of the wire: callers encode requests
/// and decode responses, endpoints do the inverse.
pub trait RpcMethodUnary {
    /// Fully-qualified wire-level method name, e.g.
    /// `"memos.api.v2.InboxService/DeleteInbox"`. Must match the remote
    /// side byte-for-byte.
    const METHOD_NAME: &'static str;

    /// Routing key derived from [`METHOD_NAME`](Self::METHOD_NAME).
    const METHOD_KEY: u64 = crate::method_key_hash(Self::METHOD_NAME);

    /// The typed request record (e.g. `ListInboxRequest`).
    type Request;

    /// The typed response record (e.g. `ListInboxResponse`).
    type Response;

    /// Encodes the request record into a byte array.
    fn encode_request(request: Self::Request) -> Result<Vec<u8>, io::Error>;

    /// Decodes raw request bytes into the typed request record.
    fn decode_request(bytes: &[u8]) -> Result<Self::Request, io::Error>;

    /// Encodes the response record into a byte array.
    fn encode_response(response: Self::Response) -> Result<Vec<u8>, io::Error>;

    /// Decodes raw response bytes into the typed response record.
    fn decode_response(bytes: &[u8]) -> Result<Self::Response, io::Error>;
}
