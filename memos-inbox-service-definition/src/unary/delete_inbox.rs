use crate::types::{DeleteInboxRequest, DeleteInboxResponse};
use memos_rpc_service::RpcMethodUnary;
use std::io;

/// Deletes one inbox entry by resource name.
pub struct DeleteInbox;

impl RpcMethodUnary for DeleteInbox {
    const METHOD_NAME: &'static str = "memos.api.v2.InboxService/DeleteInbox";

    type Request = DeleteInboxRequest;
    type Response = DeleteInboxResponse;

    fn encode_request(request: Self::Request) -> Result<Vec<u8>, io::Error> {
        Ok(bitcode::encode(&request))
    }

    fn decode_request(bytes: &[u8]) -> Result<Self::Request, io::Error> {
        bitcode::decode(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn encode_response(response: Self::Response) -> Result<Vec<u8>, io::Error> {
        Ok(bitcode::encode(&response))
    }

    fn decode_response(bytes: &[u8]) -> Result<Self::Response, io::Error> {
        bitcode::decode(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
