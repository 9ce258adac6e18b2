use crate::types::{ListInboxRequest, ListInboxResponse};
use memos_rpc_service::RpcMethodUnary;
use std::io;

/// Lists the inbox entries addressed to one user.
pub struct ListInbox;

impl RpcMethodUnary for ListInbox {
    const METHOD_NAME: &'static str = "memos.api.v2.InboxService/ListInbox";

    type Request = ListInboxRequest;
    type Response = ListInboxResponse;

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
