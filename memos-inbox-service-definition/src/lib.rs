//! Contract for the `memos.api.v2.InboxService`: the record types, the
//! three unary method definitions, the server trait with UNIMPLEMENTED
//! defaults, and a thin client proxy. Everything here is transport-
//! agnostic; pair it with an endpoint and a caller implementation to get a
//! working service.

pub mod types;
pub mod unary;

mod client;
pub use client::*;
mod server;
pub use server::*;

/// Wire-level service namespace every inbox method name is qualified
/// under.
pub const INBOX_SERVICE_NAME: &str = "memos.api.v2.InboxService";
