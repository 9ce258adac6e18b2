//! Core plumbing for transport-agnostic unary RPC: status codes, typed
//! call errors, wire envelopes, call-scoped context, and client-side call
//! correlation. Transports move opaque byte frames; everything above the
//! frame lives here or in the extension crates.

pub mod rpc;
pub mod utils;
