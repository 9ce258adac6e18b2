use xxhash_rust::const_xxh3::xxh3_64 as const_xxh3_64;

/// Hashes a fully-qualified method name (e.g.
/// `"memos.api.v2.InboxService/ListInbox"`) to the `u64` key routing
/// tables are indexed by. The name itself is what travels on the wire;
/// the hash never leaves the process.
pub const fn method_key_hash(full_method_name: &str) -> u64 {
    const_xxh3_64(full_method_name.as_bytes())
}

/// Compile-time method key generator using xxHash3.
///
/// Computes a deterministic `u64` from a method-name literal at **compile
/// time**. The hash is:
///
/// - **Fast** (no runtime cost)
/// - **Deterministic** (same on all platforms)
/// - **Statically embeddable** (usable in `const` contexts)
///
/// ## Example
///
/// ```rust,no_run
/// use memos_rpc_service::rpc_method_key;
/// let list = rpc_method_key!("memos.api.v2.InboxService/ListInbox");
/// let delete = rpc_method_key!("memos.api.v2.InboxService/DeleteInbox");
/// assert_ne!(list, delete);
/// ```
#[macro_export]
macro_rules! rpc_method_key {
    ($name:literal) => {{
        const KEY: u64 = $crate::method_key_hash($name);
        KEY
    }};
}
