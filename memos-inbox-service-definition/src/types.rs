//! Record types exchanged across the call boundary. They are constructed
//! by the caller, passed by value, and discarded when the call completes;
//! the contract layer never interprets their fields.

use bitcode::{Decode, Encode};

/// Read state of a single inbox entry.
#[derive(Encode, Decode, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InboxStatus {
    Unspecified,
    Unread,
    Archived,
}

/// A single inbox entry.
#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct Inbox {
    /// Resource name, e.g. `inboxes/42`.
    pub name: String,
    /// Resource name of the sending user.
    pub sender: String,
    /// Resource name of the receiving user.
    pub receiver: String,
    pub status: InboxStatus,
    /// Creation time in microseconds since the UNIX epoch.
    pub create_time_micros: u64,
    /// Id of the activity that produced this entry, if any.
    pub activity_id: Option<u32>,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct ListInboxRequest {
    /// Resource name of the receiving user whose entries are listed.
    pub user: String,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct ListInboxResponse {
    pub inboxes: Vec<Inbox>,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct UpdateInboxRequest {
    pub inbox: Inbox,
    /// Field paths of `inbox` to apply, e.g. `["status"]`.
    pub update_mask: Vec<String>,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct UpdateInboxResponse {
    pub inbox: Inbox,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct DeleteInboxRequest {
    /// Resource name of the entry to delete.
    pub name: String,
}

#[derive(Encode, Decode, Clone, Debug, PartialEq, Default)]
pub struct DeleteInboxResponse {}
