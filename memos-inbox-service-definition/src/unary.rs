mod delete_inbox;
mod list_inbox;
mod update_inbox;

pub use delete_inbox::DeleteInbox;
pub use list_inbox::ListInbox;
pub use update_inbox::UpdateInbox;
