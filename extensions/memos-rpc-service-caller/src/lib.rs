mod caller_interface;
pub use caller_interface::*;

pub mod error;
pub use error::RpcCallerError;

mod unary;
pub use unary::*;

mod with_dispatcher_trait;
pub use with_dispatcher_trait::*;
