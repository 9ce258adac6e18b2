mod endpoint;
pub use endpoint::*;

mod endpoint_interface;
pub use endpoint_interface::*;

pub mod error;

mod interceptor;
pub use interceptor::*;

mod with_routes_trait;
pub use with_routes_trait::*;
