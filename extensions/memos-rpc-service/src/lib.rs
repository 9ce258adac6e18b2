mod macros;
pub use macros::*;
mod service_descriptor;
pub use service_descriptor::*;
mod unary_method;
pub use unary_method::*;
