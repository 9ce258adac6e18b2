mod generate_u32_id;
mod now;

pub use generate_u32_id::generate_u32_id;
pub use now::now;
