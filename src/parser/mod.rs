pub mod fields;
pub mod record;

pub use fields::*;
pub use record::*;
