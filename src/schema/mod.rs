pub mod dependencies;
pub mod mechanics;
pub mod types;

pub use dependencies::*;
pub use mechanics::*;
pub use types::*;
