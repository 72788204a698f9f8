//! Checks that run once every registry is loaded

pub mod mechanics;
pub mod memberships;
pub mod quota;

pub use mechanics::*;
pub use memberships::*;
pub use quota::*;
