//! Small helpers shared across the crate: hex dumps and timeout values.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
