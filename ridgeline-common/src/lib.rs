//! Plain data types shared between the ridgeline library and binary.

mod types;

pub use types::*;
