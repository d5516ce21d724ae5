//! Data models shared with the affiliate service

pub mod affiliate;
pub mod serde_helpers;

pub use affiliate::*;
