//! Read-only presentation of affiliate data

mod stats;

pub use stats::*;
