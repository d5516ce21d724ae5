//! Affiliate Pricing Module
//!
//! Discount/commission calculation and the rules a configuration must
//! satisfy before it is saved.

mod engine;
mod validation;

pub use engine::*;
pub use validation::*;
