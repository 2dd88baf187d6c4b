//! Value Objects
//!
//! Immutable results rebuilt from the search engine on every query.

/// Category count value objects
pub mod category;

pub use category::{MainCategory, SubCategory};
