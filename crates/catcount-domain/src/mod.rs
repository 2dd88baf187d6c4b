//! # catcount domain
//!
//! Entities, value objects and port traits for counting category items.
//! This crate performs no I/O; adapters in `catcount-providers` implement
//! the ports against a search engine.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | [`CategoryItem`](entities::CategoryItem) |
//! | [`value_objects`] | [`MainCategory`](value_objects::MainCategory), [`SubCategory`](value_objects::SubCategory) |
//! | [`repositories`] | [`CategoryItemRepository`](repositories::CategoryItemRepository) |
//! | [`ports`] | [`SearchIndexAdmin`](ports::SearchIndexAdmin) |

/// Domain constants
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Port interfaces
pub mod ports;
/// Repository interfaces
pub mod repositories;
/// Value objects
pub mod value_objects;

pub use entities::CategoryItem;
pub use error::{Error, Result};
pub use value_objects::{MainCategory, SubCategory};
