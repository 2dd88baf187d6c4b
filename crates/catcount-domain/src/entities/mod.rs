//! Domain Entities
//!
//! Entities are written by callers and persisted by a repository.
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CategoryItem`] | An item tagged with a main category and an optional sub-category |

/// Category item entity
pub mod category_item;

pub use category_item::CategoryItem;
