//! Repository Interfaces
//!
//! Interfaces for persisting category items and reading their aggregated
//! counts back, independent of the search engine behind them.
//!
//! ## Repositories
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`CategoryItemRepository`] | Save items and count them per main / sub-category |

/// Category item repository interface
pub mod category_item_repository;

pub use category_item_repository::CategoryItemRepository;
