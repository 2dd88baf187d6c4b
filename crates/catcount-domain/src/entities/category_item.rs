//! Category Item Entity

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Entity: Category Item
///
/// One tagged item as stored in the search index. The `id` doubles as the
/// document key, so saving two items with the same `id` leaves a single
/// document behind.
///
/// ## Business Rules
///
/// - `id` must be non-empty; `main` may be any string, including `""`
/// - `sub` is optional; an item without one still counts toward its main category
///
/// ## Example
///
/// ```rust
/// use catcount_domain::entities::CategoryItem;
///
/// let tagged = CategoryItem::new("1", "main1", Some("sub1"));
/// let untagged = CategoryItem::main_only("4", "mainOnly");
/// assert_eq!(tagged.sub.as_deref(), Some("sub1"));
/// assert!(untagged.sub.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// Unique document key
    pub id: String,
    /// Main category
    pub main: String,
    /// Optional sub-category within `main`
    pub sub: Option<String>,
}

impl CategoryItem {
    /// Create a category item
    pub fn new<I, M, S>(id: I, main: M, sub: Option<S>) -> Self
    where
        I: Into<String>,
        M: Into<String>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            main: main.into(),
            sub: sub.map(Into::into),
        }
    }

    /// Create a category item without a sub-category
    pub fn main_only<I: Into<String>, M: Into<String>>(id: I, main: M) -> Self {
        Self {
            id: id.into(),
            main: main.into(),
            sub: None,
        }
    }

    /// Check that the item can address a document before it is written
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::invalid_argument("category item id cannot be empty"));
        }
        Ok(())
    }
}
