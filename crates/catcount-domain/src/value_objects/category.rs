//! Category Count Value Objects
//!
//! Results of the two-level category aggregation.

use serde::{Deserialize, Serialize};

/// Value Object: Main Category Count
///
/// One outer bucket of the category aggregation.
///
/// ## Business Rules
///
/// - `count` is the number of items with this main category, including
///   items that carry no sub-category
/// - `sub_categories` is ordered by category name ascending
///
/// ## Example
///
/// ```rust
/// use catcount_domain::value_objects::{MainCategory, SubCategory};
///
/// let main = MainCategory {
///     category: "main1".to_string(),
///     count: 3,
///     sub_categories: vec![
///         SubCategory { category: "sub1".to_string(), count: 1 },
///         SubCategory { category: "sub2".to_string(), count: 2 },
///     ],
/// };
/// assert_eq!(main.sub_category("sub2").map(|s| s.count), Some(2));
/// assert_eq!(main.uncategorized_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCategory {
    /// Main category name
    pub category: String,
    /// Number of items in this main category
    pub count: u64,
    /// Sub-category counts, ordered by name
    pub sub_categories: Vec<SubCategory>,
}

impl MainCategory {
    /// Find a sub-category by name
    pub fn sub_category(&self, category: &str) -> Option<&SubCategory> {
        self.sub_categories
            .iter()
            .find(|sub| sub.category == category)
    }

    /// Items of this main category not represented in any returned sub-category bucket
    ///
    /// Covers items without a sub-category and those in truncated sub-category buckets.
    pub fn uncategorized_count(&self) -> u64 {
        let in_buckets: u64 = self.sub_categories.iter().map(|sub| sub.count).sum();
        self.count.saturating_sub(in_buckets)
    }
}

/// Value Object: Sub-Category Count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    /// Sub-category name
    pub category: String,
    /// Number of items with this sub-category
    pub count: u64,
}
