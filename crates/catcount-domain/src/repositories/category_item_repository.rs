//! Category Item Repository Interface

use crate::entities::CategoryItem;
use crate::error::Result;
use crate::value_objects::MainCategory;
use async_trait::async_trait;

/// Repository: Category Items and Their Counts
///
/// Writes are upserts keyed by item id and only become visible to
/// [`get_categories_count`](CategoryItemRepository::get_categories_count)
/// once the backing index has been refreshed.
///
/// # Example
///
/// ```ignore
/// use catcount_domain::entities::CategoryItem;
/// use catcount_domain::repositories::CategoryItemRepository;
///
/// repo.save(&CategoryItem::new("1", "main1", Some("sub1"))).await?;
/// repo.save(&CategoryItem::main_only("2", "mainOnly")).await?;
///
/// // after a refresh
/// for main in repo.get_categories_count().await? {
///     println!("{}: {}", main.category, main.count);
///     for sub in &main.sub_categories {
///         println!("  {}: {}", sub.category, sub.count);
///     }
/// }
/// ```
#[async_trait]
pub trait CategoryItemRepository: Send + Sync {
    /// Create or replace the document for `item`
    ///
    /// # Errors
    /// Invalid items are rejected before any I/O. Transport, serialization
    /// and engine failures are returned unchanged; nothing is retried.
    async fn save(&self, item: &CategoryItem) -> Result<()>;

    /// Count items per main category and per sub-category within each
    ///
    /// # Returns
    /// At most 50 main categories ordered by descending count, each with at
    /// most 100 sub-categories ordered by name. Anything beyond those limits
    /// is dropped.
    async fn get_categories_count(&self) -> Result<Vec<MainCategory>>;
}
