//! Domain layer constants
//!
//! Index layout and aggregation limits shared by every adapter. Transport
//! and configuration constants live with the providers and infrastructure.

// ============================================================================
// INDEX CONSTANTS
// ============================================================================

/// Default name of the index holding category items
pub const INDEX_CATEGORY_ITEM: &str = "category-item";

/// Document field holding the item identifier
pub const FIELD_ID: &str = "id";

/// Document field holding the main category
pub const FIELD_MAIN: &str = "main";

/// Document field holding the optional sub-category
pub const FIELD_SUB: &str = "sub";

// ============================================================================
// AGGREGATION CONSTANTS
// ============================================================================

/// Name of the outer terms aggregation (per main category)
pub const AGG_CATEGORIES: &str = "categories";

/// Name of the inner terms aggregation (per sub-category)
pub const AGG_SUB_CATEGORIES: &str = "subCategories";

/// Maximum number of main categories returned, ranked by document count
pub const MAX_MAIN_CATEGORIES: u32 = 50;

/// Maximum number of sub-categories returned per main category, ranked by key
pub const MAX_SUB_CATEGORIES: u32 = 100;
