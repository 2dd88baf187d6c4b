//! Category item index mapping
//!
//! Every field is an exact-match keyword so the terms aggregations bucket on
//! whole values.

use crate::constants::ES_TYPE_KEYWORD;
use catcount_domain::constants::{FIELD_ID, FIELD_MAIN, FIELD_SUB};
use serde_json::{Value, json};

/// Index creation body for the category item index
///
/// ```rust
/// let mapping = catcount_providers::elasticsearch::mapping::category_item_mapping();
/// assert_eq!(mapping["mappings"]["properties"]["main"]["type"], "keyword");
/// ```
pub fn category_item_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                FIELD_ID: { "type": ES_TYPE_KEYWORD },
                FIELD_MAIN: { "type": ES_TYPE_KEYWORD },
                FIELD_SUB: { "type": ES_TYPE_KEYWORD }
            }
        }
    })
}
