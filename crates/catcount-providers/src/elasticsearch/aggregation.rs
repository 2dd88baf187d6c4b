//! Search request bodies for terms aggregations
//!
//! Only the subset of the query DSL the category count needs: a hit-less
//! search carrying named, nestable `terms` aggregations.

use catcount_domain::constants::{
    AGG_CATEGORIES, AGG_SUB_CATEGORIES, FIELD_MAIN, FIELD_SUB, MAX_MAIN_CATEGORIES,
    MAX_SUB_CATEGORIES,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sort direction of a bucket order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Explicit bucket ordering of a terms aggregation
///
/// Serializes as `{"_key": "asc"}` / `{"_count": "desc"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BucketOrder {
    /// Order by bucket key
    #[serde(rename = "_key")]
    Key(SortDirection),
    /// Order by bucket document count
    #[serde(rename = "_count")]
    Count(SortDirection),
}

/// Body of a `terms` aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermsAggregation {
    /// Field to bucket on
    pub field: String,
    /// Maximum number of buckets returned
    pub size: u32,
    /// Explicit ordering; the engine orders by descending count when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<BucketOrder>,
}

/// A named aggregation with optional sub-aggregations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    /// Terms bucketing
    pub terms: TermsAggregation,
    /// Sub-aggregations computed per bucket
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aggs: BTreeMap<String, Aggregation>,
}

impl Aggregation {
    /// Terms aggregation on `field` returning at most `size` buckets
    pub fn terms<F: Into<String>>(field: F, size: u32) -> Self {
        Self {
            terms: TermsAggregation {
                field: field.into(),
                size,
                order: None,
            },
            aggs: BTreeMap::new(),
        }
    }

    /// Set an explicit bucket order
    #[must_use]
    pub fn order(mut self, order: BucketOrder) -> Self {
        self.terms.order = Some(order);
        self
    }

    /// Add a sub-aggregation under `name`
    #[must_use]
    pub fn sub_aggregation<N: Into<String>>(mut self, name: N, aggregation: Aggregation) -> Self {
        self.aggs.insert(name.into(), aggregation);
        self
    }
}

/// Body of a `_search` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Number of hits to return
    pub size: u32,
    /// Named top-level aggregations
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aggs: BTreeMap<String, Aggregation>,
}

impl SearchRequest {
    /// Search that returns aggregations only, no hits
    pub fn aggregations_only() -> Self {
        Self {
            size: 0,
            aggs: BTreeMap::new(),
        }
    }

    /// Add a top-level aggregation under `name`
    #[must_use]
    pub fn aggregation<N: Into<String>>(mut self, name: N, aggregation: Aggregation) -> Self {
        self.aggs.insert(name.into(), aggregation);
        self
    }
}

/// Request counting items per main category and per sub-category
///
/// Outer buckets keep the engine's default order (count descending) and are
/// capped at 50; inner buckets are ordered by key and capped at 100.
pub fn categories_count_request() -> SearchRequest {
    // hits are never read; asking for none also keeps them out of the request cache
    SearchRequest::aggregations_only().aggregation(
        AGG_CATEGORIES,
        Aggregation::terms(FIELD_MAIN, MAX_MAIN_CATEGORIES).sub_aggregation(
            AGG_SUB_CATEGORIES,
            Aggregation::terms(FIELD_SUB, MAX_SUB_CATEGORIES)
                .order(BucketOrder::Key(SortDirection::Asc)),
        ),
    )
}
