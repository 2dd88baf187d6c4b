//! Search response bodies for terms aggregations
//!
//! Buckets keep their sub-aggregations as raw JSON and are decoded by name
//! on demand, since the set of sub-aggregation names is chosen by the
//! request.

use catcount_domain::constants::{AGG_CATEGORIES, AGG_SUB_CATEGORIES};
use catcount_domain::error::{Error, Result};
use catcount_domain::value_objects::{MainCategory, SubCategory};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Body of a `_search` response, aggregations only
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Named aggregation results; absent when the request had none
    #[serde(default)]
    pub aggregations: Option<HashMap<String, Value>>,
}

impl SearchResponse {
    /// Decode the top-level terms aggregation called `name`
    pub fn terms(&self, name: &str) -> Result<TermsResult> {
        let aggregations = self
            .aggregations
            .as_ref()
            .ok_or_else(|| Error::io("search response carries no aggregations"))?;
        decode_terms(aggregations, name)
    }
}

/// Result of a `terms` aggregation
#[derive(Debug, Clone, Deserialize)]
pub struct TermsResult {
    /// Returned buckets, in engine order
    pub buckets: Vec<TermsBucket>,
    /// Documents in buckets that did not make the size cut
    #[serde(default)]
    pub sum_other_doc_count: u64,
}

/// One bucket of a `terms` aggregation
#[derive(Debug, Clone, Deserialize)]
pub struct TermsBucket {
    /// Bucket key as sent by the engine (string for keyword fields)
    pub key: Value,
    /// Formatted key, present for numeric and date keys
    #[serde(default)]
    pub key_as_string: Option<String>,
    /// Documents in the bucket
    pub doc_count: u64,
    /// Sub-aggregation results keyed by name
    #[serde(flatten)]
    pub aggregations: HashMap<String, Value>,
}

impl TermsBucket {
    /// Bucket key rendered as a string
    pub fn key_as_string(&self) -> String {
        if let Some(formatted) = &self.key_as_string {
            return formatted.clone();
        }
        match &self.key {
            Value::String(key) => key.clone(),
            other => other.to_string(),
        }
    }

    /// Decode the terms sub-aggregation called `name`
    pub fn terms(&self, name: &str) -> Result<TermsResult> {
        decode_terms(&self.aggregations, name)
    }
}

fn decode_terms(aggregations: &HashMap<String, Value>, name: &str) -> Result<TermsResult> {
    let raw = aggregations
        .get(name)
        .ok_or_else(|| Error::io(format!("aggregation '{name}' missing from search response")))?;
    Ok(TermsResult::deserialize(raw)?)
}

/// Reshape the category aggregation into main categories
///
/// Outer buckets keep the engine's order; each carries its sub-category
/// buckets in the order they were returned.
pub fn main_categories(response: &SearchResponse) -> Result<Vec<MainCategory>> {
    let categories = response.terms(AGG_CATEGORIES)?;
    if categories.sum_other_doc_count > 0 {
        tracing::debug!(
            dropped_docs = categories.sum_other_doc_count,
            "main categories beyond the bucket limit were dropped"
        );
    }

    categories
        .buckets
        .iter()
        .map(|bucket| {
            let sub_categories = bucket
                .terms(AGG_SUB_CATEGORIES)?
                .buckets
                .iter()
                .map(|sub| SubCategory {
                    category: sub.key_as_string(),
                    count: sub.doc_count,
                })
                .collect();

            Ok(MainCategory {
                category: bucket.key_as_string(),
                count: bucket.doc_count,
                sub_categories,
            })
        })
        .collect()
}
