//! HTTP Client Pool
//!
//! Shared `reqwest` client for the search engine adapters. One pool is built
//! from configuration and its client is cloned into every adapter, so all of
//! them reuse the same connections.

pub mod pool;

pub use pool::{HttpClientConfig, HttpClientPool};
