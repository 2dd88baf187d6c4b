//! HTTP Response Utilities
//!
//! Helper functions for turning search engine HTTP responses into domain
//! results. These are shared utilities, not ports.

use catcount_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Map a failed `send()` to a domain error
    ///
    /// Timeouts and connection failures get their own wording; everything
    /// else is reported as a generic request failure.
    pub fn transport_error(context: &str, error: reqwest::Error) -> Error {
        let message = if error.is_timeout() {
            format!("{context}: request timed out")
        } else if error.is_connect() {
            format!("{context}: connection failed")
        } else {
            format!("{context}: request failed")
        };
        Error::network_with_source(message, error)
    }

    /// Fail on a non-success status, otherwise hand the response back
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `context` - Operation description for error messages
    pub async fn check_status(response: Response, context: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(Error::search_engine(
            status.as_u16(),
            format!("{context}: {}", Self::error_reason(&body)),
        ))
    }

    /// Check response status and deserialize the JSON body
    ///
    /// # Returns
    /// The parsed body on success, `Error::SearchEngine` for a non-success
    /// status, `Error::Json` when the body does not match `T`
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T> {
        let response = Self::check_status(response, context).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(context, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Extract `error.type` and `error.reason` from an engine error body
    ///
    /// Falls back to the raw body when it is not the usual error envelope.
    pub fn error_reason(body: &str) -> String {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return body.to_string();
        };
        let error = &value["error"];
        match (error["type"].as_str(), error["reason"].as_str()) {
            (Some(kind), Some(reason)) => format!("{kind}: {reason}"),
            (None, Some(reason)) => reason.to_string(),
            _ => error.as_str().map_or_else(|| body.to_string(), str::to_string),
        }
    }
}
