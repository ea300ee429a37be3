//! Transport error types for the Dataoke API SDK.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the gateway
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type for all transport failures
//!
//! Transport errors are surfaced as-is: nothing here is retried or
//! reclassified.
//!
//! # Example
//!
//! ```rust,ignore
//! use dataoke_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match http_client.request(request).await {
//!     Ok(body) => println!("{} bytes", body.len()),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the gateway answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use dataoke_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 502,
///     message: "Bad Gateway".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body as text.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The endpoint path is empty.
    #[error("Cannot send a {method} request without an endpoint path.")]
    EmptyPath {
        /// The HTTP method of the rejected request.
        method: String,
    },
}

/// Unified error type for all transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
