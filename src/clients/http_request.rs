//! HTTP request types for the Dataoke API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the open API gateway.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::params::Params;

/// Content type declared on every request.
///
/// The gateway expects it even when the POST body is form-encoded.
pub const CONTENT_TYPE: &str = "application/json";

/// HTTP methods used by the open API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters travel in the URL query string.
    #[default]
    Get,
    /// Parameters travel in the request body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A signed request ready to be sent to the gateway.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use dataoke_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "goods/get-goods-details")
///     .param("goodsId", "590858626868")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query_string(), "goodsId=590858626868");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint path, relative to the gateway URL.
    pub path: String,
    /// The request parameters, already signed.
    pub params: Params,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyPath`] if the path is empty
    /// or consists only of slashes.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }

    /// Returns the URL-encoded form of the parameters.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    params: Params,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            params: Params::new(),
        }
    }

    /// Replaces all parameters at once.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            params: self.params,
        };
        request.verify()?;
        Ok(request)
    }
}
