//! HTTP client types for Dataoke API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DataokeClient`]: Signs, sends and decodes API calls
//! - [`HttpClient`]: The async transport that talks to the gateway
//! - [`HttpRequest`]: A signed request to be sent
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use dataoke_api::{DataokeClient, DataokeConfig, Params};
//! use dataoke_api::clients::HttpMethod;
//!
//! let client = DataokeClient::new(DataokeConfig::new("app-key", "app-secret")?)?;
//!
//! let mut params = Params::new();
//! params.set("goodsId", "590858626868");
//!
//! let detail: serde_json::Value = client
//!     .call(HttpMethod::Get, "goods/get-goods-details", params)
//!     .await?;
//! ```
//!
//! # Wire Format
//!
//! - **GET**: parameters in the URL query string
//! - **POST**: parameters as a form-encoded body
//!
//! Both methods declare `Content-Type: application/json`, which the gateway
//! accepts for either placement. Requests are never retried.

mod client;
mod errors;
mod http_client;
mod http_request;

pub use client::DataokeClient;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, CONTENT_TYPE};
