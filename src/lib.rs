//! # Dataoke API Rust SDK
//!
//! A Rust SDK for the Dataoke affiliate marketing open API, providing
//! type-safe configuration, request signing and typed endpoint calls.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DataokeConfig`] and [`DataokeConfigBuilder`]
//! - Validated newtypes for credentials, protocol version and gateway URL
//! - MD5 request signing via [`Signer`]
//! - Decoding of the shared response [`Envelope`], tolerant of numbers sent
//!   as strings
//! - An async client ([`DataokeClient`]) and typed endpoints ([`endpoints`])
//!
//! ## Quick Start
//!
//! ```rust
//! use dataoke_api::{DataokeConfig, AppKey, AppSecret, ApiVersion};
//!
//! let config = DataokeConfig::builder()
//!     .app_key(AppKey::new("your-app-key").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use dataoke_api::{DataokeClient, DataokeConfig, TbServiceRequest};
//!
//! let client = DataokeClient::new(DataokeConfig::new("app-key", "app-secret")?)?;
//!
//! let items = client.request(&TbServiceRequest::new("phone case")).await?;
//! for item in &items {
//!     println!("{} {}", item.title, item.zk_final_price);
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use dataoke_api::DataokeError;
//!
//! match client.request(&request).await {
//!     Ok(detail) => println!("{}", detail.title),
//!     Err(DataokeError::Api(e)) => println!("rejected: {e}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```
//!
//! ## Signing Without the Client
//!
//! ```rust
//! use dataoke_api::{Params, Signer, AppKey, AppSecret, ApiVersion};
//!
//! let signer = Signer::new(
//!     AppKey::new("AK").unwrap(),
//!     AppSecret::new("SECRET").unwrap(),
//!     ApiVersion::new("1.0").unwrap(),
//! );
//!
//! let mut params = Params::new();
//! params.set("foo", "bar");
//!
//! let sign = signer.sign(&mut params);
//! assert_eq!(sign, "F1DC1D68EFFAC7ABD03785343E7BE704");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One call, one request**: No retries, pooling or caching

pub mod clients;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod lenient;
pub mod params;
pub mod signer;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, AppKey, AppSecret, DataokeConfig, DataokeConfigBuilder, GatewayUrl};
pub use envelope::{ApiError, DecodeError, DecodeTarget, Envelope};
pub use error::{ConfigError, DataokeError};
pub use params::Params;
pub use signer::Signer;

// Re-export HTTP client types
pub use clients::{
    DataokeClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export endpoint types
pub use endpoints::{
    get_goods_details, get_privilege_link, get_tb_service, parse_content, ApiRequest,
    GoodsDetail, GoodsDetailsRequest, ParseContentRequest, ParseContentResult, PrivilegeLink,
    PrivilegeLinkRequest, TbServiceRequest, TbkItem,
};
