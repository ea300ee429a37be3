//! Error types for the Dataoke API SDK.
//!
//! - [`ConfigError`]: values rejected while building a [`crate::DataokeConfig`]
//! - [`DataokeError`]: everything a single API call can fail with
//!
//! A call fails in exactly one of three ways, and each is its own variant so
//! callers can tell them apart:
//!
//! - [`DataokeError::Http`]: the request never produced a usable response
//! - [`DataokeError::Api`]: the server answered with a non-zero status code
//! - [`DataokeError::Decode`]: the server answered, but the body did not parse
//!
//! # Example
//!
//! ```rust
//! use dataoke_api::{AppKey, ConfigError};
//!
//! let result = AppKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::envelope::{ApiError, DecodeError};

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App key cannot be empty.
    #[error("App key cannot be empty. Please provide the appKey issued by the Dataoke open platform.")]
    EmptyAppKey,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide the appSecret issued by the Dataoke open platform.")]
    EmptyAppSecret,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a non-empty version string without whitespace (e.g., 'v1.2.4').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Gateway URL is invalid.
    #[error("Invalid gateway URL '{url}'. Please provide an http(s) URL (e.g., 'https://openapi.dataoke.com/api/').")]
    InvalidGatewayUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Unified error type for API calls.
///
/// # Example
///
/// ```rust,ignore
/// use dataoke_api::DataokeError;
///
/// match client.request(&request).await {
///     Ok(detail) => println!("{}", detail.title),
///     Err(DataokeError::Api(e)) => println!("rejected {}: {}", e.code, e.msg),
///     Err(DataokeError::Decode(e)) => println!("bad body: {e}"),
///     Err(DataokeError::Http(e)) => println!("transport: {e}"),
///     Err(DataokeError::Config(e)) => println!("config: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DataokeError {
    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure: network error, invalid request, or a non-2xx
    /// status whose body is not an error envelope.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server reported a non-zero status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl DataokeError {
    /// Returns `true` if the server explicitly rejected the request.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns the server's code and message, if this is a protocol error.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_app_key_error_message() {
        let error = ConfigError::EmptyAppKey;
        let message = error.to_string();
        assert!(message.contains("App key cannot be empty"));
        assert!(message.contains("appKey"));
    }

    #[test]
    fn test_invalid_gateway_error_message() {
        let error = ConfigError::InvalidGatewayUrl {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "app_key" };
        let message = error.to_string();
        assert!(message.contains("app_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAppSecret;
        let _: &dyn std::error::Error = &error;

        let error = DataokeError::from(ConfigError::EmptyAppKey);
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_api_error_helpers() {
        let error = DataokeError::from(ApiError {
            code: 40001,
            msg: "invalid signature".to_string(),
            request_id: None,
        });

        assert!(error.is_api_error());
        assert_eq!(error.api_error().map(|e| e.code), Some(40001));
        assert_eq!(error.to_string(), "code: 40001, msg: invalid signature");
    }

    #[test]
    fn test_decode_error_is_not_api_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = DataokeError::from(DecodeError {
            target: crate::envelope::DecodeTarget::Envelope,
            source,
        });

        assert!(!error.is_api_error());
        assert!(error.api_error().is_none());
        assert!(error.to_string().contains("response envelope"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataokeError>();
    }
}
