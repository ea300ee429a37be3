//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Dataoke app key.
///
/// The app key is the public identifier of the application and is sent with
/// every request as the `appKey` parameter.
///
/// # Example
///
/// ```rust
/// use dataoke_api::AppKey;
///
/// let key = AppKey::new("my-app-key").unwrap();
/// assert_eq!(key.as_ref(), "my-app-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppKey(String);

impl AppKey {
    /// Creates a new validated app key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyAppKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AppKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Dataoke app secret.
///
/// The secret is only ever used as signing key material and is never sent
/// over the wire.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AppSecret(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use dataoke_api::AppSecret;
///
/// let secret = AppSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AppSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    /// Creates a new validated app secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyAppSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AppSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(*****)")
    }
}

/// A validated gateway base URL.
///
/// Endpoint paths such as `goods/get-goods-details` are appended directly to
/// the gateway, so the stored URL always ends with a `/`.
///
/// # Example
///
/// ```rust
/// use dataoke_api::GatewayUrl;
///
/// let gateway = GatewayUrl::new("http://localhost:8080/api").unwrap();
/// assert_eq!(gateway.as_ref(), "http://localhost:8080/api/");
/// assert_eq!(gateway.scheme(), "http");
/// assert_eq!(gateway.join("goods/get-goods-details"), "http://localhost:8080/api/goods/get-goods-details");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayUrl {
    url: String,
    scheme_end: usize,
}

impl GatewayUrl {
    /// The production Dataoke open API gateway.
    pub const DEFAULT: &'static str = "https://openapi.dataoke.com/api/";

    /// Creates a new validated gateway URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGatewayUrl`] if the URL has no
    /// `http`/`https` scheme, has an empty host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let mut url = url.into().trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidGatewayUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidGatewayUrl { url });
        }

        let remainder = &url[scheme_end + 3..];
        let host_end = remainder.find([':', '/']).unwrap_or(remainder.len());
        if host_end == 0 || remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidGatewayUrl { url });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Appends an endpoint path to the gateway.
    ///
    /// A leading `/` on `path` is ignored so callers may pass either form.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for GatewayUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
        }
    }
}

impl AsRef<str> for GatewayUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_key_rejects_empty_string() {
        let result = AppKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAppKey)));
    }

    #[test]
    fn test_app_secret_rejects_empty_string() {
        let result = AppSecret::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAppSecret)));
    }

    #[test]
    fn test_app_secret_masks_value_in_debug() {
        let secret = AppSecret::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "AppSecret(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_default_gateway_matches_parsed_default() {
        let parsed = GatewayUrl::new(GatewayUrl::DEFAULT).unwrap();
        assert_eq!(parsed, GatewayUrl::default());
        assert_eq!(parsed.scheme(), "https");
    }

    #[test]
    fn test_gateway_appends_trailing_slash() {
        let gateway = GatewayUrl::new("http://127.0.0.1:9000/api").unwrap();
        assert_eq!(gateway.as_ref(), "http://127.0.0.1:9000/api/");

        let gateway = GatewayUrl::new("http://127.0.0.1:9000").unwrap();
        assert_eq!(gateway.as_ref(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_gateway_join_strips_leading_slash() {
        let gateway = GatewayUrl::default();
        assert_eq!(
            gateway.join("/tb-service/parse-content"),
            "https://openapi.dataoke.com/api/tb-service/parse-content"
        );
        assert_eq!(
            gateway.join("tb-service/parse-content"),
            "https://openapi.dataoke.com/api/tb-service/parse-content"
        );
    }

    #[test]
    fn test_gateway_rejects_invalid() {
        // No scheme
        assert!(GatewayUrl::new("openapi.dataoke.com/api").is_err());

        // Unsupported scheme
        assert!(GatewayUrl::new("ftp://openapi.dataoke.com/api").is_err());

        // Empty host
        assert!(GatewayUrl::new("https://").is_err());
        assert!(GatewayUrl::new("https:///api").is_err());

        // Query strings belong to requests, not the gateway
        assert!(GatewayUrl::new("https://openapi.dataoke.com/api?x=1").is_err());
    }
}
