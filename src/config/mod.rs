//! Configuration types for the Dataoke API SDK.
//!
//! # Overview
//!
//! - [`DataokeConfig`]: The main configuration struct holding all SDK settings
//! - [`DataokeConfigBuilder`]: A builder for constructing [`DataokeConfig`] instances
//! - [`AppKey`]: A validated app key newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`GatewayUrl`]: The validated gateway base URL
//! - [`ApiVersion`]: The protocol version sent with every request
//!
//! # Example
//!
//! ```rust
//! use dataoke_api::{DataokeConfig, AppKey, AppSecret, ApiVersion};
//!
//! let config = DataokeConfig::builder()
//!     .app_key(AppKey::new("my-app-key").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AppKey, AppSecret, GatewayUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Dataoke API SDK.
///
/// Credentials are immutable once built. `DataokeConfig` is `Clone`, `Send`
/// and `Sync`, so one instance can back any number of concurrent calls.
///
/// # Example
///
/// ```rust
/// use dataoke_api::{DataokeConfig, AppKey, AppSecret};
///
/// let config = DataokeConfig::builder()
///     .app_key(AppKey::new("your-app-key").unwrap())
///     .app_secret(AppSecret::new("your-secret").unwrap())
///     .debug(true)
///     .build()
///     .unwrap();
///
/// assert!(config.debug());
/// ```
#[derive(Clone, Debug)]
pub struct DataokeConfig {
    app_key: AppKey,
    app_secret: AppSecret,
    api_version: ApiVersion,
    gateway: GatewayUrl,
    debug: bool,
    user_agent_prefix: Option<String>,
}

impl DataokeConfig {
    /// Creates a new builder for constructing a `DataokeConfig`.
    #[must_use]
    pub fn builder() -> DataokeConfigBuilder {
        DataokeConfigBuilder::new()
    }

    /// Shorthand for a config with only credentials and all defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppKey`] or [`ConfigError::EmptyAppSecret`]
    /// if either credential is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dataoke_api::DataokeConfig;
    ///
    /// let config = DataokeConfig::new("key", "secret").unwrap();
    /// assert_eq!(config.app_key().as_ref(), "key");
    /// ```
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .app_key(AppKey::new(app_key)?)
            .app_secret(AppSecret::new(app_secret)?)
            .build()
    }

    /// Returns the app key.
    #[must_use]
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the protocol version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the gateway base URL.
    #[must_use]
    pub const fn gateway(&self) -> &GatewayUrl {
        &self.gateway
    }

    /// Returns whether request/response debug logging is enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DataokeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataokeConfig>();
};

/// Builder for constructing [`DataokeConfig`] instances.
///
/// Required fields are `app_key` and `app_secret`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `gateway`: [`GatewayUrl::DEFAULT`]
/// - `debug`: `false`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use dataoke_api::{DataokeConfig, AppKey, AppSecret, ApiVersion, GatewayUrl};
///
/// let config = DataokeConfig::builder()
///     .app_key(AppKey::new("key").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .api_version("v1.3.1".parse().unwrap())
///     .gateway(GatewayUrl::new("http://localhost:8080/api/").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct DataokeConfigBuilder {
    app_key: Option<AppKey>,
    app_secret: Option<AppSecret>,
    api_version: Option<ApiVersion>,
    gateway: Option<GatewayUrl>,
    debug: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl DataokeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app key (required).
    #[must_use]
    pub fn app_key(mut self, key: AppKey) -> Self {
        self.app_key = Some(key);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Overrides the protocol version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the gateway base URL.
    #[must_use]
    pub fn gateway(mut self, gateway: GatewayUrl) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Enables logging of request URLs, parameters and response bodies.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DataokeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_key` or
    /// `app_secret` are not set.
    pub fn build(self) -> Result<DataokeConfig, ConfigError> {
        let app_key = self
            .app_key
            .ok_or(ConfigError::MissingRequiredField { field: "app_key" })?;
        let app_secret = self
            .app_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "app_secret",
            })?;

        Ok(DataokeConfig {
            app_key,
            app_secret,
            api_version: self.api_version.unwrap_or_default(),
            gateway: self.gateway.unwrap_or_default(),
            debug: self.debug.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_app_key() {
        let result = DataokeConfigBuilder::new()
            .app_secret(AppSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "app_key" })
        ));
    }

    #[test]
    fn test_builder_requires_app_secret() {
        let result = DataokeConfigBuilder::new()
            .app_key(AppKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "app_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = DataokeConfig::builder()
            .app_key(AppKey::new("key").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert_eq!(config.gateway().as_ref(), GatewayUrl::DEFAULT);
        assert!(!config.debug());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_new_validates_credentials() {
        assert!(matches!(
            DataokeConfig::new("", "secret"),
            Err(ConfigError::EmptyAppKey)
        ));
        assert!(matches!(
            DataokeConfig::new("key", ""),
            Err(ConfigError::EmptyAppSecret)
        ));
        assert!(DataokeConfig::new("key", "secret").is_ok());
    }

    #[test]
    fn test_config_debug_output_hides_secret() {
        let config = DataokeConfig::new("key", "very-secret-value").unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("DataokeConfig"));
        assert!(!debug_str.contains("very-secret-value"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let gateway = GatewayUrl::new("http://127.0.0.1:8080/api/").unwrap();

        let config = DataokeConfig::builder()
            .app_key(AppKey::new("key").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .api_version(ApiVersion::new("v1.3.1").unwrap())
            .gateway(gateway.clone())
            .debug(true)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.api_version().as_ref(), "v1.3.1");
        assert_eq!(config.gateway(), &gateway);
        assert!(config.debug());
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }
}
