//! Dataoke protocol version.
//!
//! Every signed request carries a `version` parameter. The open platform
//! versions its endpoints with strings such as `v1.2.4`; this module wraps
//! that string in [`ApiVersion`].

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Protocol version sent as the `version` parameter of every request.
///
/// The value takes part in the signature, so it must match the version the
/// remote endpoint expects byte-for-byte.
///
/// # Example
///
/// ```rust
/// use dataoke_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.as_ref(), "v1.2.4");
///
/// let version: ApiVersion = "v1.3.1".parse().unwrap();
/// assert_eq!(format!("{}", version), "v1.3.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Version used when none is configured.
    pub const LATEST: &'static str = "v1.2.4";

    /// Creates a new validated version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is empty or
    /// contains whitespace, `=` or `&` (which would corrupt the signing string).
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let invalid = version.is_empty()
            || version
                .chars()
                .any(|c| c.is_whitespace() || c == '=' || c == '&');
        if invalid {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(version))
    }

    /// Returns the default protocol version.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
