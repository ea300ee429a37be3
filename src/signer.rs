//! Request signing for the Dataoke open API.
//!
//! Every request carries `appKey`, `version` and a `sign` parameter. The
//! signature is the upper-case hex MD5 of the sorted parameters followed by
//! the app secret:
//!
//! ```text
//! k1=v1&k2=v2&...&kn=vn&key=<secret>
//! ```
//!
//! Keys are sorted byte-wise, every pair (including the last) is followed by
//! `&`, and nothing is escaped. The remote service recomputes the same string,
//! so any deviation shows up as a rejected request rather than a local error.
//!
//! # Example
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
//! signer.sign(&mut params);
//!
//! assert_eq!(params.get("appKey"), Some("AK"));
//! assert_eq!(params.get("version"), Some("1.0"));
//! assert_eq!(params.get("sign"), Some("F1DC1D68EFFAC7ABD03785343E7BE704"));
//! ```

use md5::{Digest, Md5};

use crate::config::{ApiVersion, AppKey, AppSecret, DataokeConfig};
use crate::params::Params;

/// Parameter carrying the app key.
pub const APP_KEY_PARAM: &str = "appKey";

/// Parameter carrying the protocol version.
pub const VERSION_PARAM: &str = "version";

/// Parameter carrying the computed signature.
pub const SIGN_PARAM: &str = "sign";

/// Literal placed between the last pair and the secret.
const SECRET_PREFIX: &str = "key=";

/// Computes the signature of an already-assembled signing string.
///
/// Returns the MD5 digest as 32 upper-case hexadecimal characters.
///
/// # Example
///
/// ```rust
/// use dataoke_api::signer::compute_signature;
///
/// let sig = compute_signature("key=SECRET");
/// assert_eq!(sig, "F73FB1CD053E7050FFD2E07033F4F691");
/// ```
#[must_use]
pub fn compute_signature(message: &str) -> String {
    let digest = Md5::digest(message.as_bytes());
    hex::encode_upper(digest)
}

/// Builds the signing string for `params` and `secret`.
///
/// The parameters are used as-is; `appKey` and `version` are not injected.
/// An empty set yields `key=<secret>`.
///
/// # Example
///
/// ```rust
/// use dataoke_api::Params;
/// use dataoke_api::signer::signing_string;
///
/// let params: Params = [("b", "2"), ("a", "1")].into_iter().collect();
/// assert_eq!(signing_string(&params, "secret"), "a=1&b=2&key=secret");
/// ```
#[must_use]
pub fn signing_string(params: &Params, secret: &str) -> String {
    let mut keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    keys.sort_unstable();

    let capacity = params
        .iter()
        .map(|(k, v)| k.len() + v.len() + 2)
        .sum::<usize>()
        + SECRET_PREFIX.len()
        + secret.len();

    let mut buf = String::with_capacity(capacity);
    for key in keys {
        buf.push_str(key);
        buf.push('=');
        buf.push_str(params.get(key).unwrap_or_default());
        buf.push('&');
    }
    buf.push_str(SECRET_PREFIX);
    buf.push_str(secret);
    buf
}

/// Signs parameter sets with a fixed set of credentials.
///
/// `Signer` holds no mutable state, so one instance can sign requests from
/// any number of tasks concurrently.
#[derive(Clone, Debug)]
pub struct Signer {
    app_key: AppKey,
    app_secret: AppSecret,
    version: ApiVersion,
}

// Verify Signer is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Signer>();
};

impl Signer {
    /// Creates a signer from explicit credentials.
    #[must_use]
    pub const fn new(app_key: AppKey, app_secret: AppSecret, version: ApiVersion) -> Self {
        Self {
            app_key,
            app_secret,
            version,
        }
    }

    /// Creates a signer from the credentials and version in `config`.
    #[must_use]
    pub fn from_config(config: &DataokeConfig) -> Self {
        Self::new(
            config.app_key().clone(),
            config.app_secret().clone(),
            config.api_version().clone(),
        )
    }

    /// Returns the app key injected into signed requests.
    #[must_use]
    pub const fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    /// Returns the version injected into signed requests.
    #[must_use]
    pub const fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Builds the signing string for `params` with this signer's secret.
    ///
    /// The parameters are used exactly as given; call [`Signer::sign`] to
    /// inject `appKey` and `version` first.
    #[must_use]
    pub fn signing_string(&self, params: &Params) -> String {
        signing_string(params, self.app_secret.as_ref())
    }

    /// Computes the signature over `params` without modifying them.
    #[must_use]
    pub fn signature(&self, params: &Params) -> String {
        compute_signature(&self.signing_string(params))
    }

    /// Signs `params` in place and returns the signature.
    ///
    /// Inserts `appKey` and `version` (replacing existing values), computes
    /// the signature over every parameter, and stores it under `sign`. A
    /// `sign` left over from an earlier call is dropped first so re-signing
    /// the same set yields the same value.
    pub fn sign(&self, params: &mut Params) -> String {
        params.remove(SIGN_PARAM);
        params.set(APP_KEY_PARAM, self.app_key.as_ref());
        params.set(VERSION_PARAM, self.version.as_ref());

        let signature = self.signature(params);
        params.set(SIGN_PARAM, signature.clone());
        signature
    }
}
