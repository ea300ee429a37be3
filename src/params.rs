//! Outgoing request parameters.
//!
//! [`Params`] is the string-to-string map every endpoint fills before the
//! request is signed. Values are stored exactly as they will be signed;
//! percent-encoding happens only in [`Params::to_query_string`], which builds
//! the wire form and is never fed to the signer.
//!
//! Optional fields are omitted rather than sent empty. The `set_*` helpers
//! apply that rule together with the canonical formatting for each kind of
//! value:
//!
//! ```rust
//! use dataoke_api::Params;
//!
//! let mut params = Params::new();
//! params.set("keyWords", "phone case");
//! params.set_str("sort", "");            // omitted
//! params.set_int("pageNo", 2);
//! params.set_int("startTkRate", 0);      // omitted
//! params.set_price("endPrice", 19.9);
//! params.set_flag("hasCoupon", true);
//!
//! assert_eq!(params.get("endPrice"), Some("19.90"));
//! assert_eq!(params.get("hasCoupon"), Some("true"));
//! assert!(!params.contains_key("sort"));
//! assert_eq!(params.len(), 4);
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

/// Prices at or below this value are treated as "not provided".
const PRICE_EPSILON: f64 = 1e-15;

/// A set of request parameters keyed by name.
///
/// Keys are unique. Iteration follows byte-wise key order, which is also
/// the order the signer and the query-string encoder use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Inserts a string value unless it is empty.
    pub fn set_str(&mut self, key: impl Into<String>, value: &str) {
        if !value.is_empty() {
            self.set(key, value);
        }
    }

    /// Inserts an optional string value when present and non-empty.
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value {
            self.set_str(key, value);
        }
    }

    /// Inserts an integer in decimal form unless it is zero.
    pub fn set_int<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Display + Default + PartialEq,
    {
        if value != T::default() {
            self.set(key, value.to_string());
        }
    }

    /// Inserts a currency amount with two decimals unless it is not positive.
    pub fn set_price(&mut self, key: impl Into<String>, value: f64) {
        if value > PRICE_EPSILON {
            self.set(key, format!("{value:.2}"));
        }
    }

    /// Inserts `"true"` when the flag is set; a cleared flag is omitted.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        if value {
            self.set(key, "true");
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every parameter.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates over `(key, value)` pairs in byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded` text.
    ///
    /// Keys and values are percent-encoded and joined with `&` in key order.
    /// This is the form sent on the wire (query string for GET, body for
    /// POST); the signing string is built from the raw values instead.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.values
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_existing_key() {
        let mut params = Params::new();
        params.set("appKey", "old");
        params.set("appKey", "new");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("appKey"), Some("new"));
    }

    #[test]
    fn test_optional_helpers_omit_empty_values() {
        let mut params = Params::new();
        params.set_str("pid", "");
        params.set_opt("couponId", None);
        params.set_opt("channelId", Some(""));
        params.set_int("bizSceneId", 0_i32);
        params.set_int("id", 0_u64);
        params.set_price("startPrice", 0.0);
        params.set_price("endPrice", -3.0);
        params.set_flag("hasCoupon", false);

        assert!(params.is_empty());
    }

    #[test]
    fn test_optional_helpers_write_canonical_forms() {
        let mut params = Params::new();
        params.set_opt("couponId", Some("abc"));
        params.set_int("pageSize", 100_i32);
        params.set_int("id", 35_455_452_u64);
        params.set_price("startPrice", 5.0);
        params.set_price("endPrice", 12.346);
        params.set_flag("hasCoupon", true);

        assert_eq!(params.get("couponId"), Some("abc"));
        assert_eq!(params.get("pageSize"), Some("100"));
        assert_eq!(params.get("id"), Some("35455452"));
        assert_eq!(params.get("startPrice"), Some("5.00"));
        assert_eq!(params.get("endPrice"), Some("12.35"));
        assert_eq!(params.get("hasCoupon"), Some("true"));
    }

    #[test]
    fn test_iteration_is_sorted_regardless_of_insertion_order() {
        let mut params = Params::new();
        params.set("version", "v1");
        params.set("b", "2");
        params.set("appKey", "k");
        params.set("a", "1");

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "appKey", "b", "version"]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let params: Params = [("b", "1"), ("Z", "2"), ("a", "3")].into_iter().collect();

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Z", "a", "b"]);
    }

    #[test]
    fn test_query_string_percent_encodes() {
        let mut params = Params::new();
        params.set("content", "a&b=c d");
        params.set("keyWords", "手机");

        assert_eq!(
            params.to_query_string(),
            "content=a%26b%3Dc%20d&keyWords=%E6%89%8B%E6%9C%BA"
        );
    }

    #[test]
    fn test_query_string_of_empty_set_is_empty() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut params: Params = [("a", "1"), ("b", "2")].into_iter().collect();

        assert_eq!(params.remove("a"), Some("1".to_string()));
        assert!(!params.contains_key("a"));

        params.extend([("c", "3")]);
        assert_eq!(params.len(), 2);

        params.clear();
        assert!(params.is_empty());
    }
}
