//! Tolerant decoding helpers for response payloads.
//!
//! The open API is inconsistent about numbers: the same field may arrive as
//! `123`, `"123"` or `""` depending on the endpoint and the day. These serde
//! helpers accept either representation and fall back to zero for anything
//! that does not parse, so one odd field never aborts the whole decode.
//! Objects and arrays in a numeric field are skipped and also read as zero.
//!
//! Integer fields accept a float with no fractional part, so `7.0` reads as
//! `7`. Text is stricter: `"7.0"` does not parse as an integer and reads as
//! zero.
//!
//! Apply them with `deserialize_with` on plain numeric fields:
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Default)]
//! struct Item {
//!     #[serde(default, deserialize_with = "dataoke_api::lenient::number")]
//!     volume: i64,
//!     #[serde(default, deserialize_with = "dataoke_api::lenient::number")]
//!     price: f64,
//!     #[serde(default, deserialize_with = "dataoke_api::lenient::numbers")]
//!     cids: Vec<u64>,
//! }
//!
//! let item: Item =
//!     serde_json::from_str(r#"{"volume": "123", "price": "9.90", "cids": [1, "2", "x"]}"#).unwrap();
//! assert_eq!(item.volume, 123);
//! assert_eq!(item.price, 9.9);
//! assert_eq!(item.cids, vec![1, 2, 0]);
//!
//! let item: Item = serde_json::from_str(r#"{"volume": "n/a"}"#).unwrap();
//! assert_eq!(item.volume, 0);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// Numeric types that can be decoded leniently.
pub trait LenientNumber: Sized + Default {
    /// Converts an unsigned JSON integer, or zero if out of range.
    fn from_u64(v: u64) -> Self;
    /// Converts a signed JSON integer, or zero if out of range.
    fn from_i64(v: i64) -> Self;
    /// Converts a JSON float, or zero if it has no exact representation.
    fn from_f64(v: f64) -> Self;
    /// Parses text, or zero if it does not parse.
    fn parse_lenient(s: &str) -> Self;
}

macro_rules! lenient_integer {
    ($($t:ty),*) => {
        $(
            impl LenientNumber for $t {
                fn from_u64(v: u64) -> Self {
                    Self::try_from(v).unwrap_or_default()
                }

                fn from_i64(v: i64) -> Self {
                    Self::try_from(v).unwrap_or_default()
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
                fn from_f64(v: f64) -> Self {
                    if v.fract() == 0.0 && v >= Self::MIN as f64 && v <= Self::MAX as f64 {
                        v as Self
                    } else {
                        Self::default()
                    }
                }

                fn parse_lenient(s: &str) -> Self {
                    s.parse().unwrap_or_default()
                }
            }
        )*
    };
}

lenient_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

impl LenientNumber for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_u64(v: u64) -> Self {
        v as Self
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_i64(v: i64) -> Self {
        v as Self
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

struct NumberVisitor<T>(PhantomData<T>);

impl<'de, T: LenientNumber> Visitor<'de> for NumberVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a quoted number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        Ok(T::from_u64(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        Ok(T::from_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        Ok(T::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        Ok(T::parse_lenient(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(T::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(T::default())
    }
}

/// A single lenient number, usable as a sequence element.
struct Lenient<T>(T);

impl<'de, T: LenientNumber> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(NumberVisitor(PhantomData))
            .map(Lenient)
    }
}

/// Deserializes a number from a JSON number or a quoted string.
///
/// Unparsable text, booleans, `null`, objects and arrays decode to zero.
///
/// # Errors
///
/// Returns the deserializer's error only when the input itself is malformed.
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    deserializer.deserialize_any(NumberVisitor(PhantomData))
}

struct NumbersVisitor<T>(PhantomData<T>);

impl<'de, T: LenientNumber> Visitor<'de> for NumbersVisitor<T> {
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of numbers or quoted numbers")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<T>, A::Error> {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Lenient(v)) = seq.next_element::<Lenient<T>>()? {
            out.push(v);
        }
        Ok(out)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Vec<T>, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Vec<T>, E> {
        Ok(Vec::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Vec<T>, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Deserializes a list whose elements follow the [`number`] rules.
///
/// `null` decodes to an empty list. A scalar such as `"1,2"` is not split
/// and fails the decode, as does an object.
///
/// # Errors
///
/// Returns the deserializer's error when the input is not a list or `null`.
pub fn numbers<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    deserializer.deserialize_any(NumbersVisitor(PhantomData))
}

/// Deserializes `T`, treating `null` as `T::default()`.
///
/// `#[serde(default)]` only covers missing fields; the API also sends
/// explicit `null` for empty lists and nested objects.
///
/// # Errors
///
/// Returns the deserializer's error when the input is neither `null` nor a
/// valid `T`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
