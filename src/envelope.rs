//! The generic response envelope.
//!
//! Every endpoint answers with the same wrapper:
//!
//! ```json
//! {"requestId": "…", "time": 1700000000000, "code": 0, "msg": "成功", "data": {…}}
//! ```
//!
//! `code` alone decides success: zero is success, anything else is a
//! protocol error no matter what `data` holds. A `code` that is not an
//! integer (or a quoted integer) fails the envelope decode. On success `data` is decoded
//! into the endpoint's typed result by field name.
//!
//! # Example
//!
//! ```rust
//! use dataoke_api::Envelope;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Point { x: i64 }
//!
//! let envelope = Envelope::from_slice(br#"{"code": 0, "data": {"x": 5}}"#).unwrap();
//! let point: Point = envelope.decode().unwrap().unwrap();
//! assert_eq!(point.x, 5);
//! ```

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, DeserializeOwned, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DataokeError;

/// The response wrapper shared by all endpoints.
///
/// All fields are optional on the wire; missing ones take their zero value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    /// Server-assigned request identifier.
    pub request_id: String,
    /// Server time in milliseconds since the UNIX epoch.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub time: i64,
    /// Status code; zero means success.
    #[serde(deserialize_with = "status_code")]
    pub code: i64,
    /// Human-readable status message.
    pub msg: String,
    /// Opaque payload. JSON `null` is treated as absent.
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Parses an envelope from raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] with [`DecodeTarget::Envelope`] if the bytes
    /// are not a JSON object of the envelope's shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(|source| DecodeError {
            target: DecodeTarget::Envelope,
            source,
        })
    }

    /// Returns `true` if the server reported a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code != 0
    }

    /// Returns the server time, if present and representable.
    #[must_use]
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        if self.time == 0 {
            return None;
        }
        Utc.timestamp_millis_opt(self.time).single()
    }

    /// Returns the protocol error carried by this envelope, if any.
    #[must_use]
    pub fn error(&self) -> Option<ApiError> {
        self.is_error().then(|| ApiError {
            code: self.code,
            msg: self.msg.clone(),
            request_id: (!self.request_id.is_empty()).then(|| self.request_id.clone()),
        })
    }

    /// Decodes the payload into `T`.
    ///
    /// Returns `Ok(None)` when the call succeeded but carried no payload.
    ///
    /// # Errors
    ///
    /// - [`DataokeError::Api`] if `code` is non-zero; the payload is not
    ///   inspected.
    /// - [`DataokeError::Decode`] if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, DataokeError> {
        if let Some(err) = self.error() {
            return Err(DataokeError::Api(err));
        }

        self.data
            .map(|data| {
                serde_json::from_value(data).map_err(|source| {
                    DataokeError::Decode(DecodeError {
                        target: DecodeTarget::Payload,
                        source,
                    })
                })
            })
            .transpose()
    }
}

/// Decodes `code` as a JSON integer or a quoted integer.
///
/// There is no zero fallback: an unreadable code fails the envelope decode.
fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(StatusCodeVisitor)
}

struct StatusCodeVisitor;

impl<'de> Visitor<'de> for StatusCodeVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer status code")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.parse().map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

/// A non-zero status code reported by the remote service.
///
/// The service uses the code for every kind of rejection (bad signature,
/// invalid parameters, rate limiting, ...); it is carried through verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("code: {code}, msg: {msg}")]
pub struct ApiError {
    /// The status code from the envelope.
    pub code: i64,
    /// The message from the envelope.
    pub msg: String,
    /// The request identifier, for reporting the failure upstream.
    pub request_id: Option<String>,
}

/// Which part of the response failed to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeTarget {
    /// The outer envelope (body was not valid envelope JSON).
    Envelope,
    /// The `data` payload (shape did not match the typed result).
    Payload,
}

impl fmt::Display for DecodeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Envelope => write!(f, "response envelope"),
            Self::Payload => write!(f, "response payload"),
        }
    }
}

/// A response body that could not be decoded.
///
/// Distinct from [`ApiError`]: the server may well have reported success,
/// but the body did not have the expected shape.
#[derive(Debug, Error)]
#[error("Failed to decode {target}: {source}")]
pub struct DecodeError {
    /// The part of the response that failed.
    pub target: DecodeTarget,
    /// The underlying JSON error.
    #[source]
    pub source: serde_json::Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Point {
        x: i64,
        #[serde(default, deserialize_with = "crate::lenient::number")]
        y: i64,
    }

    #[test]
    fn test_success_decodes_payload() {
        let envelope = Envelope::from_slice(br#"{"code": 0, "data": {"x": 5}}"#).unwrap();
        let point: Option<Point> = envelope.decode().unwrap();
        assert_eq!(point, Some(Point { x: 5, y: 0 }));
    }

    #[test]
    fn test_error_code_short_circuits_decode() {
        // data does not match Point, which would be a decode error if inspected
        let body = br#"{"requestId": "req-1", "code": 40001, "msg": "invalid signature", "data": "junk"}"#;
        let envelope = Envelope::from_slice(body).unwrap();
        assert!(envelope.is_error());

        let err = envelope.decode::<Point>().unwrap_err();
        match err {
            DataokeError::Api(api) => {
                assert_eq!(api.code, 40001);
                assert!(api.msg.contains("invalid signature"));
                assert_eq!(api.request_id.as_deref(), Some("req-1"));
                assert!(api.to_string().contains("invalid signature"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_or_null_payload_is_ok_none() {
        let envelope = Envelope::from_slice(br#"{"code": 0, "msg": "ok"}"#).unwrap();
        assert_eq!(envelope.decode::<Point>().unwrap(), None);

        let envelope = Envelope::from_slice(br#"{"code": 0, "data": null}"#).unwrap();
        assert_eq!(envelope.decode::<Point>().unwrap(), None);
    }

    #[test]
    fn test_empty_object_is_success_without_payload() {
        let envelope = Envelope::from_slice(b"{}").unwrap();
        assert!(!envelope.is_error());
        assert!(envelope.error().is_none());
        assert_eq!(envelope.decode::<Point>().unwrap(), None);
    }

    #[test]
    fn test_payload_shape_mismatch_is_decode_error() {
        let envelope = Envelope::from_slice(br#"{"code": 0, "data": {"x": "five"}}"#).unwrap();
        let err = envelope.decode::<Point>().unwrap_err();
        assert!(matches!(
            err,
            DataokeError::Decode(DecodeError {
                target: DecodeTarget::Payload,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_body_is_envelope_decode_error() {
        let err = Envelope::from_slice(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.target, DecodeTarget::Envelope);
        assert!(err.to_string().contains("response envelope"));
    }

    #[test]
    fn test_quoted_code_and_time_are_accepted() {
        let envelope =
            Envelope::from_slice(br#"{"code": "0", "time": "1599034389491", "data": {"x": 1, "y": "2"}}"#)
                .unwrap();
        assert_eq!(envelope.time, 1_599_034_389_491);
        assert_eq!(
            envelope.decode::<Point>().unwrap(),
            Some(Point { x: 1, y: 2 })
        );
    }

    #[test]
    fn test_unreadable_code_is_envelope_decode_error() {
        let bodies: [&[u8]; 5] = [
            br#"{"code": "ERR_SIGN", "msg": "bad sign", "data": {"x": 1}}"#,
            br#"{"code": 18446744073709551615, "data": {"x": 1}}"#,
            br#"{"code": 40001.5, "data": {"x": 1}}"#,
            br#"{"code": null, "data": {"x": 1}}"#,
            br#"{"code": {"value": 0}, "data": {"x": 1}}"#,
        ];

        for body in bodies {
            let err = Envelope::from_slice(body).unwrap_err();
            assert_eq!(err.target, DecodeTarget::Envelope);
        }
    }

    #[test]
    fn test_quoted_negative_code_is_error() {
        let envelope = Envelope::from_slice(br#"{"code": "-1", "msg": "not found"}"#).unwrap();
        assert!(envelope.is_error());
        assert_eq!(envelope.error().map(|e| e.code), Some(-1));
    }

    #[test]
    fn test_server_time() {
        let envelope = Envelope {
            time: 1_599_034_389_491,
            ..Envelope::default()
        };
        let time = envelope.server_time().unwrap();
        assert_eq!(time.timestamp_millis(), 1_599_034_389_491);

        assert!(Envelope::default().server_time().is_none());
    }

    #[test]
    fn test_decoding_same_bytes_twice_is_idempotent() {
        let body = br#"{"requestId": "r", "time": 1, "code": 0, "msg": "ok", "data": {"x": 3, "y": "4"}}"#;

        let first = Envelope::from_slice(body).unwrap();
        let second = Envelope::from_slice(body).unwrap();
        assert_eq!(first, second);

        let a: Option<Point> = first.decode().unwrap();
        let b: Option<Point> = second.decode().unwrap();
        assert_eq!(a, b);
    }
}
