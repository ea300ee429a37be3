//! Universal content parsing (`tb-service/parse-content`).
//!
//! Extracts the product or promotion page behind a Taobao password or link
//! embedded in free text. Passwords are tried first, then each link in
//! order, until one resolves.

use serde::{Deserialize, Serialize};

use crate::clients::DataokeClient;
use crate::endpoints::ApiRequest;
use crate::error::DataokeError;
use crate::params::Params;

/// Parses text containing a Taobao password or link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseContentRequest {
    /// The text to parse. Always sent.
    pub content: String,
}

impl ParseContentRequest {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ApiRequest for ParseContentRequest {
    const PATH: &'static str = "tb-service/parse-content";
    type Response = ParseContentResult;

    fn params(&self, params: &mut Params) {
        params.set("content", self.content.as_str());
    }
}

/// What the content resolved to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseContentResult {
    pub goods_id: String,
    pub origin_url: String,
    /// Kind of information found in the link.
    pub origin_type: String,
    pub origin_info: Option<OriginInfo>,
    /// Product id for `goods`, promotion page id for `activity`.
    pub item_id: String,
    pub item_name: String,
    pub main_pic: String,
    /// `goods` or `activity`.
    pub data_type: String,
    /// 0 public coupon, 1 Alimama coupon.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_src_scene: i32,
    pub item_link: String,
    pub coupon_link: String,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub biz_scene_id: i32,
}

impl ParseContentResult {
    /// Returns `true` if the content resolved to a product.
    #[must_use]
    pub fn is_goods(&self) -> bool {
        self.data_type == "goods"
    }

    /// Returns `true` if the content resolved to a promotion page.
    #[must_use]
    pub fn is_activity(&self) -> bool {
        self.data_type == "activity"
    }
}

/// Product and coupon details found in the link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginInfo {
    pub title: String,
    pub shop_name: String,
    pub shop_logo: String,
    /// Main picture.
    pub image: String,
    /// Coupon start time.
    pub start_time: String,
    /// Coupon end time.
    pub end_time: String,
    /// Coupon amount.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub amount: f64,
    /// Coupon threshold.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub start_fee: f64,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub price: f64,
    /// Coupon id.
    pub activity_id: String,
    pub pid: String,
    /// Coupon status; 0 means usable.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub status: i32,
}

/// Parses `content` for a Taobao password or link.
///
/// # Errors
///
/// See [`DataokeClient::call`].
pub async fn parse_content(
    client: &DataokeClient,
    content: impl Into<String>,
) -> Result<ParseContentResult, DataokeError> {
    client.request(&ParseContentRequest::new(content)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_always_sent() {
        let params = ParseContentRequest::default().to_params();
        assert_eq!(params.get("content"), Some(""));

        let params = ParseContentRequest::new("￥AbCd123￥ https://m.tb.cn/h.x").to_params();
        assert_eq!(params.get("content"), Some("￥AbCd123￥ https://m.tb.cn/h.x"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_decode_goods_result() {
        let json = r#"{
            "goodsId": "590858626868",
            "dataType": "goods",
            "couponSrcScene": "1",
            "originInfo": {
                "title": "Stainless kettle",
                "amount": "10",
                "startFee": 99,
                "price": "59.00",
                "status": 0
            }
        }"#;

        let result: ParseContentResult = serde_json::from_str(json).unwrap();
        assert!(result.is_goods());
        assert!(!result.is_activity());
        assert_eq!(result.coupon_src_scene, 1);

        let info = result.origin_info.unwrap();
        assert_eq!(info.title, "Stainless kettle");
        assert_eq!(info.amount, 10.0);
        assert_eq!(info.start_fee, 99.0);
        assert_eq!(info.price, 59.0);
    }

    #[test]
    fn test_decode_without_origin_info() {
        let result: ParseContentResult =
            serde_json::from_str(r#"{"dataType": "activity", "originInfo": null}"#).unwrap();
        assert!(result.is_activity());
        assert!(result.origin_info.is_none());
    }
}
