//! High-efficiency link conversion (`tb-service/get-privilege-link`).
//!
//! Turns a Taobao goods id into affiliate links and a Taobao password
//! (`tpwd`) bound to the caller's promotion position.

use serde::{Deserialize, Serialize};

use crate::clients::DataokeClient;
use crate::endpoints::ApiRequest;
use crate::error::DataokeError;
use crate::params::Params;

/// Converts a product into affiliate links.
///
/// Only `goods_id` is required; every other field is omitted when empty
/// or zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrivilegeLinkRequest {
    /// Taobao goods id. Always sent.
    pub goods_id: String,
    /// Pick a specific coupon when the product has several.
    pub coupon_id: String,
    /// Promotion position; the app's bound pid is used when empty.
    pub pid: String,
    /// Channel (relation) id, verified against `pid`.
    pub channel_id: String,
    pub biz_scene_id: i32,
    /// 1 for self-purchase, 2 for sharing. Required in agent mode.
    pub promotion_type: i32,
    /// 1 to opt into deposit-refund red packets.
    pub rebate_type: i32,
    /// Membership operation id.
    pub special_id: String,
    /// Caller-side user marker.
    pub external_id: String,
    pub xid: String,
    /// Symbol placed left of the Taobao password; service default is `￥`.
    pub left_symbol: String,
    /// Symbol placed right of the Taobao password; service default is `￥`.
    pub right_symbol: String,
    /// Taobao authorization id. Requires a `pid` of the same account.
    pub auth_id: String,
}

impl PrivilegeLinkRequest {
    /// Creates a request with only the goods id set.
    #[must_use]
    pub fn new(goods_id: impl Into<String>) -> Self {
        Self {
            goods_id: goods_id.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for PrivilegeLinkRequest {
    const PATH: &'static str = "tb-service/get-privilege-link";
    type Response = PrivilegeLink;

    fn params(&self, params: &mut Params) {
        params.set("goodsId", self.goods_id.as_str());
        params.set_str("couponId", &self.coupon_id);
        params.set_str("pid", &self.pid);
        params.set_str("channelId", &self.channel_id);
        if self.biz_scene_id > 0 {
            params.set_int("bizSceneId", self.biz_scene_id);
        }
        if self.promotion_type > 0 {
            params.set_int("promotionType", self.promotion_type);
        }
        if self.rebate_type > 0 {
            params.set_int("rebateType", self.rebate_type);
        }
        params.set_str("specialId", &self.special_id);
        params.set_str("externalId", &self.external_id);
        params.set_str("xid", &self.xid);
        params.set_str("leftSymbol", &self.left_symbol);
        params.set_str("rightSymbol", &self.right_symbol);
        params.set_str("authId", &self.auth_id);
    }
}

/// Conversion result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivilegeLink {
    /// Coupon promotion link.
    pub coupon_click_url: String,
    pub coupon_end_time: String,
    /// Coupon face value, as text.
    pub coupon_info: String,
    pub coupon_start_time: String,
    pub item_id: String,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_total_count: i64,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_remain_count: i64,
    /// Affiliate product link.
    pub item_url: String,
    /// Taobao password.
    pub tpwd: String,
    /// Long-form password for clients that cannot parse the short one.
    pub long_tpwd: String,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub max_commission_rate: f64,
    pub short_url: String,
    /// Estimated minimum commission rate (%), present when a channel,
    /// special or external id was sent.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub min_commission_rate: f64,
    /// Link that opens inside WeChat. Dataoke products only.
    pub kuai_zhan_url: String,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub original_price: f64,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub actual_price: f64,
}

/// Converts a product into affiliate links.
///
/// # Errors
///
/// See [`DataokeClient::call`].
pub async fn get_privilege_link(
    client: &DataokeClient,
    request: &PrivilegeLinkRequest,
) -> Result<PrivilegeLink, DataokeError> {
    client.request(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goods_id_is_always_sent() {
        let params = PrivilegeLinkRequest::default().to_params();

        assert_eq!(params.get("goodsId"), Some(""));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_optional_fields_sent_when_set() {
        let request = PrivilegeLinkRequest {
            pid: "mm_1_2_3".to_string(),
            biz_scene_id: 1,
            promotion_type: 2,
            left_symbol: "(".to_string(),
            ..PrivilegeLinkRequest::new("590858626868")
        };
        let params = request.to_params();

        assert_eq!(params.get("goodsId"), Some("590858626868"));
        assert_eq!(params.get("pid"), Some("mm_1_2_3"));
        assert_eq!(params.get("bizSceneId"), Some("1"));
        assert_eq!(params.get("promotionType"), Some("2"));
        assert_eq!(params.get("leftSymbol"), Some("("));
        assert!(!params.contains_key("rebateType"));
        assert!(!params.contains_key("couponId"));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_negative_integers_are_omitted() {
        let request = PrivilegeLinkRequest {
            rebate_type: -1,
            ..PrivilegeLinkRequest::new("1")
        };
        assert!(!request.to_params().contains_key("rebateType"));
    }

    #[test]
    fn test_decode_quoted_numbers() {
        let json = r#"{
            "couponClickUrl": "https://uland.taobao.com/coupon",
            "tpwd": "￥AbCd123￥",
            "couponTotalCount": "10000",
            "couponRemainCount": 9500,
            "maxCommissionRate": "30.00",
            "minCommissionRate": "",
            "actualPrice": 9.9
        }"#;

        let link: PrivilegeLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.coupon_click_url, "https://uland.taobao.com/coupon");
        assert_eq!(link.tpwd, "￥AbCd123￥");
        assert_eq!(link.coupon_total_count, 10_000);
        assert_eq!(link.coupon_remain_count, 9_500);
        assert_eq!(link.max_commission_rate, 30.0);
        assert_eq!(link.min_commission_rate, 0.0);
        assert_eq!(link.actual_price, 9.9);
    }
}
