//! Affiliate network search (`tb-service/get-tb-service`).
//!
//! Unlike the Dataoke endpoints, the items come back in the affiliate
//! network's own `snake_case` shape.

use serde::{Deserialize, Serialize};

use crate::clients::DataokeClient;
use crate::endpoints::ApiRequest;
use crate::error::DataokeError;
use crate::params::Params;

const DEFAULT_PAGE_NO: i32 = 1;
const DEFAULT_PAGE_SIZE: i32 = 20;

/// Searches the affiliate network by keyword.
///
/// Page number defaults to 1 and page size to 20. The attribute filters
/// (`source`, `overseas`, `need_prepay`, `include_good_rate`) are only sent
/// when set to `1`.
///
/// # Example
///
/// ```rust
/// use dataoke_api::{ApiRequest, TbServiceRequest};
///
/// let request = TbServiceRequest {
///     end_price: 50.0,
///     has_coupon: true,
///     ..TbServiceRequest::new("phone case")
/// };
///
/// let params = request.to_params();
/// assert_eq!(params.get("pageNo"), Some("1"));
/// assert_eq!(params.get("pageSize"), Some("20"));
/// assert_eq!(params.get("endPrice"), Some("50.00"));
/// assert_eq!(params.get("hasCoupon"), Some("true"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TbServiceRequest {
    pub page_no: i32,
    /// 1 to 100.
    pub page_size: i32,
    /// Search keywords. Always sent.
    pub key_words: String,
    /// Sort key with direction, e.g. `total_sales_des` or `price_asc`.
    pub sort: String,
    /// 1 to restrict to Tmall. Conflicts with `overseas`.
    pub source: i32,
    /// 1 to restrict to overseas items. Conflicts with `source`.
    pub overseas: i32,
    /// Upper bound of the discounted price, in yuan.
    pub end_price: f64,
    /// Lower bound of the discounted price, in yuan.
    pub start_price: f64,
    /// Lower bound of the commission rate, in basis points (1234 = 12.34%).
    pub start_tk_rate: i32,
    /// Upper bound of the commission rate, in basis points.
    pub end_tk_rate: i32,
    pub has_coupon: bool,
    pub special_id: String,
    pub channel_id: String,
    /// City the item ships from, e.g. `杭州`.
    pub item_loc: String,
    /// 1 to restrict to items with consumer protection.
    pub need_prepay: i32,
    /// 1 to restrict to items rated above the category average.
    pub include_good_rate: i32,
}

impl TbServiceRequest {
    /// Creates a first-page search for `key_words`.
    #[must_use]
    pub fn new(key_words: impl Into<String>) -> Self {
        Self {
            key_words: key_words.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for TbServiceRequest {
    const PATH: &'static str = "tb-service/get-tb-service";
    type Response = Vec<TbkItem>;

    fn params(&self, params: &mut Params) {
        let page_no = if self.page_no < 1 {
            DEFAULT_PAGE_NO
        } else {
            self.page_no
        };
        let page_size = if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        };
        params.set("pageNo", page_no.to_string());
        params.set("pageSize", page_size.to_string());
        params.set("keyWords", self.key_words.as_str());
        params.set_str("sort", &self.sort);

        for (key, value) in [
            ("source", self.source),
            ("overseas", self.overseas),
            ("needPrepay", self.need_prepay),
            ("includeGoodRate", self.include_good_rate),
        ] {
            if value == 1 {
                params.set(key, "1");
            }
        }

        params.set_price("endPrice", self.end_price);
        params.set_price("startPrice", self.start_price);
        if self.start_tk_rate > 0 {
            params.set_int("startTkRate", self.start_tk_rate);
        }
        if self.end_tk_rate > 0 {
            params.set_int("endTkRate", self.end_tk_rate);
        }
        params.set_flag("hasCoupon", self.has_coupon);
        params.set_str("specialId", &self.special_id);
        params.set_str("channelId", &self.channel_id);
        params.set_str("itemLoc", &self.item_loc);
    }
}

/// One search hit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TbkItem {
    /// Product title.
    pub title: String,
    /// 30-day sales.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub volume: i64,
    /// Seller nickname.
    pub nick: String,
    /// Coupon start time.
    pub coupon_start_time: String,
    /// Coupon end time.
    pub coupon_end_time: String,
    /// 30-day affiliate promotions.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub tk_total_sales: i64,
    /// Coupon id.
    pub coupon_id: String,
    /// Main picture.
    pub pict_url: String,
    /// Secondary pictures.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub small_images: SmallImages,
    /// List price.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub reserve_price: f64,
    /// Discounted price.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub zk_final_price: f64,
    /// 0 marketplace, 1 Tmall.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub user_type: i32,
    /// Seller id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub seller_id: u64,
    /// Total coupons issued.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_total_count: i64,
    /// Coupons still available.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_remain_count: i64,
    /// Coupon threshold text, e.g. `满99元减10元`.
    pub coupon_info: String,
    /// Shop name.
    pub shop_title: String,
    /// Shop DSR rating.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub shop_dsr: i64,
    /// Top-level category name.
    pub level_one_category_name: String,
    /// Top-level category id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub level_one_category_id: u64,
    /// Leaf category name.
    pub category_name: String,
    /// Leaf category id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub category_id: u64,
    /// Short title.
    pub short_title: String,
    /// White-background picture.
    pub white_image: String,
    /// Minimum spend for the coupon.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_start_fee: f64,
    /// Coupon face value.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_amount: i64,
    /// Recommendation text.
    pub item_description: String,
    /// `uland.taobao.com` link.
    pub item_url: String,
    /// `s.click.taobao.com` link.
    pub url: String,
    /// Product id.
    pub num_iid: String,
    /// Product id.
    pub item_id: String,
    /// Commission rate.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub commission_rate: f64,
    /// Estimated cash gift.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub ysyl_jlt_face: f64,
    /// Presale deposit.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub presale_deposit: f64,
    /// Deposit discount text.
    pub presale_discount_fee_text: String,
    pub province: String,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub real_post_fee: f64,
    /// Reward activity id.
    pub activity_id: String,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub cpa_reward_amount: f64,
}

/// Secondary pictures, wrapped as `{"string": [...]}` on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallImages {
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub string: Vec<String>,
}

/// Searches the affiliate network.
///
/// # Errors
///
/// See [`DataokeClient::call`].
pub async fn get_tb_service(
    client: &DataokeClient,
    request: &TbServiceRequest,
) -> Result<Vec<TbkItem>, DataokeError> {
    client.request(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_always_sent_params() {
        let params = TbServiceRequest::default().to_params();

        assert_eq!(params.get("pageNo"), Some("1"));
        assert_eq!(params.get("pageSize"), Some("20"));
        assert_eq!(params.get("keyWords"), Some(""));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_page_values_pass_through() {
        let request = TbServiceRequest {
            page_no: 3,
            page_size: 50,
            ..TbServiceRequest::new("kettle")
        };
        let params = request.to_params();

        assert_eq!(params.get("pageNo"), Some("3"));
        assert_eq!(params.get("pageSize"), Some("50"));
        assert_eq!(params.get("keyWords"), Some("kettle"));
    }

    #[test]
    fn test_negative_page_no_falls_back_to_first_page() {
        let request = TbServiceRequest {
            page_no: -4,
            ..TbServiceRequest::default()
        };
        assert_eq!(request.to_params().get("pageNo"), Some("1"));
    }

    #[test]
    fn test_attribute_filters_only_sent_when_one() {
        let request = TbServiceRequest {
            source: 1,
            overseas: 2,
            need_prepay: 1,
            include_good_rate: 0,
            ..TbServiceRequest::default()
        };
        let params = request.to_params();

        assert_eq!(params.get("source"), Some("1"));
        assert!(!params.contains_key("overseas"));
        assert_eq!(params.get("needPrepay"), Some("1"));
        assert!(!params.contains_key("includeGoodRate"));
    }

    #[test]
    fn test_price_and_rate_filters() {
        let request = TbServiceRequest {
            start_price: 9.5,
            end_price: 0.0,
            start_tk_rate: 1234,
            end_tk_rate: -1,
            ..TbServiceRequest::default()
        };
        let params = request.to_params();

        assert_eq!(params.get("startPrice"), Some("9.50"));
        assert!(!params.contains_key("endPrice"));
        assert_eq!(params.get("startTkRate"), Some("1234"));
        assert!(!params.contains_key("endTkRate"));
        assert!(!params.contains_key("hasCoupon"));
    }

    #[test]
    fn test_decode_snake_case_items() {
        let json = r#"[{
            "title": "Stainless kettle",
            "volume": "2031",
            "small_images": {"string": ["https://img/1.jpg", "https://img/2.jpg"]},
            "zk_final_price": "59.00",
            "seller_id": 2201234567,
            "coupon_amount": "10",
            "num_iid": "590858626868",
            "commission_rate": "1650"
        }, {
            "title": "No images",
            "small_images": null
        }]"#;

        let items: Vec<TbkItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.volume, 2031);
        assert_eq!(first.small_images.string.len(), 2);
        assert_eq!(first.zk_final_price, 59.0);
        assert_eq!(first.seller_id, 2_201_234_567);
        assert_eq!(first.coupon_amount, 10);
        assert_eq!(first.commission_rate, 1650.0);

        assert!(items[1].small_images.string.is_empty());
    }
}
