//! Single product details (`goods/get-goods-details`).

use serde::{Deserialize, Serialize};

use crate::clients::DataokeClient;
use crate::endpoints::ApiRequest;
use crate::error::DataokeError;
use crate::params::Params;

/// Looks up one product by Dataoke id or Taobao goods id.
///
/// At least one of `id` and `goods_id` should be set; when both are, the
/// service prefers `id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoodsDetailsRequest {
    /// Dataoke product id.
    pub id: u64,
    /// Taobao goods id.
    pub goods_id: String,
}

impl GoodsDetailsRequest {
    /// Request by Dataoke product id.
    #[must_use]
    pub fn by_id(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Request by Taobao goods id.
    #[must_use]
    pub fn by_goods_id(goods_id: impl Into<String>) -> Self {
        Self {
            goods_id: goods_id.into(),
            ..Self::default()
        }
    }
}

impl ApiRequest for GoodsDetailsRequest {
    const PATH: &'static str = "goods/get-goods-details";
    type Response = GoodsDetail;

    fn params(&self, params: &mut Params) {
        params.set_int("id", self.id);
        params.set_str("goodsId", &self.goods_id);
    }
}

/// Product details.
///
/// An `id` of `-1` means the product is not listed on Dataoke and the data
/// came straight from Taobao.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoodsDetail {
    /// Taobao product id.
    pub goods_id: String,
    /// Dataoke product id; `-1` when the product is not on Dataoke.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub id: i64,
    /// Converted product id. It changes after each link conversion.
    pub goods_sign: String,
    /// Taobao product link.
    pub item_link: String,
    /// Taobao title.
    pub title: String,
    /// Short title.
    pub dtitle: String,
    /// Selling points.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub special_text: Vec<String>,
    /// Promotion copy.
    pub desc: String,
    /// Dataoke category id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub cid: u64,
    /// Front-end sub-categories; a product may sit in several.
    #[serde(deserialize_with = "crate::lenient::numbers")]
    pub sub_cid: Vec<u64>,
    /// Taobao category id.
    #[serde(rename = "tbcid", deserialize_with = "crate::lenient::number")]
    pub tb_cid: u64,
    /// Main image link.
    pub main_pic: String,
    /// Marketing main image link.
    pub marketing_main_pic: String,
    /// Product video.
    pub video: String,
    /// List price.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub original_price: f64,
    /// Price after coupon.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub actual_price: f64,
    /// Discount strength.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub discounts: f64,
    /// 0 general, 1 targeted, 2 high commission, 3 marketing plan.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub commission_type: i32,
    /// Commission rate.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub commission_rate: f64,
    /// Coupon link.
    pub coupon_link: String,
    /// Total coupons issued.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_total_num: i64,
    /// Coupons claimed so far.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_receive_num: i64,
    /// Coupon end time.
    pub coupon_end_time: String,
    /// Coupon start time.
    pub coupon_start_time: String,
    /// Coupon amount.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub coupon_price: f64,
    /// Coupon usage conditions.
    pub coupon_conditions: String,
    /// Sales over the last 30 days.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub month_sales: i64,
    /// Sales over the last 2 hours.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub two_hours_sales: i64,
    /// Sales today.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub daily_sales: i64,
    /// 1 for brand products.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub brand: i32,
    /// Brand id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub brand_id: u64,
    /// Brand name.
    pub brand_name: String,
    /// Listing time.
    pub create_time: String,
    /// 1 none, 2 flash sale, 3 group buy.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub activity_type: i32,
    /// Activity start time.
    pub activity_start_time: String,
    /// Activity end time.
    pub activity_end_time: String,
    /// 1 Tmall, 0 Taobao.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub shop_type: i32,
    /// 1 for gold sellers.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub gold_sellers: i32,
    /// Seller id, which is also the shop id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub seller_id: u64,
    /// Shop name.
    pub shop_name: String,
    /// Taobao shop level.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub shop_level: i32,
    /// Description score.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub desc_score: f64,
    /// Item-as-described score.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub dsr_score: f64,
    /// Item-as-described score relative to peers.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub dsr_percent: f64,
    /// Logistics score.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub ship_score: f64,
    /// Logistics score relative to peers.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub ship_percent: f64,
    /// Service score.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub service_score: f64,
    /// Service score relative to peers.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub service_percent: f64,
    /// Promotion heat.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub hot_push: i64,
    /// Name of the listing team.
    pub team_name: String,
    /// Detail images; needs adapting before display.
    pub detail_pics: String,
    /// Taobao carousel images.
    pub imgs: String,
    /// Related product images.
    pub reimgs: String,
    /// Presale deposit, 0 when there is none.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub quan_mlink: f64,
    /// Instant discount, 0 when there is none.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub hz_quan_over: f64,
    /// Return-shipping insurance included.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub yunfeixian: i32,
    /// Estimated Taobao gift money.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub estimate_amount: f64,
    /// Shop logo.
    pub shop_logo: String,
    /// 1 when shipping to remote districts is free.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub freeship_remote_district: i32,
    /// 1 when the product has a subdivided category.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub is_subdivision: i32,
    /// Subdivided category id.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub subdivision_id: u64,
    /// Subdivided category name.
    pub subdivision_name: String,
    /// Rank within the subdivided category.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub subdivision_rank: i32,
    /// 1 untargeted, 3 targeted commission.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub direct_commission_type: i32,
    /// Targeted commission.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub direct_commission: f64,
    /// Targeted commission link.
    pub direct_commission_link: String,
    /// Sales over the last 24 hours.
    #[serde(rename = "sales24h", deserialize_with = "crate::lenient::number")]
    pub sales_24h: i64,
    /// 1 when this is the lowest price in the last 30 days.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub lowest: i32,
    /// Coupon id.
    pub coupon_id: String,
    /// 1 shopping allowance, 2 cross-shop discount, 0 none.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub discount_type: i32,
    /// Spend threshold of the discount.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub discount_full: f64,
    /// Amount taken off once the threshold is met.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub discount_cut: f64,
    /// Activity details, when the product takes part in one.
    pub activity_info: Option<ActivityInfo>,
    /// Reward activity id.
    pub activity_id: String,
    /// 1 when the goods have been inspected.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub inspected_goods: i32,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub biz_scene_id: i32,
}

/// Promotion the product takes part in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityInfo {
    #[serde(deserialize_with = "crate::lenient::number")]
    pub activity_id: u64,
    pub activity_name: String,
}

/// Fetches the details of a single product.
///
/// # Errors
///
/// See [`DataokeClient::call`].
pub async fn get_goods_details(
    client: &DataokeClient,
    request: &GoodsDetailsRequest,
) -> Result<GoodsDetail, DataokeError> {
    client.request(request).await
}
