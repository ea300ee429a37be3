//! Typed endpoint definitions for the Dataoke open API.
//!
//! Each endpoint is a request struct implementing [`ApiRequest`] plus a
//! response struct. The client signs whatever [`ApiRequest::params`] writes,
//! sends it to [`ApiRequest::PATH`] and decodes the payload into
//! [`ApiRequest::Response`].
//!
//! # Shipped Endpoints
//!
//! | Request | Path | Response |
//! |---|---|---|
//! | [`GoodsDetailsRequest`] | `goods/get-goods-details` | [`GoodsDetail`] |
//! | [`PrivilegeLinkRequest`] | `tb-service/get-privilege-link` | [`PrivilegeLink`] |
//! | [`TbServiceRequest`] | `tb-service/get-tb-service` | `Vec<`[`TbkItem`]`>` |
//! | [`ParseContentRequest`] | `tb-service/parse-content` | [`ParseContentResult`] |
//!
//! # Adding an Endpoint
//!
//! ```rust
//! use dataoke_api::{ApiRequest, Params};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(rename_all = "camelCase", default)]
//! struct Category {
//!     cname: String,
//! }
//!
//! struct SuperCategoryRequest;
//!
//! impl ApiRequest for SuperCategoryRequest {
//!     const PATH: &'static str = "category/get-super-category";
//!     type Response = Vec<Category>;
//!
//!     fn params(&self, _params: &mut Params) {}
//! }
//! ```

mod goods_details;
mod parse_content;
mod privilege_link;
mod tb_service;

pub use goods_details::{get_goods_details, ActivityInfo, GoodsDetail, GoodsDetailsRequest};
pub use parse_content::{parse_content, OriginInfo, ParseContentRequest, ParseContentResult};
pub use privilege_link::{get_privilege_link, PrivilegeLink, PrivilegeLinkRequest};
pub use tb_service::{get_tb_service, SmallImages, TbServiceRequest, TbkItem};

use serde::de::DeserializeOwned;

use crate::clients::HttpMethod;
use crate::params::Params;

/// A typed request against one endpoint.
pub trait ApiRequest {
    /// Endpoint path relative to the gateway, without a leading `/`.
    const PATH: &'static str;

    /// HTTP method used to send the request.
    const METHOD: HttpMethod = HttpMethod::Get;

    /// The decoded payload. A successful call without payload yields
    /// `Response::default()`.
    type Response: DeserializeOwned + Default;

    /// Writes this request's parameters into `params`.
    ///
    /// Optional fields left at their zero value must be omitted. `appKey`,
    /// `version` and `sign` are added by the client afterwards.
    fn params(&self, params: &mut Params);

    /// Collects the parameters into a fresh set.
    #[must_use]
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        self.params(&mut params);
        params
    }
}
