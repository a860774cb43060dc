//! Typed client for the ad service.
//!
//! The ad service lives on its own origin and takes its parameters as a
//! POST body rather than query-string values.

use cine_api::Ad;
use cine_api::api::ad::ad_list::post;
use gloo_net::http::Request;

use super::{ApiError, ad_base, fetch_with_body};

/// Fetches the advertisements of a placement. A successful response
/// without a payload means the placement is empty.
pub async fn ad_list(type_id: u32) -> Result<Vec<Ad>, ApiError> {
    let url = format!("{}/ad/ad_list", ad_base());
    let body = post::Body { type_id };
    Ok(fetch_with_body::<Vec<Ad>, _>(Request::post(&url), &body)
        .await?
        .unwrap_or_default())
}
