//! Typed client for the movie endpoints.

use cine_api::api::movie::list::get::{ListData, Query};
use cine_api::api::movie::play_log;
use cine_api::{Category, Movie};
use gloo_net::http::Request;

use super::{ApiError, api_base, fetch, fetch_with_body};

/// Fetches the category tree. A successful response without a payload is
/// treated as an empty tree.
pub async fn type_list() -> Result<Vec<Category>, ApiError> {
    let url = format!("{}/movie/type_list", api_base());
    Ok(fetch::<Vec<Category>>(Request::get(&url))
        .await?
        .unwrap_or_default())
}

/// Fetches one page of the movie listing.
pub async fn list(query: &Query) -> Result<ListData, ApiError> {
    let url = format!("{}/movie/list", api_base());
    let request = Request::get(&url).query(query.query_pairs());
    Ok(fetch::<ListData>(request).await?.unwrap_or_default())
}

/// Fetches the full metadata of a single movie. `None` means the backend
/// does not know the id.
pub async fn info(id: u64) -> Result<Option<Movie>, ApiError> {
    let url = format!("{}/movie/info", api_base());
    let request = Request::get(&url).query([("id", id.to_string())]);
    fetch(request).await
}

/// Records a play event for a movie. The response carries no payload.
pub async fn add_play_log(content_id: u64) -> Result<(), ApiError> {
    let url = format!("{}/movie/play_log", api_base());
    let body = play_log::post::Body { content_id };
    fetch_with_body::<(), _>(Request::post(&url), &body).await?;
    Ok(())
}
