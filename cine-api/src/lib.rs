//! The `cine-api` crate defines common data types shared by `cine-site` and
//! the backend movie service.
//!
//! The crate follows these conventions:
//! - Each API endpoint of the backend defines a full namespace path.
//! - For each endpoint namespace, `cine-api` defines a nested namespace
//!   with the API method of the endpoint.
//! - Inside the namespace for a given API endpoint, the following types are defined:
//!   - If the request method is `GET`, a `Query` type may be defined to indicate what query
//!     parameters can be sent to the server.
//!   - If the request method is `POST`, a `Body` type defines the JSON request body.
//!   - A `Response` type defines the JSON body returned by the endpoint.
//!   - Any additional types required to define either the query or the response.
//!
//! Every response body is an [`Envelope`]: the transport status is always 200
//! and the `code` field carries the application-level outcome.
//!
//! The supported endpoints are:
//!  - `GET` `movie/type_list`. Returns the two-level category tree.
//!  - `GET` `movie/list`. Returns one page of the movie listing, optionally
//!    filtered by category or keyword.
//!  - `GET` `movie/info`. Returns the full metadata of a single movie.
//!  - `POST` `movie/play_log`. Records a play event for a movie.
//!  - `POST` `ad/ad_list`. Returns the advertisements of a placement. Served
//!    by a separate origin than the movie endpoints.

mod types;

pub use types::{Ad, CODE_OK, Category, Envelope, Movie};

pub mod api {
    pub mod movie {
        pub mod type_list {
            pub mod get {
                use crate::types::{Category, Envelope};

                /// The response to the `GET` `movie/type_list` request
                pub type Response = Envelope<Vec<Category>>;
            }
        }

        pub mod list {
            pub mod get {
                use crate::types::{Envelope, Movie};

                /// The query that can be used in a `GET` `movie/list` request
                #[derive(Default, Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct Query {
                    /// 1-based page to fetch
                    pub page: Option<u32>,
                    /// Maximum number of movies per page
                    pub limit: Option<u32>,
                    /// Restrict the listing to one category
                    pub type_id: Option<u32>,
                    /// Free-text title filter
                    pub keyword: Option<String>,
                }

                impl Query {
                    /// Renders the fields that are set as query-string pairs.
                    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
                        let mut pairs = Vec::new();
                        if let Some(page) = self.page {
                            pairs.push(("page", page.to_string()));
                        }
                        if let Some(limit) = self.limit {
                            pairs.push(("limit", limit.to_string()));
                        }
                        if let Some(type_id) = self.type_id {
                            pairs.push(("type_id", type_id.to_string()));
                        }
                        if let Some(keyword) = &self.keyword {
                            pairs.push(("keyword", keyword.clone()));
                        }
                        pairs
                    }
                }

                /// Contents of the `data` field of the listing response.
                /// Everything is optional; the backend omits `list` when the
                /// filters match nothing at all.
                #[derive(Default, Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct ListData {
                    /// One page of movies
                    #[serde(default)]
                    pub list: Option<Vec<Movie>>,
                    /// Total number of movies matching the filters
                    #[serde(default)]
                    pub total: Option<u64>,
                    /// Page the backend actually served
                    #[serde(default)]
                    pub page: Option<u32>,
                    /// Page size the backend applied
                    #[serde(default)]
                    pub limit: Option<u32>,
                }

                /// The response to the `GET` `movie/list` request
                pub type Response = Envelope<ListData>;
            }
        }

        pub mod info {
            pub mod get {
                use crate::types::{Envelope, Movie};

                /// The query that can be used in a `GET` `movie/info` request
                #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct Query {
                    /// Identifier of the requested movie
                    pub id: u64,
                }

                /// The response to the `GET` `movie/info` request
                pub type Response = Envelope<Movie>;
            }
        }

        pub mod play_log {
            pub mod post {
                use crate::types::Envelope;

                /// The body of the `POST` `movie/play_log` request
                #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct Body {
                    /// Identifier of the movie being played
                    pub content_id: u64,
                }

                /// The response to the `POST` `movie/play_log` request. The
                /// envelope carries no payload.
                pub type Response = Envelope<()>;
            }
        }
    }

    pub mod ad {
        pub mod ad_list {
            pub mod post {
                use crate::types::{Ad, Envelope};

                /// The body of the `POST` `ad/ad_list` request
                #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct Body {
                    /// Placement to fetch advertisements for
                    pub type_id: u32,
                }

                /// The response to the `POST` `ad/ad_list` request
                pub type Response = Envelope<Vec<Ad>>;
            }
        }
    }
}
