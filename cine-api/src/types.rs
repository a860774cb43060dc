//! Common data types used by the movie and ad APIs

/// Envelope code signalling a successful request.
pub const CODE_OK: i32 = 200;

/// Application-level wrapper shared by every backend response.
///
/// The transport status of a response says nothing about the outcome;
/// `code` carries it instead. `data` and `message` are optional and their
/// presence depends on the endpoint and on the outcome.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Clone)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Application status code. [`CODE_OK`] signals success.
    pub code: i32,
    /// Endpoint-specific payload. Absent on failures and on endpoints
    /// that return nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable outcome description, mostly used on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A movie category.
///
/// Categories form a two-level tree: entries with `pid == 0` are parents,
/// entries with a nonzero `pid` are children of the parent carrying that
/// id.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct Category {
    /// Unique identifier of the category
    pub id: u32,
    /// Human-readable name of the category
    pub name: String,
    /// Identifier of the parent category, `0` for top-level entries
    pub pid: u32,
    /// Number of movies filed under the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_count: Option<u64>,
    /// Nested child categories. Present only in the tree form returned
    /// by the backend; flattened records drop it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
}

/// Metadata of a single movie as returned by the listing and info
/// endpoints.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct Movie {
    /// Unique identifier of the movie
    pub id: u64,
    /// Display title
    pub video_title: String,
    /// Poster image URL
    pub video_img_url: String,
    /// Short synopsis
    #[serde(default)]
    pub video_describe: String,
    /// Raw play counter
    #[serde(default)]
    pub play_times: u64,
    /// Pre-formatted play counter for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_times_formatted: Option<String>,
    /// Name of the category the movie is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Playable stream URL. Only the info endpoint fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// A single advertisement entry.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct Ad {
    /// Unique identifier of the ad
    pub id: u64,
    /// Internal name of the campaign
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Creative image URL
    pub image_url: String,
    /// Click-through target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Placement the ad was served for
    pub type_id: u32,
}

#[cfg(test)]
pub mod test {
    use super::*;
    use googletest::matchers::is_empty as empty;
    use googletest::prelude::*;

    #[googletest::gtest]
    fn deserialize_envelope_without_payload() -> googletest::Result<()> {
        let envelope =
            serde_json::from_str::<Envelope<Vec<Category>>>(r#"{"code":500,"message":"boom"}"#)
                .or_fail()?;
        expect_that!(envelope.code, eq(500));
        expect_that!(envelope.data, none());
        expect_that!(envelope.message.as_deref(), some(eq("boom")));
        Ok(())
    }

    #[googletest::gtest]
    fn deserialize_envelope_without_message() -> googletest::Result<()> {
        let envelope =
            serde_json::from_str::<Envelope<Vec<Category>>>(r#"{"code":200,"data":[]}"#)
                .or_fail()?;
        expect_that!(envelope.code, eq(CODE_OK));
        expect_that!(envelope.data, some(empty()));
        expect_that!(envelope.message, none());
        Ok(())
    }

    #[googletest::gtest]
    fn deserialize_category_tree() -> googletest::Result<()> {
        let serialized = r#"{
            "code": 200,
            "data": [
                {
                    "id": 1,
                    "name": "Action",
                    "pid": 0,
                    "video_count": 120,
                    "children": [
                        { "id": 11, "name": "Martial arts", "pid": 1 }
                    ]
                },
                { "id": 2, "name": "Drama", "pid": 0 }
            ],
            "message": "ok"
        }"#;

        let envelope: Envelope<Vec<Category>> = serde_json::from_str(serialized).or_fail()?;
        let categories = envelope.data.or_fail()?;
        expect_that!(categories.len(), eq(2));
        expect_that!(categories[0].name, eq("Action"));
        expect_that!(categories[0].video_count, some(eq(120)));

        let children = categories[0].children.as_ref().or_fail()?;
        expect_that!(children.len(), eq(1));
        expect_that!(children[0].pid, eq(1));
        expect_that!(categories[1].children, none());
        Ok(())
    }

    #[googletest::gtest]
    fn deserialize_movie_tolerates_sparse_and_unknown_fields() -> googletest::Result<()> {
        let serialized = r#"{
            "id": 42,
            "video_title": "The Long Night",
            "video_img_url": "https://img.example/42.jpg",
            "score": "9.1"
        }"#;

        let movie: Movie = serde_json::from_str(serialized).or_fail()?;
        expect_that!(movie.id, eq(42));
        expect_that!(movie.video_describe, eq(""));
        expect_that!(movie.play_times, eq(0));
        expect_that!(movie.play_times_formatted, none());
        expect_that!(movie.video_url, none());
        Ok(())
    }
}
