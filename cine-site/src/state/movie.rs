//! In-memory state behind the movie browsing views.
//!
//! The state is owned by the `MovieProvider` context and mutated only
//! through its reducer. Everything in this module is plain data so the
//! merge rules can be exercised without a browser.

use cine_api::api::movie::list::get::ListData;
use cine_api::{Category, Movie};

/// Page size used when a listing fetch does not specify one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Collections and pagination flags backing the listing views.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieState {
    /// Category tree exactly as received from the backend.
    pub categories_raw: Vec<Category>,
    /// Flattened categories: each parent immediately followed by its
    /// children, input order preserved.
    pub categories: Vec<Category>,
    /// Movies of the listing currently on screen.
    pub movie_list: Vec<Movie>,
    /// Page targeted by the most recent listing fetch. Starts at 1.
    pub current_page: u32,
    /// Total listing size as last reported by the backend.
    pub total: u64,
    /// Whether another page is worth requesting. Heuristic: the last
    /// page came back full.
    pub has_more: bool,
    /// A listing fetch is in flight.
    pub loading: bool,
    /// Message of the most recent failed category fetch, cleared by the
    /// next successful one. Lets views tell "empty" apart from "failed".
    pub categories_error: Option<String>,
    /// Same, for listing fetches.
    pub list_error: Option<String>,
}

impl Default for MovieState {
    fn default() -> Self {
        Self {
            categories_raw: Vec::new(),
            categories: Vec::new(),
            movie_list: Vec::new(),
            current_page: 1,
            total: 0,
            has_more: true,
            loading: false,
            categories_error: None,
            list_error: None,
        }
    }
}

/// Flattens the category tree into a single sequence. Top-level entries
/// are visited in input order; each parent is emitted before its
/// children and the `children` field is dropped from every emitted
/// record.
pub fn flatten_categories(raw: &[Category]) -> Vec<Category> {
    let mut flat = Vec::new();
    for parent in raw {
        flat.push(strip_children(parent));
        if let Some(children) = &parent.children {
            for child in children {
                flat.push(strip_children(child));
            }
        }
    }
    flat
}

fn strip_children(category: &Category) -> Category {
    Category {
        id: category.id,
        name: category.name.clone(),
        pid: category.pid,
        video_count: category.video_count,
        children: None,
    }
}

impl MovieState {
    /// Stores a freshly fetched category tree, raw and flattened.
    pub fn with_categories(mut self, raw: Vec<Category>) -> Self {
        self.categories = flatten_categories(&raw);
        self.categories_raw = raw;
        self.categories_error = None;
        self
    }

    /// Degraded state after a failed category fetch: both category
    /// collections become empty.
    pub fn with_categories_failed(mut self, message: String) -> Self {
        self.categories_raw.clear();
        self.categories.clear();
        self.categories_error = Some(message);
        self
    }

    /// Marks a listing fetch as in flight.
    pub fn with_loading(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Merges one fetched listing page.
    ///
    /// `requested_page` and `requested_limit` are the values the fetch
    /// was issued with, not whatever the backend echoes back. A page
    /// shorter than `requested_limit` marks the end of the listing.
    pub fn with_list_page(
        mut self,
        data: ListData,
        append: bool,
        requested_page: u32,
        requested_limit: u32,
    ) -> Self {
        if let Some(total) = data.total {
            self.total = total;
        }
        match data.list {
            Some(page) => {
                self.has_more = page.len() == requested_limit as usize;
                if append {
                    self.movie_list.extend(page);
                } else {
                    self.movie_list = page;
                }
            }
            None => {
                if !append {
                    self.movie_list.clear();
                }
                self.has_more = false;
            }
        }
        self.current_page = requested_page;
        self.loading = false;
        self.list_error = None;
        self
    }

    /// Degraded state after a failed listing fetch. An appending fetch
    /// keeps what is already on screen.
    pub fn with_list_failure(mut self, append: bool, message: String) -> Self {
        if !append {
            self.movie_list.clear();
        }
        self.has_more = false;
        self.loading = false;
        self.list_error = Some(message);
        self
    }

    /// Returns the listing to its pristine state. Categories are kept.
    pub fn with_list_reset(mut self) -> Self {
        self.movie_list.clear();
        self.current_page = 1;
        self.has_more = true;
        self.total = 0;
        self
    }

    /// First category with the given id, if any.
    pub fn category_by_id(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// All categories filed under the given parent.
    pub fn child_categories(&self, parent_id: u32) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category.pid == parent_id)
            .collect()
    }

    /// All top-level categories.
    pub fn parent_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category.pid == 0)
            .collect()
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use googletest::matchers::is_empty as empty;
    use googletest::prelude::*;

    fn category(id: u32, pid: u32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            pid,
            video_count: None,
            children: None,
        }
    }

    fn tree() -> Vec<Category> {
        vec![
            Category {
                video_count: Some(10),
                children: Some(vec![category(11, 1, "C1"), category(12, 1, "C2")]),
                ..category(1, 0, "P1")
            },
            category(2, 0, "P2"),
        ]
    }

    fn movie(id: u64) -> Movie {
        Movie {
            id,
            video_title: format!("Movie {id}"),
            video_img_url: format!("https://img.example/{id}.jpg"),
            video_describe: String::new(),
            play_times: 0,
            play_times_formatted: None,
            type_name: None,
            video_url: None,
        }
    }

    fn page_of(ids: &[u64], total: Option<u64>) -> ListData {
        ListData {
            list: Some(ids.iter().copied().map(movie).collect()),
            total,
            page: None,
            limit: None,
        }
    }

    fn listed_ids(state: &MovieState) -> Vec<u64> {
        state.movie_list.iter().map(|movie| movie.id).collect()
    }

    #[googletest::gtest]
    fn flattening_emits_parents_before_their_children() {
        let flat = flatten_categories(&tree());

        let ids: Vec<u32> = flat.iter().map(|category| category.id).collect();
        expect_that!(ids, elements_are![eq(&1), eq(&11), eq(&12), eq(&2)]);
        expect_that!(flat.iter().all(|category| category.children.is_none()), is_true());
    }

    #[googletest::gtest]
    fn flattening_keeps_scalar_fields() {
        let flat = flatten_categories(&tree());

        expect_that!(flat[0].video_count, some(eq(10)));
        expect_that!(flat[1].pid, eq(1));
        expect_that!(flat[1].name, eq("C1"));
    }

    #[googletest::gtest]
    fn categories_apply_keeps_raw_tree_verbatim() {
        let state = MovieState::default().with_categories(tree());

        expect_that!(state.categories_raw, eq(&tree()));
        expect_that!(state.categories.len(), eq(4));
    }

    #[googletest::gtest]
    fn failed_category_fetch_empties_both_collections() {
        let state = MovieState::default()
            .with_categories(tree())
            .with_categories_failed("boom".to_string());

        expect_that!(state.categories_raw, empty());
        expect_that!(state.categories, empty());
        expect_that!(state.categories_error.as_deref(), some(eq("boom")));
    }

    #[googletest::gtest]
    fn appending_concatenates_existing_items_first() {
        let state = MovieState::default()
            .with_list_page(page_of(&[1, 2, 3], None), false, 1, 3)
            .with_list_page(page_of(&[4, 5], None), true, 2, 3);

        expect_that!(listed_ids(&state), elements_are![eq(&1), eq(&2), eq(&3), eq(&4), eq(&5)]);
        expect_that!(state.current_page, eq(2));
    }

    #[googletest::gtest]
    fn replacing_discards_the_previous_list() {
        let state = MovieState::default()
            .with_list_page(page_of(&[1, 2], None), false, 1, 2)
            .with_list_page(page_of(&[7], None), false, 1, 2);

        expect_that!(listed_ids(&state), elements_are![eq(&7)]);
    }

    #[googletest::gtest]
    fn has_more_tracks_whether_the_page_came_back_full() {
        let full = MovieState::default().with_list_page(page_of(&[1, 2, 3], None), false, 1, 3);
        expect_that!(full.has_more, is_true());

        let short = full.with_list_page(page_of(&[4], None), true, 2, 3);
        expect_that!(short.has_more, is_false());
    }

    #[googletest::gtest]
    fn total_updates_only_when_reported() {
        let state = MovieState::default().with_list_page(page_of(&[1], Some(41)), false, 1, 20);
        expect_that!(state.total, eq(41));

        let state = state.with_list_page(page_of(&[2], None), true, 2, 20);
        expect_that!(state.total, eq(41));
    }

    #[googletest::gtest]
    fn missing_list_clears_when_replacing() {
        let state = MovieState::default()
            .with_list_page(page_of(&[1, 2], None), false, 1, 2)
            .with_list_page(ListData::default(), false, 1, 2);

        expect_that!(state.movie_list, empty());
        expect_that!(state.has_more, is_false());
    }

    #[googletest::gtest]
    fn missing_list_keeps_items_when_appending() {
        let state = MovieState::default()
            .with_list_page(page_of(&[1, 2], None), false, 1, 2)
            .with_list_page(ListData::default(), true, 2, 2);

        expect_that!(listed_ids(&state), elements_are![eq(&1), eq(&2)]);
        expect_that!(state.has_more, is_false());
    }

    #[googletest::gtest]
    fn failure_when_replacing_empties_the_list() {
        let state = MovieState::default()
            .with_list_page(page_of(&[1, 2], None), false, 1, 2)
            .with_loading()
            .with_list_failure(false, "offline".to_string());

        expect_that!(state.movie_list, empty());
        expect_that!(state.has_more, is_false());
        expect_that!(state.loading, is_false());
        expect_that!(state.list_error.as_deref(), some(eq("offline")));
    }

    #[googletest::gtest]
    fn failure_when_appending_keeps_existing_items() {
        let state = MovieState::default()
            .with_list_page(page_of(&[1, 2], None), false, 1, 2)
            .with_list_failure(true, "offline".to_string());

        expect_that!(listed_ids(&state), elements_are![eq(&1), eq(&2)]);
        expect_that!(state.has_more, is_false());
    }

    #[googletest::gtest]
    fn loading_clears_on_every_exit_path() {
        let success = MovieState::default()
            .with_loading()
            .with_list_page(page_of(&[1], None), false, 1, 20);
        expect_that!(success.loading, is_false());
        expect_that!(success.list_error, none());

        let failure = MovieState::default()
            .with_loading()
            .with_list_failure(false, "boom".to_string());
        expect_that!(failure.loading, is_false());
    }

    #[googletest::gtest]
    fn reset_restores_the_pristine_listing() {
        let state = MovieState::default()
            .with_categories(tree())
            .with_list_page(page_of(&[1, 2, 3], Some(99)), false, 4, 3)
            .with_list_reset();

        expect_that!(state.movie_list, empty());
        expect_that!(state.current_page, eq(1));
        expect_that!(state.has_more, is_true());
        expect_that!(state.total, eq(0));
        // categories survive a listing reset
        expect_that!(state.categories.len(), eq(4));

        let again = state.clone().with_list_reset();
        expect_that!(again, eq(&state));
    }

    #[googletest::gtest]
    fn list_data_parsed_from_backend_json_merges_cleanly() -> googletest::Result<()> {
        let data: ListData = serde_json::from_str(
            r#"{
                "list": [
                    { "id": 9, "video_title": "Nine", "video_img_url": "https://img.example/9.jpg" }
                ],
                "total": 1,
                "page": 1,
                "limit": 20
            }"#,
        )
        .or_fail()?;

        let state = MovieState::default().with_list_page(data, false, 1, 20);
        expect_that!(listed_ids(&state), elements_are![eq(&9)]);
        expect_that!(state.total, eq(1));
        expect_that!(state.has_more, is_false());
        Ok(())
    }

    #[googletest::gtest]
    fn lookups_over_the_flattened_collection() {
        let state = MovieState::default().with_categories(tree());

        expect_that!(state.category_by_id(11).map(|c| c.name.as_str()), some(eq("C1")));
        expect_that!(state.category_by_id(99), none());

        let children: Vec<u32> = state.child_categories(1).iter().map(|c| c.id).collect();
        expect_that!(children, elements_are![eq(&11), eq(&12)]);

        let parents: Vec<u32> = state.parent_categories().iter().map(|c| c.id).collect();
        expect_that!(parents, elements_are![eq(&1), eq(&2)]);
    }
}
