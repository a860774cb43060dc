use yew::prelude::*;
use yew_router::prelude::*;

use cine_api::api::movie::list::get::Query;

use crate::app::Route;
use crate::context::{DeviceContextHandle, MovieAction, MovieContextHandle, fetch_movie_list};
use crate::pages::home::MovieGrid;

fn category_query(id: u32, page: u32) -> Query {
    Query {
        page: Some(page),
        type_id: Some(id),
        ..Query::default()
    }
}

#[derive(yew::Properties, PartialEq, Eq)]
pub struct CategoryPageProps {
    pub id: u32,
}

#[function_component(CategoryPage)]
pub fn category_page(CategoryPageProps { id }: &CategoryPageProps) -> Html {
    let movies = use_context::<MovieContextHandle>().expect("MovieContext not found");
    let device = use_context::<DeviceContextHandle>().expect("DeviceContext not found");

    // Start over whenever the route points at a different category.
    {
        let movies = movies.clone();
        use_effect_with(*id, move |id| {
            movies.dispatch(MovieAction::ResetList);
            fetch_movie_list(movies, category_query(*id, 1), false);
            || ()
        });
    }

    let name = movies
        .category_by_id(*id)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| "Category".to_string());
    let children = movies.child_categories(*id);

    let on_load_more = {
        let movies = movies.clone();
        let id = *id;
        Callback::from(move |_| {
            let next_page = movies.current_page + 1;
            fetch_movie_list(movies.clone(), category_query(id, next_page), true);
        })
    };

    html! {
        <div class={classes!("page", "category-page", device.class().as_str())}>
            <header class="header">
                <h1>{ name }</h1>
            </header>

            if !children.is_empty() {
                <nav class="category-nav">
                    {
                        children.iter().map(|child| html! {
                            <Link<Route> to={Route::Category { id: child.id }} classes={"category-link"}>
                                { &child.name }
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </nav>
            }

            <MovieGrid />

            if movies.has_more {
                <button class="load-more" onclick={on_load_more} disabled={movies.loading}>
                    { if movies.loading { "Loading..." } else { "Load more" } }
                </button>
            }
        </div>
    }
}
