use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use cine_api::api::movie::list::get::Query;
use cine_api::{Ad, Movie};

use crate::api;
use crate::app::Route;
use crate::context::{DeviceContextHandle, MovieAction, MovieContextHandle, fetch_movie_list};

/// Placement id of the banner shown on the home page.
const HOME_AD_PLACEMENT: u32 = 1;

#[derive(yew::Properties, PartialEq)]
pub struct MovieCardProps {
    pub movie: Movie,
}

#[function_component(MovieCard)]
pub fn movie_card(MovieCardProps { movie }: &MovieCardProps) -> Html {
    let play_times = movie
        .play_times_formatted
        .clone()
        .unwrap_or_else(|| movie.play_times.to_string());

    html! {
        <Link<Route> to={Route::Detail { id: movie.id }} classes={"movie-card"}>
            <img class="movie-poster" src={movie.video_img_url.clone()} alt={movie.video_title.clone()} />
            <div class="movie-info">
                <h3 class="movie-title">{ &movie.video_title }</h3>
                <span class="movie-plays">{ play_times }{ " plays" }</span>
            </div>
        </Link<Route>>
    }
}

/// Grid over the listing held by the movie context. Renders its own
/// placeholder while the listing is empty, telling a failed fetch apart
/// from a legitimately empty result.
#[function_component(MovieGrid)]
pub fn movie_grid() -> Html {
    let movies = use_context::<MovieContextHandle>().expect("MovieContext not found");

    if movies.movie_list.is_empty() {
        let placeholder = if movies.loading {
            "Loading..."
        } else if movies.list_error.is_some() {
            "Something went wrong. Try again later."
        } else {
            "No movies found."
        };
        return html! {
            <p class="placeholder">{ placeholder }</p>
        };
    }

    html! {
        <div class="movie-grid">
            {
                movies.movie_list.iter().map(|movie|
                    html! { <MovieCard movie={movie.clone()} /> })
                .collect::<Html>()
            }
        </div>
    }
}

async fn fetch_ads(placement: u32) -> Option<Vec<Ad>> {
    match api::ad::ad_list(placement).await {
        Ok(ads) => Some(ads),
        Err(e) => {
            log::error!("Failed to fetch ads for placement {placement}: {e}");
            None
        }
    }
}

#[function_component(AdBanner)]
pub fn ad_banner() -> Html {
    let ads: UseStateHandle<Option<Vec<Ad>>> = use_state(|| None);

    use_effect_with((), {
        let ads = ads.clone();
        move |_| {
            spawn_local(async move {
                ads.set(fetch_ads(HOME_AD_PLACEMENT).await);
            });
            || ()
        }
    });

    let Some(ads) = &*ads else {
        return html! {};
    };
    if ads.is_empty() {
        return html! {};
    }

    html! {
        <div class="ad-banner">
            {
                ads.iter().map(|ad| {
                    let image = html! {
                        <img src={ad.image_url.clone()} alt={ad.name.clone().unwrap_or_default()} />
                    };
                    match &ad.link_url {
                        Some(link) => html! {
                            <a href={link.clone()} target="_blank" rel="noopener">{ image }</a>
                        },
                        None => image,
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let movies = use_context::<MovieContextHandle>().expect("MovieContext not found");
    let device = use_context::<DeviceContextHandle>().expect("DeviceContext not found");

    {
        let movies = movies.clone();
        use_effect_with((), move |_| {
            movies.dispatch(MovieAction::ResetList);
            fetch_movie_list(
                movies,
                Query {
                    page: Some(1),
                    ..Query::default()
                },
                false,
            );
            || ()
        });
    }

    let parents = movies.parent_categories();

    html! {
        <div class={classes!("page", "home-page", device.class().as_str())}>
            <header class="header">
                <h1>{ "Cine" }</h1>
            </header>

            <AdBanner />

            <nav class="category-nav">
                {
                    parents.iter().map(|category| html! {
                        <Link<Route> to={Route::Category { id: category.id }} classes={"category-link"}>
                            { &category.name }
                        </Link<Route>>
                    }).collect::<Html>()
                }
            </nav>

            <MovieGrid />
        </div>
    }
}
