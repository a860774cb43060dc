use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use cine_api::Movie;

use crate::api;
use crate::app::Route;
use crate::context::DeviceContextHandle;

enum DetailState {
    Loading,
    Missing,
    Loaded(Movie),
}

async fn fetch_detail(id: u64) -> DetailState {
    match api::movie::info(id).await {
        Ok(Some(movie)) => DetailState::Loaded(movie),
        Ok(None) => DetailState::Missing,
        Err(e) => {
            log::error!("Failed to fetch movie info: {e}");
            DetailState::Missing
        }
    }
}

#[derive(yew::Properties, PartialEq, Eq)]
pub struct MovieDetailProps {
    pub id: u64,
}

#[function_component(MovieDetail)]
pub fn movie_detail(MovieDetailProps { id }: &MovieDetailProps) -> Html {
    let device = use_context::<DeviceContextHandle>().expect("DeviceContext not found");
    let detail = use_state(|| DetailState::Loading);

    {
        let detail = detail.clone();
        use_effect_with(*id, move |id| {
            let id = *id;
            spawn_local(async move {
                detail.set(fetch_detail(id).await);
            });
            || ()
        });
    }

    let content = match &*detail {
        DetailState::Loading => html! {
            <p class="placeholder">{ "Loading..." }</p>
        },
        DetailState::Missing => html! {
            <p class="placeholder">{ "Movie not found." }</p>
        },
        DetailState::Loaded(movie) => {
            let play_times = movie
                .play_times_formatted
                .clone()
                .unwrap_or_else(|| movie.play_times.to_string());

            html! {
                <div class="detail-card">
                    <img class="movie-poster" src={movie.video_img_url.clone()} alt={movie.video_title.clone()} />
                    <div class="detail-info">
                        <h2>{ &movie.video_title }</h2>
                        if let Some(type_name) = &movie.type_name {
                            <span class="category-link">{ type_name }</span>
                        }
                        <p class="movie-plays">{ play_times }{ " plays" }</p>
                        <p class="detail-describe">{ &movie.video_describe }</p>
                        <Link<Route> to={Route::Player { id: movie.id }} classes={"play-button"}>
                            { "Play" }
                        </Link<Route>>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class={classes!("page", "detail-page", device.class().as_str())}>
            <header class="header">
                <h1>{ "Detail" }</h1>
            </header>
            { content }
        </div>
    }
}
