use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use cine_api::Movie;

use crate::api;
use crate::context::DeviceContextHandle;

async fn fetch_movie(id: u64) -> Option<Movie> {
    match api::movie::info(id).await {
        Ok(movie) => movie,
        Err(e) => {
            log::error!("Failed to fetch movie info: {e}");
            None
        }
    }
}

#[derive(yew::Properties, PartialEq, Eq)]
pub struct MoviePlayerProps {
    pub id: u64,
}

#[function_component(MoviePlayer)]
pub fn movie_player(MoviePlayerProps { id }: &MoviePlayerProps) -> Html {
    let device = use_context::<DeviceContextHandle>().expect("DeviceContext not found");
    let movie: UseStateHandle<Option<Movie>> = use_state(|| None);

    use_effect_with((*id, movie.clone()), move |(id, movie)| {
        if movie.is_none() {
            let movie = movie.clone();
            let id = *id;
            spawn_local(async move {
                movie.set(fetch_movie(id).await);
            });
        }
        || ()
    });

    // One play event per page view, fire and forget.
    {
        let id = *id;
        use_effect_with(id, move |_| {
            spawn_local(async move {
                let _ = api::movie::add_play_log(id).await.inspect_err(|e| {
                    log::error!("Failed to record play event: {e}");
                });
            });
            || ()
        });
    }

    let title = movie
        .as_ref()
        .map(|movie| movie.video_title.as_str())
        .unwrap_or("Loading...");

    html! {
        <div class="page player-page">
            <header class="header">
                <h1>{ title }</h1>
            </header>

            {
                if let Some(movie) = &*movie {
                    let source = movie.video_url.clone().unwrap_or_default();
                    // Mobile browsers refuse autoplay anyway; don't ask for it.
                    let autoplay = !device.is_mobile();
                    html! {
                        <video controls=true autoplay={autoplay} class="video-player" poster={movie.video_img_url.clone()}>
                            <source src={source} type="video/mp4" />
                        </video>
                    }
                } else {
                    html! {
                        <p class="placeholder">{ "Loading..." }</p>
                    }
                }
            }
        </div>
    }
}
