use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use cine_api::Category;
use cine_api::api::movie::list::get::{ListData, Query};

use crate::api;
use crate::dom;
use crate::state::device::DeviceState;
use crate::state::movie::{DEFAULT_PAGE_LIMIT, MovieState};

// ---------------------------------------------------------------------------
// Movie store

/// Reducer actions over [`MovieState`].
pub enum MovieAction {
    ListLoading,
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(String),
    PageLoaded {
        data: ListData,
        append: bool,
        page: u32,
        limit: u32,
    },
    PageFailed {
        append: bool,
        message: String,
    },
    ResetList,
}

impl Reducible for MovieState {
    type Action = MovieAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = (*self).clone();
        Rc::new(match action {
            MovieAction::ListLoading => state.with_loading(),
            MovieAction::CategoriesLoaded(raw) => state.with_categories(raw),
            MovieAction::CategoriesFailed(message) => state.with_categories_failed(message),
            MovieAction::PageLoaded {
                data,
                append,
                page,
                limit,
            } => state.with_list_page(data, append, page, limit),
            MovieAction::PageFailed { append, message } => state.with_list_failure(append, message),
            MovieAction::ResetList => state.with_list_reset(),
        })
    }
}

pub type MovieContextHandle = UseReducerHandle<MovieState>;

#[derive(Properties, PartialEq)]
pub struct MovieProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(MovieProvider)]
pub fn movie_provider(props: &MovieProviderProps) -> Html {
    let context = use_reducer(MovieState::default);

    {
        let context = context.clone();
        use_effect_with((), move |_| {
            fetch_categories(context);
            || ()
        });
    }

    html! {
        <ContextProvider<MovieContextHandle> context={context}>
            { props.children.clone() }
        </ContextProvider<MovieContextHandle>>
    }
}

/// Loads the category tree into the store. Failures degrade the category
/// collections to empty and are never propagated to the caller.
pub fn fetch_categories(context: MovieContextHandle) {
    spawn_local(async move {
        match api::movie::type_list().await {
            Ok(raw) => context.dispatch(MovieAction::CategoriesLoaded(raw)),
            Err(e) => {
                log::error!("Failed to fetch categories: {e}");
                context.dispatch(MovieAction::CategoriesFailed(e.to_string()));
            }
        }
    });
}

/// Issues a listing fetch. `query.page` defaults to the store's current
/// page and `query.limit` to [`DEFAULT_PAGE_LIMIT`]; with `append` the
/// fetched page is concatenated onto the listing instead of replacing
/// it. Overlapping calls are not fenced: the last one to resolve wins.
pub fn fetch_movie_list(context: MovieContextHandle, mut query: Query, append: bool) {
    let page = *query.page.get_or_insert(context.current_page);
    let limit = *query.limit.get_or_insert(DEFAULT_PAGE_LIMIT);

    context.dispatch(MovieAction::ListLoading);
    spawn_local(async move {
        match api::movie::list(&query).await {
            Ok(data) => context.dispatch(MovieAction::PageLoaded {
                data,
                append,
                page,
                limit,
            }),
            Err(e) => {
                log::error!("Failed to fetch movie list: {e}");
                context.dispatch(MovieAction::PageFailed {
                    append,
                    message: e.to_string(),
                });
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Device store

/// Reducer actions over [`DeviceState`].
pub enum DeviceAction {
    WidthChanged(u32),
}

impl Reducible for DeviceState {
    type Action = DeviceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DeviceAction::WidthChanged(width) => Rc::new(DeviceState::new(width)),
        }
    }
}

pub type DeviceContextHandle = UseReducerHandle<DeviceState>;

#[derive(Properties, PartialEq)]
pub struct DeviceProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DeviceProvider)]
pub fn device_provider(props: &DeviceProviderProps) -> Html {
    let context = use_reducer(|| DeviceState::new(dom::viewport_width()));

    {
        let context = context.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || {
                context.dispatch(DeviceAction::WidthChanged(dom::viewport_width()));
            });
            if let Err(e) = dom::window()
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                log::error!("Failed to register resize listener: {e:?}");
            }
            // Registered once for the whole page session, never removed.
            listener.forget();
            || ()
        });
    }

    html! {
        <ContextProvider<DeviceContextHandle> context={context}>
            { props.children.clone() }
        </ContextProvider<DeviceContextHandle>>
    }
}
