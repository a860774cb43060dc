use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{DeviceProvider, MovieProvider};
use crate::pages::category::CategoryPage;
use crate::pages::detail::MovieDetail;
use crate::pages::home::Home;
use crate::pages::player::MoviePlayer;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/category/:id")]
    Category { id: u32 },

    #[at("/detail/:id")]
    Detail { id: u64 },

    #[at("/player/:id")]
    Player { id: u64 },
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            html! {
                <Home />
            }
        }
        Route::Category { id } => {
            html! {
                <CategoryPage id={id} />
            }
        }
        Route::Detail { id } => {
            html! {
                <MovieDetail id={id} />
            }
        }
        Route::Player { id } => {
            html! {
                <MoviePlayer id={id} />
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <DeviceProvider>
            <MovieProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </MovieProvider>
        </DeviceProvider>
    }
}
