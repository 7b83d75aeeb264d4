use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod i18n;
pub mod onboarding {
    pub mod choices;
    pub mod error;
    pub mod forms;
    pub mod records;
    pub mod sequencer;
    pub mod session;
    pub mod sink;
    pub mod validation;
}
pub mod components {
    pub mod dialog;
    pub mod footer;
    pub mod form_view;
    pub mod navigation;
    pub mod success;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use i18n::LocaleProvider;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <LocaleProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </LocaleProvider>
    }
}
