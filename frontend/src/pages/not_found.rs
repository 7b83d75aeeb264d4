use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_locale;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let locale = use_locale();
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{ locale.t("notFound.title") }</p>
            <Link<Route> to={Route::Home} classes="primary-button">
                { locale.t("notFound.back") }
            </Link<Route>>
        </div>
    }
}
