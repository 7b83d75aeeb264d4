use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::i18n::{use_locale, Locale, LocaleHandle};

const SECTIONS: [(&str, &str); 5] = [
    ("#problem", "nav.problem"),
    ("#solution", "nav.solution"),
    ("#features", "nav.features"),
    ("#workflow", "nav.workflow"),
    ("#benefits", "nav.benefits"),
];

/// `<select>` bound to the active locale. Shared by the navigation bar and footer.
pub fn locale_select(locale: &LocaleHandle, class: &'static str) -> Html {
    let set_locale = locale.set_locale.clone();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match Locale::from_code(&select.value()) {
            Some(next) => set_locale.emit(next),
            None => warn!("Unknown locale code selected: {}", select.value()),
        }
    });

    html! {
        <select {class} aria-label={locale.t("nav.language").to_string()} {onchange}>
            {
                Locale::ALL.iter().map(|option| html! {
                    <option value={option.code()} selected={*option == locale.locale}>
                        { option.label() }
                    </option>
                }).collect::<Html>()
            }
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub on_join: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let locale = use_locale();
    let menu_open = use_bool_toggle(false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                let window_for_read = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_for_read.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > config::NAV_SHADOW_THRESHOLD);
                }) as Box<dyn FnMut()>);
                if let Err(e) = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    warn!("Failed to register scroll listener: {:?}", e);
                }
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to remove scroll listener: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let join = {
        let on_join = props.on_join.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_join.emit(());
        })
    };

    let links = SECTIONS.iter().map(|(href, key)| html! {
        <a class="nav-link" href={*href} onclick={close_menu.clone()}>{ locale.t(key) }</a>
    }).collect::<Html>();

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">{"S"}</span>
                    <span class="logo-text">{"Sustanet"}</span>
                </a>

                <button class="burger-menu" aria-label="menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>

                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { links }
                    { locale_select(&locale, "nav-locale") }
                    <button class="nav-login-button" onclick={join.clone()}>
                        { locale.t("nav.login") }
                    </button>
                    <button class="nav-join-button" onclick={join}>
                        { locale.t("nav.joinWaitingList") }
                    </button>
                </div>
            </nav>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.5rem 0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    color: #1e293b;
                    font-weight: 700;
                    font-size: 1.3rem;
                }
                .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #2e7d5b;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #1e293b;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #2e7d5b;
                }
                .nav-locale {
                    background: transparent;
                    border: none;
                    cursor: pointer;
                }
                .nav-login-button {
                    background: transparent;
                    border: 1px solid #2e7d5b;
                    color: #2e7d5b;
                    padding: 0.45rem 1rem;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .nav-join-button {
                    background: #2e7d5b;
                    border: none;
                    color: #ffffff;
                    padding: 0.5rem 1rem;
                    border-radius: 6px;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        padding: 1rem;
                        background: #ffffff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
