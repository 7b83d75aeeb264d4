use chrono::Datelike;
use yew::prelude::*;

use crate::components::navigation::locale_select;
use crate::config;
use crate::i18n::use_locale;

#[function_component(Footer)]
pub fn footer() -> Html {
    let locale = use_locale();
    let year = chrono::Local::now().year();
    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Sustanet"}</h3>
                    <p class="footer-muted">{ locale.t("footer.slogan") }</p>
                </div>
                <div>
                    <h4>{ locale.t("footer.about") }</h4>
                    <ul>
                        <li><a href="#">{ locale.t("footer.story") }</a></li>
                        <li><a href="#">{ locale.t("footer.team") }</a></li>
                        <li><a href="#">{ locale.t("footer.partners") }</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{ locale.t("footer.contacts") }</h4>
                    <ul>
                        <li><a href={mailto}>{ locale.t("footer.email") }</a></li>
                        <li><a href="#">{ locale.t("footer.support") }</a></li>
                        <li><a href="#">{ locale.t("footer.linkedin") }</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{ locale.t("footer.legal") }</h4>
                    <ul>
                        <li><a href="#">{ locale.t("footer.privacy") }</a></li>
                        <li><a href="#">{ locale.t("footer.terms") }</a></li>
                        <li><a href="#">{ locale.t("footer.cookies") }</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                { locale_select(&locale, "footer-locale") }
                <span class="footer-muted">
                    { format!("© {} Sustanet. {}", year, locale.t("footer.rights")) }
                </span>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #1e293b;
                    color: #ffffff;
                    padding: 3rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-grid li {
                    margin-bottom: 0.5rem;
                }
                .footer-grid a {
                    color: #cbd5e1;
                    text-decoration: none;
                }
                .footer-grid a:hover {
                    color: #ffffff;
                }
                .footer-muted {
                    color: #94a3b8;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #334155;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .footer-locale {
                    background: transparent;
                    color: #cbd5e1;
                    border: 1px solid #334155;
                    border-radius: 4px;
                    padding: 0.4rem;
                }
                "#}
            </style>
        </footer>
    }
}
