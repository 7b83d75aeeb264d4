use log::info;
use yew::prelude::*;

use crate::components::dialog::OnboardingDialog;
use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::i18n::use_locale;
use crate::onboarding::choices::OrganizationType;
use crate::onboarding::sequencer::CloseReason;

/// (organization type, locale key, css modifier) for each "sign up as" button.
const SIGNUP_BUTTONS: [(OrganizationType, &str, &str); 3] = [
    (OrganizationType::Company, "hero.signupCompany", "signup-company"),
    (OrganizationType::Consultant, "hero.signupConsultant", "signup-consultant"),
    (OrganizationType::CertificationBody, "hero.signupCertification", "signup-certification"),
];

const FEATURES: [(&str, &str); 4] = [
    ("✅", "features.onboarding"),
    ("🤖", "features.ai"),
    ("📥", "features.import"),
    ("📈", "features.monitoring"),
];

const WORKFLOW_STEPS: [&str; 4] = [
    "workflow.step1",
    "workflow.step2",
    "workflow.step3",
    "workflow.step4",
];

const AUDIENCES: [&str; 3] = [
    "benefits.companies",
    "benefits.consultants",
    "benefits.certification",
];

#[derive(Properties, PartialEq)]
struct SignupProps {
    on_signup: Callback<OrganizationType>,
}

fn signup_buttons(on_signup: &Callback<OrganizationType>, t: impl Fn(&str) -> String) -> Html {
    SIGNUP_BUTTONS.iter().map(|&(organization_type, key, modifier)| {
        let onclick = on_signup.reform(move |_: MouseEvent| organization_type);
        html! {
            <button class={classes!("signup-button", modifier)} {onclick}>{ t(key) }</button>
        }
    }).collect()
}

#[function_component(Hero)]
fn hero(props: &SignupProps) -> Html {
    let locale = use_locale();
    html! {
        <section id="hero" class="hero-section">
            <div class="hero-text">
                <h1 class="hero-title">{"Sustanet"}</h1>
                <p class="hero-subtitle">{ locale.t("hero.subtitle") }</p>
                <div class="signup-buttons">
                    { signup_buttons(&props.on_signup, |key| locale.t(key).to_string()) }
                </div>
                <p class="hero-motto">{ locale.t("hero.motto") }</p>
            </div>
            <div class="hero-visual">
                <div class="hero-circle">{"S"}</div>
            </div>
        </section>
    }
}

#[function_component(ProblemSolution)]
fn problem_solution() -> Html {
    let locale = use_locale();
    html! {
        <div class="problem-solution">
            <section id="problem" class="card-section">
                <h2>{ locale.t("problem.title") }</h2>
                <p>{ locale.t("problem.body") }</p>
                <p class="emphasis">{ locale.t("problem.emphasis") }</p>
            </section>
            <section id="solution" class="card-section">
                <h2>{ locale.t("solution.title") }</h2>
                <p>{ locale.t("solution.body") }</p>
                <p class="emphasis">{ locale.t("solution.emphasis") }</p>
            </section>
        </div>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let locale = use_locale();
    html! {
        <section id="features" class="features-section">
            <h2>{ locale.t("features.title") }</h2>
            <div class="card-grid">
                { for FEATURES.iter().map(|(icon, key)| html! {
                    <div class="feature-card">
                        <div class="feature-icon">{ *icon }</div>
                        <h3>{ locale.t(&format!("{}.title", key)).to_string() }</h3>
                        <p>{ locale.t(&format!("{}.description", key)).to_string() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Workflow)]
fn workflow() -> Html {
    let locale = use_locale();
    html! {
        <section id="workflow" class="workflow-section">
            <h2>{ locale.t("workflow.title") }</h2>
            <p class="section-subtitle">{ locale.t("workflow.subtitle") }</p>
            <ol class="workflow-steps">
                { for WORKFLOW_STEPS.iter().enumerate().map(|(index, key)| html! {
                    <li class="workflow-step">
                        <span class="step-number">{ (index + 1).to_string() }</span>
                        <div>
                            <h3>{ locale.t(&format!("{}.title", key)).to_string() }</h3>
                            <p>{ locale.t(&format!("{}.description", key)).to_string() }</p>
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    let locale = use_locale();
    html! {
        <section id="benefits" class="benefits-section">
            <h2>{ locale.t("benefits.title") }</h2>
            <p class="section-subtitle">{ locale.t("benefits.subtitle") }</p>
            <div class="card-grid">
                { for AUDIENCES.iter().map(|key| html! {
                    <div class="benefit-card">
                        <h3>{ locale.t(&format!("{}.title", key)).to_string() }</h3>
                        <ul>
                            { for (1..=3).map(|item| html! {
                                <li>{ locale.t(&format!("{}.{}", key, item)).to_string() }</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Cta)]
fn cta(props: &SignupProps) -> Html {
    let locale = use_locale();
    html! {
        <section class="cta-section">
            <h2>{ locale.t("cta.title") }</h2>
            <p class="section-subtitle">{ locale.t("cta.subtitle") }</p>
            <div class="signup-buttons centered">
                { signup_buttons(&props.on_signup, |key| locale.t(key).to_string()) }
            </div>
            <div class="appointment-card">
                <div class="appointment-icon">{"📆"}</div>
                <h3>{ locale.t("cta.appointment.title") }</h3>
                <p>{ locale.t("cta.appointment.description") }</p>
                <button class="secondary-button">{ locale.t("cta.book") }</button>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let dialog_open = use_state(|| false);
    let preset = use_state(|| None::<OrganizationType>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_with = {
        let dialog_open = dialog_open.clone();
        let preset = preset.clone();
        Callback::from(move |organization_type: Option<OrganizationType>| {
            preset.set(organization_type);
            dialog_open.set(true);
        })
    };

    let on_signup = open_with.reform(Some);
    let on_join = open_with.reform(|_: ()| None);

    let on_close = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |reason: CloseReason| {
            info!("Onboarding dialog closed: {}", reason);
            dialog_open.set(false);
        })
    };

    html! {
        <div class="landing-page">
            <Navigation {on_join} />
            <main>
                <Hero on_signup={on_signup.clone()} />
                <ProblemSolution />
                <Features />
                <Workflow />
                <Benefits />
                <Cta {on_signup} />
            </main>
            <Footer />
            <OnboardingDialog open={*dialog_open} preset={*preset} {on_close} />
            <style>
                {r#"
                .landing-page {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1e293b;
                }
                .landing-page section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .landing-page h2 {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .section-subtitle {
                    text-align: center;
                    color: #64748b;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }
                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    padding-top: 6rem;
                }
                .hero-text {
                    flex: 1;
                }
                .hero-title {
                    font-size: 3.5rem;
                    color: #2e7d5b;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.4rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .hero-motto {
                    font-style: italic;
                    color: #475569;
                }
                .hero-visual {
                    flex: 1;
                    display: flex;
                    justify-content: center;
                }
                .hero-circle {
                    width: 320px;
                    height: 320px;
                    border-radius: 50%;
                    background: rgba(46, 125, 91, 0.12);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 8rem;
                    font-weight: 700;
                    color: #2e7d5b;
                }
                .signup-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .signup-buttons.centered {
                    justify-content: center;
                }
                .signup-button {
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 1.5rem;
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .signup-company { background: #2563eb; }
                .signup-consultant { background: #ea580c; }
                .signup-certification { background: #7c3aed; }
                .problem-solution {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .card-section {
                    background: #f8fafc;
                    border-radius: 12px;
                }
                .emphasis {
                    font-weight: 600;
                    margin-top: 1rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card, .benefit-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }
                .feature-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .workflow-steps {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 1.5rem;
                }
                .workflow-step {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .step-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #2e7d5b;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .cta-section {
                    text-align: center;
                }
                .appointment-card {
                    max-width: 480px;
                    margin: 0 auto;
                    padding: 1.5rem;
                    border-radius: 12px;
                    border: 1px solid rgba(46, 125, 91, 0.3);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }
                .appointment-icon {
                    font-size: 1.8rem;
                }
                .primary-button {
                    background: #2e7d5b;
                    color: #ffffff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.6rem 1.2rem;
                    cursor: pointer;
                }
                .secondary-button {
                    background: transparent;
                    color: #2e7d5b;
                    border: 1px solid #2e7d5b;
                    border-radius: 6px;
                    padding: 0.6rem 1.2rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .hero-section {
                        flex-direction: column;
                    }
                    .hero-title {
                        font-size: 2.5rem;
                    }
                    .hero-circle {
                        width: 200px;
                        height: 200px;
                        font-size: 5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
