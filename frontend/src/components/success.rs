use yew::prelude::*;

use crate::i18n::use_locale;

#[derive(Properties, PartialEq)]
pub struct SurveySuccessProps {
    pub on_close: Callback<()>,
}

#[function_component(SurveySuccess)]
pub fn survey_success(props: &SurveySuccessProps) -> Html {
    let locale = use_locale();
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="survey-success">
            <div class="survey-success-icon">{"✓"}</div>
            <h2>{ locale.t("success.title") }</h2>
            <p>{ locale.t("success.body") }</p>
            <button class="primary-button" {onclick}>{ locale.t("success.close") }</button>
        </div>
    }
}
