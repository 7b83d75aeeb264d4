use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::i18n::{use_locale, LocaleHandle};
use crate::onboarding::forms::{FieldSpec, FormSchema, Input, OptionSpec};
use crate::onboarding::validation::{FieldEdit, FieldErrors, FormValues};

#[derive(Properties, PartialEq)]
pub struct FormViewProps {
    pub schema: &'static FormSchema,
    pub values: FormValues,
    pub errors: FieldErrors,
    pub on_edit: Callback<FieldEdit>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Renders any onboarding step from its schema.
#[function_component(FormView)]
pub fn form_view(props: &FormViewProps) -> Html {
    let locale = use_locale();
    let schema = props.schema;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oncancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_cancel.emit(());
        })
    };

    html! {
        <form class="onboarding-form" {onsubmit} novalidate={true}>
            <header class="onboarding-form-header">
                <h2>{ locale.t(schema.title) }</h2>
                if let Some(description) = schema.description {
                    <p class="onboarding-form-description">{ locale.t(description) }</p>
                }
            </header>
            {
                schema.fields.iter()
                    .filter(|field| field.is_visible(&props.values))
                    .map(|field| render_field(field, props, &locale))
                    .collect::<Html>()
            }
            <div class="onboarding-form-actions">
                <button type="button" class="secondary-button" onclick={oncancel}>
                    { locale.t(schema.cancel_label) }
                </button>
                <button type="submit" class="primary-button">
                    { locale.t(schema.submit_label) }
                </button>
            </div>
        </form>
    }
}

fn render_field(field: &FieldSpec, props: &FormViewProps, locale: &LocaleHandle) -> Html {
    let error = props.errors.get(field.name);
    let control = render_input(field, &props.values, &props.on_edit, locale);

    // Consent carries its label inside the checkbox row.
    if field.input == Input::Consent {
        return html! {
            <div class={classes!("form-field", error.is_some().then(|| "invalid"))}>
                { control }
                if let Some(violation) = error {
                    <p class="field-error">{ violation.message(locale.locale) }</p>
                }
            </div>
        };
    }

    html! {
        <div class={classes!("form-field", error.is_some().then(|| "invalid"))}>
            <label for={field.name}>{ locale.t(field.label) }</label>
            if let Some(hint) = field.hint {
                <p class="field-hint">{ locale.t(hint) }</p>
            }
            { control }
            if let Some(violation) = error {
                <p class="field-error">{ violation.message(locale.locale) }</p>
            }
        </div>
    }
}

fn render_input(
    field: &FieldSpec,
    values: &FormValues,
    on_edit: &Callback<FieldEdit>,
    locale: &LocaleHandle,
) -> Html {
    let name = field.name;
    match &field.input {
        Input::Text { placeholder } | Input::Email { placeholder } => {
            let kind = if matches!(field.input, Input::Email { .. }) { "email" } else { "text" };
            let oninput = on_edit.reform(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                FieldEdit::Text { field: name, value: input.value() }
            });
            html! {
                <input
                    id={name}
                    type={kind}
                    value={values.text(name).to_string()}
                    placeholder={placeholder.map(|key| locale.t(key).to_string())}
                    {oninput}
                />
            }
        }
        Input::TextArea => {
            let oninput = on_edit.reform(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                FieldEdit::Text { field: name, value: input.value() }
            });
            html! {
                <textarea id={name} rows="3" value={values.text(name).to_string()} {oninput} />
            }
        }
        Input::Select { placeholder, options } => {
            let onchange = on_edit.reform(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                FieldEdit::Choose { field: name, id: select.value() }
            });
            let chosen = values.choice(name);
            html! {
                <select id={name} {onchange}>
                    <option value="" selected={chosen.is_none()} disabled={true}>
                        { locale.t(placeholder) }
                    </option>
                    {
                        options.iter().map(|option| html! {
                            <option value={option.id} selected={chosen == Some(option.id)}>
                                { locale.t(&option.label) }
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            }
        }
        Input::Radio(options) => html! {
            <div class="radio-group">
                { for options.iter().map(|option| radio(name, option, values, on_edit, locale)) }
            </div>
        },
        Input::Scale(options) => html! {
            <div class="radio-group scale">
                { for options.iter().map(|option| radio(name, option, values, on_edit, locale)) }
            </div>
        },
        Input::Checkboxes(options) => html! {
            <div class="checkbox-group">
                { for options.iter().map(|option| checkbox(name, option, values, on_edit, locale)) }
            </div>
        },
        Input::Consent => {
            let onchange = on_edit.reform(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                FieldEdit::Flag { field: name, value: input.checked() }
            });
            html! {
                <label class="consent-row">
                    <input type="checkbox" checked={values.flag(name)} {onchange} />
                    <span>{ locale.t(field.label) }</span>
                </label>
            }
        }
    }
}

fn radio(
    name: &'static str,
    option: &OptionSpec,
    values: &FormValues,
    on_edit: &Callback<FieldEdit>,
    locale: &LocaleHandle,
) -> Html {
    let id = option.id;
    let onchange = on_edit.reform(move |_: Event| FieldEdit::Choose {
        field: name,
        id: id.to_string(),
    });
    html! {
        <label class="option-row">
            <input type="radio" name={name} value={id} checked={values.is_selected(name, id)} {onchange} />
            <span>{ locale.t(&option.label) }</span>
        </label>
    }
}

fn checkbox(
    name: &'static str,
    option: &OptionSpec,
    values: &FormValues,
    on_edit: &Callback<FieldEdit>,
    locale: &LocaleHandle,
) -> Html {
    let id = option.id;
    let onchange = on_edit.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FieldEdit::Toggle {
            field: name,
            id: id.to_string(),
            checked: input.checked(),
        }
    });
    html! {
        <label class="option-row">
            <input type="checkbox" value={id} checked={values.is_selected(name, id)} {onchange} />
            <span>{ locale.t(&option.label) }</span>
        </label>
    }
}
