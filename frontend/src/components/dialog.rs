use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::components::form_view::FormView;
use crate::components::success::SurveySuccess;
use crate::onboarding::choices::OrganizationType;
use crate::onboarding::error::FlowError;
use crate::onboarding::sequencer::CloseReason;
use crate::onboarding::session::{DialogSession, Outcome};
use crate::onboarding::sink::{LogSink, SubmissionSink};
use crate::onboarding::validation::FieldEdit;

/// Shared handle to the sink that receives submitted records.
#[derive(Clone)]
pub struct SinkHandle(pub Rc<dyn SubmissionSink>);

impl Default for SinkHandle {
    fn default() -> Self {
        SinkHandle(Rc::new(LogSink))
    }
}

impl PartialEq for SinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct OnboardingDialogProps {
    pub open: bool,
    /// Organization type chosen by the "sign up as" button that opened the dialog.
    #[prop_or_default]
    pub preset: Option<OrganizationType>,
    pub on_close: Callback<CloseReason>,
    #[prop_or_default]
    pub sink: SinkHandle,
}

pub enum DialogMsg {
    Edit(FieldEdit),
    Submit,
    Cancel,
    Acknowledge,
    Dismiss,
}

pub struct OnboardingDialog {
    session: DialogSession,
}

impl OnboardingDialog {
    fn settle(&mut self, ctx: &Context<Self>, result: Result<Outcome, FlowError>) {
        match result {
            Ok(Outcome::Closed(reason)) => ctx.props().on_close.emit(reason),
            Ok(Outcome::Advanced(_)) => {}
            // Field errors are already on the session and render inline.
            Err(FlowError::Validation(_)) => {}
            Err(e) => warn!("Onboarding action rejected: {}", e),
        }
    }
}

impl Component for OnboardingDialog {
    type Message = DialogMsg;
    type Properties = OnboardingDialogProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: DialogSession::for_preset(ctx.props().preset),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.open && !old_props.open {
            info!("Opening onboarding dialog (preset: {:?})", props.preset);
            self.session = DialogSession::for_preset(props.preset);
        }
        props.open != old_props.open || props.preset != old_props.preset
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DialogMsg::Edit(edit) => {
                self.session.edit(edit);
            }
            DialogMsg::Submit => {
                let sink = ctx.props().sink.0.clone();
                let result = self.session.submit(sink.as_ref());
                self.settle(ctx, result);
            }
            DialogMsg::Cancel => {
                let result = self.session.cancel();
                self.settle(ctx, result);
            }
            DialogMsg::Acknowledge => {
                let result = self.session.acknowledge();
                self.settle(ctx, result);
            }
            DialogMsg::Dismiss => {
                let outcome = self.session.dismiss();
                self.settle(ctx, Ok(outcome));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }

        let link = ctx.link();
        let dismiss = link.callback(|_: MouseEvent| DialogMsg::Dismiss);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        let body = match self.session.step().schema() {
            Some(schema) => html! {
                <FormView
                    {schema}
                    values={self.session.values().clone()}
                    errors={self.session.errors().clone()}
                    on_edit={link.callback(DialogMsg::Edit)}
                    on_submit={link.callback(|_| DialogMsg::Submit)}
                    on_cancel={link.callback(|_| DialogMsg::Cancel)}
                />
            },
            None => html! {
                <SurveySuccess on_close={link.callback(|_| DialogMsg::Acknowledge)} />
            },
        };

        html! {
            <div class="dialog-backdrop" onclick={dismiss.clone()}>
                <div class="dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                    <button class="dialog-close" aria-label="close" onclick={dismiss}>{"✕"}</button>
                    { body }
                </div>
                <style>
                    {r#"
                    .dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.55);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 100;
                        padding: 1rem;
                    }
                    .dialog {
                        position: relative;
                        background: #ffffff;
                        border-radius: 12px;
                        width: 100%;
                        max-width: 560px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 2rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                    }
                    .dialog-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                        color: #64748b;
                    }
                    .onboarding-form-header h2 {
                        font-size: 1.4rem;
                        margin-bottom: 0.5rem;
                        color: #1e293b;
                    }
                    .onboarding-form-description {
                        color: #64748b;
                        margin-bottom: 1.5rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        margin-bottom: 1.2rem;
                    }
                    .form-field input[type="text"],
                    .form-field input[type="email"],
                    .form-field select,
                    .form-field textarea {
                        padding: 0.6rem 0.8rem;
                        border: 1px solid #cbd5e1;
                        border-radius: 6px;
                        font-size: 1rem;
                    }
                    .form-field.invalid input,
                    .form-field.invalid select,
                    .form-field.invalid textarea {
                        border-color: #dc2626;
                    }
                    .field-hint {
                        font-size: 0.85rem;
                        color: #64748b;
                    }
                    .field-error {
                        font-size: 0.85rem;
                        color: #dc2626;
                    }
                    .radio-group, .checkbox-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                    }
                    .radio-group.scale {
                        flex-direction: row;
                        gap: 1rem;
                    }
                    .option-row, .consent-row {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        cursor: pointer;
                    }
                    .onboarding-form-actions {
                        display: flex;
                        justify-content: flex-end;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .survey-success {
                        text-align: center;
                        padding: 1rem 0;
                    }
                    .survey-success-icon {
                        font-size: 2.5rem;
                        color: #16a34a;
                        margin-bottom: 1rem;
                    }
                    .survey-success p {
                        color: #475569;
                        margin: 0.75rem 0 1.5rem;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
