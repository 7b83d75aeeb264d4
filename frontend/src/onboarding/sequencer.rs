//! The onboarding state machine.
//!
//! [`next`] is the whole transition table: it is pure, takes already
//! validated records, and never touches the session or the sink.

use std::fmt;

use super::choices::{OrganizationType, YesNo};
use super::error::FlowError;
use super::forms::{self, FormSchema};
use super::records::{ContactInfo, ParticipationChoice, SurveyResponse};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Step {
    #[default]
    ContactForm,
    ParticipationGate,
    CompanySurvey,
    ConsultantSurvey,
    CertificationSurvey,
    Success,
}

impl Step {
    pub fn survey_for(organization_type: OrganizationType) -> Step {
        match organization_type {
            OrganizationType::Company => Step::CompanySurvey,
            OrganizationType::Consultant => Step::ConsultantSurvey,
            OrganizationType::CertificationBody => Step::CertificationSurvey,
        }
    }

    /// Organization type whose survey this step shows, if it is a survey.
    pub fn survey_type(self) -> Option<OrganizationType> {
        match self {
            Step::CompanySurvey => Some(OrganizationType::Company),
            Step::ConsultantSurvey => Some(OrganizationType::Consultant),
            Step::CertificationSurvey => Some(OrganizationType::CertificationBody),
            _ => None,
        }
    }

    /// Form rendered at this step. The success screen has none.
    pub fn schema(self) -> Option<&'static FormSchema> {
        match self {
            Step::ContactForm => Some(&*forms::CONTACT_FORM),
            Step::ParticipationGate => Some(&*forms::PARTICIPATION_GATE),
            Step::Success => None,
            survey => survey.survey_type().map(forms::survey_schema),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::ContactForm => "contact-form",
            Step::ParticipationGate => "participation-gate",
            Step::CompanySurvey => "company-survey",
            Step::ConsultantSurvey => "consultant-survey",
            Step::CertificationSurvey => "certification-survey",
            Step::Success => "success",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    SubmitContact(ContactInfo),
    SubmitParticipation(ParticipationChoice),
    SubmitSurvey(SurveyResponse),
    Cancel,
    Acknowledge,
    /// Backdrop click or close icon; valid from every step.
    Dismiss,
}

impl Trigger {
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::SubmitContact(_) => "submit-contact",
            Trigger::SubmitParticipation(_) => "submit-participation",
            Trigger::SubmitSurvey(_) => "submit-survey",
            Trigger::Cancel => "cancel",
            Trigger::Acknowledge => "acknowledge",
            Trigger::Dismiss => "dismiss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Cancelled,
    /// The visitor answered "no" at the participation gate.
    Declined,
    /// Fail-safe close when the gate could not pick a survey.
    UnrecognizedBranch,
    Acknowledged,
    Dismissed,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            CloseReason::Cancelled => "cancelled",
            CloseReason::Declined => "declined",
            CloseReason::UnrecognizedBranch => "unrecognized branch",
            CloseReason::Acknowledged => "acknowledged",
            CloseReason::Dismissed => "dismissed",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Step(Step),
    Closed(CloseReason),
}

/// Computes the successor of `step` for `trigger`.
///
/// `contact` is the record captured at the contact form, used to branch at
/// the participation gate. A gate "yes" without it yields
/// [`FlowError::UnrecognizedBranch`]; any trigger the step does not accept
/// yields [`FlowError::UnexpectedTrigger`].
pub fn next(step: Step, contact: Option<&ContactInfo>, trigger: &Trigger) -> Result<Next, FlowError> {
    let next = match (step, trigger) {
        (_, Trigger::Dismiss) => Next::Closed(CloseReason::Dismissed),

        (Step::ContactForm, Trigger::SubmitContact(_)) => Next::Step(Step::ParticipationGate),

        (Step::ParticipationGate, Trigger::SubmitParticipation(choice)) => match choice.participate {
            YesNo::No => Next::Closed(CloseReason::Declined),
            YesNo::Yes => {
                let contact = contact.ok_or(FlowError::UnrecognizedBranch)?;
                Next::Step(Step::survey_for(contact.organization_type))
            }
        },

        (
            Step::ContactForm
            | Step::ParticipationGate
            | Step::CompanySurvey
            | Step::ConsultantSurvey
            | Step::CertificationSurvey,
            Trigger::Cancel,
        ) => Next::Closed(CloseReason::Cancelled),

        (survey, Trigger::SubmitSurvey(response))
            if survey.survey_type() == Some(response.organization_type()) =>
        {
            Next::Step(Step::Success)
        }

        (Step::Success, Trigger::Acknowledge) => Next::Closed(CloseReason::Acknowledged),

        (step, trigger) => {
            return Err(FlowError::UnexpectedTrigger {
                step,
                trigger: trigger.name(),
            })
        }
    };
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::choices::Choice;

    fn contact(organization_type: OrganizationType) -> ContactInfo {
        ContactInfo {
            first_name: "Ana".into(),
            last_name: "Bu".into(),
            email: "a@b.it".into(),
            organization_type,
            organization_name: None,
        }
    }

    fn gate(participate: YesNo) -> Trigger {
        Trigger::SubmitParticipation(ParticipationChoice { participate })
    }

    #[test]
    fn contact_submission_opens_the_gate() {
        let info = contact(OrganizationType::Company);
        let trigger = Trigger::SubmitContact(info.clone());
        assert_eq!(
            next(Step::ContactForm, None, &trigger),
            Ok(Next::Step(Step::ParticipationGate))
        );
    }

    #[test]
    fn gate_yes_branches_on_organization_type() {
        for organization_type in OrganizationType::ALL {
            let info = contact(*organization_type);
            let result = next(Step::ParticipationGate, Some(&info), &gate(YesNo::Yes));
            assert_eq!(result, Ok(Next::Step(Step::survey_for(*organization_type))));
            assert_eq!(Step::survey_for(*organization_type).survey_type(), Some(*organization_type));
        }
    }

    #[test]
    fn gate_no_always_closes() {
        for organization_type in OrganizationType::ALL {
            let info = contact(*organization_type);
            assert_eq!(
                next(Step::ParticipationGate, Some(&info), &gate(YesNo::No)),
                Ok(Next::Closed(CloseReason::Declined))
            );
        }
        assert_eq!(
            next(Step::ParticipationGate, None, &gate(YesNo::No)),
            Ok(Next::Closed(CloseReason::Declined))
        );
    }

    #[test]
    fn gate_yes_without_contact_is_unrecognized() {
        assert_eq!(
            next(Step::ParticipationGate, None, &gate(YesNo::Yes)),
            Err(FlowError::UnrecognizedBranch)
        );
    }

    #[test]
    fn cancel_closes_every_form_step() {
        for step in [
            Step::ContactForm,
            Step::ParticipationGate,
            Step::CompanySurvey,
            Step::ConsultantSurvey,
            Step::CertificationSurvey,
        ] {
            assert_eq!(
                next(step, None, &Trigger::Cancel),
                Ok(Next::Closed(CloseReason::Cancelled))
            );
        }
    }

    #[test]
    fn success_only_accepts_acknowledge_or_dismiss() {
        assert_eq!(
            next(Step::Success, None, &Trigger::Acknowledge),
            Ok(Next::Closed(CloseReason::Acknowledged))
        );
        assert_eq!(
            next(Step::Success, None, &Trigger::Dismiss),
            Ok(Next::Closed(CloseReason::Dismissed))
        );
        assert_eq!(
            next(Step::Success, None, &Trigger::Cancel),
            Err(FlowError::UnexpectedTrigger {
                step: Step::Success,
                trigger: "cancel"
            })
        );
    }

    #[test]
    fn out_of_order_triggers_are_rejected() {
        let info = contact(OrganizationType::Consultant);
        assert!(matches!(
            next(Step::ContactForm, Some(&info), &gate(YesNo::Yes)),
            Err(FlowError::UnexpectedTrigger { step: Step::ContactForm, .. })
        ));
        assert!(matches!(
            next(Step::CompanySurvey, Some(&info), &Trigger::SubmitContact(info.clone())),
            Err(FlowError::UnexpectedTrigger { .. })
        ));
        assert!(matches!(
            next(Step::ContactForm, None, &Trigger::Acknowledge),
            Err(FlowError::UnexpectedTrigger { .. })
        ));
    }

    #[test]
    fn every_step_but_success_has_a_form() {
        assert_eq!(Step::default(), Step::ContactForm);
        assert!(Step::Success.schema().is_none());
        assert_eq!(
            Step::ConsultantSurvey.schema().map(|schema| schema.name),
            Some("consultant-survey")
        );
    }
}
