//! The in-memory state of one open onboarding dialog.

use log::{debug, info, warn};

use super::choices::{Choice, OrganizationType};
use super::error::FlowError;
use super::forms::{self, fields, FormRecord};
use super::records::{ContactInfo, ParticipationChoice};
use super::sequencer::{self, CloseReason, Next, Step, Trigger};
use super::sink::{Submission, SubmissionSink};
use super::validation::{FieldEdit, FieldErrors, FormValues, Violation};

/// What the dialog host should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Advanced(Step),
    Closed(CloseReason),
}

/// Current step, its draft values and errors, and the captured contact.
///
/// Every close path resets the session to [`DialogSession::default`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogSession {
    step: Step,
    values: FormValues,
    errors: FieldErrors,
    /// Set by the first submit on the current step.
    attempted: bool,
    contact: Option<ContactInfo>,
}

impl DialogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session whose contact form starts with `preset` chosen.
    pub fn for_preset(preset: Option<OrganizationType>) -> Self {
        let mut session = Self::new();
        if let Some(organization_type) = preset {
            session.values.apply(FieldEdit::Choose {
                field: fields::ORGANIZATION_TYPE,
                id: organization_type.id().to_string(),
            });
        }
        session
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<Violation> {
        self.errors.get(field)
    }

    pub fn contact(&self) -> Option<&ContactInfo> {
        self.contact.as_ref()
    }

    /// Records an edit. Once the step has seen a submit, the edited field and
    /// any field it makes required are re-checked.
    pub fn edit(&mut self, edit: FieldEdit) {
        let edited = self.values.apply(edit);
        if !self.attempted {
            return;
        }
        let Some(schema) = self.step.schema() else {
            return;
        };
        let affected: Vec<&'static str> = schema
            .fields
            .iter()
            .filter(|field| {
                field.name == edited
                    || field
                        .revealed_by()
                        .map_or(false, |(trigger, _)| trigger == edited)
            })
            .map(|field| field.name)
            .collect();
        for name in affected {
            match schema.check_field(name, &self.values) {
                Some(violation) => self.errors.insert(name, violation),
                None => self.errors.remove(name),
            }
        }
    }

    /// Validates the current step and, if it passes, advances the flow.
    ///
    /// Validation failures are kept on the session for inline display and
    /// returned as [`FlowError::Validation`]. The sink sees each contact and
    /// survey record once, after the transition is accepted.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<Outcome, FlowError> {
        self.attempted = true;
        let trigger = match self.read_step() {
            Ok(trigger) => trigger,
            Err(FlowError::Validation(errors)) => {
                debug!("Rejected {} submission, invalid fields: {}", self.step, errors);
                self.errors = errors.clone();
                return Err(FlowError::Validation(errors));
            }
            Err(e) => return Err(e),
        };

        let submission = match &trigger {
            Trigger::SubmitContact(contact) => Some(Submission::Contact(contact.clone())),
            Trigger::SubmitSurvey(response) => Some(Submission::Survey(response.clone())),
            _ => None,
        };
        let outcome = self.fire(trigger)?;
        if let Some(submission) = submission {
            sink.submit(submission);
        }
        Ok(outcome)
    }

    pub fn cancel(&mut self) -> Result<Outcome, FlowError> {
        self.fire(Trigger::Cancel)
    }

    pub fn acknowledge(&mut self) -> Result<Outcome, FlowError> {
        self.fire(Trigger::Acknowledge)
    }

    pub fn dismiss(&mut self) -> Outcome {
        self.close(CloseReason::Dismissed);
        Outcome::Closed(CloseReason::Dismissed)
    }

    fn read_step(&self) -> Result<Trigger, FlowError> {
        let trigger = match self.step {
            Step::ContactForm => Trigger::SubmitContact(ContactInfo::parse(&self.values)?),
            Step::ParticipationGate => {
                Trigger::SubmitParticipation(ParticipationChoice::parse(&self.values)?)
            }
            Step::Success => {
                return Err(FlowError::UnexpectedTrigger {
                    step: self.step,
                    trigger: "submit",
                })
            }
            survey => {
                let organization_type = survey
                    .survey_type()
                    .ok_or(FlowError::UnrecognizedBranch)?;
                Trigger::SubmitSurvey(forms::parse_survey(organization_type, &self.values)?)
            }
        };
        Ok(trigger)
    }

    fn fire(&mut self, trigger: Trigger) -> Result<Outcome, FlowError> {
        match sequencer::next(self.step, self.contact.as_ref(), &trigger) {
            Ok(Next::Step(step)) => {
                if let Trigger::SubmitContact(contact) = trigger {
                    self.contact = Some(contact);
                }
                info!("Onboarding moved from {} to {}", self.step, step);
                self.enter(step);
                Ok(Outcome::Advanced(step))
            }
            Ok(Next::Closed(reason)) => {
                self.close(reason);
                Ok(Outcome::Closed(reason))
            }
            Err(FlowError::UnrecognizedBranch) => {
                warn!("No organization type captured at {}, closing dialog", self.step);
                self.close(CloseReason::UnrecognizedBranch);
                Ok(Outcome::Closed(CloseReason::UnrecognizedBranch))
            }
            Err(e) => {
                warn!("Ignoring trigger: {}", e);
                Err(e)
            }
        }
    }

    fn enter(&mut self, step: Step) {
        self.step = step;
        self.values = FormValues::new();
        self.errors = FieldErrors::new();
        self.attempted = false;
    }

    fn close(&mut self, reason: CloseReason) {
        info!("Onboarding dialog closed at {} ({})", self.step, reason);
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::records::SurveyResponse;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Submission>>);

    impl SubmissionSink for Recorder {
        fn submit(&self, submission: Submission) {
            self.0.borrow_mut().push(submission);
        }
    }

    fn text(field: &'static str, value: &str) -> FieldEdit {
        FieldEdit::Text {
            field,
            value: value.to_string(),
        }
    }

    fn choose(field: &'static str, id: &str) -> FieldEdit {
        FieldEdit::Choose {
            field,
            id: id.to_string(),
        }
    }

    fn fill_contact(session: &mut DialogSession, organization_type: &str) {
        session.edit(text(fields::FIRST_NAME, "Ana"));
        session.edit(text(fields::LAST_NAME, "Bu"));
        session.edit(text(fields::EMAIL, "a@b.it"));
        session.edit(choose(fields::ORGANIZATION_TYPE, organization_type));
    }

    #[test]
    fn preset_only_prefills_organization_type() {
        let session = DialogSession::for_preset(Some(OrganizationType::Consultant));
        assert_eq!(session.values().choice(fields::ORGANIZATION_TYPE), Some("consulente"));
        assert_eq!(session.step(), Step::ContactForm);
        assert_eq!(DialogSession::for_preset(None), DialogSession::default());
    }

    #[test]
    fn invalid_contact_keeps_step_and_records_errors() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        session.edit(text(fields::FIRST_NAME, "A"));

        let err = session.submit(&sink).unwrap_err();
        assert!(err.field_errors().is_some());
        assert_eq!(session.step(), Step::ContactForm);
        assert_eq!(session.error_for(fields::FIRST_NAME), Some(Violation::TooShort { min: 2 }));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn edits_after_a_submit_recheck_only_the_edited_field() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        let _ = session.submit(&sink);
        assert!(session.error_for(fields::EMAIL).is_some());
        assert!(session.error_for(fields::FIRST_NAME).is_some());

        session.edit(text(fields::EMAIL, "a@b.it"));
        assert_eq!(session.error_for(fields::EMAIL), None);
        assert!(session.error_for(fields::FIRST_NAME).is_some());

        session.edit(text(fields::EMAIL, "nope"));
        assert_eq!(session.error_for(fields::EMAIL), Some(Violation::InvalidEmail));
        assert!(session.error_for(fields::FIRST_NAME).is_some());
    }

    #[test]
    fn edits_before_any_submit_show_no_errors() {
        let mut session = DialogSession::new();
        session.edit(text(fields::EMAIL, "nope"));
        session.edit(text(fields::FIRST_NAME, "A"));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn a_new_step_waits_for_its_own_submit() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        let _ = session.submit(&sink);
        fill_contact(&mut session, "azienda");
        assert!(session.errors().is_empty());
        session.submit(&sink).unwrap();

        session.edit(choose(fields::PARTICIPATE, "maybe"));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn valid_contact_advances_and_reaches_the_sink_once() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        fill_contact(&mut session, "azienda");

        assert_eq!(session.submit(&sink), Ok(Outcome::Advanced(Step::ParticipationGate)));
        assert!(session.values().is_empty());
        assert_eq!(
            session.contact().map(|c| c.organization_type),
            Some(OrganizationType::Company)
        );
        assert_eq!(sink.0.borrow().len(), 1);
        assert!(matches!(sink.0.borrow()[0], Submission::Contact(_)));
    }

    #[test]
    fn gate_submission_is_not_sent_to_the_sink() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        fill_contact(&mut session, "ente");
        session.submit(&sink).unwrap();
        session.edit(choose(fields::PARTICIPATE, "yes"));

        assert_eq!(session.submit(&sink), Ok(Outcome::Advanced(Step::CertificationSurvey)));
        assert_eq!(sink.0.borrow().len(), 1);
    }

    #[test]
    fn declining_resets_the_session() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        fill_contact(&mut session, "consulente");
        session.submit(&sink).unwrap();
        session.edit(choose(fields::PARTICIPATE, "no"));

        assert_eq!(session.submit(&sink), Ok(Outcome::Closed(CloseReason::Declined)));
        assert_eq!(session, DialogSession::default());
    }

    #[test]
    fn unchecking_other_clears_the_paired_error() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        fill_contact(&mut session, "azienda");
        session.submit(&sink).unwrap();
        session.edit(choose(fields::PARTICIPATE, "yes"));
        session.submit(&sink).unwrap();
        session.edit(FieldEdit::Toggle {
            field: "epdChallenges",
            id: "other".into(),
            checked: true,
        });
        let _ = session.submit(&sink);
        assert_eq!(
            session.error_for("otherEpdChallenges"),
            Some(Violation::OtherNotSpecified)
        );

        session.edit(FieldEdit::Toggle {
            field: "epdChallenges",
            id: "other".into(),
            checked: false,
        });
        assert_eq!(session.error_for("otherEpdChallenges"), None);
        // The set itself is re-checked and is now empty.
        assert_eq!(
            session.error_for("epdChallenges"),
            Some(Violation::NothingSelected)
        );
    }

    #[test]
    fn submit_on_success_is_rejected() {
        let mut session = DialogSession {
            step: Step::Success,
            ..DialogSession::default()
        };
        let sink = Recorder::default();
        assert!(matches!(
            session.submit(&sink),
            Err(FlowError::UnexpectedTrigger { step: Step::Success, .. })
        ));
        assert_eq!(session.acknowledge(), Ok(Outcome::Closed(CloseReason::Acknowledged)));
        assert_eq!(session, DialogSession::default());
    }

    #[test]
    fn gate_without_contact_closes_as_unrecognized() {
        let mut session = DialogSession {
            step: Step::ParticipationGate,
            ..DialogSession::default()
        };
        session.edit(choose(fields::PARTICIPATE, "yes"));
        let sink = Recorder::default();
        assert_eq!(
            session.submit(&sink),
            Ok(Outcome::Closed(CloseReason::UnrecognizedBranch))
        );
        assert_eq!(session, DialogSession::default());
    }

    #[test]
    fn dismiss_resets_from_a_survey() {
        let sink = Recorder::default();
        let mut session = DialogSession::new();
        fill_contact(&mut session, "consulente");
        session.submit(&sink).unwrap();
        session.edit(choose(fields::PARTICIPATE, "yes"));
        session.submit(&sink).unwrap();
        session.edit(text("country", "Italia"));

        assert_eq!(session.dismiss(), Outcome::Closed(CloseReason::Dismissed));
        assert_eq!(session, DialogSession::default());
        assert!(!sink
            .0
            .borrow()
            .iter()
            .any(|s| matches!(s, Submission::Survey(SurveyResponse::Consultant(_)))));
    }
}
