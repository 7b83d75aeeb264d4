use thiserror::Error;

use super::sequencer::Step;
use super::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("invalid fields: {0}")]
    Validation(FieldErrors),

    /// The participation gate had no organization type to branch on.
    #[error("cannot pick a survey without a captured organization type")]
    UnrecognizedBranch,

    #[error("{trigger} is not accepted at step {step}")]
    UnexpectedTrigger { step: Step, trigger: &'static str },
}

impl From<FieldErrors> for FlowError {
    fn from(errors: FieldErrors) -> Self {
        FlowError::Validation(errors)
    }
}

impl FlowError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FlowError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
