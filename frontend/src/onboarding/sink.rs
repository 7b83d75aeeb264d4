use log::{error, info};
use serde::Serialize;

use super::records::{ContactInfo, SurveyResponse};

/// A validated record handed off when a step is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum Submission {
    Contact(ContactInfo),
    Survey(SurveyResponse),
}

impl Submission {
    pub fn label(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "waiting-list contact",
            Submission::Survey(SurveyResponse::Company(_)) => "company survey",
            Submission::Survey(SurveyResponse::Consultant(_)) => "consultant survey",
            Submission::Survey(SurveyResponse::Certification(_)) => "certification survey",
        }
    }
}

/// Receives submissions. Fire-and-forget: nothing is returned to the dialog.
pub trait SubmissionSink {
    fn submit(&self, submission: Submission);
}

/// Logs each submission as JSON until a backend endpoint exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, submission: Submission) {
        match serde_json::to_string(&submission) {
            Ok(json) => info!("Captured {}: {}", submission.label(), json),
            Err(e) => error!("Failed to serialize {}: {}", submission.label(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::choices::OrganizationType;
    use serde_json::json;

    #[test]
    fn contact_submission_json_shape() {
        let submission = Submission::Contact(ContactInfo {
            first_name: "Ana".into(),
            last_name: "Bu".into(),
            email: "a@b.it".into(),
            organization_type: OrganizationType::Company,
            organization_name: Some("Verde Srl".into()),
        });
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "contact",
                "payload": {
                    "firstName": "Ana",
                    "lastName": "Bu",
                    "email": "a@b.it",
                    "organizationType": "azienda",
                    "organizationName": "Verde Srl"
                }
            })
        );
        assert_eq!(submission.label(), "waiting-list contact");
    }
}
