//! Validated, fully-typed records produced by the onboarding steps.

use std::collections::BTreeSet;

use serde::Serialize;

use super::choices::{
    AcquisitionChannel, CompanyRole, CompanySize, ConsultantChannel, EpdChallenge, EpdDifficulty,
    OrganizationSize, OrganizationType, Rating, TimeShare, UpdateFrequency, VerificationChallenge,
    WorkStatus, YesNo,
};

/// Waiting-list contact details captured by the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization_type: OrganizationType,
    pub organization_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParticipationChoice {
    pub participate: YesNo,
}

/// Multi-select answer. `other` is only set when the "other" option is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<T: Ord> {
    pub selected: BTreeSet<T>,
    pub other: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySurveyResponse {
    pub company_size: CompanySize,
    pub country: String,
    pub city: String,
    pub role: CompanyRole,
    pub sustainability_importance: Rating,
    pub certification_importance: Rating,
    pub epd_challenges: Selection<EpdChallenge>,
    pub consultant_channels: Selection<ConsultantChannel>,
    pub contact_ease_rating: Rating,
    pub update_frequency: UpdateFrequency,
    pub other_update_frequency: Option<String>,
    pub onboarding_interest_rating: Rating,
    pub matching_interest_rating: Rating,
    pub useful_aspects: Option<String>,
    pub suggestions: Option<String>,
    pub beta_testing: YesNo,
    pub consent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantSurveyResponse {
    pub work_status: WorkStatus,
    pub country: String,
    pub city: String,
    pub epd_difficulties: Selection<EpdDifficulty>,
    pub client_acquisition_channels: Selection<AcquisitionChannel>,
    pub platform_info_utility_rating: Rating,
    pub platform_client_acquisition_rating: Rating,
    pub platform_data_collection_rating: Rating,
    pub platform_project_management_rating: Rating,
    pub time_spent_on_acquisition: TimeShare,
    pub subscription_willingness: YesNo,
    pub beta_testing: YesNo,
    pub consent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationSurveyResponse {
    pub org_size: OrganizationSize,
    pub verification_challenges: Selection<VerificationChallenge>,
    pub company_acquisition_channels: Selection<AcquisitionChannel>,
    pub platform_info_utility_rating: Rating,
    pub platform_client_acquisition_rating: Rating,
    pub subscription_willingness: YesNo,
    pub beta_testing: YesNo,
    pub consent: bool,
}

/// Answers to whichever role survey the visitor was routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "survey", rename_all = "camelCase")]
pub enum SurveyResponse {
    Company(CompanySurveyResponse),
    Consultant(ConsultantSurveyResponse),
    Certification(CertificationSurveyResponse),
}

impl SurveyResponse {
    pub fn organization_type(&self) -> OrganizationType {
        match self {
            SurveyResponse::Company(_) => OrganizationType::Company,
            SurveyResponse::Consultant(_) => OrganizationType::Consultant,
            SurveyResponse::Certification(_) => OrganizationType::CertificationBody,
        }
    }
}
