//! Declarative schemas for every onboarding step.
//!
//! A [`FormSchema`] drives both rendering (labels, control kind, options) and
//! submit-time validation. [`FormRecord`] turns validated draft values into
//! the typed records in [`super::records`].

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

use super::choices::{
    AcquisitionChannel, Choice, CompanyRole, CompanySize, ConsultantChannel, EpdChallenge,
    EpdDifficulty, OrganizationSize, OrganizationType, Rating, TimeShare, UpdateFrequency,
    VerificationChallenge, WorkStatus, YesNo, OTHER,
};
use super::records::{
    CertificationSurveyResponse, CompanySurveyResponse, ConsultantSurveyResponse, ContactInfo,
    ParticipationChoice, Selection, SurveyResponse,
};
use super::validation::{check_field, Constraint, FieldErrors, FormValues, Violation};
use crate::config;

/// Field names shared between schemas, presets and tests.
pub mod fields {
    pub const FIRST_NAME: &str = "nome";
    pub const LAST_NAME: &str = "cognome";
    pub const EMAIL: &str = "email";
    pub const ORGANIZATION_TYPE: &str = "organizationType";
    pub const ORGANIZATION_NAME: &str = "organizationName";
    pub const PARTICIPATE: &str = "participate";
    pub const CONSENT: &str = "consent";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub id: &'static str,
    /// Locale key of the option text.
    pub label: String,
}

fn options<T: Choice>(prefix: &str) -> Vec<OptionSpec> {
    T::ALL
        .iter()
        .map(|choice| OptionSpec {
            id: choice.id(),
            label: format!("{}.{}", prefix, choice.id()),
        })
        .collect()
}

/// Which control renders a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text { placeholder: Option<&'static str> },
    Email { placeholder: Option<&'static str> },
    TextArea,
    Select {
        placeholder: &'static str,
        options: Vec<OptionSpec>,
    },
    Radio(Vec<OptionSpec>),
    /// Horizontal 1–5 radio row.
    Scale(Vec<OptionSpec>),
    Checkboxes(Vec<OptionSpec>),
    Consent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub hint: Option<&'static str>,
    pub input: Input,
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, input: Input) -> Self {
        Self {
            name,
            label,
            hint: None,
            input,
            constraints: Vec::new(),
        }
    }

    fn hint(mut self, key: &'static str) -> Self {
        self.hint = Some(key);
        self
    }

    fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// The `(field, option)` pair that makes this field required, if any.
    pub fn revealed_by(&self) -> Option<(&'static str, &'static str)> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::RequiredIf { field, sentinel } => Some((*field, *sentinel)),
            _ => None,
        })
    }

    /// Conditional fields stay hidden until their trigger option is picked.
    pub fn is_visible(&self, values: &FormValues) -> bool {
        match self.revealed_by() {
            Some((field, sentinel)) => values.is_selected(field, sentinel),
            None => true,
        }
    }

    pub fn check(&self, values: &FormValues) -> Option<Violation> {
        check_field(self.name, &self.constraints, values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    /// Stable name used in logs.
    pub name: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub submit_label: &'static str,
    pub cancel_label: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn check_field(&self, name: &str, values: &FormValues) -> Option<Violation> {
        self.field(name).and_then(|field| field.check(values))
    }

    /// Checks every field and collects the first violation of each.
    pub fn validate(&self, values: &FormValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            if let Some(violation) = field.check(values) {
                errors.insert(field.name, violation);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, Input::Text { placeholder: None }).constraint(Constraint::Required)
}

fn text_area(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, Input::TextArea)
}

fn single<T: Choice>(name: &'static str, label: &'static str, prefix: &str) -> FieldSpec {
    FieldSpec::new(name, label, Input::Radio(options::<T>(prefix)))
        .constraint(Constraint::OneOf(T::ids()))
}

fn rating(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, Input::Scale(options::<Rating>("rating")))
        .hint("survey.scale")
        .constraint(Constraint::OneOf(Rating::ids()))
}

fn multi<T: Choice>(name: &'static str, label: &'static str, prefix: &str) -> FieldSpec {
    FieldSpec::new(name, label, Input::Checkboxes(options::<T>(prefix)))
        .constraint(Constraint::NonEmptySet(T::ids()))
}

fn other_text(name: &'static str, trigger: &'static str) -> FieldSpec {
    FieldSpec::new(name, "survey.specifyOther", Input::Text { placeholder: None }).constraint(
        Constraint::RequiredIf {
            field: trigger,
            sentinel: OTHER,
        },
    )
}

fn consent() -> FieldSpec {
    FieldSpec::new(fields::CONSENT, "survey.consent", Input::Consent)
        .constraint(Constraint::LiteralTrue)
}

pub static CONTACT_FORM: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    name: "contact",
    title: "waitingList.title",
    description: Some("waitingList.description"),
    submit_label: "waitingList.submit",
    cancel_label: "waitingList.cancel",
    fields: vec![
        FieldSpec::new(
            fields::FIRST_NAME,
            "waitingList.firstName",
            Input::Text {
                placeholder: Some("waitingList.firstNamePlaceholder"),
            },
        )
        .constraint(Constraint::MinLength(config::MIN_NAME_LENGTH)),
        FieldSpec::new(
            fields::LAST_NAME,
            "waitingList.lastName",
            Input::Text {
                placeholder: Some("waitingList.lastNamePlaceholder"),
            },
        )
        .constraint(Constraint::MinLength(config::MIN_NAME_LENGTH)),
        FieldSpec::new(
            fields::EMAIL,
            "waitingList.email",
            Input::Email {
                placeholder: Some("waitingList.emailPlaceholder"),
            },
        )
        .constraint(Constraint::Email),
        FieldSpec::new(
            fields::ORGANIZATION_TYPE,
            "waitingList.organizationType",
            Input::Select {
                placeholder: "waitingList.selectOrganizationType",
                options: options::<OrganizationType>("waitingList.organizationType"),
            },
        )
        .constraint(Constraint::OneOf(OrganizationType::ids())),
        FieldSpec::new(
            fields::ORGANIZATION_NAME,
            "waitingList.organizationName",
            Input::Text {
                placeholder: Some("waitingList.organizationNamePlaceholder"),
            },
        ),
    ],
});

pub static PARTICIPATION_GATE: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    name: "participation",
    title: "survey.gate.title",
    description: None,
    submit_label: "survey.gate.confirm",
    cancel_label: "survey.cancel",
    fields: vec![single::<YesNo>(
        fields::PARTICIPATE,
        "survey.gate.question",
        "survey.yesNo",
    )],
});

pub static COMPANY_SURVEY: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    name: "company-survey",
    title: "survey.company.title",
    description: Some("survey.company.description"),
    submit_label: "survey.submit",
    cancel_label: "survey.cancel",
    fields: vec![
        single::<CompanySize>(
            "companySize",
            "survey.company.companySize",
            "survey.company.companySize",
        ),
        text("country", "survey.company.country"),
        text("city", "survey.company.city"),
        single::<CompanyRole>("role", "survey.company.role", "survey.company.role"),
        rating("sustainabilityImportance", "survey.company.sustainabilityImportance"),
        rating("certificationImportance", "survey.company.certificationImportance"),
        multi::<EpdChallenge>(
            "epdChallenges",
            "survey.company.epdChallenges",
            "survey.company.epdChallenges",
        ),
        other_text("otherEpdChallenges", "epdChallenges"),
        multi::<ConsultantChannel>(
            "consultantChannels",
            "survey.company.consultantChannels",
            "survey.company.consultantChannels",
        ),
        other_text("otherConsultantChannels", "consultantChannels"),
        rating("contactEaseRating", "survey.company.contactEaseRating"),
        single::<UpdateFrequency>(
            "updateFrequency",
            "survey.company.updateFrequency",
            "survey.company.updateFrequency",
        ),
        other_text("otherUpdateFrequency", "updateFrequency"),
        rating("onboardingInterestRating", "survey.company.onboardingInterestRating"),
        rating("matchingInterestRating", "survey.company.matchingInterestRating"),
        text_area("usefulAspects", "survey.company.usefulAspects"),
        text_area("suggestions", "survey.company.suggestions"),
        single::<YesNo>("betaTesting", "survey.company.betaTesting", "survey.yesNo"),
        consent(),
    ],
});

pub static CONSULTANT_SURVEY: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    name: "consultant-survey",
    title: "survey.consultant.title",
    description: Some("survey.consultant.description"),
    submit_label: "survey.submit",
    cancel_label: "survey.cancel",
    fields: vec![
        single::<WorkStatus>(
            "workStatus",
            "survey.consultant.workStatus",
            "survey.consultant.workStatus",
        ),
        text("country", "survey.consultant.country"),
        text("city", "survey.consultant.city"),
        multi::<EpdDifficulty>(
            "epdDifficulties",
            "survey.consultant.epdDifficulties",
            "survey.consultant.epdDifficulties",
        ),
        other_text("otherEpdDifficulties", "epdDifficulties"),
        multi::<AcquisitionChannel>(
            "clientAcquisitionChannels",
            "survey.consultant.clientAcquisitionChannels",
            "channel",
        ),
        other_text("otherClientAcquisitionChannels", "clientAcquisitionChannels"),
        rating(
            "platformInfoUtilityRating",
            "survey.consultant.platformInfoUtilityRating",
        ),
        rating(
            "platformClientAcquisitionRating",
            "survey.consultant.platformClientAcquisitionRating",
        ),
        rating(
            "platformDataCollectionRating",
            "survey.consultant.platformDataCollectionRating",
        ),
        rating(
            "platformProjectManagementRating",
            "survey.consultant.platformProjectManagementRating",
        ),
        single::<TimeShare>(
            "timeSpentOnAcquisition",
            "survey.consultant.timeSpentOnAcquisition",
            "survey.consultant.timeSpentOnAcquisition",
        ),
        single::<YesNo>(
            "subscriptionWillingness",
            "survey.consultant.subscriptionWillingness",
            "survey.yesNo",
        ),
        single::<YesNo>("betaTesting", "survey.consultant.betaTesting", "survey.yesNo"),
        consent(),
    ],
});

pub static CERTIFICATION_SURVEY: Lazy<FormSchema> = Lazy::new(|| FormSchema {
    name: "certification-survey",
    title: "survey.certification.title",
    description: Some("survey.certification.description"),
    submit_label: "survey.submit",
    cancel_label: "survey.cancel",
    fields: vec![
        single::<OrganizationSize>(
            "orgSize",
            "survey.certification.orgSize",
            "survey.certification.orgSize",
        ),
        multi::<VerificationChallenge>(
            "verificationChallenges",
            "survey.certification.verificationChallenges",
            "survey.certification.verificationChallenges",
        ),
        other_text("otherVerificationChallenges", "verificationChallenges"),
        multi::<AcquisitionChannel>(
            "companyAcquisitionChannels",
            "survey.certification.companyAcquisitionChannels",
            "channel",
        ),
        other_text("otherCompanyAcquisitionChannels", "companyAcquisitionChannels"),
        rating(
            "platformInfoUtilityRating",
            "survey.certification.platformInfoUtilityRating",
        ),
        rating(
            "platformClientAcquisitionRating",
            "survey.certification.platformClientAcquisitionRating",
        ),
        single::<YesNo>(
            "subscriptionWillingness",
            "survey.certification.subscriptionWillingness",
            "survey.yesNo",
        ),
        single::<YesNo>("betaTesting", "survey.certification.betaTesting", "survey.yesNo"),
        consent(),
    ],
});

/// Typed access to draft values that already passed their schema.
pub struct Reader<'a> {
    values: &'a FormValues,
}

impl<'a> Reader<'a> {
    pub fn new(values: &'a FormValues) -> Self {
        Self { values }
    }

    pub fn choice<T: Choice>(&self, field: &'static str) -> Result<T, FieldErrors> {
        let id = self
            .values
            .choice(field)
            .ok_or_else(|| FieldErrors::single(field, Violation::NothingChosen))?;
        T::from_id(id).ok_or_else(|| FieldErrors::single(field, Violation::NotAnOption))
    }

    pub fn text(&self, field: &str) -> String {
        self.values.text(field).trim().to_string()
    }

    pub fn optional_text(&self, field: &str) -> Option<String> {
        let text = self.text(field);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Free text paired with an "other" option; dropped unless "other" is picked.
    pub fn other_text(&self, field: &str, trigger: &str) -> Option<String> {
        if self.values.is_selected(trigger, OTHER) {
            self.optional_text(field)
        } else {
            None
        }
    }

    pub fn selection<T: Choice>(
        &self,
        field: &'static str,
        other_field: &str,
    ) -> Result<Selection<T>, FieldErrors> {
        let selected = self
            .values
            .selected(field)
            .into_iter()
            .map(|id| {
                T::from_id(id).ok_or_else(|| FieldErrors::single(field, Violation::NotAnOption))
            })
            .collect::<Result<BTreeSet<T>, FieldErrors>>()?;
        if selected.is_empty() {
            return Err(FieldErrors::single(field, Violation::NothingSelected));
        }
        Ok(Selection {
            selected,
            other: self.other_text(other_field, field),
        })
    }

    pub fn flag(&self, field: &str) -> bool {
        self.values.flag(field)
    }
}

/// A record that can be built from one step's draft values.
pub trait FormRecord: Sized {
    fn schema() -> &'static FormSchema;

    fn read(reader: &Reader<'_>) -> Result<Self, FieldErrors>;

    /// Validates `values` against [`FormRecord::schema`], then reads the record.
    fn parse(values: &FormValues) -> Result<Self, FieldErrors> {
        Self::schema().validate(values)?;
        Self::read(&Reader::new(values))
    }
}

impl FormRecord for ContactInfo {
    fn schema() -> &'static FormSchema {
        &*CONTACT_FORM
    }

    fn read(reader: &Reader<'_>) -> Result<Self, FieldErrors> {
        Ok(ContactInfo {
            first_name: reader.text(fields::FIRST_NAME),
            last_name: reader.text(fields::LAST_NAME),
            email: reader.text(fields::EMAIL),
            organization_type: reader.choice(fields::ORGANIZATION_TYPE)?,
            organization_name: reader.optional_text(fields::ORGANIZATION_NAME),
        })
    }
}

impl FormRecord for ParticipationChoice {
    fn schema() -> &'static FormSchema {
        &*PARTICIPATION_GATE
    }

    fn read(reader: &Reader<'_>) -> Result<Self, FieldErrors> {
        Ok(ParticipationChoice {
            participate: reader.choice(fields::PARTICIPATE)?,
        })
    }
}

impl FormRecord for CompanySurveyResponse {
    fn schema() -> &'static FormSchema {
        &*COMPANY_SURVEY
    }

    fn read(reader: &Reader<'_>) -> Result<Self, FieldErrors> {
        Ok(CompanySurveyResponse {
            company_size: reader.choice("companySize")?,
            country: reader.text("country"),
            city: reader.text("city"),
            role: reader.choice("role")?,
            sustainability_importance: reader.choice("sustainabilityImportance")?,
            certification_importance: reader.choice("certificationImportance")?,
            epd_challenges: reader.selection("epdChallenges", "otherEpdChallenges")?,
            consultant_channels: reader.selection("consultantChannels", "otherConsultantChannels")?,
            contact_ease_rating: reader.choice("contactEaseRating")?,
            update_frequency: reader.choice("updateFrequency")?,
            other_update_frequency: reader.other_text("otherUpdateFrequency", "updateFrequency"),
            onboarding_interest_rating: reader.choice("onboardingInterestRating")?,
            matching_interest_rating: reader.choice("matchingInterestRating")?,
            useful_aspects: reader.optional_text("usefulAspects"),
            suggestions: reader.optional_text("suggestions"),
            beta_testing: reader.choice("betaTesting")?,
            consent: reader.flag(fields::CONSENT),
        })
    }
}

impl FormRecord for ConsultantSurveyResponse {
    fn schema() -> &'static FormSchema {
        &*CONSULTANT_SURVEY
    }

    fn read(reader: &Reader<'_>) -> Result<Self, FieldErrors> {
        Ok(ConsultantSurveyResponse {
            work_status: reader.choice("workStatus")?,
            country: reader.text("country"),
            city: reader.text("city"),
            epd_difficulties: reader.selection("epdDifficulties", "otherEpdDifficulties")?,
            client_acquisition_channels: reader
                .selection("clientAcquisitionChannels", "otherClientAcquisitionChannels")?,
            platform_info_utility_rating: reader.choice("platformInfoUtilityRating")?,
            platform_client_acquisition_rating: reader.choice("platformClientAcquisitionRating")?,
            platform_data_collection_rating: reader.choice("platformDataCollectionRating")?,
            platform_project_management_rating: reader.choice("platformProjectManagementRating")?,
            time_spent_on_acquisition: reader.choice("timeSpentOnAcquisition")?,
            subscription_willingness: reader.choice("subscriptionWillingness")?,
            beta_testing: reader.choice("betaTesting")?,
            consent: reader.flag(fields::CONSENT),
        })
    }
}

impl FormRecord for CertificationSurveyResponse {
    fn schema() -> &'static FormSchema {
        &*CERTIFICATION_SURVEY
    }

    fn read(reader: &Reader<'_>) -> Result<Self, FieldErrors> {
        Ok(CertificationSurveyResponse {
            org_size: reader.choice("orgSize")?,
            verification_challenges: reader
                .selection("verificationChallenges", "otherVerificationChallenges")?,
            company_acquisition_channels: reader
                .selection("companyAcquisitionChannels", "otherCompanyAcquisitionChannels")?,
            platform_info_utility_rating: reader.choice("platformInfoUtilityRating")?,
            platform_client_acquisition_rating: reader.choice("platformClientAcquisitionRating")?,
            subscription_willingness: reader.choice("subscriptionWillingness")?,
            beta_testing: reader.choice("betaTesting")?,
            consent: reader.flag(fields::CONSENT),
        })
    }
}

pub fn survey_schema(organization_type: OrganizationType) -> &'static FormSchema {
    match organization_type {
        OrganizationType::Company => &*COMPANY_SURVEY,
        OrganizationType::Consultant => &*CONSULTANT_SURVEY,
        OrganizationType::CertificationBody => &*CERTIFICATION_SURVEY,
    }
}

pub fn parse_survey(
    organization_type: OrganizationType,
    values: &FormValues,
) -> Result<SurveyResponse, FieldErrors> {
    match organization_type {
        OrganizationType::Company => CompanySurveyResponse::parse(values).map(SurveyResponse::Company),
        OrganizationType::Consultant => {
            ConsultantSurveyResponse::parse(values).map(SurveyResponse::Consultant)
        }
        OrganizationType::CertificationBody => {
            CertificationSurveyResponse::parse(values).map(SurveyResponse::Certification)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::has_translation;
    use crate::onboarding::validation::FieldEdit;

    fn all_schemas() -> Vec<&'static FormSchema> {
        vec![
            &*CONTACT_FORM,
            &*PARTICIPATION_GATE,
            &*COMPANY_SURVEY,
            &*CONSULTANT_SURVEY,
            &*CERTIFICATION_SURVEY,
        ]
    }

    fn option_labels(input: &Input) -> Vec<&str> {
        match input {
            Input::Select { options, .. }
            | Input::Radio(options)
            | Input::Scale(options)
            | Input::Checkboxes(options) => options.iter().map(|o| o.label.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn every_label_has_a_translation() {
        for schema in all_schemas() {
            let mut keys = vec![schema.title, schema.submit_label, schema.cancel_label];
            keys.extend(schema.description);
            for field in &schema.fields {
                keys.push(field.label);
                keys.extend(field.hint);
                keys.extend(option_labels(&field.input));
                if let Input::Text { placeholder } | Input::Email { placeholder } = &field.input {
                    keys.extend(*placeholder);
                }
                if let Input::Select { placeholder, .. } = &field.input {
                    keys.push(*placeholder);
                }
            }
            for key in keys {
                assert!(has_translation(key), "{}: missing translation {}", schema.name, key);
            }
        }
    }

    #[test]
    fn field_names_are_unique_per_schema() {
        for schema in all_schemas() {
            let mut seen = BTreeSet::new();
            for field in &schema.fields {
                assert!(seen.insert(field.name), "{} repeats {}", schema.name, field.name);
            }
        }
    }

    #[test]
    fn conditional_fields_point_at_fields_offering_other() {
        for schema in all_schemas() {
            for field in &schema.fields {
                if let Some((trigger, sentinel)) = field.revealed_by() {
                    let trigger_field = schema
                        .field(trigger)
                        .unwrap_or_else(|| panic!("{} has no field {}", schema.name, trigger));
                    let offers = match &trigger_field.input {
                        Input::Radio(options) | Input::Checkboxes(options) => {
                            options.iter().any(|o| o.id == sentinel)
                        }
                        _ => false,
                    };
                    assert!(offers, "{} does not offer {}", trigger, sentinel);
                }
            }
        }
    }

    #[test]
    fn every_survey_requires_consent() {
        for organization_type in OrganizationType::ALL {
            let schema = survey_schema(*organization_type);
            let consent = schema.field(fields::CONSENT).expect("consent field");
            assert_eq!(consent.constraints, vec![Constraint::LiteralTrue]);
        }
    }

    #[test]
    fn other_text_is_hidden_until_other_is_picked() {
        let field = COMPANY_SURVEY.field("otherEpdChallenges").unwrap();
        let values = FormValues::new();
        assert!(!field.is_visible(&values));
        let values = values.with(FieldEdit::Toggle {
            field: "epdChallenges",
            id: "other".into(),
            checked: true,
        });
        assert!(field.is_visible(&values));
    }

    #[test]
    fn contact_form_reports_every_failing_field() {
        let errors = CONTACT_FORM.validate(&FormValues::new()).unwrap_err();
        let failing: Vec<&str> = errors.fields().collect();
        assert_eq!(failing, vec!["cognome", "email", "nome", "organizationType"]);
        assert_eq!(errors.get("nome"), Some(Violation::TooShort { min: 2 }));
        assert_eq!(errors.get("organizationType"), Some(Violation::NothingChosen));
    }

    #[test]
    fn contact_info_trims_and_drops_blank_organization_name() {
        let values = FormValues::new()
            .with(FieldEdit::Text { field: fields::FIRST_NAME, value: " Ana ".into() })
            .with(FieldEdit::Text { field: fields::LAST_NAME, value: "Bu".into() })
            .with(FieldEdit::Text { field: fields::EMAIL, value: "a@b.it".into() })
            .with(FieldEdit::Choose { field: fields::ORGANIZATION_TYPE, id: "ente".into() })
            .with(FieldEdit::Text { field: fields::ORGANIZATION_NAME, value: "   ".into() });
        let contact = ContactInfo::parse(&values).unwrap();
        assert_eq!(contact.first_name, "Ana");
        assert_eq!(contact.organization_type, OrganizationType::CertificationBody);
        assert_eq!(contact.organization_name, None);
    }
}
