//! Draft form values and the declarative constraints checked on submit.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::{translate, Locale};

// Local part of letters, digits and `_'+-.`; domain labels start alphanumeric;
// the top-level domain is at least two letters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Raw value of a single form control, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<String>),
    Set(BTreeSet<String>),
    Flag(bool),
}

/// A single user edit coming from a form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Text { field: &'static str, value: String },
    Choose { field: &'static str, id: String },
    Toggle { field: &'static str, id: String, checked: bool },
    Flag { field: &'static str, value: bool },
}

/// Draft values of the step currently on screen, keyed by field name.
/// Absent fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    fields: BTreeMap<&'static str, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> &str {
        match self.fields.get(field) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn choice(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(FieldValue::Choice(Some(id))) => Some(id),
            _ => None,
        }
    }

    pub fn selected(&self, field: &str) -> Vec<&str> {
        match self.fields.get(field) {
            Some(FieldValue::Set(ids)) => ids.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_selected(&self, field: &str, id: &str) -> bool {
        match self.fields.get(field) {
            Some(FieldValue::Set(ids)) => ids.contains(id),
            Some(FieldValue::Choice(Some(chosen))) => chosen == id,
            _ => false,
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        matches!(self.fields.get(field), Some(FieldValue::Flag(true)))
    }

    /// Applies an edit and returns the name of the field it touched.
    pub fn apply(&mut self, edit: FieldEdit) -> &'static str {
        match edit {
            FieldEdit::Text { field, value } => {
                self.fields.insert(field, FieldValue::Text(value));
                field
            }
            FieldEdit::Choose { field, id } => {
                let id = if id.is_empty() { None } else { Some(id) };
                self.fields.insert(field, FieldValue::Choice(id));
                field
            }
            FieldEdit::Toggle { field, id, checked } => {
                let entry = self
                    .fields
                    .entry(field)
                    .or_insert_with(|| FieldValue::Set(BTreeSet::new()));
                if !matches!(entry, FieldValue::Set(_)) {
                    *entry = FieldValue::Set(BTreeSet::new());
                }
                if let FieldValue::Set(ids) = entry {
                    if checked {
                        ids.insert(id);
                    } else {
                        ids.remove(&id);
                    }
                }
                field
            }
            FieldEdit::Flag { field, value } => {
                self.fields.insert(field, FieldValue::Flag(value));
                field
            }
        }
    }

    /// Builder-style [`FormValues::apply`], mostly for presets and tests.
    pub fn with(mut self, edit: FieldEdit) -> Self {
        self.apply(edit);
        self
    }
}

/// One rule a field must satisfy before its step may be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Text must be non-blank, a choice made, a set non-empty.
    Required,
    MinLength(usize),
    Email,
    OneOf(Vec<&'static str>),
    /// At least one element, all drawn from the listed ids.
    NonEmptySet(Vec<&'static str>),
    /// Non-blank text required only while `field` has `sentinel` selected.
    RequiredIf {
        field: &'static str,
        sentinel: &'static str,
    },
    LiteralTrue,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    TooShort { min: usize },
    InvalidEmail,
    NothingChosen,
    NotAnOption,
    NothingSelected,
    OtherNotSpecified,
    ConsentRequired,
}

impl Violation {
    pub fn message_key(self) -> &'static str {
        match self {
            Violation::Missing => "validation.required",
            Violation::TooShort { .. } => "validation.minLength",
            Violation::InvalidEmail => "validation.email",
            Violation::NothingChosen => "validation.choose",
            Violation::NotAnOption => "validation.invalidOption",
            Violation::NothingSelected => "validation.selectAtLeastOne",
            Violation::OtherNotSpecified => "validation.specifyOther",
            Violation::ConsentRequired => "validation.consent",
        }
    }

    /// Human-readable message in `locale`.
    pub fn message(self, locale: Locale) -> String {
        let template = translate(locale, self.message_key());
        match self {
            Violation::TooShort { min } => template.replace("{min}", &min.to_string()),
            _ => template.to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::En))
    }
}

impl Constraint {
    pub fn check(&self, field: &str, values: &FormValues) -> Result<(), Violation> {
        match self {
            Constraint::Required => {
                let present = match values.get(field) {
                    Some(FieldValue::Text(text)) => !text.trim().is_empty(),
                    Some(FieldValue::Choice(choice)) => choice.is_some(),
                    Some(FieldValue::Set(ids)) => !ids.is_empty(),
                    Some(FieldValue::Flag(_)) => true,
                    None => false,
                };
                if present {
                    Ok(())
                } else {
                    Err(Violation::Missing)
                }
            }
            Constraint::MinLength(min) => {
                if values.text(field).trim().chars().count() >= *min {
                    Ok(())
                } else {
                    Err(Violation::TooShort { min: *min })
                }
            }
            Constraint::Email => {
                if is_email(values.text(field).trim()) {
                    Ok(())
                } else {
                    Err(Violation::InvalidEmail)
                }
            }
            Constraint::OneOf(ids) => match values.choice(field) {
                None => Err(Violation::NothingChosen),
                Some(id) if ids.contains(&id) => Ok(()),
                Some(_) => Err(Violation::NotAnOption),
            },
            Constraint::NonEmptySet(ids) => {
                let selected = values.selected(field);
                if selected.is_empty() {
                    Err(Violation::NothingSelected)
                } else if selected.iter().all(|id| ids.contains(id)) {
                    Ok(())
                } else {
                    Err(Violation::NotAnOption)
                }
            }
            Constraint::RequiredIf {
                field: trigger,
                sentinel,
            } => {
                if values.is_selected(trigger, sentinel) && values.text(field).trim().is_empty() {
                    Err(Violation::OtherNotSpecified)
                } else {
                    Ok(())
                }
            }
            Constraint::LiteralTrue => {
                if values.flag(field) {
                    Ok(())
                } else {
                    Err(Violation::ConsentRequired)
                }
            }
        }
    }
}

/// First violation of each failing field, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, Violation>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, violation: Violation) -> Self {
        let mut errors = Self::new();
        errors.insert(field, violation);
        errors
    }

    pub fn insert(&mut self, field: &'static str, violation: Violation) {
        self.errors.insert(field, violation);
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<Violation> {
        self.errors.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        f.write_str(&fields.join(", "))
    }
}

/// Checks `constraints` in order and reports the first one that fails.
pub fn check_field(
    field: &'static str,
    constraints: &[Constraint],
    values: &FormValues,
) -> Option<Violation> {
    constraints
        .iter()
        .find_map(|constraint| constraint.check(field, values).err())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(field: &'static str, value: &str) -> FieldEdit {
        FieldEdit::Text {
            field,
            value: value.to_string(),
        }
    }

    fn toggle(field: &'static str, id: &str, checked: bool) -> FieldEdit {
        FieldEdit::Toggle {
            field,
            id: id.to_string(),
            checked,
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_email("a@b.it"));
        assert!(is_email("mario.rossi+eu@studio-verde.co.uk"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.it"));
        assert!(!is_email("@c.it"));
        assert!(!is_email(""));
        assert!(is_email("O'Brien@Studio.IT"));
        for rejected in ["a@b.c", "a@b.12", ".a@b.it", "a..b@c.it", "a@-b.it", "a!#$@b.it", "a.@b.it"] {
            assert!(!is_email(rejected), "{} should be rejected", rejected);
        }
    }

    #[test]
    fn min_length_counts_trimmed_characters() {
        let values = FormValues::new().with(text("nome", " A "));
        assert_eq!(
            Constraint::MinLength(2).check("nome", &values),
            Err(Violation::TooShort { min: 2 })
        );
        let values = FormValues::new().with(text("nome", "Bu"));
        assert_eq!(Constraint::MinLength(2).check("nome", &values), Ok(()));
    }

    #[test]
    fn one_of_distinguishes_missing_from_unknown() {
        let rule = Constraint::OneOf(vec!["yes", "no"]);
        assert_eq!(rule.check("participate", &FormValues::new()), Err(Violation::NothingChosen));

        let values = FormValues::new().with(FieldEdit::Choose {
            field: "participate",
            id: "maybe".into(),
        });
        assert_eq!(rule.check("participate", &values), Err(Violation::NotAnOption));
    }

    #[test]
    fn empty_choice_edit_clears_the_choice() {
        let values = FormValues::new()
            .with(FieldEdit::Choose {
                field: "organizationType",
                id: "ente".into(),
            })
            .with(FieldEdit::Choose {
                field: "organizationType",
                id: String::new(),
            });
        assert_eq!(values.choice("organizationType"), None);
    }

    #[test]
    fn toggling_builds_and_shrinks_the_set() {
        let values = FormValues::new()
            .with(toggle("channels", "linkedin", true))
            .with(toggle("channels", "events", true))
            .with(toggle("channels", "linkedin", false));
        assert_eq!(values.selected("channels"), vec!["events"]);
    }

    #[test]
    fn non_empty_set_rejects_unknown_ids() {
        let rule = Constraint::NonEmptySet(vec!["linkedin", "other"]);
        assert_eq!(rule.check("channels", &FormValues::new()), Err(Violation::NothingSelected));

        let values = FormValues::new().with(toggle("channels", "fax", true));
        assert_eq!(rule.check("channels", &values), Err(Violation::NotAnOption));
    }

    #[test]
    fn other_text_is_required_only_while_other_is_selected() {
        let rule = Constraint::RequiredIf {
            field: "channels",
            sentinel: "other",
        };
        let values = FormValues::new().with(toggle("channels", "linkedin", true));
        assert_eq!(rule.check("otherChannels", &values), Ok(()));

        let values = values.with(toggle("channels", "other", true));
        assert_eq!(rule.check("otherChannels", &values), Err(Violation::OtherNotSpecified));

        let values = values.with(text("otherChannels", "  "));
        assert_eq!(rule.check("otherChannels", &values), Err(Violation::OtherNotSpecified));

        let values = values.with(text("otherChannels", "Newsletter"));
        assert_eq!(rule.check("otherChannels", &values), Ok(()));
    }

    #[test]
    fn other_sentinel_also_applies_to_single_choice() {
        let rule = Constraint::RequiredIf {
            field: "updateFrequency",
            sentinel: "other",
        };
        let values = FormValues::new().with(FieldEdit::Choose {
            field: "updateFrequency",
            id: "other".into(),
        });
        assert_eq!(rule.check("otherUpdateFrequency", &values), Err(Violation::OtherNotSpecified));
    }

    #[test]
    fn consent_must_be_literally_true() {
        let values = FormValues::new().with(FieldEdit::Flag {
            field: "consent",
            value: false,
        });
        assert_eq!(Constraint::LiteralTrue.check("consent", &values), Err(Violation::ConsentRequired));
        let values = values.with(FieldEdit::Flag {
            field: "consent",
            value: true,
        });
        assert_eq!(Constraint::LiteralTrue.check("consent", &values), Ok(()));
    }

    #[test]
    fn check_field_reports_first_failure() {
        let constraints = [Constraint::Required, Constraint::MinLength(2)];
        assert_eq!(
            check_field("city", &constraints, &FormValues::new()),
            Some(Violation::Missing)
        );
        let values = FormValues::new().with(text("city", "X"));
        assert_eq!(
            check_field("city", &constraints, &values),
            Some(Violation::TooShort { min: 2 })
        );
    }

    #[test]
    fn messages_are_localized() {
        let violation = Violation::TooShort { min: 2 };
        assert_eq!(violation.message(Locale::It), "Deve avere almeno 2 caratteri");
        assert_eq!(violation.message(Locale::En), "Must be at least 2 characters long");
        assert_eq!(Violation::InvalidEmail.message(Locale::It), "Email non valida");
    }
}
