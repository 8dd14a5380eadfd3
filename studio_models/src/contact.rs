use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::macros::nutype_string;

/// Local part made of dot-separated atoms, followed by a domain with at least
/// one dot and an alphabetic top-level label.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+-]+(\.[A-Za-z0-9_'+-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// The fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownFormFieldError(pub String);

impl FromStr for FormField {
    type Err = UnknownFormFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFormFieldError(s.into()))
    }
}

/// Raw, unvalidated input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    /// Checks every field against its rule and returns the trimmed inquiry,
    /// or the first violation of each failing field.
    pub fn validate(&self) -> Result<ContactInquiry, FieldViolations> {
        let mut violations = FieldViolations::default();

        let name = violations.check(
            FormField::Name,
            ContactName::try_new(self.name.clone()),
            |err| match err {
                ContactNameError::NotEmptyViolated => FieldViolation::Required,
                ContactNameError::LenCharMaxViolated => FieldViolation::TooLong {
                    max: ContactName::MAX_LENGTH,
                },
            },
        );

        let email = violations.check(
            FormField::Email,
            ContactEmail::try_new(self.email.clone()),
            |err| match err {
                ContactEmailError::NotEmptyViolated => FieldViolation::Required,
                ContactEmailError::RegexViolated => FieldViolation::InvalidFormat,
                ContactEmailError::LenCharMaxViolated => FieldViolation::TooLong {
                    max: ContactEmail::MAX_LENGTH,
                },
            },
        );

        let company = violations.check(
            FormField::Company,
            ContactCompany::try_new(self.company.clone())
                .map(|company| (!company.is_empty()).then_some(company)),
            |err| match err {
                ContactCompanyError::LenCharMaxViolated => FieldViolation::TooLong {
                    max: ContactCompany::MAX_LENGTH,
                },
            },
        );

        let message = violations.check(
            FormField::Message,
            ContactMessageText::try_new(self.message.clone()),
            |err| match err {
                ContactMessageTextError::LenCharMinViolated => FieldViolation::TooShort {
                    min: ContactMessageText::MIN_LENGTH,
                },
                ContactMessageTextError::LenCharMaxViolated => FieldViolation::TooLong {
                    max: ContactMessageText::MAX_LENGTH,
                },
            },
        );

        match (name, email, company, message) {
            (Some(name), Some(email), Some(company), Some(message)) => Ok(ContactInquiry {
                name,
                email,
                company,
                message,
            }),
            _ => Err(violations),
        }
    }
}

/// A rule violated by a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    Required,
    TooShort { min: usize },
    InvalidFormat,
    TooLong { max: usize },
}

impl FieldViolation {
    /// Suffix of the text key describing this violation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort { .. } => "too_short",
            Self::InvalidFormat => "invalid",
            Self::TooLong { .. } => "too_long",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViolations(BTreeMap<FormField, FieldViolation>);

impl FieldViolations {
    pub fn get(&self, field: FormField) -> Option<FieldViolation> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldViolation)> + '_ {
        self.0.iter().map(|(&field, &violation)| (field, violation))
    }

    fn check<T, E>(
        &mut self,
        field: FormField,
        result: Result<T, E>,
        violation: impl FnOnce(E) -> FieldViolation,
    ) -> Option<T> {
        result
            .map_err(|err| {
                self.0.insert(field, violation(err));
            })
            .ok()
    }
}

impl FromIterator<(FormField, FieldViolation)> for FieldViolations {
    fn from_iter<I: IntoIterator<Item = (FormField, FieldViolation)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Messages to show beneath the fields that currently fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        self.0.iter().map(|(&field, msg)| (field, msg.as_str()))
    }
}

impl FromIterator<(FormField, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (FormField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// The form is editable.
    #[default]
    Idle,
    /// The inquiry has been handed to the transport and the form is locked.
    Submitting,
    /// The inquiry was delivered. There is no way back to editing.
    Submitted,
}

impl SubmissionState {
    pub fn is_locked(self) -> bool {
        self != Self::Idle
    }
}

/// A validated contact inquiry with all values trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: ContactName,
    pub email: ContactEmail,
    pub company: Option<ContactCompany>,
    pub message: ContactMessageText,
}

nutype_string!(ContactName(validate(
    not_empty,
    len_char_max = ContactName::MAX_LENGTH
)));
impl ContactName {
    pub const MAX_LENGTH: usize = 100;
}

nutype_string!(ContactEmail(validate(
    not_empty,
    regex = CONTACT_EMAIL_REGEX,
    len_char_max = ContactEmail::MAX_LENGTH
)));
impl ContactEmail {
    pub const MAX_LENGTH: usize = 255;
}

nutype_string!(ContactCompany(validate(
    len_char_max = ContactCompany::MAX_LENGTH
)));
impl ContactCompany {
    pub const MAX_LENGTH: usize = 100;
}

nutype_string!(ContactMessageText(validate(
    len_char_min = ContactMessageText::MIN_LENGTH,
    len_char_max = ContactMessageText::MAX_LENGTH
)));
impl ContactMessageText {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 2000;
}

/// A transient acknowledgment shown after the form has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}
