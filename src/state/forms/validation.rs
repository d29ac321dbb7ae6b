//! Contact form validation rules

use super::draft::FormDraft;
use super::field::FieldName;
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed length of the name field
pub const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed length of the message field
pub const MESSAGE_MIN_LEN: usize = 20;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Outcome of validating a draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// User-facing messages in rule order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// All messages combined into a single notice
    pub fn joined(&self) -> String {
        self.messages().join(". ")
    }
}

/// Validate a draft, collecting every failing rule in field order
pub fn validate(draft: &FormDraft) -> ValidationResult {
    let errors = [
        check_name(draft.get(FieldName::Name)),
        check_email(draft.get(FieldName::Email)),
        check_service(draft.get(FieldName::Service)),
        check_message(draft.get(FieldName::Message)),
    ]
    .into_iter()
    .flatten()
    .collect();

    ValidationResult { errors }
}

fn check_min_len(field: FieldName, value: &str, min: usize) -> Option<ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(ValidationError::EmptyField(field))
    } else if trimmed.chars().count() < min {
        Some(ValidationError::TooShort { field, min })
    } else {
        None
    }
}

fn check_name(value: &str) -> Option<ValidationError> {
    check_min_len(FieldName::Name, value, NAME_MIN_LEN)
}

fn check_email(value: &str) -> Option<ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(ValidationError::EmptyField(FieldName::Email))
    } else if !is_valid_email(trimmed) {
        Some(ValidationError::InvalidFormat(FieldName::Email))
    } else {
        None
    }
}

fn check_service(value: &str) -> Option<ValidationError> {
    value
        .is_empty()
        .then_some(ValidationError::EmptyField(FieldName::Service))
}

fn check_message(value: &str) -> Option<ValidationError> {
    check_min_len(FieldName::Message, value, MESSAGE_MIN_LEN)
}

/// Whether `value` has the shape `local@domain.tld`, with no whitespace
/// and no second `@` anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
