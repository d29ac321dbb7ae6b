//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of contact form fields
pub const FIELD_COUNT: usize = 6;

/// Prefix shared by every persisted draft key
pub const DRAFT_KEY_PREFIX: &str = "contact_";

/// Selectable services as (value, label). The first entry is the unselected sentinel.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a service"),
    ("web-development", "Web Development"),
    ("design", "Design"),
    ("consulting", "Consulting"),
    ("maintenance", "Maintenance & Support"),
    ("other", "Other"),
];

/// The fields of the contact form, in display and validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; FIELD_COUNT] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Company,
        FieldName::Service,
        FieldName::Message,
    ];

    /// Position of the field in form order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field at the given form position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    /// Key under which the draft value is persisted
    pub fn storage_key(self) -> String {
        format!("{DRAFT_KEY_PREFIX}{}", self.as_str())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Company => "Company",
            Self::Service => "Service",
            Self::Message => "Message",
        }
    }

    /// Whether submission requires a value for this field
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Service | Self::Message)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }

    /// Message shown when a required field is left empty
    pub fn required_message(self) -> String {
        match self {
            Self::Service => "Please select a service".to_string(),
            other => format!("{} is required", other.label()),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlight state of a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// Status after the user typed `value`
    pub fn after_input(self, value: &str) -> Self {
        if value.trim().is_empty() {
            self
        } else {
            FieldStatus::Valid
        }
    }

    /// Status after focus left a field holding `value`
    pub fn after_blur(value: &str) -> Self {
        if value.trim().is_empty() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Neutral
        }
    }
}

/// Label for a service value, falling back to the raw value for unknown services
pub fn service_label(value: &str) -> &str {
    SERVICE_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// The service option after `current`, wrapping around
pub fn next_service(current: &str) -> &'static str {
    let pos = SERVICE_OPTIONS.iter().position(|(v, _)| *v == current);
    let next = pos.map_or(0, |p| (p + 1) % SERVICE_OPTIONS.len());
    SERVICE_OPTIONS[next].0
}

/// The service option before `current`, wrapping around
pub fn prev_service(current: &str) -> &'static str {
    let len = SERVICE_OPTIONS.len();
    let prev = match SERVICE_OPTIONS.iter().position(|(v, _)| *v == current) {
        Some(0) | None => len - 1,
        Some(p) => p - 1,
    };
    SERVICE_OPTIONS[prev].0
}
