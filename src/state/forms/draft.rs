//! In-progress contact form values

use super::field::{FieldName, FIELD_COUNT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Live values of every contact form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: [String; FIELD_COUNT],
}

impl FormDraft {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft from (field, value) pairs; unspecified fields stay empty
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (FieldName, &'a str)>) -> Self {
        let mut draft = Self::default();
        for (field, value) in pairs {
            draft.set(field, value);
        }
        draft
    }

    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Fields paired with their current values, in form order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Number of characters in the message field
    pub fn message_len(&self) -> usize {
        self.get(FieldName::Message).chars().count()
    }
}

/// Optional values used to bulk-fill the form, e.g. from a deep link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefillData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl PrefillData {
    /// Provided non-empty values in form order
    pub fn values(&self) -> Vec<(FieldName, &str)> {
        [
            (FieldName::Name, &self.name),
            (FieldName::Email, &self.email),
            (FieldName::Phone, &self.phone),
            (FieldName::Company, &self.company),
            (FieldName::Service, &self.service),
            (FieldName::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (field, v))
        })
        .collect()
    }
}

/// A validated inquiry handed to the submission transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl Inquiry {
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: draft.get(FieldName::Name).to_string(),
            email: draft.get(FieldName::Email).to_string(),
            phone: draft.get(FieldName::Phone).to_string(),
            company: draft.get(FieldName::Company).to_string(),
            service: draft.get(FieldName::Service).to_string(),
            message: draft.get(FieldName::Message).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = FormDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.get(FieldName::Email), "");
    }

    #[test]
    fn test_set_and_get_are_per_field() {
        let mut draft = FormDraft::new();
        draft.set(FieldName::Company, "Acme");
        assert_eq!(draft.get(FieldName::Company), "Acme");
        assert_eq!(draft.get(FieldName::Name), "");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut draft = FormDraft::from_pairs([(FieldName::Name, "Al"), (FieldName::Message, "hi")]);
        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_message_len_counts_chars() {
        let draft = FormDraft::from_pairs([(FieldName::Message, "héllo")]);
        assert_eq!(draft.message_len(), 5);
    }

    #[test]
    fn test_iter_follows_form_order() {
        let draft = FormDraft::from_pairs([(FieldName::Service, "design")]);
        let fields: Vec<FieldName> = draft.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, FieldName::ALL.to_vec());
    }

    #[test]
    fn test_prefill_skips_missing_and_empty_values() {
        let data: PrefillData =
            serde_json::from_str(r#"{"name": "Ada", "email": "", "service": "design"}"#).unwrap();
        assert_eq!(
            data.values(),
            vec![(FieldName::Name, "Ada"), (FieldName::Service, "design")]
        );
    }

    #[test]
    fn test_inquiry_copies_draft_values() {
        let draft = FormDraft::from_pairs([
            (FieldName::Name, "Al"),
            (FieldName::Email, "a@b.com"),
            (FieldName::Service, "design"),
        ]);
        let inquiry = Inquiry::from_draft(&draft);
        assert_eq!(inquiry.name, "Al");
        assert_eq!(inquiry.email, "a@b.com");
        assert_eq!(inquiry.service, "design");
        assert_eq!(inquiry.phone, "");
    }

    #[test]
    fn test_inquiry_serializes_to_json() {
        let inquiry = Inquiry::from_draft(&FormDraft::from_pairs([(FieldName::Name, "Al")]));
        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["name"], "Al");
        assert!(json["id"].is_string());
        assert!(json["submitted_at"].is_string());
    }
}
