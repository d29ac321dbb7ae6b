//! Declarative snapshot observed by the presentation layer

use super::forms::{FieldName, FieldStatus};
use super::submission::{Notice, SubmissionState};

/// How a single field should be presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: FieldName,
    pub value: String,
    pub status: FieldStatus,
    pub is_active: bool,
}

/// Everything the presentation needs to render the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub fields: Vec<FieldView>,
    /// Characters in the message field
    pub char_count: usize,
    pub char_limit: usize,
    /// The latest message edit was cut at `char_limit`
    pub message_truncated: bool,
    pub submission: SubmissionState,
    pub submit_enabled: bool,
    pub submit_focused: bool,
    pub notice: Option<Notice>,
    /// The form should be brought into view
    pub scroll_requested: bool,
}

impl ViewState {
    pub fn field(&self, name: FieldName) -> &FieldView {
        &self.fields[name.index()]
    }

    pub fn is_loading(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Counter text such as `42 / 1000`
    pub fn char_count_label(&self) -> String {
        format!("{} / {}", self.char_count, self.char_limit)
    }
}
