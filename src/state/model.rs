//! Controller-owned form model

use super::forms::{ContactForm, FieldName};
use super::submission::{Notice, SubmissionState};
use super::view_state::{FieldView, ViewState};

/// Complete state the reducer transitions between
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    pub form: ContactForm,
    pub submission: SubmissionState,
    pub notice: Option<Notice>,
    pub scroll_requested: bool,
    /// Service of the inquiry currently being delivered
    pub in_flight_service: Option<String>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.form.draft.get(field)
    }

    /// Snapshot for the presentation layer
    pub fn view_state(&self, char_limit: usize) -> ViewState {
        let fields = FieldName::ALL
            .into_iter()
            .map(|name| FieldView {
                name,
                value: self.value(name).to_string(),
                status: self.form.status(name),
                is_active: self.form.active_field_name() == Some(name),
            })
            .collect();

        ViewState {
            fields,
            char_count: self.form.draft.message_len(),
            char_limit,
            message_truncated: self.form.message_truncated,
            submission: self.submission,
            submit_enabled: self.submission.accepts_submit(),
            submit_focused: self.form.is_submit_focused(),
            notice: self.notice.clone(),
            scroll_requested: self.scroll_requested,
        }
    }
}
