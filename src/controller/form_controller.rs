//! Form controller: runs the reducer and carries out its effects

use super::reducer::{update, Effect, FormEvent};
use crate::config::FormSettings;
use crate::error::TransportError;
use crate::state::{
    validate, FieldName, FormModel, Inquiry, PrefillData, SubmissionState, ValidationResult,
    ViewState,
};
use crate::store::DraftStore;
use crate::transport::SubmissionTransport;
use std::sync::Arc;

/// Owns the contact form model, its draft store and the submission transport
pub struct FormController<S: DraftStore> {
    model: FormModel,
    store: S,
    transport: Arc<dyn SubmissionTransport>,
    settings: FormSettings,
}

impl<S: DraftStore> FormController<S> {
    pub fn new(store: S, transport: Arc<dyn SubmissionTransport>, settings: FormSettings) -> Self {
        Self {
            model: FormModel::new(),
            store,
            transport,
            settings,
        }
    }

    /// Apply an event and run its effects. Returns the inquiry to deliver when
    /// the event started a submission.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<Inquiry> {
        let model = std::mem::take(&mut self.model);
        let (model, effects) = update(model, event, &self.settings);
        self.model = model;

        let mut outgoing = None;
        for effect in effects {
            match effect {
                Effect::Send(inquiry) => outgoing = Some(inquiry),
                other => self.run_effect(other),
            }
        }
        outgoing
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistField { key, value } => {
                if let Err(e) = self.store.set(&key, &value) {
                    tracing::warn!(%key, "failed to persist draft field: {e}");
                }
            }
            Effect::ClearDraft => {
                for field in FieldName::ALL {
                    if let Err(e) = self.store.remove(&field.storage_key()) {
                        tracing::warn!(%field, "failed to clear draft field: {e}");
                    }
                }
            }
            Effect::TrackSubmission { service } => {
                tracing::info!(
                    target: "analytics",
                    event = "form_submission",
                    category = "Contact",
                    label = %service,
                    "contact form submitted"
                );
            }
            Effect::LogFailure(message) => {
                tracing::error!("Form submission error: {message}");
            }
            Effect::Send(_) => {}
        }
    }

    /// Load any persisted draft values into the form. Only a message that had
    /// to be clamped is written back.
    pub fn hydrate(&mut self) {
        let mut restored = 0;
        for field in FieldName::ALL {
            if let Some(value) = self.store.get(&field.storage_key()) {
                if !value.is_empty() {
                    self.dispatch(FormEvent::Restored { field, value });
                    restored += 1;
                }
            }
        }
        tracing::debug!(restored, "hydrated contact form draft");
    }

    /// Set a field from user input
    pub fn update_field(&mut self, field: FieldName, raw_value: impl Into<String>) {
        self.dispatch(FormEvent::FieldChanged {
            field,
            value: raw_value.into(),
        });
    }

    pub fn focus_next(&mut self) {
        self.dispatch(FormEvent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.dispatch(FormEvent::FocusPrev);
    }

    /// Validate the current draft
    #[allow(dead_code)]
    pub fn validate(&self) -> ValidationResult {
        validate(&self.model.form.draft)
    }

    /// Validate and, if the draft is valid, enter `Submitting` and hand back
    /// the inquiry the caller must deliver.
    pub fn begin_submit(&mut self) -> Option<Inquiry> {
        self.dispatch(FormEvent::SubmitRequested)
    }

    /// Record the outcome of a delivery started with `begin_submit`
    pub fn complete_submit(&mut self, result: Result<(), TransportError>) {
        self.dispatch(FormEvent::SubmissionResolved(result));
    }

    /// Validate, deliver and resolve in one go
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> SubmissionState {
        if let Some(inquiry) = self.begin_submit() {
            let transport = Arc::clone(&self.transport);
            let result = transport.send(&inquiry).await;
            self.complete_submit(result);
        }
        self.model.submission
    }

    /// Transport handle for delivering an inquiry off the UI flow
    pub fn transport(&self) -> Arc<dyn SubmissionTransport> {
        Arc::clone(&self.transport)
    }

    /// Bulk-set field values, e.g. from a deep link
    pub fn prefill_form(&mut self, data: PrefillData) {
        self.dispatch(FormEvent::Prefill(data));
    }

    /// Ask the presentation to bring the form into view
    pub fn scroll_to_form(&mut self) {
        self.dispatch(FormEvent::ScrollToForm);
    }

    pub fn acknowledge_scroll(&mut self) {
        self.dispatch(FormEvent::ScrollHandled);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(FormEvent::NoticeExpired);
    }

    pub fn view_state(&self) -> ViewState {
        self.model.view_state(self.settings.message_limit)
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.model.value(field)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
