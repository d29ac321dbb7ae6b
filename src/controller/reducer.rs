//! Pure state transitions of the contact form
//!
//! `update` maps the current model and an event to the next model plus the
//! side effects the controller has to carry out. Nothing in here touches
//! the store, the transport or the clock.

use crate::config::FormSettings;
use crate::error::TransportError;
use crate::state::{
    format_phone, validate, FieldName, Form, FormModel, Inquiry, Notice, PrefillData,
    SubmissionState, RETRY_NOTICE, SUCCESS_NOTICE,
};

/// Something that happened to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field
    FieldChanged { field: FieldName, value: String },
    /// A persisted value was loaded back into a field
    Restored { field: FieldName, value: String },
    FocusNext,
    FocusPrev,
    SubmitRequested,
    SubmissionResolved(Result<(), TransportError>),
    Prefill(PrefillData),
    ScrollToForm,
    ScrollHandled,
    NoticeExpired,
}

/// Work the controller performs after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistField { key: String, value: String },
    ClearDraft,
    Send(Inquiry),
    TrackSubmission { service: String },
    LogFailure(String),
}

/// Apply `event` to `model`
pub fn update(
    mut model: FormModel,
    event: FormEvent,
    settings: &FormSettings,
) -> (FormModel, Vec<Effect>) {
    let mut effects = Vec::new();

    match event {
        FormEvent::FieldChanged { field, value } => {
            let value = apply_value(&mut model, field, value, settings);
            model.form.mark_input(field);
            effects.push(Effect::PersistField {
                key: field.storage_key(),
                value,
            });
        }
        FormEvent::Restored { field, value } => {
            let value = apply_value(&mut model, field, value, settings);
            // A clamped message is written back so the store matches the form
            if field == FieldName::Message && model.form.message_truncated {
                effects.push(Effect::PersistField {
                    key: field.storage_key(),
                    value,
                });
            }
        }
        FormEvent::FocusNext => {
            blur_active(&mut model);
            model.form.next_field();
        }
        FormEvent::FocusPrev => {
            blur_active(&mut model);
            model.form.prev_field();
        }
        FormEvent::SubmitRequested => {
            if !model.submission.accepts_submit() {
                tracing::debug!("submit ignored while a submission is in flight");
                return (model, effects);
            }

            let result = validate(&model.form.draft);
            if result.is_valid() {
                model.submission = SubmissionState::Submitting;
                model.notice = None;
                let inquiry = Inquiry::from_draft(&model.form.draft);
                model.in_flight_service = Some(inquiry.service.clone());
                effects.push(Effect::Send(inquiry));
            } else {
                tracing::debug!(errors = result.errors.len(), "form failed validation");
                model.submission = SubmissionState::Failed;
                model.notice = Some(Notice::error(result.joined(), settings.notice_dismiss_after));
            }
        }
        FormEvent::SubmissionResolved(result) => {
            if model.submission != SubmissionState::Submitting {
                tracing::debug!("ignoring submission result with nothing in flight");
                return (model, effects);
            }

            let service = model.in_flight_service.take().unwrap_or_default();
            match result {
                Ok(()) => {
                    model.submission = SubmissionState::Succeeded;
                    model.form.draft.clear();
                    model.form.reset_statuses();
                    model.form.message_truncated = false;
                    model.notice = Some(Notice::success(
                        SUCCESS_NOTICE,
                        settings.notice_dismiss_after,
                    ));
                    effects.push(Effect::ClearDraft);
                    effects.push(Effect::TrackSubmission { service });
                }
                Err(e) => {
                    model.submission = SubmissionState::Failed;
                    model.notice = Some(Notice::error(RETRY_NOTICE, settings.notice_dismiss_after));
                    effects.push(Effect::LogFailure(e.to_string()));
                }
            }
        }
        FormEvent::Prefill(data) => {
            for (field, value) in data.values() {
                let value = apply_value(&mut model, field, value.to_string(), settings);
                model.form.mark_input(field);
                effects.push(Effect::PersistField {
                    key: field.storage_key(),
                    value,
                });
            }
        }
        FormEvent::ScrollToForm => {
            model.scroll_requested = true;
            model.form.set_active_field(FieldName::Name.index());
        }
        FormEvent::ScrollHandled => model.scroll_requested = false,
        FormEvent::NoticeExpired => model.notice = None,
    }

    (model, effects)
}

/// Normalize and store a field value, returning what was stored
fn apply_value(
    model: &mut FormModel,
    field: FieldName,
    value: String,
    settings: &FormSettings,
) -> String {
    let value = match field {
        FieldName::Message => {
            let (clamped, truncated) = clamp_chars(value, settings.message_limit);
            model.form.message_truncated = truncated;
            clamped
        }
        FieldName::Phone => format_phone(&value),
        _ => value,
    };
    model.form.draft.set(field, value.clone());
    value
}

fn blur_active(model: &mut FormModel) {
    if let Some(field) = model.form.active_field_name() {
        model.form.mark_blur(field);
    }
}

/// Keep at most `limit` characters, reporting whether anything was cut
fn clamp_chars(value: String, limit: usize) -> (String, bool) {
    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            let mut value = value;
            value.truncate(byte_idx);
            (value, true)
        }
        None => (value, false),
    }
}
