//! Contact form state and focus handling

use super::draft::FormDraft;
use super::field::{FieldName, FieldStatus, FIELD_COUNT};

/// Focus slot of the submit button, after the last field
pub const SUBMIT_BUTTON_INDEX: usize = FIELD_COUNT;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Live state of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: FormDraft,
    pub statuses: [FieldStatus; FIELD_COUNT],
    /// Focused slot: a field index, or `SUBMIT_BUTTON_INDEX`
    pub active_field_index: usize,
    /// Whether the latest message change was cut at the limit
    pub message_truncated: bool,
}

impl ContactForm {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused field, or `None` when the submit button has focus
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    pub fn status(&self, field: FieldName) -> FieldStatus {
        self.statuses[field.index()]
    }

    /// Record a value change for highlight purposes
    pub fn mark_input(&mut self, field: FieldName) {
        if field.is_required() {
            let slot = &mut self.statuses[field.index()];
            *slot = slot.after_input(self.draft.get(field));
        }
    }

    /// Record that focus left `field`
    pub fn mark_blur(&mut self, field: FieldName) {
        if field.is_required() {
            self.statuses[field.index()] = FieldStatus::after_blur(self.draft.get(field));
        }
    }

    pub fn reset_statuses(&mut self) {
        self.statuses = [FieldStatus::Neutral; FIELD_COUNT];
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT + 1 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn test_new_focuses_first_field() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_name(), Some(FieldName::Name));
            assert!(!form.is_submit_focused());
        }

        #[test]
        fn test_next_from_button_wraps_to_first_field() {
            let mut form = ContactForm::new();
            form.set_active_field(SUBMIT_BUTTON_INDEX);
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_from_first_field_wraps_to_button() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert!(form.is_submit_focused());
            assert!(form.active_field_name().is_none());
        }

        #[test]
        fn test_full_cycle_returns_to_start() {
            let mut form = ContactForm::new();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_BUTTON_INDEX);
        }
    }

    mod highlights {
        use super::*;

        #[test]
        fn test_input_on_required_field_marks_valid() {
            let mut form = ContactForm::new();
            form.draft.set(FieldName::Email, "a@b.com");
            form.mark_input(FieldName::Email);
            assert_eq!(form.status(FieldName::Email), FieldStatus::Valid);
        }

        #[test]
        fn test_optional_fields_stay_neutral() {
            let mut form = ContactForm::new();
            form.mark_blur(FieldName::Company);
            assert_eq!(form.status(FieldName::Company), FieldStatus::Neutral);
        }

        #[test]
        fn test_blur_on_empty_required_field_marks_invalid() {
            let mut form = ContactForm::new();
            form.mark_blur(FieldName::Name);
            assert_eq!(form.status(FieldName::Name), FieldStatus::Invalid);
            form.reset_statuses();
            assert_eq!(form.status(FieldName::Name), FieldStatus::Neutral);
        }
    }
}
