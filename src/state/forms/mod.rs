//! Form domain layer
//!
//! Type-safe contact form handling: field definitions, the draft, the
//! validation rules and phone formatting.

mod draft;
mod field;
mod form_state;
mod phone;
mod validation;

pub use draft::{Inquiry, PrefillData};
pub use field::{next_service, prev_service, service_label, FieldName, FieldStatus};
pub use form_state::{ContactForm, Form};
pub use phone::format_phone;
pub use validation::{validate, ValidationResult};

#[cfg(test)]
pub use draft::FormDraft;
#[cfg(test)]
pub use form_state::SUBMIT_BUTTON_INDEX;
