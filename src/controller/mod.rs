//! Contact form controller
//!
//! - `reducer`: pure `(model, event) -> (model, effects)` transitions
//! - `form_controller`: owns the model and executes effects against the
//!   draft store and the submission transport

mod form_controller;
mod reducer;

pub use form_controller::FormController;
