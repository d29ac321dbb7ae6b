//! Form state module

mod forms;
mod model;
mod submission;
mod view_state;

pub use forms::*;
pub use model::*;
pub use submission::*;
pub use view_state::*;
