//! Inquiry submission transport

mod simulated;
mod traits;

pub use simulated::SimulatedTransport;
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;
