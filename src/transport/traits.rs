//! Trait abstraction for inquiry delivery to enable mocking in tests

use crate::error::TransportError;
use crate::state::Inquiry;
use async_trait::async_trait;

/// Delivers a validated inquiry; resolves to success or failure
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send the inquiry
    async fn send(&self, inquiry: &Inquiry) -> Result<(), TransportError>;
}
