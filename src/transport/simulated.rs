//! Fixed-delay stand-in for a real delivery endpoint

use super::traits::SubmissionTransport;
use crate::error::TransportError;
use crate::state::Inquiry;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round trip
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Transport that waits a fixed delay and then reports an outcome
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    fail: bool,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every send fail after the delay
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn send(&self, inquiry: &Inquiry) -> Result<(), TransportError> {
        match serde_json::to_string(inquiry) {
            Ok(payload) => tracing::debug!(id = %inquiry.id, %payload, "sending inquiry"),
            Err(e) => tracing::warn!(id = %inquiry.id, "could not encode inquiry: {e}"),
        }

        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(TransportError::SubmissionFailed(
                "simulated delivery failure".to_string(),
            ));
        }
        tracing::info!(id = %inquiry.id, "inquiry delivered");
        Ok(())
    }
}
