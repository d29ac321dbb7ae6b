//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default time a notice stays visible
pub const DEFAULT_NOTICE_DISMISS_MS: u64 = 5000;

/// Default simulated submission round trip
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Default maximum number of characters in the message field
pub const DEFAULT_MESSAGE_LIMIT: usize = 1000;

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Milliseconds before a notice is dismissed
    pub notice_dismiss_ms: Option<u64>,
    /// Milliseconds the simulated transport waits before resolving
    pub submit_delay_ms: Option<u64>,
    /// Maximum message length in characters
    pub message_limit: Option<usize>,
    /// Make the simulated transport fail every send
    pub simulate_failure: Option<bool>,
    /// Where the draft is persisted
    pub draft_path: Option<PathBuf>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "folio", "folio-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    /// Settings the form controller runs with
    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            message_limit: self.message_limit.unwrap_or(DEFAULT_MESSAGE_LIMIT),
            notice_dismiss_after: Duration::from_millis(
                self.notice_dismiss_ms.unwrap_or(DEFAULT_NOTICE_DISMISS_MS),
            ),
        }
    }
}

/// Limits and durations the form controller works with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    pub message_limit: usize,
    pub notice_dismiss_after: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        ContactConfig::default().form_settings()
    }
}
