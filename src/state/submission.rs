//! Submission lifecycle and user notices

use std::time::Duration;

/// Notice shown after a successful submission
pub const SUCCESS_NOTICE: &str =
    "Message sent successfully! I'll get back to you within 24 hours.";

/// Notice shown when the transport fails
pub const RETRY_NOTICE: &str =
    "Oops! Something went wrong. Please try again or email me directly.";

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Only an in-flight submission blocks another attempt
    pub fn accepts_submit(self) -> bool {
        !matches!(self, SubmissionState::Submitting)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Sending...",
            Self::Succeeded => "Sent",
            Self::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A consolidated, auto-dismissing message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// How long the presentation keeps the notice visible
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn success(text: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            dismiss_after,
        }
    }

    pub fn error(text: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            dismiss_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_only_submitting_rejects_submit() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Succeeded.accepts_submit());
        assert!(SubmissionState::Failed.accepts_submit());
        assert!(!SubmissionState::Submitting.accepts_submit());
    }

    #[test]
    fn test_notice_constructors() {
        let delay = Duration::from_secs(5);
        let ok = Notice::success(SUCCESS_NOTICE, delay);
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.dismiss_after, delay);

        let err = Notice::error(RETRY_NOTICE, delay);
        assert_eq!(err.kind, NoticeKind::Error);
        assert_eq!(err.text, RETRY_NOTICE);
    }
}
