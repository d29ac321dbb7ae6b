//! Application state and key handling

use crate::controller::FormController;
use crate::error::TransportError;
use crate::state::{next_service, prev_service, FieldName, Notice};
use crate::store::DraftStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Main application struct
pub struct ContactApp<S: DraftStore> {
    /// Contact form controller
    pub controller: FormController<S>,
    /// Delivery currently in flight
    pending: Option<JoinHandle<Result<(), TransportError>>>,
    /// Notice being timed and when it must disappear
    notice_timer: Option<(Notice, Instant)>,
    /// Transient one-line feedback in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl<S: DraftStore> ContactApp<S> {
    /// Create a new app around a controller, restoring any saved draft
    pub fn new(mut controller: FormController<S>) -> Self {
        controller.hydrate();
        Self {
            controller,
            pending: None,
            notice_timer: None,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Clear any status message on key press
        self.status_message = None;

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.start_submit(),
            KeyCode::Char('g') if ctrl => self.controller.scroll_to_form(),
            KeyCode::Tab => self.controller.focus_next(),
            KeyCode::BackTab => self.controller.focus_prev(),
            _ => match self.controller.model().form.active_field_name() {
                None => self.handle_button_key(key),
                Some(FieldName::Service) => self.handle_service_key(key),
                Some(field) => self.handle_text_key(field, key),
            },
        }
        Ok(())
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.start_submit();
        }
    }

    fn handle_service_key(&mut self, key: KeyEvent) {
        let current = self.controller.value(FieldName::Service);
        let next = match key.code {
            KeyCode::Left | KeyCode::Up => prev_service(current),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => next_service(current),
            KeyCode::Enter => {
                self.controller.focus_next();
                return;
            }
            _ => return,
        };
        self.controller.update_field(FieldName::Service, next);
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let mut value = self.controller.value(field).to_string();
        match key.code {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                if value.pop().is_none() {
                    return;
                }
            }
            KeyCode::Enter if field.is_multiline() => value.push('\n'),
            KeyCode::Enter => {
                self.controller.focus_next();
                return;
            }
            _ => return,
        }
        self.controller.update_field(field, value);
    }

    /// Validate and, when valid, deliver the inquiry in the background
    fn start_submit(&mut self) {
        if self.pending.is_some() {
            tracing::debug!("submission already in flight");
            return;
        }
        if let Some(inquiry) = self.controller.begin_submit() {
            let transport = self.controller.transport();
            tracing::debug!(id = %inquiry.id, "submitting inquiry");
            self.pending = Some(tokio::spawn(
                async move { transport.send(&inquiry).await },
            ));
        }
    }

    /// Advance background work: resolve a finished delivery, expire notices
    /// and answer scroll requests.
    pub async fn tick(&mut self) {
        if self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = self.pending.take() {
                let result = handle
                    .await
                    .unwrap_or_else(|e| Err(TransportError::SubmissionFailed(e.to_string())));
                self.controller.complete_submit(result);
            }
        }

        self.update_notice_timer(Instant::now());

        if self.controller.model().scroll_requested {
            self.controller.acknowledge_scroll();
            self.status_message = Some("Jumped to the contact form".to_string());
        }
    }

    fn update_notice_timer(&mut self, now: Instant) {
        let current = self.controller.model().notice.clone();
        match (current, self.notice_timer.take()) {
            (None, _) => {}
            (Some(notice), Some((timed, deadline))) if notice == timed => {
                if now >= deadline {
                    self.controller.dismiss_notice();
                } else {
                    self.notice_timer = Some((timed, deadline));
                }
            }
            (Some(notice), _) => {
                let deadline = now + notice.dismiss_after;
                self.notice_timer = Some((notice, deadline));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormSettings;
    use crate::state::{SubmissionState, SUBMIT_BUTTON_INDEX};
    use crate::store::MemoryDraftStore;
    use crate::transport::SimulatedTransport;
    use std::sync::Arc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(store: MemoryDraftStore, settings: FormSettings) -> ContactApp<MemoryDraftStore> {
        let transport = Arc::new(SimulatedTransport::new(Duration::ZERO));
        ContactApp::new(FormController::new(store, transport, settings))
    }

    fn app() -> ContactApp<MemoryDraftStore> {
        app_with(MemoryDraftStore::new(), FormSettings::default())
    }

    async fn type_text(app: &mut ContactApp<MemoryDraftStore>, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn settle(app: &mut ContactApp<MemoryDraftStore>) {
        for _ in 0..100 {
            app.tick().await;
            if !app.is_submitting() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission did not resolve");
    }

    #[tokio::test]
    async fn test_new_hydrates_saved_draft() {
        let app = app_with(
            MemoryDraftStore::with_entries([("contact_name", "Ada")]),
            FormSettings::default(),
        );
        assert_eq!(app.controller.value(FieldName::Name), "Ada");
    }

    #[tokio::test]
    async fn test_typing_edits_focused_field() {
        let mut app = app();
        type_text(&mut app, "Ada").await;
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.controller.value(FieldName::Name), "Ad");
    }

    #[tokio::test]
    async fn test_enter_moves_focus_on_single_line_fields() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(
            app.controller.model().form.active_field_name(),
            Some(FieldName::Email)
        );
    }

    #[tokio::test]
    async fn test_enter_adds_newline_in_message() {
        let mut app = app();
        for _ in 0..FieldName::Message.index() {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        type_text(&mut app, "hi").await;
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.controller.value(FieldName::Message), "hi\n");
    }

    #[tokio::test]
    async fn test_service_cycles_with_arrows() {
        let mut app = app();
        for _ in 0..FieldName::Service.index() {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.controller.value(FieldName::Service), "web-development");
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(app.controller.value(FieldName::Service), "other");
    }

    #[tokio::test]
    async fn test_backtab_traps_focus_on_submit_button() {
        let mut app = app();
        app.handle_key(key(KeyCode::BackTab)).await.unwrap();
        assert_eq!(
            app.controller.model().form.active_field_index,
            SUBMIT_BUTTON_INDEX
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_shows_notice_without_sending() {
        let mut app = app();
        app.handle_key(ctrl('s')).await.unwrap();
        assert!(!app.is_submitting());
        assert_eq!(
            app.controller.model().submission,
            SubmissionState::Failed
        );
        assert!(app.controller.model().notice.is_some());
    }

    #[tokio::test]
    async fn test_valid_submit_resolves_in_background() {
        let mut app = app();
        app.controller.update_field(FieldName::Name, "Al");
        app.controller.update_field(FieldName::Email, "a@b.com");
        app.controller.update_field(FieldName::Service, "design");
        app.controller
            .update_field(FieldName::Message, "x".repeat(25));

        app.handle_key(ctrl('s')).await.unwrap();
        assert!(app.is_submitting());
        assert!(!app.controller.view_state().submit_enabled);

        settle(&mut app).await;
        assert_eq!(
            app.controller.model().submission,
            SubmissionState::Succeeded
        );
        assert!(app.controller.model().form.draft.is_empty());
    }

    #[tokio::test]
    async fn test_notice_is_dismissed_after_delay() {
        let settings = FormSettings {
            notice_dismiss_after: Duration::from_millis(10),
            ..FormSettings::default()
        };
        let mut app = app_with(MemoryDraftStore::new(), settings);
        app.handle_key(ctrl('s')).await.unwrap();

        app.tick().await;
        assert!(app.controller.model().notice.is_some());

        tokio::time::sleep(Duration::from_millis(20)).await;
        app.tick().await;
        assert!(app.controller.model().notice.is_none());
    }

    #[tokio::test]
    async fn test_scroll_request_is_acknowledged() {
        let mut app = app();
        app.handle_key(ctrl('g')).await.unwrap();
        app.tick().await;
        assert!(!app.controller.model().scroll_requested);
        assert!(app.status_message.is_some());
    }

    #[tokio::test]
    async fn test_status_message_clears_on_next_key() {
        let mut app = app();
        app.handle_key(ctrl('g')).await.unwrap();
        app.tick().await;
        assert!(app.status_message.is_some());

        app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(ctrl('c')).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_esc_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());
    }
}
