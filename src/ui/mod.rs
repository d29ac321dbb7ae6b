//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::ContactApp;
use crate::store::DraftStore;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: DraftStore>(frame: &mut Frame, app: &ContactApp<S>) {
    let view = app.controller.view_state();
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_contact_form(frame, main_area, &view);

    if let Some(notice) = &view.notice {
        components::render_notice(frame, main_area, notice);
    }

    layout::draw_status_bar(frame, status_area, app, &view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormSettings;
    use crate::controller::FormController;
    use crate::state::FieldName;
    use crate::store::MemoryDraftStore;
    use crate::transport::SimulatedTransport;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &ContactApp<MemoryDraftStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> ContactApp<MemoryDraftStore> {
        let controller = FormController::new(
            MemoryDraftStore::new(),
            Arc::new(SimulatedTransport::default()),
            FormSettings::default(),
        );
        ContactApp::new(controller)
    }

    #[test]
    fn test_renders_form_fields_and_counter() {
        let mut app = app();
        app.controller.update_field(FieldName::Company, "Acme Ltd");
        let screen = render(&app);

        assert!(screen.contains("Get in Touch"));
        assert!(screen.contains("Acme Ltd"));
        assert!(screen.contains("Select a service"));
        assert!(screen.contains("0 / 1000"));
        assert!(screen.contains("Send Message"));
    }

    #[test]
    fn test_renders_validation_notice() {
        let mut app = app();
        app.controller.begin_submit();
        let screen = render(&app);

        assert!(screen.contains("Error"));
        assert!(screen.contains("Name is required."));
    }
}
