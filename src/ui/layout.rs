//! Layout components (header, status bar)

use crate::app::ContactApp;
use crate::state::{SubmissionState, ViewState};
use crate::store::DraftStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Get in Touch",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Tell me about your project and I'll reply within 24 hours",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar<S: DraftStore>(
    frame: &mut Frame,
    area: Rect,
    app: &ContactApp<S>,
    view: &ViewState,
) {
    let mut spans = vec![];

    let (marker, color) = match view.submission {
        SubmissionState::Idle => (" ○ ", Color::Gray),
        SubmissionState::Submitting => (" ◌ ", Color::Yellow),
        SubmissionState::Succeeded => (" ● ", Color::Green),
        SubmissionState::Failed => (" ● ", Color::Red),
    };
    spans.push(Span::styled(marker, Style::default().fg(color)));
    spans.push(Span::styled(
        view.submission.label(),
        Style::default().fg(Color::Gray),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("Tab:next  {}:send  ^G:form  Esc:quit", crate::platform::SUBMIT_SHORTCUT),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
