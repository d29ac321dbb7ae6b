//! Contact form rendering

use super::field_renderer::draw_field;
use crate::state::{FieldName, ViewState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, view: &ViewState) {
    let block = Block::default()
        .title(" Send a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name | Email
            Constraint::Length(3),             // Phone | Company
            Constraint::Length(3),             // Service
            Constraint::Min(5),                // Message
            Constraint::Length(1),             // Character count
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    for (row, pair) in [
        (chunks[0], [FieldName::Name, FieldName::Email]),
        (chunks[1], [FieldName::Phone, FieldName::Company]),
    ] {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        draw_field(frame, columns[0], view.field(pair[0]));
        draw_field(frame, columns[1], view.field(pair[1]));
    }

    draw_field(frame, chunks[2], view.field(FieldName::Service));
    draw_field(frame, chunks[3], view.field(FieldName::Message));

    let count_style = if view.message_truncated {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let counter = Paragraph::new(Span::styled(view.char_count_label(), count_style))
        .alignment(Alignment::Right);
    frame.render_widget(counter, chunks[4]);

    let button_area = Rect {
        width: chunks[5].width.min(24),
        ..chunks[5]
    };
    let label = if view.is_loading() {
        "Sending..."
    } else {
        "Send Message"
    };
    render_button(
        frame,
        button_area,
        label,
        view.submit_focused,
        view.submit_enabled,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": service  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": send  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}
