//! Field rendering utilities for forms

use crate::state::{service_label, FieldName, FieldStatus, FieldView};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Border colour for a field given focus and highlight status
fn border_color(status: FieldStatus, is_active: bool) -> Color {
    match status {
        FieldStatus::Invalid => Color::Red,
        FieldStatus::Valid => Color::Green,
        FieldStatus::Neutral if is_active => Color::Cyan,
        FieldStatus::Neutral => Color::DarkGray,
    }
}

/// Field title, marking required fields
fn field_title(name: FieldName) -> String {
    if name.is_required() {
        format!(" {} * ", name.label())
    } else {
        format!(" {} ", name.label())
    }
}

/// Draw a form field from its view state
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_str = match field.name {
        FieldName::Service => format!("‹ {} ›", service_label(&field.value)),
        _ if field.value.is_empty() && !field.is_active => "(empty)".to_string(),
        _ => field.value.clone(),
    };

    let cursor = if field.is_active && field.name != FieldName::Service {
        "▌"
    } else {
        ""
    };

    let content = if field.name.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(field_title(field.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field.status, field.is_active)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
