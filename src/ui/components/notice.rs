//! Auto-dismissing notice overlay

use crate::state::{Notice, NoticeKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of the notice box
const MAX_WIDTH: u16 = 64;

/// Render a notice near the bottom of `area`, above the status bar
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let (title, color) = match notice.kind {
        NoticeKind::Success => ("Sent", Color::Green),
        NoticeKind::Error => ("Error", Color::Red),
    };

    let padding = 4u16; // 2 chars padding on each side
    let max_width = MAX_WIDTH.min(area.width);
    let wrapped_lines = wrap_text(&notice.text, max_width.saturating_sub(padding).max(1) as usize);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len()) as u16;
    let width = (content_width + padding + 2).min(max_width); // +2 for borders
    let height = (wrapped_lines.len() as u16 + 3).min(area.height); // title + borders

    let notice_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height + 2),
        width,
        height,
    };

    frame.render_widget(Clear, notice_area);

    let mut content = vec![Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(paragraph, notice_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Name is required", 40), vec!["Name is required"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Name is required. Email is required", 18);
        assert_eq!(lines, vec!["Name is required.", "Email is required"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    }
}
