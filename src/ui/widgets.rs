//! Reusable UI widgets
//!
//! The small pieces the dashboard composes:
//! - Centered popup (used by the welcome overlay)
//! - Flash message line
//! - Status bar

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup sized to its content
pub fn render_popup(frame: &mut Frame, title: &str, content: Vec<Line>, theme: &Theme, area: Rect) {
    // Wide enough for the longest line plus padding, but never wider
    // than the screen allows
    let content_width = content
        .iter()
        .map(|line| line.width() as u16)
        .max()
        .unwrap_or(0);
    let width = (content_width + 8)
        .max(title.chars().count() as u16 + 6)
        .min(area.width.saturating_sub(4));
    let height = (content.len() as u16 + 4).min(area.height.saturating_sub(2));

    let popup_area = centered_rect(width, height, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.text());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let body = Paragraph::new(content)
        .style(theme.text())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    let body_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(body, body_area);
}

/// Render a flash message on the bottom line
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let (style, prefix) = if is_error {
        (theme.error(), "✗ ")
    } else {
        (theme.success(), "✓ ")
    };

    let line_area = bottom_line(area);
    frame.render_widget(Clear, line_area);

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));
    frame.render_widget(flash, line_area);
}

/// Render the status bar: hints on the left, state on the right
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let line_area = bottom_line(area);
    frame.render_widget(Clear, line_area);

    let right_len = right_content.chars().count() as u16;
    let halves = Layout::horizontal([Constraint::Min(0), Constraint::Length(right_len + 1)])
        .split(line_area);

    frame.render_widget(
        Paragraph::new(left_content).style(theme.text_dim()),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(right_content).style(theme.text_dim()),
        halves[1],
    );
}

/// The last row of an area
fn bottom_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    }
}

/// Rect of the given size centered in an area, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_rect(56, 20, area);

        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_bottom_line_is_one_row() {
        let area = Rect::new(2, 3, 40, 10);
        let line = bottom_line(area);
        assert_eq!(line.y, 12);
        assert_eq!(line.height, 1);
        assert_eq!(line.width, 40);
    }
}
