//! Modal input popup rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rectangle of `width` x `height` centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Render the input popup over whatever is already drawn
pub fn render_input_popup(frame: &mut Frame, prompt: &str, buffer: &str) {
    let area = centered_rect(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(DEFAULT_THEME.popup_bg));

    let lines = vec![
        Line::from(Span::styled(
            if prompt.is_empty() { "Enter input:" } else { prompt },
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(buffer, Style::default().fg(DEFAULT_THEME.string)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Enter submit · Esc cancel",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 7, area);
        assert_eq!((rect.width, rect.height), (60, 7));
        assert_eq!((rect.x, rect.y), (20, 16));

        let small = Rect::new(0, 0, 30, 5);
        let rect = centered_rect(60, 7, small);
        assert_eq!((rect.width, rect.height), (30, 5));
    }
}
