//! Status bar rendering with keybindings and state indicators

use crate::language::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data shown in the status bar
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub language: Language,
    pub step_mode: bool,
    /// `(played, total)` when a step session exists
    pub progress: Option<(usize, usize)>,
    pub is_playing: bool,
    pub is_error: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData<'_>) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mode_text = match (data.step_mode, data.progress) {
        (true, Some((played, total))) => format!(" STEP {}/{} ", played, total),
        (true, None) => " STEP ".to_string(),
        (false, _) => " RUN ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            mode_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.step_mode {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.language.display_name()),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.type_name),
        ),
        Span::styled(
            "|",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" r ", key_style),
        Span::styled(" run ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" m ", key_style),
        Span::styled(" step mode ", desc_style),
        Span::styled("│", sep_style),
    ];

    if data.step_mode {
        right_spans.extend([
            Span::styled(" → ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ↵ ", key_style),
            Span::styled(" all ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ⌫ ", key_style),
            Span::styled(" reset ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
        ]);
    }

    right_spans.extend([
        Span::styled(" l ", key_style),
        Span::styled(" lang ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    // Show status indicators based on position and state
    if let (true, Some((played, total))) = (data.step_mode, data.progress) {
        let badge = if data.is_playing {
            Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
        } else if played == total {
            Some((" END ", DEFAULT_THEME.error))
        } else if played == 0 {
            Some((" START ", DEFAULT_THEME.success))
        } else {
            None
        };
        if let Some((text, color)) = badge {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(
                text,
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
