//! Memory pane rendering
//!
//! Shows the simulated variable snapshot of the current step as a two-column
//! name/value table, in the order the variables were first declared.

use crate::snapshot::MemorySnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the memory pane. `memory` is `None` outside step mode.
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    memory: Option<&MemorySnapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Memory ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let memory = match memory {
        Some(memory) if !memory.is_empty() => memory,
        other => {
            let text = if other.is_none() {
                "(enable step mode with m)"
            } else {
                "(no variables)"
            };
            let paragraph = Paragraph::new(text)
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let name_width = memory.names().map(|n| n.chars().count()).max().unwrap_or(0);

    let all_items: Vec<ListItem> = memory
        .iter()
        .map(|(name, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", name, width = name_width),
                    Style::default()
                        .fg(DEFAULT_THEME.variable_name)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), value_style(value)),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

fn value_style(value: &str) -> Style {
    if value.starts_with('"') || value.starts_with('\'') {
        Style::default().fg(DEFAULT_THEME.string)
    } else if value.parse::<f64>().is_ok() {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}
