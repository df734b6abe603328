//! Output pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// What the output pane shows
#[derive(Debug, Clone, Copy)]
pub struct OutputRenderData<'a> {
    /// Accumulated normal output
    pub output: &'a str,
    /// Error text, rendered after the output in the error colour
    pub error: Option<&'a str>,
    /// Shown when there is neither output nor error
    pub placeholder: &'a str,
}

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    data: OutputRenderData<'_>,
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
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let normal = Style::default().fg(DEFAULT_THEME.fg);
    let failed = Style::default().fg(DEFAULT_THEME.error);

    let mut all_items: Vec<ListItem> = output_lines(data.output)
        .map(|line| ListItem::new(line).style(normal))
        .collect();
    if let Some(error) = data.error {
        all_items.extend(output_lines(error).map(|line| ListItem::new(line).style(failed)));
    }

    if all_items.is_empty() {
        let paragraph = Paragraph::new(data.placeholder)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Split text into display lines, dropping the empty line after a trailing newline
fn output_lines(text: &str) -> impl Iterator<Item = &str> {
    let trimmed = text.strip_suffix('\n').unwrap_or(text);
    trimmed
        .split('\n')
        .filter(move |_| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lines() {
        assert_eq!(output_lines("").count(), 0);
        assert_eq!(
            output_lines("a\nb\n").collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        // A prompt without newline stays on its own partial line
        assert_eq!(
            output_lines("Enter your name: ").collect::<Vec<_>>(),
            vec!["Enter your name: "]
        );
        assert_eq!(output_lines("\n").collect::<Vec<_>>(), vec![""]);
    }
}
