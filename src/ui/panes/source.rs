//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source code pane, which displays the program
//! being simulated with basic syntax highlighting and the current step line.
//!
//! # Features
//!
//! - Keyword, type, string, number and comment highlighting for all five languages
//! - Current step line highlighting with a line-number accent
//! - Scroll state that keeps the current line at a fixed visual row
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use crate::language::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for one line of source
fn highlight_source_code(line: &str, language: Language) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    // Simple tokenizer over (byte offset, char) pairs
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        // Handle comments
        let is_comment = match language {
            Language::Python => c == '#',
            _ => c == '/' && i + 1 < chars.len() && chars[i + 1].1 == '/',
        };
        if is_comment {
            if !current_word.is_empty() {
                let style = get_keyword_style(&current_word, false);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }
            spans.push(Span::styled(
                line[offset..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        // Handle strings
        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                let style = get_keyword_style(&current_word, false);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != c {
                if chars[end].1 == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            let end_offset = chars.get(end).map_or(line.len(), |&(o, _)| o);
            spans.push(Span::styled(
                line[offset..end_offset].to_string(),
                Style::default().fg(DEFAULT_THEME.string), // Strings
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_func = c == '(';
                let style = get_keyword_style(&current_word, is_func);
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "char" | "void" | "bool" | "boolean" | "float" | "double" | "long" | "string"
        | "String" | "var" | "let" | "const" | "auto" => {
            Style::default().fg(DEFAULT_THEME.type_name) // Types and declarators
        }
        "return" | "if" | "else" | "while" | "for" | "function" | "def" | "class" | "public"
        | "private" | "static" | "using" | "include" | "import" | "from" | "new" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "null" | "NULL" | "None" | "true" | "false" | "True" | "False" | "undefined" => {
            Style::default().fg(DEFAULT_THEME.number) // Constants
        }
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ => {
            if is_function {
                Style::default().fg(DEFAULT_THEME.function)
            } else {
                Style::default().fg(DEFAULT_THEME.fg) // Variables/Identifiers
            }
        }
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to (None = not initialized yet)
    pub target_line_row: Option<usize>,
}

/// Render the source code pane.
///
/// `current_line` is zero-based; `None` renders without a highlight.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    language: Language,
    current_line: Option<usize>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Source Code ({}) ", language.display_name()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.split('\n').collect();
    let total_lines = lines.len();

    // Calculate visible range
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Get the target row, clamping to stay within visible area
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target visual row
    if let Some(current) = current_line.filter(|&l| l < total_lines) {
        scroll_state.offset = current.saturating_sub(target_row);
    }
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = current_line == Some(idx);
            let line_num_str = format!("{:4} ", idx + 1);

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let mut content_line = highlight_source_code(line.trim_end_matches('\r'), language);
            if is_current {
                let background = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(background);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        for source in [
            "std::cout << \"héllo\" << std::endl; // done",
            "print('a\\'b')  # note",
            "let x = \"unterminated",
        ] {
            let language = if source.contains('#') {
                Language::Python
            } else {
                Language::Cpp
            };
            assert_eq!(text_of(&highlight_source_code(source, language)), source);
        }
    }

    #[test]
    fn test_python_comment_span() {
        let line = highlight_source_code("x = 1 # set", Language::Python);
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "# set");
        assert_eq!(last.style.fg, Some(DEFAULT_THEME.comment));
    }
}
