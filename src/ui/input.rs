//! Modal input collection for run mode
//!
//! [`ModalInput`] answers [`InputCollector`] requests by running a small
//! nested event loop: the popup is drawn over the source pane and keys are
//! read until the user submits or cancels.

use crate::language::Language;
use crate::runner::input::{InputCancelled, InputCollector};
use crate::ui::panes::{render_input_popup, render_source_pane, SourceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, warn};

/// Input collector backed by a popup on the live terminal
pub struct ModalInput<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    source: &'a str,
    language: Language,
}

impl<'a, B: Backend> ModalInput<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, source: &'a str, language: Language) -> Self {
        ModalInput {
            terminal,
            source,
            language,
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        let mut scroll = SourceScrollState::default();
        let (source, language) = (self.source, self.language);
        loop {
            self.terminal.draw(|frame| {
                render_source_pane(
                    frame,
                    frame.area(),
                    source,
                    language,
                    None,
                    false,
                    &mut scroll,
                );
                render_input_popup(frame, prompt, &buffer);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter => return Ok(Some(buffer)),
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(c) => buffer.push(c),
                    _ => {}
                }
            }
        }
    }
}

impl<B: Backend> InputCollector for ModalInput<'_, B> {
    fn request(&mut self, prompt: &str) -> Result<String, InputCancelled> {
        match self.read_line(prompt) {
            Ok(Some(answer)) => {
                debug!(prompt, "input submitted");
                Ok(answer)
            }
            Ok(None) => {
                debug!(prompt, "input cancelled");
                Err(InputCancelled)
            }
            Err(e) => {
                warn!(error = %e, "terminal error while reading input");
                Err(InputCancelled)
            }
        }
    }
}
