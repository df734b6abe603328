//! Input request/response channel
//!
//! Run mode may need a line of user input. The runner issues a request with a
//! prompt and blocks on the answer; the collector decides where the answer
//! comes from (a modal popup in the TUI, a scripted list in the headless CLI
//! and in tests). The step generator never asks for input.

use std::collections::VecDeque;
use thiserror::Error;
use tracing::debug;

/// The user dismissed the input request without answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input cancelled")]
pub struct InputCancelled;

/// Source of answers for input requests
pub trait InputCollector {
    /// Ask for one line of input
    fn request(&mut self, prompt: &str) -> Result<String, InputCancelled>;
}

/// Ask `collector`, treating a cancellation as an empty answer
pub fn request_or_empty(collector: &mut dyn InputCollector, prompt: &str) -> String {
    match collector.request(prompt) {
        Ok(answer) => answer,
        Err(InputCancelled) => {
            debug!(prompt, "input cancelled, continuing without input");
            String::new()
        }
    }
}

/// Answers from a fixed list; cancels once the list runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt requested so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputCollector for ScriptedInput {
    fn request(&mut self, prompt: &str) -> Result<String, InputCancelled> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(InputCancelled)
    }
}
