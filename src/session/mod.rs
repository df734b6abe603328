//! Step playback
//!
//! An [`ExecutionSession`] owns one generated step list together with the
//! cursor and everything the UI renders from it: the accumulated output, the
//! memory snapshot on display and the highlighted source line. The UI keeps no
//! copy of its own.
//!
//! The cursor only moves forward. `cursor == len` means playback is complete,
//! and advancing past that point changes nothing. A new generation replaces
//! the whole session.

use crate::language::Language;
use crate::simulator;
use crate::snapshot::{ExecutionStep, MemorySnapshot};
use tracing::debug;

/// Playback state over a generated step list
#[derive(Debug, Clone, Default)]
pub struct ExecutionSession {
    steps: Vec<ExecutionStep>,
    cursor: usize,
    output: String,
    memory: MemorySnapshot,
    highlighted_line: Option<usize>,
}

impl ExecutionSession {
    /// Create a session over an existing step list
    pub fn new(steps: Vec<ExecutionStep>) -> Self {
        ExecutionSession {
            steps,
            ..Self::default()
        }
    }

    /// Generate the steps for `source` and start a fresh session over them
    pub fn generate(language: Language, source: &str) -> Self {
        Self::new(simulator::generate(language, source))
    }

    /// Replace this session with a fresh one generated from `source`
    pub fn regenerate(&mut self, language: Language, source: &str) {
        *self = Self::generate(language, source);
    }

    /// Play the step under the cursor.
    ///
    /// Returns the played step, or `None` once playback is complete.
    pub fn advance_one(&mut self) -> Option<&ExecutionStep> {
        let step = self.steps.get(self.cursor)?;
        self.output.push_str(&step.output);
        self.memory = step.memory.clone();
        self.highlighted_line = Some(step.line);
        self.cursor += 1;
        Some(step)
    }

    /// Play every remaining step, returning how many were played
    pub fn advance_all(&mut self) -> usize {
        let mut played = 0;
        while self.advance_one().is_some() {
            played += 1;
        }
        debug!(played, total = self.steps.len(), "ran all remaining steps");
        played
    }

    /// Rewind to the first step and clear the rendered state
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.output.clear();
        self.memory = MemorySnapshot::new();
        self.highlighted_line = None;
    }

    /// Show the first step's line and memory without playing it
    pub fn prime(&mut self) {
        if self.cursor != 0 {
            return;
        }
        if let Some(first) = self.steps.first() {
            self.highlighted_line = Some(first.line);
            self.memory = first.memory.clone();
        }
    }

    /// The step that the next [`advance_one`](Self::advance_one) will play
    pub fn peek(&self) -> Option<&ExecutionStep> {
        self.steps.get(self.cursor)
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    /// Number of steps already played
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.steps.len()
    }

    /// Output accumulated by the steps played so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Memory snapshot currently on display
    pub fn memory(&self) -> &MemorySnapshot {
        &self.memory
    }

    pub fn highlighted_line(&self) -> Option<usize> {
        self.highlighted_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> ExecutionSession {
        ExecutionSession::generate(
            Language::JavaScript,
            "let city = \"Paris\";\nconsole.log(city);",
        )
    }

    #[test]
    fn test_advance_one_applies_step() {
        let mut session = sample_session();
        assert_eq!(session.len(), 3);

        let step = session.advance_one().cloned().unwrap();
        assert_eq!(step.line, 0);
        assert_eq!(session.position(), 1);
        assert_eq!(session.output(), "Declared let city = \"Paris\"\n");
        assert_eq!(session.memory().get("city"), Some("\"Paris\""));
        assert_eq!(session.highlighted_line(), Some(0));

        session.advance_one();
        assert_eq!(
            session.output(),
            "Declared let city = \"Paris\"\n\"Paris\"\n"
        );
        assert_eq!(session.highlighted_line(), Some(1));
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut session = sample_session();
        assert_eq!(session.advance_all(), 3);
        assert!(session.is_complete());

        let output = session.output().to_string();
        let memory = session.memory().clone();
        assert!(session.advance_one().is_none());
        assert_eq!(session.advance_all(), 0);
        assert_eq!(session.position(), 3);
        assert_eq!(session.output(), output);
        assert_eq!(session.memory(), &memory);
    }

    #[test]
    fn test_reset_keeps_steps() {
        let mut session = sample_session();
        session.advance_all();
        session.reset();

        assert_eq!(session.position(), 0);
        assert_eq!(session.output(), "");
        assert!(session.memory().is_empty());
        assert_eq!(session.highlighted_line(), None);
        assert_eq!(session.len(), 3);
        assert_eq!(session.peek().map(|s| s.line), Some(0));
    }

    #[test]
    fn test_prime_does_not_consume() {
        let mut session =
            ExecutionSession::generate(Language::Cpp, Language::Cpp.default_sample());
        session.prime();
        assert_eq!(session.position(), 0);
        assert_eq!(session.highlighted_line(), Some(8));
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_empty_session_is_complete() {
        let mut session = ExecutionSession::generate(Language::Java, "class A {}");
        assert!(session.is_empty());
        assert!(session.is_complete());
        session.prime();
        assert!(session.advance_one().is_none());
        assert_eq!(session.highlighted_line(), None);
    }

    #[test]
    fn test_regenerate_replaces_session() {
        let mut session = sample_session();
        session.advance_all();
        session.regenerate(Language::Python, "x = 1");

        assert_eq!(session.position(), 0);
        assert_eq!(session.output(), "");
        assert_eq!(session.len(), 2);
        assert_eq!(session.steps()[0].output, "Assigned x = 1\n");
        let expected = crate::simulator::generate(Language::Python, "x = 1");
        assert_eq!(session.steps(), expected.as_slice());
    }
}
