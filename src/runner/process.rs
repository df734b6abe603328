//! Host execution engines for JavaScript and Python
//!
//! Programs are run by an external interpreter (`node`, `python3`) with
//! stdout and stderr captured. Interactive input cannot be detected from the
//! outside, so every recognised input call is answered up front through the
//! collector and the answers are piped to the child's stdin, one per line.
//! A program still running when the configured deadline passes is killed.

use super::input::{request_or_empty, InputCollector};
use super::RunOutcome;
use crate::config::EngineConfig;
use crate::language::Language;
use crate::simulator::classify::{classify, is_blank, LineKind};
use crate::simulator::LanguageProfile;
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Defines a synchronous `prompt()` that reads the piped answers
const JS_PRELUDE: &str = r#"const __codepilotInput = require('fs').readFileSync(0, 'utf8').split('\n');
let __codepilotCursor = 0;
globalThis.prompt = (message) => {
  const text = message || 'Enter input:';
  const value = __codepilotInput[__codepilotCursor++] ?? '';
  process.stdout.write(`> ${text}\n${value}\n`);
  return value;
};
"#;

const DEFAULT_PROMPT: &str = "Enter input:";

/// Runs programs through external interpreter processes
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    node: String,
    python: String,
    timeout: Duration,
}

impl ProcessEngine {
    pub fn new(config: &EngineConfig) -> Self {
        ProcessEngine {
            node: config.node.clone(),
            python: config.python.clone(),
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
        }
    }

    /// The interpreter command and arguments for `language`, if it has a host engine
    fn command_for(&self, language: Language, source: &str) -> Option<(String, Vec<String>)> {
        match language {
            Language::JavaScript => Some((
                self.node.clone(),
                vec!["-e".to_string(), format!("{JS_PRELUDE}{source}")],
            )),
            Language::Python => Some((
                self.python.clone(),
                vec!["-c".to_string(), source.to_string()],
            )),
            Language::Cpp | Language::Java | Language::CSharp => None,
        }
    }

    /// Run `source`; `None` for languages without a host engine
    pub fn run(
        &self,
        language: Language,
        source: &str,
        collector: &mut dyn InputCollector,
    ) -> Option<RunOutcome> {
        let (program, args) = self.command_for(language, source)?;
        let answers = collect_answers(language, source, collector);

        info!(%program, language = language.id(), inputs = answers.len(), "running host engine");

        let mut child = match Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!(%program, error = %e, "failed to start interpreter");
                return Some(RunOutcome::failure(
                    String::new(),
                    format!("failed to start `{program}`: {e}"),
                ));
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            let mut payload = answers.join("\n");
            if !payload.is_empty() {
                payload.push('\n');
            }
            if let Err(e) = stdin.write_all(payload.as_bytes()) {
                warn!(%program, error = %e, "failed to write input to interpreter");
            }
        }

        // Both pipes are drained while the child runs
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break Ok(status),
                Ok(None) if started.elapsed() >= self.timeout => {
                    warn!(%program, timeout = ?self.timeout, "interpreter timed out, killing it");
                    break Err(format!(
                        "`{program}` timed out after {}s",
                        self.timeout.as_secs()
                    ));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    warn!(%program, error = %e, "interpreter did not finish");
                    break Err(format!("`{program}` did not finish: {e}"));
                }
            }
        };
        if status.is_err() {
            if let Err(e) = child.kill().and_then(|()| child.wait().map(drop)) {
                warn!(%program, error = %e, "failed to stop interpreter");
            }
        }

        let stdout = String::from_utf8_lossy(&join_reader(stdout_reader)).into_owned();
        let stderr = String::from_utf8_lossy(&join_reader(stderr_reader))
            .trim_end()
            .to_string();

        let outcome = match status {
            Err(error) => RunOutcome::failure(stdout, error),
            Ok(_) if !stderr.is_empty() => RunOutcome::failure(stdout, stderr),
            Ok(status) if !status.success() => {
                RunOutcome::failure(stdout, format!("`{program}` exited with {status}"))
            }
            Ok(_) => RunOutcome::success(stdout),
        };
        Some(outcome)
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut pipe) = pipe {
            if let Err(e) = pipe.read_to_end(&mut buffer) {
                warn!(error = %e, "failed to read interpreter output");
            }
        }
        buffer
    })
}

fn join_reader(reader: thread::JoinHandle<Vec<u8>>) -> Vec<u8> {
    reader.join().unwrap_or_default()
}

/// Ask for one answer per recognised input call, in source order
pub(crate) fn collect_answers(
    language: Language,
    source: &str,
    collector: &mut dyn InputCollector,
) -> Vec<String> {
    let profile = LanguageProfile::for_language(language);
    source
        .lines()
        .map(str::trim)
        .filter(|line| !is_blank(profile, line))
        .filter_map(|line| match classify(profile, line) {
            LineKind::Input { prompt, .. } => Some(
                prompt
                    .and_then(|p| profile.unquote(p))
                    .filter(|p| !p.is_empty())
                    .unwrap_or(DEFAULT_PROMPT)
                    .to_string(),
            ),
            _ => None,
        })
        .map(|prompt| request_or_empty(collector, &prompt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::input::ScriptedInput;

    #[test]
    fn test_collect_answers_in_source_order() {
        let source = "name = input(\"Name? \")\nprint(name)\n# age = input()\nage = input()";
        let mut input = ScriptedInput::new(["Ada"]);
        let answers = collect_answers(Language::Python, source, &mut input);

        assert_eq!(answers, vec!["Ada".to_string(), String::new()]);
        assert_eq!(input.prompts(), ["Name? ", "Enter input:"]);
    }

    #[test]
    fn test_no_engine_for_templated_languages() {
        let engine = ProcessEngine::new(&EngineConfig::default());
        let mut input = ScriptedInput::default();
        assert!(engine.run(Language::Java, "", &mut input).is_none());
    }

    #[test]
    fn test_missing_interpreter_reports_error() {
        let engine = ProcessEngine::new(&EngineConfig {
            node: "codepilot-no-such-interpreter".to_string(),
            python: "codepilot-no-such-interpreter".to_string(),
            ..EngineConfig::default()
        });
        let mut input = ScriptedInput::default();
        let outcome = engine
            .run(Language::Python, "print('hi')", &mut input)
            .unwrap();

        assert!(outcome.is_error());
        assert!(outcome
            .error
            .unwrap()
            .starts_with("failed to start `codepilot-no-such-interpreter`"));
    }

    #[cfg(unix)]
    fn shell_engine(timeout_secs: u64) -> ProcessEngine {
        // `sh -c <source>` stands in for `python3 -c <source>`
        ProcessEngine::new(&EngineConfig {
            python: "sh".to_string(),
            timeout_secs,
            ..EngineConfig::default()
        })
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_output_and_stdin() {
        let engine = shell_engine(10);
        let mut input = ScriptedInput::default();
        let outcome = engine
            .run(Language::Python, "read line; echo \"got $line\"", &mut input)
            .unwrap();
        assert_eq!(outcome, RunOutcome::success("got \n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_runaway_program_is_killed() {
        let engine = shell_engine(1);
        let mut input = ScriptedInput::default();
        let started = Instant::now();
        let outcome = engine
            .run(Language::Python, "echo start; exec sleep 30", &mut input)
            .unwrap();

        assert!(started.elapsed() < Duration::from_secs(20));
        assert_eq!(outcome.output, "start\n");
        assert_eq!(outcome.error.as_deref(), Some("`sh` timed out after 1s"));
    }
}
