//! Run mode
//!
//! Outside step mode a program is "run" as a whole:
//!
//! - [`template`]: C++, Java and C# are simulated from string templates
//! - [`process`]: JavaScript and Python are handed to a host interpreter
//! - [`input`]: the request/response channel both use to ask for input
//!
//! Either way the result is a [`RunOutcome`] whose error text is rendered
//! apart from normal output.

pub mod input;
pub mod process;
pub mod template;

use crate::config::EngineConfig;
use crate::language::Language;
use input::InputCollector;
use process::ProcessEngine;
use tracing::info;

/// Captured result of a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutcome {
    pub output: String,
    pub error: Option<String>,
}

impl RunOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        RunOutcome {
            output: output.into(),
            error: None,
        }
    }

    pub fn failure(output: impl Into<String>, error: impl Into<String>) -> Self {
        RunOutcome {
            output: output.into(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Dispatches a run to the template simulator or the host engine
#[derive(Debug, Clone)]
pub struct Runner {
    engine: ProcessEngine,
}

impl Runner {
    pub fn new(engines: &EngineConfig) -> Self {
        Runner {
            engine: ProcessEngine::new(engines),
        }
    }

    pub fn run(
        &self,
        language: Language,
        source: &str,
        collector: &mut dyn InputCollector,
    ) -> RunOutcome {
        info!(language = language.id(), "run requested");
        template::simulate_run(language, source, collector)
            .or_else(|| self.engine.run(language, source, collector))
            .unwrap_or_else(|| {
                RunOutcome::success(format!(
                    "Code execution for {language} is not supported.\nYour {language} code:\n{source}"
                ))
            })
    }
}
