//! # Introduction
//!
//! Code Pilot is a terminal code playground for C++, Java, C#, JavaScript and
//! Python. Besides running a program as a whole, it can walk through a
//! program *line by line* without executing it: a pattern-driven step
//! generator recognises a handful of statement shapes and emits, per
//! recognised line, the output that line would produce and a snapshot of the
//! simulated variables.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Simulator → Steps → Session → TUI
//!          Runner ──────────→ RunOutcome ↗
//! ```
//!
//! 1. [`simulator`]: per-language profiles, line classification and step
//!    generation. Never fails; unrecognised lines are skipped.
//! 2. [`snapshot`]: the [`snapshot::ExecutionStep`] record and the
//!    insertion-ordered [`snapshot::MemorySnapshot`].
//! 3. [`session`]: forward-only playback over a step list.
//! 4. [`runner`]: run mode. Templated simulations for C++, Java and C#,
//!    host `node`/`python3` processes for JavaScript and Python.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Supporting modules: [`config`] (TOML settings), [`error`], [`language`]
//! and [`logging`].
//!
//! ## Example
//!
//! ```
//! use codepilot::language::Language;
//! use codepilot::session::ExecutionSession;
//!
//! let mut session = ExecutionSession::generate(Language::Python, "x = 1\nprint(x)\n");
//! session.advance_all();
//! assert_eq!(session.output(), "Assigned x = 1\n1\nProgram execution completed\n");
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod logging;
pub mod runner;
pub mod session;
pub mod simulator;
pub mod snapshot;
pub mod ui;
