//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, auto-play
//! - **[`input`]**: the popup-backed [`InputCollector`] used by run mode
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   output, memory, status bar, input popup)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a [`Config`] and
//! a program, then call [`App::run`] to start the event loop.
//!
//! [`InputCollector`]: crate::runner::input::InputCollector
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panes;
pub mod theme;

pub use app::App;
