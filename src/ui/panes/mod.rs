//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display with syntax highlighting and the current step line
//! - [`output`]: Accumulated program output, with run errors in the error colour
//! - [`memory`]: Name/value table of the simulated variables
//! - [`status`]: Status bar with keybindings and playback state
//! - [`popup`]: Modal input popup used while a run asks for input
//!
//! Each pane module exports a primary `render_*` function plus the state or
//! render-data types it needs. The functions are stateless apart from the
//! scroll state they are handed.

pub mod memory;
pub mod output;
pub mod popup;
pub mod source;
pub mod status;

// Re-export render functions for convenience
pub use memory::render_memory_pane;
pub use output::{render_output_pane, OutputRenderData};
pub use popup::render_input_popup;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
