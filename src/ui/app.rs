//! Main TUI application state and logic

use crate::config::Config;
use crate::language::{read_source, Language};
use crate::runner::{template, RunOutcome, Runner};
use crate::session::ExecutionSession;
use crate::ui::input::ModalInput;
use crate::ui::panes::{
    render_memory_pane, render_output_pane, render_source_pane, render_status_bar,
    OutputRenderData, SourceScrollState, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const OUTPUT_PLACEHOLDER: &str = "Run your code to see the output here...";

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
    Memory,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> output -> memory)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Memory,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Memory => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    pub language: Language,

    /// The program shown in the source pane
    pub source_code: String,

    /// File the program was loaded from, if any
    pub source_path: Option<PathBuf>,

    pub step_mode: bool,

    /// Step playback; empty until steps are generated
    pub session: ExecutionSession,

    /// Result of the last run outside step mode
    pub run_outcome: Option<RunOutcome>,

    runner: Runner,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: SourceScrollState,
    pub output_scroll: usize,
    pub memory_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
    autoplay_interval: Duration,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app showing `source_code` in `language`
    pub fn new(
        config: &Config,
        language: Language,
        source_code: String,
        source_path: Option<PathBuf>,
    ) -> Self {
        App {
            language,
            source_code,
            source_path,
            step_mode: config.step_mode,
            session: ExecutionSession::default(),
            run_outcome: None,
            runner: Runner::new(&config.engines),
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            output_scroll: 0,
            memory_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            is_playing: false,
            last_play_time: Instant::now(),
            autoplay_interval: config.autoplay_interval(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.autoplay_interval {
                self.tick_autoplay();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, terminal);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let current_line = if self.step_mode {
            self.session.highlighted_line()
        } else {
            None
        };
        render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            self.language,
            current_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let output = match (&self.run_outcome, self.step_mode) {
            (_, true) => OutputRenderData {
                output: self.session.output(),
                error: None,
                placeholder: OUTPUT_PLACEHOLDER,
            },
            (Some(outcome), false) => OutputRenderData {
                output: &outcome.output,
                error: outcome.error.as_deref(),
                placeholder: "No output",
            },
            (None, false) => OutputRenderData {
                output: "",
                error: None,
                placeholder: OUTPUT_PLACEHOLDER,
            },
        };
        render_output_pane(
            frame,
            left_rows[1],
            output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        render_memory_pane(
            frame,
            columns[1],
            self.step_mode.then(|| self.session.memory()),
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        let progress = (self.step_mode && !self.session.is_empty())
            .then(|| (self.session.position(), self.session.len()));
        render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                language: self.language,
                step_mode: self.step_mode,
                progress,
                is_playing: self.is_playing,
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    ///
    /// The terminal is needed because a run may open the input popup.
    pub fn handle_key_event<B: Backend>(&mut self, key: KeyEvent, terminal: &mut Terminal<B>) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('m') => self.toggle_step_mode(),
            KeyCode::Char('r') => {
                self.is_playing = false;
                if self.step_mode {
                    self.prepare_steps();
                } else {
                    self.run_program(terminal);
                }
            }
            KeyCode::Right | KeyCode::Char('s') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.run_all_steps();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.reset_execution();
            }
            KeyCode::Char('l') => {
                let language = self.language.next();
                self.load_sample(language);
            }
            KeyCode::Char('d') => self.load_sample(self.language),
            KeyCode::Char('o') => self.reload_source(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Memory => {
                    self.memory_scroll = self.memory_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Memory => {
                    self.memory_scroll = self.memory_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_autoplay();
                }
            }
            _ => {}
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Drop any generated steps and run result
    fn clear_execution(&mut self) {
        self.is_playing = false;
        self.session = ExecutionSession::default();
        self.run_outcome = None;
        self.output_scroll = 0;
        self.memory_scroll = 0;
    }

    fn toggle_step_mode(&mut self) {
        self.step_mode = !self.step_mode;
        if self.step_mode {
            self.set_status("Step mode on. Press r to generate steps");
        } else {
            self.clear_execution();
            self.set_status("Step mode off");
        }
    }

    /// Generate a fresh session and show its first step without playing it
    fn prepare_steps(&mut self) {
        self.clear_execution();
        self.session.regenerate(self.language, &self.source_code);
        self.session.prime();
        info!(
            language = self.language.id(),
            steps = self.session.len(),
            "generated steps"
        );
        if self.session.is_empty() {
            self.set_error(format!(
                "No entry point found for {}",
                self.language.display_name()
            ));
        } else {
            self.set_status(format!("Generated {} steps", self.session.len()));
        }
    }

    fn run_program<B: Backend>(&mut self, terminal: &mut Terminal<B>) {
        self.clear_execution();
        let outcome = {
            let mut collector = ModalInput::new(terminal, &self.source_code, self.language);
            self.runner
                .run(self.language, &self.source_code, &mut collector)
        };
        let kind = if template::is_templated(self.language) {
            "Simulated run"
        } else {
            "Run"
        };
        if outcome.is_error() {
            self.set_error(format!("{kind} failed"));
        } else {
            self.set_status(format!("{kind} finished"));
        }
        self.run_outcome = Some(outcome);
        self.output_scroll = usize::MAX;
    }

    /// Play one step
    fn step_forward(&mut self) {
        if !self.step_mode {
            self.set_status("Step mode is off. Press m to enable it");
            return;
        }
        match self.session.advance_one().map(|step| step.line) {
            Some(line) => {
                self.set_status(format!("Executed line {}", line + 1));
                // Auto-scroll output to bottom
                self.output_scroll = usize::MAX;
            }
            None if self.session.is_empty() => {
                self.set_status("No steps yet. Press r to generate them");
            }
            None => self.set_status("Execution complete"),
        }
    }

    fn run_all_steps(&mut self) {
        if !self.step_mode {
            return;
        }
        let played = self.session.advance_all();
        self.set_status(format!("Ran {} remaining step(s)", played));
        self.output_scroll = usize::MAX;
    }

    /// Rewind and regenerate from the current source
    fn reset_execution(&mut self) {
        if !self.step_mode {
            return;
        }
        self.session.regenerate(self.language, &self.source_code);
        self.output_scroll = 0;
        self.set_status("Execution reset");
    }

    fn toggle_autoplay(&mut self) {
        if !self.step_mode || self.session.is_complete() {
            self.is_playing = false;
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(self.autoplay_interval)
                .unwrap_or(Instant::now());
            self.set_status("Playing...");
        } else {
            self.set_status("Paused");
        }
    }

    fn tick_autoplay(&mut self) {
        if self.session.advance_one().is_some() {
            self.output_scroll = usize::MAX;
            self.set_status("Playing...");
        } else {
            self.is_playing = false;
            self.set_status("Playback complete");
        }
        self.last_play_time = Instant::now();
    }

    /// Replace the program with the built-in sample for `language`
    fn load_sample(&mut self, language: Language) {
        self.clear_execution();
        self.language = language;
        self.source_code = language.default_sample().to_string();
        self.source_path = None;
        self.source_scroll = SourceScrollState::default();
        self.set_status(format!("Loaded {} sample", language.display_name()));
    }

    /// Re-read the source file from disk
    fn reload_source(&mut self) {
        let Some(path) = self.source_path.clone() else {
            self.set_status("No source file to reload");
            return;
        };
        match read_source(&path) {
            Ok(source) => {
                self.clear_execution();
                self.source_code = source;
                self.set_status(format!("Reloaded {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.set_error(e.to_string());
            }
        }
    }
}
