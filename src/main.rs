//! Code Pilot: step-mode code playground in the terminal

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use codepilot::config::Config;
use codepilot::language::{read_source, Language};
use codepilot::logging;
use codepilot::runner::input::ScriptedInput;
use codepilot::runner::Runner;
use codepilot::session::ExecutionSession;
use codepilot::ui::App;

/// Terminal code playground with step-by-step simulation
#[derive(Debug, Parser)]
#[command(name = "codepilot", version)]
#[command(about = "Step through C++, Java, C#, JavaScript and Python programs")]
struct Args {
    /// Program to load (defaults to the built-in sample)
    file: Option<PathBuf>,

    /// Source language (defaults to the file extension, then the config)
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Config file path
    #[arg(long, env = "CODEPILOT_CONFIG")]
    config: Option<PathBuf>,

    /// Print the generated steps and exit
    #[arg(long, conflicts_with = "run")]
    steps: bool,

    /// Run the program once, print its output and exit
    #[arg(long)]
    run: bool,

    /// Answer for an input request in `--run`; repeat for several
    #[arg(long = "input", value_name = "ANSWER")]
    inputs: Vec<String>,

    /// Do not write a log file
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Keep the guard alive so buffered records are flushed on exit
    let _log_guard = if args.no_log {
        None
    } else {
        let (path, guard) = logging::init_file_logging("codepilot")?;
        if !args.steps && !args.run {
            eprintln!("Code Pilot logs: {}", path.display());
        }
        Some(guard)
    };

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let language = args
        .language
        .or_else(|| args.file.as_deref().and_then(Language::from_path))
        .unwrap_or(config.default_language);

    let source = match &args.file {
        Some(path) => read_source(path)
            .with_context(|| format!("cannot load program {}", path.display()))?,
        None => language.default_sample().to_string(),
    };

    tracing::info!(
        language = language.id(),
        file = ?args.file,
        "starting codepilot"
    );

    if args.steps {
        let session = ExecutionSession::generate(language, &source);
        for step in session.steps() {
            println!("{step}");
        }
        eprintln!("{} step(s)", session.len());
        return Ok(ExitCode::SUCCESS);
    }

    if args.run {
        let runner = Runner::new(&config.engines);
        let mut input = ScriptedInput::new(args.inputs);
        let outcome = runner.run(language, &source, &mut input);
        print!("{}", outcome.output);
        return Ok(match outcome.error {
            Some(error) => {
                eprint!("{error}");
                ExitCode::FAILURE
            }
            None => ExitCode::SUCCESS,
        });
    }

    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&config, language, source, args.file.clone());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        return Err(err).context("terminal UI failed");
    }

    tracing::info!("TUI exited normally");
    Ok(ExitCode::SUCCESS)
}
