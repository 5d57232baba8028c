// heapviz: step-by-step max-heap visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heapviz::config::{dump_trace, Config, DumpOperation};
use heapviz::session::Session;
use heapviz::ui::{App, HeapView};

/// Command-line arguments for heapviz
#[derive(Parser, Debug)]
#[command(name = "heapviz")]
#[command(about = "Watch max-heap operations one comparison and swap at a time")]
#[command(version)]
struct Args {
    /// Playback speed from 1 (slowest) to 10 (fastest)
    #[arg(short, long, default_value_t = 5, env = "HEAPVIZ_SPEED")]
    speed: u8,

    /// Initial heap contents, e.g. "3,1,4,1,5"
    #[arg(short, long)]
    values: Option<String>,

    /// Run one operation on --values and print its trace as JSON instead of opening the UI
    #[arg(long, value_enum)]
    dump: Option<DumpOperation>,

    /// Write logs to this file while the UI is running
    #[arg(long, env = "HEAPVIZ_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "heapviz=info".into())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_parts(args.speed, args.values.as_deref())
        .context("Failed to parse --values")?;

    if let Some(operation) = args.dump {
        // Headless: logs go to stderr, the trace to stdout
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();

        let trace = dump_trace(operation, &config.initial_values)
            .with_context(|| format!("Cannot run {:?}", operation))?;
        info!(steps = trace.len(), "trace recorded");
        let json = serde_json::to_string_pretty(trace.as_slice())
            .context("Failed to serialize trace")?;
        println!("{}", json);
        return Ok(());
    }

    // The UI owns the terminal, so logs only go to a file when one is given
    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(env_filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }

    info!(speed = %config.speed, values = config.initial_values.len(), "starting heapviz");

    let mut session = Session::new(HeapView::new(), config.speed);
    if !config.initial_values.is_empty() {
        session.load(&config.initial_values, Instant::now());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("UI event loop failed")?;
    info!("heapviz exited");
    Ok(())
}
