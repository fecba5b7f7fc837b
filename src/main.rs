use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use huesped::feed::spawn_poller;
use huesped::ui::{self, Theme};
use huesped::{events, App, MetricsFeed, MetricsSource, Settings, StaticSource, ViewModel};

#[derive(Parser, Debug)]
#[command(name = "huesped")]
#[command(about = "Terminal front end for the hotel guest app")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route to open at startup (e.g. "/huesped/account")
    #[arg(long)]
    route: Option<String>,

    /// Seconds between status refreshes
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long, default_value = "huesped.log")]
    log_file: PathBuf,

    /// Print the initial view as JSON and exit
    #[arg(short, long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(route) = args.route {
        settings.initial_route = route;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
    settings.validate()?;

    // Non-interactive: no terminal to protect, log to stderr
    if args.dump {
        init_logging(None)?;
        return dump(&settings);
    }

    init_logging(Some(&args.log_file))?;
    tracing::info!(route = %settings.initial_route, "starting guest app");

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let feed = MetricsFeed::new(settings.metrics.clone());
    let (handle, source) = spawn_poller(feed, settings.refresh_period());

    let result = run_tui(Box::new(source), &settings);

    rt.block_on(handle.shutdown());
    tracing::info!("guest app stopped");

    result
}

/// Install the tracing subscriber, filtered by `HUESPED_LOG` (default `info`).
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env("HUESPED_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
        }
    }
    Ok(())
}

/// Print the initial view model as pretty JSON
fn dump(settings: &Settings) -> Result<()> {
    let source = StaticSource::new(settings.metrics.clone());
    let mut app = App::new(Box::new(source), settings, Theme::dark());
    app.refresh_metrics();

    let json = ViewModel::compose(&app).to_json().context("failed to serialize view")?;
    println!("{}", json);
    Ok(())
}

/// Run the TUI with the given metrics source
fn run_tui(source: Box<dyn MetricsSource>, settings: &Settings) -> Result<()> {
    // Detect the theme before raw mode takes over the terminal
    let theme = Theme::auto_detect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source, settings, theme);
    app.refresh_metrics();

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Pick up whatever the poller published since the last frame
        app.refresh_metrics();
    }

    Ok(())
}
