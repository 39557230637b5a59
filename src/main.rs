use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use bizdash::config::{self, Config};
use bizdash::{logging, ui, App, ShellOptions};

#[derive(Debug, Parser)]
#[command(
    name = "bizdash",
    version,
    about = "Business dashboard shell with a collapsible navigation sidebar"
)]
struct Args {
    /// Config file (defaults to $BIZDASH_CONFIG or ~/.config/bizdash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file with navigation entries and dashboard records
    #[arg(long)]
    data: Option<PathBuf>,

    /// Use ASCII icons instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print one frame of COLSxROWS to stdout and exit (e.g. 120x40)
    #[arg(long, value_name = "COLSxROWS", value_parser = parse_size)]
    snapshot: Option<(u16, u16)>,
}

fn parse_size(raw: &str) -> Result<(u16, u16)> {
    let (cols, rows) = raw
        .split_once(|c: char| c == 'x' || c == 'X')
        .context("expected COLSxROWS")?;
    let cols: u16 = cols.trim().parse().context("invalid column count")?;
    let rows: u16 = rows.trim().parse().context("invalid row count")?;
    if cols == 0 || rows == 0 {
        bail!("size must be non-zero");
    }
    // a ratatui buffer holds at most u16::MAX cells
    if u32::from(cols) * u32::from(rows) > u32::from(u16::MAX) {
        bail!("{cols}x{rows} exceeds {} cells", u16::MAX);
    }
    Ok((cols, rows))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = config::load(args.config.as_deref());
    if let Some(err) = loaded.error() {
        eprintln!("bizdash: {err}; using default config");
    }
    let mut config = loaded.config.clone();
    if args.ascii {
        config.ascii_icons = true;
    }

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log_path())
        .or_else(|| args.snapshot.is_none().then(config::default_log_path).flatten());
    if let Some(path) = &log_path {
        if let Err(err) = logging::init(path) {
            eprintln!("logging disabled: {}: {err}", path.display());
        }
    }
    tracing::info!(
        config = ?loaded.path(),
        brand = %config.brand().name,
        "starting"
    );
    loaded.report();

    let mut app = build_app(&config, args.data.or_else(|| config.data_path()));

    if let Some((cols, rows)) = args.snapshot {
        let frame = ui::snapshot(&mut app, cols, rows)?;
        println!("{frame}");
        return Ok(());
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn build_app(config: &Config, data_path: Option<PathBuf>) -> App {
    let (registry, data) = config::load_shell_inputs(data_path.as_deref());
    tracing::info!(
        entries = registry.len(),
        metrics = data.metrics.len(),
        transactions = data.transactions.len(),
        "shell inputs ready"
    );
    App::new(ShellOptions::from_config(config), registry, data)
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, terminal.size()?),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        // redraw at least once per tick so the freshness badge advances
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}
