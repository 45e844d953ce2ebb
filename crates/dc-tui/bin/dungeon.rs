//! Dungeon Crawler
//!
//! Main entry point for the game.

use std::fs::{self, File};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dc_core::{GameLoop, GameOptions, WorldMap};
use dc_tui::terminal::{self, Tui};
use dc_tui::{App, AppError, OutputFormat, PlainPresenter, Theme};

/// Text adventure in a small dungeon
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(author, version, about = "Dungeon Crawler - find the key and escape!", long_about = None)]
struct Args {
    /// Seed for a reproducible game
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Options file (OPTIONS=... lines)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Play a world loaded from a JSON file instead of the built-in dungeon
    #[arg(short = 'w', long = "world")]
    world: Option<PathBuf>,

    /// Line mode on stdin/stdout instead of the full-screen interface
    #[arg(long = "plain")]
    plain: bool,

    /// With --plain, print every event as a JSON object
    #[arg(long = "json", requires = "plain")]
    json: bool,

    /// Write log output to this file
    #[arg(long = "log")]
    log: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_tracing(&args) {
        eprintln!("dungeon: cannot open log file: {err}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "fatal error");
            eprintln!("dungeon: {err}");
            ExitCode::FAILURE
        }
    }
}

/// The full-screen interface owns the terminal, so it only ever logs to the
/// `--log` file. Line mode logs to stderr unless a file is given.
fn init_tracing(args: &Args) -> io::Result<()> {
    let default = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    let file_layer = match &args.log {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(File::create(path)?)),
        ),
        None => None,
    };
    let stderr_layer =
        (args.plain && args.log.is_none()).then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

/// Config file first, then command-line overrides
fn load_options(args: &Args) -> Result<GameOptions, AppError> {
    let mut options = match &args.config {
        Some(path) => GameOptions::load_from_file(path)?,
        None => GameOptions::default(),
    };
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    Ok(options)
}

fn load_world(args: &Args) -> Result<WorldMap, AppError> {
    match &args.world {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            let world = WorldMap::from_json(&json)?;
            tracing::info!(path = %path.display(), rooms = world.len(), "loaded world");
            Ok(world)
        }
        None => Ok(dc_data::dungeon()),
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let options = load_options(args)?;
    let world = load_world(args)?;
    let mut game = GameLoop::from_options(world, &options)?;

    if args.plain {
        let format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let stdin = io::stdin();
        let mut presenter =
            PlainPresenter::new(io::stdout().lock(), format).with_prompt(stdin.is_terminal());
        let result = presenter.run(&mut game, stdin.lock(), options.welcome)?;
        tracing::info!(?result, "session ended");
        return Ok(());
    }

    let mut app = App::new(game, Theme::for_options(options.color), options.msghistory);
    app.start(options.welcome)?;

    let mut terminal = terminal::enter()?;
    let result = event_loop(&mut terminal, &mut app);
    terminal::leave(&mut terminal)?;
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
