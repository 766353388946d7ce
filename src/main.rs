use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};
use tracing::info;

use time_fighter::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    ui::ui,
};

/// tap as fast as you can before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Time Fighter: the first tap starts the countdown, every tap scores a point, and the round ends when the clock hits zero."
)]
pub struct Cli {
    /// seconds on the clock at the start of each round
    #[clap(short = 's', long)]
    countdown: Option<u32>,

    /// disable the score blink and button pulse
    #[clap(long)]
    no_animations: bool,

    /// path of the config file
    #[clap(long)]
    config: Option<PathBuf>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,

    /// log to a file at this level (trace, debug, info, warn, error)
    #[clap(long)]
    log_level: Option<String>,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Stored settings with command line overrides applied on top
    fn effective_config(&self, stored: Config) -> Config {
        Config {
            initial_countdown: self.countdown.unwrap_or(stored.initial_countdown),
            animations: stored.animations && !self.no_animations,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(filter) = logging::filter_from(cli.log_level.as_deref()) {
        logging::init(filter, &AppDirs::log_path())?;
    }

    let store = cli.config_store();
    let config = cli.effective_config(store.load());
    if let Err(e) = config.validate() {
        Cli::command().error(ErrorKind::InvalidValue, e).exit();
    }
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "config saved");
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    info!(countdown = config.initial_countdown, animations = config.animations, "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    terminal.draw(|f| ui(app, f, Instant::now()))?;

    while !app.should_quit {
        let event = runner.step(app.time_until_tick(Instant::now()));
        let now = Instant::now();

        let redraw = match event {
            GameEvent::Key(key) => {
                app.on_key(key, now);
                app.on_frame(now);
                true
            }
            GameEvent::Resize => {
                app.on_frame(now);
                true
            }
            GameEvent::Frame => app.on_frame(now),
        };

        if redraw {
            terminal.draw(|f| ui(app, f, now))?;
        }
    }

    Ok(())
}
