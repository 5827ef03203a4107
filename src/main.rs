// src/main.rs
mod config;
mod input;
mod models;
mod router;
mod shell;
mod theme;
mod ui;
mod utils;

use std::{io::Stdout, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use crate::config::{get_user_config_path, write_default_config, Settings};
use crate::input::{handle_key, handle_paste};
use crate::models::{LayoutSettingsState, Route};
use crate::router::PageRouter;
use crate::shell::LayoutShell;
use crate::theme::Theme;
use crate::ui::render_shell;
use crate::utils::open_log_file;

/// Terminal layout shell with page navigation and a project settings sidebar
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Additional config file, applied after the user and local config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page to show on start, e.g. `overview` or `/github_action`
    #[arg(long)]
    route: Option<Route>,

    /// Print the final settings as JSON on exit
    #[arg(long)]
    print_settings: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    show_config: bool,

    /// Write the default config to the user config path and exit
    #[arg(long)]
    init_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = get_user_config_path();
        if write_default_config(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists, leaving it untouched", path.display());
        }
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.show_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    init_logging(&settings);
    info!(?settings, "starting pydeck");

    let start_route = cli.route.or(settings.start_route);
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &settings, start_route);
    restore_terminal(&mut terminal)?;
    let final_settings = result?;

    if cli.print_settings {
        println!("{}", serde_json::to_string_pretty(&final_settings)?);
    }
    Ok(())
}

/// Logs go to a file so they never land on the screen the UI draws to.
/// An unusable log path is reported on stderr before the UI takes over.
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    match open_log_file(&settings.log_path()) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => eprintln!("warning: logging disabled: {e:#}"),
    }
}

fn setup_terminal() -> anyhow::Result<Tui> {
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the event loop until quit and hands back the settings of the mounted shell.
fn run(terminal: &mut Tui, settings: &Settings, start_route: Option<Route>) -> anyhow::Result<LayoutSettingsState> {
    let theme = Theme::default();
    let tick_rate = Duration::from_millis(settings.tick_rate_ms);
    let mut shell = LayoutShell::mount();
    let mut router = PageRouter::new(start_route);

    loop {
        terminal.draw(|f| render_shell(f, &shell, &router, &theme, settings.sidebar_width))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_key(&mut shell, &mut router, key) {
                        break;
                    }
                }
                Event::Paste(text) => handle_paste(&mut shell, &text),
                _ => {}
            }
        }
    }

    info!(visited = router.history().len(), "shell unmounted");
    Ok(shell.settings().clone())
}
