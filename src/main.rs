use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orchardmap::settings::{Settings, default_settings_path};
use orchardmap::settings_watcher::SettingsWatcher;
use orchardmap::style::{StyleDocument, legend_entries};
use orchardmap::types::Viewport;
use orchardmap::{MapApp, MemoryEngine};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const STATUS_VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

#[derive(Parser)]
#[command(name = "orchardmap")]
#[command(about = "Style tables and interaction state for the orchard plantings map")]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print the style document as JSON (default)
    Style,
    /// Print the variety legend, one colour and label per line
    Legend,
    /// Print the settings path and whether the map can initialize
    Status,
    /// Wait until the settings file supplies an access token
    Watch,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orchardmap=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings_path = cli.settings.or_else(default_settings_path);
    let settings = load_settings(settings_path.as_deref());

    match cli.command.unwrap_or(Command::Style) {
        Command::Style => {
            let document = StyleDocument::from_settings(&settings);
            let json = serde_json::to_string_pretty(&document).context("serializing style document")?;
            println!("{json}");
        }
        Command::Legend => {
            for entry in legend_entries() {
                println!("{}\t{}", entry.color, entry.label);
            }
        }
        Command::Status => print_status(settings_path.as_deref(), settings),
        Command::Watch => {
            let path = settings_path.context("no configuration directory")?;
            wait_for_token(path, settings)?;
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Settings {
    match path {
        Some(path) => {
            let mut settings = Settings::load_from(path);
            settings.apply_env_overrides(|key| std::env::var(key).ok());
            settings
        }
        None => Settings::load(),
    }
}

fn print_status(path: Option<&Path>, settings: Settings) {
    match path {
        Some(path) => println!("settings: {}", path.display()),
        None => println!("settings: <no config directory>"),
    }

    let mut app: MapApp<MemoryEngine> = MapApp::new(settings);
    let ready = app.observe(Some(STATUS_VIEWPORT), MemoryEngine::new);
    println!(
        "map: {}",
        if ready { "ready" } else { "waiting for access token" }
    );
    println!("{}", app.view());
}

/// Block until the settings file supplies a credential.
fn wait_for_token(path: PathBuf, settings: Settings) -> Result<()> {
    let mut watcher = SettingsWatcher::new(path)?;
    let mut app: MapApp<MemoryEngine> = MapApp::new(settings);

    info!(path = %watcher.path().display(), "Waiting for access token");
    while !app.observe(Some(STATUS_VIEWPORT), MemoryEngine::new) {
        app.check_settings_reload(&mut watcher);
        std::thread::sleep(Duration::from_millis(250));
    }
    println!("map: ready");
    Ok(())
}
