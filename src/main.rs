use clap::{ArgAction, Parser};
use std::path::PathBuf;

use fingerpaint::{Config, app};

#[derive(Parser, Debug)]
#[command(name = "fingerpaint")]
#[command(version, about = "Webcam virtual painter driven by hand gestures")]
struct Cli {
    /// Camera device index (overrides the config file)
    #[arg(long, short = 'c', value_name = "INDEX")]
    camera: Option<u32>,

    /// Path to an alternative config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Landmark tracker command (overrides the config file)
    #[arg(long, value_name = "COMMAND")]
    tracker: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(index) = cli.camera {
        config.camera.index = index;
    }
    if let Some(command) = cli.tracker {
        config.tracker.command = command;
    }

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    log::info!("Starting fingerpaint");
    log::info!("Controls:");
    log::info!("  - Draw: index finger up (Brush mode)");
    log::info!("  - Select a mode or color: hover with index + middle fingers");
    log::info!("  - Erase: index + middle + ring fingers (Eraser mode)");
    log::info!("  - Brush size: pinch thumb-index, steady with the other hand (Thickness mode)");
    log::info!("  - Exit: Q or Escape");

    app::run(config)
}
