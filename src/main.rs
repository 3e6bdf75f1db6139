//! FormCanvas CLI - replay canvas input scripts and print configuration presets.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use formcanvas::designer::{load_layout, save_layout, serialization::layout_to_json};
use formcanvas::replay;
use formcanvas::settings::{default_config_path, load_or_default};
use formcanvas::{init_logging, CanvasSession, Config};
use std::path::PathBuf;

/// FormCanvas - spatial interaction core for form and workflow canvases
#[derive(Parser)]
#[command(name = "formcanvas", version)]
#[command(about = "Replay canvas interactions against saved layouts")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply an input script to a layout and print or save the result
    Replay {
        /// Layout JSON to start from (empty canvas when omitted)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Replay script (JSON array of events)
        #[arg(short, long)]
        script: PathBuf,

        /// Canvas configuration (JSON or TOML); defaults to the user config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the resulting layout here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a configuration preset as TOML
    Config {
        #[arg(short, long, value_enum, default_value_t = Preset::Form)]
        preset: Preset,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Image-backed form canvas
    Form,
    /// Workflow canvas with wheel zoom and background pan
    Workflow,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    match cli.command {
        Commands::Replay {
            layout,
            script,
            config,
            output,
        } => run_replay(layout, script, config, output),
        Commands::Config { preset } => print_preset(preset),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

fn run_replay(
    layout: Option<PathBuf>,
    script: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config)?;
    let elements = match layout {
        Some(path) => load_layout(&path)?,
        None => Vec::new(),
    };
    let mut session = CanvasSession::with_elements(config, elements)?;

    let events = replay::load_script(&script)?;
    let summary = replay::run(&mut session, &events)?;
    for note in &summary.notifications {
        tracing::info!("{}", note);
    }
    if let Some(bounds) = summary.selection_bounds {
        tracing::info!("Selection bounds: {}", bounds);
    }

    match output {
        Some(path) => save_layout(session.elements(), &path)?,
        None => println!("{}", layout_to_json(session.elements())?),
    }
    Ok(())
}

fn print_preset(preset: Preset) -> Result<()> {
    let config = match preset {
        Preset::Form => Config::form_canvas(),
        Preset::Workflow => Config::workflow_canvas(),
    };
    print!("{}", config.to_toml_string()?);
    Ok(())
}
