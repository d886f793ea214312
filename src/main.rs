use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use stacknav::config::{Config, LayoutChoice};
use stacknav::logging::{default_log_path, init_tracing, LogTarget};
use stacknav::nav::{ClearMode, Route};
use stacknav::replay::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "stacknav", version, about = "Stack-based navigation demo for the terminal")]
struct Cli {
    /// Config file (default: <config dir>/stacknav/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Layout mode; auto picks by terminal width
    #[arg(long, global = true, value_enum)]
    layout: Option<LayoutChoice>,

    /// Clear the stack of the tab being left on every tab switch
    #[arg(long, global = true, value_name = "BOOL")]
    reset_on_switch: Option<bool>,

    /// How clearing a stack is reported to observers
    #[arg(long, global = true, value_enum)]
    clear_mode: Option<ClearMode>,

    /// Log file for the interactive UI
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply navigation steps headlessly and print every change
    Replay {
        /// Print one JSON object per change instead of text
        #[arg(long)]
        json: bool,

        /// push:<taxonomy>:<tag>, pop, clear or select:<tab>
        #[arg(required = true, value_name = "STEP")]
        steps: Vec<String>,
    },
    /// List every known route in qualified form
    Routes,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(layout) = self.layout {
            config.layout.mode = layout;
        }
        if let Some(reset) = self.reset_on_switch {
            config.layout.reset_stack_on_tab_switch = Some(reset);
        }
        if let Some(clear_mode) = self.clear_mode {
            config.navigation.clear_mode = clear_mode;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    match cli.command {
        Some(Command::Routes) => {
            let mut out = io::stdout().lock();
            for route in Route::all() {
                writeln!(out, "{}", route.qualified())?;
            }
            Ok(())
        }
        Some(Command::Replay { json, steps }) => {
            let steps = replay::parse_steps(&steps)?;
            init_tracing(&config.logging.level, &LogTarget::Stderr)?;
            let settings = config.navigator_settings(None);
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            replay::run(&steps, &settings, format, io::stdout().lock())?;
            Ok(())
        }
        None => {
            let log_path = config.logging.file.clone().unwrap_or_else(default_log_path);
            init_tracing(&config.logging.level, &LogTarget::File(log_path))?;
            let width = crossterm::terminal::size().ok().map(|(cols, _)| cols);
            let settings = config.navigator_settings(width);
            stacknav::ui::runtime::run(&settings).context("terminal UI failed")?;
            Ok(())
        }
    }
}
