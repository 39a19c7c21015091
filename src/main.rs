//! `meeting-tasks`: extract your action items from a meeting transcript.
//!
//! Usage:
//!   meeting-tasks <INPUT> [--config PATH] [--model M] [--alias A]... [--output-root DIR] [--no-render] [-v]
//!
//! Results land in `<output-root>/<NNN>_<input stem>/`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meeting_tasks::{run, ConfigOverrides, RunArgs};

/// Extract your tasks from a meeting transcript and draw their dependencies.
#[derive(Parser, Debug)]
#[command(name = "meeting-tasks", version, about)]
struct Cli {
    /// Transcript file to analyse.
    input: PathBuf,

    /// Config file (defaults to ~/.meeting-tasks/config.json when present).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Model to use (overrides the config file).
    #[arg(short = 'm', long = "model")]
    model: Option<String>,

    /// Name the user is addressed by; repeat for several. Replaces configured aliases.
    #[arg(short = 'a', long = "alias")]
    alias: Vec<String>,

    /// Directory for numbered run folders.
    #[arg(short = 'o', long = "output-root")]
    output_root: Option<PathBuf>,

    /// Do not run the external diagram renderer.
    #[arg(long = "no-render")]
    no_render: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let args = RunArgs {
        input: cli.input,
        config_path: cli.config,
        overrides: ConfigOverrides {
            model: cli.model,
            aliases: cli.alias,
            output_root: cli.output_root,
            no_render: cli.no_render,
        },
    };

    Ok(run(args).await)
}
