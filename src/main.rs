//! auto-launcher: discover and launch a project's entry point
//!
//! The first run resolves a command and saves it to the run file; later
//! runs execute the saved command directly.

use anyhow::{Context, Result};
use auto_launcher::domain::{Resolution, ResolvedCommand};
use auto_launcher::services::{self, ProcessService, RunFile};
use auto_launcher::ui::{picker, TerminalPicker};
use auto_launcher::LauncherConfig;
use clap::{Parser, Subcommand};
use std::io;
use std::panic;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "auto-launcher", version, about = "Auto discover and launch executable files")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Arguments forwarded to the launched program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Edit launcher command
    Edit,
    /// Remove launcher command
    Rm,
    /// Build and install the project as NAME
    Build {
        /// Name of the produced executable
        name: String,
    },
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        picker::force_restore_terminal();
        original_hook(panic_info);
    }));
}

/// Resolve the run command if needed, then execute the run file
async fn launch(config: &LauncherConfig, root: &Path, args: &[String]) -> Result<()> {
    let run_file = RunFile::new(&config.run.run_file);

    if !run_file.exists() {
        let mut picker = TerminalPicker::new(&config.ui);
        let resolution = services::resolve(root, &config.skip_config(), &mut picker)
            .context("failed to resolve run command")?;

        match resolution {
            Resolution::Resolved(ResolvedCommand::Run(command)) => run_file.save(&command)?,
            Resolution::Resolved(ResolvedCommand::Build(_)) => {
                anyhow::bail!("run mode resolved to a build command")
            }
            Resolution::Cancelled => return Ok(()),
        }
    }

    ProcessService::run_script(run_file.path(), args).await?;
    Ok(())
}

/// Resolve and execute the build command for the project
async fn build(config: &LauncherConfig, root: &Path, name: &str) -> Result<()> {
    let mut picker = TerminalPicker::new(&config.ui);
    let resolution = services::resolve_build(root, &config.skip_config(), name, &mut picker)
        .context("failed to resolve build command")?;

    match resolution {
        Resolution::Resolved(ResolvedCommand::Build(argv)) => {
            ProcessService::run_argv(&argv).await?;
        }
        Resolution::Resolved(ResolvedCommand::Run(_)) => {
            anyhow::bail!("build mode resolved to a run command")
        }
        Resolution::Cancelled => {}
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    install_panic_hook();

    let cli = Cli::parse();
    let root = Path::new(".");
    let config = LauncherConfig::load_or_default(Some(root));

    tracing::debug!("Loaded configuration: {:?}", config);

    match cli.command {
        None => launch(&config, root, &cli.args).await,
        Some(Command::Edit) => {
            ProcessService::edit(&config.run.editor, &config.run.run_file).await?;
            Ok(())
        }
        Some(Command::Rm) => {
            RunFile::new(&config.run.run_file).remove()?;
            Ok(())
        }
        Some(Command::Build { name }) => build(&config, root, &name).await,
    }
}
