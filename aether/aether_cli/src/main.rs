use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

use commands::config::{execute_config, ConfigArgs};
use commands::run::{execute_run, RunArgs};

/// AetherStream desktop streaming application
///
/// Runs the stream host when no subcommand is given.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[clap(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the application (default)
    Run(RunArgs),

    /// Print the effective configuration
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        None => execute_run(config_path, &RunArgs::default()),
        Some(Commands::Run(args)) => execute_run(config_path, &args),
        Some(Commands::Config(args)) => match execute_config(config_path, &args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
