//! The `run` command: launch the stream host.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aether_core::config::AppConfig;
use aether_core::error::ConfigError;
use aether_core::host::{StopSignal, StreamHost};
use aether_core::lifecycle::{route_panics_to_log, Banner, Launcher};
use aether_core::{init_logging, LogLevel, PRODUCT_NAME};
use clap::Args;
use log::{debug, warn};

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Minimum log level (trace, debug, info, warn, error)
    #[clap(long)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the session lock
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Stop after this many seconds instead of waiting for a stop signal
    #[clap(long, value_name = "SECS")]
    pub run_for: Option<u64>,
}

/// Load the configuration file (if any) and apply command-line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    args: &RunArgs,
) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::load_or_default(config_path)?;

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(data_dir) = &args.data_dir {
        config.host.data_dir = data_dir.clone();
    }
    if let Some(secs) = args.run_for {
        config.host.run_for_secs = Some(secs);
    }

    config.validate()?;
    Ok(config)
}

/// The banner for this build.
pub fn banner() -> Banner {
    Banner::new(
        PRODUCT_NAME,
        env!("CARGO_PKG_VERSION"),
        env!("AETHER_BUILD_TIMESTAMP"),
    )
}

/// Implementation of the run command
pub fn execute_run(config_path: Option<&Path>, args: &RunArgs) -> ExitCode {
    let resolved = resolve_config(config_path, args);

    // The flag still applies when the configuration failed to load.
    let level = resolved
        .as_ref()
        .map(|config| config.logging.level)
        .ok()
        .or(args.log_level)
        .unwrap_or_default();
    if let Err(e) = init_logging(level) {
        eprintln!("Logging unavailable: {}", e);
    }
    route_panics_to_log();

    let stop = StopSignal::new();
    let handler_stop = stop.clone();
    // With the `termination` feature this also covers SIGTERM and SIGHUP.
    if let Err(e) = ctrlc::set_handler(move || handler_stop.raise()) {
        warn!("Stop signal handler not installed: {}", e);
    }

    let mut launcher = Launcher::new(banner(), io::stdout(), io::stderr());
    let outcome = launcher.launch(move || {
        let config = resolved?;
        StreamHost::new(config.host, stop)
    });

    debug!("Launch finished: {:?}", outcome);
    outcome.exit_code()
}
