//! # Aether Core
//!
//! `aether_core` provides the process lifecycle for the AetherStream desktop
//! application: a launcher that prints the startup banner, drives one
//! application through initialize, run and shutdown, and maps the result
//! onto an exit code.
//!
//! ## Lifecycle
//!
//! ```text
//! Start → Construct → Initialize ─ false ─→ Exit(1)
//!                          │
//!                        true → Run → Shutdown → Exit(0)
//!
//! any error or panic ───────────────────────────→ Exit(1)
//! ```
//!
//! ## Crate Structure
//!
//! - **error**: Error types for the launcher and host
//! - **traits**: The `Application` capability the launcher drives
//! - **lifecycle**: Banner, launcher and outcome types
//! - **host**: The stream host used by the binary
//! - **config**: TOML configuration
//! - **utils**: Logging helpers

pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod traits;
pub mod utils;

pub use config::{AppConfig, HostConfig, LoggingConfig};
pub use error::{ConfigError, Error, Result, SessionError};
pub use host::{StopSignal, StreamHost};
pub use lifecycle::{Banner, Failure, Launcher, LifecycleStep, Outcome};
pub use traits::Application;
pub use utils::{init_logging, LogLevel};

/// Product name shown in the banner.
pub const PRODUCT_NAME: &str = "AetherStream";
