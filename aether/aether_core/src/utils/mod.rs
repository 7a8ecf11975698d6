//! Utility functions and types.
//!
//! This module provides the logging helpers used by the launcher and the CLI.

pub mod logging;

pub use logging::{init_logging, LogLevel};
