//! Application lifecycle orchestration.
//!
//! This module prints the banner, drives an [`Application`](crate::traits::Application)
//! through its lifecycle, and converts the result into an exit code.

pub mod banner;
pub mod launcher;

pub use banner::Banner;
pub use launcher::{route_panics_to_log, Failure, Launcher, LifecycleStep, Outcome};
