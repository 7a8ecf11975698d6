//! Lifecycle launcher.
//!
//! Drives one [`Application`] through construct, initialize, run and
//! shutdown, prints the banner around it, and reduces whatever happened to
//! an [`Outcome`] that maps onto a process exit code.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{debug, info};

use super::banner::Banner;
use crate::error::Result;
use crate::traits::Application;

/// Diagnostic written when `initialize` declines to start.
pub const INITIALIZATION_FAILED_MESSAGE: &str = "Application initialization failed.";

/// A step of the lifecycle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    /// The application factory is being called
    Construct,

    /// `Application::initialize`
    Initialize,

    /// `Application::run`
    Run,

    /// `Application::shutdown`
    Shutdown,
}

impl fmt::Display for LifecycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Construct => "construct",
            Self::Initialize => "initialize",
            Self::Run => "run",
            Self::Shutdown => "shutdown",
        };
        f.write_str(name)
    }
}

/// Why a launch failed abnormally.
///
/// Both kinds end the process the same way. They differ only in the
/// diagnostic they print.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// A step returned an error that can describe itself
    #[error("Fatal error: {0}")]
    Described(String),

    /// A step panicked
    #[error("Unknown fatal error.")]
    Unknown,
}

impl Failure {
    fn described(message: impl fmt::Display) -> Self {
        let message = message.to_string();
        let single_line = message
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self::Described(single_line)
    }
}

/// Result of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran and the closing banner was printed
    Completed,

    /// `initialize` returned `false`
    InitializationFailed,

    /// A step failed with an error or a panic
    Failed {
        /// The step that was executing
        step: LifecycleStep,

        /// What went wrong
        failure: Failure,
    },
}

impl Outcome {
    /// Whether the launch completed normally.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Numeric exit status: `0` on success, `1` otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

enum Flow {
    Completed,
    Declined,
}

/// Runs an application lifecycle between an opening and a closing banner.
///
/// `out` receives the banner and `err` receives failure diagnostics.
pub struct Launcher<O: Write, E: Write> {
    banner: Banner,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Launcher<O, E> {
    /// Create a launcher writing to the given streams.
    pub fn new(banner: Banner, out: O, err: E) -> Self {
        Self { banner, out, err }
    }

    /// Construct an application with `factory` and drive it to completion.
    ///
    /// Errors returned by any step become [`Failure::Described`]. Panics
    /// unwinding out of any step are caught and become [`Failure::Unknown`].
    /// No step is ever retried.
    pub fn launch<A, F>(&mut self, factory: F) -> Outcome
    where
        A: Application,
        F: FnOnce() -> Result<A>,
    {
        let _ = self.banner.write_opening(&mut self.out);

        let step = Cell::new(LifecycleStep::Construct);
        let result = panic::catch_unwind(AssertUnwindSafe(|| drive(factory, &step)));

        let outcome = match result {
            Ok(Ok(Flow::Completed)) => Outcome::Completed,
            Ok(Ok(Flow::Declined)) => Outcome::InitializationFailed,
            Ok(Err(e)) => {
                debug!(step = %step.get(), error = ?e, "lifecycle step returned an error");
                Outcome::Failed {
                    step: step.get(),
                    failure: Failure::described(&e),
                }
            }
            Err(payload) => {
                debug!(
                    step = %step.get(),
                    payload = panic_message(payload.as_ref()).unwrap_or("<non-string payload>"),
                    "lifecycle step panicked"
                );
                Outcome::Failed {
                    step: step.get(),
                    failure: Failure::Unknown,
                }
            }
        };

        self.report(&outcome);
        outcome
    }

    /// Consume the launcher and return its streams.
    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }

    fn report(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Completed => {
                let _ = self.banner.write_closing(&mut self.out);
            }
            Outcome::InitializationFailed => {
                let _ = writeln!(self.err, "{}", INITIALIZATION_FAILED_MESSAGE);
            }
            Outcome::Failed { failure, .. } => {
                let _ = writeln!(self.err, "{}", failure);
            }
        }
        let _ = self.err.flush();
    }
}

fn drive<A, F>(factory: F, step: &Cell<LifecycleStep>) -> Result<Flow>
where
    A: Application,
    F: FnOnce() -> Result<A>,
{
    let mut app = factory()?;

    step.set(LifecycleStep::Initialize);
    if !app.initialize()? {
        info!(app = app.name(), "initialization declined");
        return Ok(Flow::Declined);
    }

    step.set(LifecycleStep::Run);
    info!(app = app.name(), "running");
    app.run()?;

    step.set(LifecycleStep::Shutdown);
    app.shutdown()?;
    info!(app = app.name(), "shut down");

    Ok(Flow::Completed)
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

/// Send panic reports to the debug log instead of stderr.
///
/// The launcher prints its own diagnostic for panics, so the default hook's
/// output would be a second, unformatted line on stderr. This replaces the
/// process-wide hook and belongs in `main`, not in library code paths.
pub fn route_panics_to_log() {
    panic::set_hook(Box::new(|info| {
        debug!(panic = %info, "panic captured");
    }));
}
