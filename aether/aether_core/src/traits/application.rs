//! Application lifecycle trait definition.
//!
//! # Application Lifecycle
//!
//! The launcher drives a single application through a fixed sequence:
//!
//! - **Initialize**: acquire resources; `Ok(false)` declines to start
//! - **Run**: do the application's work, blocking until it is done
//! - **Shutdown**: release what `initialize` acquired
//!
//! An error at any step aborts the remaining steps.

use crate::error::Result;

/// The capability the launcher drives.
///
/// # Examples
///
/// ```
/// use aether_core::error::Result;
/// use aether_core::traits::Application;
///
/// struct Idle;
///
/// impl Application for Idle {
///     fn initialize(&mut self) -> Result<bool> {
///         Ok(true)
///     }
///
///     fn run(&mut self) -> Result<()> {
///         Ok(())
///     }
///
///     fn shutdown(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Application {
    /// Human-readable name used in log output.
    fn name(&self) -> &str {
        "application"
    }

    /// Prepare the application to run.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The application is ready and `run` may be called.
    /// * `Ok(false)` - The application declined to start. Neither `run`
    ///   nor `shutdown` will be called.
    /// * `Err` if initialization failed with a describable error.
    fn initialize(&mut self) -> Result<bool>;

    /// Run the application until it finishes or is asked to stop.
    fn run(&mut self) -> Result<()>;

    /// Release resources acquired by `initialize`.
    fn shutdown(&mut self) -> Result<()>;
}
