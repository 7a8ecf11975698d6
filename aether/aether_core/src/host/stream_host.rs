//! The stream host: the default application driven by the `aetherstream`
//! binary.
//!
//! The host owns the process-level concerns of a session: its data
//! directory, the session lock, and a run loop that ends on a stop request
//! or after a configured duration. It performs no media work itself.

use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::session::SessionLock;
use super::stop::StopSignal;
use crate::config::HostConfig;
use crate::error::{Error, Result};
use crate::traits::Application;

/// Host lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// Constructed, nothing acquired yet
    Created,

    /// Session lock held, ready to run
    Ready,

    /// Run loop finished
    Finished,

    /// Session lock released
    Stopped,
}

/// Why the run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop signal was raised
    Requested,

    /// `run_for_secs` elapsed
    DeadlineReached,
}

/// Default [`Application`] for the binary.
pub struct StreamHost {
    config: HostConfig,
    stop: StopSignal,
    session: Option<SessionLock>,
    state: HostState,
    ticks: u64,
    stop_reason: Option<StopReason>,
}

impl StreamHost {
    /// Create a host after validating its configuration.
    pub fn new(config: HostConfig, stop: StopSignal) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stop,
            session: None,
            state: HostState::Created,
            ticks: 0,
            stop_reason: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HostState {
        self.state
    }

    /// Number of completed run loop sleeps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Why the last run ended, if it has.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The held session lock, if any.
    pub fn session(&self) -> Option<&SessionLock> {
        self.session.as_ref()
    }

    fn wait_until_stopped(&mut self) -> StopReason {
        let tick = Duration::from_millis(self.config.tick_interval_ms);
        // A deadline past the end of `Instant` means run until stopped.
        let deadline = self
            .config
            .run_for_secs
            .and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs)));

        loop {
            if self.stop.is_raised() {
                return StopReason::Requested;
            }

            let wait = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return StopReason::DeadlineReached;
                    }
                    tick.min(deadline - now)
                }
                None => tick,
            };

            thread::sleep(wait);
            self.ticks += 1;
        }
    }
}

impl Application for StreamHost {
    fn name(&self) -> &str {
        "stream-host"
    }

    fn initialize(&mut self) -> Result<bool> {
        if self.state != HostState::Created {
            return Err(Error::InvalidState(format!(
                "initialize called in state {:?}",
                self.state
            )));
        }

        let data_dir = &self.config.data_dir;
        fs::create_dir_all(data_dir)?;

        match SessionLock::acquire(data_dir)? {
            Some(lock) => {
                info!(
                    data_dir = %data_dir.display(),
                    session = %lock.record().session_id,
                    "session started"
                );
                self.session = Some(lock);
                self.state = HostState::Ready;
                Ok(true)
            }
            None => {
                match SessionLock::read_holder(data_dir) {
                    Ok(holder) => info!(
                        pid = holder.pid,
                        since = %holder.started_at,
                        "data directory is in use by another session"
                    ),
                    Err(e) => info!(error = %e, "data directory is locked by an unknown session"),
                }
                Ok(false)
            }
        }
    }

    fn run(&mut self) -> Result<()> {
        if self.state != HostState::Ready {
            return Err(Error::InvalidState(format!(
                "run called in state {:?}",
                self.state
            )));
        }

        let started = Instant::now();
        let reason = self.wait_until_stopped();
        info!(
            reason = ?reason,
            elapsed = ?started.elapsed(),
            ticks = self.ticks,
            "run loop finished"
        );

        self.stop_reason = Some(reason);
        self.state = HostState::Finished;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(lock) = self.session.take() {
            lock.release()?;
        } else {
            debug!("shutdown with no session held");
        }
        self.state = HostState::Stopped;
        Ok(())
    }
}
