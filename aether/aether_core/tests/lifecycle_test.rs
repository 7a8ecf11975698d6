//! Integration tests for the launcher.
//!
//! These drive scripted applications through the launcher and check the
//! call sequence, the printed output and the exit status together.

use std::cell::RefCell;
use std::rc::Rc;

use aether_core::error::{Error, Result};
use aether_core::lifecycle::{Banner, Failure, Launcher, LifecycleStep, Outcome};
use aether_core::Application;

/// What a scripted step should do.
#[derive(Clone, Copy, PartialEq)]
enum Behavior {
    Succeed,
    Decline,
    Fail,
    Panic,
}

/// Records every lifecycle call into a shared log.
struct Scripted {
    calls: Rc<RefCell<Vec<&'static str>>>,
    initialize: Behavior,
    run: Behavior,
    shutdown: Behavior,
}

impl Scripted {
    fn new(calls: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            calls: Rc::clone(calls),
            initialize: Behavior::Succeed,
            run: Behavior::Succeed,
            shutdown: Behavior::Succeed,
        }
    }

    fn with(mut self, step: LifecycleStep, behavior: Behavior) -> Self {
        match step {
            LifecycleStep::Initialize => self.initialize = behavior,
            LifecycleStep::Run => self.run = behavior,
            LifecycleStep::Shutdown => self.shutdown = behavior,
            LifecycleStep::Construct => unreachable!("construction is scripted by the factory"),
        }
        self
    }

    fn act(&self, name: &'static str, behavior: Behavior) -> Result<()> {
        self.calls.borrow_mut().push(name);
        match behavior {
            Behavior::Succeed | Behavior::Decline => Ok(()),
            Behavior::Fail => Err(Error::Runtime(format!("{} exploded", name))),
            Behavior::Panic => panic!("{} panicked", name),
        }
    }
}

impl Application for Scripted {
    fn initialize(&mut self) -> Result<bool> {
        self.act("initialize", self.initialize)?;
        Ok(self.initialize != Behavior::Decline)
    }

    fn run(&mut self) -> Result<()> {
        self.act("run", self.run)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.act("shutdown", self.shutdown)
    }
}

struct Captured {
    outcome: Outcome,
    stdout: String,
    stderr: String,
}

fn launch<F>(factory: F) -> Captured
where
    F: FnOnce() -> Result<Scripted>,
{
    let banner = Banner::new("AetherStream", "1.0.0", "Oct 14 2026 12:00:00");
    let mut launcher = Launcher::new(banner, Vec::new(), Vec::new());
    let outcome = launcher.launch(factory);
    let (out, err) = launcher.into_streams();
    Captured {
        outcome,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn calls() -> Rc<RefCell<Vec<&'static str>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn test_success_runs_each_step_once_in_order() {
    let log = calls();
    let result = launch(|| Ok(Scripted::new(&log)));

    assert_eq!(result.outcome, Outcome::Completed);
    assert_eq!(result.outcome.exit_status(), 0);
    assert_eq!(*log.borrow(), vec!["initialize", "run", "shutdown"]);
    assert!(result.stderr.is_empty());

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "=== AetherStream - Desktop Streaming Application ===",
            "Version: 1.0.0",
            "Built: Oct 14 2026 12:00:00",
            "",
            "=== AetherStream - Application closed ===",
        ]
    );
}

#[test]
fn test_declined_initialize_skips_run_and_shutdown() {
    let log = calls();
    let result =
        launch(|| Ok(Scripted::new(&log).with(LifecycleStep::Initialize, Behavior::Decline)));

    assert_eq!(result.outcome, Outcome::InitializationFailed);
    assert_eq!(result.outcome.exit_status(), 1);
    assert_eq!(*log.borrow(), vec!["initialize"]);
    assert_eq!(result.stderr, "Application initialization failed.\n");
    assert!(result.stdout.starts_with("=== AetherStream - Desktop Streaming Application ==="));
    assert!(!result.stdout.contains("Application closed"));
}

#[test]
fn test_errors_are_described_at_every_step() {
    let cases = [
        (LifecycleStep::Initialize, vec!["initialize"]),
        (LifecycleStep::Run, vec!["initialize", "run"]),
        (LifecycleStep::Shutdown, vec!["initialize", "run", "shutdown"]),
    ];

    for (step, expected_calls) in cases {
        let log = calls();
        let result = launch(|| Ok(Scripted::new(&log).with(step, Behavior::Fail)));

        let expected_message = format!("Runtime error: {} exploded", step);
        assert_eq!(
            result.outcome,
            Outcome::Failed {
                step,
                failure: Failure::Described(expected_message.clone()),
            }
        );
        assert_eq!(result.outcome.exit_status(), 1);
        assert_eq!(*log.borrow(), expected_calls);
        assert_eq!(result.stderr, format!("Fatal error: {}\n", expected_message));
        assert!(!result.stdout.contains("Application closed"));
    }
}

#[test]
fn test_panics_are_unknown_failures_at_every_step() {
    let cases = [
        (LifecycleStep::Initialize, vec!["initialize"]),
        (LifecycleStep::Run, vec!["initialize", "run"]),
        (LifecycleStep::Shutdown, vec!["initialize", "run", "shutdown"]),
    ];

    for (step, expected_calls) in cases {
        let log = calls();
        let result = launch(|| Ok(Scripted::new(&log).with(step, Behavior::Panic)));

        assert_eq!(
            result.outcome,
            Outcome::Failed {
                step,
                failure: Failure::Unknown,
            }
        );
        assert_eq!(result.outcome.exit_status(), 1);
        assert_eq!(*log.borrow(), expected_calls);
        assert_eq!(result.stderr, "Unknown fatal error.\n");
        assert!(!result.stderr.contains("Fatal error:"));
        assert!(!result.stdout.contains("Application closed"));
    }
}

#[test]
fn test_construction_failure_calls_nothing() {
    let log = calls();
    let result = launch(|| Err(Error::Runtime("display unavailable".into())));

    assert_eq!(
        result.outcome,
        Outcome::Failed {
            step: LifecycleStep::Construct,
            failure: Failure::Described("Runtime error: display unavailable".into()),
        }
    );
    assert!(log.borrow().is_empty());
    assert_eq!(result.stderr, "Fatal error: Runtime error: display unavailable\n");
}

#[test]
fn test_construction_panic_is_unknown() {
    let result = launch(|| panic!("factory blew up"));

    assert_eq!(
        result.outcome,
        Outcome::Failed {
            step: LifecycleStep::Construct,
            failure: Failure::Unknown,
        }
    );
    assert_eq!(result.stderr, "Unknown fatal error.\n");
}
