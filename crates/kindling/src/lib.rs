//! Application bootstrap.
//!
//! An application implements the two-phase [`Application`] lifecycle and
//! hands one instance to [`run_application`] from `main`. Errors raised by
//! either phase are caught at that single boundary, logged, and turned
//! into a failing exit status; nothing is re-raised and nothing retries.

use std::process::ExitCode;

/// The two-phase application lifecycle.
///
/// `initialize` runs exactly once before `run`; `run` is only entered if
/// `initialize` succeeded. Both are required.
pub trait Application {
    fn initialize(&mut self) -> anyhow::Result<()>;

    fn run(&mut self) -> anyhow::Result<()>;
}

/// Runs both lifecycle phases inside the top-level failure boundary.
///
/// The first error ends the run: it is emitted as one qualified
/// error-kind log line and reported as `false`. Returns `true` when both
/// phases complete.
pub fn start_application(app: &mut dyn Application) -> bool {
    match app.initialize().and_then(|()| app.run()) {
        Ok(()) => true,
        Err(error) => {
            diag::error!("{error:#}");
            false
        }
    }
}

/// Entry-point wiring: consumes the application instance and maps the
/// outcome of [`start_application`] to the process exit status. The only
/// place the exit status is decided.
pub fn run_application(mut app: impl Application) -> ExitCode {
    if start_application(&mut app) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
