//! Exercises every diagnostic kind, ending with a failed assertion that
//! aborts the process.

use std::process::ExitCode;

use kindling::{run_application, Application};

#[derive(Default)]
struct HelloWorld;

impl Application for HelloWorld {
    fn initialize(&mut self) -> anyhow::Result<()> {
        diag::critical!("Critical error message");
        diag::display!("Display message");
        diag::error!("Error message");
        diag::info!("Info message");
        diag::log!("Log message");
        diag::warning!("Warning message");
        diag::trace!("Trace message");
        diag::check!(false, "Assertion error message");
        Ok(())
    }

    fn run(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

fn main() -> ExitCode {
    run_application(HelloWorld)
}
