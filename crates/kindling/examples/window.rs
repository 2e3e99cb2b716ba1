//! Opens a window and polls events until the user closes it.

use std::process::ExitCode;

use anyhow::anyhow;
use kindling::{run_application, Application};
use shell::{Window, WindowConfig};

#[derive(Default)]
struct BasicWindow {
    window: Option<Window>,
}

impl Application for BasicWindow {
    fn initialize(&mut self) -> anyhow::Result<()> {
        let window = Window::new(&WindowConfig {
            title: "Hello Window",
            width: 800,
            height: 600,
            ..WindowConfig::default()
        })?;

        self.window = Some(window);
        Ok(())
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let window = self
            .window
            .as_mut()
            .ok_or_else(|| anyhow!("window was not created"))?;

        while !window.wants_exit() {
            window.poll_events();
        }

        Ok(())
    }
}

fn main() -> ExitCode {
    run_application(BasicWindow::default())
}
