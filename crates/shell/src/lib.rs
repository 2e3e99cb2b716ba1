//! A thin wrapper over the platform windowing system.
//!
//! Samples drive their window directly in a poll loop instead of handing
//! control to an event-loop callback:
//!
//! ```no_run
//! # use shell::{Window, WindowConfig};
//! let mut window = Window::new(&WindowConfig::default()).unwrap();
//! while !window.wants_exit() {
//!     window.poll_events();
//! }
//! ```
//!
//! Input events are discarded; only close requests are tracked. A graphics
//! API can bind to the window through its raw window and display handles.

use raw_window_handle::{
    HasRawDisplayHandle, HasRawWindowHandle, RawDisplayHandle, RawWindowHandle,
};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    platform::run_return::EventLoopExtRunReturn,
};

bitflags::bitflags! {
    pub struct WindowFlags: u32 {
        const RESIZABLE = 0x1;
        const VISIBLE = 0x2;
        const ALWAYS_ON_TOP = 0x4;
    }
}

impl Default for WindowFlags {
    fn default() -> Self {
        WindowFlags::RESIZABLE | WindowFlags::VISIBLE
    }
}

/// A description of the window to create.
pub struct WindowConfig<'a> {
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    pub flags: WindowFlags,
}

impl Default for WindowConfig<'_> {
    fn default() -> Self {
        Self {
            title: "untitled",
            width: 800,
            height: 600,
            flags: WindowFlags::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to create native window: {0}")]
    Creation(#[from] winit::error::OsError),
}

/// A native window and its event loop.
///
/// Owns the platform resources exclusively; dropping the window releases
/// them. One window per process is assumed.
pub struct Window {
    event_loop: EventLoop<()>,
    window: winit::window::Window,
    title: String,
    wants_exit: bool,
}

impl Window {
    pub fn new(config: &WindowConfig) -> Result<Self, WindowError> {
        let event_loop = EventLoop::new();

        let window = winit::window::WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.flags.contains(WindowFlags::RESIZABLE))
            .with_visible(config.flags.contains(WindowFlags::VISIBLE))
            .with_always_on_top(config.flags.contains(WindowFlags::ALWAYS_ON_TOP))
            .build(&event_loop)?;

        Ok(Self {
            event_loop,
            window,
            title: config.title.to_owned(),
            wants_exit: false,
        })
    }

    /// Drains pending OS events without blocking and returns. Close
    /// requests are recorded for [`wants_exit`](Self::wants_exit).
    pub fn poll_events(&mut self) {
        let Self {
            event_loop,
            wants_exit,
            ..
        } = self;

        event_loop.run_return(|event, _, control_flow| {
            control_flow.set_poll();

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => *wants_exit = true,
                // All queued events have been dispatched; hand control
                // back to the caller's loop.
                Event::MainEventsCleared => control_flow.set_exit(),
                _ => {}
            }
        });
    }

    /// Returns true once the user has asked to close the window.
    #[must_use]
    pub fn wants_exit(&self) -> bool {
        self.wants_exit
    }

    pub fn set_title(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
        self.window.set_title(title);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The window's inner size in physical pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

unsafe impl HasRawWindowHandle for Window {
    fn raw_window_handle(&self) -> RawWindowHandle {
        self.window.raw_window_handle()
    }
}

unsafe impl HasRawDisplayHandle for Window {
    fn raw_display_handle(&self) -> RawDisplayHandle {
        self.window.raw_display_handle()
    }
}
