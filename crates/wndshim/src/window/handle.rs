//! GLFW-backed window facade
//!
//! Thin glue over the platform layer: creates the native window, drives its
//! message pump, and feeds raw messages through the translation state
//! machine into the per-window event channel. Every failure path reports a
//! diagnostic to the caller's [`ErrorChannel`] in addition to returning a
//! typed error.

use thiserror::Error;

use crate::diag::{DiagnosticCode, ErrorChannel, Fatal};
use crate::events::{ChannelStats, Event, EventChannel};
use crate::window::state::WindowState;

/// Window management errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// GLFW refused to create the native window
    #[error("window creation failed")]
    CreationFailed,

    /// An argument failed validation before touching the platform layer
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The native window handle is gone
    #[error("window handle is no longer valid")]
    InvalidWindow,

    /// The process-wide fatal latch is set; no work was attempted
    #[error("a fatal diagnostic has been reported; pop the error channel for the cause")]
    Fatal,
}

impl From<Fatal> for WindowError {
    fn from(_: Fatal) -> Self {
        Self::Fatal
    }
}

/// Convenience alias for window operation results
pub type WindowResult<T> = Result<T, WindowError>;

/// An OS window plus its pump state and per-window event queue
///
/// The window owns its native handle for its whole life; [`Window::destroy`]
/// releases it early and leaves the value behind as a guard that reports
/// any further use. Dropping an undestroyed window releases the handle
/// silently.
pub struct Window {
    glfw: glfw::Glfw,
    native: Option<glfw::PWindow>,
    receiver: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    state: WindowState,
    events: EventChannel,
    visible: bool,
}

impl Window {
    /// Create a hidden window with the given title and client size
    ///
    /// The window stays hidden until [`Window::show`]. Dimension validation
    /// happens before the platform layer is touched; every failure is
    /// reported to `errors` as well as returned.
    pub fn create(
        errors: &mut ErrorChannel,
        title: &str,
        width: u32,
        height: u32,
    ) -> WindowResult<Self> {
        if errors.is_fatal() {
            return Err(WindowError::Fatal);
        }

        if let Err(message) = validate_dimensions(width, height) {
            errors.report(DiagnosticCode::InvalidArgument, message, "Window::create");
            return Err(WindowError::InvalidArgument(message));
        }

        let mut glfw = glfw::init(glfw::fail_on_errors).map_err(|_| {
            errors.report(
                DiagnosticCode::WindowCreation,
                "failed to initialize GLFW",
                "Window::create",
            );
            WindowError::InitializationFailed
        })?;

        // No rendering surface is managed here; the window is bare
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(true));
        glfw.window_hint(glfw::WindowHint::Visible(false));

        let (mut native, receiver) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                errors.report(
                    DiagnosticCode::WindowCreation,
                    "failed to create window",
                    "Window::create",
                );
                WindowError::CreationFailed
            })?;

        // Subscribe to exactly the messages the translator understands
        native.set_key_polling(true);
        native.set_close_polling(true);
        native.set_size_polling(true);

        log::debug!("created window \"{}\" ({}x{})", title, width, height);

        Ok(Self {
            glfw,
            native: Some(native),
            receiver,
            state: WindowState::new(width, height),
            events: EventChannel::new(),
            visible: false,
        })
    }

    /// Release the native window
    ///
    /// Deliberately not gated on the fatal latch, so cleanup always runs.
    /// The window is marked closed; destroying a second time reports
    /// [`DiagnosticCode::InvalidWindow`] and fails.
    pub fn destroy(&mut self, errors: &mut ErrorChannel) -> WindowResult<()> {
        match self.native.take() {
            Some(native) => {
                self.state.mark_closed();
                self.visible = false;
                drop(native);
                log::debug!("destroyed window");
                Ok(())
            }
            None => {
                errors.report(
                    DiagnosticCode::InvalidWindow,
                    "window handle is no longer valid",
                    "Window::destroy",
                );
                Err(WindowError::InvalidWindow)
            }
        }
    }

    /// Drain the native message queue into the event channel
    ///
    /// Events still queued from the previous pass are discarded first; a
    /// caller that wants them must poll before pumping again. Only messages
    /// already queued are processed, so the call never blocks.
    pub fn pump(&mut self, errors: &mut ErrorChannel) -> WindowResult<()> {
        if errors.is_fatal() {
            return Err(WindowError::Fatal);
        }
        if self.native.is_none() {
            errors.report(
                DiagnosticCode::InvalidWindow,
                "window handle is no longer valid",
                "Window::pump",
            );
            return Err(WindowError::InvalidWindow);
        }

        self.events.begin_pump(errors)?;
        self.glfw.poll_events();
        for (_, message) in glfw::flush_messages(&self.receiver) {
            if let Some(event) = self.state.translate(&message) {
                // a push refused mid-pass latches the channel; keep draining
                // so the native queue still empties
                let _ = self.events.push(event, errors);
            }
        }
        self.events.end_pump();
        Ok(())
    }

    /// Drain one normalized event from the current pump pass
    ///
    /// `Ok(None)` is the soft-empty signal that ends a drain loop. Events
    /// arrive most-recent-first; see [`EventChannel::poll`].
    pub fn poll_event(&mut self, errors: &mut ErrorChannel) -> WindowResult<Option<Event>> {
        if errors.is_fatal() {
            return Err(WindowError::Fatal);
        }
        if self.native.is_none() {
            errors.report(
                DiagnosticCode::InvalidWindow,
                "window handle is no longer valid",
                "Window::poll_event",
            );
            return Err(WindowError::InvalidWindow);
        }
        Ok(self.events.poll(errors)?)
    }

    /// Reveal the window; does nothing if it is already visible
    pub fn show(&mut self, errors: &mut ErrorChannel) -> WindowResult<()> {
        if errors.is_fatal() {
            return Err(WindowError::Fatal);
        }
        match self.native.as_mut() {
            Some(native) => {
                if !self.visible {
                    native.show();
                    self.visible = true;
                }
                Ok(())
            }
            None => {
                errors.report(
                    DiagnosticCode::InvalidWindow,
                    "window handle is no longer valid",
                    "Window::show",
                );
                Err(WindowError::InvalidWindow)
            }
        }
    }

    /// Hide the window; does nothing if it is already hidden
    pub fn hide(&mut self, errors: &mut ErrorChannel) -> WindowResult<()> {
        if errors.is_fatal() {
            return Err(WindowError::Fatal);
        }
        match self.native.as_mut() {
            Some(native) => {
                if self.visible {
                    native.hide();
                    self.visible = false;
                }
                Ok(())
            }
            None => {
                errors.report(
                    DiagnosticCode::InvalidWindow,
                    "window handle is no longer valid",
                    "Window::hide",
                );
                Err(WindowError::InvalidWindow)
            }
        }
    }

    /// Last reported client size; reads 0x0 while minimized
    pub fn size(&self) -> (u32, u32) {
        self.state.size()
    }

    /// Check whether the window was destroyed or a close was requested
    pub fn should_close(&self) -> bool {
        self.state.closed()
    }

    /// Ask the pump loop to stop; terminal, cannot be unset
    pub fn request_close(&mut self) {
        self.state.mark_closed();
    }

    /// Check whether the window is currently minimized
    pub fn is_minimized(&self) -> bool {
        self.state.is_minimized()
    }

    /// Check whether the window is currently shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Event-channel bookkeeping counters, for instrumentation
    pub fn event_stats(&self) -> ChannelStats {
        self.events.stats()
    }
}

/// Argument validation shared by the window construction paths
fn validate_dimensions(width: u32, height: u32) -> Result<(), &'static str> {
    if width == 0 {
        return Err("width must be greater than 0");
    }
    if height == 0 {
        return Err("height must be greater than 0");
    }
    Ok(())
}
