//! # wndshim
//!
//! A minimal cross-platform windowing shim: one OS window per handle, an
//! explicitly pumped native message queue, and two fail-soft channels, one
//! per-window stream of normalized events and one process-wide stream of
//! diagnostic records.
//!
//! ## Features
//!
//! - **Normalized Events**: close, minimize/restore, resize, and key
//!   messages folded into one small vocabulary
//! - **Diagnostics Channel**: every failure is queued as a record with a
//!   severity code, static message, and reporting call site
//! - **Fatal Latch**: allocation failures and other fatal conditions
//!   permanently degrade the process to a single retrievable backup record
//! - **No Globals**: the error channel is an owned value injected into
//!   every fallible call
//!
//! ## Event Ordering
//!
//! Both channels are stack-backed and drain most-recent-first within a pump
//! pass. Callers that need arrival order must reorder events themselves;
//! nothing here assumes or provides FIFO delivery.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wndshim::prelude::*;
//!
//! fn main() -> Result<(), WindowError> {
//!     let mut errors = ErrorChannel::new();
//!     let mut window = Window::create(&mut errors, "Demo", 800, 600)?;
//!     window.show(&mut errors)?;
//!
//!     while !window.should_close() {
//!         window.pump(&mut errors)?;
//!         while let Some(event) = window.poll_event(&mut errors)? {
//!             if let Event::Key { code: KeyCode::Escape, pressed: true } = event {
//!                 window.request_close();
//!             }
//!         }
//!     }
//!
//!     window.destroy(&mut errors)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::missing_errors_doc)]

pub mod config;
pub mod diag;
pub mod events;
pub mod foundation;
pub mod input;
pub mod window;

pub use diag::{Diagnostic, DiagnosticCode, ErrorChannel, Fatal};
pub use events::{ChannelStats, Event, EventChannel};
pub use input::KeyCode;
pub use window::{Window, WindowError, WindowResult, WindowState};

/// Common imports for shim users
pub mod prelude {
    pub use crate::{
        config::{Config, WindowConfig},
        diag::{Diagnostic, DiagnosticCode, ErrorChannel},
        events::Event,
        input::KeyCode,
        window::{Window, WindowError},
    };
}
