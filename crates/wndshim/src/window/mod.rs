//! Window management subsystem
//!
//! One native window per [`Window`], pumped explicitly by the caller. Each
//! pump pass drains the native message queue through a translation state
//! machine into a per-window event channel:
//!
//! ```text
//! native queue ──pump()──▶ WindowState::translate ──▶ EventChannel
//!                                                        │
//!                                  caller ◀──poll_event()─┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: application-facing window facade over GLFW
//! - **`state`**: per-window translation state machine for raw messages
//!
//! Failures surface twice: as a typed error on the call itself and as a
//! diagnostic record in the caller's error channel.

pub mod handle;
pub mod state;

// Re-export the main public types for convenience
pub use handle::{Window, WindowError, WindowResult};
pub use state::WindowState;
