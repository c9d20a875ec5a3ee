//! Normalized window events and the per-window event channel
//!
//! Raw platform messages are translated (see [`crate::window::WindowState`])
//! into the small [`Event`] vocabulary here and buffered per window in an
//! [`EventChannel`]. The channel lives for exactly one pump pass at a time:
//! [`EventChannel::begin_pump`] discards whatever the caller did not drain,
//! the pump pushes, and the caller polls until the soft-empty signal.
//!
//! The channel is stack-backed, so within one pass events drain in reverse
//! arrival order. Callers that need arrival order must not assume it here;
//! see the crate-level documentation.

use crate::diag::{DiagnosticCode, ErrorChannel, Fatal};
use crate::foundation::collections::{StackBuffer, StorageChange};
use crate::input::KeyCode;

/// A platform-independent window occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user asked the window to close; the window itself is still alive
    Close,
    /// The window was minimized, or was just restored from a minimize (the
    /// restore frame reports a second `Minimize`, not a `Resize`)
    Minimize,
    /// The client area changed size; query the window for the dimensions
    Resize,
    /// A key changed state
    Key {
        /// Normalized key code
        code: KeyCode,
        /// `true` for press and autorepeat, `false` for release
        pressed: bool,
    },
}

/// Shrink-policy bookkeeping carried by the event channel
///
/// Both counters reset whenever the backing storage moves. They are surfaced
/// purely as instrumentation; nothing in the channel gates on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Pops and initial growths since the backing storage last moved
    pub ops_since_realloc: u32,
    /// Events left queued at the end of pump passes since the storage last
    /// moved
    pub events_since_realloc: u32,
}

/// Per-window queue of normalized events for one pump pass
///
/// Every operation is gated on the process-wide fatal latch: once the
/// supplied [`ErrorChannel`] is latched the channel refuses work and
/// answers [`Fatal`].
#[derive(Debug)]
pub struct EventChannel {
    buffer: StackBuffer<Event>,
    stats: ChannelStats,
}

impl EventChannel {
    /// Create an empty channel
    pub const fn new() -> Self {
        Self {
            buffer: StackBuffer::new(),
            stats: ChannelStats {
                ops_since_realloc: 0,
                events_since_realloc: 0,
            },
        }
    }

    /// Reset the channel for a fresh pump pass
    ///
    /// Events left over from the previous pass are discarded; capacity is
    /// kept. Returns [`Fatal`] without touching the queue once the latch is
    /// set.
    pub fn begin_pump(&mut self, errors: &ErrorChannel) -> Result<(), Fatal> {
        if errors.is_fatal() {
            return Err(Fatal);
        }
        self.buffer.clear();
        Ok(())
    }

    /// Queue one translated event
    ///
    /// The event is dropped and [`Fatal`] returned when the latch is already
    /// set, or when growing the queue fails; the allocation failure is
    /// reported to `errors` as [`DiagnosticCode::OutOfMemory`], which
    /// latches.
    pub fn push(&mut self, event: Event, errors: &mut ErrorChannel) -> Result<(), Fatal> {
        if errors.is_fatal() {
            return Err(Fatal);
        }
        match self.buffer.push(event) {
            StorageChange::AllocFailed => {
                errors.report(
                    DiagnosticCode::OutOfMemory,
                    "out of memory",
                    "EventChannel::push",
                );
                Err(Fatal)
            }
            StorageChange::Allocated => {
                self.stats.ops_since_realloc = self.stats.ops_since_realloc.saturating_add(1);
                Ok(())
            }
            StorageChange::Reallocated => {
                log::trace!("event channel capacity now {}", self.buffer.capacity());
                self.stats = ChannelStats::default();
                Ok(())
            }
            StorageChange::None => Ok(()),
        }
    }

    /// Drain one event from the current pass
    ///
    /// `Ok(None)` is the soft-empty signal that terminates a drain loop, not
    /// a failure. Events come out most-recent-first. A shrink refused by the
    /// allocator still yields the event, then latches the error channel.
    pub fn poll(&mut self, errors: &mut ErrorChannel) -> Result<Option<Event>, Fatal> {
        if errors.is_fatal() {
            return Err(Fatal);
        }
        match self.buffer.pop() {
            None => Ok(None),
            Some((event, change)) => {
                self.stats.ops_since_realloc = self.stats.ops_since_realloc.saturating_add(1);
                match change {
                    StorageChange::Reallocated => {
                        log::trace!("event channel capacity now {}", self.buffer.capacity());
                        self.stats = ChannelStats::default();
                    }
                    StorageChange::AllocFailed => {
                        errors.report(
                            DiagnosticCode::OutOfMemory,
                            "out of memory",
                            "EventChannel::poll",
                        );
                    }
                    _ => {}
                }
                Ok(Some(event))
            }
        }
    }

    /// Fold the pass's leftover queue length into the stats
    ///
    /// Called by the window facade after the native queue is drained.
    pub(crate) fn end_pump(&mut self) {
        let queued = self.buffer.len() as u32;
        self.stats.events_since_realloc =
            self.stats.events_since_realloc.saturating_add(queued);
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether no events are queued
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Allocated queue slots
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Current bookkeeping counters
    pub fn stats(&self) -> ChannelStats {
        self.stats
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}
