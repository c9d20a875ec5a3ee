//! Diagnostic records and the process-wide error channel
//!
//! Failures are reported as small records (a severity code, a static
//! message, and the reporting call site) into an [`ErrorChannel`] the caller
//! owns and drains. Codes at or above [`DiagnosticCode::Fatal`] do not
//! queue: they flip the channel into a permanent degraded state in which a
//! single backup record is the only diagnostic left retrievable, no matter
//! what storage is still usable.
//!
//! The channel is a plain owned value. Anything that can fail takes it as a
//! `&mut` parameter; nothing in this crate reaches for global state. When
//! windows on several threads must share one channel, the caller provides
//! the locking.

use thiserror::Error;

use crate::foundation::collections::{StackBuffer, StorageChange};

/// Severity and category of a diagnostic record
///
/// The variant order is the severity order: every code at or above
/// [`DiagnosticCode::Fatal`] latches the error channel instead of queueing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticCode {
    /// A caller-supplied argument failed validation
    InvalidArgument,
    /// An operation was attempted on a window whose native handle is gone
    InvalidWindow,
    /// The platform layer failed to initialize or produce a window
    WindowCreation,
    /// Generic fatal condition; the latch threshold
    Fatal,
    /// The allocator refused a channel reallocation
    OutOfMemory,
}

impl DiagnosticCode {
    /// Check whether this code latches the channel instead of queueing
    pub fn is_fatal(self) -> bool {
        self >= Self::Fatal
    }
}

/// A single diagnostic record: what went wrong, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity and category
    pub code: DiagnosticCode,
    /// Human-readable description, always a static string
    pub message: &'static str,
    /// Identifier of the reporting call site, e.g. `"Window::create"`
    pub origin: &'static str,
}

/// Signal that the process-wide fatal latch is set
///
/// Gated operations return this instead of doing work once a fatal
/// diagnostic has been reported. The cause is retrievable through
/// [`ErrorChannel::pop`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a fatal diagnostic has been reported; pop the error channel for the cause")]
pub struct Fatal;

/// Fail-soft diagnostics stream with a fatal latch
///
/// Records drain most-recent-first, so the latest failure is the first one
/// a debugging caller sees. Reporting a fatal code collapses the channel to
/// a single preallocated backup slot, keeping the cause retrievable even
/// when the dynamic buffer is exactly what failed.
#[derive(Debug)]
pub struct ErrorChannel {
    buffer: StackBuffer<Diagnostic>,
    backup: Option<Diagnostic>,
}

impl ErrorChannel {
    /// Create a channel with no queued records and the latch unset
    pub const fn new() -> Self {
        Self {
            buffer: StackBuffer::new(),
            backup: None,
        }
    }

    /// Check whether a fatal diagnostic has latched the channel
    pub fn is_fatal(&self) -> bool {
        self.backup.is_some()
    }

    /// Number of queued records
    ///
    /// Queued records become unreachable once the latch is set; the count
    /// still reflects them.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether no records are queued
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Report a failure
    ///
    /// Codes at or above the fatal threshold set the latch and become the
    /// permanent backup record instead of queueing; later reports of any
    /// kind are ignored. When the queue itself cannot grow, an
    /// [`DiagnosticCode::OutOfMemory`] record is reported in its place,
    /// which latches.
    pub fn report(&mut self, code: DiagnosticCode, message: &'static str, origin: &'static str) {
        if self.is_fatal() {
            return;
        }
        let record = Diagnostic {
            code,
            message,
            origin,
        };
        if code.is_fatal() {
            log::error!("fatal diagnostic latched from {}: {}", origin, message);
            self.backup = Some(record);
            return;
        }
        log::debug!("diagnostic from {}: {}", origin, message);
        match self.buffer.push(record) {
            StorageChange::AllocFailed => {
                self.report(
                    DiagnosticCode::OutOfMemory,
                    "out of memory",
                    "ErrorChannel::report",
                );
            }
            StorageChange::Allocated | StorageChange::Reallocated => {
                log::trace!("error channel capacity now {}", self.buffer.capacity());
            }
            StorageChange::None => {}
        }
    }

    /// Retrieve the most recent record
    ///
    /// Once the latch is set this returns the backup record on every call,
    /// forever; drain loops that pop until `None` must re-check
    /// [`Self::is_fatal`] between pops, since a refused shrink can latch the
    /// channel mid-drain. An empty, unlatched channel yields `None`.
    pub fn pop(&mut self) -> Option<Diagnostic> {
        if let Some(backup) = self.backup {
            return Some(backup);
        }
        let (record, change) = self.buffer.pop()?;
        if change == StorageChange::AllocFailed {
            self.report(
                DiagnosticCode::OutOfMemory,
                "out of memory",
                "ErrorChannel::pop",
            );
        }
        Some(record)
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_drains_most_recent_first() {
        let mut errors = ErrorChannel::new();
        errors.report(DiagnosticCode::InvalidArgument, "first", "test");
        errors.report(DiagnosticCode::InvalidWindow, "second", "test");
        errors.report(DiagnosticCode::WindowCreation, "third", "test");
        assert_eq!(errors.pop().map(|d| d.message), Some("third"));
        assert_eq!(errors.pop().map(|d| d.message), Some("second"));
        assert_eq!(errors.pop().map(|d| d.message), Some("first"));
        assert!(errors.pop().is_none());
    }

    #[test]
    fn test_empty_pop_is_not_an_error() {
        let mut errors = ErrorChannel::new();
        assert!(errors.pop().is_none());
        assert!(!errors.is_fatal());
    }

    #[test]
    fn test_fatal_report_latches() {
        let mut errors = ErrorChannel::new();
        errors.report(DiagnosticCode::OutOfMemory, "boom", "test");
        assert!(errors.is_fatal());
        let record = errors.pop().unwrap();
        assert_eq!(record.code, DiagnosticCode::OutOfMemory);
        assert_eq!(record.message, "boom");
        // the backup record is never consumed; a pop loop can never run dry
        for _ in 0..100 {
            assert_eq!(errors.pop(), Some(record));
        }
    }

    #[test]
    fn test_latch_ignores_later_reports() {
        let mut errors = ErrorChannel::new();
        errors.report(DiagnosticCode::Fatal, "original cause", "test");
        errors.report(DiagnosticCode::Fatal, "later fatal", "test");
        errors.report(DiagnosticCode::InvalidArgument, "later warning", "test");
        assert_eq!(errors.pop().map(|d| d.message), Some("original cause"));
    }

    #[test]
    fn test_latch_hides_queued_records() {
        let mut errors = ErrorChannel::new();
        errors.report(DiagnosticCode::InvalidArgument, "queued", "test");
        errors.report(DiagnosticCode::Fatal, "boom", "test");
        // the earlier record stays buffered but can no longer be reached
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.pop().map(|d| d.message), Some("boom"));
        assert_eq!(errors.pop().map(|d| d.message), Some("boom"));
    }

    #[test]
    fn test_code_severity_ordering() {
        assert!(DiagnosticCode::InvalidArgument < DiagnosticCode::Fatal);
        assert!(DiagnosticCode::InvalidWindow < DiagnosticCode::Fatal);
        assert!(DiagnosticCode::WindowCreation < DiagnosticCode::Fatal);
        assert!(!DiagnosticCode::InvalidArgument.is_fatal());
        assert!(DiagnosticCode::Fatal.is_fatal());
        assert!(DiagnosticCode::OutOfMemory.is_fatal());
    }
}
