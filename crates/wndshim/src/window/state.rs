//! Message translation state machine
//!
//! One raw platform message in, zero or one normalized [`Event`] out. The
//! state lives on the window because size messages are ambiguous on their
//! own: a 0x0 client area means the window was minimized, and the first
//! non-zero size afterwards is the restore frame, which callers want
//! reported as the end of the minimize rather than as a spurious resize.

use glfw::{Action, WindowEvent};

use crate::events::Event;
use crate::input::KeyCode;

/// Per-window translation state
///
/// Holds the last reported client size plus the minimize and close flags
/// that disambiguate size messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    width: u32,
    height: u32,
    minimized: bool,
    closed: bool,
}

impl WindowState {
    /// State for a freshly created window of the given client size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            minimized: false,
            closed: false,
        }
    }

    /// Translate one raw platform message into at most one normalized event
    ///
    /// Close requests map to [`Event::Close`]. Size messages update the
    /// stored client size and then classify: a 0x0 area is a minimize, the
    /// first non-zero area after one is the restore frame (reported as a
    /// second [`Event::Minimize`], suppressing the resize), and anything
    /// else is a plain [`Event::Resize`]. Key messages map through the
    /// normalization table. Every other message was already handled by the
    /// platform layer and produces nothing.
    pub fn translate(&mut self, message: &WindowEvent) -> Option<Event> {
        match *message {
            WindowEvent::Close => Some(Event::Close),
            WindowEvent::Size(width, height) => {
                self.width = width.max(0) as u32;
                self.height = height.max(0) as u32;

                if self.width == 0 && self.height == 0 {
                    self.minimized = true;
                    return Some(Event::Minimize);
                }
                if self.minimized {
                    // restore frame: report the toggle, suppress the resize
                    self.minimized = false;
                    return Some(Event::Minimize);
                }
                Some(Event::Resize)
            }
            WindowEvent::Key(key, _, action, _) => Some(Event::Key {
                code: KeyCode::from(key),
                pressed: matches!(action, Action::Press | Action::Repeat),
            }),
            _ => None,
        }
    }

    /// Last reported client size; reads 0x0 while minimized
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether the window is currently minimized
    pub const fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Check whether the window was closed; terminal once set
    pub const fn closed(&self) -> bool {
        self.closed
    }

    /// Mark the window as closed; no further pumping is meaningful
    pub fn mark_closed(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::Modifiers;

    fn key_message(key: glfw::Key, action: Action) -> WindowEvent {
        WindowEvent::Key(key, 0, action, Modifiers::empty())
    }

    #[test]
    fn test_close_message_maps_to_close_event() {
        let mut state = WindowState::new(800, 600);
        assert_eq!(state.translate(&WindowEvent::Close), Some(Event::Close));
        // a close request is not a closed window
        assert!(!state.closed());
    }

    #[test]
    fn test_plain_resize() {
        let mut state = WindowState::new(800, 600);
        let event = state.translate(&WindowEvent::Size(1024, 768));
        assert_eq!(event, Some(Event::Resize));
        assert_eq!(state.size(), (1024, 768));
        assert!(!state.is_minimized());
    }

    #[test]
    fn test_minimize_then_restore_reports_two_minimizes() {
        let mut state = WindowState::new(800, 600);

        let event = state.translate(&WindowEvent::Size(0, 0));
        assert_eq!(event, Some(Event::Minimize));
        assert!(state.is_minimized());
        assert_eq!(state.size(), (0, 0));

        let event = state.translate(&WindowEvent::Size(800, 600));
        assert_eq!(event, Some(Event::Minimize));
        assert!(!state.is_minimized());
        assert_eq!(state.size(), (800, 600));

        // the restore consumed the suppression; this one is a real resize
        let event = state.translate(&WindowEvent::Size(640, 480));
        assert_eq!(event, Some(Event::Resize));
    }

    #[test]
    fn test_repeated_minimize_messages() {
        let mut state = WindowState::new(800, 600);
        assert_eq!(state.translate(&WindowEvent::Size(0, 0)), Some(Event::Minimize));
        assert_eq!(state.translate(&WindowEvent::Size(0, 0)), Some(Event::Minimize));
        assert!(state.is_minimized());
    }

    #[test]
    fn test_key_press_release_and_repeat() {
        let mut state = WindowState::new(800, 600);

        let event = state.translate(&key_message(glfw::Key::W, Action::Press));
        assert_eq!(
            event,
            Some(Event::Key {
                code: KeyCode::W,
                pressed: true
            })
        );

        let event = state.translate(&key_message(glfw::Key::W, Action::Release));
        assert_eq!(
            event,
            Some(Event::Key {
                code: KeyCode::W,
                pressed: false
            })
        );

        let event = state.translate(&key_message(glfw::Key::W, Action::Repeat));
        assert_eq!(
            event,
            Some(Event::Key {
                code: KeyCode::W,
                pressed: true
            })
        );
    }

    #[test]
    fn test_unmapped_key_reports_the_sentinel() {
        let mut state = WindowState::new(800, 600);
        let event = state.translate(&key_message(glfw::Key::Tab, Action::Press));
        assert_eq!(
            event,
            Some(Event::Key {
                code: KeyCode::Unknown,
                pressed: true
            })
        );
    }

    #[test]
    fn test_unrelated_messages_produce_nothing() {
        let mut state = WindowState::new(800, 600);
        assert_eq!(state.translate(&WindowEvent::Refresh), None);
        assert_eq!(state.translate(&WindowEvent::Focus(true)), None);
        assert_eq!(state.translate(&WindowEvent::CursorPos(10.0, 20.0)), None);
        assert_eq!(state.translate(&WindowEvent::FramebufferSize(800, 600)), None);
        // untouched by any of it
        assert_eq!(state.size(), (800, 600));
        assert!(!state.is_minimized());
        assert!(!state.closed());
    }

    #[test]
    fn test_mark_closed_is_terminal() {
        let mut state = WindowState::new(800, 600);
        state.mark_closed();
        assert!(state.closed());
        // translation still works; the flag just stays set
        assert_eq!(state.translate(&WindowEvent::Size(100, 100)), Some(Event::Resize));
        assert!(state.closed());
    }

    #[test]
    fn test_negative_size_clamps_to_zero() {
        let mut state = WindowState::new(800, 600);
        let event = state.translate(&WindowEvent::Size(-1, -1));
        // a clamped 0x0 area classifies as a minimize
        assert_eq!(event, Some(Event::Minimize));
        assert_eq!(state.size(), (0, 0));
    }
}
