//! Input normalization
//!
//! Platform key identifiers arrive as [`glfw::Key`] values and are folded
//! through a fixed lookup into the [`KeyCode`] vocabulary below. Identifiers
//! outside the table map to [`KeyCode::Unknown`], never to a real code.

/// Normalized key codes
///
/// [`KeyCode::Unknown`] is the sentinel for every platform key the table
/// does not cover; it is distinct from all real codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Space key
    Space,
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// 0 key on the top row
    Num0,
    /// 1 key on the top row
    Num1,
    /// 2 key on the top row
    Num2,
    /// 3 key on the top row
    Num3,
    /// 4 key on the top row
    Num4,
    /// 5 key on the top row
    Num5,
    /// 6 key on the top row
    Num6,
    /// 7 key on the top row
    Num7,
    /// 8 key on the top row
    Num8,
    /// 9 key on the top row
    Num9,
    /// 0 key on the numeric keypad
    Numpad0,
    /// 1 key on the numeric keypad
    Numpad1,
    /// 2 key on the numeric keypad
    Numpad2,
    /// 3 key on the numeric keypad
    Numpad3,
    /// 4 key on the numeric keypad
    Numpad4,
    /// 5 key on the numeric keypad
    Numpad5,
    /// 6 key on the numeric keypad
    Numpad6,
    /// 7 key on the numeric keypad
    Numpad7,
    /// 8 key on the numeric keypad
    Numpad8,
    /// 9 key on the numeric keypad
    Numpad9,
    /// F1 key
    F1,
    /// F2 key
    F2,
    /// F3 key
    F3,
    /// F4 key
    F4,
    /// F5 key
    F5,
    /// F6 key
    F6,
    /// F7 key
    F7,
    /// F8 key
    F8,
    /// F9 key
    F9,
    /// F10 key
    F10,
    /// F11 key
    F11,
    /// F12 key
    F12,
    /// Left shift key
    LeftShift,
    /// Right shift key
    RightShift,
    /// Left control key
    LeftControl,
    /// Right control key
    RightControl,
    /// Left alt key
    LeftAlt,
    /// Right alt key
    RightAlt,
    /// Left platform "super" key
    LeftSuper,
    /// Right platform "super" key
    RightSuper,
    /// Context menu key
    Menu,
    /// Sentinel for keys outside the lookup table
    Unknown,
}

impl From<glfw::Key> for KeyCode {
    fn from(key: glfw::Key) -> Self {
        match key {
            glfw::Key::Escape => Self::Escape,
            glfw::Key::Space => Self::Space,
            glfw::Key::A => Self::A,
            glfw::Key::B => Self::B,
            glfw::Key::C => Self::C,
            glfw::Key::D => Self::D,
            glfw::Key::E => Self::E,
            glfw::Key::F => Self::F,
            glfw::Key::G => Self::G,
            glfw::Key::H => Self::H,
            glfw::Key::I => Self::I,
            glfw::Key::J => Self::J,
            glfw::Key::K => Self::K,
            glfw::Key::L => Self::L,
            glfw::Key::M => Self::M,
            glfw::Key::N => Self::N,
            glfw::Key::O => Self::O,
            glfw::Key::P => Self::P,
            glfw::Key::Q => Self::Q,
            glfw::Key::R => Self::R,
            glfw::Key::S => Self::S,
            glfw::Key::T => Self::T,
            glfw::Key::U => Self::U,
            glfw::Key::V => Self::V,
            glfw::Key::W => Self::W,
            glfw::Key::X => Self::X,
            glfw::Key::Y => Self::Y,
            glfw::Key::Z => Self::Z,
            glfw::Key::Num0 => Self::Num0,
            glfw::Key::Num1 => Self::Num1,
            glfw::Key::Num2 => Self::Num2,
            glfw::Key::Num3 => Self::Num3,
            glfw::Key::Num4 => Self::Num4,
            glfw::Key::Num5 => Self::Num5,
            glfw::Key::Num6 => Self::Num6,
            glfw::Key::Num7 => Self::Num7,
            glfw::Key::Num8 => Self::Num8,
            glfw::Key::Num9 => Self::Num9,
            glfw::Key::Kp0 => Self::Numpad0,
            glfw::Key::Kp1 => Self::Numpad1,
            glfw::Key::Kp2 => Self::Numpad2,
            glfw::Key::Kp3 => Self::Numpad3,
            glfw::Key::Kp4 => Self::Numpad4,
            glfw::Key::Kp5 => Self::Numpad5,
            glfw::Key::Kp6 => Self::Numpad6,
            glfw::Key::Kp7 => Self::Numpad7,
            glfw::Key::Kp8 => Self::Numpad8,
            glfw::Key::Kp9 => Self::Numpad9,
            glfw::Key::F1 => Self::F1,
            glfw::Key::F2 => Self::F2,
            glfw::Key::F3 => Self::F3,
            glfw::Key::F4 => Self::F4,
            glfw::Key::F5 => Self::F5,
            glfw::Key::F6 => Self::F6,
            glfw::Key::F7 => Self::F7,
            glfw::Key::F8 => Self::F8,
            glfw::Key::F9 => Self::F9,
            glfw::Key::F10 => Self::F10,
            glfw::Key::F11 => Self::F11,
            glfw::Key::F12 => Self::F12,
            glfw::Key::LeftShift => Self::LeftShift,
            glfw::Key::RightShift => Self::RightShift,
            glfw::Key::LeftControl => Self::LeftControl,
            glfw::Key::RightControl => Self::RightControl,
            glfw::Key::LeftAlt => Self::LeftAlt,
            glfw::Key::RightAlt => Self::RightAlt,
            glfw::Key::LeftSuper => Self::LeftSuper,
            glfw::Key::RightSuper => Self::RightSuper,
            glfw::Key::Menu => Self::Menu,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const MAPPED_KEYS: [glfw::Key; 69] = [
        glfw::Key::Escape,
        glfw::Key::Space,
        glfw::Key::A,
        glfw::Key::B,
        glfw::Key::C,
        glfw::Key::D,
        glfw::Key::E,
        glfw::Key::F,
        glfw::Key::G,
        glfw::Key::H,
        glfw::Key::I,
        glfw::Key::J,
        glfw::Key::K,
        glfw::Key::L,
        glfw::Key::M,
        glfw::Key::N,
        glfw::Key::O,
        glfw::Key::P,
        glfw::Key::Q,
        glfw::Key::R,
        glfw::Key::S,
        glfw::Key::T,
        glfw::Key::U,
        glfw::Key::V,
        glfw::Key::W,
        glfw::Key::X,
        glfw::Key::Y,
        glfw::Key::Z,
        glfw::Key::Num0,
        glfw::Key::Num1,
        glfw::Key::Num2,
        glfw::Key::Num3,
        glfw::Key::Num4,
        glfw::Key::Num5,
        glfw::Key::Num6,
        glfw::Key::Num7,
        glfw::Key::Num8,
        glfw::Key::Num9,
        glfw::Key::Kp0,
        glfw::Key::Kp1,
        glfw::Key::Kp2,
        glfw::Key::Kp3,
        glfw::Key::Kp4,
        glfw::Key::Kp5,
        glfw::Key::Kp6,
        glfw::Key::Kp7,
        glfw::Key::Kp8,
        glfw::Key::Kp9,
        glfw::Key::F1,
        glfw::Key::F2,
        glfw::Key::F3,
        glfw::Key::F4,
        glfw::Key::F5,
        glfw::Key::F6,
        glfw::Key::F7,
        glfw::Key::F8,
        glfw::Key::F9,
        glfw::Key::F10,
        glfw::Key::F11,
        glfw::Key::F12,
        glfw::Key::LeftShift,
        glfw::Key::RightShift,
        glfw::Key::LeftControl,
        glfw::Key::RightControl,
        glfw::Key::LeftAlt,
        glfw::Key::RightAlt,
        glfw::Key::LeftSuper,
        glfw::Key::RightSuper,
        glfw::Key::Menu,
    ];

    #[test]
    fn test_mapped_keys_are_known_and_distinct() {
        let mut seen = HashSet::new();
        for key in MAPPED_KEYS {
            let code = KeyCode::from(key);
            assert_ne!(code, KeyCode::Unknown, "{:?} fell through the table", key);
            assert!(seen.insert(code), "{:?} collided with an earlier code", key);
        }
    }

    #[test]
    fn test_unmapped_keys_hit_the_sentinel() {
        for key in [
            glfw::Key::Enter,
            glfw::Key::Tab,
            glfw::Key::Backspace,
            glfw::Key::Left,
            glfw::Key::LeftBracket,
            glfw::Key::KpDecimal,
            glfw::Key::F13,
        ] {
            assert_eq!(KeyCode::from(key), KeyCode::Unknown);
        }
    }

    #[test]
    fn test_spot_mappings() {
        assert_eq!(KeyCode::from(glfw::Key::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(glfw::Key::W), KeyCode::W);
        assert_eq!(KeyCode::from(glfw::Key::Num7), KeyCode::Num7);
        assert_eq!(KeyCode::from(glfw::Key::Kp3), KeyCode::Numpad3);
        assert_eq!(KeyCode::from(glfw::Key::Menu), KeyCode::Menu);
        assert_eq!(KeyCode::from(glfw::Key::RightSuper), KeyCode::RightSuper);
    }
}
