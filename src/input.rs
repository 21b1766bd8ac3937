//! Input events and held-key tracking
//!
//! The host delivers discrete events; the sandbox consumes a snapshot of
//! what is held once per tick.

use glam::Vec2;

use crate::sim::TickInput;

/// Keys (and buttons) the prototypes react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Tab,
    Enter,
    Space,
    Escape,
    Q,
    R,
    F11,
    W,
    A,
    S,
    D,
    RightMouse,
}

impl Key {
    /// Parse a host key name
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_lowercase().as_str() {
            "up" | "up arrow" => Key::Up,
            "down" | "down arrow" => Key::Down,
            "tab" => Key::Tab,
            "enter" | "return" => Key::Enter,
            "space" => Key::Space,
            "escape" | "esc" => Key::Escape,
            "q" => Key::Q,
            "r" => Key::R,
            "f11" => Key::F11,
            "w" => Key::W,
            "a" => Key::A,
            "s" => Key::S,
            "d" => Key::D,
            "right mouse" | "rmb" => Key::RightMouse,
            _ => return None,
        };
        Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Relative mouse motion since the last event
    MouseMotion(Vec2),
}

/// Keys currently held plus mouse motion since the last tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub look: bool,
    mouse_delta: Vec2,
}

impl HeldKeys {
    /// Track press/release of movement keys; returns false for keys it ignores
    pub fn set(&mut self, key: Key, down: bool) -> bool {
        let slot = match key {
            Key::W => &mut self.forward,
            Key::S => &mut self.back,
            Key::A => &mut self.left,
            Key::D => &mut self.right,
            Key::Space => &mut self.jump,
            Key::RightMouse => &mut self.look,
            _ => return false,
        };
        *slot = down;
        true
    }

    pub fn add_mouse_motion(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for one tick; consumes the accumulated mouse motion
    pub fn take_tick_input(&mut self) -> TickInput {
        let mut dir = Vec2::ZERO;
        // W is -z and S is +z
        if self.forward {
            dir.y -= 1.0;
        }
        if self.back {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }

        let delta = std::mem::take(&mut self.mouse_delta);
        TickInput {
            move_dir: dir,
            jump: self.jump,
            look: self.look.then_some(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("up arrow"), Some(Key::Up));
        assert_eq!(Key::from_name("ESCAPE"), Some(Key::Escape));
        assert_eq!(Key::from_name("f11"), Some(Key::F11));
        assert_eq!(Key::from_name("x"), None);
    }

    #[test]
    fn test_snapshot_direction() {
        let mut held = HeldKeys::default();
        held.set(Key::W, true);
        held.set(Key::D, true);
        let input = held.take_tick_input();
        assert_eq!(input.move_dir, Vec2::new(1.0, -1.0));
        assert!(!input.jump);

        held.set(Key::S, true);
        assert_eq!(held.take_tick_input().move_dir, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_mouse_motion_needs_look_held() {
        let mut held = HeldKeys::default();
        held.add_mouse_motion(Vec2::new(0.5, 0.0));
        assert_eq!(held.take_tick_input().look, None);

        held.set(Key::RightMouse, true);
        held.add_mouse_motion(Vec2::new(0.25, 0.1));
        held.add_mouse_motion(Vec2::new(0.25, 0.0));
        assert_eq!(held.take_tick_input().look, Some(Vec2::new(0.5, 0.1)));
        // Motion is consumed
        assert_eq!(held.take_tick_input().look, Some(Vec2::ZERO));
    }

    #[test]
    fn test_ignored_keys() {
        let mut held = HeldKeys::default();
        assert!(!held.set(Key::Tab, true));
        assert_eq!(held, HeldKeys::default());
    }
}
