//! Keyboard state tracking
//!
//! Backends feed key-down/key-up events in; the frame loop reads held keys
//! and keys pressed since the previous frame.

use crate::sim::{Movement, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    R,
    Escape,
}

impl Key {
    const ALL: [Key; 11] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Space,
        Key::R,
        Key::Escape,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "KeyW" => Some(Key::W),
            "KeyA" => Some(Key::A),
            "KeyS" => Some(Key::S),
            "KeyD" => Some(Key::D),
            "Space" => Some(Key::Space),
            "KeyR" => Some(Key::R),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Held and freshly pressed keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keyboard {
    down: u16,
    pressed: u16,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat events for a held key are not a
    /// new press.
    pub fn key_down(&mut self, key: Key) {
        if self.down & key.bit() == 0 {
            self.pressed |= key.bit();
        }
        self.down |= key.bit();
    }

    pub fn key_up(&mut self, key: Key) {
        self.down &= !key.bit();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down & key.bit() != 0
    }

    /// Went down since the last `end_frame`
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed & key.bit() != 0
    }

    /// Forget this frame's presses
    pub fn end_frame(&mut self) {
        self.pressed = 0;
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.down = 0;
        self.pressed = 0;
    }

    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|k| self.is_down(*k))
    }

    /// Snapshot for the simulation
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            movement: Movement {
                up: self.is_down(Key::Up) || self.is_down(Key::W),
                down: self.is_down(Key::Down) || self.is_down(Key::S),
                left: self.is_down(Key::Left) || self.is_down(Key::A),
                right: self.is_down(Key::Right) || self.is_down(Key::D),
            },
            confirm: self.is_pressed(Key::Space),
            restart: self.is_pressed(Key::R),
        }
    }
}
