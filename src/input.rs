//! Input port
//!
//! Translates backend key events into per-tick inputs. Movement keys are
//! level-triggered (held down across ticks); fire and new-game are
//! edge-triggered so one press yields exactly one tick with the flag set.

use crate::sim::TickInput;

/// Logical keys the game understands; backends map physical keys onto these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
    NewGame,
}

/// Accumulates key events between ticks
#[derive(Debug, Default, Clone)]
pub struct InputState {
    rotate_left: bool,
    rotate_right: bool,
    thrust: bool,
    fire_pressed: bool,
    start_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::RotateLeft => self.rotate_left = true,
            Key::RotateRight => self.rotate_right = true,
            Key::Thrust => self.thrust = true,
            Key::Fire => self.fire_pressed = true,
            Key::NewGame => self.start_pressed = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::RotateLeft => self.rotate_left = false,
            Key::RotateRight => self.rotate_right = false,
            Key::Thrust => self.thrust = false,
            // Edge-triggered keys clear on take, not on release
            Key::Fire | Key::NewGame => {}
        }
    }

    /// Snapshot the input for one tick, consuming the one-shot flags
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            rotate_left: self.rotate_left,
            rotate_right: self.rotate_right,
            thrust: self.thrust,
            fire: self.fire_pressed,
            start: self.start_pressed,
        };
        self.fire_pressed = false;
        self.start_pressed = false;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_persist_across_ticks() {
        let mut input = InputState::new();
        input.key_down(Key::Thrust);
        input.key_down(Key::RotateLeft);

        assert!(input.take_tick_input().thrust);
        let second = input.take_tick_input();
        assert!(second.thrust);
        assert!(second.rotate_left);

        input.key_up(Key::Thrust);
        assert!(!input.take_tick_input().thrust);
    }

    #[test]
    fn test_fire_is_one_shot() {
        let mut input = InputState::new();
        input.key_down(Key::Fire);

        assert!(input.take_tick_input().fire);
        assert!(!input.take_tick_input().fire);
    }

    #[test]
    fn test_start_clears_even_while_held() {
        let mut input = InputState::new();
        input.key_down(Key::NewGame);

        assert!(input.take_tick_input().start);
        // Key never released, but the press was already consumed
        assert!(!input.take_tick_input().start);
    }
}
