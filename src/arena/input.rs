//! Input sampling.
//!
//! Two independent sources feed movement: a keyboard map keyed by the raw
//! `KeyboardEvent.key` string, and five booleans bound to the on-screen
//! touch buttons. Event handlers write here asynchronously; once per frame
//! the loop driver merges both sources with a logical OR per direction into
//! an [`InputSnapshot`]. No debouncing, no simultaneous-direction
//! resolution: opposite keys cancel per axis and diagonals run both axes.

use std::collections::HashMap;

pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_UP: &str = "ArrowUp";
pub const KEY_DOWN: &str = "ArrowDown";
/// The space bar.
pub const KEY_ATTACK: &str = " ";

/// The five on-screen controls, identified by DOM element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchControl {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Attack,
}

impl TouchControl {
    pub const ALL: [TouchControl; 5] = [
        TouchControl::MoveLeft,
        TouchControl::MoveRight,
        TouchControl::MoveUp,
        TouchControl::MoveDown,
        TouchControl::Attack,
    ];

    /// Id of the page element this control is bound to.
    pub fn element_id(self) -> &'static str {
        match self {
            TouchControl::MoveLeft => "moveLeft",
            TouchControl::MoveRight => "moveRight",
            TouchControl::MoveUp => "moveUp",
            TouchControl::MoveDown => "moveDown",
            TouchControl::Attack => "attack",
        }
    }
}

/// Event-written input state. Keyboard writes land in the raw key map
/// (unknown keys are stored and never read); touch writes flip the
/// dedicated booleans.
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    touch: [bool; 5],
}

impl InputState {
    pub fn set_key(&mut self, key: &str, down: bool) {
        self.keys.insert(key.to_owned(), down);
    }

    pub fn set_touch(&mut self, control: TouchControl, down: bool) {
        self.touch[control as usize] = down;
    }

    fn key_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    fn touch_down(&self, control: TouchControl) -> bool {
        self.touch[control as usize]
    }

    /// Merge both sources into the per-frame snapshot, OR per direction.
    pub fn sample(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.key_down(KEY_LEFT) || self.touch_down(TouchControl::MoveLeft),
            right: self.key_down(KEY_RIGHT) || self.touch_down(TouchControl::MoveRight),
            up: self.key_down(KEY_UP) || self.touch_down(TouchControl::MoveUp),
            down: self.key_down(KEY_DOWN) || self.touch_down(TouchControl::MoveDown),
            attack: self.key_down(KEY_ATTACK) || self.touch_down(TouchControl::Attack),
        }
    }
}

/// Unified directional/attack signal consumed by the update step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub attack: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_and_touch_merge_with_or() {
        let mut input = InputState::default();
        input.set_key(KEY_LEFT, true);
        input.set_touch(TouchControl::MoveRight, true);
        let snap = input.sample();
        assert!(snap.left && snap.right);
        assert!(!snap.up && !snap.down && !snap.attack);
    }

    #[test]
    fn key_release_clears_the_flag() {
        let mut input = InputState::default();
        input.set_key(KEY_ATTACK, true);
        assert!(input.sample().attack);
        input.set_key(KEY_ATTACK, false);
        assert!(!input.sample().attack);
    }

    #[test]
    fn unrelated_keys_do_not_move_the_player() {
        let mut input = InputState::default();
        input.set_key("w", true);
        input.set_key("Enter", true);
        assert_eq!(input.sample(), InputSnapshot::default());
    }
}
