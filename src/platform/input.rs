//! Keyboard and on-screen button input
//!
//! Events only flip flags here; the next tick consumes them.

use std::collections::HashMap;

use crate::sim::TickInput;

/// Game actions an input device can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Left,
    Right,
    Jump,
    Shoot,
    MegaShot,
    Pause,
    Restart,
}

impl InputAction {
    /// Left/right are held; everything else fires once per press
    pub fn is_held(self) -> bool {
        matches!(self, InputAction::Left | InputAction::Right)
    }

    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "arrowleft" | "a" => Some(InputAction::Left),
            "arrowright" | "d" => Some(InputAction::Right),
            "arrowup" | "w" | " " => Some(InputAction::Jump),
            "j" => Some(InputAction::Shoot),
            "k" => Some(InputAction::MegaShot),
            "p" => Some(InputAction::Pause),
            _ => None,
        }
    }

    /// Map an on-screen button's `data-action` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(InputAction::Left),
            "right" => Some(InputAction::Right),
            "jump" => Some(InputAction::Jump),
            "shoot" => Some(InputAction::Shoot),
            "bigshoot" | "mega" => Some(InputAction::MegaShot),
            "pause" => Some(InputAction::Pause),
            "restart" => Some(InputAction::Restart),
            _ => None,
        }
    }
}

/// Something that can hold an action down
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum InputSource {
    /// Keyboard key, lowercased `KeyboardEvent.key`
    Key(String),
    /// On-screen button (one per action)
    Button(InputAction),
}

/// Accumulated input between ticks
///
/// An action stays down while any key or button bound to it is held, and
/// its one-shot re-arms only after every one of them is released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Held sources and the action each one triggers
    held: HashMap<InputSource, InputAction>,
    /// One-shot presses waiting for the next tick
    pending: TickInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keydown. Returns the mapped action, if any.
    /// Auto-repeats of a key already down are ignored.
    pub fn key_down(&mut self, key: &str) -> Option<InputAction> {
        let action = InputAction::from_key(key)?;
        self.begin(InputSource::Key(key.to_lowercase()), action);
        Some(action)
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&InputSource::Key(key.to_lowercase()));
    }

    /// Handle an on-screen button press
    pub fn press(&mut self, action: InputAction) {
        self.begin(InputSource::Button(action), action);
    }

    pub fn release(&mut self, action: InputAction) {
        self.held.remove(&InputSource::Button(action));
    }

    /// Press and immediately release (click/tap buttons)
    pub fn tap(&mut self, action: InputAction) {
        self.press(action);
        self.release(action);
    }

    /// Release everything (focus lost)
    pub fn clear_held(&mut self) {
        self.held.clear();
    }

    fn is_down(&self, action: InputAction) -> bool {
        self.held.values().any(|&a| a == action)
    }

    fn begin(&mut self, source: InputSource, action: InputAction) {
        if self.held.contains_key(&source) {
            return;
        }
        let was_down = self.is_down(action);
        self.held.insert(source, action);
        if was_down {
            return;
        }
        match action {
            InputAction::Jump => self.pending.jump = true,
            InputAction::Shoot => self.pending.shoot = true,
            InputAction::MegaShot => self.pending.mega_shot = true,
            InputAction::Pause => self.pending.pause = true,
            InputAction::Restart => self.pending.restart = true,
            InputAction::Left | InputAction::Right => {}
        }
    }

    /// Input for the next tick. One-shot presses are handed out once.
    pub fn take_tick_input(&mut self) -> TickInput {
        let pending = std::mem::take(&mut self.pending);
        TickInput {
            left: self.is_down(InputAction::Left),
            right: self.is_down(InputAction::Right),
            ..pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(InputAction::from_key("ArrowLeft"), Some(InputAction::Left));
        assert_eq!(InputAction::from_key("A"), Some(InputAction::Left));
        assert_eq!(InputAction::from_key("d"), Some(InputAction::Right));
        assert_eq!(InputAction::from_key(" "), Some(InputAction::Jump));
        assert_eq!(InputAction::from_key("w"), Some(InputAction::Jump));
        assert_eq!(InputAction::from_key("J"), Some(InputAction::Shoot));
        assert_eq!(InputAction::from_key("k"), Some(InputAction::MegaShot));
        assert_eq!(InputAction::from_key("p"), Some(InputAction::Pause));
        assert_eq!(InputAction::from_key("Escape"), None);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(
            InputAction::from_name("bigshoot"),
            Some(InputAction::MegaShot)
        );
        assert_eq!(InputAction::from_name("restart"), Some(InputAction::Restart));
        assert_eq!(InputAction::from_name("dance"), None);
    }

    #[test]
    fn test_held_direction() {
        let mut input = InputState::new();
        input.press(InputAction::Right);
        assert!(input.take_tick_input().right);
        assert!(input.take_tick_input().right);
        input.release(InputAction::Right);
        assert!(!input.take_tick_input().right);
    }

    #[test]
    fn test_one_shot_consumed_once() {
        let mut input = InputState::new();
        input.press(InputAction::Shoot);
        assert!(input.take_tick_input().shoot);
        assert!(!input.take_tick_input().shoot);
    }

    #[test]
    fn test_key_repeat_does_not_refire() {
        let mut input = InputState::new();
        assert_eq!(input.key_down("w"), Some(InputAction::Jump));
        assert!(input.take_tick_input().jump);
        // Auto-repeat keydown while held
        input.key_down("w");
        assert!(!input.take_tick_input().jump);

        input.key_up("w");
        input.key_down("w");
        assert!(input.take_tick_input().jump);
    }

    #[test]
    fn test_shared_jump_keys_rearm_after_all_released() {
        let mut input = InputState::new();
        input.key_down("w");
        input.key_down(" ");
        assert!(input.take_tick_input().jump);

        // W released while Space is still held, then Space auto-repeats
        input.key_up("w");
        input.key_down(" ");
        assert!(!input.take_tick_input().jump);

        input.key_up(" ");
        input.key_down("ArrowUp");
        assert!(input.take_tick_input().jump);
    }

    #[test]
    fn test_direction_held_by_key_and_button() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        input.press(InputAction::Left);
        input.release(InputAction::Left);
        assert!(input.take_tick_input().left);
        // Key case may differ between keydown and keyup (shift)
        input.key_up("arrowleft");
        assert!(!input.take_tick_input().left);
    }

    #[test]
    fn test_unmapped_key() {
        let mut input = InputState::new();
        assert_eq!(input.key_down("Escape"), None);
        assert_eq!(input.take_tick_input(), TickInput::default());
    }

    #[test]
    fn test_multiple_presses_collapse() {
        let mut input = InputState::new();
        input.tap(InputAction::Shoot);
        input.tap(InputAction::Shoot);
        let tick = input.take_tick_input();
        assert!(tick.shoot);
        assert!(!input.take_tick_input().shoot);
    }

    #[test]
    fn test_clear_held() {
        let mut input = InputState::new();
        input.press(InputAction::Left);
        input.clear_held();
        assert!(!input.take_tick_input().left);
    }
}
