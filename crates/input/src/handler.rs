//! Ascend-hold tracking for terminal environments.
//!
//! The game needs to know whether the ascend key is *currently held*. Terminals
//! with keyboard enhancement report releases; the rest only send a burst of
//! repeated presses while a key is down. For those, a hold expires when no
//! press or repeat refreshes it within the release timeout.

use crossterm::event::KeyCode;

use crate::map::is_ascend_key;
use crate::types::GameAction;

// Longer than the X11 default auto-repeat delay (660ms), so a held key does not
// drop out before the first repeat arrives.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 700;

/// Tracks the ascend key's held state.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: bool,
    since_refresh_ms: u32,
    /// `None` when the terminal reports key releases.
    key_release_timeout_ms: Option<u32>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: false,
            since_refresh_ms: 0,
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    /// Rely on real release events only.
    pub fn with_release_events(mut self) -> Self {
        self.key_release_timeout_ms = None;
        self
    }

    pub fn ascend_held(&self) -> bool {
        self.held
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if !is_ascend_key(code) {
            return None;
        }
        self.since_refresh_ms = 0;
        if self.held {
            None
        } else {
            self.held = true;
            Some(GameAction::AscendPress)
        }
    }

    /// Auto-repeat keeps an existing hold alive but never starts one.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if self.held && is_ascend_key(code) {
            self.since_refresh_ms = 0;
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        if self.held && is_ascend_key(code) {
            self.held = false;
            self.since_refresh_ms = 0;
            Some(GameAction::AscendRelease)
        } else {
            None
        }
    }

    /// Advance the release timeout. Emits `AscendRelease` when a hold expires.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        let timeout = self.key_release_timeout_ms?;
        if !self.held {
            return None;
        }
        self.since_refresh_ms = self.since_refresh_ms.saturating_add(elapsed_ms);
        if self.since_refresh_ms >= timeout {
            self.held = false;
            self.since_refresh_ms = 0;
            Some(GameAction::AscendRelease)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_then_release() {
        let mut input = InputHandler::new().with_release_events();
        assert_eq!(
            input.handle_key_press(KeyCode::Char(' ')),
            Some(GameAction::AscendPress)
        );
        assert!(input.ascend_held());
        assert_eq!(
            input.handle_key_release(KeyCode::Char(' ')),
            Some(GameAction::AscendRelease)
        );
        assert!(!input.ascend_held());
    }

    #[test]
    fn test_repeated_press_is_single_action() {
        let mut input = InputHandler::new();
        assert!(input.handle_key_press(KeyCode::Up).is_some());
        assert!(input.handle_key_press(KeyCode::Up).is_none());
        assert!(input.handle_key_press(KeyCode::Char('w')).is_none());
    }

    #[test]
    fn test_ignores_other_keys() {
        let mut input = InputHandler::new();
        assert!(input.handle_key_press(KeyCode::Left).is_none());
        assert!(input.handle_key_release(KeyCode::Up).is_none());
        assert!(!input.ascend_held());
    }

    #[test]
    fn test_hold_expires_without_refresh() {
        let mut input = InputHandler::new().with_key_release_timeout_ms(100);
        input.handle_key_press(KeyCode::Char(' '));

        assert_eq!(input.update(64), None);
        assert_eq!(input.update(32), None);
        assert_eq!(input.update(16), Some(GameAction::AscendRelease));
        assert!(!input.ascend_held());
        assert_eq!(input.update(16), None);
    }

    #[test]
    fn test_repeat_refreshes_hold() {
        let mut input = InputHandler::new().with_key_release_timeout_ms(100);
        input.handle_key_press(KeyCode::Char(' '));

        for _ in 0..10 {
            assert_eq!(input.update(80), None);
            input.handle_key_repeat(KeyCode::Char(' '));
        }
        assert!(input.ascend_held());
    }

    #[test]
    fn test_default_hold_survives_first_repeat_delay() {
        let mut input = InputHandler::new();
        input.handle_key_press(KeyCode::Char(' '));

        // 42 ticks of 16ms = 672ms, past the 660ms X11 repeat delay.
        for _ in 0..42 {
            assert_eq!(input.update(16), None);
        }
        input.handle_key_repeat(KeyCode::Char(' '));
        assert!(input.ascend_held());

        // 44 ticks = 704ms without a refresh.
        for _ in 0..44 {
            input.update(16);
        }
        assert!(!input.ascend_held());
    }

    #[test]
    fn test_release_events_never_time_out() {
        let mut input = InputHandler::new().with_release_events();
        input.handle_key_press(KeyCode::Char(' '));
        assert_eq!(input.update(10_000), None);
        assert!(input.ascend_held());
    }
}
