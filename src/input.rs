//! Abstract input consumed by the core.
//!
//! The host translates device state into [`InputState`] once per frame and
//! forwards discrete presses as [`InputEvent`]s.

use glam::Vec2;

/// Keys with a discrete, edge-triggered meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Leave play, or quit from any other phase.
    Escape,
    /// Restart after a game over.
    Retry,
}

/// Discrete input delivered as it happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyDown(Key),
    /// The primary pointer button went down at a screen position.
    PointerDown(Vec2),
}

/// Continuously held keys, sampled once per update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag mirrors one physical key that may be held independently."
)]
pub struct InputState {
    /// Left arrow.
    pub left: bool,
    /// Right arrow.
    pub right: bool,
    /// Space bar.
    pub jump: bool,
    /// Down arrow.
    pub down: bool,
    /// Letter crouch key.
    pub crouch_key: bool,
    /// Left control key.
    pub left_ctrl: bool,
    /// Right control key.
    pub right_ctrl: bool,
}

impl InputState {
    /// Returns `true` when any of the four crouch sources is held.
    ///
    /// # Examples
    ///
    /// ```
    /// use beeline::input::InputState;
    /// let input = InputState { right_ctrl: true, ..Default::default() };
    /// assert!(input.crouch());
    /// assert!(!InputState::default().crouch());
    /// ```
    #[must_use]
    pub const fn crouch(&self) -> bool {
        self.down || self.crouch_key || self.left_ctrl || self.right_ctrl
    }

    /// Input holding only the right key.
    #[must_use]
    pub fn moving_right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    /// Input holding only the left key.
    #[must_use]
    pub fn moving_left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::down(InputState { down: true, ..Default::default() })]
    #[case::letter(InputState { crouch_key: true, ..Default::default() })]
    #[case::left_ctrl(InputState { left_ctrl: true, ..Default::default() })]
    #[case::right_ctrl(InputState { right_ctrl: true, ..Default::default() })]
    fn every_crouch_source_counts(#[case] input: InputState) {
        assert!(input.crouch());
    }

    #[rstest]
    #[case(InputState::moving_left())]
    #[case(InputState::moving_right())]
    #[case(InputState { jump: true, ..Default::default() })]
    fn movement_keys_do_not_crouch(#[case] input: InputState) {
        assert!(!input.crouch());
    }
}
