//! Canned [`InputState`] values.

use beeline::InputState;

/// Nothing held.
#[must_use]
pub fn idle() -> InputState {
    InputState::default()
}

#[must_use]
pub fn hold_right() -> InputState {
    InputState::moving_right()
}

#[must_use]
pub fn hold_left() -> InputState {
    InputState::moving_left()
}

/// Crouching with the letter key.
#[must_use]
pub fn crouch() -> InputState {
    InputState {
        crouch_key: true,
        ..InputState::default()
    }
}

#[must_use]
pub fn jump() -> InputState {
    InputState {
        jump: true,
        ..InputState::default()
    }
}
