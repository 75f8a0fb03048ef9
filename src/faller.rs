//! Falling block trap.
//!
//! Blocks hide above the ground until the player walks close, then drop and
//! sit on the floor. Only activated blocks are drawn or hurt the player.

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::constants::{FALLER_CONTACT_DAMAGE, FALLER_INITIAL_FALL_SPEED, FALLER_TRIGGER_DISTANCE};
use crate::kinematics::{Aabb, Bounded, FallIntegrator, Landing};

/// Lifecycle of a falling block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FallerState {
    /// Waiting, hidden and harmless.
    Resting,
    /// Dropping towards the ground.
    Falling,
    /// Settled on the ground.
    Idle,
}

/// A falling block.
#[derive(Debug, Clone, PartialEq)]
pub struct FallerEnemy {
    /// Top-left corner in screen space.
    pub position: Vec2,
    /// Sprite size.
    pub size: Vec2,
    original_y: f32,
    activated: bool,
    state: FallerState,
    motion: FallIntegrator,
}

impl FallerEnemy {
    /// Hangs a hidden block with its top-left corner at `position`.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            original_y: position.y,
            activated: false,
            state: FallerState::Resting,
            motion: FallIntegrator { velocity: 0.0 },
        }
    }

    /// Current lifecycle stage.
    #[must_use]
    pub const fn state(&self) -> FallerState {
        self.state
    }

    /// Whether the block has been triggered since the last reset.
    #[must_use]
    pub const fn is_activated(&self) -> bool {
        self.activated
    }

    /// Top edge restored on reset.
    #[must_use]
    pub const fn original_y(&self) -> f32 {
        self.original_y
    }

    /// Current downward speed.
    #[must_use]
    pub const fn fall_speed(&self) -> f32 {
        self.motion.velocity
    }

    /// Health the player loses per contact.
    #[must_use]
    pub const fn contact_damage(&self) -> i32 {
        FALLER_CONTACT_DAMAGE
    }

    /// Bottom edge in screen space.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Returns `true` when a point at horizontal position `x` is close
    /// enough to trigger the drop.
    #[must_use]
    pub fn in_trigger_range(&self, x: f32) -> bool {
        (x - self.bounds().center().x).abs() < FALLER_TRIGGER_DISTANCE
    }

    /// Starts the drop. The activation latch makes repeat calls no-ops.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.state = FallerState::Falling;
        self.motion = FallIntegrator::with_velocity(FALLER_INITIAL_FALL_SPEED);
        debug!("block at x={} dropping", self.position.x);
    }

    /// Advances a falling block one frame, settling it on `ground`.
    pub fn update(&mut self, ground: f32, gravity: f32) {
        if !self.activated || self.state != FallerState::Falling {
            return;
        }
        let landing = self
            .motion
            .step(&mut self.position.y, self.size.y, ground, gravity);
        if landing == Landing::Landed {
            self.state = FallerState::Idle;
        }
    }

    /// Hides the block at its original height, ready to trigger again.
    pub fn reset(&mut self) {
        self.activated = false;
        self.state = FallerState::Resting;
        self.motion = FallIntegrator::default();
        self.position.y = self.original_y;
    }
}

impl Bounded for FallerEnemy {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const GROUND: f32 = 300.0;

    #[fixture]
    fn block() -> FallerEnemy {
        FallerEnemy::new(Vec2::new(800.0, 175.0), Vec2::new(50.0, 50.0))
    }

    #[rstest]
    fn resting_blocks_ignore_updates(mut block: FallerEnemy) {
        block.update(GROUND, 0.5);
        assert_eq!(block.state(), FallerState::Resting);
        assert!((block.position.y - 175.0).abs() < f32::EPSILON);
    }

    #[rstest]
    fn drop_accelerates_and_settles_on_ground(mut block: FallerEnemy) {
        block.activate();
        assert_eq!(block.state(), FallerState::Falling);
        block.update(GROUND, 0.5);
        assert!((block.position.y - 177.0).abs() < f32::EPSILON);
        block.update(GROUND, 0.5);
        assert!((block.position.y - 179.5).abs() < f32::EPSILON);
        while block.state() == FallerState::Falling {
            block.update(GROUND, 0.5);
        }
        assert_eq!(block.state(), FallerState::Idle);
        assert!((block.bottom() - GROUND).abs() < f32::EPSILON);
    }

    #[rstest]
    fn activation_latches(mut block: FallerEnemy) {
        block.activate();
        block.update(GROUND, 0.5);
        let speed = block.fall_speed();
        block.activate();
        assert!((block.fall_speed() - speed).abs() < f32::EPSILON);
    }

    #[rstest]
    fn reset_restores_hidden_state(mut block: FallerEnemy) {
        block.activate();
        for _ in 0..40 {
            block.update(GROUND, 0.5);
        }
        block.reset();
        assert_eq!(block.state(), FallerState::Resting);
        assert!(!block.is_activated());
        assert!((block.position.y - block.original_y()).abs() < f32::EPSILON);
        assert!(block.fall_speed().abs() < f32::EPSILON);
    }

    #[rstest]
    #[case::left_near(780.0, true)]
    #[case::centre(825.0, true)]
    #[case::edge(875.0, false)]
    #[case::far(700.0, false)]
    fn trigger_uses_centre_distance(block: FallerEnemy, #[case] x: f32, #[case] expected: bool) {
        assert_eq!(block.in_trigger_range(x), expected);
    }
}
