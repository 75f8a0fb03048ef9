//! Patrolling bee enemy.
//!
//! A bee flies back and forth around its spawn point. Touching the player
//! stings once and sends the bee recoiling; clicks wear its health down until
//! it drops out of the sky. Dead bees are never removed, they fall and keep
//! their corpse sprite.

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::constants::{
    FLYER_CONTACT_DAMAGE, FLYER_FLAP_SECONDS, FLYER_HEALTH,
    FLYER_HIT_DAMAGE, FLYER_PATROL_RANGE, FLYER_SCROLL_DRAG,
};
use crate::kinematics::{Aabb, Bounded, FallIntegrator};

/// Behaviour state of a bee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlyerState {
    /// Alive and sweeping across its patrol range.
    Patrolling,
    /// Alive and recoiling from a hit; cannot sting until it recovers.
    Stung {
        /// Updates left before patrolling resumes.
        frames_left: u32,
    },
    /// Dead and dropping.
    Falling(FallIntegrator),
    /// Dead and settled at the configured fall limit.
    Resting,
}

/// Animation state of a bee sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlyerPose {
    /// Wings flapping; alternates between frames 0 and 1.
    Flap(usize),
    /// Recoiling from a hit.
    Hurt,
    /// Dead.
    Fallen,
}

/// Static parameters shared by all bees in a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyerRules {
    /// Acceleration applied to dead bees.
    pub gravity: f32,
    /// Updates spent in [`FlyerState::Stung`].
    pub sting_cooldown_frames: u32,
    /// Lowest top edge a dead bee reaches; unbounded when `None`.
    pub fall_limit: Option<f32>,
}

/// A bee.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyerEnemy {
    /// Top-left corner in screen space.
    pub position: Vec2,
    /// Sprite size.
    pub size: Vec2,
    /// Patrol anchor; also the x restored on reset.
    pub start_x: f32,
    /// Distance from `start_x` at which the bee turns.
    pub patrol_range: f32,
    /// Horizontal pixels per frame.
    pub speed: f32,
    /// `1.0` flying right, `-1.0` flying left.
    pub direction: f32,
    health: i32,
    state: FlyerState,
    flap_frame: usize,
    flap_timer: f32,
}

impl FlyerEnemy {
    /// Creates a patrolling bee anchored at `position`.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            position,
            size,
            start_x: position.x,
            patrol_range: FLYER_PATROL_RANGE,
            speed,
            direction: 1.0,
            health: FLYER_HEALTH,
            state: FlyerState::Patrolling,
            flap_frame: 0,
            flap_timer: 0.0,
        }
    }

    /// Remaining health; zero or less once dead.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Current behaviour state.
    #[must_use]
    pub const fn state(&self) -> FlyerState {
        self.state
    }

    /// Returns `true` while health is above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Damage dealt to the player on contact.
    #[must_use]
    pub const fn contact_damage(&self) -> i32 {
        FLYER_CONTACT_DAMAGE
    }

    /// Returns `true` when touching the player should sting.
    #[must_use]
    pub fn can_sting(&self) -> bool {
        self.state == FlyerState::Patrolling
    }

    /// Image to draw this frame.
    #[must_use]
    pub const fn pose(&self) -> FlyerPose {
        match self.state {
            FlyerState::Patrolling => FlyerPose::Flap(self.flap_frame),
            FlyerState::Stung { .. } => FlyerPose::Hurt,
            FlyerState::Falling(_) | FlyerState::Resting => FlyerPose::Fallen,
        }
    }

    /// Advances the bee by one frame of `dt` seconds while the world is
    /// scrolled by `offset`.
    pub fn update(&mut self, dt: f32, offset: f32, rules: &FlyerRules) {
        match self.state {
            FlyerState::Falling(mut motion) => {
                motion.step_unbounded(&mut self.position.y, rules.gravity);
                self.state = match rules.fall_limit {
                    Some(limit) if self.position.y >= limit => {
                        self.position.y = limit;
                        FlyerState::Resting
                    }
                    _ => FlyerState::Falling(motion),
                };
            }
            FlyerState::Resting => {}
            FlyerState::Stung { frames_left } => {
                self.animate(dt);
                self.state = if frames_left > 1 {
                    FlyerState::Stung {
                        frames_left: frames_left - 1,
                    }
                } else {
                    FlyerState::Patrolling
                };
                self.advance(offset);
            }
            FlyerState::Patrolling => {
                self.animate(dt);
                if self.position.x > self.start_x + self.patrol_range {
                    self.direction = -1.0;
                } else if self.position.x < self.start_x - self.patrol_range {
                    self.direction = 1.0;
                }
                self.advance(offset);
            }
        }
    }

    fn advance(&mut self, offset: f32) {
        self.position.x += self.speed * self.direction;
        self.position.x -= offset / FLYER_SCROLL_DRAG;
    }

    fn animate(&mut self, dt: f32) {
        self.flap_timer += dt;
        if self.flap_timer >= FLYER_FLAP_SECONDS {
            self.flap_timer = 0.0;
            self.flap_frame = (self.flap_frame + 1) % 2;
        }
    }

    /// Reverses direction and starts the recoil cooldown.
    fn recoil(&mut self, rules: &FlyerRules) {
        self.direction = -self.direction;
        if rules.sting_cooldown_frames == 0 {
            self.state = FlyerState::Patrolling;
        } else {
            self.state = FlyerState::Stung {
                frames_left: rules.sting_cooldown_frames,
            };
        }
    }

    /// Marks a successful sting on the player.
    ///
    /// Returns the damage to apply, or `None` when the bee cannot sting.
    pub fn sting(&mut self, rules: &FlyerRules) -> Option<i32> {
        if !self.can_sting() {
            return None;
        }
        self.recoil(rules);
        Some(self.contact_damage())
    }

    /// Takes one hit.
    ///
    /// Dead bees ignore further hits. A bee reduced to zero health starts
    /// falling; otherwise it recoils.
    pub fn get_hurt(&mut self, rules: &FlyerRules) {
        if !self.is_alive() {
            return;
        }
        self.health -= FLYER_HIT_DAMAGE;
        if self.is_alive() {
            self.recoil(rules);
            debug!("bee hit, {} health left", self.health);
        } else {
            // Drops from a standstill; gravity picks it up from the next frame.
            self.state = FlyerState::Falling(FallIntegrator::default());
            debug!("bee killed at {}", self.position);
        }
    }

    /// Returns the bee to its anchor, ending any recoil.
    ///
    /// Health and death are permanent across resets.
    pub fn reset(&mut self) {
        self.position.x = self.start_x;
        if let FlyerState::Stung { .. } = self.state {
            self.state = FlyerState::Patrolling;
        }
    }
}

impl Bounded for FlyerEnemy {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}
