//! Player controller: walking, crouching, jumping and the hurt timer.

use glam::Vec2;
use log::debug;
use serde::Serialize;

use crate::constants::{ANIMATION_TICKS, HURT_FRAMES, PLAYER_SPAWN_X, WALK_FRAMES};
use crate::kinematics::{Aabb, Bounded, FallIntegrator, Landing};
use crate::world::Health;

/// Animation state of the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerPose {
    /// Standing still.
    Idle,
    /// Walking; the frame cycles through `0..WALK_FRAMES`.
    Walk(usize),
    /// Ducking under danger.
    Crouch,
    /// Recently hit.
    Hit,
}

/// Outcome of a rightward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightStep {
    /// The player moved on screen.
    Moved,
    /// The player is locked at the screen centre; the world must scroll.
    Scroll,
}

/// The controllable character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner in screen space.
    pub position: Vec2,
    /// Sprite size.
    pub size: Vec2,
    crouching: bool,
    walking: bool,
    hurt_frames: u32,
    walk_frame: usize,
    walk_ticks: u32,
}

impl Player {
    /// Creates a player standing on `ground` at the spawn point.
    #[must_use]
    pub fn new(size: Vec2, ground: f32) -> Self {
        let mut player = Self {
            position: Vec2::ZERO,
            size,
            crouching: false,
            walking: false,
            hurt_frames: 0,
            walk_frame: 0,
            walk_ticks: 0,
        };
        player.reset_position(ground);
        player
    }

    /// Places the bottom-left corner at the spawn point on `ground` and
    /// clears transient state.
    pub fn reset_position(&mut self, ground: f32) {
        self.position = Vec2::new(PLAYER_SPAWN_X, ground - self.size.y);
        self.crouching = false;
        self.walking = false;
        self.hurt_frames = 0;
        self.walk_frame = 0;
        self.walk_ticks = 0;
    }

    /// Horizontal point compared against the screen centre for the camera
    /// lock.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        self.position.x + self.size.x / 2.0
    }

    /// Bottom edge in screen space.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Returns `true` while crouched and immune to damage.
    #[must_use]
    pub const fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Returns `true` while the post-hit invulnerability runs.
    #[must_use]
    pub const fn is_hurt(&self) -> bool {
        self.hurt_frames > 0
    }

    /// Remaining invulnerability frames.
    #[must_use]
    pub const fn hurt_frames(&self) -> u32 {
        self.hurt_frames
    }

    /// Applies this tick's crouch input.
    pub fn set_crouching(&mut self, crouching: bool) {
        self.crouching = crouching;
    }

    /// Counts down the hurt timer; called once per update.
    pub fn update(&mut self) {
        if self.hurt_frames > 0 {
            self.hurt_frames -= 1;
            if self.hurt_frames == 0 {
                debug!("player recovered");
            }
        }
    }

    /// Applies `amount` damage unless the player is hurt or crouching.
    ///
    /// Returns `true` when the hit landed.
    pub fn take_damage(&mut self, amount: i32, health: &mut Health) -> bool {
        if self.is_hurt() || self.crouching {
            return false;
        }
        health.damage(amount);
        self.hurt_frames = HURT_FRAMES;
        debug!("player took {amount} damage, health now {}", health.current());
        true
    }

    /// Moves right while the midpoint is short of `screen_center`.
    ///
    /// From the centre onwards the player stays put and the caller scrolls
    /// the world instead.
    pub fn step_right(&mut self, speed: f32, screen_center: f32) -> RightStep {
        if self.midpoint() < screen_center {
            self.position.x += speed;
            RightStep::Moved
        } else {
            RightStep::Scroll
        }
    }

    /// Moves left, never past the left screen edge.
    ///
    /// Returns `false` when the player was already at the edge.
    pub fn step_left(&mut self, speed: f32) -> bool {
        if self.position.x > 0.0 {
            self.position.x = (self.position.x - speed).max(0.0);
            true
        } else {
            false
        }
    }

    /// Records whether the player walked this tick and advances the walk
    /// cycle when it did.
    pub fn set_walking(&mut self, walking: bool) {
        self.walking = walking;
        if walking {
            self.walk_ticks += 1;
            if self.walk_ticks >= ANIMATION_TICKS {
                self.walk_ticks = 0;
                self.walk_frame = (self.walk_frame + 1) % WALK_FRAMES;
            }
        }
    }

    /// Index into the walk cycle.
    #[must_use]
    pub const fn walk_frame(&self) -> usize {
        self.walk_frame
    }

    /// Current animation state; crouching wins over being hit, which wins
    /// over walking.
    #[must_use]
    pub const fn pose(&self) -> PlayerPose {
        if self.crouching {
            PlayerPose::Crouch
        } else if self.hurt_frames > 0 {
            PlayerPose::Hit
        } else if self.walking {
            PlayerPose::Walk(self.walk_frame)
        } else {
            PlayerPose::Idle
        }
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

/// Vertical jump state owned by the world.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Jump {
    airborne: bool,
    motion: FallIntegrator,
}

impl Jump {
    /// Returns `true` while airborne.
    #[must_use]
    pub const fn is_jumping(&self) -> bool {
        self.airborne
    }

    /// Vertical speed; negative while rising.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.motion.velocity
    }

    /// Starts a jump with `strength` initial speed.
    ///
    /// Ignored while already airborne; returns `true` when a jump began.
    pub fn start(&mut self, strength: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.motion = FallIntegrator::with_velocity(strength);
        true
    }

    /// Moves the player one frame along the jump arc.
    pub fn integrate(&mut self, player: &mut Player, ground: f32, gravity: f32) {
        if !self.airborne {
            return;
        }
        let landing = self
            .motion
            .step(&mut player.position.y, player.size.y, ground, gravity);
        if landing == Landing::Landed {
            self.airborne = false;
        }
    }

    /// Returns to the grounded state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
