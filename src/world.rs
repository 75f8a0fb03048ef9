//! World state and the per-frame simulation step.
//!
//! [`WorldState`] owns every entity in the level. It knows nothing about
//! menus or phases; [`WorldState::step`] reports what happened and the
//! caller decides how the game reacts.

use glam::Vec2;
use log::{debug, trace};
use rand::Rng;

use crate::assets::{ground_level, size_or_fallback, AssetId, AssetMetrics};
use crate::audio::{AudioIntent, AudioOutbox};
use crate::config::GameConfig;
use crate::constants::MAX_HEALTH;
use crate::faller::FallerEnemy;
use crate::flyer::{FlyerEnemy, FlyerRules};
use crate::input::InputState;
use crate::kinematics::{intersects, Bounded};
use crate::level::{spawn_fallers, spawn_flyers, LevelEnd};
use crate::player::{Jump, Player, RightStep};
use crate::scenery::Scenery;

/// The player's shared health pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// A full pool of [`MAX_HEALTH`] points.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            current: MAX_HEALTH,
            max: MAX_HEALTH,
        }
    }

    /// Remaining health; may dip below zero.
    #[must_use]
    pub const fn current(&self) -> i32 {
        self.current
    }

    /// Health restored on reset.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Current health clamped at zero for display.
    #[must_use]
    pub fn displayed(&self) -> i32 {
        self.current.max(0)
    }

    /// Returns `true` once health has run out.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Subtracts `amount` without clamping.
    pub fn damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    /// Overrides the current value, e.g. for scripted scenarios.
    pub fn set(&mut self, value: i32) {
        self.current = value;
    }

    /// Refills the pool to [`Self::max`].
    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

/// Tuning applied on every step, derived from [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRules {
    /// Downward acceleration for jumps and blocks.
    pub gravity: f32,
    /// Take-off speed; negative is upwards.
    pub jump_strength: f32,
    /// Horizontal pixels per frame.
    pub player_speed: f32,
    /// The camera locks at half of this.
    pub screen_width: f32,
    /// Bee tuning.
    pub flyer: FlyerRules,
}

impl From<&GameConfig> for WorldRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            gravity: config.physics.gravity,
            jump_strength: config.physics.jump_strength,
            player_speed: config.physics.player_speed,
            screen_width: config.screen.width,
            flyer: FlyerRules {
                gravity: config.physics.gravity,
                sting_cooldown_frames: config.rules.sting_cooldown_frames,
                fall_limit: config.rules.flyer_fall_limit,
            },
        }
    }
}

/// What a simulation step observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing that ends play happened.
    Continue,
    /// Health was already exhausted; nothing moved.
    HealthDepleted,
    /// The player touched the bottom of the exit door.
    DoorReached,
}

/// Every entity in the level plus the scroll and health bookkeeping.
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Horizontal camera scroll accumulated past the screen centre.
    pub offset: f32,
    /// Shared player health.
    pub health: Health,
    /// Player jump arc.
    pub jump: Jump,
    /// The player.
    pub player: Player,
    /// Bees, including dead ones.
    pub flyers: Vec<FlyerEnemy>,
    /// Falling blocks.
    pub fallers: Vec<FallerEnemy>,
    /// Exit door.
    pub level_end: LevelEnd,
    /// Background strip, built when play starts.
    pub scenery: Scenery,
    ground: f32,
}

impl WorldState {
    /// Builds the level described by `config`.
    pub fn new(config: &GameConfig, metrics: &dyn AssetMetrics, rng: &mut impl Rng) -> Self {
        let ground = ground_level(
            metrics,
            config.screen.height,
            config.level.fallback_ground_clearance,
            config.level.ground,
        );
        let player = Player::new(size_or_fallback(metrics, AssetId::Player), ground);
        let flyers = spawn_flyers(config, ground, size_or_fallback(metrics, AssetId::Flyer), rng);
        let fallers = spawn_fallers(config, ground, size_or_fallback(metrics, AssetId::Faller));
        let level_end = LevelEnd::new(
            config.screen.width,
            ground,
            size_or_fallback(metrics, AssetId::DoorBottom),
            size_or_fallback(metrics, AssetId::DoorTop),
        );
        debug!(
            "level built: ground={ground}, {} bees, {} blocks",
            flyers.len(),
            fallers.len()
        );
        Self {
            offset: 0.0,
            health: Health::full(),
            jump: Jump::default(),
            player,
            flyers,
            fallers,
            level_end,
            scenery: Scenery::default(),
            ground,
        }
    }

    /// Floor line shared by the player and the blocks.
    #[must_use]
    pub const fn ground(&self) -> f32 {
        self.ground
    }

    /// Restores the level to its starting layout.
    ///
    /// Dead bees stay dead; everything else returns to its initial state.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.health.restore();
        self.jump.reset();
        self.scenery.invalidate();
        self.player.reset_position(self.ground);
        for flyer in &mut self.flyers {
            flyer.reset();
        }
        for faller in &mut self.fallers {
            faller.reset();
        }
        self.level_end.reset();
        debug!("world reset");
    }

    /// Runs one frame of play.
    ///
    /// The order is fixed: health check, player timers, bees, blocks,
    /// controls, jump arc, door. A depleted health pool ends the step before
    /// anything moves.
    pub fn step(
        &mut self,
        dt: f32,
        input: &InputState,
        rules: &WorldRules,
        audio: &mut AudioOutbox,
    ) -> StepOutcome {
        if self.health.is_depleted() {
            return StepOutcome::HealthDepleted;
        }

        self.player.update();
        self.update_flyers(dt, rules, audio);
        self.update_fallers(rules, audio);
        self.apply_controls(input, rules, audio);
        self.jump
            .integrate(&mut self.player, self.ground, rules.gravity);

        trace!(
            "step: player={} offset={} health={}",
            self.player.position,
            self.offset,
            self.health.current()
        );

        if intersects(&self.player, &self.level_end.bottom) {
            StepOutcome::DoorReached
        } else {
            StepOutcome::Continue
        }
    }

    fn update_flyers(&mut self, dt: f32, rules: &WorldRules, audio: &mut AudioOutbox) {
        let Self {
            player,
            health,
            flyers,
            offset,
            ..
        } = self;
        for flyer in flyers.iter_mut() {
            flyer.update(dt, *offset, &rules.flyer);
            if flyer.is_alive() && flyer.can_sting() && intersects(&*player, &*flyer) {
                if let Some(damage) = flyer.sting(&rules.flyer) {
                    hurt_player(player, health, damage, audio);
                }
            }
        }
    }

    fn update_fallers(&mut self, rules: &WorldRules, audio: &mut AudioOutbox) {
        let Self {
            player,
            health,
            fallers,
            ground,
            ..
        } = self;
        for faller in fallers.iter_mut() {
            faller.update(*ground, rules.gravity);
            if !faller.is_activated() && faller.in_trigger_range(player.bounds().center().x) {
                faller.activate();
            }
            if faller.is_activated() && intersects(&*player, &*faller) {
                hurt_player(player, health, faller.contact_damage(), audio);
            }
        }
    }

    fn apply_controls(&mut self, input: &InputState, rules: &WorldRules, audio: &mut AudioOutbox) {
        let crouching = input.crouch();
        self.player.set_crouching(crouching);

        let mut walked = false;
        if input.right && !crouching {
            let centre = rules.screen_width / 2.0;
            if self.player.step_right(rules.player_speed, centre) == RightStep::Scroll {
                self.offset += rules.player_speed;
                self.level_end.shift_left(rules.player_speed);
            }
            walked = true;
        } else if input.left && !crouching {
            walked = self.player.step_left(rules.player_speed);
        }
        self.player.set_walking(walked);

        if input.jump && !crouching && self.jump.start(rules.jump_strength) {
            audio.push(AudioIntent::PlayJump);
        }
    }

    /// Position of the player's top-left corner.
    #[must_use]
    pub const fn player_position(&self) -> Vec2 {
        self.player.position
    }
}

fn hurt_player(player: &mut Player, health: &mut Health, damage: i32, audio: &mut AudioOutbox) {
    if player.take_damage(damage, health) {
        audio.push(AudioIntent::PlayHurt);
    }
}
