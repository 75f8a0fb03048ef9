//! Runtime configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional
//! TOML file, then `BEELINE_`-prefixed environment variables where `__`
//! separates nested keys (`BEELINE_LEVEL__SEED=7`).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    FALLER_COUNT, FALLBACK_GROUND_CLEARANCE, FRAME_SECONDS, GRAVITY, JUMP_STRENGTH,
    PLAYER_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "BEELINE_";

/// Errors raised while assembling a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested configuration file does not exist.
    #[error("configuration file {0} does not exist")]
    MissingFile(String),
    /// A provider produced data that does not fit the schema.
    #[error("failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
    /// The values parsed but are unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Whether clicking a bee hurts it outside of active play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickDamagePolicy {
    /// Clicks hurt bees in every phase, including menus.
    #[default]
    AnyPhase,
    /// Clicks hurt bees only while playing.
    PlayingOnly,
}

/// Screen dimensions in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Window width; also where the camera lock sits at half.
    pub width: f32,
    /// Window height.
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Motion tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in pixels per frame squared.
    pub gravity: f32,
    /// Initial vertical speed of a jump; negative is upwards.
    pub jump_strength: f32,
    /// Horizontal player speed in pixels per frame.
    pub player_speed: f32,
    /// Simulation step in seconds.
    pub timestep: f32,
    /// Upper bound on catch-up steps per host frame.
    pub max_steps_per_frame: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_speed: PLAYER_SPEED,
            timestep: FRAME_SECONDS,
            max_steps_per_frame: 5,
        }
    }
}

/// Level population and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Explicit ground line; derived from the player sprite when absent.
    pub ground: Option<f32>,
    /// Ground clearance used when the player sprite height is unknown.
    pub fallback_ground_clearance: f32,
    /// Fewest bees spawned.
    pub min_flyers: usize,
    /// Most bees spawned.
    pub max_flyers: usize,
    /// Number of falling blocks.
    pub fallers: usize,
    /// Seed for spawn randomness; entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            ground: None,
            fallback_ground_clearance: FALLBACK_GROUND_CLEARANCE,
            min_flyers: 3,
            max_flyers: 8,
            fallers: FALLER_COUNT,
            seed: None,
        }
    }
}

/// Behaviour toggles for questionable legacy rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Phases in which clicking a bee hurts it.
    pub click_damage: ClickDamagePolicy,
    /// Lowest y a dead bee falls to before resting; unbounded when absent.
    pub flyer_fall_limit: Option<f32>,
    /// Updates a bee spends recoiling after a sting or hit.
    pub sting_cooldown_frames: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            click_damage: ClickDamagePolicy::AnyPhase,
            flyer_fall_limit: None,
            sting_cooldown_frames: 1,
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window size.
    pub screen: ScreenConfig,
    /// Movement and timestep tuning.
    pub physics: PhysicsConfig,
    /// Level layout.
    pub level: LevelConfig,
    /// Optional rule variations.
    pub rules: RulesConfig,
}

impl GameConfig {
    /// Loads defaults, the optional TOML file at `path` and environment
    /// overrides, then validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] when `path` is given but absent,
    /// [`ConfigError::Extract`] when a provider yields malformed values and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = path {
            if !file.is_file() {
                return Err(ConfigError::MissingFile(file.display().to_string()));
            }
            figment = figment.merge(Toml::file(file));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Extract`] for malformed input and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would make the simulation meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "screen must be positive, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if self.physics.timestep <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "timestep must be positive, got {}",
                self.physics.timestep
            )));
        }
        if self.level.min_flyers > self.level.max_flyers {
            return Err(ConfigError::Invalid(format!(
                "min_flyers ({}) exceeds max_flyers ({})",
                self.level.min_flyers, self.level.max_flyers
            )));
        }
        Ok(())
    }
}
