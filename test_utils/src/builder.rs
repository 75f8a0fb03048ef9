//! Builder for test [`Game`] sessions.

use std::sync::Arc;

use beeline::config::ClickDamagePolicy;
use beeline::constants::FALLER_DROP_HEIGHT;
use beeline::faller::FallerEnemy;
use beeline::flyer::FlyerEnemy;
use beeline::{AssetId, Game, GameConfig, NoAssets, PhaseTrigger, SharedMetrics};
use glam::Vec2;

/// Builds a seeded [`Game`] and optionally replaces its enemies with a
/// hand-placed layout.
pub struct GameBuilder {
    config: GameConfig,
    metrics: SharedMetrics,
    flyers: Option<Vec<Vec2>>,
    fallers: Option<Vec<f32>>,
    playing: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// A default configuration with a fixed seed and no assets.
    #[must_use]
    pub fn new() -> Self {
        let mut config = GameConfig::default();
        config.level.seed = Some(1);
        Self {
            config,
            metrics: Arc::new(NoAssets),
            flyers: None,
            fallers: None,
            playing: false,
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.level.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn metrics(mut self, metrics: SharedMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Applies arbitrary changes to the configuration.
    #[must_use]
    pub fn configure(mut self, change: impl FnOnce(&mut GameConfig)) -> Self {
        change(&mut self.config);
        self
    }

    #[must_use]
    pub fn click_damage(mut self, policy: ClickDamagePolicy) -> Self {
        self.config.rules.click_damage = policy;
        self
    }

    /// Removes every bee and block from the level.
    #[must_use]
    pub fn without_enemies(mut self) -> Self {
        self.flyers = Some(Vec::new());
        self.fallers = Some(Vec::new());
        self
    }

    /// Adds a bee centred on `centre`, replacing the random spawns.
    #[must_use]
    pub fn flyer_at(mut self, centre: Vec2) -> Self {
        self.flyers.get_or_insert_with(Vec::new).push(centre);
        self
    }

    /// Adds a block centred on `x`, replacing the regular row.
    #[must_use]
    pub fn faller_at(mut self, x: f32) -> Self {
        self.fallers.get_or_insert_with(Vec::new).push(x);
        self
    }

    /// Starts the session already playing.
    #[must_use]
    pub fn playing(mut self) -> Self {
        self.playing = true;
        self
    }

    #[must_use]
    pub fn build(self) -> Game {
        let mut game = Game::new(self.config, self.metrics);
        let ground = game.world().ground();
        if let Some(centres) = self.flyers {
            let size = AssetId::Flyer.fallback_size();
            game.world_mut().flyers = centres
                .into_iter()
                .map(|centre| FlyerEnemy::new(centre - size / 2.0, size, 2.0))
                .collect();
        }
        if let Some(xs) = self.fallers {
            let size = AssetId::Faller.fallback_size();
            game.world_mut().fallers = xs
                .into_iter()
                .map(|x| {
                    let centre = Vec2::new(x, ground - FALLER_DROP_HEIGHT);
                    FallerEnemy::new(centre - size / 2.0, size)
                })
                .collect();
        }
        if self.playing {
            game.trigger(PhaseTrigger::StartPressed);
        }
        game
    }
}
