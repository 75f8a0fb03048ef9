//! Fixed-timestep driver.
//!
//! Hosts report wall-clock time per rendered frame; the controller turns it
//! into whole simulation steps so play speed does not depend on frame rate.

use bevy::prelude::Resource;
use log::warn;

use crate::config::PhysicsConfig;
use crate::game::Game;
use crate::input::InputState;

/// Accumulates elapsed time and runs [`Game::update`] in fixed steps.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FrameController {
    step: f32,
    accumulator: f32,
    frame_counter: u64,
    max_steps: u32,
}

impl FrameController {
    /// Creates a controller with the given step length and per-call cap.
    #[must_use]
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            frame_counter: 0,
            max_steps: max_steps.max(1),
        }
    }

    /// Step length in seconds.
    #[must_use]
    pub const fn step(&self) -> f32 {
        self.step
    }

    /// Total steps taken since creation.
    #[must_use]
    pub const fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Adds `elapsed` seconds and runs every whole step now due.
    ///
    /// At most `max_steps` steps run per call; time beyond the cap is
    /// discarded so a long stall does not trigger a catch-up burst.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, game: &mut Game, elapsed: f32, input: &InputState) -> usize {
        self.accumulator += elapsed.max(0.0);
        let cap = usize::try_from(self.max_steps).unwrap_or(usize::MAX);
        let mut steps = 0;
        while self.accumulator >= self.step {
            if steps == cap {
                warn!(
                    "simulation fell behind; dropping {:.3}s",
                    self.accumulator - self.accumulator % self.step
                );
                self.accumulator %= self.step;
                break;
            }
            self.accumulator -= self.step;
            game.update(self.step, input);
            self.frame_counter += 1;
            steps += 1;
        }
        steps
    }
}

impl From<&PhysicsConfig> for FrameController {
    fn from(physics: &PhysicsConfig) -> Self {
        Self::new(physics.timestep, physics.max_steps_per_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::NoAssets;
    use crate::config::GameConfig;
    use crate::phase::PhaseTrigger;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    const STEP: f32 = 1.0 / 60.0;

    #[fixture]
    fn game() -> Game {
        let mut config = GameConfig::default();
        config.level.seed = Some(9);
        let mut game = Game::new(config, Arc::new(NoAssets));
        game.world_mut().flyers.clear();
        game.world_mut().fallers.clear();
        game.trigger(PhaseTrigger::StartPressed);
        game
    }

    #[rstest]
    fn partial_frames_accumulate(mut game: Game) {
        let mut frames = FrameController::new(STEP, 5);
        assert_eq!(frames.advance(&mut game, STEP * 0.6, &InputState::default()), 0);
        assert_eq!(frames.advance(&mut game, STEP * 0.6, &InputState::default()), 1);
        assert_eq!(frames.frame_counter(), 1);
    }

    #[rstest]
    fn each_step_moves_the_player_once(mut game: Game) {
        let mut frames = FrameController::new(STEP, 5);
        let start = game.world().player.position.x;
        let steps = frames.advance(&mut game, STEP * 3.5, &InputState::moving_right());
        assert_eq!(steps, 3);
        assert!((game.world().player.position.x - start - 15.0).abs() < 1e-3);
    }

    #[rstest]
    fn stalls_are_capped(mut game: Game) {
        let mut frames = FrameController::new(STEP, 5);
        assert_eq!(frames.advance(&mut game, 2.0, &InputState::default()), 5);
        assert_eq!(frames.advance(&mut game, 0.0, &InputState::default()), 0);
    }

    #[rstest]
    fn counter_runs_outside_play(mut game: Game) {
        game.trigger(PhaseTrigger::Escape);
        let mut frames = FrameController::from(&PhysicsConfig::default());
        let before = game.world().player.position;
        assert_eq!(frames.advance(&mut game, STEP * 2.0, &InputState::moving_right()), 2);
        assert_eq!(frames.frame_counter(), 2);
        assert_eq!(game.world().player.position, before);
    }
}
