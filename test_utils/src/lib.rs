//! Utility helpers for tests.
//!
//! Builders for [`beeline::Game`] sessions with a known layout, canned
//! input states and a few `anyhow`-based checks shared by the integration
//! suites.
pub mod builder;
pub mod input;

pub use builder::GameBuilder;

use anyhow::{ensure, Result};
use beeline::{AudioIntent, Game, GamePhase, InputState};

/// Runs `steps` fixed updates with `input` held throughout.
pub fn run_steps(game: &mut Game, steps: usize, input: &InputState) {
    let dt = game.config().physics.timestep;
    for _ in 0..steps {
        game.update(dt, input);
    }
}

/// Removes and returns every pending audio intent.
pub fn drain_audio(game: &mut Game) -> Vec<AudioIntent> {
    game.audio_mut().drain().collect()
}

/// Checks that the game is in `expected`.
///
/// # Errors
/// Returns an error naming both phases when they differ.
pub fn ensure_phase(game: &Game, expected: GamePhase) -> Result<()> {
    ensure!(
        game.phase() == expected,
        "expected phase {expected:?}, found {:?}",
        game.phase()
    );
    Ok(())
}
