//! Shared fixture for `rspec` suites driving a [`Game`].

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use beeline::{Game, InputState};
use rspec::report::Report;
use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};

/// A game behind a mutex, rebuilt from `build` before each example.
#[derive(Clone)]
pub struct GameFixture {
    game: Arc<Mutex<Game>>,
    build: fn() -> Game,
}

impl fmt::Debug for GameFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameFixture").finish_non_exhaustive()
    }
}

impl GameFixture {
    pub fn new(build: fn() -> Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(build())),
            build,
        }
    }

    /// Locks the game for inspection or mutation.
    pub fn game(&self) -> MutexGuard<'_, Game> {
        self.game
            .lock()
            .unwrap_or_else(|e| panic!("game mutex poisoned: {e}"))
    }

    /// Throws away the current session and builds a fresh one.
    pub fn reset(&self) {
        *self.game() = (self.build)();
    }

    /// Runs `steps` updates with `input` held.
    pub fn run(&self, steps: usize, input: &InputState) {
        test_utils::run_steps(&mut self.game(), steps, input);
    }
}

/// Runs a suite serially and fails the test if any example failed.
///
/// Examples share one fixture and must not interleave.
pub fn run_serial(suite: &Suite<GameFixture>) {
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(report.is_success(), "rspec suite reported failures");
}
