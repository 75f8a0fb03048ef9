//! The owned game context.
//!
//! [`Game`] ties the phase machine to the world: it routes input events,
//! applies transitions and runs the simulation while playing. It holds no
//! globals and no engine handles, so a host can drive it directly or
//! through the optional Bevy shell.

use std::fmt;
use std::sync::Arc;

use bevy::prelude::Resource;
use glam::Vec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::AssetMetrics;
use crate::audio::{AudioIntent, AudioOutbox};
use crate::config::{ClickDamagePolicy, GameConfig};
use crate::input::{InputEvent, InputState, Key};
use crate::kinematics::Bounded;
use crate::level::{Control, Controls};
use crate::phase::{GamePhase, PhaseTrigger, Transition};
use crate::snapshot::WorldSnapshot;
use crate::world::{StepOutcome, WorldRules, WorldState};

/// Asset metrics shared between the game and its host.
pub type SharedMetrics = Arc<dyn AssetMetrics + Send + Sync>;

/// Whether the host should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep stepping and drawing.
    Continue,
    /// Close the window.
    Exit,
}

/// Phase, world, controls and audio for one play session.
#[derive(Resource)]
pub struct Game {
    phase: GamePhase,
    world: WorldState,
    config: GameConfig,
    rules: WorldRules,
    controls: Controls,
    audio: AudioOutbox,
    metrics: SharedMetrics,
    rng: StdRng,
    muted: bool,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("muted", &self.muted)
            .field("world", &self.world)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Builds a new session on the menu screen.
    ///
    /// The level layout is drawn from a generator seeded with
    /// `config.level.seed` when present. Background music is requested
    /// immediately.
    #[must_use]
    pub fn new(config: GameConfig, metrics: SharedMetrics) -> Self {
        let mut rng = config
            .level
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let world = WorldState::new(&config, metrics.as_ref(), &mut rng);
        let controls = Controls::layout(
            Vec2::new(config.screen.width, config.screen.height),
            metrics.as_ref(),
        );
        let mut audio = AudioOutbox::default();
        audio.push(AudioIntent::StartMusic);
        Self {
            phase: GamePhase::default(),
            rules: WorldRules::from(&config),
            world,
            config,
            controls,
            audio,
            metrics,
            rng,
            muted: false,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The simulated level.
    #[must_use]
    pub const fn world(&self) -> &WorldState {
        &self.world
    }

    /// Mutable world access for hosts and scripted scenarios.
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Configuration the game was built with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Per-step tuning derived from the configuration.
    #[must_use]
    pub const fn rules(&self) -> &WorldRules {
        &self.rules
    }

    /// Clickable button regions.
    #[must_use]
    pub const fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Returns `true` while music is paused by the sound button.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Audio intents waiting for the host.
    pub fn audio_mut(&mut self) -> &mut AudioOutbox {
        &mut self.audio
    }

    /// Routes a discrete input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::KeyDown(Key::Escape) => self.trigger(PhaseTrigger::Escape),
            InputEvent::KeyDown(Key::Retry) => self.trigger(PhaseTrigger::RetryPressed),
            InputEvent::PointerDown(point) => self.click(point),
        }
    }

    fn click(&mut self, point: Vec2) -> Flow {
        let phase_at_click = self.phase;
        let flow = match phase_at_click {
            GamePhase::Menu if self.controls.hit(Control::Start, point) => {
                self.trigger(PhaseTrigger::StartPressed)
            }
            GamePhase::Menu if self.controls.hit(Control::Quit, point) => {
                self.trigger(PhaseTrigger::QuitPressed)
            }
            GamePhase::GameOver if self.controls.hit(Control::Retry, point) => {
                self.trigger(PhaseTrigger::RetryPressed)
            }
            GamePhase::Playing if self.controls.hit(Control::Sound, point) => {
                self.toggle_sound();
                Flow::Continue
            }
            _ => Flow::Continue,
        };
        if flow == Flow::Exit {
            return flow;
        }

        let clicks_hurt = match self.config.rules.click_damage {
            ClickDamagePolicy::AnyPhase => true,
            ClickDamagePolicy::PlayingOnly => phase_at_click.is_playing(),
        };
        if clicks_hurt {
            for flyer in &mut self.world.flyers {
                if flyer.bounds().contains(point) {
                    flyer.get_hurt(&self.rules.flyer);
                }
            }
        }
        flow
    }

    fn toggle_sound(&mut self) {
        self.muted = !self.muted;
        let intent = if self.muted {
            AudioIntent::PauseMusic
        } else {
            AudioIntent::UnpauseMusic
        };
        debug!("sound toggled, muted={}", self.muted);
        self.audio.push(intent);
    }

    /// Feeds `trigger` to the phase machine and carries out the result.
    pub fn trigger(&mut self, trigger: PhaseTrigger) -> Flow {
        match self.phase.on(trigger) {
            Transition::Stay => Flow::Continue,
            Transition::Enter(next) => {
                info!("phase {:?} -> {next:?} on {trigger:?}", self.phase);
                self.phase = next;
                if next.is_playing() {
                    self.build_scenery();
                }
                Flow::Continue
            }
            Transition::Restart => {
                info!("restarting level from {:?}", self.phase);
                self.world.reset();
                self.phase = GamePhase::Playing;
                self.build_scenery();
                Flow::Continue
            }
            Transition::Exit => {
                info!("exit requested from {:?}", self.phase);
                Flow::Exit
            }
        }
    }

    /// Runs one simulation step of `dt` seconds.
    ///
    /// Outside [`GamePhase::Playing`] this does nothing.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if !self.phase.is_playing() {
            return;
        }
        match self
            .world
            .step(dt, input, &self.rules, &mut self.audio)
        {
            StepOutcome::Continue => {}
            StepOutcome::HealthDepleted => {
                self.trigger(PhaseTrigger::HealthDepleted);
            }
            StepOutcome::DoorReached => {
                self.trigger(PhaseTrigger::DoorReached);
            }
        }
    }

    /// Picks the background strip unless one is already in place.
    ///
    /// Runs on every entry into play; a reset throws the strip away so a
    /// retry gets a fresh one.
    fn build_scenery(&mut self) {
        self.world.scenery.ensure_built(
            self.config.screen.width,
            self.metrics.as_ref(),
            &mut self.rng,
        );
    }

    /// Captures the current frame for drawing.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(self.phase, &self.world, self.muted, self.config.screen.width)
    }
}
