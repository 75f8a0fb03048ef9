#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Beeline platformer core.
//!
//! The simulation is plain owned data driven by a fixed timestep: a
//! [`Game`] routes input, runs the world and emits audio intents and
//! snapshots for whatever host draws it. The optional `render` feature adds
//! a Bevy shell.
pub mod assets;
pub mod audio;
pub mod config;
pub mod constants;
pub mod faller;
pub mod flyer;
pub mod frame;
pub mod game;
pub mod input;
pub mod kinematics;
pub mod level;
pub mod logging;
pub mod phase;
pub mod player;
pub mod presentation;
pub mod scenery;
pub mod snapshot;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use assets::{AssetId, AssetMetrics, NoAssets, StaticAssets};
pub use audio::{AudioIntent, AudioOutbox};
pub use config::{ClickDamagePolicy, ConfigError, GameConfig};
pub use frame::FrameController;
pub use game::{Flow, Game, SharedMetrics};
pub use input::{InputEvent, InputState, Key};
pub use logging::init as init_logging;
pub use phase::{GamePhase, PhaseTrigger, Transition};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::BeelinePlugin;
pub use snapshot::{SpriteInstance, SpriteKey, WorldSnapshot};
pub use world::{Health, StepOutcome, WorldRules, WorldState};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use beeline::prelude::*;
    //! ```

    pub use crate::kinematics::{Aabb, Bounded};
    pub use crate::Flow;
    pub use crate::Game;
    pub use crate::GameConfig;
    pub use crate::GamePhase;
    pub use crate::InputEvent;
    pub use crate::InputState;
    pub use crate::NoAssets;
    pub use glam::Vec2;
}
