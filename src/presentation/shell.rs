//! Bevy host for the game.
//!
//! `BeelinePlugin` inserts the [`Game`] as a resource, samples the keyboard
//! and mouse every frame, advances the simulation through a
//! [`FrameController`] and redraws the snapshot as flat coloured sprites.
//! Audio intents are drained and logged; no mixer is attached.

use std::sync::Arc;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use log::debug;

use crate::assets::NoAssets;
use crate::config::GameConfig;
use crate::frame::FrameController;
use crate::game::{Flow, Game, SharedMetrics};
use crate::input::{InputEvent, InputState, Key};
use crate::presentation::sprites::{backdrop_tint, sprite_tint, status_line};

/// Marker for entities redrawn from the snapshot every frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Drawn;

/// Keys held during the current frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldInput(pub InputState);

/// Plugin that runs the game inside a Bevy app.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use beeline::config::GameConfig;
/// use beeline::presentation::BeelinePlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(BeelinePlugin::new(GameConfig::default()))
///     .run();
/// ```
pub struct BeelinePlugin {
    config: GameConfig,
    metrics: SharedMetrics,
}

impl BeelinePlugin {
    /// Creates a plugin that draws placeholder shapes at fallback sizes.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(NoAssets),
        }
    }

    /// Uses `metrics` for sprite sizes instead of the fallbacks.
    #[must_use]
    pub fn with_metrics(mut self, metrics: SharedMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Plugin for BeelinePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Game::new(self.config.clone(), Arc::clone(&self.metrics)));
        app.insert_resource(FrameController::from(&self.config.physics));
        app.init_resource::<HeldInput>();
        app.add_systems(Startup, camera_setup);
        app.add_systems(
            Update,
            (read_input, advance_game, drain_audio, draw_snapshot).chain(),
        );
    }
}

fn camera_setup(mut commands: Commands, cameras: Query<&Camera2d>) {
    if cameras.is_empty() {
        commands.spawn((Camera2d, Name::new("BeelineCamera")));
    }
}

/// Samples held keys and forwards discrete presses to the game.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn read_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut held: ResMut<HeldInput>,
    mut game: ResMut<Game>,
    mut exit: MessageWriter<AppExit>,
) {
    held.0 = InputState {
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
        jump: keys.pressed(KeyCode::Space),
        down: keys.pressed(KeyCode::ArrowDown),
        crouch_key: keys.pressed(KeyCode::KeyC),
        left_ctrl: keys.pressed(KeyCode::ControlLeft),
        right_ctrl: keys.pressed(KeyCode::ControlRight),
    };

    let mut events = Vec::new();
    if keys.just_pressed(KeyCode::Escape) {
        events.push(InputEvent::KeyDown(Key::Escape));
    }
    if keys.just_pressed(KeyCode::KeyR) {
        events.push(InputEvent::KeyDown(Key::Retry));
    }
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(point) = windows.single().ok().and_then(Window::cursor_position) {
            events.push(InputEvent::PointerDown(point));
        }
    }

    for event in events {
        if game.handle_event(event) == Flow::Exit {
            exit.write(AppExit::Success);
            return;
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn advance_game(
    time: Res<Time>,
    held: Res<HeldInput>,
    mut frames: ResMut<FrameController>,
    mut game: ResMut<Game>,
) {
    frames.advance(&mut game, time.delta_secs(), &held.0);
}

fn drain_audio(mut game: ResMut<Game>) {
    for intent in game.audio_mut().drain() {
        debug!("audio intent: {intent:?}");
    }
}

/// Converts a top-left screen-space box to a centred Bevy translation.
fn to_world(top_left: Vec2, size: Vec2, screen: Vec2, z: f32) -> Vec3 {
    let centre = top_left + size / 2.0;
    Vec3::new(centre.x - screen.x / 2.0, screen.y / 2.0 - centre.y, z)
}

fn tinted(rgb: [f32; 3], size: Vec2) -> Sprite {
    let [r, g, b] = rgb;
    Sprite::from_color(Color::srgb(r, g, b), size)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn draw_snapshot(
    mut commands: Commands,
    game: Res<Game>,
    drawn: Query<Entity, With<Drawn>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    for entity in &drawn {
        commands.entity(entity).despawn();
    }

    let screen = Vec2::new(game.config().screen.width, game.config().screen.height);
    let snapshot = game.snapshot();
    if let Ok(mut window) = windows.single_mut() {
        let title = status_line(&snapshot);
        if window.title != title {
            window.title = title;
        }
    }

    for tile in &snapshot.backdrop {
        let size = Vec2::new(tile.width, screen.y);
        commands.spawn((
            Drawn,
            tinted(backdrop_tint(tile.backdrop), size),
            Transform::from_translation(to_world(Vec2::new(tile.x, 0.0), size, screen, 0.0)),
        ));
    }

    let layers = snapshot
        .door
        .iter()
        .map(|sprite| (sprite, 1.0))
        .chain(snapshot.fallers.iter().map(|sprite| (sprite, 2.0)))
        .chain(snapshot.flyers.iter().map(|sprite| (sprite, 3.0)))
        .chain(std::iter::once((&snapshot.player, 4.0)));
    for (instance, z) in layers {
        commands.spawn((
            Drawn,
            tinted(sprite_tint(instance.sprite), instance.size),
            Transform::from_translation(to_world(instance.position, instance.size, screen, z)),
        ));
    }
}
