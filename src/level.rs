//! Level layout: enemy spawns, the exit door and on-screen controls.

use glam::Vec2;
use hashbrown::HashMap;
use rand::Rng;

use crate::assets::{size_or_fallback, AssetId, AssetMetrics};
use crate::config::GameConfig;
use crate::constants::{FALLER_DROP_HEIGHT, FALLER_SPACING, FLYER_MAX_SPEED, FLYER_MIN_SPEED};
use crate::faller::FallerEnemy;
use crate::flyer::FlyerEnemy;
use crate::kinematics::{Aabb, Bounded};

/// A static marker box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Top-left corner in screen space.
    pub position: Vec2,
    /// Box size.
    pub size: Vec2,
}

impl Bounded for Marker {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

/// The exit door, built from two stacked markers at the far right of the
/// level. Only the bottom half completes the level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEnd {
    /// Decorative upper half.
    pub top: Marker,
    /// Lower half; touching it completes the level.
    pub bottom: Marker,
    home_x: (f32, f32),
}

impl LevelEnd {
    /// Places the door with its bottom centre at `(x, ground)`.
    #[must_use]
    pub fn new(x: f32, ground: f32, bottom_size: Vec2, top_size: Vec2) -> Self {
        let bottom = Marker {
            position: Vec2::new(x - bottom_size.x / 2.0, ground - bottom_size.y),
            size: bottom_size,
        };
        let top = Marker {
            position: Vec2::new(x - top_size.x / 2.0, bottom.position.y - top_size.y),
            size: top_size,
        };
        Self {
            home_x: (top.position.x, bottom.position.x),
            top,
            bottom,
        }
    }

    /// Moves both markers left as the camera scrolls right.
    pub fn shift_left(&mut self, amount: f32) {
        self.top.position.x -= amount;
        self.bottom.position.x -= amount;
    }

    /// Returns the door to its unscrolled position.
    pub fn reset(&mut self) {
        self.top.position.x = self.home_x.0;
        self.bottom.position.x = self.home_x.1;
    }
}

/// Clickable screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Menu: begin playing.
    Start,
    /// Game over: play again.
    Retry,
    /// Playing: toggle music.
    Sound,
    /// Menu: quit.
    Quit,
}

/// Layout of the on-screen controls.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    regions: HashMap<Control, Aabb>,
}

impl Controls {
    /// Lays out the buttons for a screen of `size` pixels.
    pub fn layout(size: Vec2, metrics: &dyn AssetMetrics) -> Self {
        let button = size_or_fallback(metrics, AssetId::Button);
        let icon = size_or_fallback(metrics, AssetId::IconButton);
        let centre = size / 2.0;
        let top_right = |right: f32| Aabb::new(Vec2::new(right - icon.x, 10.0), icon);

        let mut regions = HashMap::new();
        regions.insert(Control::Start, Aabb::from_center(centre, button));
        regions.insert(
            Control::Retry,
            Aabb::from_center(centre + Vec2::new(0.0, 50.0), button),
        );
        regions.insert(Control::Sound, top_right(size.x - 10.0));
        regions.insert(Control::Quit, top_right(size.x - 60.0));
        Self { regions }
    }

    /// Region occupied by `control`, if it is laid out.
    #[must_use]
    pub fn region(&self, control: Control) -> Option<Aabb> {
        self.regions.get(&control).copied()
    }

    /// Returns `true` when `point` falls inside `control`.
    #[must_use]
    pub fn hit(&self, control: Control, point: Vec2) -> bool {
        self.region(control).is_some_and(|region| region.contains(point))
    }
}

/// Spawns a randomised set of bees over the right half of the first screens.
pub fn spawn_flyers(
    config: &GameConfig,
    ground: f32,
    size: Vec2,
    rng: &mut impl Rng,
) -> Vec<FlyerEnemy> {
    let level = &config.level;
    let count = rng.gen_range(level.min_flyers..=level.max_flyers);
    let width = config.screen.width;
    let (min_y, max_y) = (50.0, (ground - 50.0).max(50.0));
    (0..count)
        .map(|_| {
            let center = Vec2::new(
                rng.gen_range(width / 2.0..=width + 400.0).round(),
                rng.gen_range(min_y..=max_y).round(),
            );
            let speed = rng.gen_range(FLYER_MIN_SPEED..FLYER_MAX_SPEED);
            FlyerEnemy::new(center - size / 2.0, size, speed)
        })
        .collect()
}

/// Places the falling blocks at regular spacing beyond the first screen.
#[must_use]
pub fn spawn_fallers(config: &GameConfig, ground: f32, size: Vec2) -> Vec<FallerEnemy> {
    (0..config.level.fallers)
        .map(|i| {
            #[expect(
                clippy::cast_precision_loss,
                reason = "Faller counts are tiny and fit exactly in f32."
            )]
            let step = i as f32 * FALLER_SPACING;
            let center = Vec2::new(config.screen.width + step, ground - FALLER_DROP_HEIGHT);
            FallerEnemy::new(center - size / 2.0, size)
        })
        .collect()
}
