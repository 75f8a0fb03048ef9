//! Read-only view of a frame, handed to the presentation layer.

use glam::Vec2;
use serde::Serialize;

use crate::faller::FallerState;
use crate::flyer::FlyerPose;
use crate::phase::GamePhase;
use crate::player::PlayerPose;
use crate::scenery::BackdropTile;
use crate::world::WorldState;

/// What a sprite depicts, independent of any artwork naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpriteKey {
    /// The player in the given pose.
    Player(PlayerPose),
    /// A bee in the given pose.
    Flyer(FlyerPose),
    /// A block; the state picks the image.
    Faller(FallerState),
    /// Upper door half.
    DoorTop,
    /// Lower door half.
    DoorBottom,
}

/// One sprite to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteInstance {
    /// Top-left corner in screen space.
    pub position: Vec2,
    /// Drawn size.
    pub size: Vec2,
    /// Which image to draw.
    pub sprite: SpriteKey,
}

/// Everything needed to draw a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    /// Phase the frame was captured in.
    pub phase: GamePhase,
    /// Horizontal scroll.
    pub offset: f32,
    /// Health clamped at zero.
    pub health: i32,
    /// The player is crouching and cannot be hurt.
    pub protected: bool,
    /// Whether the sound button shows the muted icon.
    pub muted: bool,
    /// The player sprite.
    pub player: SpriteInstance,
    /// Every bee, dead or alive.
    pub flyers: Vec<SpriteInstance>,
    /// Only blocks that have been triggered are visible.
    pub fallers: Vec<SpriteInstance>,
    /// Top then bottom marker.
    pub door: [SpriteInstance; 2],
    /// Background tiles on screen, empty until play starts.
    pub backdrop: Vec<BackdropTile>,
}

impl WorldSnapshot {
    /// Captures `world` as it stands.
    #[must_use]
    pub fn capture(phase: GamePhase, world: &WorldState, muted: bool, screen_width: f32) -> Self {
        let player = SpriteInstance {
            position: world.player.position,
            size: world.player.size,
            sprite: SpriteKey::Player(world.player.pose()),
        };
        let flyers = world
            .flyers
            .iter()
            .map(|flyer| SpriteInstance {
                position: flyer.position,
                size: flyer.size,
                sprite: SpriteKey::Flyer(flyer.pose()),
            })
            .collect();
        let fallers = world
            .fallers
            .iter()
            .filter(|faller| faller.is_activated())
            .map(|faller| SpriteInstance {
                position: faller.position,
                size: faller.size,
                sprite: SpriteKey::Faller(faller.state()),
            })
            .collect();
        let door = [
            SpriteInstance {
                position: world.level_end.top.position,
                size: world.level_end.top.size,
                sprite: SpriteKey::DoorTop,
            },
            SpriteInstance {
                position: world.level_end.bottom.position,
                size: world.level_end.bottom.size,
                sprite: SpriteKey::DoorBottom,
            },
        ];
        Self {
            phase,
            offset: world.offset,
            health: world.health.displayed(),
            protected: world.player.is_crouching(),
            muted,
            player,
            flyers,
            fallers,
            door,
            backdrop: world.scenery.visible_tiles(world.offset, screen_width),
        }
    }
}
