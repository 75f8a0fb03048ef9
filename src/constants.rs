//! Gameplay constants shared by the simulation.
//!
//! Most of these seed [`crate::config::GameConfig`] defaults; the remainder
//! are fixed properties of the level design.
/// Default window width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;
/// Default window height in pixels.
pub const SCREEN_HEIGHT: f32 = 350.0;
/// Fixed simulation step in seconds.
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;
/// Downward acceleration in pixels per frame squared.
pub const GRAVITY: f32 = 0.5;
/// Vertical speed at take-off; negative is upwards.
pub const JUMP_STRENGTH: f32 = -10.0;
/// Horizontal pixels per frame for the player and the scroll.
pub const PLAYER_SPEED: f32 = 5.0;
/// Walk animation advances once every this many moving ticks.
pub const ANIMATION_TICKS: u32 = 8;
/// Images in the walk cycle.
pub const WALK_FRAMES: usize = 3;
/// Player health at the start of every attempt.
pub const MAX_HEALTH: i32 = 100;
/// Frames of invulnerability after the player is hit.
pub const HURT_FRAMES: u32 = 30;
/// Player bottom-left spawn x.
pub const PLAYER_SPAWN_X: f32 = 50.0;
/// Ground clearance used when the player sprite height is unknown.
pub const FALLBACK_GROUND_CLEARANCE: f32 = 50.0;

/// Bee health; four clicks kill.
pub const FLYER_HEALTH: i32 = 20;
/// Bee health lost per click.
pub const FLYER_HIT_DAMAGE: i32 = 5;
/// Player health lost to a sting.
pub const FLYER_CONTACT_DAMAGE: i32 = 10;
/// Distance a bee strays from its anchor before turning.
pub const FLYER_PATROL_RANGE: f32 = 60.0;
/// Slowest bee patrol speed.
pub const FLYER_MIN_SPEED: f32 = 1.5;
/// Fastest bee patrol speed.
pub const FLYER_MAX_SPEED: f32 = 2.5;
/// Seconds between wing-flap frames.
pub const FLYER_FLAP_SECONDS: f32 = 0.2;
/// Divisor applied to the scroll offset each patrol step.
pub const FLYER_SCROLL_DRAG: f32 = 60.0;

/// Blocks hung over the level.
pub const FALLER_COUNT: usize = 5;
/// Horizontal gap between consecutive blocks.
pub const FALLER_SPACING: f32 = 100.0;
/// Height of a hanging block centre above the ground.
pub const FALLER_DROP_HEIGHT: f32 = 100.0;
/// Player health lost per block contact.
pub const FALLER_CONTACT_DAMAGE: i32 = 15;
/// Speed a block has when it starts to drop.
pub const FALLER_INITIAL_FALL_SPEED: f32 = 2.0;
/// Horizontal distance at which a resting faller drops.
pub const FALLER_TRIGGER_DISTANCE: f32 = 50.0;

/// Extra background tiles built beyond the screen width.
pub const SCENERY_EXTRA_TILES: usize = 5;
/// Tile count used when background metrics are unavailable.
pub const SCENERY_FALLBACK_TILES: usize = 10;
