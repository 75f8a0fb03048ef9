//! Artwork lookup for snapshot sprites.
//!
//! The simulation only knows abstract poses; this table maps them to the
//! image names shipped with the game and to flat tints used when images are
//! not loaded.

use crate::faller::FallerState;
use crate::flyer::FlyerPose;
use crate::level::Control;
use crate::phase::GamePhase;
use crate::player::PlayerPose;
use crate::scenery::Backdrop;
use crate::snapshot::{SpriteKey, WorldSnapshot};

const PLAYER_WALK: [&str; 3] = [
    "character_purple_idle",
    "character_purple_walk_a",
    "character_purple_walk_b",
];
const BEE_FLAP: [&str; 2] = ["bee_a", "bee_b"];

/// Image name for a sprite.
///
/// # Examples
///
/// ```
/// use beeline::presentation::sprite_name;
/// use beeline::player::PlayerPose;
/// use beeline::snapshot::SpriteKey;
/// assert_eq!(sprite_name(SpriteKey::Player(PlayerPose::Crouch)), "character_purple_duck");
/// ```
#[must_use]
pub fn sprite_name(key: SpriteKey) -> &'static str {
    match key {
        SpriteKey::Player(PlayerPose::Idle) => "character_purple_idle",
        SpriteKey::Player(PlayerPose::Walk(frame)) => {
            PLAYER_WALK.get(frame).copied().unwrap_or("character_purple_idle")
        }
        SpriteKey::Player(PlayerPose::Crouch) => "character_purple_duck",
        SpriteKey::Player(PlayerPose::Hit) => "character_purple_hit",
        SpriteKey::Flyer(FlyerPose::Flap(frame)) => BEE_FLAP.get(frame).copied().unwrap_or("bee_a"),
        // A hit bee shows its resting frame until it recovers.
        SpriteKey::Flyer(FlyerPose::Hurt | FlyerPose::Fallen) => "bee_rest",
        SpriteKey::Faller(FallerState::Resting) => "block_rest",
        SpriteKey::Faller(FallerState::Falling) => "block_fall",
        SpriteKey::Faller(FallerState::Idle) => "block_idle",
        SpriteKey::DoorTop => "door_open_top",
        SpriteKey::DoorBottom => "door_open",
    }
}

/// Image name for a background tile.
#[must_use]
pub const fn backdrop_name(backdrop: Backdrop) -> &'static str {
    match backdrop {
        Backdrop::Mushrooms => "background_fade_mushrooms",
        Backdrop::Trees => "background_fade_trees",
        Backdrop::Hills => "background_fade_hills",
    }
}

/// Image for an on-screen control; the sound toggle reflects `muted`.
#[must_use]
pub const fn control_name(control: Control, muted: bool) -> &'static str {
    match control {
        Control::Start | Control::Retry => "button_normal",
        Control::Sound if muted => "volume-mute-button-red-icon",
        Control::Sound => "volume-on-button-red-icon",
        Control::Quit => "turn-off-button-red-icon",
    }
}

/// Flat colour drawn in place of a sprite image, as linear `[r, g, b]`.
#[must_use]
pub const fn sprite_tint(key: SpriteKey) -> [f32; 3] {
    match key {
        SpriteKey::Player(PlayerPose::Hit) => [0.9, 0.3, 0.6],
        SpriteKey::Player(PlayerPose::Crouch) => [0.4, 0.2, 0.5],
        SpriteKey::Player(_) => [0.6, 0.3, 0.8],
        SpriteKey::Flyer(FlyerPose::Flap(_)) => [0.95, 0.8, 0.1],
        SpriteKey::Flyer(FlyerPose::Hurt) => [1.0, 0.5, 0.1],
        SpriteKey::Flyer(FlyerPose::Fallen) => [0.4, 0.35, 0.2],
        SpriteKey::Faller(_) => [0.5, 0.5, 0.55],
        SpriteKey::DoorTop | SpriteKey::DoorBottom => [0.55, 0.35, 0.15],
    }
}

/// Flat colour used for a background tile when no artwork is loaded.
#[must_use]
pub const fn backdrop_tint(backdrop: Backdrop) -> [f32; 3] {
    match backdrop {
        Backdrop::Mushrooms => [0.55, 0.75, 0.9],
        Backdrop::Trees => [0.5, 0.8, 0.75],
        Backdrop::Hills => [0.6, 0.8, 0.85],
    }
}

/// One-line status summary, e.g. for a window title.
#[must_use]
pub fn status_line(snapshot: &WorldSnapshot) -> String {
    match snapshot.phase {
        GamePhase::Menu => "Dodge the bees! Click start to play".to_owned(),
        GamePhase::Playing if snapshot.protected => {
            format!("Health: {} | PROTECTED", snapshot.health)
        }
        GamePhase::Playing => format!("Health: {}", snapshot.health),
        GamePhase::GameOver => "GAME OVER | click retry or press R".to_owned(),
        GamePhase::LevelComplete => "LEVEL COMPLETE!".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PlayerPose::Idle, "character_purple_idle")]
    #[case(PlayerPose::Walk(0), "character_purple_idle")]
    #[case(PlayerPose::Walk(1), "character_purple_walk_a")]
    #[case(PlayerPose::Walk(2), "character_purple_walk_b")]
    #[case(PlayerPose::Walk(7), "character_purple_idle")]
    #[case(PlayerPose::Hit, "character_purple_hit")]
    fn player_poses_map_to_images(#[case] pose: PlayerPose, #[case] expected: &str) {
        assert_eq!(sprite_name(SpriteKey::Player(pose)), expected);
    }

    #[rstest]
    #[case(FlyerPose::Flap(0), "bee_a")]
    #[case(FlyerPose::Flap(1), "bee_b")]
    #[case(FlyerPose::Hurt, "bee_rest")]
    #[case(FlyerPose::Fallen, "bee_rest")]
    fn bee_poses_map_to_images(#[case] pose: FlyerPose, #[case] expected: &str) {
        assert_eq!(sprite_name(SpriteKey::Flyer(pose)), expected);
    }

    #[test]
    fn block_states_have_distinct_images() {
        let names = [
            sprite_name(SpriteKey::Faller(FallerState::Resting)),
            sprite_name(SpriteKey::Faller(FallerState::Falling)),
            sprite_name(SpriteKey::Faller(FallerState::Idle)),
        ];
        assert_eq!(names, ["block_rest", "block_fall", "block_idle"]);
    }

    #[test]
    fn sound_icon_follows_mute_state() {
        assert_eq!(control_name(Control::Sound, false), "volume-on-button-red-icon");
        assert_eq!(control_name(Control::Sound, true), "volume-mute-button-red-icon");
    }
}
