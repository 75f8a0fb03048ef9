//! Presentation layer.
//!
//! The sprite table is always available so hosts can map snapshots to
//! artwork. The Bevy shell that opens a window and drives the game is only
//! built with the `render` feature.

#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod shell;
pub mod sprites;

#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use shell::BeelinePlugin;
pub use sprites::{
    backdrop_name, backdrop_tint, control_name, sprite_name, sprite_tint, status_line,
};
