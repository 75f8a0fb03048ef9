//! Background tile strip.
//!
//! The strip is chosen once, lazily, the first time it is needed while
//! playing, and thrown away on reset so a retry gets fresh scenery.

use glam::Vec2;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::assets::{AssetId, AssetMetrics};
use crate::constants::{SCENERY_EXTRA_TILES, SCENERY_FALLBACK_TILES};

/// Background artwork variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Backdrop {
    /// Also the fallback when tile sizes are unknown.
    Mushrooms,
    /// Forest.
    Trees,
    /// Rolling hills.
    Hills,
}

impl Backdrop {
    /// Every variant, in a stable order.
    pub const ALL: [Self; 3] = [Self::Mushrooms, Self::Trees, Self::Hills];
}

/// One background tile placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackdropTile {
    /// Which background image.
    pub backdrop: Backdrop,
    /// Left edge in screen space.
    pub x: f32,
    /// Tile width.
    pub width: f32,
}

/// Lazily built background strip.
#[derive(Debug, Clone, Default)]
pub struct Scenery {
    tiles: Option<Vec<Backdrop>>,
    tile_width: f32,
}

impl Scenery {
    /// Whether the strip has been chosen.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.tiles.is_some()
    }

    /// Chosen tiles, if built.
    #[must_use]
    pub fn tiles(&self) -> Option<&[Backdrop]> {
        self.tiles.as_deref()
    }

    /// Chooses the strip unless it already exists.
    ///
    /// With known tile metrics, enough random tiles are picked to cover the
    /// screen plus a scrolling margin. Without metrics the strip falls back
    /// to a fixed run of mushroom tiles at the fallback tile width.
    pub fn ensure_built(&mut self, screen_width: f32, metrics: &dyn AssetMetrics, rng: &mut impl Rng) {
        if self.tiles.is_some() {
            return;
        }
        let tiles = match metrics.image_size(AssetId::Backdrop) {
            Some(Vec2 { x: width, .. }) if width > 0.0 => {
                self.tile_width = width;
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "The ratio of two positive screen widths is small and positive."
                )]
                let count = (screen_width / width).ceil() as usize + SCENERY_EXTRA_TILES;
                (0..count)
                    .map(|_| *Backdrop::ALL.choose(&mut *rng).unwrap_or(&Backdrop::Mushrooms))
                    .collect()
            }
            _ => {
                debug!("backdrop metrics unavailable; using plain scenery");
                self.tile_width = AssetId::Backdrop.fallback_size().x;
                vec![Backdrop::Mushrooms; SCENERY_FALLBACK_TILES]
            }
        };
        self.tiles = Some(tiles);
    }

    /// Forgets the strip so the next build picks new tiles.
    pub fn invalidate(&mut self) {
        self.tiles = None;
    }

    /// Tiles whose left edge is on screen for the given scroll `offset`.
    #[must_use]
    pub fn visible_tiles(&self, offset: f32, screen_width: f32) -> Vec<BackdropTile> {
        let Some(tiles) = &self.tiles else {
            return Vec::new();
        };
        let shift = offset.rem_euclid(self.tile_width);
        tiles
            .iter()
            .enumerate()
            .map(|(i, &backdrop)| {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "Tile indices are tiny and fit exactly in f32."
                )]
                let x = i as f32 * self.tile_width - shift;
                BackdropTile {
                    backdrop,
                    x,
                    width: self.tile_width,
                }
            })
            .filter(|tile| tile.x < screen_width)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{NoAssets, StaticAssets};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builds_enough_tiles_to_scroll() {
        let metrics = StaticAssets::default().with(AssetId::Backdrop, Vec2::new(256.0, 256.0));
        let mut scenery = Scenery::default();
        scenery.ensure_built(800.0, &metrics, &mut StdRng::seed_from_u64(1));
        assert_eq!(scenery.tiles().map(<[Backdrop]>::len), Some(4 + SCENERY_EXTRA_TILES));
    }

    #[test]
    fn falls_back_without_metrics() {
        let mut scenery = Scenery::default();
        scenery.ensure_built(800.0, &NoAssets, &mut StdRng::seed_from_u64(1));
        let tiles = scenery.tiles().unwrap_or_default();
        assert_eq!(tiles.len(), SCENERY_FALLBACK_TILES);
        assert!(tiles.iter().all(|&t| t == Backdrop::Mushrooms));
    }

    #[test]
    fn build_is_cached_until_invalidated() {
        let mut scenery = Scenery::default();
        let mut rng = StdRng::seed_from_u64(1);
        scenery.ensure_built(800.0, &NoAssets, &mut rng);
        let metrics = StaticAssets::default().with(AssetId::Backdrop, Vec2::new(100.0, 100.0));
        scenery.ensure_built(800.0, &metrics, &mut rng);
        assert_eq!(scenery.tiles().map(<[Backdrop]>::len), Some(SCENERY_FALLBACK_TILES));
        scenery.invalidate();
        assert!(!scenery.is_built());
        scenery.ensure_built(800.0, &metrics, &mut rng);
        assert_eq!(scenery.tiles().map(<[Backdrop]>::len), Some(8 + SCENERY_EXTRA_TILES));
    }

    #[test]
    fn tiles_wrap_with_offset() {
        let metrics = StaticAssets::default().with(AssetId::Backdrop, Vec2::new(200.0, 200.0));
        let mut scenery = Scenery::default();
        scenery.ensure_built(800.0, &metrics, &mut StdRng::seed_from_u64(3));
        let tiles = scenery.visible_tiles(250.0, 800.0);
        let xs: Vec<f32> = tiles.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![-50.0, 150.0, 350.0, 550.0, 750.0]);
    }
}
