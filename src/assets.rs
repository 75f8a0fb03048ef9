//! Optional image metrics supplied by the host.
//!
//! The core never loads images. It asks an [`AssetMetrics`] implementation
//! for sprite dimensions and falls back to fixed sizes when the host cannot
//! answer.

use glam::Vec2;
use hashbrown::HashMap;
use log::debug;

/// Images whose dimensions influence the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    /// Idle player frame; its height defines the ground line.
    Player,
    /// Bee sprite.
    Flyer,
    /// Falling block sprite.
    Faller,
    /// Lower door half.
    DoorBottom,
    /// Upper door half.
    DoorTop,
    /// Start/retry button.
    Button,
    /// Square icon buttons (sound, quit).
    IconButton,
    /// One background tile.
    Backdrop,
}

impl AssetId {
    /// Dimensions assumed when the host cannot report any.
    #[must_use]
    pub const fn fallback_size(self) -> Vec2 {
        match self {
            Self::Player => Vec2::new(40.0, 50.0),
            Self::Flyer => Vec2::new(40.0, 34.0),
            Self::Faller => Vec2::new(50.0, 50.0),
            Self::DoorBottom | Self::DoorTop => Vec2::new(50.0, 50.0),
            Self::Button => Vec2::new(190.0, 49.0),
            Self::IconButton => Vec2::new(40.0, 40.0),
            Self::Backdrop => Vec2::new(256.0, 350.0),
        }
    }
}

/// Best-effort lookup of image dimensions.
pub trait AssetMetrics {
    /// Returns the size of `asset`, or `None` when it is unavailable.
    fn image_size(&self, asset: AssetId) -> Option<Vec2>;
}

/// Host without any loaded images.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetMetrics for NoAssets {
    fn image_size(&self, _asset: AssetId) -> Option<Vec2> {
        None
    }
}

/// Metrics backed by a fixed table, typically filled after the host loaded
/// its textures.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    sizes: HashMap<AssetId, Vec2>,
}

impl StaticAssets {
    /// Records the size of `asset`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, asset: AssetId, size: Vec2) -> Self {
        self.sizes.insert(asset, size);
        self
    }
}

impl AssetMetrics for StaticAssets {
    fn image_size(&self, asset: AssetId) -> Option<Vec2> {
        self.sizes.get(&asset).copied()
    }
}

/// Size of `asset`, substituting [`AssetId::fallback_size`] when missing.
pub fn size_or_fallback(metrics: &dyn AssetMetrics, asset: AssetId) -> Vec2 {
    if let Some(size) = metrics.image_size(asset) {
        size
    } else {
        let fallback = asset.fallback_size();
        debug!("no metrics for {asset:?}; using fallback {fallback}");
        fallback
    }
}

/// Computes the ground line for a screen of `screen_height` pixels.
///
/// An explicit `configured` ground wins. Otherwise the ground sits one player
/// height above the bottom of the screen, using `fallback_clearance` when the
/// player sprite height is unknown.
///
/// # Examples
///
/// ```
/// use beeline::assets::{ground_level, NoAssets};
/// assert!((ground_level(&NoAssets, 350.0, 50.0, None) - 300.0).abs() < f32::EPSILON);
/// assert!((ground_level(&NoAssets, 350.0, 50.0, Some(280.0)) - 280.0).abs() < f32::EPSILON);
/// ```
pub fn ground_level(
    metrics: &dyn AssetMetrics,
    screen_height: f32,
    fallback_clearance: f32,
    configured: Option<f32>,
) -> f32 {
    if let Some(ground) = configured {
        return ground;
    }
    match metrics.image_size(AssetId::Player) {
        Some(size) => screen_height - size.y,
        None => {
            debug!("player height unavailable; ground falls back to {fallback_clearance}px clearance");
            screen_height - fallback_clearance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use rstest::rstest;

    mock! {
        Metrics {}
        impl AssetMetrics for Metrics {
            fn image_size(&self, asset: AssetId) -> Option<Vec2>;
        }
    }

    #[test]
    fn ground_uses_player_height_when_available() {
        let mut metrics = MockMetrics::new();
        metrics
            .expect_image_size()
            .with(eq(AssetId::Player))
            .times(1)
            .return_const(Some(Vec2::new(64.0, 80.0)));
        let ground = ground_level(&metrics, 350.0, 50.0, None);
        assert!((ground - 270.0).abs() < f32::EPSILON);
    }

    #[test]
    fn configured_ground_skips_lookup() {
        let mut metrics = MockMetrics::new();
        metrics.expect_image_size().never();
        let ground = ground_level(&metrics, 350.0, 50.0, Some(123.0));
        assert!((ground - 123.0).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(AssetId::Player)]
    #[case(AssetId::Flyer)]
    #[case(AssetId::DoorTop)]
    fn missing_metrics_fall_back(#[case] asset: AssetId) {
        assert_eq!(size_or_fallback(&NoAssets, asset), asset.fallback_size());
    }

    #[test]
    fn static_assets_report_recorded_sizes() {
        let assets = StaticAssets::default().with(AssetId::Faller, Vec2::new(70.0, 70.0));
        assert_eq!(assets.image_size(AssetId::Faller), Some(Vec2::new(70.0, 70.0)));
        assert_eq!(assets.image_size(AssetId::Flyer), None);
        assert_eq!(
            size_or_fallback(&assets, AssetId::Flyer),
            AssetId::Flyer.fallback_size()
        );
    }
}
