//! Thread-safety, serialisation shape and asset-metric seams of the public
//! API.

use std::sync::Arc;

use approx::assert_relative_eq;
use beeline::{AssetId, AssetMetrics, Game, GameConfig, WorldSnapshot};
use glam::Vec2;
use mockall::mock;
use static_assertions::assert_impl_all;
use test_utils::GameBuilder;

assert_impl_all!(Game: Send, Sync);
assert_impl_all!(WorldSnapshot: Send, Sync, Clone);
assert_impl_all!(GameConfig: Send, Sync, Clone, Default);

mock! {
    Metrics {}
    impl AssetMetrics for Metrics {
        fn image_size(&self, asset: AssetId) -> Option<Vec2>;
    }
}

#[test]
fn snapshot_serialises_to_json() -> anyhow::Result<()> {
    let mut game = GameBuilder::new().seed(8).build();
    let value = serde_json::to_value(game.snapshot())?;
    assert_eq!(value["phase"], "Menu");
    assert_eq!(value["health"], 100);
    assert_eq!(value["protected"], false);
    assert_eq!(value["player"]["sprite"]["Player"], "Idle");
    assert_eq!(value["door"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["fallers"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[test]
fn player_sprite_height_sets_the_ground() {
    let mut metrics = MockMetrics::new();
    metrics.expect_image_size().returning(|asset| match asset {
        AssetId::Player => Some(Vec2::new(48.0, 80.0)),
        _ => None,
    });
    let game = GameBuilder::new().metrics(Arc::new(metrics)).build();
    let world = game.world();
    assert_relative_eq!(world.ground(), 270.0);
    assert_relative_eq!(world.player.bottom(), 270.0);
    assert_relative_eq!(world.player.size.x, 48.0);
    assert_relative_eq!(world.level_end.bottom.position.y, 270.0 - 50.0);
}

#[test]
fn configured_ground_overrides_metrics() {
    let mut metrics = MockMetrics::new();
    metrics
        .expect_image_size()
        .returning(|asset| Some(asset.fallback_size()));
    let game = GameBuilder::new()
        .metrics(Arc::new(metrics))
        .configure(|config| config.level.ground = Some(310.0))
        .build();
    assert_relative_eq!(game.world().ground(), 310.0);
}
