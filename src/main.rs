//! Window entry point for the beeline platformer.
use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use std::path::PathBuf;

use beeline::{init_logging, BeelinePlugin, GameConfig};

/// A side-scrolling platformer about dodging bees
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// TOML file layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the level layout
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = GameConfig::load(args.config.as_deref()).context("loading configuration")?;
    if args.seed.is_some() {
        config.level.seed = args.seed;
    }
    log::info!(
        "starting beeline at {}x{}",
        config.screen.width,
        config.screen.height
    );

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Validated screen sizes are small positive pixel counts."
    )]
    let resolution = WindowResolution::new(config.screen.width as u32, config.screen.height as u32);

    App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "beeline".to_owned(),
                        resolution,
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(BeelinePlugin::new(config))
        .run();
    Ok(())
}
