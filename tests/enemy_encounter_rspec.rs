//! Behavioural tests for bee stings, clicks and falling blocks using
//! rust-rspec.

#[path = "support/game_fixture.rs"]
mod game_fixture;

use beeline::faller::FallerState;
use beeline::flyer::FlyerState;
use beeline::constants::{FALLER_CONTACT_DAMAGE, HURT_FRAMES};
use beeline::{AudioIntent, Game, InputEvent, InputState};
use game_fixture::{run_serial, GameFixture};
use glam::Vec2;
use rspec::block::Context as Scenario;
use test_utils::input::{crouch, hold_right, idle};
use test_utils::GameBuilder;

const BEE_CENTRE: Vec2 = Vec2::new(200.0, 100.0);

fn lone_bee() -> Game {
    GameBuilder::new()
        .without_enemies()
        .flyer_at(BEE_CENTRE)
        .playing()
        .build()
}

fn lone_block() -> Game {
    GameBuilder::new()
        .without_enemies()
        .faller_at(300.0)
        .playing()
        .build()
}

/// Moves the only bee so it overlaps the player.
fn bee_onto_player(fixture: &GameFixture) {
    let mut game = fixture.game();
    let world = game.world_mut();
    let target = world.player.position;
    if let Some(bee) = world.flyers.first_mut() {
        bee.position = target;
    }
}

/// Slides the only block over the player's spawn point.
fn block_over_player(fixture: &GameFixture) {
    let mut game = fixture.game();
    let world = game.world_mut();
    let centre_x = world.player.midpoint();
    if let Some(block) = world.fallers.first_mut() {
        block.position.x = centre_x - block.size.x / 2.0;
    }
}

/// Health after each of `steps` updates with `input` held.
fn health_trace(fixture: &GameFixture, steps: usize, input: &InputState) -> Vec<i32> {
    (0..steps)
        .map(|_| {
            fixture.run(1, input);
            fixture.game().world().health.current()
        })
        .collect()
}

fn click_bee(fixture: &GameFixture, times: usize) {
    let mut game = fixture.game();
    for _ in 0..times {
        game.handle_event(InputEvent::PointerDown(BEE_CENTRE));
    }
}

#[test]
fn bee_encounters() {
    run_serial(&rspec::given(
        "a bee patrolling near the player",
        GameFixture::new(lone_bee),
        |scenario: &mut Scenario<GameFixture>| {
            scenario.when("the bee touches the player", |ctx| {
                ctx.before_each(|fixture| {
                    fixture.reset();
                    fixture.game().audio_mut().drain();
                    bee_onto_player(fixture);
                    fixture.run(1, &idle());
                });

                ctx.then("health drops by the sting damage", |fixture| {
                    assert_eq!(fixture.game().world().health.current(), 90);
                });

                ctx.then("the bee recoils and cannot sting again", |fixture| {
                    let game = fixture.game();
                    let bee = &game.world().flyers[0];
                    assert!(!bee.can_sting());
                    assert!((bee.direction + 1.0).abs() < f32::EPSILON);
                });

                ctx.then("the hurt sound is queued", |fixture| {
                    assert_eq!(fixture.game().audio_mut().pending(), &[AudioIntent::PlayHurt]);
                });
            });

            scenario.when("the player is already crouching", |ctx| {
                ctx.before_each(|fixture| {
                    fixture.reset();
                    fixture.run(1, &crouch());
                    bee_onto_player(fixture);
                    fixture.run(1, &crouch());
                });

                ctx.then("health is unchanged", |fixture| {
                    assert_eq!(fixture.game().world().health.current(), 100);
                });
            });

            scenario.when("the bee is clicked four times", |ctx| {
                ctx.before_each(|fixture| {
                    fixture.reset();
                    click_bee(fixture, 4);
                });

                ctx.then("the bee is dead and falling", |fixture| {
                    let game = fixture.game();
                    let bee = &game.world().flyers[0];
                    assert_eq!(bee.health(), 0);
                    assert!(matches!(bee.state(), FlyerState::Falling(_)));
                });

                ctx.then("further clicks change nothing", |fixture| {
                    click_bee(fixture, 2);
                    assert_eq!(fixture.game().world().flyers[0].health(), 0);
                });
            });
        },
    ));
}

#[test]
fn falling_block_trap() {
    run_serial(&rspec::given(
        "a block hanging over the path",
        GameFixture::new(lone_block),
        |scenario: &mut Scenario<GameFixture>| {
            scenario.when("the player is still far away", |ctx| {
                ctx.before_each(|fixture| {
                    fixture.reset();
                    fixture.run(10, &hold_right());
                });

                ctx.then("the block stays hidden", |fixture| {
                    let game = fixture.game();
                    assert_eq!(game.world().fallers[0].state(), FallerState::Resting);
                    assert!(game.snapshot().fallers.is_empty());
                });
            });

            scenario.when("the player walks beneath it", |ctx| {
                ctx.before_each(|fixture| {
                    fixture.reset();
                    fixture.run(40, &hold_right());
                });

                ctx.then("the block drops and is drawn", |fixture| {
                    let game = fixture.game();
                    assert_ne!(game.world().fallers[0].state(), FallerState::Resting);
                    assert_eq!(game.snapshot().fallers.len(), 1);
                });
            });

            scenario.when("enough time passes after the drop", |ctx| {
                ctx.before_each(|fixture| {
                    fixture.reset();
                    fixture.run(40, &hold_right());
                    fixture.run(60, &idle());
                });

                ctx.then("the block rests exactly on the ground", |fixture| {
                    let game = fixture.game();
                    let block = &game.world().fallers[0];
                    assert_eq!(block.state(), FallerState::Idle);
                    approx::assert_relative_eq!(block.bottom(), game.world().ground());
                });
            });

            scenario.when("the player stands right beneath it", |ctx| {
                ctx.then("every hit costs the block's damage", |fixture| {
                    fixture.reset();
                    block_over_player(fixture);
                    let trace = health_trace(fixture, 80, &idle());
                    let mut last = 100;
                    let mut hit_frames = Vec::new();
                    for (frame, health) in trace.into_iter().enumerate() {
                        if health != last {
                            assert_eq!(last - health, FALLER_CONTACT_DAMAGE);
                            hit_frames.push(frame);
                        }
                        last = health;
                    }
                    assert_eq!(last, 55);
                    assert_eq!(hit_frames.len(), 3, "hits on frames {hit_frames:?}");
                    let gaps: Vec<_> = hit_frames
                        .windows(2)
                        .filter_map(|pair| match pair {
                            [first, second] => Some(second - first),
                            _ => None,
                        })
                        .collect();
                    assert_eq!(gaps, vec![HURT_FRAMES as usize; 2]);
                });

                ctx.then("crouching keeps health intact", |fixture| {
                    fixture.reset();
                    block_over_player(fixture);
                    let trace = health_trace(fixture, 80, &crouch());
                    assert!(trace.iter().all(|&health| health == 100));
                });
            });
        },
    ));
}
