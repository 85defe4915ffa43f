// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{airborne_at, context, run_stage, script, world_with_actor, ACTOR_SIZE};
use ledge_core::processors::ActionProcessor;
use ledge_core::{
    Action, ActorState, Facing, Footprint, Intent, Life, MotionFlags, PhysicsConfig, Pipeline,
    Processor, Stage, World,
};
use ledge_dry_tests::{boxed_tiles, flat_floor, level_bounds, slope_level};
use ledge_geom::{Aabb, Vec2};
use ledge_terrain::{Face, FaceSet, FaceShape};
use proptest::prelude::*;

fn life() -> impl Strategy<Value = Life> {
    prop_oneof![Just(Life::Alive), Just(Life::Dying), Just(Life::Dead)]
}

fn intent() -> impl Strategy<Value = Intent> {
    (-1i8..=1, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(move_direction, wants_jump, wants_run, wants_crouch)| Intent {
            move_direction,
            wants_jump,
            wants_run,
            wants_crouch,
        },
    )
}

fn motion() -> impl Strategy<Value = MotionFlags> {
    (
        -128.0f32..128.0,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(target_vx, jump_requested, jump_held, is_jumping, skidding, crouching)| MotionFlags {
                target_vx,
                jump_requested,
                jump_held,
                is_jumping,
                skidding,
                crouching,
            },
        )
}

prop_compose! {
    fn actor()(
        x in 0.0f32..480.0,
        y in -40.0f32..120.0,
        vx in -300.0f32..300.0,
        vy in -400.0f32..400.0,
        grounded in any::<bool>(),
        facing_left in any::<bool>(),
        life in life(),
        death_ticks in 0u32..200,
        motion in motion(),
        action in prop::sample::select(Action::ALL.to_vec()),
    ) -> ActorState {
        let mut actor = common::actor_at(x, y);
        actor.velocity = Vec2::new(vx, vy);
        actor.grounded = grounded;
        actor.facing = if facing_left { Facing::Left } else { Facing::Right };
        actor.life = life;
        actor.death_ticks = death_ticks;
        actor.motion = motion;
        actor.action = action;
        actor
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, ..ProptestConfig::default() })]

    #[test]
    fn every_stage_stays_inside_its_footprint(actor in actor(), intent in intent()) {
        let config = PhysicsConfig::default();
        let pipeline = Pipeline::new(&config);
        let terrain = slope_level();
        for stage in Stage::ALL {
            let processor = pipeline.processor(stage).expect("stage present");
            let before = context(&config, &terrain, actor, intent);
            let after = processor.process(context(&config, &terrain, actor, intent));
            let written = Footprint::diff(&before, &after);
            prop_assert!(
                processor.footprint().contains(written),
                "{} wrote {:?} outside {:?}",
                stage,
                written,
                processor.footprint()
            );
        }
    }

    #[test]
    fn a_lone_enabled_stage_changes_only_its_footprint(
        actor in actor(),
        intent in intent(),
        stage in prop::sample::select(Stage::ALL.to_vec()),
    ) {
        let config = PhysicsConfig::default();
        let mut pipeline = Pipeline::new(&config);
        pipeline.set_all_enabled(false);
        pipeline.set_enabled(stage, true);
        let terrain = boxed_tiles();
        let before = context(&config, &terrain, actor, intent);
        let after = pipeline.process(context(&config, &terrain, actor, intent));
        let declared = pipeline.processor(stage).expect("stage present").footprint();
        prop_assert!(declared.contains(Footprint::diff(&before, &after)));
    }

    #[test]
    fn disabled_pipeline_is_a_pass_through(actor in actor(), intent in intent()) {
        let config = PhysicsConfig::default();
        let mut pipeline = Pipeline::new(&config);
        pipeline.set_all_enabled(false);
        let terrain = slope_level();
        let before = context(&config, &terrain, actor, intent);
        let after = pipeline.process(context(&config, &terrain, actor, intent));
        prop_assert!(Footprint::diff(&before, &after).is_empty());
    }

    #[test]
    fn committed_action_matches_final_state(seed in any::<u64>(), ticks in 1usize..240) {
        let config = PhysicsConfig::default();
        let classifier = ActionProcessor::new(&config);
        let mut world = World::new(config, slope_level()).expect("world");
        for intent in script(seed, ticks) {
            let (actor, _) = world.advance(intent);
            prop_assert_eq!(actor.action, classifier.classify(&actor));
            if actor.is_alive() {
                prop_assert_eq!(actor.action == Action::Jumping, !actor.grounded);
            }
        }
    }
}

/// A single solid column spanning `[x0, x1]` from below the death line to far
/// above anything the tests reach.
fn tall_wall(x0: f32, x1: f32) -> FaceSet {
    let wall = Face::new(
        Aabb::new(Vec2::new(x0, -64.0), Vec2::new(x1, 8192.0)),
        FaceShape::Solid,
    );
    FaceSet::new(vec![wall], level_bounds(), Vec2::new(32.0, 0.0)).expect("wall level")
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn right_wall_leaves_no_penetration(
        depth in 0.01f32..15.99,
        y in 100.0f32..4000.0,
        vx in -300.0f32..300.0,
        vy in -2400.0f32..2400.0,
    ) {
        let config = PhysicsConfig::default();
        let terrain = tall_wall(200.0, 264.0);
        let actor = airborne_at(200.0 - ACTOR_SIZE + depth, y, vx, vy);
        let out = run_stage(
            &config,
            Stage::RightWall,
            context(&config, &terrain, actor, Intent::idle()),
        );
        prop_assert_eq!(out.actor.position.x + ACTOR_SIZE, 200.0);
        prop_assert!(out.actor.velocity.x <= 0.0);
        prop_assert_eq!(out.actor.velocity.x, vx.min(0.0));
        prop_assert_eq!(out.actor.position.y, y);
        prop_assert!(out.faults.is_empty());
    }

    #[test]
    fn left_wall_leaves_no_penetration(
        depth in 0.01f32..15.99,
        y in 100.0f32..4000.0,
        vx in -300.0f32..300.0,
        vy in -2400.0f32..2400.0,
    ) {
        let config = PhysicsConfig::default();
        let terrain = tall_wall(136.0, 200.0);
        let actor = airborne_at(200.0 - depth, y, vx, vy);
        let out = run_stage(
            &config,
            Stage::LeftWall,
            context(&config, &terrain, actor, Intent::idle()),
        );
        prop_assert_eq!(out.actor.position.x, 200.0);
        prop_assert!(out.actor.velocity.x >= 0.0);
        prop_assert_eq!(out.actor.velocity.x, vx.max(0.0));
        prop_assert!(out.faults.is_empty());
    }

    #[test]
    fn gravity_only_ever_lowers_airborne_vy(
        vy in -2400.0f32..2400.0,
        is_jumping in any::<bool>(),
        jump_held in any::<bool>(),
    ) {
        let config = PhysicsConfig::default();
        let terrain = flat_floor(50.0);
        let mut actor = airborne_at(100.0, 2000.0, 0.0, vy);
        actor.motion.is_jumping = is_jumping;
        actor.motion.jump_held = jump_held;
        let out = run_stage(
            &config,
            Stage::Gravity,
            context(&config, &terrain, actor, Intent::idle()),
        );

        let cut = is_jumping && !jump_held && vy > 0.0;
        let g = if cut {
            config.gravity * config.jump_cut_multiplier
        } else {
            config.gravity
        };
        prop_assert_eq!(out.actor.velocity.y, vy - g * config.dt());
        prop_assert!(out.actor.velocity.y < vy);
        prop_assert!(!out.actor.grounded);
    }

    #[test]
    fn terminal_velocity_bounds_every_step(vy in -2400.0f32..2400.0, cap in 60.0f32..900.0) {
        let config = PhysicsConfig {
            terminal_velocity: Some(cap),
            ..PhysicsConfig::default()
        };
        let terrain = flat_floor(50.0);
        let actor = airborne_at(100.0, 2000.0, 0.0, vy);
        let out = run_stage(
            &config,
            Stage::Gravity,
            context(&config, &terrain, actor, Intent::idle()),
        );
        prop_assert!(out.actor.velocity.y >= -cap);
        if vy >= -cap {
            prop_assert!(out.actor.velocity.y <= vy);
        }
    }
}

#[test]
fn disabling_one_stage_skips_only_that_stage() {
    let config = PhysicsConfig::default();
    let mut world = world_with_actor(config, flat_floor(50.0), airborne_at(100.0, 500.0, 0.0, 0.0));
    world.pipeline_mut().set_enabled(Stage::Gravity, false);
    assert!(!world.pipeline().is_enabled(Stage::Gravity));
    for _ in 0..30 {
        world.advance(Intent::idle());
    }
    assert_eq!(world.actor().position, Vec2::new(100.0, 500.0));
    assert_eq!(world.actor().velocity, Vec2::ZERO);
    assert_eq!(world.actor().action, Action::Jumping);

    world.pipeline_mut().set_enabled(Stage::Gravity, true);
    world.advance(Intent::idle());
    assert!(world.actor().velocity.y < 0.0);
}

#[test]
fn gravity_lowers_vy_by_a_constant_step_while_airborne() {
    let config = PhysicsConfig::default();
    let step = config.gravity * config.dt();
    let mut world = world_with_actor(config, flat_floor(50.0), airborne_at(100.0, 400.0, 0.0, 0.0));
    let mut vy = 0.0f32;
    for _ in 0..40 {
        let (actor, _) = world.advance(Intent::idle());
        assert!(!actor.grounded);
        assert_eq!(actor.velocity.y, vy - step);
        assert!(actor.velocity.y < vy);
        vy = actor.velocity.y;
    }
}

#[test]
fn terminal_velocity_caps_the_fall() {
    let config = PhysicsConfig {
        terminal_velocity: Some(120.0),
        ..PhysicsConfig::default()
    };
    let mut world = world_with_actor(
        config,
        flat_floor(50.0),
        airborne_at(100.0, 3000.0, 0.0, 0.0),
    );
    for _ in 0..120 {
        let (actor, _) = world.advance(Intent::idle());
        assert!(actor.velocity.y >= -120.0);
    }
    assert_eq!(world.actor().velocity.y, -120.0);
}

#[test]
fn ground_snap_is_idempotent() {
    let config = PhysicsConfig::default();
    let terrain = flat_floor(50.0);

    let resting = common::actor_at(100.0, 50.0);
    let once = run_stage(
        &config,
        Stage::Ground,
        context(&config, &terrain, resting, Intent::idle()),
    );
    assert_eq!(once.actor, resting);

    let sinking = airborne_at(100.0, 46.0, 0.0, -60.0);
    let first = run_stage(
        &config,
        Stage::Ground,
        context(&config, &terrain, sinking, Intent::idle()),
    );
    assert_eq!(first.actor.position.y, 50.0);
    assert_eq!(first.actor.velocity.y, 0.0);
    assert!(first.actor.grounded);
    let second = run_stage(
        &config,
        Stage::Ground,
        context(&config, &terrain, first.actor, Intent::idle()),
    );
    assert_eq!(second.actor, first.actor);
}

#[test]
fn standing_still_is_a_fixed_point() {
    let mut world = World::new(PhysicsConfig::default(), flat_floor(50.0)).expect("world");
    let (first, camera) = world.advance(Intent::idle());
    for _ in 0..120 {
        let (actor, cam) = world.advance(Intent::idle());
        assert_eq!(actor, first);
        assert_eq!(cam, camera);
    }
    assert_eq!(first.position, Vec2::new(32.0, 50.0));
    assert_eq!(first.action, Action::Idle);
}
