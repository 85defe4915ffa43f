// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use ledge_core::{
    ActorState, CameraState, Context, Intent, PhysicsConfig, Pipeline, Stage, StateDigest, World,
};
use ledge_dry_tests::{IntentSample, XorShift64};
use ledge_geom::Vec2;
use ledge_terrain::TerrainQuery;

/// Default actor box edge.
pub const ACTOR_SIZE: f32 = 16.0;

/// Fresh grounded actor at rest with its feet at `(x, y)`.
pub fn actor_at(x: f32, y: f32) -> ActorState {
    ActorState::spawn(Vec2::new(x, y), Vec2::new(ACTOR_SIZE, ACTOR_SIZE))
}

/// Same actor, but airborne with velocity `(vx, vy)`.
pub fn airborne_at(x: f32, y: f32, vx: f32, vy: f32) -> ActorState {
    let mut actor = actor_at(x, y);
    actor.velocity = Vec2::new(vx, vy);
    actor.grounded = false;
    actor
}

/// Camera framing `actor` the way a freshly built world would.
pub fn camera_for(
    config: &PhysicsConfig,
    terrain: &dyn TerrainQuery,
    actor: &ActorState,
) -> CameraState {
    CameraState::framing(&config.camera, &terrain.bounds(), actor.centre_x())
}

/// Context for one tick of `actor` over `terrain`.
pub fn context<'t>(
    config: &PhysicsConfig,
    terrain: &'t dyn TerrainQuery,
    actor: ActorState,
    intent: Intent,
) -> Context<'t> {
    let camera = camera_for(config, terrain, &actor);
    Context::new(actor, camera, intent, terrain, config.dt())
}

/// Runs a single stage of a default-built pipeline.
pub fn run_stage<'t>(config: &PhysicsConfig, stage: Stage, ctx: Context<'t>) -> Context<'t> {
    let pipeline = Pipeline::new(config);
    pipeline
        .processor(stage)
        .expect("default pipeline has every stage")
        .process(ctx)
}

/// Runs the whole pipeline once.
pub fn run_tick<'t>(config: &PhysicsConfig, ctx: Context<'t>) -> Context<'t> {
    Pipeline::new(config).process(ctx)
}

/// Intent for moving in `direction` (-1, 0, 1).
pub fn walk(direction: i8) -> Intent {
    Intent {
        move_direction: direction,
        ..Intent::idle()
    }
}

/// Intent for moving in `direction` with the run button held.
pub fn run(direction: i8) -> Intent {
    Intent {
        move_direction: direction,
        wants_run: true,
        ..Intent::idle()
    }
}

/// Intent holding jump, optionally moving.
pub fn jump(direction: i8) -> Intent {
    Intent {
        move_direction: direction,
        wants_jump: true,
        ..Intent::idle()
    }
}

/// Expands a seeded sample stream into `ticks` per-tick intents.
pub fn script(seed: u64, ticks: usize) -> Vec<Intent> {
    let mut rng = XorShift64::new(seed);
    let mut out = Vec::with_capacity(ticks);
    while out.len() < ticks {
        let sample = rng.intent_sample();
        let intent = intent_of(&sample);
        for _ in 0..sample.hold_ticks {
            if out.len() == ticks {
                break;
            }
            out.push(intent);
        }
    }
    out
}

/// Converts one sampled button state into an [`Intent`].
pub fn intent_of(sample: &IntentSample) -> Intent {
    Intent {
        move_direction: sample.move_direction,
        wants_jump: sample.wants_jump,
        wants_run: sample.wants_run,
        wants_crouch: sample.wants_crouch,
    }
}

/// Feeds `intents` to `world`, returning the digest after every tick.
pub fn replay<T: TerrainQuery>(world: &mut World<T>, intents: &[Intent]) -> Vec<StateDigest> {
    intents
        .iter()
        .map(|intent| {
            world.advance(*intent);
            world.digest()
        })
        .collect()
}

/// World over `terrain` with its committed actor replaced by `actor`.
pub fn world_with_actor<T: TerrainQuery>(
    config: PhysicsConfig,
    terrain: T,
    actor: ActorState,
) -> World<T> {
    let mut world = World::new(config, terrain).expect("fixture world");
    let mut snapshot = world.snapshot();
    snapshot.camera = camera_for(world.config(), world.terrain(), &actor);
    snapshot.actor = actor;
    world.restore(&snapshot);
    world
}
