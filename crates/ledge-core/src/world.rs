// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The orchestrator owning canonical state between ticks.

use ledge_geom::{Tick, Vec2};
use ledge_terrain::{LevelError, TerrainFault, TerrainQuery};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::actor::{ActorState, Life};
use crate::animation::{ActorView, AnimationCursor};
use crate::camera::CameraState;
use crate::config::{ConfigError, PhysicsConfig};
use crate::context::Context;
use crate::digest::{state_digest, StateDigest};
use crate::intent::Intent;
use crate::pipeline::{Pipeline, Stage};
use crate::snapshot::WorldSnapshot;

/// Why a world could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// Invalid tunables.
    #[error("invalid physics config: {0}")]
    Config(#[from] ConfigError),
    /// Invalid level bounds or spawn.
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),
}

/// Owns the pipeline, the terrain and the committed actor and camera.
///
/// Each [`World::advance`] copies committed state into a fresh [`Context`],
/// runs the whole pipeline and only then commits the result, so no caller
/// ever observes a partially processed tick.
#[derive(Debug)]
pub struct World<T> {
    config: PhysicsConfig,
    terrain: T,
    pipeline: Pipeline,
    tick: Tick,
    actor: ActorState,
    camera: CameraState,
    animation: AnimationCursor,
    last_faults: Vec<TerrainFault>,
}

impl<T: TerrainQuery> World<T> {
    /// Validates `config` and the level, then places the actor at spawn.
    pub fn new(config: PhysicsConfig, terrain: T) -> Result<Self, WorldError> {
        config.validate()?;
        let bounds = terrain.bounds();
        bounds.validate()?;
        let spawn = terrain.spawn();
        if !spawn.is_finite()
            || spawn.x < bounds.min_x
            || spawn.x + config.actor_width > bounds.max_x
            || spawn.y < bounds.death_y
        {
            return Err(LevelError::BadSpawn {
                x: spawn.x,
                y: spawn.y,
            }
            .into());
        }

        let actor = ActorState::spawn(spawn, Vec2::new(config.actor_width, config.actor_height));
        let camera = CameraState::framing(&config.camera, &bounds, actor.centre_x());
        info!(
            min_x = bounds.min_x,
            max_x = bounds.max_x,
            death_y = bounds.death_y,
            spawn_x = spawn.x,
            spawn_y = spawn.y,
            fps = config.fps,
            "world ready"
        );
        Ok(Self {
            pipeline: Pipeline::new(&config),
            config,
            terrain,
            tick: Tick::ZERO,
            actor,
            camera,
            animation: AnimationCursor::default(),
            last_faults: Vec::new(),
        })
    }

    /// Runs one tick with `intent` and commits the result.
    pub fn advance(&mut self, intent: Intent) -> (ActorState, CameraState) {
        let ctx = Context::new(
            self.actor,
            self.camera,
            intent,
            &self.terrain,
            self.config.dt(),
        );
        let out = self.pipeline.process(ctx);

        let previous = self.actor;
        self.actor = out.actor;
        self.camera = out.camera;
        self.last_faults = out.faults;
        self.tick = self.tick.next();
        self.animation.advance(
            &self.actor,
            self.config.animation_speed_scale,
            self.config.walk_speed,
        );
        self.log_commit(&previous);
        (self.actor, self.camera)
    }

    fn log_commit(&self, previous: &ActorState) {
        let tick = self.tick.index();
        let actor = &self.actor;
        for fault in &self.last_faults {
            warn!(tick, stage = %stage_for(fault), %fault, "terrain fault");
        }
        match (previous.life, actor.life) {
            (Life::Alive, Life::Dying) => {
                info!(
                    tick,
                    x = actor.position.x,
                    y = actor.position.y,
                    "actor fell out of the level"
                );
            }
            (Life::Dead, Life::Alive) => info!(tick, "actor respawned"),
            _ => {}
        }
        if previous.action != actor.action {
            debug!(tick, from = %previous.action, to = %actor.action, "action changed");
        }
        trace!(
            tick,
            action = %actor.action,
            x = actor.position.x,
            y = actor.position.y,
            vx = actor.velocity.x,
            vy = actor.velocity.y,
            "tick committed"
        );
    }

    /// Ticks committed so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Committed actor state.
    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    /// Committed camera state.
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// What the renderer needs to draw the actor.
    pub fn view(&self) -> ActorView {
        ActorView {
            position: self.actor.position,
            action: self.actor.action,
            facing: self.actor.facing,
            frame: self.animation.frame(),
        }
    }

    /// Faults recorded during the last tick.
    pub fn last_faults(&self) -> &[TerrainFault] {
        &self.last_faults
    }

    /// Copies committed state for later [`World::restore`].
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            actor: self.actor,
            camera: self.camera,
            animation: self.animation,
        }
    }

    /// Rolls committed state back (or forward) to `snapshot`.
    pub fn restore(&mut self, snapshot: &WorldSnapshot) {
        self.tick = snapshot.tick;
        self.actor = snapshot.actor;
        self.camera = snapshot.camera;
        self.animation = snapshot.animation;
        self.last_faults.clear();
    }

    /// BLAKE3 digest of the committed tick, actor and camera.
    pub fn digest(&self) -> StateDigest {
        state_digest(self.tick, &self.actor, &self.camera)
    }

    /// Effective configuration.
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// The level this world simulates.
    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    /// The processor pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Mutable pipeline access, for toggling stages.
    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.pipeline
    }
}

fn stage_for(fault: &TerrainFault) -> Stage {
    Stage::for_probe(fault.probe())
}
