// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Vec2;

use crate::actor::{ActorState, Life};
use crate::camera::CameraState;
use crate::config::{CameraConfig, PhysicsConfig};
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Respawns a dead actor once its death arc has fully elapsed.
///
/// The actor returns to [`ActorState::spawn`] at the level spawn point and
/// the camera is reframed on it. `action` is left for the action stage to
/// derive, which yields `Idle` for the spawn state.
#[derive(Debug, Clone)]
pub struct ResetProcessor {
    death_ticks: u32,
    extent: Vec2,
    camera: CameraConfig,
}

impl ResetProcessor {
    /// Captures arc length, actor size and camera tunables.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            death_ticks: config.death_ticks(),
            extent: Vec2::new(config.actor_width, config.actor_height),
            camera: config.camera,
        }
    }
}

impl Processor for ResetProcessor {
    fn stage(&self) -> Stage {
        Stage::Reset
    }

    fn footprint(&self) -> Footprint {
        Footprint::POSITION_X
            | Footprint::POSITION_Y
            | Footprint::VELOCITY_X
            | Footprint::VELOCITY_Y
            | Footprint::FACING
            | Footprint::GROUNDED
            | Footprint::MOTION_FLAGS
            | Footprint::LIFE
            | Footprint::CAMERA
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        if ctx.actor.life != Life::Dead || ctx.actor.death_ticks <= self.death_ticks {
            return ctx;
        }
        let action = ctx.actor.action;
        let mut spawned = ActorState::spawn(ctx.terrain.spawn(), self.extent);
        spawned.action = action;
        ctx.actor = spawned;
        ctx.camera = CameraState::framing(&self.camera, &ctx.terrain.bounds(), spawned.centre_x());
        ctx
    }
}
