// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::camera::CameraState;
use crate::config::{CameraConfig, PhysicsConfig};
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Keeps the actor inside the play area and scrolls the camera.
///
/// The left edge is the level's `min_x`, or the camera's left edge when the
/// ratchet is on; the right edge is `max_x - width`. Hitting either stops
/// horizontal motion. Camera limits are recomputed from the level bounds,
/// then the camera follows the actor centre unless the actor is dying.
#[derive(Debug, Clone)]
pub struct BoundaryProcessor {
    camera: CameraConfig,
}

impl BoundaryProcessor {
    /// Captures camera tunables.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            camera: config.camera,
        }
    }
}

impl Processor for BoundaryProcessor {
    fn stage(&self) -> Stage {
        Stage::Boundary
    }

    fn footprint(&self) -> Footprint {
        Footprint::POSITION_X | Footprint::VELOCITY_X | Footprint::CAMERA
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        let bounds = ctx.terrain.bounds();
        let camera = &mut ctx.camera;
        let actor = &mut ctx.actor;

        let mut left = bounds.min_x;
        if camera.ratchet {
            left = left.max(camera.position.x);
        }
        let right = bounds.max_x - actor.width();
        if actor.position.x < left {
            actor.position.x = left;
            actor.velocity.x = 0.0;
        }
        if actor.position.x > right {
            actor.position.x = right;
            actor.velocity.x = 0.0;
        }

        camera.limits = CameraState::limits_for(&self.camera, &bounds);
        if actor.is_alive() {
            camera.follow(actor.centre_x());
        }
        ctx
    }
}
