// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Vec2;
use ledge_terrain::Probe;

use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Stops a rising actor whose head entered the underside of a face this
/// tick.
///
/// The head is swept from where it started the tick, so a rise longer than
/// the actor's height still meets the first underside on the way.
///
/// The head probe is inset horizontally so a wall the actor is pressed
/// against does not count as a ceiling. On contact the actor is placed just
/// under the lowest hit face and given the (non-positive) bounce velocity.
#[derive(Debug, Clone)]
pub struct CeilingCollisionProcessor {
    inset: f32,
    bounce_velocity: f32,
}

impl CeilingCollisionProcessor {
    /// Captures the head inset and bounce velocity.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            inset: config.ceiling_inset,
            bounce_velocity: config.ceiling_bounce_velocity.min(0.0),
        }
    }
}

impl Processor for CeilingCollisionProcessor {
    fn stage(&self) -> Stage {
        Stage::Ceiling
    }

    fn footprint(&self) -> Footprint {
        Footprint::POSITION_Y | Footprint::VELOCITY_Y | Footprint::FAULTS
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        let actor = ctx.actor;
        if !actor.is_alive() || actor.velocity.y <= 0.0 {
            return ctx;
        }
        let y = actor.position.y;
        let top = y + actor.height();
        let previous_top = top - actor.velocity.y * ctx.dt;
        let left = actor.position.x + self.inset;
        let right = actor.position.x + actor.width() - self.inset;
        let faces = ctx.query_faces(
            Vec2::new(left, previous_top.min(y)),
            Vec2::new(right, top),
            Probe::Up,
        );

        let mut lowest: Option<f32> = None;
        for face in faces {
            let overlaps_x = face.min.x < right && face.max.x > left;
            let entered = face.min.y < top && previous_top <= face.min.y;
            if !overlaps_x || !entered {
                continue;
            }
            lowest = Some(lowest.map_or(face.min.y, |l| l.min(face.min.y)));
        }

        if let Some(underside) = lowest {
            ctx.actor.position.y = underside - actor.height();
            ctx.actor.velocity.y = self.bounce_velocity;
        }
        ctx
    }
}
