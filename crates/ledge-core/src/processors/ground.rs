// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Vec2;
use ledge_terrain::{FaceShape, Probe};

use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Ground contact, slope following and landing.
///
/// The walkable surface is sampled under the left foot, the centre and the
/// (inset) right foot. A surface counts when the feet are within the snap
/// tolerance above it or within the penetration allowance below it; the
/// allowance grows with this tick's fall distance so fast falls cannot
/// tunnel. A grounded actor also accepts surfaces up to `|vx| * dt` below,
/// which keeps it glued to downward slopes. One-way platforms only count if
/// the feet started the tick at or above them.
///
/// With a surface found and the actor not rising, the feet snap to the
/// highest one and vertical velocity is cleared; otherwise the actor is
/// airborne.
#[derive(Debug, Clone)]
pub struct GroundCollisionProcessor {
    snap_tolerance: f32,
    max_penetration: f32,
    sample_inset: f32,
}

impl GroundCollisionProcessor {
    /// Captures the contact tolerances.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            snap_tolerance: config.ground_snap_tolerance,
            max_penetration: config.ground_max_penetration,
            sample_inset: config.ground_sample_inset,
        }
    }
}

impl Processor for GroundCollisionProcessor {
    fn stage(&self) -> Stage {
        Stage::Ground
    }

    fn footprint(&self) -> Footprint {
        Footprint::POSITION_Y | Footprint::VELOCITY_Y | Footprint::GROUNDED | Footprint::FAULTS
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        let actor = ctx.actor;
        if !actor.is_alive() {
            return ctx;
        }
        let dt = ctx.dt;
        let Vec2 { x, y } = actor.position;
        let vy = actor.velocity.y;
        let previous_y = y - vy * dt;

        let mut reach_up = self.snap_tolerance;
        if actor.grounded {
            reach_up += actor.velocity.x.abs() * dt;
        }
        let reach_down = self.max_penetration + (-vy).max(0.0) * dt;

        let samples = [
            x,
            x + actor.width() * 0.5,
            x + actor.width() - self.sample_inset,
        ];
        let faces = ctx.query_faces(
            Vec2::new(x, y - reach_up),
            Vec2::new(x + actor.width(), y + reach_down),
            Probe::Down,
        );

        let mut highest: Option<f32> = None;
        for face in &faces {
            for sample in samples {
                let Some(surface) = face.surface_height_at(sample) else {
                    continue;
                };
                let in_reach = y >= surface - reach_down && y <= surface + reach_up;
                let from_above = face.shape != FaceShape::Platform || previous_y >= surface;
                if in_reach && from_above {
                    highest = Some(highest.map_or(surface, |h| h.max(surface)));
                }
            }
        }

        match highest {
            Some(surface) if vy <= 0.0 => {
                ctx.actor.position.y = surface;
                ctx.actor.velocity.y = 0.0;
                ctx.actor.grounded = true;
            }
            _ => ctx.actor.grounded = false,
        }
        ctx
    }
}
