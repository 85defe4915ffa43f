// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Vec2;
use ledge_terrain::{Probe, TerrainFault};

use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

use super::WallBand;

/// Mirror of the left wall stage for the actor's right edge.
#[derive(Debug, Clone)]
pub struct RightWallCollisionProcessor {
    band: WallBand,
}

impl RightWallCollisionProcessor {
    /// Captures the probe band.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            band: WallBand::from_config(config),
        }
    }
}

impl Processor for RightWallCollisionProcessor {
    fn stage(&self) -> Stage {
        Stage::RightWall
    }

    fn footprint(&self) -> Footprint {
        Footprint::POSITION_X | Footprint::VELOCITY_X | Footprint::FAULTS
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        if !ctx.actor.is_alive() {
            return ctx;
        }
        let Some((low, high)) = self.band.of(&mut ctx) else {
            return ctx;
        };
        let x = ctx.actor.position.x;
        let width = ctx.actor.width();
        let right = x + width;
        let faces = ctx.query_faces(Vec2::new(x, low), Vec2::new(right, high), Probe::Right);

        let mut push_to: Option<f32> = None;
        for face in faces {
            let in_band = face.min.y < high && face.max.y > low;
            if !in_band || face.min.x >= right || face.max.x < right {
                continue;
            }
            if face.min.x <= x {
                ctx.faults.push(TerrainFault::Embedded {
                    face,
                    probe: Probe::Right,
                });
                continue;
            }
            push_to = Some(push_to.map_or(face.min.x, |p| p.min(face.min.x)));
        }

        if let Some(edge) = push_to {
            ctx.actor.position.x = edge - width;
            ctx.actor.velocity.x = ctx.actor.velocity.x.min(0.0);
        }
        ctx
    }
}
