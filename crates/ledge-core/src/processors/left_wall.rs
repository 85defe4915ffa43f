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

/// Pushes the actor out of solid faces overlapping its left edge.
///
/// Only the band between the feet dead zone and the head offset is probed,
/// taken over both the start and end of this tick's vertical motion, so
/// ground and ceiling contacts are left to their own stages. A face that
/// spans the whole actor width gives no consistent push-out and is reported
/// as [`TerrainFault::Embedded`] instead.
#[derive(Debug, Clone)]
pub struct LeftWallCollisionProcessor {
    band: WallBand,
}

impl LeftWallCollisionProcessor {
    /// Captures the probe band.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            band: WallBand::from_config(config),
        }
    }
}

impl Processor for LeftWallCollisionProcessor {
    fn stage(&self) -> Stage {
        Stage::LeftWall
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
        let right = x + ctx.actor.width();
        let faces = ctx.query_faces(Vec2::new(x, low), Vec2::new(right, high), Probe::Left);

        let mut push_to: Option<f32> = None;
        for face in faces {
            let in_band = face.min.y < high && face.max.y > low;
            if !in_band || face.min.x > x || face.max.x <= x {
                continue;
            }
            if face.max.x >= right {
                ctx.faults.push(TerrainFault::Embedded {
                    face,
                    probe: Probe::Left,
                });
                continue;
            }
            push_to = Some(push_to.map_or(face.max.x, |p| p.max(face.max.x)));
        }

        if let Some(edge) = push_to {
            ctx.actor.position.x = edge;
            ctx.actor.velocity.x = ctx.actor.velocity.x.max(0.0);
        }
        ctx
    }
}
