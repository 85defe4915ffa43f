// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Explicit Euler step: `position += velocity * dt`.
///
/// Runs in every life phase so the death arc moves the actor too.
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityProcessor;

impl Processor for VelocityProcessor {
    fn stage(&self) -> Stage {
        Stage::Velocity
    }

    fn footprint(&self) -> Footprint {
        Footprint::POSITION_X | Footprint::POSITION_Y
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        let step = ctx.actor.velocity.scale(ctx.dt);
        ctx.actor.position = ctx.actor.position.add(&step);
        ctx
    }
}
