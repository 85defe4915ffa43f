// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Vec2;

use crate::actor::Life;
use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Starts the death arc when a living actor drops below the death line.
#[derive(Debug, Clone)]
pub struct DeathTriggerProcessor {
    leap_velocity: f32,
}

impl DeathTriggerProcessor {
    /// Captures the death leap.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            leap_velocity: config.death_leap_velocity,
        }
    }
}

impl Processor for DeathTriggerProcessor {
    fn stage(&self) -> Stage {
        Stage::DeathTrigger
    }

    fn footprint(&self) -> Footprint {
        Footprint::VELOCITY_X | Footprint::VELOCITY_Y | Footprint::GROUNDED | Footprint::LIFE
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        let death_y = ctx.terrain.bounds().death_y;
        let actor = &mut ctx.actor;
        if actor.is_alive() && actor.position.y < death_y {
            actor.life = Life::Dying;
            actor.death_ticks = 0;
            actor.velocity = Vec2::new(0.0, self.leap_velocity);
            actor.grounded = false;
        }
        ctx
    }
}
