// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Vec2;

use crate::actor::Life;
use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Drives the death arc: a vertical fall under gravity with no horizontal
/// motion, then a frozen `Dead` phase once `death_ticks` ticks have passed.
///
/// Runs before movement so nothing later in the tick sees a live velocity.
#[derive(Debug, Clone)]
pub struct DeathPhysicsProcessor {
    gravity: f32,
    death_ticks: u32,
}

impl DeathPhysicsProcessor {
    /// Captures gravity and the arc length in ticks.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            gravity: config.gravity,
            death_ticks: config.death_ticks(),
        }
    }
}

impl Processor for DeathPhysicsProcessor {
    fn stage(&self) -> Stage {
        Stage::DeathPhysics
    }

    fn footprint(&self) -> Footprint {
        Footprint::VELOCITY_X | Footprint::VELOCITY_Y | Footprint::GROUNDED | Footprint::LIFE
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        let dt = ctx.dt;
        let actor = &mut ctx.actor;
        match actor.life {
            Life::Alive => {}
            Life::Dying => {
                actor.death_ticks = actor.death_ticks.saturating_add(1);
                actor.grounded = false;
                if actor.death_ticks >= self.death_ticks {
                    actor.life = Life::Dead;
                    actor.velocity = Vec2::ZERO;
                } else {
                    actor.velocity.x = 0.0;
                    actor.velocity.y -= self.gravity * dt;
                }
            }
            Life::Dead => {
                actor.death_ticks = actor.death_ticks.saturating_add(1);
                actor.velocity = Vec2::ZERO;
            }
        }
        ctx
    }
}
