// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

use super::approach;

/// Horizontal speed: friction with no target, acceleration toward it
/// otherwise (skid, ground or air rate).
#[derive(Debug, Clone)]
pub struct MovementProcessor {
    friction: f32,
    stop_velocity: f32,
    ground_acceleration: f32,
    air_acceleration: f32,
    skid_deceleration: f32,
}

impl MovementProcessor {
    /// Captures friction and acceleration rates.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            friction: config.friction,
            stop_velocity: config.stop_velocity,
            ground_acceleration: config.ground_acceleration,
            air_acceleration: config.air_acceleration,
            skid_deceleration: config.skid_deceleration,
        }
    }
}

impl Processor for MovementProcessor {
    fn stage(&self) -> Stage {
        Stage::Movement
    }

    fn footprint(&self) -> Footprint {
        Footprint::VELOCITY_X
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        if !ctx.actor.is_alive() {
            return ctx;
        }
        let dt = ctx.dt;
        let actor = &mut ctx.actor;
        let target = actor.motion.target_vx;
        let vx = actor.velocity.x;

        actor.velocity.x = if target == 0.0 {
            let decayed = vx * self.friction;
            if decayed.abs() < self.stop_velocity {
                0.0
            } else {
                decayed
            }
        } else {
            let rate = if actor.motion.skidding {
                self.skid_deceleration
            } else if actor.grounded {
                self.ground_acceleration
            } else {
                self.air_acceleration
            };
            approach(vx, target, rate * dt)
        };
        ctx
    }
}
