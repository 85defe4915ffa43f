// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Vertical forces: jump impulse on a grounded press edge, otherwise
/// gravity while airborne.
///
/// Releasing jump while still rising multiplies gravity by the cut
/// multiplier, which gives variable jump height.
#[derive(Debug, Clone)]
pub struct GravityProcessor {
    gravity: f32,
    jump_velocity: f32,
    run_jump_velocity: f32,
    run_jump_threshold: f32,
    jump_cut_multiplier: f32,
    terminal_velocity: Option<f32>,
}

impl GravityProcessor {
    /// Captures gravity and jump tunables.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            run_jump_velocity: config.run_jump_velocity,
            run_jump_threshold: config.run_jump_threshold,
            jump_cut_multiplier: config.jump_cut_multiplier,
            terminal_velocity: config.terminal_velocity,
        }
    }
}

impl Processor for GravityProcessor {
    fn stage(&self) -> Stage {
        Stage::Gravity
    }

    fn footprint(&self) -> Footprint {
        Footprint::VELOCITY_Y | Footprint::GROUNDED | Footprint::MOTION_FLAGS
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        if !ctx.actor.is_alive() {
            return ctx;
        }
        let dt = ctx.dt;
        let actor = &mut ctx.actor;

        if actor.grounded {
            if actor.motion.jump_requested {
                actor.velocity.y = if actor.velocity.x.abs() > self.run_jump_threshold {
                    self.run_jump_velocity
                } else {
                    self.jump_velocity
                };
                actor.grounded = false;
                actor.motion.is_jumping = true;
            } else {
                actor.motion.is_jumping = false;
            }
            return ctx;
        }

        let cut = actor.motion.is_jumping && !actor.motion.jump_held && actor.velocity.y > 0.0;
        let g = if cut {
            self.gravity * self.jump_cut_multiplier
        } else {
            self.gravity
        };
        actor.velocity.y -= g * dt;
        if let Some(cap) = self.terminal_velocity {
            actor.velocity.y = actor.velocity.y.max(-cap);
        }
        ctx
    }
}
