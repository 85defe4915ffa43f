// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::actor::Facing;
use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Resolves the intent into target velocity, facing and the jump edge.
///
/// - Crouching on the ground zeroes the horizontal target.
/// - Reversing direction at speed on the ground starts a skid; the skid ends
///   once the actor is slow, airborne, or no longer opposing its velocity.
/// - A jump is requested only on the press edge and only when grounded.
#[derive(Debug, Clone)]
pub struct IntentProcessor {
    walk_speed: f32,
    run_speed: f32,
    skid_threshold: f32,
    skid_clear_velocity: f32,
}

impl IntentProcessor {
    /// Captures speed caps and skid thresholds.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            walk_speed: config.walk_speed,
            run_speed: config.run_speed,
            skid_threshold: config.skid_threshold,
            skid_clear_velocity: config.skid_clear_velocity,
        }
    }
}

impl Processor for IntentProcessor {
    fn stage(&self) -> Stage {
        Stage::Intent
    }

    fn footprint(&self) -> Footprint {
        Footprint::MOTION_FLAGS | Footprint::FACING
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        if !ctx.actor.is_alive() {
            return ctx;
        }
        let intent = ctx.intent;
        let actor = &mut ctx.actor;
        let vx = actor.velocity.x;
        let grounded = actor.grounded;

        let crouching = intent.wants_crouch && grounded;
        let dir = if crouching { 0.0 } else { intent.direction() };
        let cap = if intent.wants_run {
            self.run_speed
        } else {
            self.walk_speed
        };

        let motion = &mut actor.motion;
        motion.crouching = crouching;
        motion.target_vx = dir * cap;

        if dir != 0.0 && grounded && vx * dir < 0.0 && vx.abs() > self.skid_threshold {
            motion.skidding = true;
        } else if motion.skidding
            && (vx.abs() < self.skid_clear_velocity || !grounded || dir * vx >= 0.0)
        {
            motion.skidding = false;
        }

        if dir != 0.0 && !motion.skidding {
            actor.facing = if dir < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            };
        }

        motion.jump_requested = intent.wants_jump && !motion.jump_held && grounded;
        motion.jump_held = intent.wants_jump;
        ctx
    }
}
