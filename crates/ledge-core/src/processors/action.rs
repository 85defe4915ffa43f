// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::actor::{Action, ActorState, Life};
use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Derives the one canonical [`Action`] from the final state of the tick.
///
/// Precedence: death phase, airborne, skid, run, walk, idle. This is the
/// only stage that writes `action`.
#[derive(Debug, Clone)]
pub struct ActionProcessor {
    walk_threshold: f32,
    run_threshold: f32,
}

impl ActionProcessor {
    /// Captures the speed thresholds.
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            walk_threshold: config.walk_threshold,
            run_threshold: config.run_threshold,
        }
    }

    /// Classification used by [`Processor::process`].
    pub fn classify(&self, actor: &ActorState) -> Action {
        match actor.life {
            Life::Dying => Action::Dying,
            Life::Dead => Action::Dead,
            Life::Alive => {
                let speed = actor.velocity.x.abs();
                if !actor.grounded {
                    Action::Jumping
                } else if actor.motion.skidding {
                    Action::Skidding
                } else if speed > self.run_threshold {
                    Action::Running
                } else if speed > self.walk_threshold {
                    Action::Walking
                } else {
                    Action::Idle
                }
            }
        }
    }
}

impl Processor for ActionProcessor {
    fn stage(&self) -> Stage {
        Stage::Action
    }

    fn footprint(&self) -> Footprint {
        Footprint::ACTION
    }

    fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        ctx.actor.action = self.classify(&ctx.actor);
        ctx
    }
}
