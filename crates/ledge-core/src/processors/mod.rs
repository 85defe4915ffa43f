// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One module per stage, in pipeline order.
//!
//! Input-driven and collision stages only act on a living actor; the death
//! stages own the actor while it is dying or dead.

mod action;
mod boundary;
mod ceiling;
mod death_physics;
mod death_trigger;
mod gravity;
mod ground;
mod intent;
mod left_wall;
mod movement;
mod reset;
mod right_wall;
mod velocity;

pub use action::ActionProcessor;
pub use boundary::BoundaryProcessor;
pub use ceiling::CeilingCollisionProcessor;
pub use death_physics::DeathPhysicsProcessor;
pub use death_trigger::DeathTriggerProcessor;
pub use gravity::GravityProcessor;
pub use ground::GroundCollisionProcessor;
pub use intent::IntentProcessor;
pub use left_wall::LeftWallCollisionProcessor;
pub use movement::MovementProcessor;
pub use reset::ResetProcessor;
pub use right_wall::RightWallCollisionProcessor;
pub use velocity::VelocityProcessor;

use ledge_geom::Vec2;
use ledge_terrain::Probe;

use crate::context::Context;

/// Moves `current` toward `target` by at most `step`.
fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

/// Vertical band of the actor box that wall probes look at.
#[derive(Debug, Copy, Clone)]
struct WallBand {
    dead_zone: f32,
    top_offset: f32,
    sample_inset: f32,
}

impl WallBand {
    fn from_config(config: &crate::PhysicsConfig) -> Self {
        Self {
            dead_zone: config.wall_dead_zone,
            top_offset: config.wall_top_offset,
            sample_inset: config.ground_sample_inset,
        }
    }

    /// The band shared by the actor's box at the start and end of this
    /// tick's vertical motion.
    ///
    /// A face below the start-of-tick feet is ground being landed on and a
    /// face above the start-of-tick head is a ceiling; neither is a wall.
    /// When the actor moved too far for the two boxes to overlap, the band
    /// of the box where it comes to rest this tick is used instead.
    fn of(self, ctx: &mut Context<'_>) -> Option<(f32, f32)> {
        let actor = ctx.actor;
        let y = actor.position.y;
        let previous = y - actor.velocity.y * ctx.dt;
        let low = y.max(previous) + self.dead_zone;
        let high = y.min(previous) + actor.height() - self.top_offset;
        if low < high {
            return Some((low, high));
        }
        let rest = self.resting_y(ctx, previous);
        let low = rest + self.dead_zone;
        let high = rest + actor.height() - self.top_offset;
        (low < high).then_some((low, high))
    }

    /// Feet height after the swept box meets the first walkable surface
    /// (falling) or underside (rising), or the end-of-tick height when it
    /// meets neither.
    fn resting_y(self, ctx: &mut Context<'_>, previous: f32) -> f32 {
        let actor = ctx.actor;
        let Vec2 { x, y } = actor.position;
        let width = actor.width();
        let height = actor.height();
        if y < previous {
            let samples = [x, x + width * 0.5, x + width - self.sample_inset];
            let faces =
                ctx.query_faces(Vec2::new(x, y), Vec2::new(x + width, previous), Probe::Down);
            faces
                .iter()
                .flat_map(|face| samples.iter().filter_map(move |s| face.surface_height_at(*s)))
                .filter(|surface| (y..=previous).contains(surface))
                .fold(y, f32::max)
        } else {
            let faces = ctx.query_faces(
                Vec2::new(x, previous + height),
                Vec2::new(x + width, y + height),
                Probe::Up,
            );
            faces
                .iter()
                .filter(|face| face.min.x < x + width && face.max.x > x)
                .map(|face| face.min.y - height)
                .filter(|rest| (previous..=y).contains(rest))
                .fold(y, f32::min)
        }
    }
}
