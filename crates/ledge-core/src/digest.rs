// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical state digest.
//!
//! Layout (all little-endian): domain tag, tick index (`u64`), then actor
//! position, velocity, extent (canonical `f32` bits), action code, facing,
//! grounded, motion flags, life and death counter, then camera position,
//! dead zone, limits and ratchet. Floats go through
//! [`ledge_geom::canonical_bits`], so `-0.0` and `0.0` hash alike.

use ledge_geom::{canonical_bits, Tick};

use crate::actor::{ActorState, Facing, Life};
use crate::camera::CameraState;

/// Domain separator prefixed to every state digest.
pub const STATE_DIGEST_DOMAIN: &[u8] = b"ledge:state:v1\0";

/// 32-byte BLAKE3 digest of committed state.
pub type StateDigest = [u8; 32];

pub(crate) fn state_digest(tick: Tick, actor: &ActorState, camera: &CameraState) -> StateDigest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(STATE_DIGEST_DOMAIN);
    hasher.update(&tick.index().to_le_bytes());

    let floats = [
        actor.position.x,
        actor.position.y,
        actor.velocity.x,
        actor.velocity.y,
        actor.extent.x,
        actor.extent.y,
        actor.motion.target_vx,
    ];
    for value in floats {
        hasher.update(&canonical_bits(value));
    }
    let flags = [
        actor.action.code(),
        u8::from(actor.facing == Facing::Right),
        u8::from(actor.grounded),
        u8::from(actor.motion.jump_requested),
        u8::from(actor.motion.jump_held),
        u8::from(actor.motion.is_jumping),
        u8::from(actor.motion.skidding),
        u8::from(actor.motion.crouching),
        match actor.life {
            Life::Alive => 0,
            Life::Dying => 1,
            Life::Dead => 2,
        },
    ];
    hasher.update(&flags);
    hasher.update(&actor.death_ticks.to_le_bytes());

    let camera_floats = [
        camera.position.x,
        camera.position.y,
        camera.dead_zone.min,
        camera.dead_zone.max,
        camera.limits.min,
        camera.limits.max,
    ];
    for value in camera_floats {
        hasher.update(&canonical_bits(value));
    }
    hasher.update(&[u8::from(camera.ratchet)]);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledge_geom::{Span, Vec2};

    fn camera() -> CameraState {
        CameraState {
            position: Vec2::ZERO,
            dead_zone: Span::new(96.0, 128.0),
            limits: Span::new(0.0, 100.0),
            ratchet: true,
        }
    }

    #[test]
    fn negative_zero_hashes_like_zero() {
        let a = ActorState::spawn(Vec2::new(0.0, 16.0), Vec2::new(16.0, 16.0));
        let mut b = a;
        b.velocity.x = -0.0;
        assert_eq!(
            state_digest(Tick::ZERO, &a, &camera()),
            state_digest(Tick::ZERO, &b, &camera())
        );
    }

    #[test]
    fn tick_and_flags_change_the_digest() {
        let a = ActorState::spawn(Vec2::new(0.0, 16.0), Vec2::new(16.0, 16.0));
        let base = state_digest(Tick::ZERO, &a, &camera());
        assert_ne!(base, state_digest(Tick::new(1), &a, &camera()));
        let mut b = a;
        b.motion.jump_held = true;
        assert_ne!(base, state_digest(Tick::ZERO, &b, &camera()));
    }
}
