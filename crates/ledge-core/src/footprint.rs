// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Context field footprints.
//!
//! A [`Footprint`] is the set of context fields a processor may write. The
//! pipeline guard compares it with [`Footprint::diff`] of the context before
//! and after the processor ran.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::actor::ActorState;
use crate::camera::CameraState;
use crate::context::Context;

/// Bitset over the writable fields of a [`Context`].
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Footprint(u16);

impl Footprint {
    /// No fields.
    pub const EMPTY: Self = Self(0);
    /// `actor.position.x`.
    pub const POSITION_X: Self = Self(1 << 0);
    /// `actor.position.y`.
    pub const POSITION_Y: Self = Self(1 << 1);
    /// `actor.velocity.x`.
    pub const VELOCITY_X: Self = Self(1 << 2);
    /// `actor.velocity.y`.
    pub const VELOCITY_Y: Self = Self(1 << 3);
    /// `actor.action`.
    pub const ACTION: Self = Self(1 << 4);
    /// `actor.facing`.
    pub const FACING: Self = Self(1 << 5);
    /// `actor.grounded`.
    pub const GROUNDED: Self = Self(1 << 6);
    /// `actor.motion`.
    pub const MOTION_FLAGS: Self = Self(1 << 7);
    /// `actor.life` and `actor.death_ticks`.
    pub const LIFE: Self = Self(1 << 8);
    /// The whole camera.
    pub const CAMERA: Self = Self(1 << 9);
    /// `faults` (append only).
    pub const FAULTS: Self = Self(1 << 10);
    /// `actor.extent`; no processor owns it.
    pub const EXTENT: Self = Self(1 << 11);
    /// `intent` and `dt`; no processor owns them.
    pub const INPUTS: Self = Self(1 << 12);

    const NAMED: [(Self, &'static str); 13] = [
        (Self::POSITION_X, "position_x"),
        (Self::POSITION_Y, "position_y"),
        (Self::VELOCITY_X, "velocity_x"),
        (Self::VELOCITY_Y, "velocity_y"),
        (Self::ACTION, "action"),
        (Self::FACING, "facing"),
        (Self::GROUNDED, "grounded"),
        (Self::MOTION_FLAGS, "motion_flags"),
        (Self::LIFE, "life"),
        (Self::CAMERA, "camera"),
        (Self::FAULTS, "faults"),
        (Self::EXTENT, "extent"),
        (Self::INPUTS, "inputs"),
    ];

    /// Union of two sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Fields in `self` that are not in `other`.
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// `true` if every field of `other` is in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` for the empty set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the fields in the set, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(bit, _)| self.contains(*bit))
            .map(|(_, name)| name)
    }

    /// Fields that differ between two contexts.
    ///
    /// Floats compare by bit pattern so a stage that rewrites a value with
    /// itself is not flagged, while `-0.0` versus `0.0` is.
    pub fn diff(before: &Context<'_>, after: &Context<'_>) -> Self {
        let mut changed = Self::between(&before.actor, &after.actor);
        if !camera_eq(&before.camera, &after.camera) {
            changed |= Self::CAMERA;
        }
        if before.faults != after.faults {
            changed |= Self::FAULTS;
        }
        if before.intent != after.intent || before.dt.to_bits() != after.dt.to_bits() {
            changed |= Self::INPUTS;
        }
        changed
    }

    /// Actor fields that differ between two actor states.
    pub fn between(before: &ActorState, after: &ActorState) -> Self {
        let mut changed = Self::EMPTY;
        let mut mark = |differs: bool, field: Self| {
            if differs {
                changed |= field;
            }
        };
        mark(!same(before.position.x, after.position.x), Self::POSITION_X);
        mark(!same(before.position.y, after.position.y), Self::POSITION_Y);
        mark(!same(before.velocity.x, after.velocity.x), Self::VELOCITY_X);
        mark(!same(before.velocity.y, after.velocity.y), Self::VELOCITY_Y);
        mark(before.action != after.action, Self::ACTION);
        mark(before.facing != after.facing, Self::FACING);
        mark(before.grounded != after.grounded, Self::GROUNDED);
        let (m0, m1) = (&before.motion, &after.motion);
        mark(
            !same(m0.target_vx, m1.target_vx)
                || m0.jump_requested != m1.jump_requested
                || m0.jump_held != m1.jump_held
                || m0.is_jumping != m1.is_jumping
                || m0.skidding != m1.skidding
                || m0.crouching != m1.crouching,
            Self::MOTION_FLAGS,
        );
        mark(
            before.life != after.life || before.death_ticks != after.death_ticks,
            Self::LIFE,
        );
        mark(
            !same(before.extent.x, after.extent.x) || !same(before.extent.y, after.extent.y),
            Self::EXTENT,
        );
        changed
    }
}

fn same(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits()
}

fn camera_eq(a: &CameraState, b: &CameraState) -> bool {
    same(a.position.x, b.position.x)
        && same(a.position.y, b.position.y)
        && same(a.dead_zone.min, b.dead_zone.min)
        && same(a.dead_zone.max, b.dead_zone.max)
        && same(a.limits.min, b.limits.min)
        && same(a.limits.max, b.limits.max)
        && a.ratchet == b.ratchet
}

impl BitOr for Footprint {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Footprint {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
