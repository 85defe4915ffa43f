// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The terrain port consumed by the physics core.

use ledge_geom::{Aabb, Vec2};

use crate::bounds::LevelBounds;
use crate::face::{Face, Probe};

/// Read-only per-tick view into level geometry.
///
/// Implementations must be pure: the same `(region, probe)` always yields the
/// same faces in the same order. Terrain is immutable for the duration of a
/// tick.
pub trait TerrainQuery {
    /// Faces that intersect `region` and can block motion in direction
    /// `probe`. Malformed faces may be returned; callers classify them.
    fn query(&self, region: &Aabb, probe: Probe) -> Vec<Face>;

    /// Horizontal bounds and death line.
    fn bounds(&self) -> LevelBounds;

    /// Where the actor (re)spawns; bottom-left of the actor box.
    fn spawn(&self) -> Vec2;
}

impl<T: TerrainQuery + ?Sized> TerrainQuery for &T {
    fn query(&self, region: &Aabb, probe: Probe) -> Vec<Face> {
        (**self).query(region, probe)
    }

    fn bounds(&self) -> LevelBounds {
        (**self).bounds()
    }

    fn spawn(&self) -> Vec2 {
        (**self).spawn()
    }
}

impl<T: TerrainQuery + ?Sized> TerrainQuery for Box<T> {
    fn query(&self, region: &Aabb, probe: Probe) -> Vec<Face> {
        (**self).query(region, probe)
    }

    fn bounds(&self) -> LevelBounds {
        (**self).bounds()
    }

    fn spawn(&self) -> Vec2 {
        (**self).spawn()
    }
}
