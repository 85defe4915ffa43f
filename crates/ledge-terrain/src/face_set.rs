// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Explicit face lists.

use ledge_geom::{Aabb, Vec2};

use crate::bounds::LevelBounds;
use crate::error::LevelError;
use crate::face::{Face, Probe};
use crate::query::TerrainQuery;

/// Terrain defined by a literal list of faces.
///
/// Faces are kept as given, malformed ones included. A malformed face cannot
/// be located, so every query returns it and the consumer decides what to do.
/// Well-formed faces are returned when they touch or overlap the region.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSet {
    faces: Vec<Face>,
    bounds: LevelBounds,
    spawn: Vec2,
}

impl FaceSet {
    /// Builds a face set. Only the bounds are validated.
    pub fn new(faces: Vec<Face>, bounds: LevelBounds, spawn: Vec2) -> Result<Self, LevelError> {
        bounds.validate()?;
        if !spawn.is_finite() || spawn.x < bounds.min_x || spawn.x > bounds.max_x {
            return Err(LevelError::BadSpawn {
                x: spawn.x,
                y: spawn.y,
            });
        }
        Ok(Self {
            faces,
            bounds,
            spawn,
        })
    }

    /// All faces in insertion order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    fn touches(face: &Face, region: &Aabb) -> bool {
        let (min, max) = (region.min(), region.max());
        face.min.x <= max.x && face.max.x >= min.x && face.min.y <= max.y && face.max.y >= min.y
    }
}

impl TerrainQuery for FaceSet {
    fn query(&self, region: &Aabb, probe: Probe) -> Vec<Face> {
        self.faces
            .iter()
            .filter(|face| {
                !face.is_well_formed() || (face.shape.blocks(probe) && Self::touches(face, region))
            })
            .copied()
            .collect()
    }

    fn bounds(&self) -> LevelBounds {
        self.bounds
    }

    fn spawn(&self) -> Vec2 {
        self.spawn
    }
}
