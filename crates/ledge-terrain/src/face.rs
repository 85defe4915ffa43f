// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tile faces and query directions.

use ledge_geom::{Aabb, Vec2};

/// Collision shape of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceShape {
    /// Full rectangle; blocks from every side.
    Solid,
    /// 45°-style ramp rising from the bottom-left to the top-right corner.
    SlopeUp,
    /// Ramp falling from the top-left to the bottom-right corner.
    SlopeDown,
    /// One-way platform; only its top surface collides, and only from above.
    Platform,
}

impl FaceShape {
    /// Whether this shape participates in queries made in direction `probe`.
    ///
    /// - Side probes only see full solids; ramps are walked by ground snapping.
    /// - Upward probes see anything with a solid underside (not platforms).
    /// - Downward probes see every shape.
    pub const fn blocks(self, probe: Probe) -> bool {
        match probe {
            Probe::Left | Probe::Right => matches!(self, Self::Solid),
            Probe::Up => !matches!(self, Self::Platform),
            Probe::Down => true,
        }
    }
}

/// Direction a collision query is made in, relative to the actor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Probe {
    /// Looking for walls on the actor's left.
    Left,
    /// Looking for walls on the actor's right.
    Right,
    /// Looking for ceilings above the actor's head.
    Up,
    /// Looking for ground under the actor's feet.
    Down,
}

/// One collidable face returned by a terrain query.
///
/// Corners are raw values handed over by the level collaborator. A face is
/// only usable when [`Face::is_well_formed`] holds; consumers must check
/// before trusting `min`/`max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Face {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
    /// Collision shape inside the rectangle.
    pub shape: FaceShape,
}

impl Face {
    /// Builds a face covering `bounds`.
    pub fn new(bounds: Aabb, shape: FaceShape) -> Self {
        Self {
            min: bounds.min(),
            max: bounds.max(),
            shape,
        }
    }

    /// Finite corners with a strictly positive extent on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x < self.max.x
            && self.min.y < self.max.y
    }

    /// Bounding box, or `None` for malformed faces.
    pub fn bounds(&self) -> Option<Aabb> {
        if self.is_well_formed() {
            Aabb::try_new(self.min, self.max)
        } else {
            None
        }
    }

    /// Height of the walkable top surface at world `x`.
    ///
    /// Returns `None` when `x` lies outside `[min.x, max.x)` or the face is
    /// malformed. Ramps interpolate linearly across their width.
    pub fn surface_height_at(&self, x: f32) -> Option<f32> {
        if !self.is_well_formed() || x < self.min.x || x >= self.max.x {
            return None;
        }
        let t = ((x - self.min.x) / (self.max.x - self.min.x)).clamp(0.0, 1.0);
        let h = self.max.y - self.min.y;
        Some(match self.shape {
            FaceShape::Solid | FaceShape::Platform => self.max.y,
            FaceShape::SlopeUp => self.min.y + t * h,
            FaceShape::SlopeDown => self.max.y - t * h,
        })
    }
}
