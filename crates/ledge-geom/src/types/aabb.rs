// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::types::vec2::Vec2;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are finite `f32` pixels in bottom-up world space.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in
    /// `max`, or if a corner is not finite.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(
            Self::corners_valid(min, max),
            "invalid AABB: min > max or non-finite corner"
        );
        Self { min, max }
    }

    /// Fallible constructor for corners that come from untrusted data.
    #[must_use]
    pub fn try_new(min: Vec2, max: Vec2) -> Option<Self> {
        Self::corners_valid(min, max).then_some(Self { min, max })
    }

    fn corners_valid(min: Vec2, max: Vec2) -> bool {
        min.is_finite() && max.is_finite() && min.x <= max.x && min.y <= max.y
    }

    /// Builds a box from its bottom-left corner and a non-negative size.
    #[must_use]
    pub fn from_origin_size(origin: Vec2, width: f32, height: f32) -> Self {
        Self::new(origin, Vec2::new(origin.x + width, origin.y + height))
    }

    /// Returns the minimum (bottom-left) corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum (top-right) corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns `true` if the interiors of both boxes intersect.
    ///
    /// Boxes that share only an edge do not overlap, so an actor standing on
    /// a tile or flush against a wall is not reported as penetrating it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Returns `true` if `point` lies inside the box or on its boundary.
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Inflates the box by `dx` horizontally and `dy` vertically on each side.
    ///
    /// Negative margins shrink the box but never invert it; a collapsed axis
    /// ends up as a zero-width line at the old centre.
    #[must_use]
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        let cx = (self.min.x + self.max.x) * 0.5;
        let cy = (self.min.y + self.max.y) * 0.5;
        let min = Vec2::new((self.min.x - dx).min(cx), (self.min.y - dy).min(cy));
        let max = Vec2::new((self.max.x + dx).max(cx), (self.max.y + dy).max(cy));
        Self { min, max }
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// Returns `None` if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Self { min, max })
    }
}
