// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
/// Closed interval `[min, max]` on one axis.
///
/// Used for camera dead zones (offsets inside the viewport) and camera
/// limits (world-space range the viewport origin may occupy).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl Span {
    /// Creates a span; if `max < min` the span collapses to `[min, min]`.
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Clamps `value` into the span.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Returns `true` if `value` lies inside the closed interval.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Length of the interval.
    pub fn len(&self) -> f32 {
        self.max - self.min
    }

    /// Returns `true` when the span has zero length.
    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }
}
