// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the simulation (vector, AABB, span).
//!
//! Determinism notes:
//! - Overlap semantics are strict: boxes that only touch along an edge do not
//!   overlap. A resting actor touches the floor without intersecting it.
//! - Coordinates are bottom-up: `y` grows upward, `min` is the bottom-left.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Closed 1D intervals."]
pub mod span;
#[doc = "2D vectors."]
pub mod vec2;
