// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Ledge.

This crate provides:
- 2D vectors in bottom-up pixel space (`Vec2`).
- Axis-aligned bounding boxes (`Aabb`) and 1D intervals (`Span`).
- Discrete simulation ticks (`Tick`).
- Float canonicalisation used by state hashing.

Design notes:
- Deterministic: no ambient RNG, no wall-clock input, no fused multiply-add.
- Float32 throughout; operations favor clarity and reproducibility.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Float canonicalisation helpers for hashing and comparisons.
pub mod scalar;
/// Time-aware utilities for tick-based stepping.
pub mod temporal;
/// Foundational geometric types.
pub mod types;

pub use scalar::{canonical_bits, canonical_f32};
pub use temporal::tick::Tick;
pub use types::aabb::Aabb;
pub use types::span::Span;
pub use types::vec2::Vec2;
