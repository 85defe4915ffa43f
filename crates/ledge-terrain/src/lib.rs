// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ledge-terrain: the read-only level geometry the physics core queries.
//!
//! The core never sees tiles or files. It asks a [`TerrainQuery`] which
//! [`Face`]s intersect a world-space rectangle in a given [`Probe`]
//! direction, plus the level bounds and spawn point. Two implementations
//! ship here:
//!
//! - [`TileMap`]: a fixed-size grid parsed from ASCII rows and validated at
//!   load time.
//! - [`FaceSet`]: an explicit list of faces, used by tools and tests. It does
//!   not validate its faces, so malformed data reaches the simulation and is
//!   reported as a [`TerrainFault`] instead of an error.

mod bounds;
mod error;
mod face;
mod face_set;
mod query;
mod tilemap;

pub use bounds::LevelBounds;
pub use error::{LevelError, TerrainFault};
pub use face::{Face, FaceShape, Probe};
pub use face_set::FaceSet;
pub use query::TerrainQuery;
pub use tilemap::{Tile, TileMap, TILE_SIZE};
