// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Level fixtures for collision scenarios.
//!
//! Face-set fixtures share [`level_bounds`] and are wide enough that tests
//! never reach the right edge by accident.
// Fixture data is static; failing to build one is a bug in this file.
#![allow(clippy::expect_used)]

use ledge_geom::{Aabb, Vec2};
use ledge_terrain::{Face, FaceSet, FaceShape, LevelBounds, TileMap};

/// Bounds shared by the face-set fixtures: `x` in `[0, 4096]`, death below
/// `y = -64`.
pub fn level_bounds() -> LevelBounds {
    LevelBounds {
        min_x: 0.0,
        max_x: 4096.0,
        death_y: -64.0,
    }
}

fn solid(min: Vec2, max: Vec2) -> Face {
    Face::new(Aabb::new(min, max), FaceShape::Solid)
}

fn floor_face(top: f32) -> Face {
    solid(Vec2::new(0.0, top - 32.0), Vec2::new(4096.0, top))
}

/// One solid floor across the whole level with its walkable top at `top`.
/// Spawn is `(32, top)`.
pub fn flat_floor(top: f32) -> FaceSet {
    FaceSet::new(vec![floor_face(top)], level_bounds(), Vec2::new(32.0, top))
        .expect("flat floor fixture")
}

/// [`flat_floor`] plus a 16-wide solid wall standing on it whose left face
/// is at `wall_x`, `height` tall.
pub fn floor_with_wall(top: f32, wall_x: f32, height: f32) -> FaceSet {
    let wall = solid(Vec2::new(wall_x, top), Vec2::new(wall_x + 16.0, top + height));
    FaceSet::new(
        vec![floor_face(top), wall],
        level_bounds(),
        Vec2::new(32.0, top),
    )
    .expect("wall fixture")
}

/// Floor at `top` and a solid ceiling whose underside is at `ceiling`.
pub fn boxed_room(top: f32, ceiling: f32) -> FaceSet {
    let roof = solid(Vec2::new(0.0, ceiling), Vec2::new(4096.0, ceiling + 16.0));
    FaceSet::new(
        vec![floor_face(top), roof],
        level_bounds(),
        Vec2::new(32.0, top),
    )
    .expect("room fixture")
}

/// [`flat_floor`] plus one inverted and one NaN face, which every query
/// returns.
pub fn malformed_floor(top: f32) -> FaceSet {
    let inverted = Face {
        min: Vec2::new(200.0, top + 16.0),
        max: Vec2::new(100.0, top),
        shape: FaceShape::Solid,
    };
    let nan = Face {
        min: Vec2::new(f32::NAN, top),
        max: Vec2::new(300.0, top + 16.0),
        shape: FaceShape::Platform,
    };
    FaceSet::new(
        vec![floor_face(top), inverted, nan],
        level_bounds(),
        Vec2::new(32.0, top),
    )
    .expect("malformed fixture")
}

/// Nine tiles of ground, a three-tile pit, then more ground. Spawn stands
/// on the ground row (`y = 16`); the death line is the bottom of the grid.
pub fn pit_level() -> TileMap {
    TileMap::parse(
        "\
........................
........................
.S......................
#########...############
",
    )
    .expect("pit fixture")
}

/// Flat ground with a one-tile ramp up, a two-tile plateau at `y = 32` and
/// a ramp back down, plus a floating one-way platform (top at `y = 64`).
pub fn slope_level() -> TileMap {
    TileMap::parse(
        "\
................................
....................===.........
................................
.S...../##\\.....................
################################
",
    )
    .expect("slope fixture")
}

/// Walled room 256 wide: ground top at `y = 16`, a ceiling block over
/// `x` in `[112, 176)` with its underside at `y = 48`.
pub fn boxed_tiles() -> TileMap {
    TileMap::parse(
        "\
################
#..............#
#......####....#
#..............#
#.S............#
################
",
    )
    .expect("boxed fixture")
}
