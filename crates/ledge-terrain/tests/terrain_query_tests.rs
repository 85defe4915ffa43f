// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used)]

use ledge_geom::{Aabb, Vec2};
use ledge_terrain::{
    Face, FaceSet, FaceShape, LevelBounds, LevelError, Probe, TerrainQuery, TileMap,
};
use proptest::prelude::*;

fn bounds() -> LevelBounds {
    LevelBounds {
        min_x: 0.0,
        max_x: 320.0,
        death_y: -100.0,
    }
}

fn floor() -> Face {
    Face::new(
        Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(320.0, 50.0)),
        FaceShape::Solid,
    )
}

#[test]
fn face_set_returns_malformed_faces_for_any_region() {
    let broken = Face {
        min: Vec2::new(f32::NAN, 0.0),
        max: Vec2::new(10.0, 10.0),
        shape: FaceShape::Solid,
    };
    let set = FaceSet::new(vec![floor(), broken], bounds(), Vec2::new(10.0, 50.0))
        .expect("valid bounds");
    let far = Aabb::new(Vec2::new(200.0, 500.0), Vec2::new(210.0, 510.0));
    let faces = set.query(&far, Probe::Down);
    assert_eq!(faces.len(), 1);
    assert!(!faces[0].is_well_formed());
}

#[test]
fn face_set_includes_touching_faces() {
    let set = FaceSet::new(vec![floor()], bounds(), Vec2::new(10.0, 50.0)).expect("valid bounds");
    let standing = Aabb::new(Vec2::new(10.0, 50.0), Vec2::new(26.0, 66.0));
    assert_eq!(set.query(&standing, Probe::Down), vec![floor()]);
}

#[test]
fn face_set_rejects_inverted_bounds() {
    let inverted = LevelBounds {
        min_x: 10.0,
        max_x: 0.0,
        death_y: 0.0,
    };
    let err = FaceSet::new(Vec::new(), inverted, Vec2::ZERO).expect_err("inverted bounds");
    assert!(matches!(err, LevelError::InvalidBounds { .. }));
}

#[test]
fn level_error_messages_name_the_location() {
    let err = TileMap::parse("S?\n##\n").expect_err("unknown glyph");
    assert_eq!(err.to_string(), "unknown glyph '?' at row 0, column 1");
}

proptest! {
    // Any query result is a subset of the faces that actually overlap the
    // region, and repeated queries are identical.
    #[test]
    fn tilemap_queries_are_pure_and_local(
        x in -40.0f32..200.0,
        y in -40.0f32..100.0,
        w in 0.0f32..64.0,
        h in 0.0f32..64.0,
    ) {
        let map = TileMap::parse("\
..........
.S....#...
..=..##...
###/\\###.#
").expect("fixture parses");
        let region = Aabb::from_origin_size(Vec2::new(x, y), w, h);
        for probe in [Probe::Left, Probe::Right, Probe::Up, Probe::Down] {
            let first = map.query(&region, probe);
            let second = map.query(&region, probe);
            prop_assert_eq!(&first, &second);
            for face in &first {
                prop_assert!(face.is_well_formed());
                prop_assert!(face.shape.blocks(probe));
                prop_assert!(face.min.x <= region.max().x + 16.0);
                prop_assert!(face.max.x >= region.min().x - 16.0);
            }
        }
    }
}
