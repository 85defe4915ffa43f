// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed-size tile grid loaded from ASCII rows.
//!
//! Glyphs (one per tile, top row first as the level is drawn):
//!
//! | glyph | tile |
//! |-------|------|
//! | `.`   | empty |
//! | `#`   | solid |
//! | `/`   | slope rising to the right |
//! | `\`   | slope falling to the right |
//! | `=`   | one-way platform |
//! | `S`   | empty, marks the spawn tile |
//!
//! Blank lines are ignored. Internally rows are stored bottom-up so row 0 is
//! the ground line at world `y = 0`.

use ledge_geom::{Aabb, Vec2};

use crate::bounds::LevelBounds;
use crate::error::LevelError;
use crate::face::{Face, FaceShape, Probe};
use crate::query::TerrainQuery;

/// Edge length of one tile in world units.
pub const TILE_SIZE: f32 = 16.0;

/// Contents of one grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Nothing to collide with.
    Empty,
    /// Full block.
    Solid,
    /// Ramp rising to the right.
    SlopeUp,
    /// Ramp falling to the right.
    SlopeDown,
    /// One-way platform.
    Platform,
}

impl Tile {
    fn from_glyph(glyph: char) -> Option<(Self, bool)> {
        Some(match glyph {
            '.' => (Self::Empty, false),
            'S' => (Self::Empty, true),
            '#' => (Self::Solid, false),
            '/' => (Self::SlopeUp, false),
            '\\' => (Self::SlopeDown, false),
            '=' => (Self::Platform, false),
            _ => return None,
        })
    }

    const fn shape(self) -> Option<FaceShape> {
        match self {
            Self::Empty => None,
            Self::Solid => Some(FaceShape::Solid),
            Self::SlopeUp => Some(FaceShape::SlopeUp),
            Self::SlopeDown => Some(FaceShape::SlopeDown),
            Self::Platform => Some(FaceShape::Platform),
        }
    }
}

/// Immutable tile grid with bounds and spawn point.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    columns: usize,
    rows: usize,
    /// Row-major, bottom row first.
    tiles: Vec<Tile>,
    spawn: Vec2,
}

impl TileMap {
    /// Parses a level from ASCII rows.
    ///
    /// The spawn point is the bottom-left corner of the `S` tile. Bounds span
    /// the full grid width and the death line sits at the bottom of the grid
    /// (`y = 0`), so falling through a gap in the bottom row is fatal.
    pub fn parse(source: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = source
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(LevelError::Empty);
        };
        let columns = first.chars().count();
        let rows = lines.len();

        let mut tiles = vec![Tile::Empty; columns * rows];
        let mut spawn_cell: Option<(usize, usize)> = None;

        for (text_row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(LevelError::RaggedRow {
                    row: text_row,
                    expected: columns,
                    found,
                });
            }
            let row = rows - 1 - text_row;
            for (column, glyph) in line.chars().enumerate() {
                let (tile, is_spawn) =
                    Tile::from_glyph(glyph).ok_or(LevelError::UnknownGlyph {
                        row: text_row,
                        column,
                        glyph,
                    })?;
                if is_spawn {
                    if spawn_cell.is_some() {
                        return Err(LevelError::DuplicateSpawn {
                            row: text_row,
                            column,
                        });
                    }
                    spawn_cell = Some((column, row));
                }
                tiles[row * columns + column] = tile;
            }
        }

        let (column, row) = spawn_cell.ok_or(LevelError::MissingSpawn)?;
        let map = Self {
            columns,
            rows,
            tiles,
            spawn: Vec2::new(column as f32 * TILE_SIZE, row as f32 * TILE_SIZE),
        };
        map.bounds().validate()?;
        Ok(map)
    }

    /// Grid width in tiles.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid height in tiles.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Tile at `(column, row)` with row 0 at the bottom; out-of-grid cells
    /// read as empty.
    pub fn tile(&self, column: usize, row: usize) -> Tile {
        if column >= self.columns || row >= self.rows {
            return Tile::Empty;
        }
        self.tiles[row * self.columns + column]
    }

    fn face_at(column: usize, row: usize, shape: FaceShape) -> Face {
        let origin = Vec2::new(column as f32 * TILE_SIZE, row as f32 * TILE_SIZE);
        Face::new(Aabb::from_origin_size(origin, TILE_SIZE, TILE_SIZE), shape)
    }

    /// Inclusive cell range covering `[lo, hi]` on one axis, clipped to
    /// `0..len`. `None` when the range misses the grid entirely.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn cell_range(lo: f32, hi: f32, len: usize) -> Option<(usize, usize)> {
        if len == 0 || lo > hi {
            return None;
        }
        let first = (lo / TILE_SIZE).floor();
        let last = (hi / TILE_SIZE).floor();
        let top = (len - 1) as f32;
        if last < 0.0 || first > top {
            return None;
        }
        Some((first.max(0.0) as usize, last.min(top) as usize))
    }
}

impl TerrainQuery for TileMap {
    fn query(&self, region: &Aabb, probe: Probe) -> Vec<Face> {
        let (min, max) = (region.min(), region.max());
        let Some((c0, c1)) = Self::cell_range(min.x, max.x, self.columns) else {
            return Vec::new();
        };
        let Some((r0, r1)) = Self::cell_range(min.y, max.y, self.rows) else {
            return Vec::new();
        };
        let mut faces = Vec::new();
        for row in r0..=r1 {
            for column in c0..=c1 {
                let Some(shape) = self.tile(column, row).shape() else {
                    continue;
                };
                if shape.blocks(probe) {
                    faces.push(Self::face_at(column, row, shape));
                }
            }
        }
        faces
    }

    fn bounds(&self) -> LevelBounds {
        LevelBounds {
            min_x: 0.0,
            max_x: self.columns as f32 * TILE_SIZE,
            death_y: 0.0,
        }
    }

    fn spawn(&self) -> Vec2 {
        self.spawn
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const LEVEL: &str = "\
........
..S.....
...=..#.
##/\\.###
";

    #[test]
    fn rows_are_stored_bottom_up() {
        let map = TileMap::parse(LEVEL).unwrap();
        assert_eq!(map.columns(), 8);
        assert_eq!(map.rows(), 4);
        assert_eq!(map.tile(0, 0), Tile::Solid);
        assert_eq!(map.tile(2, 0), Tile::SlopeUp);
        assert_eq!(map.tile(3, 0), Tile::SlopeDown);
        assert_eq!(map.tile(4, 0), Tile::Empty);
        assert_eq!(map.tile(3, 1), Tile::Platform);
        assert_eq!(map.tile(99, 0), Tile::Empty);
        assert_eq!(map.spawn(), Vec2::new(32.0, 32.0));
    }

    #[test]
    fn bounds_cover_the_grid_and_die_below_it() {
        let map = TileMap::parse(LEVEL).unwrap();
        let bounds = map.bounds();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 128.0);
        assert_eq!(bounds.death_y, 0.0);
    }

    #[test]
    fn query_orders_faces_bottom_up_then_left_to_right() {
        let map = TileMap::parse(LEVEL).unwrap();
        let region = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(127.0, 31.0));
        let faces = map.query(&region, Probe::Down);
        let origins: Vec<(f32, f32)> = faces.iter().map(|f| (f.min.x, f.min.y)).collect();
        assert_eq!(
            origins,
            vec![
                (0.0, 0.0),
                (16.0, 0.0),
                (32.0, 0.0),
                (48.0, 0.0),
                (80.0, 0.0),
                (96.0, 0.0),
                (112.0, 0.0),
                (48.0, 16.0),
                (96.0, 16.0),
            ]
        );
    }

    #[test]
    fn side_probes_skip_slopes_and_platforms() {
        let map = TileMap::parse(LEVEL).unwrap();
        let region = Aabb::new(Vec2::new(32.0, 0.0), Vec2::new(63.0, 31.0));
        let faces = map.query(&region, Probe::Left);
        assert!(faces.is_empty(), "unexpected faces: {faces:?}");
        let up = map.query(&region, Probe::Up);
        assert_eq!(up.len(), 2);
        assert!(up.iter().all(|f| f.shape != FaceShape::Platform));
    }

    #[test]
    fn regions_outside_the_grid_are_open() {
        let map = TileMap::parse(LEVEL).unwrap();
        let below = Aabb::new(Vec2::new(0.0, -64.0), Vec2::new(64.0, -1.0));
        assert!(map.query(&below, Probe::Down).is_empty());
        let left = Aabb::new(Vec2::new(-40.0, 0.0), Vec2::new(-20.0, 10.0));
        assert!(map.query(&left, Probe::Left).is_empty());
    }

    #[test]
    fn load_errors_carry_positions() {
        assert_eq!(TileMap::parse("\n\n"), Err(LevelError::Empty));
        assert_eq!(
            TileMap::parse("S..\n##\n"),
            Err(LevelError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            TileMap::parse("S.x\n###\n"),
            Err(LevelError::UnknownGlyph {
                row: 0,
                column: 2,
                glyph: 'x'
            })
        );
        assert_eq!(TileMap::parse("...\n###\n"), Err(LevelError::MissingSpawn));
        assert_eq!(
            TileMap::parse("S.S\n###\n"),
            Err(LevelError::DuplicateSpawn { row: 0, column: 2 })
        );
    }
}
