// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Load-time level errors and per-tick terrain faults.

use thiserror::Error;

use crate::face::{Face, Probe};

/// Malformed level data, reported when a level is loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    /// The level text has no rows.
    #[error("level is empty")]
    Empty,
    /// A row differs in width from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        /// Zero-based row index, top row first (as written in the file).
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A glyph with no tile meaning.
    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        /// Zero-based row index, top row first.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// Offending character.
        glyph: char,
    },
    /// No spawn marker in the level.
    #[error("level has no spawn point")]
    MissingSpawn,
    /// More than one spawn marker.
    #[error("second spawn point at row {row}, column {column}")]
    DuplicateSpawn {
        /// Zero-based row index, top row first.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
    /// Spawn point lies outside the level bounds or inside solid terrain.
    #[error("spawn point ({x}, {y}) is not a free position inside the level")]
    BadSpawn {
        /// Spawn x.
        x: f32,
        /// Spawn y.
        y: f32,
    },
    /// Bounds are non-finite or `min_x >= max_x`.
    #[error("invalid level bounds: min_x={min_x}, max_x={max_x}, death_y={death_y}")]
    InvalidBounds {
        /// Left bound.
        min_x: f32,
        /// Right bound.
        max_x: f32,
        /// Death line.
        death_y: f32,
    },
}

/// A terrain query result the simulation could not use.
///
/// Faults never abort a tick. The processor that hit one resolves to "no
/// collision" for that face and the orchestrator logs the fault.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum TerrainFault {
    /// Face with non-finite corners or a non-positive extent.
    #[error("malformed face {face:?} returned for {probe:?} probe")]
    MalformedFace {
        /// The face as returned by the terrain.
        face: Face,
        /// Direction of the query that returned it.
        probe: Probe,
    },
    /// Solid face that swallows the actor's whole probe band, so no push-out
    /// direction is consistent with it.
    #[error("actor embedded in {face:?} during {probe:?} probe")]
    Embedded {
        /// The enclosing face.
        face: Face,
        /// Direction of the query that returned it.
        probe: Probe,
    },
}

impl TerrainFault {
    /// Probe direction the fault was raised under.
    pub const fn probe(&self) -> Probe {
        match self {
            Self::MalformedFace { probe, .. } | Self::Embedded { probe, .. } => *probe,
        }
    }
}
