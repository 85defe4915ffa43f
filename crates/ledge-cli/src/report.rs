// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command output, as a table or as JSON.

use std::path::Path;

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use ledge_core::{Action, Facing, Life, PhysicsConfig, World};
use ledge_terrain::{TerrainQuery, TileMap};
use serde::Serialize;
use serde_json::Value;

use crate::load::ConfigSource;

/// Something a command prints.
pub trait Render: Serialize {
    /// Human-readable form.
    fn table(&self) -> Table;
}

fn field_table<I>(rows: I) -> Table
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["field", "value"]);
    for (field, value) in rows {
        table.add_row(vec![field, value]);
    }
    table
}

fn pair(x: f32, y: f32) -> String {
    format!("({x}, {y})")
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Ticks committed.
    pub ticks: u64,
    /// Final action.
    pub action: Action,
    /// Final life phase.
    pub life: Life,
    /// Final facing.
    pub facing: Facing,
    /// Whether the actor ended on the ground.
    pub grounded: bool,
    /// Final feet position.
    pub position: [f32; 2],
    /// Final velocity.
    pub velocity: [f32; 2],
    /// Final camera left edge.
    pub camera_x: f32,
    /// Final animation frame.
    pub frame: u32,
    /// Terrain faults seen over the whole run.
    pub faults: usize,
    /// Hex BLAKE3 digest of the final committed state.
    pub digest: String,
}

impl ReplayReport {
    /// Summarises `world` after a run that hit `faults` terrain faults.
    pub fn new<T: TerrainQuery>(world: &World<T>, faults: usize) -> Self {
        let actor = world.actor();
        Self {
            ticks: world.tick().index(),
            action: actor.action,
            life: actor.life,
            facing: actor.facing,
            grounded: actor.grounded,
            position: actor.position.to_array(),
            velocity: actor.velocity.to_array(),
            camera_x: world.camera().position.x,
            frame: world.view().frame,
            faults,
            digest: hex::encode(world.digest()),
        }
    }
}

impl Render for ReplayReport {
    fn table(&self) -> Table {
        field_table([
            ("ticks".to_owned(), self.ticks.to_string()),
            ("action".to_owned(), self.action.to_string()),
            ("life".to_owned(), format!("{:?}", self.life)),
            ("facing".to_owned(), format!("{:?}", self.facing)),
            ("grounded".to_owned(), self.grounded.to_string()),
            ("position".to_owned(), pair(self.position[0], self.position[1])),
            ("velocity".to_owned(), pair(self.velocity[0], self.velocity[1])),
            ("camera_x".to_owned(), self.camera_x.to_string()),
            ("frame".to_owned(), self.frame.to_string()),
            ("faults".to_owned(), self.faults.to_string()),
            ("digest".to_owned(), self.digest.clone()),
        ])
    }
}

/// Level dimensions and metadata.
#[derive(Debug, Clone, Serialize)]
pub struct LevelReport {
    /// Source file.
    pub level: String,
    /// Grid width in tiles.
    pub columns: usize,
    /// Grid height in tiles.
    pub rows: usize,
    /// Left level edge.
    pub min_x: f32,
    /// Right level edge.
    pub max_x: f32,
    /// Death line.
    pub death_y: f32,
    /// Spawn point.
    pub spawn: [f32; 2],
}

impl LevelReport {
    /// Describes `map`, loaded from `path`.
    pub fn new(path: &Path, map: &TileMap) -> Self {
        let bounds = map.bounds();
        Self {
            level: path.display().to_string(),
            columns: map.columns(),
            rows: map.rows(),
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            death_y: bounds.death_y,
            spawn: map.spawn().to_array(),
        }
    }
}

impl Render for LevelReport {
    fn table(&self) -> Table {
        field_table([
            ("level".to_owned(), self.level.clone()),
            ("columns".to_owned(), self.columns.to_string()),
            ("rows".to_owned(), self.rows.to_string()),
            ("min_x".to_owned(), self.min_x.to_string()),
            ("max_x".to_owned(), self.max_x.to_string()),
            ("death_y".to_owned(), self.death_y.to_string()),
            ("spawn".to_owned(), pair(self.spawn[0], self.spawn[1])),
        ])
    }
}

/// Effective tunables and where they came from.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    /// File, store entry or `defaults`.
    pub source: String,
    /// Tick length in seconds.
    pub dt: f32,
    /// Death arc in whole ticks.
    pub death_ticks: u32,
    /// The tunables.
    pub physics: PhysicsConfig,
}

impl ConfigReport {
    /// Describes a validated `physics` config.
    pub fn new(physics: &PhysicsConfig, source: &ConfigSource) -> Self {
        Self {
            source: source.to_string(),
            dt: physics.dt(),
            death_ticks: physics.death_ticks(),
            physics: *physics,
        }
    }
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&name, inner, rows);
            }
        }
        other => rows.push((prefix.to_owned(), other.to_string())),
    }
}

impl Render for ConfigReport {
    fn table(&self) -> Table {
        let mut rows = vec![
            ("source".to_owned(), self.source.clone()),
            ("dt".to_owned(), self.dt.to_string()),
            ("death_ticks".to_owned(), self.death_ticks.to_string()),
        ];
        if let Ok(physics) = serde_json::to_value(self.physics) {
            flatten("", &physics, &mut rows);
        }
        field_table(rows)
    }
}
