// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Level and config loading at the process edge.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ledge_config::{ConfigService, PHYSICS_KEY};
use ledge_config_fs::FsConfigStore;
use ledge_core::PhysicsConfig;
use ledge_terrain::TileMap;
use tracing::{debug, warn};

/// Where the effective physics config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// An explicit `--config` file.
    File(PathBuf),
    /// The config store entry.
    Store(PathBuf),
    /// Built-in defaults.
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) | Self::Store(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("defaults"),
        }
    }
}

/// Reads and validates an ASCII level.
pub fn read_level(path: &Path) -> Result<TileMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read level {}", path.display()))?;
    TileMap::parse(&text).with_context(|| format!("invalid level {}", path.display()))
}

/// Opens the config store at `dir`, or at the platform config dir.
pub fn config_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    match dir {
        Some(dir) => FsConfigStore::at(dir)
            .with_context(|| format!("cannot open config store {}", dir.display())),
        None => FsConfigStore::new().context("cannot open the platform config store"),
    }
}

/// Resolves the physics config: `file`, else the store, else defaults.
///
/// A missing platform store is not an error; an explicit `dir` that cannot be
/// opened is.
pub fn load_config(
    file: Option<&Path>,
    dir: Option<&Path>,
) -> Result<(PhysicsConfig, ConfigSource)> {
    if let Some(file) = file {
        let text = fs::read_to_string(file)
            .with_context(|| format!("cannot read config {}", file.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("cannot parse config {}", file.display()))?;
        return Ok((config, ConfigSource::File(file.to_path_buf())));
    }

    let store = match config_store(dir) {
        Ok(store) => store,
        Err(err) if dir.is_none() => {
            warn!(error = %err, "config store unavailable; using defaults");
            return Ok((PhysicsConfig::default(), ConfigSource::Defaults));
        }
        Err(err) => return Err(err),
    };
    let path = store.base().join(format!("{PHYSICS_KEY}.json"));
    let service = ConfigService::new(store);
    match service
        .load::<PhysicsConfig>(PHYSICS_KEY)
        .with_context(|| format!("cannot load config {}", path.display()))?
    {
        Some(config) => Ok((config, ConfigSource::Store(path))),
        None => {
            debug!(store = %path.display(), "no stored physics config");
            Ok((PhysicsConfig::default(), ConfigSource::Defaults))
        }
    }
}
