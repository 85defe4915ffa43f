// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use ledge_config::{ConfigError, ConfigService, ConfigStore, PHYSICS_KEY};
use ledge_config_fs::FsConfigStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Physics {
    gravity: f32,
}

#[test]
fn writes_json_files_named_after_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path().join("nested")).unwrap();
    store.save_raw(PHYSICS_KEY, b"{\"gravity\": 500.0}").unwrap();

    let on_disk = std::fs::read(dir.path().join("nested").join("physics.json")).unwrap();
    assert_eq!(on_disk, b"{\"gravity\": 500.0}");
    assert_eq!(store.load_raw(PHYSICS_KEY).unwrap(), on_disk);
}

#[test]
fn missing_files_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    assert!(matches!(store.load_raw("absent"), Err(ConfigError::NotFound)));

    let service = ConfigService::new(store);
    let loaded: Option<Physics> = service.load("absent").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn service_round_trips_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let service = ConfigService::new(FsConfigStore::at(dir.path()).unwrap());
    service.save(PHYSICS_KEY, &Physics { gravity: 512.0 }).unwrap();
    let loaded: Physics = service.load_or_default(PHYSICS_KEY).unwrap();
    assert_eq!(loaded, Physics { gravity: 512.0 });
}

#[test]
fn path_traversal_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path()).unwrap();
    for key in ["../escape", "", ".hidden", "a/b"] {
        assert!(
            matches!(store.save_raw(key, b"{}"), Err(ConfigError::Other(_))),
            "key {key:?} accepted"
        );
    }
}
