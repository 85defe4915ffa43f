// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Ledge crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`terrain`] - Face-set and tile-map levels for collision scenarios
//! - [`rng`] - Seeded xorshift generator and random intent scripts
//!
//! The crate deliberately does not depend on `ledge-core`, so core tests can
//! use it as a dev-dependency without a second copy of the core in the build.

pub mod config;
pub mod rng;
pub mod terrain;

pub use config::InMemoryConfigStore;
pub use rng::{IntentSample, XorShift64};
pub use terrain::{
    boxed_room, boxed_tiles, flat_floor, floor_with_wall, level_bounds, malformed_floor,
    pit_level, slope_level,
};
