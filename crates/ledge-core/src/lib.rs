// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ledge-core: a deterministic fixed-timestep platformer physics pipeline.
//!
//! One tick is one pass of a fixed, ordered [`Pipeline`] of thirteen
//! [`Processor`]s over a per-tick [`Context`]. The [`World`] owns the
//! canonical actor and camera state between ticks, copies it into a fresh
//! context, runs the pipeline, and commits the result only once every stage
//! has finished.
//!
//! Determinism contract: identical configuration, terrain and intent sequence
//! produce bit-identical state sequences. Processors read no clocks, hold no
//! mutable state, and never log.
#![forbid(unsafe_code)]

mod actor;
mod animation;
mod camera;
mod config;
mod context;
mod digest;
mod footprint;
mod footprint_guard;
mod intent;
mod pipeline;
mod processor;
/// The thirteen pipeline stages.
pub mod processors;
mod snapshot;
mod world;

pub use actor::{Action, ActorState, Facing, Life, MotionFlags};
pub use animation::{ActorView, AnimationCursor};
pub use camera::CameraState;
pub use config::{CameraConfig, ConfigError, PhysicsConfig};
pub use context::Context;
pub use digest::{StateDigest, STATE_DIGEST_DOMAIN};
pub use footprint::Footprint;
pub use footprint_guard::{guard_process, FootprintViolation};
pub use intent::Intent;
pub use pipeline::{Pipeline, Stage};
pub use processor::Processor;
pub use snapshot::WorldSnapshot;
pub use world::{World, WorldError};
