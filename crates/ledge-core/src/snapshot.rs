// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use ledge_geom::Tick;
use serde::{Deserialize, Serialize};

use crate::actor::ActorState;
use crate::animation::AnimationCursor;
use crate::camera::CameraState;

/// Committed world state at a tick boundary, for rollback and replay.
///
/// Restoring a snapshot into a world built with the same configuration and
/// terrain, then feeding the same intents, reproduces the same states.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Number of ticks committed.
    pub tick: Tick,
    /// Actor state.
    pub actor: ActorState,
    /// Camera state.
    pub camera: CameraState,
    /// Animation progress.
    pub animation: AnimationCursor,
}
