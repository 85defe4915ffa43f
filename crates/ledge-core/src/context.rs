// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The per-tick bundle threaded through the pipeline.

use ledge_geom::{Aabb, Vec2};
use ledge_terrain::{Face, Probe, TerrainFault, TerrainQuery};

use crate::actor::ActorState;
use crate::camera::CameraState;
use crate::intent::Intent;

/// Everything one tick operates on.
///
/// A context is built fresh for each tick from the committed state and moved
/// through every enabled processor in order. Each processor takes it by value
/// and returns it, so no stage can hold on to a previous stage's view.
pub struct Context<'t> {
    /// Working copy of the actor.
    pub actor: ActorState,
    /// Working copy of the camera.
    pub camera: CameraState,
    /// This tick's intent.
    pub intent: Intent,
    /// Read-only level geometry.
    pub terrain: &'t dyn TerrainQuery,
    /// Fixed tick length in seconds.
    pub dt: f32,
    /// Unusable terrain results hit during this tick.
    pub faults: Vec<TerrainFault>,
}

impl<'t> Context<'t> {
    /// Builds a context with no faults.
    pub fn new(
        actor: ActorState,
        camera: CameraState,
        intent: Intent,
        terrain: &'t dyn TerrainQuery,
        dt: f32,
    ) -> Self {
        Self {
            actor,
            camera,
            intent,
            terrain,
            dt,
            faults: Vec::new(),
        }
    }

    /// Queries `probe` faces inside the rectangle `[min, max]`.
    ///
    /// Malformed faces are recorded as faults and dropped; an invalid region
    /// yields no faces.
    pub fn query_faces(&mut self, min: Vec2, max: Vec2, probe: Probe) -> Vec<Face> {
        let Some(region) = Aabb::try_new(min, max) else {
            return Vec::new();
        };
        let mut faces = self.terrain.query(&region, probe);
        faces.retain(|face| {
            let usable = face.is_well_formed();
            if !usable {
                self.faults.push(TerrainFault::MalformedFace { face: *face, probe });
            }
            usable && face.shape.blocks(probe)
        });
        faces
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("actor", &self.actor)
            .field("camera", &self.camera)
            .field("intent", &self.intent)
            .field("dt", &self.dt)
            .field("faults", &self.faults)
            .finish_non_exhaustive()
    }
}
