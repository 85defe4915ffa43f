// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The fixed, ordered processor sequence.

use ledge_terrain::Probe;

use crate::config::PhysicsConfig;
use crate::context::Context;
use crate::footprint_guard::guard_process;
use crate::processor::Processor;
use crate::processors::{
    ActionProcessor, BoundaryProcessor, CeilingCollisionProcessor, DeathPhysicsProcessor,
    DeathTriggerProcessor, GravityProcessor, GroundCollisionProcessor, IntentProcessor,
    LeftWallCollisionProcessor, MovementProcessor, ResetProcessor, RightWallCollisionProcessor,
    VelocityProcessor,
};

/// The thirteen pipeline slots, in execution order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Intent to target velocity and jump edge.
    Intent,
    /// Death arc and freeze.
    DeathPhysics,
    /// Friction and horizontal acceleration.
    Movement,
    /// Gravity and jump impulse.
    Gravity,
    /// Euler position integration.
    Velocity,
    /// Falling out of the level.
    DeathTrigger,
    /// Respawn after the death arc.
    Reset,
    /// Level edges, camera ratchet, camera follow.
    Boundary,
    /// Walls on the left.
    LeftWall,
    /// Walls on the right.
    RightWall,
    /// Ceilings.
    Ceiling,
    /// Ground and slopes.
    Ground,
    /// Final action classification.
    Action,
}

impl Stage {
    /// Every stage in execution order.
    pub const ALL: [Self; 13] = [
        Self::Intent,
        Self::DeathPhysics,
        Self::Movement,
        Self::Gravity,
        Self::Velocity,
        Self::DeathTrigger,
        Self::Reset,
        Self::Boundary,
        Self::LeftWall,
        Self::RightWall,
        Self::Ceiling,
        Self::Ground,
        Self::Action,
    ];

    /// Collision stage that issues queries in direction `probe`.
    pub const fn for_probe(probe: Probe) -> Self {
        match probe {
            Probe::Left => Self::LeftWall,
            Probe::Right => Self::RightWall,
            Probe::Up => Self::Ceiling,
            Probe::Down => Self::Ground,
        }
    }

    /// Stable processor name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intent => "intent",
            Self::DeathPhysics => "death_physics",
            Self::Movement => "movement",
            Self::Gravity => "gravity",
            Self::Velocity => "velocity",
            Self::DeathTrigger => "death_trigger",
            Self::Reset => "reset",
            Self::Boundary => "boundary",
            Self::LeftWall => "left_wall",
            Self::RightWall => "right_wall",
            Self::Ceiling => "ceiling",
            Self::Ground => "ground",
            Self::Action => "action",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
struct Entry {
    processor: Box<dyn Processor>,
    enabled: bool,
}

/// Ordered processors with a per-entry enabled flag.
///
/// The set and order are fixed at construction. Disabled entries are
/// skipped, which makes them pure pass-throughs.
#[derive(Debug)]
pub struct Pipeline {
    entries: Vec<Entry>,
}

impl Pipeline {
    /// Builds all thirteen processors from `config`, all enabled.
    pub fn new(config: &PhysicsConfig) -> Self {
        let processors: [Box<dyn Processor>; 13] = [
            Box::new(IntentProcessor::new(config)),
            Box::new(DeathPhysicsProcessor::new(config)),
            Box::new(MovementProcessor::new(config)),
            Box::new(GravityProcessor::new(config)),
            Box::new(VelocityProcessor),
            Box::new(DeathTriggerProcessor::new(config)),
            Box::new(ResetProcessor::new(config)),
            Box::new(BoundaryProcessor::new(config)),
            Box::new(LeftWallCollisionProcessor::new(config)),
            Box::new(RightWallCollisionProcessor::new(config)),
            Box::new(CeilingCollisionProcessor::new(config)),
            Box::new(GroundCollisionProcessor::new(config)),
            Box::new(ActionProcessor::new(config)),
        ];
        let entries = processors
            .into_iter()
            .map(|processor| Entry {
                processor,
                enabled: true,
            })
            .collect();
        Self { entries }
    }

    /// Runs every enabled processor in order.
    pub fn process<'t>(&self, mut ctx: Context<'t>) -> Context<'t> {
        for entry in self.entries.iter().filter(|e| e.enabled) {
            ctx = guard_process(entry.processor.as_ref(), ctx);
        }
        ctx
    }

    /// Enables or disables one stage.
    pub fn set_enabled(&mut self, stage: Stage, enabled: bool) {
        if let Some(entry) = self.entry_mut(stage) {
            entry.enabled = enabled;
        }
    }

    /// Enables or disables every stage.
    pub fn set_all_enabled(&mut self, enabled: bool) {
        for entry in &mut self.entries {
            entry.enabled = enabled;
        }
    }

    /// Whether `stage` currently runs.
    pub fn is_enabled(&self, stage: Stage) -> bool {
        self.entries
            .iter()
            .any(|e| e.enabled && e.processor.stage() == stage)
    }

    /// Stages in execution order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.entries.iter().map(|e| e.processor.stage())
    }

    /// The processor filling `stage`.
    pub fn processor(&self, stage: Stage) -> Option<&dyn Processor> {
        self.entries
            .iter()
            .find(|e| e.processor.stage() == stage)
            .map(|e| e.processor.as_ref())
    }

    fn entry_mut(&mut self, stage: Stage) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.processor.stage() == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_declared_order() {
        let pipeline = Pipeline::new(&PhysicsConfig::default());
        assert_eq!(pipeline.stages().collect::<Vec<_>>(), Stage::ALL.to_vec());
        for stage in Stage::ALL {
            let processor = pipeline.processor(stage);
            assert_eq!(processor.map(Processor::stage), Some(stage));
            assert_eq!(processor.map(Processor::name), Some(stage.name()));
        }
    }

    #[test]
    fn toggling_is_per_stage() {
        let mut pipeline = Pipeline::new(&PhysicsConfig::default());
        pipeline.set_enabled(Stage::Gravity, false);
        assert!(!pipeline.is_enabled(Stage::Gravity));
        assert!(pipeline.is_enabled(Stage::Movement));
        pipeline.set_all_enabled(false);
        assert!(Stage::ALL.iter().all(|s| !pipeline.is_enabled(*s)));
    }
}
