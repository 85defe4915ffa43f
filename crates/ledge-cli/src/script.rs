// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Intent scripts for headless replay.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ledge_core::Intent;
use serde::{Deserialize, Serialize};

const fn one_tick() -> u64 {
    1
}

/// One intent held for a run of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    /// Intent fed on every tick of the step.
    #[serde(default)]
    pub intent: Intent,
    /// How many ticks to hold it.
    #[serde(default = "one_tick")]
    pub ticks: u64,
}

/// A replayable list of steps, parsed from a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    /// Parses a script from JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("script must be a JSON array of { intent, ticks } steps")
    }

    /// Reads and parses a script file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid script {}", path.display()))
    }

    /// Parsed steps in order.
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Ticks the whole script runs for.
    pub fn total_ticks(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |total, step| total.saturating_add(step.ticks))
    }

    /// One intent per tick.
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.steps
            .iter()
            .flat_map(|step| (0..step.ticks).map(move |_| step.intent))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn steps_expand_to_one_intent_per_tick() {
        let script = Script::parse(
            r#"[
                { "intent": { "move_direction": 1, "wants_run": true }, "ticks": 3 },
                { "intent": { "wants_jump": true } },
                { "ticks": 2 }
            ]"#,
        )
        .unwrap();
        assert_eq!(script.steps().len(), 3);
        assert_eq!(script.total_ticks(), 6);

        let intents: Vec<Intent> = script.intents().collect();
        assert_eq!(intents.len(), 6);
        assert_eq!(intents[0].move_direction, 1);
        assert!(intents[2].wants_run);
        assert!(intents[3].wants_jump);
        assert_eq!(intents[4], Intent::idle());
        assert_eq!(intents[5], Intent::idle());
    }

    #[test]
    fn zero_tick_steps_are_skipped() {
        let script =
            Script::parse(r#"[{ "intent": { "move_direction": -1 }, "ticks": 0 }]"#).unwrap();
        assert_eq!(script.total_ticks(), 0);
        assert_eq!(script.intents().count(), 0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Script::parse(r#"[{ "intnet": {} }]"#).is_err());
        assert!(Script::parse(r#"{ "steps": [] }"#).is_err());
    }
}
