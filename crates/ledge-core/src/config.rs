// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Physics tunables.
//!
//! Every number a processor consumes lives here. The defaults reproduce the
//! reference feel at 60 ticks per second; all velocities are px/s and all
//! accelerations px/s² in bottom-up world space.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid tunable, reported at world construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// NaN or infinite value.
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
    /// Zero or negative value where a positive one is required.
    #[error("{field} must be positive")]
    NonPositive {
        /// Offending field.
        field: &'static str,
    },
    /// Value outside its allowed range.
    #[error("{field} = {value} is out of range; expected {expected}")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
        /// Value found.
        value: f32,
        /// Human-readable allowed range.
        expected: &'static str,
    },
    /// `run_speed < walk_speed`.
    #[error("run_speed {run} is below walk_speed {walk}")]
    InvertedSpeeds {
        /// Walk cap.
        walk: f32,
        /// Run cap.
        run: f32,
    },
    /// Dead zone inverted or not inside `[0, viewport_width]`.
    #[error("camera dead zone [{min}, {max}] does not fit a viewport {viewport} wide")]
    DeadZoneOutsideViewport {
        /// Dead-zone start.
        min: f32,
        /// Dead-zone end.
        max: f32,
        /// Viewport width.
        viewport: f32,
    },
}

/// Camera tunables.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Viewport width (px).
    pub viewport_width: f32,
    /// Viewport height (px).
    pub viewport_height: f32,
    /// Viewport-relative x where scrolling back starts.
    pub dead_zone_min: f32,
    /// Viewport-relative x where scrolling forward starts.
    pub dead_zone_max: f32,
    /// Forbid scrolling toward lower x.
    pub ratchet: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport_width: 256.0,
            viewport_height: 224.0,
            dead_zone_min: 96.0,
            dead_zone_max: 128.0,
            ratchet: true,
        }
    }
}

/// Physics tunables consumed by the pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Tick rate; `dt = 1 / fps`.
    pub fps: u32,
    /// Downward acceleration.
    pub gravity: f32,
    /// Jump impulse from a walk or standstill.
    pub jump_velocity: f32,
    /// Jump impulse when `|vx|` exceeds `run_jump_threshold`.
    pub run_jump_velocity: f32,
    /// Speed above which a jump uses `run_jump_velocity`.
    pub run_jump_threshold: f32,
    /// Gravity multiplier while rising with jump released.
    pub jump_cut_multiplier: f32,
    /// Optional cap on fall speed (positive magnitude).
    pub terminal_velocity: Option<f32>,
    /// Horizontal cap while walking.
    pub walk_speed: f32,
    /// Horizontal cap while running.
    pub run_speed: f32,
    /// Acceleration toward the target speed on the ground.
    pub ground_acceleration: f32,
    /// Acceleration toward the target speed in the air.
    pub air_acceleration: f32,
    /// Deceleration while skidding.
    pub skid_deceleration: f32,
    /// Per-tick horizontal decay factor with no horizontal intent, in `[0, 1)`.
    pub friction: f32,
    /// `|vx|` below which friction snaps to zero.
    pub stop_velocity: f32,
    /// Opposing speed above which a direction change starts a skid.
    pub skid_threshold: f32,
    /// Speed below which a skid ends.
    pub skid_clear_velocity: f32,
    /// `|vx|` above which the actor counts as walking.
    pub walk_threshold: f32,
    /// `|vx|` above which the actor counts as running.
    pub run_threshold: f32,
    /// Upward velocity applied when the actor dies.
    pub death_leap_velocity: f32,
    /// Length of the death arc in seconds, rounded to whole ticks.
    pub death_duration: f32,
    /// Vertical velocity after bumping a ceiling; never positive.
    pub ceiling_bounce_velocity: f32,
    /// Band above the feet ignored by wall probes.
    pub wall_dead_zone: f32,
    /// Band below the head ignored by wall probes.
    pub wall_top_offset: f32,
    /// Horizontal inset of the head probe.
    pub ceiling_inset: f32,
    /// Gap above a surface still counted as ground contact.
    pub ground_snap_tolerance: f32,
    /// Depth below a surface that still snaps up onto it.
    pub ground_max_penetration: f32,
    /// Inset of the right foot sample from the box edge.
    pub ground_sample_inset: f32,
    /// Actor box width.
    pub actor_width: f32,
    /// Actor box height.
    pub actor_height: f32,
    /// Camera tunables.
    pub camera: CameraConfig,
    /// Walk/run frame advance per tick at walk speed.
    pub animation_speed_scale: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            gravity: 400.0,
            jump_velocity: 226.0,
            run_jump_velocity: 277.0,
            run_jump_threshold: 100.0,
            jump_cut_multiplier: 3.0,
            terminal_velocity: None,
            walk_speed: 64.0,
            run_speed: 128.0,
            ground_acceleration: 600.0,
            air_acceleration: 300.0,
            skid_deceleration: 900.0,
            friction: 0.85,
            stop_velocity: 1.0,
            skid_threshold: 80.0,
            skid_clear_velocity: 10.0,
            walk_threshold: 1.0,
            run_threshold: 102.4,
            death_leap_velocity: 150.0,
            death_duration: 1.5,
            ceiling_bounce_velocity: -20.0,
            wall_dead_zone: 2.0,
            wall_top_offset: 2.0,
            ceiling_inset: 1.0,
            ground_snap_tolerance: 2.0,
            ground_max_penetration: 8.0,
            ground_sample_inset: 1.0,
            actor_width: 16.0,
            actor_height: 16.0,
            camera: CameraConfig::default(),
            animation_speed_scale: 0.15,
        }
    }
}

impl PhysicsConfig {
    /// Fixed tick length in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.fps.max(1) as f32
    }

    /// Death arc length in whole ticks.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn death_ticks(&self) -> u32 {
        (self.death_duration.max(0.0) * self.fps as f32).round() as u32
    }

    /// Checks every tunable; the first problem found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::NonPositive { field: "fps" });
        }
        let c = &self.camera;
        let finite = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("run_jump_velocity", self.run_jump_velocity),
            ("run_jump_threshold", self.run_jump_threshold),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("terminal_velocity", self.terminal_velocity.unwrap_or(1.0)),
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("ground_acceleration", self.ground_acceleration),
            ("air_acceleration", self.air_acceleration),
            ("skid_deceleration", self.skid_deceleration),
            ("friction", self.friction),
            ("stop_velocity", self.stop_velocity),
            ("skid_threshold", self.skid_threshold),
            ("skid_clear_velocity", self.skid_clear_velocity),
            ("walk_threshold", self.walk_threshold),
            ("run_threshold", self.run_threshold),
            ("death_leap_velocity", self.death_leap_velocity),
            ("death_duration", self.death_duration),
            ("ceiling_bounce_velocity", self.ceiling_bounce_velocity),
            ("wall_dead_zone", self.wall_dead_zone),
            ("wall_top_offset", self.wall_top_offset),
            ("ceiling_inset", self.ceiling_inset),
            ("ground_snap_tolerance", self.ground_snap_tolerance),
            ("ground_max_penetration", self.ground_max_penetration),
            ("ground_sample_inset", self.ground_sample_inset),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("camera.viewport_width", c.viewport_width),
            ("camera.viewport_height", c.viewport_height),
            ("camera.dead_zone_min", c.dead_zone_min),
            ("camera.dead_zone_max", c.dead_zone_max),
            ("animation_speed_scale", self.animation_speed_scale),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        let positive = [
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("run_jump_velocity", self.run_jump_velocity),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("terminal_velocity", self.terminal_velocity.unwrap_or(1.0)),
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("ground_acceleration", self.ground_acceleration),
            ("air_acceleration", self.air_acceleration),
            ("skid_deceleration", self.skid_deceleration),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("camera.viewport_width", c.viewport_width),
            ("camera.viewport_height", c.viewport_height),
        ];
        if let Some(&(field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive { field });
        }

        let non_negative = [
            ("run_jump_threshold", self.run_jump_threshold),
            ("stop_velocity", self.stop_velocity),
            ("skid_threshold", self.skid_threshold),
            ("skid_clear_velocity", self.skid_clear_velocity),
            ("walk_threshold", self.walk_threshold),
            ("run_threshold", self.run_threshold),
            ("death_leap_velocity", self.death_leap_velocity),
            ("death_duration", self.death_duration),
            ("wall_dead_zone", self.wall_dead_zone),
            ("wall_top_offset", self.wall_top_offset),
            ("ceiling_inset", self.ceiling_inset),
            ("ground_snap_tolerance", self.ground_snap_tolerance),
            ("ground_max_penetration", self.ground_max_penetration),
            ("ground_sample_inset", self.ground_sample_inset),
            ("animation_speed_scale", self.animation_speed_scale),
        ];
        if let Some(&(field, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(ConfigError::OutOfRange {
                field,
                value,
                expected: ">= 0",
            });
        }

        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: self.friction,
                expected: "[0, 1)",
            });
        }
        if self.run_speed < self.walk_speed {
            return Err(ConfigError::InvertedSpeeds {
                walk: self.walk_speed,
                run: self.run_speed,
            });
        }
        if self.run_threshold < self.walk_threshold {
            return Err(ConfigError::OutOfRange {
                field: "run_threshold",
                value: self.run_threshold,
                expected: ">= walk_threshold",
            });
        }
        if self.wall_dead_zone + self.wall_top_offset >= self.actor_height {
            return Err(ConfigError::OutOfRange {
                field: "wall_dead_zone",
                value: self.wall_dead_zone,
                expected: "wall_dead_zone + wall_top_offset < actor_height",
            });
        }
        if self.ceiling_inset * 2.0 >= self.actor_width {
            return Err(ConfigError::OutOfRange {
                field: "ceiling_inset",
                value: self.ceiling_inset,
                expected: "< actor_width / 2",
            });
        }
        if self.ground_sample_inset >= self.actor_width {
            return Err(ConfigError::OutOfRange {
                field: "ground_sample_inset",
                value: self.ground_sample_inset,
                expected: "< actor_width",
            });
        }
        if c.dead_zone_min < 0.0
            || c.dead_zone_min > c.dead_zone_max
            || c.dead_zone_max > c.viewport_width
        {
            return Err(ConfigError::DeadZoneOutsideViewport {
                min: c.dead_zone_min,
                max: c.dead_zone_max,
                viewport: c.viewport_width,
            });
        }
        Ok(())
    }
}
