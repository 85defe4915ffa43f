// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Actor physical state.

use ledge_geom::Vec2;
use serde::{Deserialize, Serialize};

/// The single canonical classification of what the actor is doing.
///
/// Derived each tick by the action stage from the other actor fields; no
/// other stage writes it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Standing still on the ground.
    #[default]
    Idle,
    /// Moving on the ground below run speed.
    Walking,
    /// Moving on the ground above the run threshold.
    Running,
    /// Airborne, whether jumping or falling.
    Jumping,
    /// Braking hard against the current direction of travel.
    Skidding,
    /// Playing the death arc.
    Dying,
    /// Frozen after the death arc, waiting for respawn.
    Dead,
}

impl Action {
    /// Every action in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Idle,
        Self::Walking,
        Self::Running,
        Self::Jumping,
        Self::Skidding,
        Self::Dying,
        Self::Dead,
    ];

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walking",
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::Skidding => "skidding",
            Self::Dying => "dying",
            Self::Dead => "dead",
        }
    }

    pub(crate) const fn code(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Walking => 1,
            Self::Running => 2,
            Self::Jumping => 3,
            Self::Skidding => 4,
            Self::Dying => 5,
            Self::Dead => 6,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal facing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Looking toward negative x.
    Left,
    /// Looking toward positive x.
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` or `1.0`.
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Life phase. Anything other than `Alive` suspends input-driven stages.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Life {
    /// Normal play.
    #[default]
    Alive,
    /// Death arc in progress.
    Dying,
    /// Death arc finished; respawn pending.
    Dead,
}

/// Input-derived flags the intent stage writes and later stages read.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionFlags {
    /// Horizontal velocity the actor is accelerating toward (px/s).
    pub target_vx: f32,
    /// A jump was pressed this tick while grounded (rising edge).
    pub jump_requested: bool,
    /// Jump is held; a new jump needs a release first.
    pub jump_held: bool,
    /// Airborne because of a player jump (enables the jump cut).
    pub is_jumping: bool,
    /// Braking against the direction of travel.
    pub skidding: bool,
    /// Ducking on the ground.
    pub crouching: bool,
}

/// Physical state of the controlled actor.
///
/// `position` is the bottom-left corner of the actor box in bottom-up world
/// space. The state is a plain value: the world hands a copy to each tick and
/// commits the copy back when the tick completes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    /// Bottom-left corner (px).
    pub position: Vec2,
    /// Velocity (px/s, up is positive).
    pub velocity: Vec2,
    /// Box width and height (px).
    pub extent: Vec2,
    /// Derived classification.
    pub action: Action,
    /// Horizontal facing.
    pub facing: Facing,
    /// Resting on terrain.
    pub grounded: bool,
    /// Input-derived flags.
    pub motion: MotionFlags,
    /// Life phase.
    pub life: Life,
    /// Ticks spent in the current death phase.
    pub death_ticks: u32,
}

impl ActorState {
    /// Canonical spawn state: idle, grounded, facing right, at rest.
    pub fn spawn(position: Vec2, extent: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            extent,
            action: Action::Idle,
            facing: Facing::Right,
            grounded: true,
            motion: MotionFlags::default(),
            life: Life::Alive,
            death_ticks: 0,
        }
    }

    /// `true` while `life` is [`Life::Alive`].
    pub fn is_alive(&self) -> bool {
        self.life == Life::Alive
    }

    /// Box width.
    pub fn width(&self) -> f32 {
        self.extent.x
    }

    /// Box height.
    pub fn height(&self) -> f32 {
        self.extent.y
    }

    /// Horizontal centre of the box.
    pub fn centre_x(&self) -> f32 {
        self.position.x + self.extent.x * 0.5
    }
}
