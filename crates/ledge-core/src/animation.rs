// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame selection metadata for the rendering layer.
//!
//! The core does not know sprite sheets, so it tracks an unbounded frame
//! counter per action and lets the renderer fold it into its frame count.

use ledge_geom::Vec2;
use serde::{Deserialize, Serialize};

use crate::actor::{Action, ActorState, Facing};

/// Animation progress for the current action.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationCursor {
    action: Action,
    frames: u32,
    progress: f32,
    ticks: u32,
    last_vx: f32,
}

impl AnimationCursor {
    /// Advances after a committed tick.
    ///
    /// Walking and running advance `speed_scale` frames per tick at
    /// `walk_speed`, proportionally to `|vx|`; every other action advances
    /// one frame per tick. The counter restarts when the action changes or
    /// the actor reverses while moving.
    ///
    /// Only the fractional part of a frame is kept as a float, so the step
    /// never drops below the float resolution however long the walk lasts.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance(&mut self, actor: &ActorState, speed_scale: f32, walk_speed: f32) {
        let vx = actor.velocity.x;
        let reversed = vx * self.last_vx < 0.0;
        if actor.action != self.action || reversed {
            *self = Self {
                action: actor.action,
                frames: 0,
                progress: 0.0,
                ticks: 0,
                last_vx: vx,
            };
            return;
        }
        self.last_vx = vx;
        self.ticks = self.ticks.saturating_add(1);
        if matches!(actor.action, Action::Walking | Action::Running) && walk_speed > 0.0 {
            self.progress += vx.abs() / walk_speed * speed_scale;
            let whole = self.progress.floor();
            self.progress -= whole;
            self.frames = self.frames.wrapping_add(whole as u32);
        }
    }

    /// Action the cursor is tracking.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Unbounded frame counter for the current action.
    pub fn frame(&self) -> u32 {
        match self.action {
            Action::Walking | Action::Running => self.frames,
            _ => self.ticks,
        }
    }
}

/// Render-facing summary of the committed actor.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    /// Bottom-left corner in world space.
    pub position: Vec2,
    /// Current action.
    pub action: Action,
    /// Facing, for sprite mirroring.
    pub facing: Facing,
    /// Unbounded frame counter; see [`ActorView::frame_in`].
    pub frame: u32,
}

impl ActorView {
    /// Folds the counter into an animation with `frame_count` frames, either
    /// looping or holding the last frame.
    pub fn frame_in(&self, frame_count: u32, looping: bool) -> u32 {
        if frame_count == 0 {
            return 0;
        }
        if looping {
            self.frame % frame_count
        } else {
            self.frame.min(frame_count - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(vx: f32) -> ActorState {
        let mut actor = ActorState::spawn(Vec2::ZERO, Vec2::new(16.0, 16.0));
        actor.action = Action::Walking;
        actor.velocity.x = vx;
        actor
    }

    #[test]
    fn walk_frames_scale_with_speed() {
        let mut cursor = AnimationCursor::default();
        cursor.advance(&walking(64.0), 0.25, 64.0);
        assert_eq!(cursor.frame(), 0);
        for _ in 0..8 {
            cursor.advance(&walking(64.0), 0.25, 64.0);
        }
        assert_eq!(cursor.frame(), 2);
    }

    #[test]
    fn reversal_restarts_the_cycle() {
        let mut cursor = AnimationCursor::default();
        for _ in 0..10 {
            cursor.advance(&walking(64.0), 0.5, 64.0);
        }
        assert!(cursor.frame() > 0);
        cursor.advance(&walking(-64.0), 0.5, 64.0);
        assert_eq!(cursor.frame(), 0);
    }

    #[test]
    fn long_walks_keep_advancing() {
        let mut cursor = AnimationCursor::default();
        cursor.advance(&walking(64.0), 0.15, 64.0);
        for _ in 0..1_000_000 {
            cursor.advance(&walking(64.0), 0.15, 64.0);
        }
        let frames = cursor.frame();
        assert!(frames.abs_diff(150_000) <= 1, "frames = {frames}");

        let mut late = AnimationCursor {
            action: Action::Walking,
            frames: u32::MAX,
            progress: 0.9,
            ticks: 0,
            last_vx: 64.0,
        };
        late.advance(&walking(64.0), 0.15, 64.0);
        assert_eq!(late.frame(), 0);
        assert!(late.progress < 1.0);
    }

    #[test]
    fn frame_in_loops_or_holds() {
        let view = ActorView {
            position: Vec2::ZERO,
            action: Action::Idle,
            facing: Facing::Right,
            frame: 7,
        };
        assert_eq!(view.frame_in(3, true), 1);
        assert_eq!(view.frame_in(3, false), 2);
        assert_eq!(view.frame_in(0, true), 0);
    }
}
