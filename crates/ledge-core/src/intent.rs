// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::{Deserialize, Serialize};

/// What the controlled actor wants to do this tick.
///
/// Produced once per tick by the input layer and read-only afterwards.
/// `move_direction` is interpreted by sign only, so out-of-range values from
/// scripts behave like `-1`, `0` or `1`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    /// `-1` left, `0` none, `1` right.
    pub move_direction: i8,
    /// Jump button held.
    pub wants_jump: bool,
    /// Run button held.
    pub wants_run: bool,
    /// Crouch button held.
    pub wants_crouch: bool,
}

impl Intent {
    /// No buttons pressed.
    pub const fn idle() -> Self {
        Self {
            move_direction: 0,
            wants_jump: false,
            wants_run: false,
            wants_crouch: false,
        }
    }

    /// Maps raw button state to an intent. Left and right together cancel.
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn from_buttons(
        left: bool,
        right: bool,
        run: bool,
        jump: bool,
        crouch: bool,
    ) -> Self {
        let move_direction = match (left, right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        Self {
            move_direction,
            wants_jump: jump,
            wants_run: run,
            wants_crouch: crouch,
        }
    }

    /// Horizontal direction as `-1.0`, `0.0` or `1.0`.
    pub fn direction(&self) -> f32 {
        f32::from(self.move_direction.signum())
    }
}
