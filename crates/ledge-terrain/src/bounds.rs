// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Level bounds.

use crate::error::LevelError;

/// Horizontal play area and the death line of a level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LevelBounds {
    /// Leftmost x the actor may occupy.
    pub min_x: f32,
    /// Rightmost x the actor's right edge may reach.
    pub max_x: f32,
    /// An actor whose feet drop below this y has fallen out of the level.
    pub death_y: f32,
}

impl LevelBounds {
    /// Width of the playable area.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Load-time validation: finite values and `min_x < max_x`.
    pub fn validate(&self) -> Result<(), LevelError> {
        let finite = self.min_x.is_finite() && self.max_x.is_finite() && self.death_y.is_finite();
        if !finite || self.min_x >= self.max_x {
            return Err(LevelError::InvalidBounds {
                min_x: self.min_x,
                max_x: self.max_x,
                death_y: self.death_y,
            });
        }
        Ok(())
    }
}
