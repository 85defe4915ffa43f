// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Horizontal scrolling camera.

use ledge_geom::{Span, Vec2};
use ledge_terrain::LevelBounds;
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;

/// Camera state committed alongside the actor each tick.
///
/// `position` is the bottom-left corner of the viewport in world space. Only
/// `x` scrolls. `dead_zone` is a range of viewport-relative x offsets the
/// followed point may sit in without scrolling; `limits` is the world-space
/// range `position.x` may occupy.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Viewport origin.
    pub position: Vec2,
    /// Viewport-relative follow window.
    pub dead_zone: Span,
    /// Allowed range of `position.x`.
    pub limits: Span,
    /// When set the camera never scrolls back toward lower x.
    pub ratchet: bool,
}

impl CameraState {
    /// World-space range the viewport origin may occupy in a level.
    ///
    /// Levels narrower than the viewport pin the camera to `min_x`.
    pub fn limits_for(config: &CameraConfig, bounds: &LevelBounds) -> Span {
        Span::new(bounds.min_x, bounds.max_x - config.viewport_width)
    }

    /// A camera centred (dead-zone midpoint) on `focus_x`, clamped to limits.
    ///
    /// Used at world construction and respawn, where the ratchet is ignored.
    pub fn framing(config: &CameraConfig, bounds: &LevelBounds, focus_x: f32) -> Self {
        let dead_zone = Span::new(config.dead_zone_min, config.dead_zone_max);
        let limits = Self::limits_for(config, bounds);
        let mid = (dead_zone.min + dead_zone.max) * 0.5;
        Self {
            position: Vec2::new(limits.clamp(focus_x - mid), 0.0),
            dead_zone,
            limits,
            ratchet: config.ratchet,
        }
    }

    /// Scrolls so that `focus_x` lies inside the dead zone, honouring the
    /// ratchet and the limits.
    pub fn follow(&mut self, focus_x: f32) {
        let current = self.position.x;
        let offset = focus_x - current;
        let mut next = current;
        if offset > self.dead_zone.max {
            next = focus_x - self.dead_zone.max;
        } else if offset < self.dead_zone.min {
            next = focus_x - self.dead_zone.min;
        }
        if self.ratchet {
            next = next.max(current);
        }
        self.position.x = self.limits.clamp(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> LevelBounds {
        LevelBounds {
            min_x: 0.0,
            max_x: 1024.0,
            death_y: 0.0,
        }
    }

    #[test]
    fn framing_clamps_to_the_left_edge() {
        let cam = CameraState::framing(&CameraConfig::default(), &bounds(), 40.0);
        assert_eq!(cam.position.x, 0.0);
        assert_eq!(cam.limits, Span::new(0.0, 768.0));
    }

    #[test]
    fn ratchet_blocks_backward_scroll() {
        let mut cam = CameraState::framing(&CameraConfig::default(), &bounds(), 40.0);
        cam.follow(300.0);
        assert_eq!(cam.position.x, 300.0 - 128.0);
        cam.follow(100.0);
        assert_eq!(cam.position.x, 172.0);
    }

    #[test]
    fn without_ratchet_the_camera_scrolls_back() {
        let config = CameraConfig {
            ratchet: false,
            ..CameraConfig::default()
        };
        let mut cam = CameraState::framing(&config, &bounds(), 40.0);
        cam.follow(300.0);
        cam.follow(200.0);
        assert_eq!(cam.position.x, 200.0 - 96.0);
    }

    #[test]
    fn narrow_levels_pin_the_camera() {
        let narrow = LevelBounds {
            min_x: 0.0,
            max_x: 128.0,
            death_y: 0.0,
        };
        let mut cam = CameraState::framing(&CameraConfig::default(), &narrow, 100.0);
        cam.follow(120.0);
        assert_eq!(cam.position.x, 0.0);
    }
}
