//! Kinematic primitives shared by every movable entity
//!
//! The playfield is a torus: leaving one edge re-enters at the opposite one.
//! Wrapping only happens once an entity is `margin` past the edge, so it is
//! fully off-screen before it jumps and fully on-screen after.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Playfield coordinates
pub type Position = Vec2;

/// Per-frame displacement (`x` is dx, `y` is dy)
pub type Velocity = Vec2;

/// Wrap-around bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }
}

impl From<&SimConfig> for Playfield {
    fn from(config: &SimConfig) -> Self {
        Self::new(config.width, config.height, config.wrap_margin)
    }
}

#[inline]
fn wrap_axis(coord: &mut f32, extent: f32, margin: f32) {
    if *coord > extent + margin {
        *coord = 0.0;
    }
    if *coord < -margin {
        *coord = extent;
    }
}

/// Teleport a position that has drifted past the margin to the opposite edge
pub fn wrap(pos: &mut Position, field: &Playfield) {
    wrap_axis(&mut pos.x, field.width, field.margin);
    wrap_axis(&mut pos.y, field.height, field.margin);
}

/// Wrap, then move by one frame of velocity
///
/// Moving after the wrap keeps a wrapped entity from stalling a frame at the edge.
pub fn advance(pos: &mut Position, vel: Velocity, field: &Playfield) {
    wrap(pos, field);
    *pos += vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0, 33.0)
    }

    #[test]
    fn test_wrap_past_right_edge() {
        let mut pos = Vec2::new(800.0 + 33.0 + 1.0, 100.0);
        wrap(&mut pos, &field());
        assert_eq!(pos, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_wrap_past_left_edge() {
        let mut pos = Vec2::new(-33.0 - 1.0, 100.0);
        wrap(&mut pos, &field());
        assert_eq!(pos, Vec2::new(800.0, 100.0));
    }

    #[test]
    fn test_wrap_vertical() {
        let mut pos = Vec2::new(10.0, 640.0);
        wrap(&mut pos, &field());
        assert_eq!(pos.y, 0.0);

        let mut pos = Vec2::new(10.0, -40.0);
        wrap(&mut pos, &field());
        assert_eq!(pos.y, 600.0);
    }

    #[test]
    fn test_inside_margin_does_not_wrap() {
        // Partially off-screen but not yet past the margin
        let mut pos = Vec2::new(820.0, -20.0);
        wrap(&mut pos, &field());
        assert_eq!(pos, Vec2::new(820.0, -20.0));
    }

    #[test]
    fn test_advance_wraps_then_moves() {
        let mut pos = Vec2::new(840.0, 300.0);
        advance(&mut pos, Vec2::new(2.0, -1.0), &field());
        assert_eq!(pos, Vec2::new(2.0, 299.0));
    }

    #[test]
    fn test_advance_without_wrap() {
        let mut pos = Vec2::new(100.0, 100.0);
        advance(&mut pos, Vec2::new(1.5, 0.5), &field());
        assert_eq!(pos, Vec2::new(101.5, 100.5));
    }

    proptest! {
        #[test]
        fn wrap_is_noop_inside_field(x in 0.0f32..800.0, y in 0.0f32..600.0) {
            let mut pos = Vec2::new(x, y);
            wrap(&mut pos, &field());
            prop_assert_eq!(pos, Vec2::new(x, y));
        }

        #[test]
        fn wrap_lands_inside_extended_bounds(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let mut pos = Vec2::new(x, y);
            wrap(&mut pos, &field());
            prop_assert!(pos.x >= -33.0 && pos.x <= 833.0);
            prop_assert!(pos.y >= -33.0 && pos.y <= 633.0);
        }
    }
}
