//! Rockfield - simulation core for a wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, fragmentation, frame update)
//! - `config`: Tuning constants gathered into a read-only configuration
//!
//! Rendering, input polling and the frame clock live outside this crate. A
//! renderer reads [`sim::SimState::snapshot`], an input layer fills a
//! [`sim::FrameInput`] and the frame driver calls [`sim::tick`].

pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// How far past an edge an entity travels before it wraps
    pub const WRAP_MARGIN: f32 = 33.0;

    /// Asteroids seeded at start
    pub const INITIAL_ASTEROIDS: u32 = 5;
    /// Seeded asteroids keep at least this far from the center on each axis
    pub const SEED_EXCLUSION: i32 = 50;

    /// Ship
    pub const SHIP_RADIUS: f32 = 30.0;
    pub const SHIP_TURN: f32 = 3.0; // degrees per frame
    pub const SHIP_THRUST: f32 = 0.25;

    /// Projectiles
    pub const PROJECTILE_RADIUS: f32 = 3.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_LIFETIME: u32 = 60; // frames

    /// Large asteroid
    pub const LARGE_RADIUS: f32 = 33.0;
    pub const LARGE_SPEED: f32 = 1.5;
    pub const LARGE_SPIN: f32 = 1.0;

    /// Medium asteroid
    pub const MEDIUM_RADIUS: f32 = 10.0;
    pub const MEDIUM_SPIN: f32 = -2.0;

    /// Small asteroid
    pub const SMALL_RADIUS: f32 = 5.0;
    pub const SMALL_SPIN: f32 = 5.0;

    /// Extra speed every descendant gets on top of its inherited velocity
    pub const FRAGMENT_SPEED: f32 = 1.5;

    /// Velocity offsets added to the parent's velocity when it shatters.
    /// Large -> Small gets a push along +x, the two Mediums split along y.
    pub const LARGE_SPLIT_SMALL: (f32, f32) = (5.0, 0.0);
    pub const LARGE_SPLIT_MEDIUM: f32 = 2.0;
    /// Medium -> two Smalls on opposite diagonals
    pub const MEDIUM_SPLIT: f32 = 1.5;

    /// Offset between "angle 0" and the +x axis for ship and projectile headings.
    /// Angle 0 faces up.
    pub const FACING_OFFSET: f32 = 90.0;
}

/// Unit vector for an angle given in degrees, rotated by `offset` degrees
///
/// Asteroid headings use offset 0 (angle 0 is +x); ship and projectile
/// headings use [`consts::FACING_OFFSET`] (angle 0 is up).
#[inline]
pub fn heading_vector(degrees: f32, offset: f32) -> Vec2 {
    Vec2::from_angle((degrees + offset).to_radians())
}
