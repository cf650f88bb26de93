//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, no wall-clock time
//! - Seeded or injected randomness only, and only for initial placement
//! - Dead entities are flagged during a frame and compacted at its end
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod fragment;
pub mod kinematics;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, box_overlap, resolve_collisions};
pub use entity::{
    Asteroid, AsteroidSize, Body, EntityKind, FlyingObject, Projectile, RenderEntity, Ship,
};
pub use fragment::shatter;
pub use kinematics::{Playfield, Position, Velocity, advance, wrap};
pub use rng::RandomSource;
pub use state::{IdGen, SimState};
pub use tick::{EdgeTrigger, FrameInput, tick};
