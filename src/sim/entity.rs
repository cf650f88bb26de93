//! Flying objects: ship, projectiles and asteroids
//!
//! Every entity shares a [`Body`] (kinematic state, radius, liveness). The
//! [`FlyingObject`] trait gives uniform access to it; per-kind behavior
//! (spawn velocity, spin, lifetime) lives on the concrete types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{self, Playfield, Position, Velocity};
use crate::config::SimConfig;
use crate::consts::FACING_OFFSET;
use crate::heading_vector;

/// Asteroid size classes, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

/// Variant tag handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Projectile,
    Asteroid(AsteroidSize),
}

/// State common to every flying object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Position,
    pub vel: Velocity,
    /// Orientation in degrees, never normalized
    pub angle: f32,
    /// Fixed at construction
    pub radius: f32,
    pub alive: bool,
}

impl Body {
    pub fn new(id: u32, pos: Position, vel: Velocity, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "entity radius must be positive");
        Self {
            id,
            pos,
            vel,
            angle: 0.0,
            radius,
            alive: true,
        }
    }

    /// Wrap then move one frame. Dead bodies stay put.
    pub fn advance(&mut self, field: &Playfield) {
        if self.alive {
            kinematics::advance(&mut self.pos, self.vel, field);
        }
    }

    /// Mark dead. There is no way back.
    #[inline]
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Uniform access to any entity's body
pub trait FlyingObject {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn kind(&self) -> EntityKind;

    #[inline]
    fn is_alive(&self) -> bool {
        self.body().alive
    }

    fn advance(&mut self, field: &Playfield) {
        self.body_mut().advance(field);
    }

    /// Pose for the renderer, `None` once dead
    fn render(&self) -> Option<RenderEntity> {
        let body = self.body();
        body.alive.then(|| RenderEntity {
            id: body.id,
            kind: self.kind(),
            pos: body.pos,
            angle: body.angle,
            radius: body.radius,
        })
    }
}

/// What a renderer needs to draw one live entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEntity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub angle: f32,
    pub radius: f32,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
}

impl Ship {
    /// Ship at rest in the middle of the field, facing up
    pub fn new(id: u32, config: &SimConfig) -> Self {
        Self {
            body: Body::new(id, config.center(), Vec2::ZERO, config.ship_radius),
        }
    }

    pub fn rotate_left(&mut self, turn: f32) {
        self.body.angle += turn;
    }

    pub fn rotate_right(&mut self, turn: f32) {
        self.body.angle -= turn;
    }

    /// Accelerate along the current facing. No drag and no speed cap.
    pub fn thrust(&mut self, amount: f32) {
        self.body.vel += heading_vector(self.body.angle, FACING_OFFSET) * amount;
    }
}

impl FlyingObject for Ship {
    fn body(&self) -> &Body {
        &self.body
    }
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
    fn kind(&self) -> EntityKind {
        EntityKind::Ship
    }
}

/// A projectile with a frame countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Frames left before it expires
    pub lifetime: u32,
}

impl Projectile {
    /// Spawn at the shooter's position, inheriting its velocity
    pub fn new(id: u32, shooter: &Body, radius: f32, lifetime: u32) -> Self {
        Self {
            body: Body::new(id, shooter.pos, shooter.vel, radius),
            lifetime,
        }
    }

    /// Add a muzzle impulse along `angle` on top of the inherited velocity
    pub fn fire(&mut self, angle: f32, speed: f32) {
        self.body.vel += heading_vector(angle, FACING_OFFSET) * speed;
    }

    /// Count down one frame; expires when the counter hits zero
    pub fn tick_lifetime(&mut self) {
        if !self.body.alive {
            return;
        }
        self.lifetime = self.lifetime.saturating_sub(1);
        if self.lifetime == 0 {
            self.body.kill();
        }
    }
}

impl FlyingObject for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
    fn kind(&self) -> EntityKind {
        EntityKind::Projectile
    }
}

/// An asteroid of some size class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    pub size: AsteroidSize,
}

impl Asteroid {
    /// Seeded asteroid drifting along `heading` (degrees, 0 = +x) at base speed
    pub fn large(id: u32, pos: Position, heading: f32, config: &SimConfig) -> Self {
        let vel = heading_vector(heading, 0.0) * config.large_speed;
        Self {
            body: Body::new(id, pos, vel, config.large_radius),
            size: AsteroidSize::Large,
        }
    }

    /// Descendant asteroid: inherited velocity plus a push along `heading`
    pub fn descendant(
        id: u32,
        size: AsteroidSize,
        pos: Position,
        inherited: Velocity,
        heading: f32,
        config: &SimConfig,
    ) -> Self {
        let vel = inherited + heading_vector(heading, 0.0) * config.fragment_speed;
        Self {
            body: Body::new(id, pos, vel, config.asteroid_radius(size)),
            size,
        }
    }

    /// Cosmetic spin, one frame's worth
    pub fn spin(&mut self, config: &SimConfig) {
        self.body.angle += config.asteroid_spin(self.size);
    }
}

impl FlyingObject for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }
    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
    fn kind(&self) -> EntityKind {
        EntityKind::Asteroid(self.size)
    }
}
