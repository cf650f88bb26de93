//! Simulation state
//!
//! One ship, an unordered set of asteroids and an unordered set of
//! projectiles. Entities are marked dead during a frame and removed by
//! [`SimState::purge`] at its end.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{CollisionReport, resolve_collisions};
use super::entity::{Asteroid, FlyingObject, Projectile, RenderEntity, Ship};
use super::kinematics::Playfield;
use super::rng::RandomSource;
use crate::config::{ConfigError, SimConfig};

/// Monotonic entity id allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdGen {
    next: u32,
}

impl Default for IdGen {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGen {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Complete simulation state
///
/// Only constructible from a validated [`SimConfig`], which it then keeps
/// private so the tuning cannot change mid-run.
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    config: SimConfig,
    /// Completed frames
    pub frame: u64,
    /// Never replaced once dead
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub ids: IdGen,
}

impl SimState {
    /// Seed a run from a PCG stream
    pub fn new(seed: u64, config: SimConfig) -> Result<Self, ConfigError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        log::info!("seeding simulation with seed {}", seed);
        Self::with_source(config, &mut rng)
    }

    /// Seed a run from any random source
    pub fn with_source(
        config: SimConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        let mut state = Self::empty(config)?;
        for _ in 0..state.config.initial_asteroids {
            state.seed_asteroid(rng);
        }
        log::info!(
            "simulation ready: {}x{} field, {} asteroids",
            state.config.width,
            state.config.height,
            state.asteroids.len()
        );
        Ok(state)
    }

    /// Ship only, no asteroids
    pub fn empty(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ids = IdGen::default();
        let ship = Ship::new(ids.next_id(), &config);
        Ok(Self {
            config,
            frame: 0,
            ship,
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            ids,
        })
    }

    /// Tuning for this run
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Wrap-around bounds
    pub fn field(&self) -> Playfield {
        Playfield::from(&self.config)
    }

    /// Place one Large asteroid away from the center with a random heading
    fn seed_asteroid(&mut self, rng: &mut impl RandomSource) {
        let heading = rng.int_in(0, 360) as f32;
        let x = away_from_center(rng, self.config.width, self.config.seed_exclusion);
        let y = away_from_center(rng, self.config.height, self.config.seed_exclusion);
        let id = self.ids.next_id();
        self.asteroids
            .push(Asteroid::large(id, Vec2::new(x, y), heading, &self.config));
    }

    /// Add an asteroid (tests and scripted setups)
    pub fn spawn_asteroid(&mut self, build: impl FnOnce(u32, &SimConfig) -> Asteroid) -> u32 {
        let id = self.ids.next_id();
        self.asteroids.push(build(id, &self.config));
        id
    }

    /// Fire one projectile from the ship's position, heading and momentum
    ///
    /// Returns the new projectile's id, or `None` if the ship is dead.
    pub fn fire(&mut self) -> Option<u32> {
        if !self.ship.is_alive() {
            log::warn!("fire ignored: ship is destroyed");
            return None;
        }
        let id = self.ids.next_id();
        let mut shot = Projectile::new(
            id,
            &self.ship.body,
            self.config.projectile_radius,
            self.config.projectile_lifetime,
        );
        shot.fire(self.ship.body.angle, self.config.projectile_speed);
        log::debug!("projectile {} fired at {:.1} degrees", id, self.ship.body.angle);
        self.projectiles.push(shot);
        Some(id)
    }

    /// Mark hits, shatter asteroids and append their fragments
    pub fn resolve_collisions(&mut self) -> CollisionReport {
        resolve_collisions(
            &mut self.ship,
            &mut self.asteroids,
            &mut self.projectiles,
            &mut self.ids,
            &self.config,
        )
    }

    /// Move every live entity one frame; asteroids spin, projectiles count down
    pub fn advance_all(&mut self) {
        let field = self.field();

        self.ship.advance(&field);

        for rock in self.asteroids.iter_mut().filter(|a| a.is_alive()) {
            rock.advance(&field);
            rock.spin(&self.config);
        }

        for shot in self.projectiles.iter_mut().filter(|p| p.is_alive()) {
            shot.advance(&field);
            shot.tick_lifetime();
        }
    }

    /// Drop dead asteroids and projectiles
    pub fn purge(&mut self) {
        self.projectiles.retain(|p| p.is_alive());
        self.asteroids.retain(|a| a.is_alive());
    }

    /// Poses of every live entity, ship first
    pub fn snapshot(&self) -> Vec<RenderEntity> {
        std::iter::once(self.ship.render())
            .chain(self.asteroids.iter().map(|a| a.render()))
            .chain(self.projectiles.iter().map(|p| p.render()))
            .flatten()
            .collect()
    }

    /// Ship destroyed or field cleared
    pub fn is_over(&self) -> bool {
        !self.ship.is_alive() || self.asteroids.iter().all(|a| !a.is_alive())
    }

    /// Live asteroid count
    pub fn live_asteroids(&self) -> usize {
        self.asteroids.iter().filter(|a| a.is_alive()).count()
    }
}

/// A coordinate on one axis, at least `exclusion` away from the middle
fn away_from_center(rng: &mut impl RandomSource, extent: f32, exclusion: i32) -> f32 {
    let half = (extent / 2.0) as i32;
    let v = if rng.coin() {
        rng.int_in(0, (half - exclusion).max(0))
    } else {
        rng.int_in((half + exclusion).min(extent as i32), extent as i32)
    };
    v as f32
}
