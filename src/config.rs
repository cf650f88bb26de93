//! Simulation configuration
//!
//! Fixed at construction; the simulation keeps its own copy and never writes to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::AsteroidSize;

/// Errors raised while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`seed_exclusion` must not be negative, got {0}")]
    NegativeExclusion(i32),
    #[error("`projectile_lifetime` must be at least one frame")]
    ZeroLifetime,
    #[error("`wrap_margin` ({margin}) is smaller than the largest radius ({largest})")]
    MarginTooSmall { margin: f32, largest: f32 },
}

/// Tuning for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Distance past an edge before an entity wraps to the opposite side
    pub wrap_margin: f32,

    // === Seeding ===
    pub initial_asteroids: u32,
    /// Per-axis keep-out distance from the center for seeded asteroids
    pub seed_exclusion: i32,

    // === Ship ===
    pub ship_radius: f32,
    /// Degrees per frame
    pub ship_turn: f32,
    pub ship_thrust: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    /// Frames a projectile survives
    pub projectile_lifetime: u32,

    // === Asteroids ===
    pub large_radius: f32,
    pub large_speed: f32,
    pub large_spin: f32,
    pub medium_radius: f32,
    pub medium_spin: f32,
    pub small_radius: f32,
    pub small_spin: f32,
    /// Speed added along +x to every descendant asteroid
    pub fragment_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            wrap_margin: WRAP_MARGIN,

            initial_asteroids: INITIAL_ASTEROIDS,
            seed_exclusion: SEED_EXCLUSION,

            ship_radius: SHIP_RADIUS,
            ship_turn: SHIP_TURN,
            ship_thrust: SHIP_THRUST,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,

            large_radius: LARGE_RADIUS,
            large_speed: LARGE_SPEED,
            large_spin: LARGE_SPIN,
            medium_radius: MEDIUM_RADIUS,
            medium_spin: MEDIUM_SPIN,
            small_radius: SMALL_RADIUS,
            small_spin: SMALL_SPIN,
            fragment_speed: FRAGMENT_SPEED,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("wrap_margin", self.wrap_margin),
            ("ship_radius", self.ship_radius),
            ("projectile_radius", self.projectile_radius),
            ("large_radius", self.large_radius),
            ("medium_radius", self.medium_radius),
            ("small_radius", self.small_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let finite = [
            ("ship_turn", self.ship_turn),
            ("ship_thrust", self.ship_thrust),
            ("projectile_speed", self.projectile_speed),
            ("large_speed", self.large_speed),
            ("large_spin", self.large_spin),
            ("medium_spin", self.medium_spin),
            ("small_spin", self.small_spin),
            ("fragment_speed", self.fragment_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.seed_exclusion < 0 {
            return Err(ConfigError::NegativeExclusion(self.seed_exclusion));
        }

        if self.projectile_lifetime == 0 {
            return Err(ConfigError::ZeroLifetime);
        }

        let largest = self.largest_radius();
        if self.wrap_margin < largest {
            log::warn!(
                "wrap margin {} would let entities pop at the edges (largest radius {})",
                self.wrap_margin,
                largest
            );
            return Err(ConfigError::MarginTooSmall {
                margin: self.wrap_margin,
                largest,
            });
        }

        Ok(())
    }

    /// Collision radius of an asteroid size class
    pub fn asteroid_radius(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Large => self.large_radius,
            AsteroidSize::Medium => self.medium_radius,
            AsteroidSize::Small => self.small_radius,
        }
    }

    /// Cosmetic spin of an asteroid size class (degrees per frame)
    pub fn asteroid_spin(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Large => self.large_spin,
            AsteroidSize::Medium => self.medium_spin,
            AsteroidSize::Small => self.small_spin,
        }
    }

    /// Largest radius of any entity kind
    pub fn largest_radius(&self) -> f32 {
        [
            self.ship_radius,
            self.projectile_radius,
            self.large_radius,
            self.medium_radius,
            self.small_radius,
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }

    /// Center of the playfield
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_margin_covers_largest_radius() {
        let config = SimConfig::default();
        assert_eq!(config.largest_radius(), LARGE_RADIUS);
        assert!(config.wrap_margin >= config.largest_radius());
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "width": 1024.0, "initial_asteroids": 8 }"#)
            .expect("partial config should parse");
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.initial_asteroids, 8);
        assert_eq!(config.height, FIELD_HEIGHT);
        assert_eq!(config.projectile_lifetime, PROJECTILE_LIFETIME);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SimConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_small_margin() {
        let err = SimConfig::from_json(r#"{ "wrap_margin": 10.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MarginTooSmall { .. }));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let config = SimConfig {
            small_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "small_radius", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let config = SimConfig {
            projectile_lifetime: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroLifetime)));
    }

    #[test]
    fn test_rejects_non_finite_ship_tuning() {
        let config = SimConfig {
            ship_thrust: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "ship_thrust", .. })
        ));

        let config = SimConfig {
            ship_turn: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "ship_turn", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_speeds() {
        for config in [
            SimConfig {
                projectile_speed: f32::NAN,
                ..Default::default()
            },
            SimConfig {
                large_speed: f32::NAN,
                ..Default::default()
            },
            SimConfig {
                fragment_speed: f32::NEG_INFINITY,
                ..Default::default()
            },
        ] {
            assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
        }
    }

    #[test]
    fn test_rejects_non_finite_spin() {
        for config in [
            SimConfig {
                large_spin: f32::NAN,
                ..Default::default()
            },
            SimConfig {
                medium_spin: f32::INFINITY,
                ..Default::default()
            },
            SimConfig {
                small_spin: f32::NAN,
                ..Default::default()
            },
        ] {
            assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));
        }
    }

    #[test]
    fn test_negative_spin_is_fine() {
        let config = SimConfig {
            large_spin: -4.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_seed_exclusion() {
        let err = SimConfig::from_json(r#"{ "seed_exclusion": -300 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeExclusion(-300)));

        let config = SimConfig {
            seed_exclusion: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_size_lookups() {
        let config = SimConfig::default();
        assert_eq!(config.asteroid_radius(AsteroidSize::Medium), MEDIUM_RADIUS);
        assert_eq!(config.asteroid_spin(AsteroidSize::Small), SMALL_SPIN);
        assert_eq!(config.center(), glam::Vec2::new(400.0, 300.0));
    }
}
