//! Collision detection and resolution
//!
//! Contact is an axis-aligned box test: a pair touches when the per-axis
//! distance between centers is strictly below the sum of their radii on both
//! axes. This is deliberately not a circle test, so corners of the box count.

use super::entity::{Asteroid, Body, FlyingObject, Projectile, Ship};
use super::fragment;
use super::state::IdGen;
use crate::config::SimConfig;

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Projectile-asteroid hits resolved this pass
    pub asteroid_hits: u32,
    /// Asteroids spawned by fragmentation
    pub spawned: u32,
    /// The ship was destroyed this pass
    pub ship_destroyed: bool,
}

/// Box proximity test between two bodies
#[inline]
pub fn box_overlap(a: &Body, b: &Body) -> bool {
    let reach = a.radius + b.radius;
    let delta = (a.pos - b.pos).abs();
    delta.x < reach && delta.y < reach
}

/// Box test that only counts live pairs
#[inline]
pub fn live_contact(a: &Body, b: &Body) -> bool {
    a.alive && b.alive && box_overlap(a, b)
}

/// Resolve projectile-asteroid hits, then asteroid-ship hits
///
/// Hit projectiles and asteroids are marked dead (not removed), and
/// fragments are appended to `asteroids` after the projectile pass, so they
/// can still reach the ship this frame. A shattered asteroid is dead for
/// every later pair, so each projectile scores at most once.
pub fn resolve_collisions(
    ship: &mut Ship,
    asteroids: &mut Vec<Asteroid>,
    projectiles: &mut [Projectile],
    ids: &mut IdGen,
    config: &SimConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut fragments = Vec::new();

    for shot in projectiles.iter_mut() {
        for rock in asteroids.iter_mut() {
            if !live_contact(&shot.body, &rock.body) {
                continue;
            }
            shot.body.kill();
            report.asteroid_hits += 1;
            fragments.extend(fragment::shatter(rock, config, || ids.next_id()));
            break;
        }
    }

    report.spawned = fragments.len() as u32;
    asteroids.extend(fragments);

    if ship.is_alive() {
        if let Some(rock) = asteroids
            .iter()
            .find(|rock| live_contact(&ship.body, &rock.body))
        {
            ship.body.kill();
            report.ship_destroyed = true;
            log::info!("ship destroyed by asteroid {} ({:?})", rock.body.id, rock.size);
        }
    }

    report
}
