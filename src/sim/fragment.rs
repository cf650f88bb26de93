//! Asteroid fragmentation rules
//!
//! Large -> 1 Small + 2 Medium, Medium -> 2 Small, Small -> nothing.
//! Children spawn on the parent's position with the parent's velocity plus a
//! fixed per-slot offset.

use glam::Vec2;

use super::entity::{Asteroid, AsteroidSize};
use crate::config::SimConfig;
use crate::consts::{LARGE_SPLIT_MEDIUM, LARGE_SPLIT_SMALL, MEDIUM_SPLIT};

/// Per-child (size, velocity offset) for each size class
pub fn children_of(size: AsteroidSize) -> &'static [(AsteroidSize, Vec2)] {
    const LARGE: [(AsteroidSize, Vec2); 3] = [
        (
            AsteroidSize::Small,
            Vec2::new(LARGE_SPLIT_SMALL.0, LARGE_SPLIT_SMALL.1),
        ),
        (AsteroidSize::Medium, Vec2::new(0.0, LARGE_SPLIT_MEDIUM)),
        (AsteroidSize::Medium, Vec2::new(0.0, -LARGE_SPLIT_MEDIUM)),
    ];
    const MEDIUM: [(AsteroidSize, Vec2); 2] = [
        (AsteroidSize::Small, Vec2::new(MEDIUM_SPLIT, MEDIUM_SPLIT)),
        (AsteroidSize::Small, Vec2::new(-MEDIUM_SPLIT, -MEDIUM_SPLIT)),
    ];

    match size {
        AsteroidSize::Large => &LARGE,
        AsteroidSize::Medium => &MEDIUM,
        AsteroidSize::Small => &[],
    }
}

/// Destroy `parent` and return its descendants
///
/// `next_id` hands out an id per child.
pub fn shatter(
    parent: &mut Asteroid,
    config: &SimConfig,
    mut next_id: impl FnMut() -> u32,
) -> Vec<Asteroid> {
    debug_assert!(parent.body.alive, "shattering a dead asteroid");
    parent.body.kill();

    let children: Vec<Asteroid> = children_of(parent.size)
        .iter()
        .map(|&(size, offset)| {
            Asteroid::descendant(
                next_id(),
                size,
                parent.body.pos,
                parent.body.vel + offset,
                0.0,
                config,
            )
        })
        .collect();

    log::debug!(
        "asteroid {} ({:?}) shattered into {} pieces",
        parent.body.id,
        parent.size,
        children.len()
    );

    children
}
