//! Enemy rocket spawning
//!
//! Rockets enter at a random point on the top edge and dive at a random
//! surviving city or battery.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Projectile};

/// Spawn one rocket aimed at a random surviving structure.
///
/// Returns the new rocket's ID, or `None` when nothing is left to target.
pub fn spawn_rocket(state: &mut GameState) -> Option<u32> {
    let targets: Vec<Vec2> = state
        .surviving_cities()
        .map(|c| c.pos)
        .chain(state.surviving_batteries().map(|b| b.pos))
        .collect();
    if targets.is_empty() {
        return None;
    }

    let target = targets[state.rng.random_range(0..targets.len())];
    let start = Vec2::new(state.rng.random::<f32>() * state.field.width, 0.0);
    let (min, max) = (state.tuning.rocket_speed_min, state.tuning.rocket_speed_max);
    let speed = min + state.rng.random::<f32>() * (max - min);

    let id = state.next_entity_id();
    state.rockets.push(Projectile::new(id, start, target, speed));
    log::debug!("Rocket {} spawned at x={:.0} -> {:?}", id, start.x, target);
    Some(id)
}

/// Per-tick spawn roll; the chance rises with score
pub fn roll_spawn(state: &mut GameState) -> Option<u32> {
    let chance = state.tuning.spawn_chance(state.score);
    if state.rng.random::<f64>() < chance {
        spawn_rocket(state)
    } else {
        None
    }
}
