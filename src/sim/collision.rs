//! Impact and interception resolution
//!
//! Two pathways run every tick:
//! - a rocket that arrives at its target wrecks the structure it was aimed at
//!   and leaves a small impact flash
//! - a rocket strictly inside an explosion radius is destroyed, scores, and
//!   detonates as a chain explosion

use glam::Vec2;

use super::events::GameEvent;
use super::state::{EnemyRocket, ExplosionKind, GameState};

/// Structure wrecked by a rocket impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTarget {
    City(u32),
    Battery(u32),
}

/// Resolve a rocket that reached its target point.
///
/// Cities are matched before batteries and at most one structure is
/// destroyed. The impact flash is spawned whether or not anything was hit.
pub fn resolve_rocket_impact(state: &mut GameState, rocket: &EnemyRocket) -> Option<ImpactTarget> {
    let tolerance = state.tuning.impact_tolerance;
    let within = |pos: Vec2| (pos.x - rocket.target.x).abs() < tolerance;

    let hit = if let Some(city) = state
        .cities
        .iter_mut()
        .find(|c| !c.destroyed && within(c.pos))
    {
        city.destroyed = true;
        Some(ImpactTarget::City(city.id))
    } else if let Some(battery) = state
        .batteries
        .iter_mut()
        .find(|b| !b.destroyed && within(b.pos))
    {
        battery.destroyed = true;
        Some(ImpactTarget::Battery(battery.id))
    } else {
        None
    };

    state.events.push(GameEvent::RocketImpact {
        rocket_id: rocket.id,
        pos: rocket.target,
    });
    match hit {
        Some(ImpactTarget::City(city_id)) => {
            log::debug!("Rocket {} destroyed city {}", rocket.id, city_id);
            state.events.push(GameEvent::CityDestroyed { city_id });
        }
        Some(ImpactTarget::Battery(battery_id)) => {
            log::info!("Rocket {} destroyed battery {}", rocket.id, battery_id);
            state.events.push(GameEvent::BatteryDestroyed { battery_id });
        }
        None => log::debug!("Rocket {} hit open ground", rocket.id),
    }

    state.spawn_explosion(ExplosionKind::Impact, rocket.target);
    hit
}

/// Destroy every rocket strictly inside an explosion. Returns the kill count.
///
/// Explosions are visited in order; only those present when the pass starts
/// are tested, so chain explosions created here first act next tick.
pub fn resolve_explosion_hits(state: &mut GameState) -> u32 {
    let mut kills = 0;
    let existing = state.explosions.len();

    for i in 0..existing {
        if state.rockets.is_empty() {
            break;
        }
        let (center, radius) = {
            let explosion = &state.explosions[i];
            (explosion.pos, explosion.radius)
        };

        let (hit, survivors): (Vec<EnemyRocket>, Vec<EnemyRocket>) =
            std::mem::take(&mut state.rockets)
                .into_iter()
                .partition(|rocket| center.distance(rocket.pos) < radius);
        state.rockets = survivors;

        for rocket in hit {
            kills += 1;
            state.score += state.tuning.points_per_kill;
            log::debug!("Rocket {} intercepted at {:?}", rocket.id, rocket.pos);
            state.events.push(GameEvent::RocketIntercepted {
                rocket_id: rocket.id,
                pos: rocket.pos,
            });
            state.spawn_explosion(ExplosionKind::Chain, rocket.pos);
        }
    }

    kills
}
