//! Fixed-increment simulation tick
//!
//! Core game loop that advances the simulation one frame at a time. Speeds
//! are per-tick values tuned for a ~60 Hz host, not scaled by real time.

use glam::Vec2;

use super::autopilot;
use super::collision::{resolve_explosion_hits, resolve_rocket_impact};
use super::events::GameEvent;
use super::explosion::update_explosions;
use super::motion::advance_all;
use super::spawner::roll_spawn;
use super::state::{ExplosionKind, GameState, GameStatus, Projectile};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Screen points clicked since the last tick
    pub fire_at: Vec<Vec2>,
    /// Idle/demo mode - the autopilot fires on the player's behalf
    pub autopilot: bool,
}

/// Apply queued input, then advance one tick. Does nothing outside `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_playing() {
        return;
    }

    for &point in &input.fire_at {
        fire_at(state, point);
    }
    if input.autopilot
        && let Some(aim) = autopilot::choose_shot(state)
    {
        fire_at(state, aim);
    }

    step(state);
}

/// The ordered per-tick pipeline: rockets, missiles, explosions, collisions,
/// spawn roll, outcome check.
///
/// Rocket arrivals are fully resolved before any interception test, so an
/// impact flash can already catch rockets in the same tick.
pub fn step(state: &mut GameState) {
    if !state.is_playing() {
        return;
    }
    state.time_ticks += 1;

    for rocket in advance_all(&mut state.rockets) {
        resolve_rocket_impact(state, &rocket);
    }

    for missile in advance_all(&mut state.missiles) {
        state.spawn_explosion(ExplosionKind::Blast, missile.target);
    }

    update_explosions(state);

    resolve_explosion_hits(state);

    roll_spawn(state);

    check_outcome(state);
}

/// Move to `Won` or `Lost` if either condition holds. Loss takes precedence
/// when both are met in the same tick. Finished sessions are left alone;
/// only a restart leaves `Won` or `Lost`.
pub fn check_outcome(state: &mut GameState) {
    if !state.is_playing() {
        return;
    }
    let lost = state.batteries.iter().all(|b| b.destroyed);
    let won = state.score >= state.tuning.win_score;

    if lost {
        state.set_status(GameStatus::Lost);
    } else if won {
        state.set_status(GameStatus::Won);
    }
}

/// Launch an interceptor at a screen point.
///
/// The firing battery is the standing battery with ammo whose x is closest to
/// the clicked x (first found wins ties). Returns the missile ID, or `None`
/// when not playing or no battery can fire.
pub fn fire_at(state: &mut GameState, point: Vec2) -> Option<u32> {
    if !state.is_playing() {
        log::trace!("Ignoring fire at {:?} while {:?}", point, state.status);
        return None;
    }

    let mut best: Option<usize> = None;
    let mut best_dist = f32::INFINITY;
    for (i, battery) in state.batteries.iter().enumerate() {
        if !battery.can_fire() {
            continue;
        }
        let dist = (battery.pos.x - point.x).abs();
        if dist < best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    let Some(index) = best else {
        log::debug!("No battery can fire at {:?}", point);
        return None;
    };

    let missile_id = state.next_entity_id();
    let speed = state.tuning.missile_speed;
    let battery = &mut state.batteries[index];
    battery.ammo -= 1;
    let (battery_id, origin) = (battery.id, battery.pos);

    state
        .missiles
        .push(Projectile::new(missile_id, origin, point, speed));
    state.events.push(GameEvent::MissileLaunched {
        battery_id,
        missile_id,
        target: point,
    });
    Some(missile_id)
}
